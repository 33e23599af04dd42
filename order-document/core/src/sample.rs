// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

/// Three-item order used by the CLI when no file is given
pub const SAMPLE_ORDER_JSON: &str = r#"{
  "orderId": "ORD-2025-07-02-001",
  "customer": {
    "customerId": "CUST-007",
    "firstName": "Alice",
    "lastName": "Smith",
    "email": "alice.smith@example.com",
    "phoneNumbers": [
      { "type": "home", "number": "+1-555-123-4567" },
      { "type": "work", "number": "+1-555-987-6543" }
    ],
    "address": {
      "street": "123 Main St",
      "city": "Anytown",
      "state": "CA",
      "zipCode": "90210",
      "country": "USA"
    }
  },
  "items": [
    {
      "itemId": "PROD-SKU-001",
      "productName": "Laptop Pro X",
      "category": "Electronics",
      "quantity": 1,
      "unitPrice": 1200.00,
      "totalPrice": 1200.00,
      "features": ["16GB RAM", "512GB SSD", "14-inch OLED"],
      "availability": { "inStock": true, "warehouseLocation": "A-7" }
    },
    {
      "itemId": "PROD-SKU-005",
      "productName": "Wireless Mouse Elite",
      "category": "Peripherals",
      "quantity": 2,
      "unitPrice": 45.50,
      "totalPrice": 91.00,
      "features": ["Ergonomic Design", "Bluetooth 5.0"],
      "availability": { "inStock": true, "warehouseLocation": "B-2" }
    },
    {
      "itemId": "PROD-SKU-010",
      "productName": "USB-C Hub",
      "category": "Accessories",
      "quantity": 1,
      "unitPrice": 29.99,
      "totalPrice": 29.99,
      "features": ["4-port", "Power Delivery"],
      "availability": { "inStock": false, "estimatedRestockDate": "2025-07-15" }
    }
  ],
  "paymentInfo": {
    "method": "Credit Card",
    "cardNumberLast4": "4242",
    "transactionId": "TRN-987654321",
    "amountPaid": 1320.99,
    "currency": "USD"
  },
  "shippingInfo": {
    "method": "Express",
    "cost": 10.00,
    "trackingNumber": "TRACK-XYZ-12345",
    "status": "Shipped",
    "estimatedDeliveryDate": "2025-07-05"
  },
  "orderDate": "2025-07-02T12:00:00Z",
  "status": "Processing",
  "notes": null,
  "isGift": false
}"#;
