// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use serde::{Deserialize, Serialize};
use time::{Date, OffsetDateTime};

// Calendar dates such as "2025-07-15", no time of day
time::serde::format_description!(calendar_date, Date, "[year]-[month]-[day]");

/// Top-level order document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub order_id: String,
    pub customer: Customer,
    pub items: Vec<Item>,
    pub payment_info: PaymentInfo,
    pub shipping_info: ShippingInfo,
    #[serde(with = "time::serde::rfc3339")]
    pub order_date: OffsetDateTime,
    pub status: String,
    /// `null` in the document
    pub notes: Option<String>,
    pub is_gift: bool,
}

impl Order {
    /// Sum of the line totals
    pub fn items_total(&self) -> f64 {
        self.items.iter().map(|item| item.total_price).sum()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub customer_id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_numbers: Vec<PhoneNumber>,
    pub address: Address,
}

impl Customer {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhoneNumber {
    #[serde(rename = "type")]
    pub kind: String,
    pub number: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub country: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub item_id: String,
    pub product_name: String,
    pub category: String,
    pub quantity: u32,
    pub unit_price: f64,
    pub total_price: f64,
    pub features: Vec<String>,
    pub availability: Availability,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Availability {
    pub in_stock: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warehouse_location: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "calendar_date::option"
    )]
    pub estimated_restock_date: Option<Date>,
}

impl Availability {
    pub fn describe(&self) -> String {
        match (self.in_stock, &self.warehouse_location, self.estimated_restock_date) {
            (true, Some(location), _) => format!("In Stock at {}", location),
            (true, None, _) => "In Stock".to_string(),
            (false, _, Some(date)) => format!("Out of Stock, estimated restock: {}", date),
            (false, _, None) => "Out of Stock, no restock date available".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentInfo {
    pub method: String,
    pub card_number_last4: String,
    pub transaction_id: String,
    pub amount_paid: f64,
    pub currency: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingInfo {
    pub method: String,
    pub cost: f64,
    pub tracking_number: String,
    pub status: String,
    #[serde(with = "calendar_date")]
    pub estimated_delivery_date: Date,
}
