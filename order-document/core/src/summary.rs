// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::{Order, OrderError};
use time::format_description::well_known::Rfc3339;

/// Human-readable report of an order, one entry per output line.
///
/// Lines that refer to the first, second or third item are skipped when the
/// order has fewer items.
pub fn order_summary(order: &Order) -> Result<Vec<String>, OrderError> {
    let mut lines = vec![
        format!("Order ID: {}", order.order_id),
        format!("Customer Name: {}", order.customer.full_name()),
        format!("Customer Email: {}", order.customer.email),
        format!("Number of items: {}", order.items.len()),
    ];

    if let Some(first) = order.items.first() {
        lines.push(format!("First item name: {}", first.product_name));
        lines.push(format!("First item quantity: {}", first.quantity));
        lines.push(format!(
            "{} features: [{}]",
            first.product_name,
            first.features.join(" ")
        ));
    }
    if let Some(second) = order.items.get(1) {
        lines.push(format!(
            "{} in stock: {}",
            second.product_name, second.availability.in_stock
        ));
    }
    if let Some(third) = order.items.get(2) {
        if let (false, Some(date)) = (
            third.availability.in_stock,
            third.availability.estimated_restock_date,
        ) {
            lines.push(format!(
                "{} estimated restock date: {}",
                third.product_name, date
            ));
        }
    }

    lines.push(format!("Payment Method: {}", order.payment_info.method));
    lines.push(format!(
        "Total Amount Paid: {:.2} {}",
        order.payment_info.amount_paid, order.payment_info.currency
    ));
    lines.push(format!("Shipping Status: {}", order.shipping_info.status));
    lines.push(format!("Order Date: {}", order.order_date.format(&Rfc3339)?));
    lines.push(format!(
        "Notes: {}",
        order.notes.as_deref().unwrap_or("(null)")
    ));

    lines.push(String::new());
    lines.push("Customer Phone Numbers:".to_string());
    for phone in &order.customer.phone_numbers {
        lines.push(format!("  Type: {}, Number: {}", phone.kind, phone.number));
    }

    lines.push(String::new());
    lines.push("Order Items:".to_string());
    for item in &order.items {
        lines.push(format!(
            "  - {} (x{}) @ {:.2} each. Total: {:.2}",
            item.product_name, item.quantity, item.unit_price, item.total_price
        ));
        lines.push(format!("    Features: [{}]", item.features.join(" ")));
        lines.push(format!("    Availability: {}", item.availability.describe()));
    }

    Ok(lines)
}
