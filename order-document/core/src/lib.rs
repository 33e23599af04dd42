// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

mod order;
pub use order::{
    Address, Availability, Customer, Item, Order, PaymentInfo, PhoneNumber, ShippingInfo,
};

mod order_error;
pub use order_error::OrderError;

mod loader;
pub use loader::{load_order, parse_order};

mod summary;
pub use summary::order_summary;

pub mod sample;
pub use sample::SAMPLE_ORDER_JSON;
