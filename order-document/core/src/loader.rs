// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::{Order, OrderError};
use std::fs;
use std::path::Path;

pub fn parse_order(json: &str) -> Result<Order, OrderError> {
    let order: Order = serde_json::from_str(json)?;
    Ok(order)
}

pub fn load_order(path: impl AsRef<Path>) -> Result<Order, OrderError> {
    let contents = fs::read_to_string(path)?;
    parse_order(&contents)
}
