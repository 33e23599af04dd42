// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::fmt;

#[derive(Debug)]
pub enum OrderError {
    /// The document could not be read
    Io(std::io::Error),

    /// The document is not valid JSON or does not match the order layout
    Parse(serde_json::Error),

    /// A timestamp could not be rendered
    Format(time::error::Format),
}

impl fmt::Display for OrderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderError::Io(e) => write!(f, "Failed to read order: {}", e),
            OrderError::Parse(e) => write!(f, "Failed to parse order: {}", e),
            OrderError::Format(e) => write!(f, "Failed to format order date: {}", e),
        }
    }
}

impl std::error::Error for OrderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            OrderError::Io(e) => Some(e),
            OrderError::Parse(e) => Some(e),
            OrderError::Format(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for OrderError {
    fn from(e: std::io::Error) -> Self {
        OrderError::Io(e)
    }
}

impl From<serde_json::Error> for OrderError {
    fn from(e: serde_json::Error) -> Self {
        OrderError::Parse(e)
    }
}

impl From<time::error::Format> for OrderError {
    fn from(e: time::error::Format) -> Self {
        OrderError::Format(e)
    }
}
