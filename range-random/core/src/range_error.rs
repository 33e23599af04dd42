// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RangeError<T> {
    /// Argument list was not 0, 1 or 2 values long
    InvalidArity { count: usize },

    /// Resolved bounds do not satisfy `min < max`
    InvalidRange { min: T, max: T },
}

impl<T: fmt::Debug> fmt::Display for RangeError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RangeError::InvalidArity { count } => write!(
                f,
                "Invalid number of arguments: expected 0, 1, or 2, got {}",
                count
            ),
            RangeError::InvalidRange { min, max } => write!(
                f,
                "Invalid range: max ({:?}) must be strictly greater than min ({:?})",
                max, min
            ),
        }
    }
}

impl<T: fmt::Debug> std::error::Error for RangeError<T> {}
