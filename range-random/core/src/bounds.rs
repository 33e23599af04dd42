// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::{Number, Primitive, RangeError};
use std::ops::Range;

/// Sampling bounds, one variant per accepted argument count.
///
/// Omitted lower bounds default to zero: `Unit` is `[0, 1)` and
/// `UpTo(max)` is `[0, max)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Bounds<T> {
    Unit,
    UpTo(T),
    Between(T, T),
}

impl<T: Number> Bounds<T> {
    /// Interpret a positional argument list: `[]`, `[max]` or `[min, max]`
    pub fn from_args(args: &[T]) -> Result<Self, RangeError<T>> {
        match *args {
            [] => Ok(Bounds::Unit),
            [max] => Ok(Bounds::UpTo(max)),
            [min, max] => Ok(Bounds::Between(min, max)),
            _ => Err(RangeError::InvalidArity { count: args.len() }),
        }
    }

    /// Returns `(min, max)` with the zero defaults applied
    pub fn resolve(self) -> (T, T) {
        let zero = T::from_repr(T::Repr::ZERO);
        match self {
            Bounds::Unit => (zero, T::from_repr(T::Repr::ONE)),
            Bounds::UpTo(max) => (zero, max),
            Bounds::Between(min, max) => (min, max),
        }
    }

    /// Resolves the bounds and rejects empty, inverted or non-finite ranges
    pub fn validate(self) -> Result<(T, T), RangeError<T>> {
        let (min, max) = self.resolve();
        if T::Repr::is_valid_range(min.into_repr(), max.into_repr()) {
            Ok((min, max))
        } else {
            Err(RangeError::InvalidRange { min, max })
        }
    }
}

impl<T> From<Range<T>> for Bounds<T> {
    fn from(range: Range<T>) -> Self {
        Bounds::Between(range.start, range.end)
    }
}
