// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::{Bounds, FastrandRandom, Number, Primitive, Random, RangeError};

/// Uniform sampler over half-open ranges, generic over its entropy source
#[derive(Debug, Clone, Default)]
pub struct RangeRandom<R: Random = FastrandRandom> {
    random: R,
}

impl<R: Random> RangeRandom<R> {
    pub fn new(random: R) -> Self {
        Self { random }
    }

    pub fn random(&self) -> &R {
        &self.random
    }

    /// Draws one value in the range described by `bounds`
    pub fn sample<T: Number>(&self, bounds: Bounds<T>) -> Result<T, RangeError<T>> {
        random_number_with(&self.random, bounds)
    }

    /// Same as [`sample`](Self::sample) for a positional list of 0, 1 or 2 bounds
    pub fn sample_args<T: Number>(&self, args: &[T]) -> Result<T, RangeError<T>> {
        self.sample(Bounds::from_args(args)?)
    }

    /// Validates `bounds` once and yields an endless stream of draws
    pub fn sample_iter<T: Number>(
        &self,
        bounds: Bounds<T>,
    ) -> Result<impl Iterator<Item = T> + '_, RangeError<T>> {
        let (min, max) = bounds.validate()?;
        let (min, max) = (min.into_repr(), max.into_repr());
        Ok(std::iter::repeat_with(move || {
            T::from_repr(T::Repr::sample_between(&self.random, min, max))
        }))
    }
}

/// Draws from the process-wide source
pub fn random_number<T: Number>(bounds: Bounds<T>) -> Result<T, RangeError<T>> {
    random_number_with(&FastrandRandom, bounds)
}

/// Draws from the process-wide source with 0, 1 or 2 positional bounds
pub fn random_number_from_args<T: Number>(args: &[T]) -> Result<T, RangeError<T>> {
    random_number(Bounds::from_args(args)?)
}

pub fn random_number_with<T: Number, R: Random + ?Sized>(
    random: &R,
    bounds: Bounds<T>,
) -> Result<T, RangeError<T>> {
    let (min, max) = bounds.validate()?;
    let value = T::Repr::sample_between(random, min.into_repr(), max.into_repr());
    Ok(T::from_repr(value))
}

/// Draws from the process-wide source. Accepts zero, one (`max`) or two
/// (`min, max`) bounds; any other count fails to compile.
///
/// ```
/// use range_random_core::range_random;
///
/// let unit: f64 = range_random!().unwrap();
/// assert!((0.0..1.0).contains(&unit));
///
/// let die = range_random!(1u8, 7).unwrap();
/// assert!((1..7).contains(&die));
/// ```
#[macro_export]
macro_rules! range_random {
    () => {
        $crate::random_number($crate::Bounds::Unit)
    };
    ($max:expr $(,)?) => {
        $crate::random_number($crate::Bounds::UpTo($max))
    };
    ($min:expr, $max:expr $(,)?) => {
        $crate::random_number($crate::Bounds::Between($min, $max))
    };
}
