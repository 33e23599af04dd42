// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::Random;
use std::fmt;

mod sealed {
    pub trait Sealed {}
}

/// Built-in numeric kinds the sampler knows how to draw.
///
/// Implemented for the signed integers (`i8`..`i64`, `isize`), the unsigned
/// integers (`u8`..`u64`, `usize`) and both floats. The trait is sealed, so
/// the set of kinds is closed and resolved at compile time.
pub trait Primitive:
    sealed::Sealed + Copy + PartialOrd + fmt::Debug + Send + Sync + 'static
{
    const ZERO: Self;
    const ONE: Self;

    /// Whether `[min, max)` is a usable sampling range
    fn is_valid_range(min: Self, max: Self) -> bool;

    /// Uniform value in `[min, max)`. Callers guarantee `is_valid_range(min, max)`.
    fn sample_between<R: Random + ?Sized>(random: &R, min: Self, max: Self) -> Self;
}

/// A value the sampler can produce: either a primitive or a user type whose
/// representation is a primitive (see [`impl_number!`](crate::impl_number)).
pub trait Number: Copy + fmt::Debug {
    type Repr: Primitive;

    fn from_repr(repr: Self::Repr) -> Self;
    fn into_repr(self) -> Self::Repr;
}

macro_rules! impl_signed {
    ($($t:ty),*) => {$(
        impl sealed::Sealed for $t {}

        impl Primitive for $t {
            const ZERO: Self = 0;
            const ONE: Self = 1;

            fn is_valid_range(min: Self, max: Self) -> bool {
                min < max
            }

            fn sample_between<R: Random + ?Sized>(random: &R, min: Self, max: Self) -> Self {
                let (min, max) = (min as i64, max as i64);
                let offset = match max.checked_sub(min) {
                    Some(span) => random.i64(0..span) as u64,
                    // Span exceeds i64::MAX, only possible for i64/isize bounds of opposite sign
                    None => random.u64(0..max.wrapping_sub(min) as u64),
                };
                min.wrapping_add(offset as i64) as $t
            }
        }
    )*};
}

macro_rules! impl_unsigned {
    ($($t:ty),*) => {$(
        impl sealed::Sealed for $t {}

        impl Primitive for $t {
            const ZERO: Self = 0;
            const ONE: Self = 1;

            fn is_valid_range(min: Self, max: Self) -> bool {
                min < max
            }

            fn sample_between<R: Random + ?Sized>(random: &R, min: Self, max: Self) -> Self {
                let (min, max) = (min as u64, max as u64);
                (min + random.u64(0..max - min)) as $t
            }
        }
    )*};
}

macro_rules! impl_float {
    ($($t:ty),*) => {$(
        impl sealed::Sealed for $t {}

        impl Primitive for $t {
            const ZERO: Self = 0.0;
            const ONE: Self = 1.0;

            fn is_valid_range(min: Self, max: Self) -> bool {
                min < max && min.is_finite() && max.is_finite()
            }

            fn sample_between<R: Random + ?Sized>(random: &R, min: Self, max: Self) -> Self {
                let width = max - min;
                loop {
                    // Narrowing an f64 draw to f32 can round up to 1.0
                    let unit = random.f64() as $t;
                    let value = if width.is_finite() {
                        min + unit * width
                    } else {
                        min * (1.0 - unit) + max * unit
                    };
                    if value >= min && value < max {
                        return value;
                    }
                }
            }
        }
    )*};
}

impl_signed!(i8, i16, i32, i64, isize);
impl_unsigned!(u8, u16, u32, u64, usize);
impl_float!(f32, f64);

macro_rules! impl_number_for_primitive {
    ($($t:ty),*) => {$(
        impl Number for $t {
            type Repr = $t;

            fn from_repr(repr: $t) -> Self {
                repr
            }

            fn into_repr(self) -> $t {
                self
            }
        }
    )*};
}

impl_number_for_primitive!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

/// Implements [`Number`] for a single-field tuple struct over a primitive.
///
/// ```
/// use range_random_core::{impl_number, random_number, Bounds};
///
/// #[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
/// struct PlayerLevel(u8);
/// impl_number!(PlayerLevel => u8);
///
/// let level = random_number(Bounds::Between(PlayerLevel(5), PlayerLevel(25))).unwrap();
/// assert!(level >= PlayerLevel(5) && level < PlayerLevel(25));
/// ```
#[macro_export]
macro_rules! impl_number {
    ($name:ident => $repr:ty) => {
        impl $crate::Number for $name {
            type Repr = $repr;

            fn from_repr(repr: $repr) -> Self {
                $name(repr)
            }

            fn into_repr(self) -> $repr {
                self.0
            }
        }
    };
}
