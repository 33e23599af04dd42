// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::ops::Range;

/// Entropy source consumed by the range sampler.
/// Implementations must be uniform over the requested range.
pub trait Random: Send + Sync {
    /// Uniform sample in `[0, 1)`
    fn f64(&self) -> f64;

    /// Uniform sample in the half-open signed range. The range is never empty.
    fn i64(&self, range: Range<i64>) -> i64;

    /// Uniform sample in the half-open unsigned range. The range is never empty.
    fn u64(&self, range: Range<u64>) -> u64;
}

impl<R: Random + ?Sized> Random for &R {
    fn f64(&self) -> f64 {
        (**self).f64()
    }
    fn i64(&self, range: Range<i64>) -> i64 {
        (**self).i64(range)
    }
    fn u64(&self, range: Range<u64>) -> u64 {
        (**self).u64(range)
    }
}
