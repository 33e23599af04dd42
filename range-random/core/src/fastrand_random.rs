// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::Random;
use std::ops::Range;

/// Process-wide source backed by fastrand's thread-local generator
#[derive(Debug, Clone, Copy, Default)]
pub struct FastrandRandom;

impl Random for FastrandRandom {
    fn f64(&self) -> f64 {
        fastrand::f64()
    }
    fn i64(&self, range: Range<i64>) -> i64 {
        fastrand::i64(range)
    }
    fn u64(&self, range: Range<u64>) -> u64 {
        fastrand::u64(range)
    }
}
