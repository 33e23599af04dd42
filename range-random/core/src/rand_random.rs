// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::Random;
use rand::distr::{Distribution, Uniform};
use rand::Rng;
use std::ops::Range;

/// Source backed by rand's thread RNG.
///
/// Integer draws go through `Uniform`, which rejects out-of-zone samples
/// instead of reducing modulo the span.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandRandom;

impl Random for RandRandom {
    fn f64(&self) -> f64 {
        rand::rng().random::<f64>()
    }

    fn i64(&self, range: Range<i64>) -> i64 {
        match Uniform::new(range.start, range.end) {
            Ok(uniform) => uniform.sample(&mut rand::rng()),
            // Empty range, never requested by the sampler
            Err(_) => range.start,
        }
    }

    fn u64(&self, range: Range<u64>) -> u64 {
        match Uniform::new(range.start, range.end) {
            Ok(uniform) => uniform.sample(&mut rand::rng()),
            Err(_) => range.start,
        }
    }
}
