// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::Random;
use std::ops::Range;
use std::sync::{Mutex, MutexGuard};

/// Reproducible source: the same seed always yields the same sequence.
/// Draws from several threads are serialized on an internal lock.
#[derive(Debug)]
pub struct SeededRandom {
    seed: u64,
    rng: Mutex<fastrand::Rng>,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Mutex::new(fastrand::Rng::with_seed(seed)),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Restart the sequence from the original seed
    pub fn reset(&self) {
        self.rng().seed(self.seed);
    }

    fn rng(&self) -> MutexGuard<'_, fastrand::Rng> {
        // A panic while holding the lock cannot leave the generator half-updated
        self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Random for SeededRandom {
    fn f64(&self) -> f64 {
        self.rng().f64()
    }
    fn i64(&self, range: Range<i64>) -> i64 {
        self.rng().i64(range)
    }
    fn u64(&self, range: Range<u64>) -> u64 {
        self.rng().u64(range)
    }
}
