// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

/// Counts draws per bucket and scores them against a uniform distribution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Histogram {
    counts: Vec<u64>,
}

impl Histogram {
    pub fn new(buckets: usize) -> Self {
        Self {
            counts: vec![0; buckets],
        }
    }

    /// Returns false if `bucket` is out of range
    pub fn record(&mut self, bucket: usize) -> bool {
        match self.counts.get_mut(bucket) {
            Some(count) => {
                *count += 1;
                true
            }
            None => false,
        }
    }

    pub fn counts(&self) -> &[u64] {
        &self.counts
    }

    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Pearson's chi-square statistic against equal expected counts.
    /// Degrees of freedom are `buckets - 1`.
    pub fn chi_square(&self) -> f64 {
        chi_square_uniform(&self.counts)
    }
}

pub fn chi_square_uniform(counts: &[u64]) -> f64 {
    let total: u64 = counts.iter().sum();
    if counts.is_empty() || total == 0 {
        return 0.0;
    }
    let expected = total as f64 / counts.len() as f64;
    counts
        .iter()
        .map(|&observed| {
            let diff = observed as f64 - expected;
            diff * diff / expected
        })
        .sum()
}
