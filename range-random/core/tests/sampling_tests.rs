// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use range_random_core::{random_number_with, Bounds, Random, RangeError};
use std::collections::VecDeque;
use std::ops::Range;
use std::sync::Mutex;

#[derive(Debug, Clone, PartialEq)]
enum Draw {
    Unit,
    Signed(Range<i64>),
    Unsigned(Range<u64>),
}

/// Hands out queued unit draws and always answers integer draws with the
/// largest value of the requested range. Records every request.
struct ScriptedRandom {
    units: Mutex<VecDeque<f64>>,
    draws: Mutex<Vec<Draw>>,
}

impl ScriptedRandom {
    fn new(units: &[f64]) -> Self {
        Self {
            units: Mutex::new(units.iter().copied().collect()),
            draws: Mutex::new(Vec::new()),
        }
    }

    fn draws(&self) -> Vec<Draw> {
        self.draws.lock().unwrap().clone()
    }
}

impl Random for ScriptedRandom {
    fn f64(&self) -> f64 {
        self.draws.lock().unwrap().push(Draw::Unit);
        self.units.lock().unwrap().pop_front().unwrap_or(0.0)
    }

    fn i64(&self, range: Range<i64>) -> i64 {
        self.draws.lock().unwrap().push(Draw::Signed(range.clone()));
        range.end - 1
    }

    fn u64(&self, range: Range<u64>) -> u64 {
        self.draws.lock().unwrap().push(Draw::Unsigned(range.clone()));
        range.end - 1
    }
}

// ============================================================
// Integer kinds
// ============================================================

#[test]
fn test_signed_draw_is_offset_from_min() {
    let random = ScriptedRandom::new(&[]);
    assert_eq!(random_number_with(&random, Bounds::Between(10i32, 20)), Ok(19));
    assert_eq!(random.draws(), vec![Draw::Signed(0..10)]);
}

#[test]
fn test_narrow_signed_kind_widens_before_subtracting() {
    let random = ScriptedRandom::new(&[]);
    assert_eq!(
        random_number_with(&random, Bounds::Between(i8::MIN, i8::MAX)),
        Ok(126)
    );
    assert_eq!(random.draws(), vec![Draw::Signed(0..255)]);
}

#[test]
fn test_span_beyond_i64_falls_back_to_unsigned_draw() {
    let random = ScriptedRandom::new(&[]);
    assert_eq!(
        random_number_with(&random, Bounds::Between(i64::MIN, i64::MAX)),
        Ok(i64::MAX - 1)
    );
    assert_eq!(random.draws(), vec![Draw::Unsigned(0..u64::MAX)]);
}

#[test]
fn test_unsigned_draw_uses_unsigned_source() {
    let random = ScriptedRandom::new(&[]);
    assert_eq!(random_number_with(&random, Bounds::Between(5u8, 25)), Ok(24));
    assert_eq!(random_number_with(&random, Bounds::UpTo(3usize)), Ok(2));
    assert_eq!(
        random.draws(),
        vec![Draw::Unsigned(0..20), Draw::Unsigned(0..3)]
    );
}

#[test]
fn test_unit_bounds_on_integer_draw_from_single_value_range() {
    let random = ScriptedRandom::new(&[]);
    assert_eq!(random_number_with::<i32, _>(&random, Bounds::Unit), Ok(0));
    assert_eq!(random.draws(), vec![Draw::Signed(0..1)]);
}

// ============================================================
// Floating kinds
// ============================================================

#[test]
fn test_float_draw_is_rescaled_affinely() {
    let random = ScriptedRandom::new(&[0.5, 0.0]);
    assert_eq!(
        random_number_with(&random, Bounds::Between(10.0f64, 20.0)),
        Ok(15.0)
    );
    assert_eq!(
        random_number_with(&random, Bounds::Between(-4.0f64, 4.0)),
        Ok(-4.0)
    );
}

#[test]
fn test_narrowed_draw_that_rounds_to_max_is_redrawn() {
    // 0.99999999999 rounds to 1.0 as f32, which would land on the excluded max
    let random = ScriptedRandom::new(&[0.999_999_999_99, 0.25]);
    assert_eq!(random_number_with(&random, Bounds::UpTo(1.0f32)), Ok(0.25));
    assert_eq!(random.draws(), vec![Draw::Unit, Draw::Unit]);
}

#[test]
fn test_float_span_overflow_still_lands_inside_range() {
    let random = ScriptedRandom::new(&[0.5]);
    assert_eq!(
        random_number_with(&random, Bounds::Between(-f64::MAX, f64::MAX)),
        Ok(0.0)
    );
}

// ============================================================
// Failures consume no entropy
// ============================================================

#[test]
fn test_rejected_bounds_do_not_draw() {
    let random = ScriptedRandom::new(&[]);
    assert_eq!(
        random_number_with(&random, Bounds::Between(10i32, 5)),
        Err(RangeError::InvalidRange { min: 10, max: 5 })
    );
    assert!(random_number_with(&random, Bounds::UpTo(-1.0f64)).is_err());
    assert!(random.draws().is_empty());
}
