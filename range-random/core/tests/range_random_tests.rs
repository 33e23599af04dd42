// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use range_random_core::{
    impl_number, random_number, random_number_from_args, range_random, Bounds, RandRandom,
    RangeError, RangeRandom, SeededRandom,
};

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
struct PlayerLevel(u8);
impl_number!(PlayerLevel => u8);

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
struct Celsius(f32);
impl_number!(Celsius => f32);

// ============================================================
// Default bounds
// ============================================================

#[test]
fn test_no_bounds_float_stays_in_unit_interval() {
    for _ in 0..1_000 {
        let value: f64 = random_number(Bounds::Unit).unwrap();
        assert!((0.0..1.0).contains(&value), "got {}", value);

        let value: f32 = random_number(Bounds::Unit).unwrap();
        assert!((0.0..1.0).contains(&value), "got {}", value);
    }
}

#[test]
fn test_no_bounds_integer_is_always_zero() {
    for _ in 0..100 {
        assert_eq!(random_number::<i32>(Bounds::Unit), Ok(0));
        assert_eq!(random_number::<u64>(Bounds::Unit), Ok(0));
        assert_eq!(random_number::<i8>(Bounds::Unit), Ok(0));
        assert_eq!(random_number_from_args::<usize>(&[]), Ok(0));
    }
}

#[test]
fn test_single_bound_defaults_min_to_zero() {
    assert_eq!(Bounds::UpTo(7).resolve(), (0, 7));
    assert_eq!(Bounds::<f64>::Unit.resolve(), (0.0, 1.0));

    for _ in 0..1_000 {
        let value = random_number_from_args(&[1_000i32]).unwrap();
        assert!((0..1_000).contains(&value));

        let value = random_number(Bounds::UpTo(2.5f64)).unwrap();
        assert!((0.0..2.5).contains(&value));

        let value = random_number(Bounds::UpTo(3u16)).unwrap();
        assert!(value < 3);
    }
}

#[test]
fn test_two_bounds_cover_negative_ranges() {
    for _ in 0..1_000 {
        let value = random_number_from_args(&[-50.0f64, 50.0]).unwrap();
        assert!((-50.0..50.0).contains(&value));

        let value = random_number(Bounds::Between(-10i64, -5)).unwrap();
        assert!((-10..-5).contains(&value));

        let value = random_number(Bounds::Between(i8::MIN, i8::MAX)).unwrap();
        assert!(value < i8::MAX);
    }
}

#[test]
fn test_full_width_integer_ranges() {
    for _ in 0..1_000 {
        let value = random_number(Bounds::Between(i64::MIN, i64::MAX)).unwrap();
        assert!(value < i64::MAX);

        let value = random_number(Bounds::Between(0u64, u64::MAX)).unwrap();
        assert!(value < u64::MAX);

        let value = random_number(Bounds::Between(-f64::MAX, f64::MAX)).unwrap();
        assert!(value.is_finite());
    }
}

// ============================================================
// Validation
// ============================================================

#[test]
fn test_inverted_bounds_are_rejected_not_swapped() {
    assert_eq!(
        random_number(Bounds::Between(10, 5)),
        Err(RangeError::InvalidRange { min: 10, max: 5 })
    );
    assert_eq!(
        random_number_from_args(&[10.0f64, 5.0]),
        Err(RangeError::InvalidRange {
            min: 10.0,
            max: 5.0
        })
    );
}

#[test]
fn test_empty_range_is_rejected() {
    assert_eq!(
        random_number(Bounds::Between(7u32, 7)),
        Err(RangeError::InvalidRange { min: 7, max: 7 })
    );
    assert_eq!(
        random_number(Bounds::Between(1.5f32, 1.5)),
        Err(RangeError::InvalidRange { min: 1.5, max: 1.5 })
    );
}

#[test]
fn test_non_positive_single_bound_is_rejected() {
    assert_eq!(
        random_number(Bounds::UpTo(0i32)),
        Err(RangeError::InvalidRange { min: 0, max: 0 })
    );
    assert_eq!(
        random_number_from_args(&[-3i16]),
        Err(RangeError::InvalidRange { min: 0, max: -3 })
    );
    assert_eq!(
        random_number(Bounds::UpTo(0u8)),
        Err(RangeError::InvalidRange { min: 0, max: 0 })
    );
}

#[test]
fn test_non_finite_float_bounds_are_rejected() {
    assert!(matches!(
        random_number(Bounds::UpTo(f64::NAN)),
        Err(RangeError::InvalidRange { .. })
    ));
    assert!(matches!(
        random_number(Bounds::Between(0.0f64, f64::INFINITY)),
        Err(RangeError::InvalidRange { .. })
    ));
    assert!(matches!(
        random_number(Bounds::Between(f32::NEG_INFINITY, 0.0)),
        Err(RangeError::InvalidRange { .. })
    ));
}

#[test]
fn test_too_many_arguments_report_their_count() {
    assert_eq!(
        random_number_from_args(&[1, 2, 3]),
        Err(RangeError::InvalidArity { count: 3 })
    );
    assert_eq!(
        Bounds::from_args(&[1.0f64, 2.0, 3.0, 4.0, 5.0]),
        Err(RangeError::InvalidArity { count: 5 })
    );
}

#[test]
fn test_arguments_map_to_bounds_positionally() {
    assert_eq!(Bounds::<u8>::from_args(&[]), Ok(Bounds::Unit));
    assert_eq!(Bounds::from_args(&[9u8]), Ok(Bounds::UpTo(9)));
    assert_eq!(Bounds::from_args(&[3u8, 9]), Ok(Bounds::Between(3, 9)));
    assert_eq!(Bounds::from(3u8..9), Bounds::Between(3, 9));
}

#[test]
fn test_error_messages_name_the_offending_values() {
    let arity = RangeError::<i32>::InvalidArity { count: 4 };
    assert_eq!(
        arity.to_string(),
        "Invalid number of arguments: expected 0, 1, or 2, got 4"
    );

    let range = RangeError::InvalidRange { min: 10, max: 5 };
    assert_eq!(
        range.to_string(),
        "Invalid range: max (5) must be strictly greater than min (10)"
    );

    let boxed: Box<dyn std::error::Error> = Box::new(range);
    assert!(boxed.to_string().contains("min (10)"));
}

// ============================================================
// User-defined numeric types
// ============================================================

#[test]
fn test_newtype_over_unsigned_integer() {
    for _ in 0..1_000 {
        let level = random_number(Bounds::Between(PlayerLevel(5), PlayerLevel(25))).unwrap();
        assert!(level >= PlayerLevel(5) && level < PlayerLevel(25));
    }
    assert_eq!(
        random_number::<PlayerLevel>(Bounds::Unit),
        Ok(PlayerLevel(0))
    );
    assert_eq!(
        random_number(Bounds::Between(PlayerLevel(25), PlayerLevel(5))),
        Err(RangeError::InvalidRange {
            min: PlayerLevel(25),
            max: PlayerLevel(5)
        })
    );
}

#[test]
fn test_newtype_over_float() {
    for _ in 0..1_000 {
        let reading = random_number(Bounds::Between(Celsius(-40.0), Celsius(60.0))).unwrap();
        assert!(reading >= Celsius(-40.0) && reading < Celsius(60.0));
    }
}

// ============================================================
// Entry points
// ============================================================

#[test]
fn test_macro_accepts_zero_one_or_two_bounds() {
    let unit: f64 = range_random!().unwrap();
    assert!((0.0..1.0).contains(&unit));

    let below = range_random!(1_000u32).unwrap();
    assert!(below < 1_000);

    let between = range_random!(10i32, 20).unwrap();
    assert!((10..20).contains(&between));

    assert_eq!(
        range_random!(10i32, 5),
        Err(RangeError::InvalidRange { min: 10, max: 5 })
    );
}

#[test]
fn test_rand_backed_sampler() {
    let sampler = RangeRandom::new(RandRandom);
    for _ in 0..1_000 {
        let value = sampler.sample(Bounds::Between(-3i32, 3)).unwrap();
        assert!((-3..3).contains(&value));

        let value = sampler.sample_args(&[0.25f32, 0.5]).unwrap();
        assert!((0.25..0.5).contains(&value));
    }
    assert_eq!(
        sampler.sample_args(&[1u8, 2, 3]),
        Err(RangeError::InvalidArity { count: 3 })
    );
}

#[test]
fn test_default_sampler_uses_process_wide_source() {
    let sampler: RangeRandom = RangeRandom::default();
    let value = sampler.sample(Bounds::UpTo(10usize)).unwrap();
    assert!(value < 10);
}

#[test]
fn test_same_seed_reproduces_the_sequence() {
    let first = RangeRandom::new(SeededRandom::new(7));
    let second = RangeRandom::new(SeededRandom::new(7));

    let a: Vec<i32> = first
        .sample_iter(Bounds::Between(0, 1_000_000))
        .unwrap()
        .take(50)
        .collect();
    let b: Vec<i32> = second
        .sample_iter(Bounds::Between(0, 1_000_000))
        .unwrap()
        .take(50)
        .collect();
    assert_eq!(a, b);

    first.random().reset();
    let replay: Vec<i32> = first
        .sample_iter(Bounds::Between(0, 1_000_000))
        .unwrap()
        .take(50)
        .collect();
    assert_eq!(a, replay);
    assert_eq!(first.random().seed(), 7);
}

#[test]
fn test_sample_iter_validates_before_drawing() {
    let sampler = RangeRandom::new(SeededRandom::new(1));
    assert!(matches!(
        sampler.sample_iter(Bounds::Between(5u8, 5)),
        Err(RangeError::InvalidRange { min: 5, max: 5 })
    ));
}

#[test]
fn test_shared_seeded_source_across_threads() {
    let sampler = RangeRandom::new(SeededRandom::new(99));
    std::thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                for _ in 0..1_000 {
                    let value = sampler.sample(Bounds::Between(100u32, 200)).unwrap();
                    assert!((100..200).contains(&value));
                }
            });
        }
    });
}
