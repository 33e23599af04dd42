// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::cli::NumberKind;
use range_random_core::{impl_number, stats::Histogram, Bounds, Number, Random, RangeRandom};
use std::error::Error;
use std::fmt;
use std::str::FromStr;

type CommandResult = Result<(), Box<dyn Error>>;

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
struct PlayerLevel(u8);
impl_number!(PlayerLevel => u8);

macro_rules! with_kind {
    ($kind:expr, $func:ident ( $($arg:expr),* )) => {
        match $kind {
            NumberKind::I8 => $func::<i8, _>($($arg),*),
            NumberKind::I16 => $func::<i16, _>($($arg),*),
            NumberKind::I32 => $func::<i32, _>($($arg),*),
            NumberKind::I64 => $func::<i64, _>($($arg),*),
            NumberKind::Isize => $func::<isize, _>($($arg),*),
            NumberKind::U8 => $func::<u8, _>($($arg),*),
            NumberKind::U16 => $func::<u16, _>($($arg),*),
            NumberKind::U32 => $func::<u32, _>($($arg),*),
            NumberKind::U64 => $func::<u64, _>($($arg),*),
            NumberKind::Usize => $func::<usize, _>($($arg),*),
            NumberKind::F32 => $func::<f32, _>($($arg),*),
            NumberKind::F64 => $func::<f64, _>($($arg),*),
        }
    };
}

pub fn sample<R: Random>(
    sampler: &RangeRandom<R>,
    kind: NumberKind,
    bounds: &[String],
    count: usize,
) -> CommandResult {
    with_kind!(kind, sample_kind(sampler, kind, bounds, count))
}

fn sample_kind<T, R>(
    sampler: &RangeRandom<R>,
    kind: NumberKind,
    bounds: &[String],
    count: usize,
) -> CommandResult
where
    T: Number + FromStr + fmt::Display + 'static,
    T::Err: fmt::Display,
    R: Random,
{
    let values = parse_bounds::<T>(kind, bounds)?;
    let bounds = Bounds::from_args(&values)?;
    let (min, max) = bounds.validate()?;

    println!("[{}] sampling [{}, {})", kind, min, max);
    for value in sampler.sample_iter(bounds)?.take(count) {
        println!("{}", value);
    }
    Ok(())
}

fn parse_bounds<T>(kind: NumberKind, bounds: &[String]) -> Result<Vec<T>, String>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    bounds
        .iter()
        .map(|raw| {
            raw.parse::<T>()
                .map_err(|e| format!("Invalid {} bound '{}': {}", kind, raw, e))
        })
        .collect()
}

/// Upper limit on histogram buckets, one counter is allocated per bucket
pub const MAX_BUCKETS: usize = 1_000_000;

pub fn histogram<R: Random>(
    sampler: &RangeRandom<R>,
    buckets: usize,
    draws: usize,
) -> CommandResult {
    if buckets > MAX_BUCKETS {
        return Err(format!("Too many buckets: {} (at most {})", buckets, MAX_BUCKETS).into());
    }
    if draws == 0 {
        return Err("Histogram needs at least one draw".into());
    }
    let values = sampler.sample_iter(Bounds::UpTo(buckets))?;

    let mut histogram = Histogram::new(buckets);
    for value in values.take(draws) {
        histogram.record(value);
    }

    println!("=== HISTOGRAM [0, {}) x {} ===", buckets, draws);
    let expected = draws as f64 / buckets as f64;
    for (bucket, &count) in histogram.counts().iter().enumerate() {
        let deviation = (count as f64 - expected) / expected * 100.0;
        println!("  {:>4}: {:>8} ({:+.2}%)", bucket, count, deviation);
    }
    println!(
        "Chi-square: {:.3} ({} degrees of freedom)",
        histogram.chi_square(),
        buckets - 1
    );
    Ok(())
}

pub fn showcase<R: Random>(sampler: &RangeRandom<R>) -> CommandResult {
    println!("=== RANGE RANDOM SHOWCASE ===");

    println!("\n[f64]");
    println!("  no bounds:  {:.6}", sampler.sample::<f64>(Bounds::Unit)?);
    println!("  UpTo(100):  {:.6}", sampler.sample(Bounds::UpTo(100.0f64))?);
    println!(
        "  Between(-50, 50): {:.6}",
        sampler.sample(Bounds::Between(-50.0f64, 50.0))?
    );

    println!("\n[i32]");
    // [0, 1) holds a single integer
    println!("  no bounds:  {}", sampler.sample::<i32>(Bounds::Unit)?);
    println!("  UpTo(1000): {}", sampler.sample(Bounds::UpTo(1_000i32))?);
    println!(
        "  Between(10, 20): {}",
        sampler.sample(Bounds::Between(10i32, 20))?
    );

    println!("\n[PlayerLevel (u8)]");
    let level = sampler.sample(Bounds::Between(PlayerLevel(5), PlayerLevel(25)))?;
    println!("  Between(5, 25): {}", level.0);

    println!("\n[Error handling]");
    match sampler.sample(Bounds::Between(10i32, 5)) {
        Ok(value) => println!("  Unexpected value: {}", value),
        Err(e) => println!("  Caught expected error: {}", e),
    }
    match sampler.sample_args(&[1i32, 2, 3]) {
        Ok(value) => println!("  Unexpected value: {}", value),
        Err(e) => println!("  Caught expected error: {}", e),
    }
    Ok(())
}
