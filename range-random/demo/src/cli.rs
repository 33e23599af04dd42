// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::commands::MAX_BUCKETS;
use clap::{Parser, Subcommand, ValueEnum};
use serde::Deserialize;
use std::fmt;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "range-random",
    about = "Draw uniform random numbers from half-open ranges"
)]
pub struct Cli {
    /// JSON file with default settings (defaults to ./range-random.json when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Seed for a reproducible sequence
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print values from [0, 1), [0, MAX) or [MIN, MAX)
    Sample {
        /// Numeric type of the bounds and of the output
        #[arg(long, value_enum)]
        kind: Option<NumberKind>,

        /// How many values to print
        #[arg(long)]
        count: Option<usize>,

        /// Zero, one (MAX) or two (MIN MAX) bounds
        #[arg(allow_negative_numbers = true)]
        bounds: Vec<String>,
    },
    /// Draw integers from [0, BUCKETS) and report how uniform they are
    Histogram {
        #[arg(long, value_parser = clap::value_parser!(u64).range(1..=MAX_BUCKETS as u64))]
        buckets: Option<u64>,

        #[arg(long)]
        draws: Option<usize>,
    },
    /// Walk through every calling form, including a rejected range
    Showcase,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NumberKind {
    I8,
    I16,
    I32,
    I64,
    Isize,
    U8,
    U16,
    U32,
    U64,
    Usize,
    F32,
    F64,
}

impl NumberKind {
    pub fn as_str(self) -> &'static str {
        match self {
            NumberKind::I8 => "i8",
            NumberKind::I16 => "i16",
            NumberKind::I32 => "i32",
            NumberKind::I64 => "i64",
            NumberKind::Isize => "isize",
            NumberKind::U8 => "u8",
            NumberKind::U16 => "u16",
            NumberKind::U32 => "u32",
            NumberKind::U64 => "u64",
            NumberKind::Usize => "usize",
            NumberKind::F32 => "f32",
            NumberKind::F64 => "f64",
        }
    }
}

impl fmt::Display for NumberKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
