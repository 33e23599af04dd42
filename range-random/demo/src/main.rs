// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

mod cli;
mod commands;
mod config;

use clap::Parser;
use cli::{Cli, Command};
use config::Config;
use range_random_core::{FastrandRandom, Random, RangeRandom, SeededRandom};

fn run<R: Random>(
    command: Command,
    config: &Config,
    sampler: &RangeRandom<R>,
) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        Command::Sample {
            kind,
            count,
            bounds,
        } => commands::sample(
            sampler,
            kind.unwrap_or(config.kind),
            &bounds,
            count.unwrap_or(config.count),
        ),
        Command::Histogram { buckets, draws } => commands::histogram(
            sampler,
            buckets.map_or(config.buckets, |buckets| buckets as usize),
            draws.unwrap_or(config.draws),
        ),
        Command::Showcase => commands::showcase(sampler),
    }
}

fn main() {
    let cli = Cli::parse();

    let result = Config::resolve(cli.config.as_deref()).and_then(|config| {
        match cli.seed.or(config.seed) {
            Some(seed) => {
                let sampler = RangeRandom::new(SeededRandom::new(seed));
                run(cli.command, &config, &sampler)
            }
            None => run(cli.command, &config, &RangeRandom::new(FastrandRandom)),
        }
    });

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
