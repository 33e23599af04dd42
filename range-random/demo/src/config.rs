// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::cli::NumberKind;
use serde::Deserialize;
use std::fs;
use std::path::Path;

pub const DEFAULT_CONFIG_PATH: &str = "range-random.json";

/// Defaults for the CLI. Every field is optional in the file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub kind: NumberKind,
    pub count: usize,
    pub seed: Option<u64>,
    pub buckets: usize,
    pub draws: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            kind: NumberKind::F64,
            count: 1,
            seed: None,
            buckets: 10,
            draws: 10_000,
        }
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let contents = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&contents)?;
        Ok(config)
    }

    /// An explicit path must load. The default path is optional and a broken
    /// file there only produces a warning.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self, Box<dyn std::error::Error>> {
        if let Some(path) = explicit {
            return Self::load(path)
                .map_err(|e| format!("Failed to load {}: {}", path.display(), e).into());
        }

        let path = Path::new(DEFAULT_CONFIG_PATH);
        if !path.exists() {
            return Ok(Self::default());
        }
        match Self::load(path) {
            Ok(config) => Ok(config),
            Err(e) => {
                eprintln!("Failed to load {}: {}", DEFAULT_CONFIG_PATH, e);
                eprintln!("Using default configuration...");
                Ok(Self::default())
            }
        }
    }
}
