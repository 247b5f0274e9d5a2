//! Test-only helpers: labelled sample packages and config fixtures.

use std::path::PathBuf;

use anyhow::{Context, Result};
use tempfile::TempDir;

use crate::core::Classification;
use crate::io::config::{DEFAULT_CONFIG_FILE, SorterConfig, write_config};

/// A labelled package with its expected stack.
#[derive(Debug, Clone, Copy)]
pub struct Case {
    pub description: &'static str,
    pub dims: [f64; 4],
    pub expected: Classification,
}

const fn case(description: &'static str, dims: [f64; 4], expected: Classification) -> Case {
    Case {
        description,
        dims,
        expected,
    }
}

/// Known-good classifications covering every stack and each threshold.
pub const CASES: &[Case] = &[
    case("small", [10.0, 10.0, 10.0, 5.0], Classification::Standard),
    case("medium", [50.0, 50.0, 50.0, 10.0], Classification::Standard),
    case("just under thresholds", [149.0, 149.0, 45.0, 19.9], Classification::Standard),
    case("large cube, light", [149.0, 149.0, 149.0, 19.9], Classification::Special),
    case("large cube, heavy", [149.0, 149.0, 149.0, 20.0], Classification::Rejected),
    case("zero", [0.0, 0.0, 0.0, 0.0], Classification::Standard),
    case("heavy at threshold", [10.0, 10.0, 10.0, 20.0], Classification::Special),
    case("heavy large", [100.0, 100.0, 99.0, 30.0], Classification::Special),
    case("bulky by volume", [100.0, 100.0, 100.0, 5.0], Classification::Special),
    case("bulky by volume, flat", [200.0, 200.0, 25.0, 10.0], Classification::Special),
    case("bulky by width", [150.0, 10.0, 10.0, 5.0], Classification::Special),
    case("bulky by height", [10.0, 150.0, 10.0, 5.0], Classification::Special),
    case("bulky by length", [10.0, 10.0, 150.0, 5.0], Classification::Special),
    case("heavy and bulky by dimension", [150.0, 10.0, 10.0, 20.0], Classification::Rejected),
    case("heavy and bulky by volume", [100.0, 100.0, 100.0, 25.0], Classification::Rejected),
    case("at both thresholds", [150.0, 150.0, 150.0, 20.0], Classification::Rejected),
];

/// Temp directory holding a `sorter.toml` written from `cfg`.
pub fn temp_config(cfg: &SorterConfig) -> Result<(TempDir, PathBuf)> {
    let temp = tempfile::tempdir().context("create temp dir")?;
    let path = temp.path().join(DEFAULT_CONFIG_FILE);
    write_config(&path, cfg)?;
    Ok((temp, path))
}
