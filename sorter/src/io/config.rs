//! Sorter configuration stored in `sorter.toml`.
//!
//! Classification thresholds are fixed constants and deliberately absent here;
//! the config only shapes CLI presentation, logging and benchmark sizing.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};

/// Default config file name, resolved against the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "sorter.toml";

/// Sorter configuration (TOML).
///
/// Missing fields default to the values used when no file exists.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SorterConfig {
    /// Tracing filter used when `RUST_LOG` is unset.
    pub log_filter: String,

    pub output: OutputConfig,

    pub bench: BenchConfig,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,

    /// Print the reasoning behind each classification.
    pub explain: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct BenchConfig {
    /// Packages classified per benchmark scenario.
    pub iterations: usize,

    /// Fail `sorter bench` when any scenario takes longer than this.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_elapsed_ms: Option<u64>,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            iterations: 10_000,
            max_elapsed_ms: None,
        }
    }
}

impl Default for SorterConfig {
    fn default() -> Self {
        Self {
            log_filter: "warn".to_string(),
            output: OutputConfig::default(),
            bench: BenchConfig::default(),
        }
    }
}

impl SorterConfig {
    pub fn validate(&self) -> Result<()> {
        if self.log_filter.trim().is_empty() {
            return Err(anyhow!("log_filter must be non-empty"));
        }
        if self.bench.iterations == 0 {
            return Err(anyhow!("bench.iterations must be > 0"));
        }
        if self.bench.max_elapsed_ms == Some(0) {
            return Err(anyhow!("bench.max_elapsed_ms must be > 0 when set"));
        }
        Ok(())
    }
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `SorterConfig::default()`.
pub fn load_config(path: &Path) -> Result<SorterConfig> {
    if !path.exists() {
        let cfg = SorterConfig::default();
        cfg.validate()?;
        return Ok(cfg);
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: SorterConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()
        .with_context(|| format!("invalid config {}", path.display()))?;
    Ok(cfg)
}

/// Atomically write config to disk (temp file + rename).
pub fn write_config(path: &Path, cfg: &SorterConfig) -> Result<()> {
    cfg.validate()?;
    let mut buf = toml::to_string_pretty(cfg).context("serialize config toml")?;
    buf.push('\n');
    write_atomic(path, &buf)
}

fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("create directory {}", parent.display()))?;
    }
    let tmp_path = path.with_extension("toml.tmp");
    fs::write(&tmp_path, contents)
        .with_context(|| format!("write temp config {}", tmp_path.display()))?;
    fs::rename(&tmp_path, path).with_context(|| format!("replace config {}", path.display()))?;
    Ok(())
}
