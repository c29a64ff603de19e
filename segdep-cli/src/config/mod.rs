//! Configuration module

use crate::error::CliError;
use crate::input::InputFormat;
use crate::output::OutputFormat;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
pub struct CliConfig {
    /// Input configuration
    #[serde(default)]
    pub input: InputConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,

    /// Performance configuration
    #[serde(default)]
    pub performance: PerformanceConfig,
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        toml::from_str(&content)
            .map_err(|e| CliError::ConfigError(format!("{}: {e}", path.display())).into())
    }
}

/// Input-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct InputConfig {
    /// Format of predicted corpus files
    pub predicted_format: InputFormat,

    /// Format of gold corpus files
    pub gold_format: InputFormat,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            predicted_format: InputFormat::Auto,
            gold_format: InputFormat::Auto,
        }
    }
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format
    pub default_format: OutputFormat,

    /// Report every sentence, not only the aggregate
    pub per_sentence: bool,

    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: OutputFormat::Text,
            per_sentence: false,
            pretty_json: true,
        }
    }
}

/// Performance-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct PerformanceConfig {
    /// Sentence count at which evaluation goes parallel
    pub parallel_threshold: usize,

    /// Number of worker threads (0 = auto)
    pub worker_threads: usize,
}

impl Default for PerformanceConfig {
    fn default() -> Self {
        Self {
            parallel_threshold: segdep_core::corpus::PARALLEL_THRESHOLD,
            worker_threads: 0,
        }
    }
}

impl PerformanceConfig {
    /// Thread count to hand to the evaluator
    pub fn threads(&self) -> usize {
        match self.worker_threads {
            0 => num_cpus::get(),
            n => n,
        }
    }
}
