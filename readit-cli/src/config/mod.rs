//! Configuration module

use std::path::Path;

use anyhow::{Context, Result};
use readit_core::api::config::defaults;
use readit_core::{Config, TimingCoefficients};
use serde::{Deserialize, Serialize};

use crate::error::CliError;

/// Coefficients used when no `[timing]` table is configured
pub const DEFAULT_COEFFICIENTS: TimingCoefficients = TimingCoefficients::new([10, 14, 20, 16, 25]);

/// CLI configuration structure
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct CliConfig {
    /// Alphabets whose emphasis weights are loaded
    #[serde(default = "default_alphabets")]
    pub alphabets: Vec<String>,

    /// Timing configuration
    #[serde(default)]
    pub timing: TimingConfig,

    /// Reader configuration
    #[serde(default)]
    pub reader: ReaderConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            alphabets: default_alphabets(),
            timing: TimingConfig::default(),
            reader: ReaderConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

fn default_alphabets() -> Vec<String> {
    defaults::ALPHABETS.iter().map(|s| s.to_string()).collect()
}

/// Timing-related configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct TimingConfig {
    /// Delays for `[base, soft break, sentence end, clause break, hard break]`
    pub coefficients: TimingCoefficients,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            coefficients: DEFAULT_COEFFICIENTS,
        }
    }
}

/// Reader-related configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ReaderConfig {
    /// Tokens longer than this are split
    pub max_word_length: usize,

    /// Declared resource bytes per chunk
    pub chunk_threshold: usize,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            max_word_length: defaults::MAX_WORD_LENGTH,
            chunk_threshold: defaults::CHUNK_THRESHOLD,
        }
    }
}

/// Output-related configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format
    pub default_format: String,

    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: "text".to_string(),
            pretty_json: true,
        }
    }
}

impl CliConfig {
    /// Parse a configuration document
    pub fn from_toml_str(source: &str) -> Result<Self> {
        toml::from_str(source).map_err(|e| CliError::ConfigError(e.message().to_string()).into())
    }

    /// Load a configuration file
    pub fn load(path: &Path) -> Result<Self> {
        let source = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        Self::from_toml_str(&source)
            .with_context(|| format!("Invalid config file: {}", path.display()))
    }

    /// Load `path` if given, defaults otherwise
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Validated core configuration
    pub fn to_core_config(&self) -> Result<Config> {
        let config = Config::builder()
            .coefficients(self.timing.coefficients)
            .max_word_length(self.reader.max_word_length)
            .chunk_threshold(self.reader.chunk_threshold)
            .alphabets(self.alphabets.iter().cloned())
            .build()?;
        Ok(config)
    }
}
