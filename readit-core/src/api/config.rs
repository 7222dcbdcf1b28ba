//! Configuration API for text parsing and chunked reading

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::alphabet;
use crate::api::{Error, Result};
use crate::timing::TimingCoefficients;

/// Default configuration constants
pub mod defaults {
    /// Tokens longer than this many characters are split
    pub const MAX_WORD_LENGTH: usize = 13;

    /// Declared resource bytes accumulated per chunk
    pub const CHUNK_THRESHOLD: usize = 1024;

    /// Alphabets whose emphasis weights are loaded
    pub const ALPHABETS: &[&str] = &["latin", "cyrillic", "ukrainian"];
}

/// Parsing and reading configuration
///
/// Timing coefficients may stay unset; the parser reports a
/// configuration error when it is asked to time words without them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub(crate) coefficients: Option<TimingCoefficients>,
    pub(crate) max_word_length: usize,
    pub(crate) chunk_threshold: usize,
    pub(crate) alphabets: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            coefficients: None,
            max_word_length: defaults::MAX_WORD_LENGTH,
            chunk_threshold: defaults::CHUNK_THRESHOLD,
            alphabets: defaults::ALPHABETS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl Config {
    /// Create a configuration builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Parse a TOML configuration document
    ///
    /// ```toml
    /// alphabets = ["latin"]
    ///
    /// [timing]
    /// coefficients = [10, 14, 20, 16, 25]
    ///
    /// [reader]
    /// max_word_length = 13
    /// chunk_threshold = 1024
    /// ```
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let file: ConfigFile = toml::from_str(source)
            .map_err(|e| Error::Configuration(format!("invalid configuration: {e}")))?;

        let mut config = Config {
            coefficients: file.timing.coefficients,
            max_word_length: file.reader.max_word_length,
            chunk_threshold: file.reader.chunk_threshold,
            ..Config::default()
        };
        if let Some(alphabets) = file.alphabets {
            config.alphabets = alphabets;
        }

        config.validate()?;
        Ok(config)
    }

    /// Load a TOML configuration file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&source)
    }

    /// Timing coefficients, if configured
    pub fn coefficients(&self) -> Option<&TimingCoefficients> {
        self.coefficients.as_ref()
    }

    /// Overlong-word threshold in characters
    pub fn max_word_length(&self) -> usize {
        self.max_word_length
    }

    /// Chunk threshold in declared resource bytes
    pub fn chunk_threshold(&self) -> usize {
        self.chunk_threshold
    }

    /// Alphabet names whose weights are used for emphasis
    pub fn alphabets(&self) -> &[String] {
        &self.alphabets
    }

    /// Validate the configuration
    pub(crate) fn validate(&self) -> Result<()> {
        if self.max_word_length == 0 {
            return Err(Error::Configuration(
                "max_word_length must be greater than 0".into(),
            ));
        }

        if self.chunk_threshold == 0 {
            return Err(Error::Configuration(
                "chunk_threshold must be greater than 0".into(),
            ));
        }

        if self.alphabets.is_empty() {
            return Err(Error::Configuration(
                "at least one alphabet is required".into(),
            ));
        }

        if let Some(unknown) = self
            .alphabets
            .iter()
            .find(|name| !alphabet::is_builtin(name))
        {
            return Err(Error::Configuration(format!("unknown alphabet: {unknown}")));
        }

        Ok(())
    }
}

/// Fluent builder for configuration
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    coefficients: Option<TimingCoefficients>,
    max_word_length: Option<usize>,
    chunk_threshold: Option<usize>,
    alphabets: Option<Vec<String>>,
}

impl ConfigBuilder {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the timing coefficients
    pub fn coefficients(mut self, coefficients: TimingCoefficients) -> Self {
        self.coefficients = Some(coefficients);
        self
    }

    /// Set the overlong-word threshold
    pub fn max_word_length(mut self, chars: usize) -> Self {
        self.max_word_length = Some(chars);
        self
    }

    /// Set the chunk threshold in bytes
    pub fn chunk_threshold(mut self, bytes: usize) -> Self {
        self.chunk_threshold = Some(bytes);
        self
    }

    /// Set the alphabets by name
    pub fn alphabets<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.alphabets = Some(names.into_iter().map(Into::into).collect());
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<Config> {
        let mut config = Config::default();

        if self.coefficients.is_some() {
            config.coefficients = self.coefficients;
        }

        if let Some(chars) = self.max_word_length {
            config.max_word_length = chars;
        }

        if let Some(bytes) = self.chunk_threshold {
            config.chunk_threshold = bytes;
        }

        if let Some(alphabets) = self.alphabets {
            config.alphabets = alphabets;
        }

        config.validate()?;
        Ok(config)
    }
}

/// TOML layout of a configuration file
#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(default)]
struct ConfigFile {
    alphabets: Option<Vec<String>>,
    timing: TimingSection,
    reader: ReaderSection,
}

#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(default)]
struct TimingSection {
    coefficients: Option<TimingCoefficients>,
}

#[derive(Debug, Deserialize, Serialize)]
#[serde(default)]
struct ReaderSection {
    max_word_length: usize,
    chunk_threshold: usize,
}

impl Default for ReaderSection {
    fn default() -> Self {
        Self {
            max_word_length: defaults::MAX_WORD_LENGTH,
            chunk_threshold: defaults::CHUNK_THRESHOLD,
        }
    }
}
