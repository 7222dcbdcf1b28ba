//! Validate command implementation

use anyhow::Result;
use clap::Args;
use readit_core::alphabet::parse_alphabet;
use std::path::{Path, PathBuf};

use crate::config::CliConfig;
use crate::input::FileReader;

/// Arguments for the validate command
#[derive(Debug, Args)]
#[group(required = true, multiple = true)]
pub struct ValidateArgs {
    /// Reader configuration file to validate
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Alphabet weight table to validate
    #[arg(short, long, value_name = "FILE")]
    pub alphabet: Option<PathBuf>,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        if let Some(path) = &self.config {
            Self::validate_config(path)?;
        }
        if let Some(path) = &self.alphabet {
            Self::validate_alphabet(path)?;
        }
        Ok(())
    }

    fn validate_config(path: &Path) -> Result<()> {
        println!("Validating configuration: {}", path.display());

        match CliConfig::load(path).and_then(|config| {
            let core = config.to_core_config()?;
            Ok((config, core))
        }) {
            Ok((config, core)) => {
                println!("✓ Configuration is valid!");
                println!("  Coefficients: {:?}", config.timing.coefficients.as_array());
                println!("  Max word length: {}", core.max_word_length());
                println!("  Chunk threshold: {} bytes", core.chunk_threshold());
                println!("  Alphabets: {}", core.alphabets().join(", "));
                Ok(())
            }
            Err(e) => {
                println!("✗ Configuration is invalid!");
                println!("  Error: {e:#}");
                Err(anyhow::anyhow!("Validation failed: {:#}", e))
            }
        }
    }

    fn validate_alphabet(path: &Path) -> Result<()> {
        println!("Validating alphabet: {}", path.display());

        let source = String::from_utf8(FileReader::read_bytes(path)?)?;
        match parse_alphabet(&source) {
            Ok(alphabet) => {
                println!("✓ Alphabet is valid!");
                println!("  Code: {}", alphabet.metadata.code);
                println!("  Name: {}", alphabet.metadata.name);
                println!("  Letters: {}", alphabet.priorities.len());
                Ok(())
            }
            Err(e) => {
                println!("✗ Alphabet is invalid!");
                println!("  Error: {e}");
                Err(anyhow::anyhow!("Validation failed: {}", e))
            }
        }
    }
}
