//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

use crate::config::CliConfig;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        use std::fs;

        println!("Generating reader configuration template...");
        println!("  Output file: {}", self.output.display());

        let template = Self::generate_template();

        fs::write(&self.output, template)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Edit the timing coefficients and thresholds");
        println!("2. Validate your configuration:");
        println!("   readit validate --config {}", self.output.display());
        println!("3. Use it for reading:");
        println!(
            "   readit read -i 'book/*.xhtml' --config {}",
            self.output.display()
        );

        Ok(())
    }

    /// Generate template configuration content
    fn generate_template() -> String {
        let defaults = CliConfig::default();
        let coefficients = defaults.timing.coefficients;
        let [base, soft, sentence, clause, hard] = *coefficients.as_array();

        format!(
            r#"# readit configuration

# Alphabets whose letter weights drive focal-letter selection
alphabets = [{alphabets}]

[timing]
# Display delay per word, by the strongest break it contains:
#   [base, soft break (,), sentence end (. ! ?), clause break (- — : ;), hard break (tab/newline)]
coefficients = [{base}, {soft}, {sentence}, {clause}, {hard}]

[reader]
# Tokens longer than this many characters are split with hyphens
max_word_length = {max_word_length}
# Declared resource bytes gathered into one chunk
chunk_threshold = {chunk_threshold}

[output]
# text, json or markdown
default_format = "{format}"
pretty_json = {pretty_json}
"#,
            alphabets = defaults
                .alphabets
                .iter()
                .map(|name| format!("\"{name}\""))
                .collect::<Vec<_>>()
                .join(", "),
            max_word_length = defaults.reader.max_word_length,
            chunk_threshold = defaults.reader.chunk_threshold,
            format = defaults.output.default_format,
            pretty_json = defaults.output.pretty_json,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_generate_config_args_debug() {
        let args = GenerateConfigArgs {
            output: PathBuf::from("readit.toml"),
        };

        let debug_str = format!("{:?}", args);
        assert!(debug_str.contains("GenerateConfigArgs"));
        assert!(debug_str.contains("readit.toml"));
    }

    #[test]
    fn test_template_parses_to_defaults() {
        let template = GenerateConfigArgs::generate_template();
        assert!(template.contains("[timing]"));
        assert!(template.contains("coefficients = [10, 14, 20, 16, 25]"));

        let parsed = CliConfig::from_toml_str(&template).unwrap();
        assert_eq!(parsed, CliConfig::default());
        assert!(parsed.to_core_config().is_ok());
    }

    #[test]
    fn test_execute_success() {
        let temp_dir = TempDir::new().unwrap();
        let output_path = temp_dir.path().join("readit.toml");

        let args = GenerateConfigArgs {
            output: output_path.clone(),
        };

        assert!(args.execute().is_ok());
        let content = std::fs::read_to_string(&output_path).unwrap();
        assert!(content.contains("max_word_length = 13"));
    }
}
