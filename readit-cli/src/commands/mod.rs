//! CLI command implementations

use anyhow::Result;
use clap::Subcommand;
use readit_core::alphabet::{builtin_names, load_builtin};

pub mod generate_config;
pub mod read;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Read book resources word by word with display delays
    Read(read::ReadArgs),

    /// Validate a configuration or alphabet file
    Validate(validate::ValidateArgs),

    /// Generate a configuration template
    GenerateConfig(generate_config::GenerateConfigArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List built-in alphabets
    Alphabets,

    /// List available output formats
    Formats,
}

impl Commands {
    /// Run the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Read(args) => args.execute(),
            Commands::Validate(args) => args.execute(),
            Commands::GenerateConfig(args) => args.execute(),
            Commands::List { subcommand } => subcommand.execute(),
        }
    }
}

impl ListCommands {
    /// Print the requested listing
    pub fn execute(&self) -> Result<()> {
        match self {
            ListCommands::Alphabets => {
                println!("Built-in alphabets:");
                for name in builtin_names() {
                    let alphabet = load_builtin(name)?;
                    println!(
                        "  {:<10} {} ({} letters)",
                        name,
                        alphabet.metadata.name,
                        alphabet.priorities.len()
                    );
                }
            }
            ListCommands::Formats => {
                println!("Output formats:");
                println!("  text      delay and word with the focal letter in brackets");
                println!("  json      array of words with delay and emphasis index");
                println!("  markdown  table with the focal letter in bold");
            }
        }
        Ok(())
    }
}
