//! readit - speed reader for the terminal

use std::process::ExitCode;

use clap::Parser;

use readit_cli::commands::Commands;

#[derive(Parser)]
#[command(name = "readit")]
#[command(version, about = "Word-by-word speed reader for text and XHTML books", long_about = None)]
#[command(after_help = "EXAMPLES:
    readit read -i 'book/*.xhtml'                  Read a book from its chapter files
    readit read -i notes.txt -f json -l 50         First 50 words as JSON
    readit read -i 'book/*.xhtml' -s session.json  Resume and save the reading position
    readit generate-config -o readit.toml          Write a configuration template")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command.execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
