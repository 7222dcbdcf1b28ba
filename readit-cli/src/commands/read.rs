//! Read command implementation

use anyhow::{Context, Result};
use clap::Args;
use readit_core::{
    ChunkCursor, CursorState, Error as CoreError, InMemoryBook, PriorityTable, ReadableUnit,
    ResourceProvider, SessionSnapshot, TextParser,
};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::sync::Arc;

use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::{resolve_patterns, FileReader};
use crate::output::{JsonFormatter, MarkdownFormatter, OutputFormatter, TextFormatter};
use crate::progress::ProgressReporter;

/// Arguments for the read command
#[derive(Debug, Args)]
pub struct ReadArgs {
    /// Book resources in reading order (files or glob patterns)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format (default: from config, else text)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE", env = "READIT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Extra alphabet TOML merged into the emphasis weights
    #[arg(short, long, value_name = "FILE")]
    pub alphabet: Option<PathBuf>,

    /// Session file to resume from and save the reading position to
    #[arg(short, long, value_name = "FILE")]
    pub session: Option<PathBuf>,

    /// Stop after this many words
    #[arg(short, long, value_name = "WORDS")]
    pub limit: Option<usize>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// One word per line with its delay and focal letter
    Text,
    /// JSON array of words with delay and emphasis
    Json,
    /// Markdown table
    Markdown,
}

impl OutputFormat {
    /// Parse a format name from configuration
    pub fn from_name(name: &str) -> Result<Self> {
        match name.to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            "markdown" | "md" => Ok(Self::Markdown),
            other => Err(CliError::ConfigError(format!("unknown output format: {other}")).into()),
        }
    }
}

/// Where reading stopped
struct Stop {
    unit: ReadableUnit,
    word_index: usize,
}

impl ReadArgs {
    /// Execute the read command
    pub fn execute(&self) -> Result<()> {
        self.init_logging()?;

        log::info!("Starting reading session");
        log::debug!("Arguments: {:?}", self);

        let cli_config = CliConfig::load_or_default(self.config.as_deref())?;
        let config = cli_config.to_core_config()?;

        let mut priorities = PriorityTable::from_alphabets(config.alphabets())?;
        if let Some(path) = &self.alphabet {
            priorities.merge_file(path)?;
        }
        let parser = TextParser::with_priorities(config.clone(), Arc::new(priorities));

        let files = resolve_patterns(&self.input)?;
        log::info!("Found {} resources", files.len());
        let book = FileReader::load_book(&files)?;

        let format = match self.format {
            Some(format) => format,
            None => OutputFormat::from_name(&cli_config.output.default_format)?,
        };
        let mut formatter = self.create_formatter(format, cli_config.output.pretty_json)?;

        let (mut cursor, mut pending) = self.restore(&book, config.chunk_threshold())?;

        let mut progress = ProgressReporter::new(self.quiet);
        progress.init_resources(book.resource_count() as u64);

        let mut emitted = 0usize;
        let mut stop: Option<Stop> = None;

        'chunks: loop {
            let (unit, start) = match pending.take() {
                Some(resumed) => resumed,
                None => {
                    let mut unit = match cursor.next_chunk(&book) {
                        Ok(unit) => unit,
                        Err(CoreError::PositionNotFound { resource_id }) => {
                            log::warn!(
                                "saved resource {resource_id:?} is not in this book; restarting"
                            );
                            cursor = ChunkCursor::at_start(&book)
                                .with_threshold(config.chunk_threshold());
                            continue;
                        }
                        Err(e) => return Err(e.into()),
                    };
                    parser.process(&mut unit)?;
                    let start = unit.resume_word_index();
                    (unit, start)
                }
            };

            for index in start..unit.len() {
                if self.limit.is_some_and(|limit| emitted >= limit) {
                    stop = Some(Stop {
                        unit,
                        word_index: index,
                    });
                    break 'chunks;
                }
                if let Some(word) = unit.word(index) {
                    formatter.format_word(&word)?;
                    emitted += 1;
                }
            }

            progress.update(cursor.progress(&book), emitted);
            if cursor.state() == CursorState::Exhausted {
                break;
            }
        }

        formatter.finish()?;
        progress.finish();
        log::info!("Emitted {emitted} words");

        if let Some(path) = &self.session {
            let snapshot = match stop {
                Some(stop) => {
                    SessionSnapshot::new(stop.unit, *config_coefficients(&config)?, cursor)
                        .with_word_index(stop.word_index)
                }
                None => SessionSnapshot::new(
                    ReadableUnit::default(),
                    *config_coefficients(&config)?,
                    cursor,
                ),
            };
            if snapshot.has_pending_words() {
                match snapshot.reading_position(&book) {
                    Ok(position) => log::info!(
                        "Paused at {} offset {}",
                        position.resource_id,
                        position.text_offset
                    ),
                    Err(e) => log::debug!("position not resolvable: {e}"),
                }
            }
            snapshot
                .save(path)
                .with_context(|| format!("Failed to save session: {}", path.display()))?;
        }

        Ok(())
    }

    /// Cursor and pending unit, from the session file when one exists
    fn restore(
        &self,
        book: &InMemoryBook,
        threshold: usize,
    ) -> Result<(ChunkCursor, Option<(ReadableUnit, usize)>)> {
        let fresh = || ChunkCursor::at_start(book).with_threshold(threshold);

        let Some(path) = self.session.as_ref().filter(|path| path.exists()) else {
            return Ok((fresh(), None));
        };

        let snapshot = SessionSnapshot::load(path)
            .map_err(|e| CliError::SessionError(format!("{}: {e}", path.display())))?;

        if snapshot.cursor.state() != CursorState::Exhausted
            && book
                .index_of(&snapshot.cursor.position().resource_id)
                .is_none()
        {
            log::warn!("session does not match the given book; starting over");
            return Ok((fresh(), None));
        }

        log::info!("Resuming session from {}", path.display());
        let pending = snapshot
            .has_pending_words()
            .then(|| (snapshot.unit, snapshot.word_index));
        Ok((snapshot.cursor, pending))
    }

    fn create_formatter(
        &self,
        format: OutputFormat,
        pretty_json: bool,
    ) -> Result<Box<dyn OutputFormatter>> {
        let writer: Box<dyn Write + Send + Sync> = match &self.output {
            Some(path) => Box::new(BufWriter::new(File::create(path).with_context(|| {
                format!("Failed to create output file: {}", path.display())
            })?)),
            None => Box::new(io::stdout()),
        };

        Ok(match format {
            OutputFormat::Text => Box::new(TextFormatter::new(writer)),
            OutputFormat::Json => Box::new(JsonFormatter::new(writer, pretty_json)),
            OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
        })
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) -> Result<()> {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            if let Err(e) = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(log_level),
            )
            .try_init()
            {
                log::debug!("logger already initialized: {e}");
            }
        }

        Ok(())
    }
}

fn config_coefficients(config: &readit_core::Config) -> Result<&readit_core::TimingCoefficients> {
    config
        .coefficients()
        .ok_or_else(|| CliError::ConfigError("timing coefficients are not set".into()).into())
}
