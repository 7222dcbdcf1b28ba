//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use readit_core::Word;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// JSON formatter - outputs words as a JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    words: Vec<WordData>,
    pretty: bool,
}

/// Data structure for JSON output
#[derive(Debug, Serialize, Deserialize)]
pub struct WordData {
    /// The word as displayed
    pub text: String,
    /// Display delay
    pub delay: u32,
    /// Focal character index
    pub emphasis: usize,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, pretty: bool) -> Self {
        Self {
            writer,
            words: Vec::new(),
            pretty,
        }
    }

    /// Consume the formatter, returning the writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn format_word(&mut self, word: &Word<'_>) -> Result<()> {
        self.words.push(WordData {
            text: word.text.to_string(),
            delay: word.delay,
            emphasis: word.emphasis,
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &self.words)?;
        } else {
            serde_json::to_writer(&mut self.writer, &self.words)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
