//! Markdown output formatter

use super::{focal_parts, OutputFormatter};
use anyhow::Result;
use readit_core::Word;
use std::io::Write;

/// Markdown formatter - outputs words as a table with the focal letter in bold
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    word_count: usize,
    total_delay: u64,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            word_count: 0,
            total_delay: 0,
        }
    }

    /// Consume the formatter, returning the writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write + Send + Sync> OutputFormatter for MarkdownFormatter<W> {
    fn format_word(&mut self, word: &Word<'_>) -> Result<()> {
        if self.word_count == 0 {
            writeln!(self.writer, "| # | word | delay |")?;
            writeln!(self.writer, "|---|------|-------|")?;
        }
        self.word_count += 1;
        self.total_delay += u64::from(word.delay);

        let (before, focal, after) = focal_parts(word.text, word.emphasis);
        let text = if focal.is_empty() {
            before.to_string()
        } else {
            format!("{before}**{focal}**{after}")
        };
        writeln!(
            self.writer,
            "| {} | {} | {} |",
            self.word_count,
            text.replace('|', "\\|"),
            word.delay
        )?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer)?;
        writeln!(self.writer, "---")?;
        writeln!(
            self.writer,
            "*Total words: {}, total delay: {}*",
            self.word_count, self.total_delay
        )?;
        self.writer.flush()?;
        Ok(())
    }
}
