//! Plain text output formatter

use super::{focal_parts, OutputFormatter};
use anyhow::Result;
use readit_core::Word;
use std::io::{self, Write};

/// Plain text formatter - one word per line as `delay<TAB>wo[r]d`
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Consume the formatter, returning the writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl TextFormatter<io::Stdout> {
    /// Create a formatter that writes to stdout
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_word(&mut self, word: &Word<'_>) -> Result<()> {
        let (before, focal, after) = focal_parts(word.text, word.emphasis);
        writeln!(self.writer, "{}\t{before}[{focal}]{after}", word.delay)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
