//! Output formatting module

use anyhow::Result;
use readit_core::Word;

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Format and output a single display-ready word
    fn format_word(&mut self, word: &Word<'_>) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;

/// Split a word around its focal character: `(before, focal, after)`
///
/// An out-of-range index yields an empty focal part.
pub fn focal_parts(text: &str, index: usize) -> (&str, &str, &str) {
    let mut chars = text.char_indices().skip(index);
    match chars.next() {
        Some((start, ch)) => {
            let end = start + ch.len_utf8();
            (&text[..start], &text[start..end], &text[end..])
        }
        None => (text, "", ""),
    }
}
