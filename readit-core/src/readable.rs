//! The working document passed between the chunk reader and the parser.

use serde::{Deserialize, Serialize};

/// Text plus the word, delay and emphasis lists derived from it
///
/// `words`, `delays`, `emphasis` and `offsets` are index-aligned once the
/// unit has been processed. The text is rewritten in place by the pipeline;
/// each word keeps the character offset where it starts in the text as it
/// was supplied, so word positions translate back into source offsets.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadableUnit {
    text: String,
    words: Vec<String>,
    delays: Vec<u32>,
    emphasis: Vec<usize>,
    /// Source character offset of each word
    #[serde(default)]
    offsets: Vec<usize>,
    source_len: usize,
    resume_offset: usize,
}

/// One display-ready word
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Word<'a> {
    pub text: &'a str,
    pub delay: u32,
    pub emphasis: usize,
}

impl ReadableUnit {
    /// Unit holding unprocessed text
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let source_len = text.chars().count();
        Self {
            text,
            source_len,
            ..Self::default()
        }
    }

    /// Append more unprocessed text
    pub fn append_text(&mut self, text: &str) {
        self.text.push_str(text);
        self.source_len += text.chars().count();
    }

    /// Current text (normalized and split once processed)
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Character length of the text as supplied
    pub fn source_len(&self) -> usize {
        self.source_len
    }

    /// Words in reading order
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Display delay per word
    pub fn delays(&self) -> &[u32] {
        &self.delays
    }

    /// Focal character index per word
    pub fn emphasis(&self) -> &[usize] {
        &self.emphasis
    }

    /// Number of words
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the unit has no words
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Word view at `index`
    pub fn word(&self, index: usize) -> Option<Word<'_>> {
        Some(Word {
            text: self.words.get(index)?,
            delay: *self.delays.get(index)?,
            emphasis: *self.emphasis.get(index)?,
        })
    }

    /// Iterate over display-ready words
    pub fn iter(&self) -> impl Iterator<Item = Word<'_>> + '_ {
        (0..self.len()).filter_map(move |index| self.word(index))
    }

    /// Source offset the reader should resume from inside this unit
    pub fn resume_offset(&self) -> usize {
        self.resume_offset
    }

    /// Word to start displaying at, derived from the resume offset
    pub fn resume_word_index(&self) -> usize {
        self.word_index_at_offset(self.resume_offset)
    }

    /// Source character offset of each word
    pub fn offsets(&self) -> &[usize] {
        &self.offsets
    }

    /// Character offset of the word at `index` in the supplied text
    ///
    /// Indices past the last word map to the end of the source.
    pub fn text_offset_of_word(&self, index: usize) -> usize {
        self.offsets
            .get(index)
            .copied()
            .unwrap_or(self.source_len)
            .min(self.source_len)
    }

    /// Index of the word covering `offset` (inverse of [`Self::text_offset_of_word`])
    ///
    /// That is the last word starting at or before `offset`; offsets before
    /// the first word map to it and an empty unit yields `0`.
    pub fn word_index_at_offset(&self, offset: usize) -> usize {
        self.offsets
            .partition_point(|&start| start <= offset)
            .saturating_sub(1)
    }

    pub(crate) fn set_text(&mut self, text: String) {
        self.text = text;
    }

    pub(crate) fn set_lists(
        &mut self,
        words: Vec<String>,
        delays: Vec<u32>,
        emphasis: Vec<usize>,
        offsets: Vec<usize>,
    ) {
        debug_assert_eq!(words.len(), delays.len());
        debug_assert_eq!(words.len(), emphasis.len());
        debug_assert_eq!(words.len(), offsets.len());
        self.words = words;
        self.delays = delays;
        self.emphasis = emphasis;
        self.offsets = offsets;
    }

    pub(crate) fn set_resume_offset(&mut self, offset: usize) {
        self.resume_offset = offset;
    }
}
