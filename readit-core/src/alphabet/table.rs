//! Letter weight lookup with an ASCII fast path

use std::collections::HashMap;

use super::config::AlphabetConfig;

/// Immutable letter → emphasis weight mapping
///
/// Built once and shared by reference; lookups never allocate.
#[derive(Debug, Clone)]
pub struct PriorityTable {
    /// Weights for chars 0-127
    ascii_table: [Option<u32>; 128],
    /// Weights for everything else (Cyrillic etc.)
    non_ascii: HashMap<char, u32>,
    /// Codes of the alphabets merged into this table
    codes: Vec<String>,
}

impl Default for PriorityTable {
    fn default() -> Self {
        Self::new()
    }
}

impl PriorityTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self {
            ascii_table: [None; 128],
            non_ascii: HashMap::new(),
            codes: Vec::new(),
        }
    }

    /// Set the weight of a single letter, replacing any previous weight
    pub fn insert(&mut self, ch: char, weight: u32) {
        if ch.is_ascii() {
            self.ascii_table[ch as usize] = Some(weight);
        } else {
            self.non_ascii.insert(ch, weight);
        }
    }

    /// Merge every letter of an alphabet
    pub fn merge(&mut self, alphabet: &AlphabetConfig) {
        for (ch, weight) in alphabet.letters() {
            self.insert(ch, weight);
        }
        self.codes.push(alphabet.metadata.code.clone());
    }

    /// Weight of a letter, `None` when the letter is unknown - hot path
    #[inline]
    pub fn priority(&self, ch: char) -> Option<u32> {
        if ch.is_ascii() {
            self.ascii_table[ch as usize]
        } else {
            self.non_ascii.get(&ch).copied()
        }
    }

    /// Codes of the merged alphabets, in merge order
    pub fn codes(&self) -> &[String] {
        &self.codes
    }

    /// Number of letters with a weight
    pub fn len(&self) -> usize {
        self.ascii_table.iter().flatten().count() + self.non_ascii.len()
    }

    /// Whether no letter has a weight
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
