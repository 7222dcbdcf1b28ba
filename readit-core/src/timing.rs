//! Per-word display delay.
//!
//! Every character of a word maps to one of five coefficient slots; the
//! word is shown for the largest slot value it touches, so a trailing
//! period always wins over the ordinary letters in front of it.

use serde::{Deserialize, Serialize};

use crate::api::{Error, Result};

/// Number of coefficient slots
pub const SLOT_COUNT: usize = 5;

/// Semantic slot of a timing coefficient
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DelaySlot {
    /// Ordinary characters
    Base = 0,
    /// Comma
    SoftBreak = 1,
    /// `.` `!` `?`
    SentenceEnd = 2,
    /// `-` `—` `:` `;`
    ClauseBreak = 3,
    /// Tab or newline
    HardBreak = 4,
}

impl DelaySlot {
    /// Classify a single character
    #[inline]
    pub fn of(ch: char) -> Self {
        match ch {
            ',' => DelaySlot::SoftBreak,
            '.' | '!' | '?' => DelaySlot::SentenceEnd,
            '-' | '—' | ':' | ';' => DelaySlot::ClauseBreak,
            '\t' | '\n' => DelaySlot::HardBreak,
            _ => DelaySlot::Base,
        }
    }
}

/// Five delay coefficients indexed by [`DelaySlot`]
///
/// Serialized as a plain list `[base, softBreak, sentenceEnd, clauseBreak, hardBreak]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<u32>", into = "Vec<u32>")]
pub struct TimingCoefficients([u32; SLOT_COUNT]);

impl TimingCoefficients {
    /// Create coefficients from the five slot values
    pub const fn new(values: [u32; SLOT_COUNT]) -> Self {
        Self(values)
    }

    /// Build from a slice, failing unless it has exactly five entries
    pub fn from_slice(values: &[u32]) -> Result<Self> {
        let values: [u32; SLOT_COUNT] = values.try_into().map_err(|_| {
            Error::Configuration(format!(
                "expected {SLOT_COUNT} timing coefficients, got {}",
                values.len()
            ))
        })?;
        Ok(Self(values))
    }

    /// Value of one slot
    #[inline]
    pub fn get(&self, slot: DelaySlot) -> u32 {
        self.0[slot as usize]
    }

    /// All slot values in order
    pub fn as_array(&self) -> &[u32; SLOT_COUNT] {
        &self.0
    }
}

impl TryFrom<Vec<u32>> for TimingCoefficients {
    type Error = Error;

    fn try_from(values: Vec<u32>) -> Result<Self> {
        Self::from_slice(&values)
    }
}

impl From<TimingCoefficients> for Vec<u32> {
    fn from(coefficients: TimingCoefficients) -> Self {
        coefficients.0.to_vec()
    }
}

/// Display delay of a word
///
/// Empty words get the base coefficient.
pub fn delay(word: &str, coefficients: &TimingCoefficients) -> u32 {
    if word.is_empty() {
        return coefficients.get(DelaySlot::Base);
    }

    word.chars()
        .map(|ch| coefficients.get(DelaySlot::of(ch)))
        .max()
        .unwrap_or_else(|| coefficients.get(DelaySlot::Base))
}

#[cfg(test)]
mod tests {
    use super::*;

    const COEFFICIENTS: TimingCoefficients = TimingCoefficients::new([10, 12, 20, 15, 25]);

    #[test]
    fn test_plain_word_uses_base() {
        assert_eq!(delay("reading", &COEFFICIENTS), 10);
    }

    #[test]
    fn test_empty_word_uses_base() {
        assert_eq!(delay("", &COEFFICIENTS), 10);
    }

    #[test]
    fn test_sentence_end_dominates_letters() {
        assert_eq!(delay("wait...", &COEFFICIENTS), 20);
        assert_eq!(delay("Really?", &COEFFICIENTS), 20);
        assert_eq!(delay("stop!", &COEFFICIENTS), 20);
    }

    #[test]
    fn test_slot_table() {
        assert_eq!(delay("well,", &COEFFICIENTS), 12);
        assert_eq!(delay("-segment-", &COEFFICIENTS), 15);
        assert_eq!(delay("so—", &COEFFICIENTS), 15);
        assert_eq!(delay("note:", &COEFFICIENTS), 15);
        assert_eq!(delay("then;", &COEFFICIENTS), 15);
        assert_eq!(delay("line\n", &COEFFICIENTS), 25);
        assert_eq!(delay("\tindent", &COEFFICIENTS), 25);
    }

    #[test]
    fn test_maximum_wins_not_last() {
        // Comma after the period must not lower the delay
        assert_eq!(delay("etc.,", &COEFFICIENTS), 20);
    }

    #[test]
    fn test_max_even_when_base_is_largest() {
        let flat = TimingCoefficients::new([30, 1, 2, 3, 4]);
        assert_eq!(delay("end.", &flat), 30);
    }

    #[test]
    fn test_from_slice_rejects_wrong_length() {
        assert!(TimingCoefficients::from_slice(&[1, 2, 3]).is_err());
        assert!(TimingCoefficients::from_slice(&[1, 2, 3, 4, 5, 6]).is_err());
        let ok = TimingCoefficients::from_slice(&[1, 2, 3, 4, 5]).unwrap();
        assert_eq!(ok.get(DelaySlot::HardBreak), 5);
    }

    #[test]
    fn test_serde_as_list() {
        let json = serde_json::to_string(&COEFFICIENTS).unwrap();
        assert_eq!(json, "[10,12,20,15,25]");
        let back: TimingCoefficients = serde_json::from_str(&json).unwrap();
        assert_eq!(back, COEFFICIENTS);
        assert!(serde_json::from_str::<TimingCoefficients>("[1,2]").is_err());
    }
}
