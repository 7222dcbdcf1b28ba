//! Focal character selection.
//!
//! Each letter scores `weight * 100 / max(1, |len/2 - i|)`, so heavy
//! letters near the middle of the word win. Scores are kept per distinct
//! (case-folded) letter; a letter immediately repeated multiplies its
//! running best by four. Scores saturate at `u64::MAX`.

use smallvec::SmallVec;

use crate::alphabet::PriorityTable;

/// Multiplier applied when a letter is immediately repeated
const DOUBLE_LETTER_BOOST: u64 = 4;

/// Best score recorded for one letter
#[derive(Debug, Clone, Copy)]
struct LetterScore {
    letter: char,
    score: u64,
    position: usize,
}

/// Lowercase a single character, keeping it when lowercasing expands it
#[inline]
fn fold_case(ch: char) -> char {
    let mut lower = ch.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(folded), None) => folded,
        _ => ch,
    }
}

/// Character index of the focal letter of `word`
///
/// Falls back to `len / 2` (in characters) when no letter scores above
/// zero; an empty word yields `0`.
pub fn emphasize(word: &str, table: &PriorityTable) -> usize {
    let chars: SmallVec<[char; 32]> = word.chars().collect();
    let len = chars.len();
    let middle = len / 2;

    let mut scores: SmallVec<[LetterScore; 16]> = SmallVec::new();

    for (i, &ch) in chars.iter().enumerate() {
        if !ch.is_alphabetic() {
            continue;
        }

        let letter = fold_case(ch);
        let distance = middle.abs_diff(i).max(1) as u64;
        let score = table
            .priority(letter)
            .map_or(0, |weight| u64::from(weight).saturating_mul(100) / distance);

        let slot = match scores.iter().position(|entry| entry.letter == letter) {
            Some(slot) => {
                if scores[slot].score < score {
                    scores[slot].score = score;
                    scores[slot].position = i;
                }
                slot
            }
            None => {
                scores.push(LetterScore {
                    letter,
                    score,
                    position: i,
                });
                scores.len() - 1
            }
        };

        if chars.get(i + 1) == Some(&ch) {
            scores[slot].score = scores[slot].score.saturating_mul(DOUBLE_LETTER_BOOST);
            scores[slot].position = i;
        }
    }

    let mut focal = middle;
    let mut best = 0;
    for entry in &scores {
        if entry.score > best {
            best = entry.score;
            focal = entry.position;
        }
    }
    focal
}

/// Focal indices for a word list, index-aligned with it
pub fn emphasis_list<S: AsRef<str>>(words: &[S], table: &PriorityTable) -> Vec<usize> {
    words
        .iter()
        .map(|word| emphasize(word.as_ref(), table))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn latin() -> PriorityTable {
        PriorityTable::from_alphabets(&["latin"]).unwrap()
    }

    #[test]
    fn test_double_letter_boost_on_book() {
        // len 4, middle 2. Scores without boost:
        //   b@0: 4*100/2 = 200, o@1: 8*100/1 = 800, o@2: 800, k@3: 8*100/1 = 800
        // The repeated `o` at 1 is boosted to 3200 and beats `k`.
        assert_eq!(emphasize("book", &latin()), 1);
    }

    #[test]
    fn test_heavy_letter_near_middle() {
        // "cat": middle 1, c@0: 400, a@1: 1000, t@2: 1500
        assert_eq!(emphasize("cat", &latin()), 2);
    }

    #[test]
    fn test_case_is_folded() {
        assert_eq!(emphasize("CAT", &latin()), emphasize("cat", &latin()));
    }

    #[test]
    fn test_non_letters_skipped() {
        // "a," middle 1: a@0 scores 1000; ',' is ignored
        assert_eq!(emphasize("a,", &latin()), 0);
    }

    #[test]
    fn test_fallback_to_middle() {
        assert_eq!(emphasize("12345", &latin()), 2);
        assert_eq!(emphasize("", &latin()), 0);
        // `q` has no weight in the Latin table
        assert_eq!(emphasize("qqq", &latin()), 1);
    }

    #[test]
    fn test_unknown_alphabet_falls_back() {
        assert_eq!(emphasize("λόγος", &latin()), 2);
    }

    #[test]
    fn test_cyrillic_word() {
        let table = PriorityTable::builtin().unwrap();
        // "мир": middle 1, м@0: 400, и@1: 600, р@2: 1000
        assert_eq!(emphasize("мир", &table), 2);
    }

    #[test]
    fn test_long_letter_run_saturates() {
        // The boost keeps moving the position to the last repeated letter
        let table = PriorityTable::builtin().unwrap();
        assert_eq!(emphasize(&"t".repeat(64), &table), 62);

        let mut heavy = PriorityTable::new();
        heavy.insert('z', u32::MAX);
        assert_eq!(emphasize(&"z".repeat(64), &heavy), 62);
    }

    #[test]
    fn test_emphasis_list_aligned() {
        let words = ["book", "", "cat"];
        assert_eq!(emphasis_list(&words, &latin()), vec![1, 0, 2]);
    }
}
