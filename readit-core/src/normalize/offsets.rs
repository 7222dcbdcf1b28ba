//! Positions of split tokens in the text as it was supplied.
//!
//! Normalization only drops characters and inserts spaces, so every
//! normalized token is a subsequence of the source. Matching tokens
//! greedily in order recovers the source index of each character; split
//! pieces take the index of their first character.

use super::split::{piece_starts, tokens};

/// Source character offset of every token [`super::split_overlong`] produces
///
/// `normalized` must be the normalized form of `source`; the result is
/// index-aligned with `tokens(&split_overlong(normalized, max_length))` and
/// strictly increasing.
pub fn source_offsets(source: &str, normalized: &str, max_length: usize) -> Vec<usize> {
    let source: Vec<char> = source.chars().collect();
    let mut offsets = Vec::new();
    let mut next = 0usize;

    for token in tokens(normalized) {
        let chars: Vec<char> = token.chars().collect();
        let mut positions = Vec::with_capacity(chars.len());

        for &ch in &chars {
            let found = source
                .get(next..)
                .and_then(|rest| rest.iter().position(|&c| c == ch))
                .map(|skip| next + skip);
            match found {
                Some(at) => {
                    positions.push(at);
                    next = at + 1;
                }
                None => positions.push(next.min(source.len())),
            }
        }

        offsets.extend(
            piece_starts(&chars, max_length)
                .into_iter()
                .map(|start| positions[start]),
        );
    }

    offsets
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::{normalize, split_overlong};

    fn offsets_of(source: &str, max_length: usize) -> Vec<usize> {
        source_offsets(source, &normalize(source), max_length)
    }

    #[test]
    fn test_plain_words() {
        assert_eq!(offsets_of("Hello world. Bye", 13), vec![0, 6, 13]);
    }

    #[test]
    fn test_dropped_characters_keep_positions() {
        // "Hello! World?" with the repeats and extra spaces removed
        assert_eq!(offsets_of("Hello!!!   World??", 13), vec![0, 11]);
        assert_eq!(offsets_of("  word , next", 13), vec![2, 9]);
    }

    #[test]
    fn test_split_pieces() {
        let source = "Extraordinarily fine";
        assert_eq!(offsets_of(source, 13), vec![0, 12, 16]);
    }

    #[test]
    fn test_aligned_with_tokens() {
        let source = "Wait...   what?!  Supercalifragilistic,yes. U. S. A.";
        let normalized = normalize(source);
        let split = split_overlong(&normalized, 6);
        let offsets = source_offsets(source, &normalized, 6);

        assert_eq!(offsets.len(), tokens(&split).count());
        assert!(offsets.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn test_empty_text() {
        assert!(offsets_of("", 13).is_empty());
        assert!(offsets_of("   ", 13).is_empty());
    }
}
