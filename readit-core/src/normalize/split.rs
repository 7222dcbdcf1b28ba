//! Overlong-token splitting and continuation markers.
//!
//! Splitting marks every piece with hyphens: inner pieces as `-piece-`,
//! the remainder as `-rest`. The leading hyphen is a continuation marker
//! that [`strip_hyphen_markers`] removes again; the trailing hyphen stays
//! visible to the reader and lengthens the display delay.

/// Non-empty space-separated tokens of normalized text
///
/// The delay list and the word list are both built from this sequence,
/// which keeps them index-aligned.
pub fn tokens(text: &str) -> impl Iterator<Item = &str> {
    text.split(' ').filter(|token| !token.is_empty())
}

/// Split tokens whose length exceeds `max_length` (plus one tolerated
/// trailing character) into hyphen-marked pieces
///
/// Each cut takes at most `max_length` characters and always leaves at
/// least three for the continuation. The cut point moves left until the
/// continuation starts with a letter whenever one is in reach. A
/// `max_length` of zero is treated as one.
pub fn split_overlong(text: &str, max_length: usize) -> String {
    let mut out = String::with_capacity(text.len() + text.len() / 4);

    for token in tokens(text) {
        if !out.is_empty() {
            out.push(' ');
        }
        split_token(token, max_length, &mut out);
    }

    out
}

/// Character indices at which the pieces of a non-empty token start
///
/// A token that needs no split yields `[0]`.
pub(crate) fn piece_starts(chars: &[char], max_length: usize) -> Vec<usize> {
    let max_length = max_length.max(1);
    let mut starts = vec![0];
    let mut start = 0usize;

    while chars.len() - start - 1 > max_length {
        let remaining = chars.len() - start;
        let mut cut = max_length.min(remaining - 3).max(1);
        while cut > 1 && !chars[start + cut].is_alphabetic() {
            cut -= 1;
        }
        start += cut;
        starts.push(start);
    }

    starts
}

fn split_token(token: &str, max_length: usize, out: &mut String) {
    let chars: Vec<char> = token.chars().collect();
    let starts = piece_starts(&chars, max_length);
    if starts.len() == 1 {
        out.push_str(token);
        return;
    }

    for (n, &start) in starts.iter().enumerate() {
        out.push('-');
        match starts.get(n + 1) {
            Some(&end) => {
                out.extend(&chars[start..end]);
                out.push_str("- ");
            }
            None => out.extend(&chars[start..]),
        }
    }
}

/// Word list of split text: tokens with one leading continuation hyphen removed
pub fn strip_hyphen_markers(text: &str) -> Vec<String> {
    tokens(text).map(strip_marker).map(str::to_owned).collect()
}

/// Remove exactly one leading `-` from a token
#[inline]
pub fn strip_marker(token: &str) -> &str {
    token.strip_prefix('-').unwrap_or(token)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_short_tokens_unchanged() {
        assert_eq!(split_overlong("a short line", 13), "a short line");
        // One extra character is tolerated (usually trailing punctuation)
        assert_eq!(split_overlong("abcdefghijklmn", 13), "abcdefghijklmn");
    }

    #[test]
    fn test_split_extraordinarily() {
        assert_eq!(
            split_overlong("extraordinarily", 13),
            "-extraordinar- -ily"
        );
    }

    #[test]
    fn test_split_long_token_in_max_sized_pieces() {
        let token = "a".repeat(40);
        let split = split_overlong(&token, 13);
        let pieces: Vec<&str> = split.split(' ').collect();
        assert_eq!(pieces.len(), 3);
        assert_eq!(pieces[0], format!("-{}-", "a".repeat(13)));
        assert_eq!(pieces[1], format!("-{}-", "a".repeat(13)));
        assert_eq!(pieces[2], format!("-{}", "a".repeat(14)));
    }

    #[test]
    fn test_cut_backs_off_punctuation() {
        // The character at the cut (index 4) is a comma, so the cut moves to 3
        assert_eq!(split_overlong("abcd,efghij", 4), "-abc- -d,ef- -ghij");
    }

    #[test]
    fn test_tiny_threshold_terminates() {
        let split = split_overlong("abcdef", 1);
        let rebuilt: String = split
            .split(' ')
            .map(|piece| piece.trim_start_matches('-').trim_end_matches('-'))
            .collect();
        assert_eq!(rebuilt, "abcdef");
    }

    #[test]
    fn test_zero_threshold_acts_as_one() {
        assert_eq!(split_overlong("ab", 0), "ab");
        assert_eq!(split_overlong("abcdef", 0), split_overlong("abcdef", 1));
    }

    #[test]
    fn test_piece_starts() {
        let chars: Vec<char> = "extraordinarily".chars().collect();
        assert_eq!(piece_starts(&chars, 13), vec![0, 12]);
        assert_eq!(piece_starts(&chars[..14], 13), vec![0]);
    }

    #[test]
    fn test_strip_hyphen_markers() {
        assert_eq!(
            strip_hyphen_markers("-extraordinar- -ily  plain --double -"),
            vec!["extraordinar-", "ily", "plain", "-double", ""]
        );
    }

    #[test]
    fn test_tokens_skip_empty() {
        let collected: Vec<&str> = tokens(" a  b ").collect();
        assert_eq!(collected, vec!["a", "b"]);
    }

    proptest! {
        #[test]
        fn prop_split_reconstructs_token(
            token in "[a-zA-Z.,;]{40,80}",
            max_length in 2usize..16,
        ) {
            let split = split_overlong(&token, max_length);
            let pieces: Vec<&str> = split.split(' ').collect();
            prop_assert!(pieces.len() >= 2);

            let (last, inner) = pieces.split_last().unwrap();
            let mut rebuilt = String::new();
            for piece in inner {
                prop_assert!(piece.starts_with('-') && piece.ends_with('-'));
                let body = &piece[1..piece.len() - 1];
                prop_assert!(!body.is_empty());
                prop_assert!(body.chars().count() <= max_length);
                rebuilt.push_str(body);
            }
            prop_assert!(last.starts_with('-'));
            rebuilt.push_str(&last[1..]);

            prop_assert_eq!(rebuilt, token);
        }
    }
}
