//! Whitespace and punctuation cleanup stages.
//!
//! Each stage is a pure `&str -> String` transform. They are only
//! meaningful in the order [`super::normalize`] applies them: later stages
//! assume single spaces and no repeated punctuation.

use std::sync::LazyLock;

use regex::Regex;

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

/// Characters whose immediate repetitions are collapsed
const REPEATABLE: &[char] = &[' ', '.', '!', '?', '-', '—', ':', ';', ',', '"', '(', ')'];

/// Punctuation glued to the preceding word and followed by a space
const ATTACHED: &[char] = &['.', '!', '?', '-', '—', ':', ';', ',', ')'];

#[inline]
fn is_repeatable(ch: char) -> bool {
    REPEATABLE.contains(&ch)
}

#[inline]
fn is_attached(ch: char) -> bool {
    ATTACHED.contains(&ch)
}

/// Replace every whitespace run with a single space
pub fn collapse_whitespace(text: &str) -> String {
    WHITESPACE_RUN.replace_all(text, " ").into_owned()
}

/// Drop a punctuation character equal to the last kept one
///
/// Any other character resets the tracking, so `"!!!"` becomes `"!"` while
/// `"!?"` and `"! !"` are left alone.
pub fn collapse_repeats(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut previous: Option<char> = None;

    for ch in text.chars() {
        if is_repeatable(ch) {
            if previous != Some(ch) {
                previous = Some(ch);
                out.push(ch);
            }
        } else {
            previous = None;
            out.push(ch);
        }
    }

    out
}

/// Remove the space in front of attached punctuation (`"word ."` → `"word."`)
pub fn remove_space_before(text: &str) -> String {
    let mut out = String::with_capacity(text.len());

    for ch in text.chars() {
        if is_attached(ch) && out.ends_with(' ') {
            out.pop();
        }
        out.push(ch);
    }

    out
}

/// Ensure a space after attached punctuation (`"word.Next"` → `"word. Next"`)
///
/// Nothing is appended after punctuation that ends the text.
pub fn insert_space_after(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + text.len() / 8);
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        out.push(ch);
        if is_attached(ch) {
            if let Some(&next) = chars.peek() {
                if next != ' ' {
                    out.push(' ');
                }
            }
        }
    }

    out
}

/// Join dotted abbreviations (`"U. S. A."` → `"U.S.A."`)
///
/// A character right after a `.` is dropped when the character two
/// positions further is also a `.`. Heuristic only.
pub fn join_abbreviations(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());

    for (i, &ch) in chars.iter().enumerate() {
        let after_dot = i > 0 && chars[i - 1] == '.';
        if after_dot && chars.get(i + 2) == Some(&'.') {
            continue;
        }
        out.push(ch);
    }

    out
}
