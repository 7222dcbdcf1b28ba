//! Text normalization pipeline.
//!
//! [`normalize`] composes the punctuation stages in their required order;
//! [`split_overlong`] and [`strip_hyphen_markers`] run after it.
//! [`source_offsets`] maps the resulting tokens back into the input text.

pub mod offsets;
pub mod punctuation;
pub mod split;

pub use offsets::source_offsets;

pub use punctuation::{
    collapse_repeats, collapse_whitespace, insert_space_after, join_abbreviations,
    remove_space_before,
};
pub use split::{split_overlong, strip_hyphen_markers, strip_marker, tokens};

/// Whitespace and punctuation cleanup
///
/// Collapse whitespace, collapse repeated punctuation, pull attached
/// punctuation onto its word, space it from the next word, then join
/// dotted abbreviations. Idempotent.
pub fn normalize(text: &str) -> String {
    let text = collapse_whitespace(text);
    let text = collapse_repeats(&text);
    let text = remove_space_before(&text);
    let text = insert_space_after(&text);
    join_abbreviations(&text)
}
