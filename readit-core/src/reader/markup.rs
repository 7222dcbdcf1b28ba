//! Plain-text extraction from resource markup
//!
//! Only the text of `<p>` and `<title>` elements (including nested inline
//! elements) is kept. Resources without markup pass through as plain text.

use quick_xml::events::Event;
use quick_xml::Reader;

use super::entities::decode_entity;
use crate::normalize::collapse_whitespace;

/// Elements whose text is read
const TEXT_ELEMENTS: &[&[u8]] = &[b"p", b"title"];

/// Extract readable text from raw resource bytes
///
/// Element texts are whitespace-collapsed, trimmed, and joined with single
/// spaces. Malformed markup stops extraction early and keeps what was
/// collected so far.
pub fn extract_text(raw: &[u8]) -> String {
    let source = String::from_utf8_lossy(raw);
    if !has_markup(&source) {
        return collapse_whitespace(&source).trim().to_owned();
    }

    let mut reader = Reader::from_str(&source);
    let config = reader.config_mut();
    config.check_end_names = false;
    config.allow_unmatched_ends = true;

    let mut pieces: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut depth = 0usize;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => {
                let name = e.name();
                if is_text_element(name.as_ref()) {
                    depth += 1;
                } else if depth > 0 && local_name(name.as_ref()).eq_ignore_ascii_case(b"br") {
                    current.push(' ');
                }
            }
            Ok(Event::Empty(_)) => {
                if depth > 0 {
                    current.push(' ');
                }
            }
            Ok(Event::Text(e)) => {
                if depth > 0 {
                    current.push_str(&String::from_utf8_lossy(e.as_ref()));
                }
            }
            Ok(Event::CData(e)) => {
                if depth > 0 {
                    current.push_str(&String::from_utf8_lossy(e.as_ref()));
                }
            }
            Ok(Event::GeneralRef(e)) => {
                if depth > 0 {
                    let entity = String::from_utf8_lossy(e.as_ref());
                    match decode_entity(&entity) {
                        Some(ch) => current.push(ch),
                        None => {
                            current.push('&');
                            current.push_str(&entity);
                            current.push(';');
                        }
                    }
                }
            }
            Ok(Event::End(e)) => {
                if is_text_element(e.name().as_ref()) && depth > 0 {
                    depth -= 1;
                    if depth == 0 {
                        flush(&mut current, &mut pieces);
                    }
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                log::warn!(
                    "malformed markup at byte {}: {e}; keeping text read so far",
                    reader.error_position()
                );
                break;
            }
            _ => {}
        }
    }
    flush(&mut current, &mut pieces);

    pieces.join(" ")
}

fn flush(current: &mut String, pieces: &mut Vec<String>) {
    let collapsed = collapse_whitespace(current);
    let trimmed = collapsed.trim();
    if !trimmed.is_empty() {
        pieces.push(trimmed.to_owned());
    }
    current.clear();
}

fn is_text_element(name: &[u8]) -> bool {
    let local = local_name(name);
    TEXT_ELEMENTS
        .iter()
        .any(|element| local.eq_ignore_ascii_case(element))
}

fn local_name(name: &[u8]) -> &[u8] {
    name.iter()
        .rposition(|&b| b == b':')
        .map(|i| &name[i + 1..])
        .unwrap_or(name)
}

/// Whether the text contains anything that looks like a tag
fn has_markup(text: &str) -> bool {
    text.as_bytes()
        .windows(2)
        .any(|pair| pair[0] == b'<' && (pair[1].is_ascii_alphabetic() || b"/!?".contains(&pair[1])))
}
