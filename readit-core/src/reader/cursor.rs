//! Chunk cursor over a book's resource list
//!
//! A cursor starts [`CursorState::Unpositioned`] when opened from a
//! persisted [`ReadingPosition`], resolves the resource on its first
//! [`ChunkCursor::next_chunk`] call, and ends [`CursorState::Exhausted`]
//! once the resource list runs out. Cursor fields only change after a
//! whole chunk has been assembled; a failed read leaves them untouched.

use serde::{Deserialize, Serialize};

use super::markup::extract_text;
use super::provider::ResourceProvider;
use crate::api::config::defaults;
use crate::api::{Error, Result};
use crate::readable::ReadableUnit;

/// Persistable reading position
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReadingPosition {
    /// Resource the position refers to
    pub resource_id: String,
    /// Character offset inside that resource's extracted text
    pub text_offset: usize,
}

impl ReadingPosition {
    pub fn new(resource_id: impl Into<String>, text_offset: usize) -> Self {
        Self {
            resource_id: resource_id.into(),
            text_offset,
        }
    }
}

/// Cursor lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CursorState {
    /// Resource id known, index not resolved yet
    Unpositioned,
    /// Index resolved, ready to emit
    Positioned,
    /// No resources left
    Exhausted,
}

/// Reading position across an ordered resource list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChunkCursor {
    state: CursorState,
    resource_id: String,
    text_offset: usize,
    index: usize,
    chunk_start: usize,
    last_emitted_lengths: Vec<usize>,
    threshold: usize,
}

impl ChunkCursor {
    /// Cursor resuming from a persisted position
    pub fn open(position: ReadingPosition) -> Self {
        Self {
            state: CursorState::Unpositioned,
            resource_id: position.resource_id,
            text_offset: position.text_offset,
            index: 0,
            chunk_start: 0,
            last_emitted_lengths: Vec::new(),
            threshold: defaults::CHUNK_THRESHOLD,
        }
    }

    /// Cursor at the first resource; an empty book starts exhausted
    pub fn at_start<P: ResourceProvider + ?Sized>(provider: &P) -> Self {
        match provider.resources().first() {
            Some(first) => Self {
                state: CursorState::Positioned,
                ..Self::open(ReadingPosition::new(first.id.clone(), 0))
            },
            None => Self {
                state: CursorState::Exhausted,
                ..Self::open(ReadingPosition::default())
            },
        }
    }

    /// Set the declared-byte threshold that ends a chunk
    pub fn with_threshold(mut self, bytes: usize) -> Self {
        self.threshold = bytes.max(1);
        self
    }

    pub fn state(&self) -> CursorState {
        self.state
    }

    pub fn threshold(&self) -> usize {
        self.threshold
    }

    /// Index of the next resource to read (meaningless while unpositioned)
    pub fn current_index(&self) -> usize {
        self.index
    }

    /// Extracted lengths of the resources in the last emitted chunk
    ///
    /// Each length includes the separating space appended after the
    /// resource text; empty resources record `0`.
    pub fn last_emitted_lengths(&self) -> &[usize] {
        &self.last_emitted_lengths
    }

    /// Position of the next read
    ///
    /// To persist where a reader actually is inside the last emitted chunk,
    /// use [`Self::locate`] with the offset of the displayed word.
    pub fn position(&self) -> ReadingPosition {
        ReadingPosition::new(self.resource_id.clone(), self.text_offset)
    }

    /// Assemble the next chunk of text
    ///
    /// Resources are read from the current index until their declared sizes
    /// add up to the threshold. Running off the end of the list moves the
    /// cursor to [`CursorState::Exhausted`] and returns what was collected;
    /// an exhausted cursor returns an empty unit.
    pub fn next_chunk<P: ResourceProvider + ?Sized>(
        &mut self,
        provider: &P,
    ) -> Result<ReadableUnit> {
        let start = match self.state {
            CursorState::Exhausted => return Ok(ReadableUnit::default()),
            CursorState::Positioned => self.index,
            CursorState::Unpositioned => self.resolve_persisted(provider)?,
        };

        let descriptors = provider.resources();
        let mut unit = ReadableUnit::default();
        let mut lengths = Vec::new();
        let mut declared = 0usize;
        let mut index = start;
        let mut exhausted = false;

        while declared < self.threshold {
            let Some(descriptor) = descriptors.get(index) else {
                exhausted = true;
                break;
            };

            let raw = provider
                .read(index)
                .map_err(|source| Error::ResourceRead {
                    resource_id: descriptor.id.clone(),
                    source,
                })?;
            let text = extract_text(&raw);

            if text.is_empty() {
                lengths.push(0);
            } else {
                unit.append_text(&text);
                unit.append_text(" ");
                lengths.push(text.chars().count() + 1);
            }

            declared += descriptor.declared_size;
            index += 1;
        }

        log::debug!(
            "chunk of {} resources from index {start} ({declared} declared bytes, {} chars)",
            lengths.len(),
            unit.source_len()
        );

        if !lengths.is_empty() {
            self.chunk_start = start;
            self.last_emitted_lengths = lengths;
        }
        if self.text_offset > 0 {
            unit.set_resume_offset(self.text_offset.min(unit.source_len()));
            self.text_offset = 0;
        }
        self.index = index;
        if let Some(next) = descriptors.get(index).or_else(|| descriptors.last()) {
            self.resource_id = next.id.clone();
        }
        self.state = if exhausted {
            CursorState::Exhausted
        } else {
            CursorState::Positioned
        };

        Ok(unit)
    }

    /// Translate an offset inside the last emitted chunk into a position
    ///
    /// Walks the recorded lengths from the chunk's first resource while the
    /// remaining offset reaches past the current entry; an offset equal to a
    /// recorded length is the first character of the next resource. Does
    /// not move the cursor.
    pub fn locate<P: ResourceProvider + ?Sized>(
        &self,
        provider: &P,
        offset: usize,
    ) -> Result<ReadingPosition> {
        let (index, local) = self.remap(provider, offset)?;
        Ok(ReadingPosition::new(
            provider.resources()[index].id.clone(),
            local,
        ))
    }

    /// Reposition at the resource covering `offset` of the last emitted chunk
    ///
    /// The next chunk starts at that resource and carries the local offset
    /// as its resume offset.
    pub fn seek<P: ResourceProvider + ?Sized>(
        &mut self,
        provider: &P,
        offset: usize,
    ) -> Result<ReadingPosition> {
        let (index, local) = self.remap(provider, offset)?;
        let position = ReadingPosition::new(provider.resources()[index].id.clone(), local);

        log::debug!(
            "seek to offset {offset}: resource {:?} at {local}",
            position.resource_id
        );

        self.state = CursorState::Positioned;
        self.resource_id = position.resource_id.clone();
        self.text_offset = local;
        self.index = index;
        self.chunk_start = index;
        self.last_emitted_lengths.clear();

        Ok(position)
    }

    /// Fraction of the book's resources already consumed, in `[0, 1]`
    pub fn progress<P: ResourceProvider + ?Sized>(&self, provider: &P) -> f64 {
        let total = provider.resource_count();
        if total == 0 || self.state == CursorState::Exhausted {
            return 1.0;
        }
        let consumed = match self.state {
            CursorState::Unpositioned => provider.index_of(&self.resource_id).unwrap_or(0),
            _ => self.index,
        };
        (consumed as f64 / total as f64).min(1.0)
    }

    fn resolve_persisted<P: ResourceProvider + ?Sized>(&self, provider: &P) -> Result<usize> {
        provider
            .index_of(&self.resource_id)
            .ok_or_else(|| Error::PositionNotFound {
                resource_id: self.resource_id.clone(),
            })
    }

    fn remap<P: ResourceProvider + ?Sized>(
        &self,
        provider: &P,
        offset: usize,
    ) -> Result<(usize, usize)> {
        let anchor = match self.state {
            CursorState::Unpositioned => self.resolve_persisted(provider)?,
            _ => self.chunk_start,
        };

        let lengths = &self.last_emitted_lengths;
        let mut cursor = 0usize;
        let mut local = offset;
        while cursor + 1 < lengths.len() && local >= lengths[cursor] {
            local -= lengths[cursor];
            cursor += 1;
        }

        let index = anchor + cursor;
        if index >= provider.resource_count() {
            return Err(Error::PositionNotFound {
                resource_id: self.resource_id.clone(),
            });
        }
        Ok((index, local))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reader::InMemoryBook;

    fn sized_book(sizes: &[(&str, usize)]) -> InMemoryBook {
        let mut book = InMemoryBook::new();
        for (id, size) in sizes {
            book.push_with_size(*id, format!("<p>text of {id}</p>"), *size);
        }
        book
    }

    #[test]
    fn test_chunk_reaches_threshold_then_exhausts() {
        let book = sized_book(&[("r1", 600), ("r2", 600)]);
        let mut cursor = ChunkCursor::at_start(&book).with_threshold(1024);

        let unit = cursor.next_chunk(&book).unwrap();
        assert_eq!(unit.text(), "text of r1 text of r2 ");
        assert_eq!(cursor.state(), CursorState::Positioned);
        assert_eq!(cursor.current_index(), 2);
        assert_eq!(cursor.last_emitted_lengths(), [11, 11]);

        let unit = cursor.next_chunk(&book).unwrap();
        assert_eq!(unit.text(), "");
        assert_eq!(cursor.state(), CursorState::Exhausted);
        assert_eq!(cursor.next_chunk(&book).unwrap(), ReadableUnit::default());
    }

    #[test]
    fn test_threshold_splits_chunks() {
        let book = sized_book(&[("a", 700), ("b", 700), ("c", 700)]);
        let mut cursor = ChunkCursor::at_start(&book).with_threshold(1024);

        assert_eq!(cursor.next_chunk(&book).unwrap().text(), "text of a text of b ");
        assert_eq!(cursor.position(), ReadingPosition::new("c", 0));

        // Runs past the end before reaching the threshold
        assert_eq!(cursor.next_chunk(&book).unwrap().text(), "text of c ");
        assert_eq!(cursor.state(), CursorState::Exhausted);
    }

    #[test]
    fn test_empty_book_starts_exhausted() {
        let book = InMemoryBook::new();
        let mut cursor = ChunkCursor::at_start(&book);
        assert_eq!(cursor.state(), CursorState::Exhausted);
        assert!(cursor.next_chunk(&book).unwrap().is_empty());
        assert_eq!(cursor.progress(&book), 1.0);
    }

    #[test]
    fn test_open_resolves_persisted_id() {
        let book = sized_book(&[("r1", 10), ("r2", 10), ("r3", 10)]);
        let mut cursor = ChunkCursor::open(ReadingPosition::new("r2", 3)).with_threshold(15);
        assert_eq!(cursor.state(), CursorState::Unpositioned);

        let unit = cursor.next_chunk(&book).unwrap();
        assert_eq!(unit.text(), "text of r2 text of r3 ");
        assert_eq!(unit.resume_offset(), 3);
        assert_eq!(cursor.state(), CursorState::Positioned);
        assert_eq!(cursor.position().text_offset, 0);
    }

    #[test]
    fn test_unknown_position_fails() {
        let book = sized_book(&[("r1", 10)]);
        let mut cursor = ChunkCursor::open(ReadingPosition::new("gone", 0));
        let err = cursor.next_chunk(&book).unwrap_err();
        assert!(matches!(err, Error::PositionNotFound { ref resource_id } if resource_id == "gone"));
        assert_eq!(cursor.state(), CursorState::Unpositioned);
    }

    #[test]
    fn test_locate_and_seek_walk_lengths() {
        let mut book = InMemoryBook::new();
        book.push_with_size("first", format!("<p>{}</p>", "a".repeat(119)), 10);
        book.push_with_size("second", format!("<p>{}</p>", "b".repeat(94)), 10);
        let mut cursor = ChunkCursor::at_start(&book).with_threshold(1024);
        cursor.next_chunk(&book).unwrap();
        assert_eq!(cursor.last_emitted_lengths(), [120, 95]);

        assert_eq!(cursor.locate(&book, 40).unwrap(), ReadingPosition::new("first", 40));
        assert_eq!(cursor.locate(&book, 140).unwrap(), ReadingPosition::new("second", 20));
        assert_eq!(cursor.locate(&book, 119).unwrap(), ReadingPosition::new("first", 119));
        assert_eq!(cursor.locate(&book, 120).unwrap(), ReadingPosition::new("second", 0));
        assert_eq!(cursor.state(), CursorState::Exhausted);

        let position = cursor.seek(&book, 140).unwrap();
        assert_eq!(position, ReadingPosition::new("second", 20));
        assert_eq!(cursor.state(), CursorState::Positioned);

        let unit = cursor.next_chunk(&book).unwrap();
        assert_eq!(unit.text(), format!("{} ", "b".repeat(94)));
        assert_eq!(unit.resume_offset(), 20);
    }

    #[test]
    fn test_progress() {
        let book = sized_book(&[("a", 10), ("b", 10), ("c", 10), ("d", 10)]);
        let mut cursor = ChunkCursor::at_start(&book).with_threshold(20);
        assert_eq!(cursor.progress(&book), 0.0);
        cursor.next_chunk(&book).unwrap();
        assert_eq!(cursor.progress(&book), 0.5);

        let reopened = ChunkCursor::open(ReadingPosition::new("d", 0));
        assert_eq!(reopened.progress(&book), 0.75);
    }

    #[test]
    fn test_cursor_serde() {
        let cursor = ChunkCursor::open(ReadingPosition::new("r9", 12));
        let json = serde_json::to_string(&cursor).unwrap();
        assert!(json.contains("\"unpositioned\""));
        let back: ChunkCursor = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cursor);
    }
}
