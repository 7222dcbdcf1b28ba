//! Chunked reading over a book's resources
//!
//! A [`ChunkCursor`] pulls resources from a [`ResourceProvider`], reduces
//! their markup to plain text and emits [`ReadableUnit`](crate::ReadableUnit)s
//! of roughly `chunk_threshold` declared bytes each.

mod cursor;
mod entities;
pub mod markup;
mod provider;

pub use cursor::{ChunkCursor, CursorState, ReadingPosition};
pub use markup::extract_text;
pub use provider::{InMemoryBook, ResourceDescriptor, ResourceProvider};
