//! Session pause/resume snapshots
//!
//! A snapshot bundles the active unit, the timing coefficients it was
//! parsed with, and the chunk cursor, serialized as JSON.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::api::{Error, Result};
use crate::reader::{ChunkCursor, ReadingPosition, ResourceProvider};
use crate::readable::ReadableUnit;
use crate::timing::TimingCoefficients;

/// Everything needed to continue a paused reading session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub unit: ReadableUnit,
    pub coefficients: TimingCoefficients,
    pub cursor: ChunkCursor,
    /// Next word of `unit` to display
    #[serde(default)]
    pub word_index: usize,
}

impl SessionSnapshot {
    pub fn new(unit: ReadableUnit, coefficients: TimingCoefficients, cursor: ChunkCursor) -> Self {
        Self {
            unit,
            coefficients,
            cursor,
            word_index: 0,
        }
    }

    pub fn with_word_index(mut self, word_index: usize) -> Self {
        self.word_index = word_index;
        self
    }

    /// Whether words of the stored unit remain to be displayed
    pub fn has_pending_words(&self) -> bool {
        self.word_index < self.unit.len()
    }

    /// Persistable position of the next word to display
    pub fn reading_position<P: ResourceProvider + ?Sized>(
        &self,
        provider: &P,
    ) -> Result<ReadingPosition> {
        let offset = self.unit.text_offset_of_word(self.word_index);
        self.cursor.locate(provider, offset)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(source: &str) -> Result<Self> {
        Ok(serde_json::from_str(source)?)
    }

    /// Write the snapshot to `path`
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        std::fs::write(path, self.to_json()?).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Read a snapshot from `path`
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&source)
    }
}
