//! Error types for the API

use std::path::PathBuf;

use thiserror::Error;

/// Boxed error raised by a [`ResourceProvider`](crate::reader::ResourceProvider)
pub type SourceError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Error type for API operations
#[derive(Debug, Error)]
pub enum Error {
    /// Coefficients or thresholds are unset or invalid
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Persisted resource id is not part of the current book
    #[error("Reading position not found: resource {resource_id:?} is not in the book")]
    PositionNotFound {
        /// The stale resource id
        resource_id: String,
    },

    /// The book container failed to supply a resource's content
    #[error("Failed to read resource {resource_id:?}: {source}")]
    ResourceRead {
        /// Id of the resource that could not be read
        resource_id: String,
        /// Error reported by the provider
        #[source]
        source: SourceError,
    },

    /// Session snapshot could not be encoded or decoded
    #[error("Snapshot error: {0}")]
    Snapshot(#[from] serde_json::Error),

    /// Configuration file could not be read
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        /// File that failed to load
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

/// Result type for API operations
pub type Result<T> = std::result::Result<T, Error>;
