//! Error types for EditorPrefs reading and querying
//!
//! This module defines the error types used throughout the uepv library.
//! All public functions return [`Result<T, Error>`] for consistent error handling.
//!
//! Reading a preference store has exactly one failure mode,
//! [`Error::StoreUnavailable`]. The remaining variants belong to the
//! snapshot and glob query surfaces.

use std::path::PathBuf;

/// Errors that can occur while reading and querying Unity preferences
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The preference store location is missing or cannot be opened for reading
    #[error("Preference store unavailable at {location}: {reason}")]
    StoreUnavailable { location: String, reason: String },

    /// A snapshot file was readable but does not hold raw records
    #[error("Invalid snapshot {path}: {message}")]
    InvalidSnapshot { path: PathBuf, message: String },

    /// Invalid glob pattern in query
    #[error("Invalid glob pattern '{pattern}': {message}")]
    InvalidGlobPattern { pattern: String, message: String },

    /// JSON serialization error
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// I/O error while writing output files
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub(crate) fn store_unavailable(location: impl Into<String>, reason: impl ToString) -> Self {
        Error::StoreUnavailable {
            location: location.into(),
            reason: reason.to_string(),
        }
    }

    /// Whether this error means the store could not be read at all
    ///
    /// Front ends use this to tell "store not found" apart from an empty
    /// store, which is a successful read with zero entries.
    pub fn is_store_unavailable(&self) -> bool {
        matches!(self, Error::StoreUnavailable { .. })
    }
}

/// Result type alias for convenience
///
/// # Example
///
/// ```rust
/// use uepv::{MemoryStore, Result, read_entries, DelimiterTruncation};
///
/// fn count(store: &MemoryStore) -> Result<usize> {
///     let entries = read_entries(store, &DelimiterTruncation::default())?;
///     Ok(entries.len())
/// }
/// # assert_eq!(count(&MemoryStore::default()).unwrap(), 0);
/// ```
pub type Result<T> = std::result::Result<T, Error>;
