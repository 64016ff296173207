//! Store configuration
//!
//! Selects which preference store to read and how value names are turned
//! into keys. The defaults read the Unity Editor's registry key and strip
//! Unity's `_h<hash>` suffix.

use crate::error::Result;
use crate::normalize::{DelimiterTruncation, KeyNormalizer, Verbatim, UNITY_HASH_MARKER};
use crate::registry::{RegistryStore, UNITY_EDITOR_PREFS_KEY};
use crate::session::Session;
use crate::snapshot::SnapshotStore;
use crate::store::PreferenceStore;
use std::path::PathBuf;

/// Session over whichever store and normalizer a [`StoreConfig`] selects
pub type DynSession = Session<Box<dyn PreferenceStore>, Box<dyn KeyNormalizer>>;

/// Configuration for opening a preference store
///
/// # Example
///
/// ```rust
/// use uepv::StoreConfig;
///
/// let config = StoreConfig {
///     delimiter: None, // keep raw value names
///     ..StoreConfig::default()
/// };
/// assert!(config.snapshot.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Registry subkey under `HKEY_CURRENT_USER`
    pub location: String,
    /// Marker to truncate value names at, `None` to keep them verbatim
    pub delimiter: Option<String>,
    /// Read this snapshot file instead of the registry
    pub snapshot: Option<PathBuf>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            location: UNITY_EDITOR_PREFS_KEY.to_string(),
            delimiter: Some(UNITY_HASH_MARKER.to_string()),
            snapshot: None,
        }
    }
}

impl StoreConfig {
    pub fn store(&self) -> Box<dyn PreferenceStore> {
        match &self.snapshot {
            Some(path) => Box::new(SnapshotStore::new(path.clone())),
            None => Box::new(RegistryStore::new(self.location.clone())),
        }
    }

    pub fn normalizer(&self) -> Box<dyn KeyNormalizer> {
        match &self.delimiter {
            Some(marker) => Box::new(DelimiterTruncation::new(marker.clone())),
            None => Box::new(Verbatim),
        }
    }

    /// Session with an empty list
    pub fn session(&self) -> DynSession {
        Session::new(self.store(), self.normalizer())
    }

    /// Session loaded once from the store
    pub fn open_session(&self) -> Result<DynSession> {
        Session::open(self.store(), self.normalizer())
    }
}
