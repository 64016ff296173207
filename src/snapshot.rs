//! Raw record snapshots
//!
//! A snapshot is a pretty-printed JSON array of [`RawRecord`]s, as written by
//! `uepv dump`. Reading one back through [`SnapshotStore`] behaves like
//! reading the registry on the machine it came from.

use crate::error::{Error, Result};
use crate::store::PreferenceStore;
use crate::types::RawRecord;
use std::path::{Path, PathBuf};

/// Serialize records to a snapshot string
pub fn snapshot_to_string(records: &[RawRecord]) -> Result<String> {
    Ok(serde_json::to_string_pretty(records)?)
}

/// Write records to a snapshot file
pub fn save_snapshot(path: &Path, records: &[RawRecord]) -> Result<()> {
    let json = snapshot_to_string(records)?;
    std::fs::write(path, json)?;
    Ok(())
}

/// Read records from a snapshot file
///
/// A missing or unreadable file means the store is unavailable. A file that
/// does not parse as a list of raw records is an invalid snapshot.
pub fn load_snapshot(path: &Path) -> Result<Vec<RawRecord>> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| Error::store_unavailable(path.display().to_string(), e))?;

    serde_json::from_str(&content).map_err(|e| Error::InvalidSnapshot {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Preference store backed by a snapshot file
///
/// The file is re-read on every refresh.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotStore {
    path: PathBuf,
}

impl SnapshotStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PreferenceStore for SnapshotStore {
    fn location(&self) -> String {
        self.path.display().to_string()
    }

    fn read_raw(&self) -> Result<Vec<RawRecord>> {
        tracing::debug!(path = %self.path.display(), "reading snapshot");
        let records = load_snapshot(&self.path)?;
        tracing::info!(count = records.len(), path = %self.path.display(), "read snapshot records");
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::RawValue;
    use std::fs::write;
    use tempfile::TempDir;

    fn records() -> Vec<RawRecord> {
        vec![
            RawRecord::new("kAutoRefresh_h2869039147", RawValue::Integer(1)),
            RawRecord::new("LastScene_h5", RawValue::Bytes(b"Main\0".to_vec())),
            RawRecord::new("Theme", RawValue::Text("dark".to_string())),
        ]
    }

    #[test]
    fn test_save_and_load_snapshot() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("prefs.json");

        save_snapshot(&path, &records()).unwrap();
        assert_eq!(load_snapshot(&path).unwrap(), records());
    }

    #[test]
    fn test_missing_snapshot_is_store_unavailable() {
        let temp_dir = TempDir::new().unwrap();
        let store = SnapshotStore::new(temp_dir.path().join("nonexistent.json"));

        let err = store.read_raw().unwrap_err();
        assert!(err.is_store_unavailable());
    }

    #[test]
    fn test_malformed_snapshot() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("broken.json");
        write(&path, r#"{"not": "a list"}"#).unwrap();

        let err = load_snapshot(&path).unwrap_err();
        assert!(matches!(err, Error::InvalidSnapshot { .. }));
    }

    #[test]
    fn test_snapshot_store_rereads_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("prefs.json");
        let store = SnapshotStore::new(&path);

        save_snapshot(&path, &records()).unwrap();
        assert_eq!(store.read_raw().unwrap().len(), 3);

        save_snapshot(&path, &records()[..1]).unwrap();
        assert_eq!(store.read_raw().unwrap().len(), 1);
        assert_eq!(store.location(), path.display().to_string());
    }
}
