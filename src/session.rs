//! Viewer session
//!
//! A [`Session`] ties a preference store and a key normalizer to a
//! [`PrefList`]. Front ends drive it through two calls: [`Session::refresh`]
//! re-reads the store, [`Session::filter`] queries the current list.

use crate::error::Result;
use crate::model::{Filter, PrefList};
use crate::normalize::KeyNormalizer;
use crate::store::{read_entries, PreferenceStore};

/// Store, normalizer and the list loaded from them
pub struct Session<S, N> {
    store: S,
    normalizer: N,
    list: PrefList,
}

impl<S: PreferenceStore, N: KeyNormalizer> Session<S, N> {
    /// Create a session with an empty list; call [`refresh`](Self::refresh) to load it
    pub fn new(store: S, normalizer: N) -> Self {
        Self {
            store,
            normalizer,
            list: PrefList::new(),
        }
    }

    /// Create a session and load it once
    pub fn open(store: S, normalizer: N) -> Result<Self> {
        let mut session = Self::new(store, normalizer);
        session.refresh()?;
        Ok(session)
    }

    /// Re-read the store and replace the list
    ///
    /// Returns the number of entries loaded. If the store is unavailable the
    /// error is returned and the previously loaded list stays as it was.
    pub fn refresh(&mut self) -> Result<usize> {
        let entries = read_entries(&self.store, &self.normalizer)?;
        self.list.load(entries);
        tracing::debug!(count = self.list.len(), "refreshed preference list");
        Ok(self.list.len())
    }

    /// Entries matching `search`, in key order
    pub fn filter<'a>(&'a self, search: &str) -> Filter<'a> {
        self.list.filter(search)
    }

    pub fn model(&self) -> &PrefList {
        &self.list
    }

    pub fn location(&self) -> String {
        self.store.location()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::DelimiterTruncation;
    use crate::store::MemoryStore;
    use crate::types::{RawRecord, RawValue};
    use crate::Error;
    use std::cell::Cell;

    /// Store that can be switched off between refreshes
    struct FlakyStore {
        inner: MemoryStore,
        available: Cell<bool>,
    }

    impl PreferenceStore for FlakyStore {
        fn location(&self) -> String {
            "flaky".to_string()
        }

        fn read_raw(&self) -> Result<Vec<RawRecord>> {
            if self.available.get() {
                self.inner.read_raw()
            } else {
                Err(Error::store_unavailable(self.location(), "gone"))
            }
        }
    }

    fn records() -> Vec<RawRecord> {
        vec![
            RawRecord::new("volumeMax_h2", RawValue::Bytes(b"1.0".to_vec())),
            RawRecord::new("Volume_h1", RawValue::Bytes(b"0.8".to_vec())),
            RawRecord::new("Brightness_h3", RawValue::Integer(50)),
        ]
    }

    #[test]
    fn test_open_loads_sorted_entries() {
        let session =
            Session::open(MemoryStore::new(records()), DelimiterTruncation::default()).unwrap();
        let keys: Vec<&str> = session.filter("").map(|e| e.key.as_str()).collect();
        assert_eq!(keys, ["Brightness", "Volume", "volumeMax"]);
        assert_eq!(session.location(), "<memory>");
    }

    #[test]
    fn test_refresh_replaces_list() {
        let mut session =
            Session::open(MemoryStore::new(records()), DelimiterTruncation::default()).unwrap();
        session
            .store_mut()
            .set_records(vec![RawRecord::new("Fresh_h9", RawValue::Integer(1))]);

        assert_eq!(session.refresh().unwrap(), 1);
        assert_eq!(session.model().entries()[0].key, "Fresh");
    }

    #[test]
    fn test_failed_refresh_keeps_previous_list() {
        let store = FlakyStore {
            inner: MemoryStore::new(records()),
            available: Cell::new(true),
        };
        let mut session = Session::open(store, DelimiterTruncation::default()).unwrap();
        assert_eq!(session.model().len(), 3);

        session.store().available.set(false);
        let err = session.refresh().unwrap_err();
        assert!(err.is_store_unavailable());
        assert_eq!(session.model().len(), 3);
    }

    #[test]
    fn test_open_fails_when_store_unavailable() {
        let store = FlakyStore {
            inner: MemoryStore::default(),
            available: Cell::new(false),
        };
        let result = Session::open(store, DelimiterTruncation::default());
        assert!(matches!(result, Err(Error::StoreUnavailable { .. })));
    }
}
