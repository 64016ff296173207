//! Preference store reader
//!
//! A [`PreferenceStore`] enumerates raw records in one synchronous pass.
//! [`read_entries`] turns those records into normalized [`Entry`] values.

use crate::error::Result;
use crate::normalize::KeyNormalizer;
use crate::types::{Entry, RawRecord};

/// A source of raw preference records
///
/// Implementations open the store read-only, materialize every record and
/// release the store before returning. The only failure is
/// [`Error::StoreUnavailable`](crate::Error::StoreUnavailable).
pub trait PreferenceStore {
    /// Human-readable location used in logs and error messages
    fn location(&self) -> String;

    /// Read every raw record currently in the store
    fn read_raw(&self) -> Result<Vec<RawRecord>>;
}

impl<S: PreferenceStore + ?Sized> PreferenceStore for Box<S> {
    fn location(&self) -> String {
        (**self).location()
    }

    fn read_raw(&self) -> Result<Vec<RawRecord>> {
        (**self).read_raw()
    }
}

impl<S: PreferenceStore + ?Sized> PreferenceStore for &S {
    fn location(&self) -> String {
        (**self).location()
    }

    fn read_raw(&self) -> Result<Vec<RawRecord>> {
        (**self).read_raw()
    }
}

/// Read a store and normalize every record into an [`Entry`]
///
/// The result is in store enumeration order; sorting is the list model's job.
/// Every raw record yields exactly one entry, even when keys collide.
pub fn read_entries<S, N>(store: &S, normalizer: &N) -> Result<Vec<Entry>>
where
    S: PreferenceStore + ?Sized,
    N: KeyNormalizer + ?Sized,
{
    let records = store.read_raw()?;
    Ok(records
        .iter()
        .map(|record| normalize_record(record, normalizer))
        .collect())
}

/// Normalize a single raw record
pub fn normalize_record<N: KeyNormalizer + ?Sized>(record: &RawRecord, normalizer: &N) -> Entry {
    Entry {
        key: normalizer.normalize(&record.name).to_string(),
        value: record.value.to_text(),
    }
}

/// An in-process store holding a fixed set of records
///
/// Useful when embedding the viewer over records obtained elsewhere.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStore {
    records: Vec<RawRecord>,
}

impl MemoryStore {
    pub fn new(records: Vec<RawRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[RawRecord] {
        &self.records
    }

    /// Replace the stored records; the next read sees the new set
    pub fn set_records(&mut self, records: Vec<RawRecord>) {
        self.records = records;
    }
}

impl PreferenceStore for MemoryStore {
    fn location(&self) -> String {
        "<memory>".to_string()
    }

    fn read_raw(&self) -> Result<Vec<RawRecord>> {
        Ok(self.records.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::{DelimiterTruncation, Verbatim};
    use crate::types::RawValue;
    use crate::Error;

    struct MissingStore;

    impl PreferenceStore for MissingStore {
        fn location(&self) -> String {
            "missing".to_string()
        }

        fn read_raw(&self) -> Result<Vec<RawRecord>> {
            Err(Error::store_unavailable(self.location(), "not found"))
        }
    }

    fn sample_store() -> MemoryStore {
        MemoryStore::new(vec![
            RawRecord::new("myFloat_h1234567890", RawValue::Integer(4)),
            RawRecord::new("LastScene_h11", RawValue::Bytes(b"Assets/Main.unity\0".to_vec())),
            RawRecord::new("Theme", RawValue::Text("dark".to_string())),
        ])
    }

    #[test]
    fn test_read_entries_normalizes_every_record() {
        let entries = read_entries(&sample_store(), &DelimiterTruncation::default()).unwrap();
        assert_eq!(
            entries,
            vec![
                Entry::new("myFloat", "4"),
                Entry::new("LastScene", "Assets/Main.unity\0"),
                Entry::new("Theme", "dark"),
            ]
        );
    }

    #[test]
    fn test_colliding_keys_are_kept() {
        let store = MemoryStore::new(vec![
            RawRecord::new("Volume_h1", RawValue::Integer(1)),
            RawRecord::new("Volume_h2", RawValue::Integer(2)),
        ]);
        let entries = read_entries(&store, &DelimiterTruncation::default()).unwrap();
        assert_eq!(entries.len(), 2);
        assert!(entries.iter().all(|e| e.key == "Volume"));
    }

    #[test]
    fn test_verbatim_keeps_raw_names() {
        let entries = read_entries(&sample_store(), &Verbatim).unwrap();
        assert_eq!(entries[0].key, "myFloat_h1234567890");
    }

    #[test]
    fn test_store_unavailable_propagates() {
        let result = read_entries(&MissingStore, &Verbatim);
        assert!(matches!(result, Err(Error::StoreUnavailable { .. })));
    }

    #[test]
    fn test_empty_store_is_not_an_error() {
        let entries = read_entries(&MemoryStore::default(), &Verbatim).unwrap();
        assert!(entries.is_empty());
    }

    #[test]
    fn test_boxed_store_delegates() {
        let store: Box<dyn PreferenceStore> = Box::new(sample_store());
        assert_eq!(store.location(), "<memory>");
        assert_eq!(store.read_raw().unwrap().len(), 3);
    }
}
