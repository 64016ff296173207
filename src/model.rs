//! Filterable list model
//!
//! [`PrefList`] holds the entries of the last refresh, sorted by key, and
//! answers case-insensitive substring searches over keys and values.
//!
//! # Example
//!
//! ```rust
//! use uepv::{Entry, PrefList};
//!
//! let mut list = PrefList::new();
//! list.load(vec![
//!     Entry::new("Volume", "0.8"),
//!     Entry::new("volumeMax", "1.0"),
//!     Entry::new("Brightness", "50"),
//! ]);
//!
//! let keys: Vec<&str> = list.filter("VOL").map(|e| e.key.as_str()).collect();
//! assert_eq!(keys, ["Volume", "volumeMax"]);
//! ```

use crate::types::Entry;

/// Entries of one refresh, sorted ascending by key
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrefList {
    entries: Vec<Entry>,
}

impl PrefList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the held entries wholesale
    ///
    /// Sorting is ordinal and stable: entries with equal keys keep the order
    /// they were given in.
    pub fn load(&mut self, mut entries: Vec<Entry>) {
        entries.sort_by(|a, b| a.key.cmp(&b.key));
        self.entries = entries;
    }

    /// Lazily yield entries matching `search`, in key order
    ///
    /// Empty or whitespace-only search text matches everything. Otherwise an
    /// entry matches when its lowercased key or value contains the lowercased
    /// search text. The returned iterator can be cloned to restart it.
    pub fn filter<'a>(&'a self, search: &str) -> Filter<'a> {
        let needle = if search.trim().is_empty() {
            None
        } else {
            Some(search.to_lowercase())
        };
        Filter {
            iter: self.entries.iter(),
            needle,
        }
    }

    /// All entries whose key equals `key` exactly
    pub fn get<'a>(&'a self, key: &'a str) -> impl Iterator<Item = &'a Entry> + 'a {
        let start = self.entries.partition_point(|e| e.key.as_str() < key);
        self.entries[start..]
            .iter()
            .take_while(move |e| e.key == key)
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Iterator returned by [`PrefList::filter`]
#[derive(Debug, Clone)]
pub struct Filter<'a> {
    iter: std::slice::Iter<'a, Entry>,
    /// Lowercased search text, `None` when everything matches
    needle: Option<String>,
}

impl<'a> Iterator for Filter<'a> {
    type Item = &'a Entry;

    fn next(&mut self) -> Option<&'a Entry> {
        match &self.needle {
            None => self.iter.next(),
            Some(needle) => self.iter.by_ref().find(|e| matches(e, needle)),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.needle {
            None => self.iter.size_hint(),
            Some(_) => (0, self.iter.size_hint().1),
        }
    }
}

fn matches(entry: &Entry, needle: &str) -> bool {
    entry.key.to_lowercase().contains(needle) || entry.value.to_lowercase().contains(needle)
}
