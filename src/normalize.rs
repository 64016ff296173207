//! Key normalization strategies
//!
//! Unity appends a hash suffix to every value name it writes, e.g.
//! `kAutoRefresh_h2869039147`. The logical key is everything before the
//! first `_h` marker. Other stores use other conventions, so the rule sits
//! behind the [`KeyNormalizer`] trait.

/// Marker Unity uses between the logical key and its hash suffix
pub const UNITY_HASH_MARKER: &str = "_h";

/// Derive a logical key from a native value name
pub trait KeyNormalizer {
    fn normalize<'a>(&self, raw_name: &'a str) -> &'a str;
}

/// Truncate at the first occurrence of a delimiter marker
///
/// Names without the marker are returned unchanged.
///
/// # Example
///
/// ```rust
/// use uepv::{DelimiterTruncation, KeyNormalizer};
///
/// let normalizer = DelimiterTruncation::default();
/// assert_eq!(normalizer.normalize("myFloat_h1234567890"), "myFloat");
/// assert_eq!(normalizer.normalize("NoSuffix"), "NoSuffix");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DelimiterTruncation {
    marker: String,
}

impl DelimiterTruncation {
    pub fn new(marker: impl Into<String>) -> Self {
        Self {
            marker: marker.into(),
        }
    }

    pub fn marker(&self) -> &str {
        &self.marker
    }
}

impl Default for DelimiterTruncation {
    fn default() -> Self {
        Self::new(UNITY_HASH_MARKER)
    }
}

impl KeyNormalizer for DelimiterTruncation {
    fn normalize<'a>(&self, raw_name: &'a str) -> &'a str {
        // an empty marker would match at offset 0 and blank every key
        if self.marker.is_empty() {
            return raw_name;
        }
        match raw_name.find(self.marker.as_str()) {
            Some(idx) => &raw_name[..idx],
            None => raw_name,
        }
    }
}

/// Keep native value names as they are
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Verbatim;

impl KeyNormalizer for Verbatim {
    fn normalize<'a>(&self, raw_name: &'a str) -> &'a str {
        raw_name
    }
}

impl<N: KeyNormalizer + ?Sized> KeyNormalizer for Box<N> {
    fn normalize<'a>(&self, raw_name: &'a str) -> &'a str {
        (**self).normalize(raw_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncates_at_marker() {
        let n = DelimiterTruncation::default();
        assert_eq!(n.normalize("myFloat_h1234567890"), "myFloat");
        assert_eq!(n.normalize("kAutoRefresh_h2869039147"), "kAutoRefresh");
    }

    #[test]
    fn test_truncates_at_first_marker_only() {
        let n = DelimiterTruncation::default();
        assert_eq!(n.normalize("Scene_hView_h42"), "Scene");
    }

    #[test]
    fn test_name_without_marker_unchanged() {
        let n = DelimiterTruncation::default();
        assert_eq!(n.normalize("UnityEditor.Layout"), "UnityEditor.Layout");
        assert_eq!(n.normalize(""), "");
    }

    #[test]
    fn test_marker_at_start_yields_empty_key() {
        let n = DelimiterTruncation::default();
        assert_eq!(n.normalize("_h99"), "");
    }

    #[test]
    fn test_custom_marker() {
        let n = DelimiterTruncation::new("::");
        assert_eq!(n.marker(), "::");
        assert_eq!(n.normalize("Layout::v2"), "Layout");
        assert_eq!(n.normalize("my_hValue"), "my_hValue");
    }

    #[test]
    fn test_empty_marker_keeps_name() {
        let n = DelimiterTruncation::new("");
        assert_eq!(n.normalize("myFloat_h1"), "myFloat_h1");
    }

    #[test]
    fn test_verbatim() {
        assert_eq!(Verbatim.normalize("myFloat_h1234567890"), "myFloat_h1234567890");
    }

    #[test]
    fn test_boxed_normalizer() {
        let n: Box<dyn KeyNormalizer> = Box::new(DelimiterTruncation::default());
        assert_eq!(n.normalize("a_hb"), "a");
    }
}
