//! Core types for Unity EditorPrefs entries
//!
//! A preference store hands out [`RawRecord`]s: the native value name plus a
//! payload in one of the shapes the store can hold. The reader turns each
//! record into an [`Entry`], a normalized pair of text fields.

use serde::{Deserialize, Serialize};

/// A normalized preference: logical key and textual value
///
/// Keys are not unique. Two native value names can truncate to the same key
/// and both entries are kept.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Entry {
    pub key: String,
    pub value: String,
}

impl Entry {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Payload of a single native preference value
///
/// Serialized as `{"kind": "bytes" | "integer" | "text", "value": ...}`,
/// which is the shape used inside snapshot files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum RawValue {
    /// Raw byte sequence (Unity stores strings this way, NUL-terminated)
    Bytes(Vec<u8>),
    /// Any integral payload
    Integer(i64),
    /// Native string payload
    Text(String),
}

impl RawValue {
    /// Convert the payload to its display text
    ///
    /// Bytes are decoded as UTF-8. Valid input round-trips exactly, trailing
    /// NUL included; invalid sequences become U+FFFD.
    pub fn to_text(&self) -> String {
        match self {
            RawValue::Bytes(bytes) => String::from_utf8_lossy(bytes).into_owned(),
            RawValue::Integer(n) => n.to_string(),
            RawValue::Text(s) => s.clone(),
        }
    }
}

/// One native value as enumerated from a preference store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRecord {
    /// Native value name, before delimiter truncation
    pub name: String,
    pub value: RawValue,
}

impl RawRecord {
    pub fn new(name: impl Into<String>, value: RawValue) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bytes_decode_as_utf8() {
        let value = RawValue::Bytes("héllo".as_bytes().to_vec());
        assert_eq!(value.to_text(), "héllo");
    }

    #[test]
    fn test_bytes_keep_trailing_nul() {
        let value = RawValue::Bytes(b"Assets/Scenes\0".to_vec());
        assert_eq!(value.to_text(), "Assets/Scenes\0");
    }

    #[test]
    fn test_invalid_utf8_is_replaced() {
        let value = RawValue::Bytes(vec![b'a', 0xff, b'b']);
        assert_eq!(value.to_text(), "a\u{fffd}b");
    }

    #[test]
    fn test_integer_and_text_conversion() {
        assert_eq!(RawValue::Integer(-42).to_text(), "-42");
        assert_eq!(RawValue::Text("dark".to_string()).to_text(), "dark");
    }

    #[test]
    fn test_raw_record_json_shape() {
        let record = RawRecord::new("kAutoRefresh_h2869039147", RawValue::Integer(1));
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "kAutoRefresh_h2869039147",
                "value": { "kind": "integer", "value": 1 }
            })
        );

        let back: RawRecord = serde_json::from_value(json).unwrap();
        assert_eq!(back, record);
    }
}
