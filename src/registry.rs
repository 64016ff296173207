//! Windows registry store
//!
//! Unity keeps `EditorPrefs` under
//! `HKEY_CURRENT_USER\Software\Unity Technologies\Unity Editor 5.x`. Strings
//! are written as `REG_BINARY` holding NUL-terminated UTF-8, integers as
//! `REG_DWORD`, and floats as `REG_QWORD`.
//!
//! Payload decoding works on plain bytes so it is testable on every
//! platform; only the enumeration itself is Windows-specific.

use crate::error::{Error, Result};
use crate::store::PreferenceStore;
use crate::types::{RawRecord, RawValue};

/// Subkey under `HKEY_CURRENT_USER` where the Unity Editor keeps its prefs
pub const UNITY_EDITOR_PREFS_KEY: &str = r"Software\Unity Technologies\Unity Editor 5.x";

const HKCU_PREFIX: &str = "HKEY_CURRENT_USER";

/// Registry value types relevant to payload decoding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegKind {
    Dword,
    DwordBigEndian,
    Qword,
    String,
    ExpandString,
    MultiString,
    /// `REG_BINARY`, `REG_NONE` and every other type
    Binary,
}

/// Read-only view of a subkey under `HKEY_CURRENT_USER`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryStore {
    subkey: String,
}

impl RegistryStore {
    pub fn new(subkey: impl Into<String>) -> Self {
        Self {
            subkey: subkey.into(),
        }
    }

    pub fn subkey(&self) -> &str {
        &self.subkey
    }
}

impl Default for RegistryStore {
    fn default() -> Self {
        Self::new(UNITY_EDITOR_PREFS_KEY)
    }
}

impl PreferenceStore for RegistryStore {
    fn location(&self) -> String {
        format!(r"{}\{}", HKCU_PREFIX, self.subkey)
    }

    fn read_raw(&self) -> Result<Vec<RawRecord>> {
        tracing::debug!(location = %self.location(), "opening registry key");
        let result = read_subkey(self);
        match &result {
            Ok(records) => tracing::info!(
                count = records.len(),
                location = %self.location(),
                "read registry values"
            ),
            Err(e) => tracing::warn!(error = %e, "registry key unavailable"),
        }
        result
    }
}

#[cfg(windows)]
fn read_subkey(store: &RegistryStore) -> Result<Vec<RawRecord>> {
    use winreg::enums::{HKEY_CURRENT_USER, KEY_READ};
    use winreg::RegKey;

    let hkcu = RegKey::predef(HKEY_CURRENT_USER);
    // `key` closes its handle on drop, including on the early error returns below
    let key = hkcu
        .open_subkey_with_flags(&store.subkey, KEY_READ)
        .map_err(|e| Error::store_unavailable(store.location(), e))?;

    let mut records = Vec::new();
    for item in key.enum_values() {
        let (name, value) = item.map_err(|e| Error::store_unavailable(store.location(), e))?;
        let kind = reg_kind(&value.vtype);
        records.push(RawRecord::new(name, decode_payload(kind, &value.bytes)));
    }

    Ok(records)
}

#[cfg(not(windows))]
fn read_subkey(store: &RegistryStore) -> Result<Vec<RawRecord>> {
    Err(Error::store_unavailable(
        store.location(),
        "the Windows registry is not available on this platform; use --snapshot",
    ))
}

#[cfg(windows)]
fn reg_kind(vtype: &winreg::enums::RegType) -> RegKind {
    use winreg::enums::RegType;

    match vtype {
        RegType::REG_DWORD => RegKind::Dword,
        RegType::REG_DWORD_BIG_ENDIAN => RegKind::DwordBigEndian,
        RegType::REG_QWORD => RegKind::Qword,
        RegType::REG_SZ => RegKind::String,
        RegType::REG_EXPAND_SZ => RegKind::ExpandString,
        RegType::REG_MULTI_SZ => RegKind::MultiString,
        _ => RegKind::Binary,
    }
}

/// Decode the raw bytes of a registry value
///
/// Integer payloads are read with the width and signedness the Windows
/// registry API reports them with (`REG_DWORD` as a signed 32-bit value,
/// `REG_QWORD` as signed 64-bit). Payloads too short for their declared type
/// are kept as bytes.
pub fn decode_payload(kind: RegKind, bytes: &[u8]) -> RawValue {
    match kind {
        RegKind::Dword => match bytes.get(..4).and_then(|b| <[u8; 4]>::try_from(b).ok()) {
            Some(b) => RawValue::Integer(i32::from_le_bytes(b).into()),
            None => RawValue::Bytes(bytes.to_vec()),
        },
        RegKind::DwordBigEndian => match bytes.get(..4).and_then(|b| <[u8; 4]>::try_from(b).ok()) {
            Some(b) => RawValue::Integer(i32::from_be_bytes(b).into()),
            None => RawValue::Bytes(bytes.to_vec()),
        },
        RegKind::Qword => match bytes.get(..8).and_then(|b| <[u8; 8]>::try_from(b).ok()) {
            Some(b) => RawValue::Integer(i64::from_le_bytes(b)),
            None => RawValue::Bytes(bytes.to_vec()),
        },
        RegKind::String | RegKind::ExpandString => {
            let text = utf16_le(bytes);
            match text.strip_suffix('\0') {
                Some(stripped) => RawValue::Text(stripped.to_string()),
                None => RawValue::Text(text),
            }
        }
        RegKind::MultiString => {
            let text = utf16_le(bytes);
            let parts: Vec<&str> = text.trim_end_matches('\0').split('\0').collect();
            RawValue::Text(parts.join("\n"))
        }
        RegKind::Binary => RawValue::Bytes(bytes.to_vec()),
    }
}

fn utf16_le(bytes: &[u8]) -> String {
    let units: Vec<u16> = bytes
        .chunks_exact(2)
        .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
        .collect();
    String::from_utf16_lossy(&units)
}
