//! Output formats for listed entries

use crate::types::Entry;
use std::collections::BTreeMap;
use std::io::{self, Write};

/// Width of the key column in table rows
pub const KEY_COLUMN_WIDTH: usize = 32;

/// Write entries as aligned `key | value` rows
pub fn write_table<'a, W, I>(out: &mut W, entries: I) -> io::Result<()>
where
    W: Write,
    I: IntoIterator<Item = &'a Entry>,
{
    for entry in entries {
        writeln!(
            out,
            "{:<width$} | {}",
            display_cell(&entry.key),
            display_cell(&entry.value),
            width = KEY_COLUMN_WIDTH
        )?;
    }
    Ok(())
}

/// Map keys to values for JSON object output
///
/// Keys are not unique; when several entries share a key the last one in
/// iteration order wins.
pub fn to_object<'a, I>(entries: I) -> BTreeMap<&'a str, &'a str>
where
    I: IntoIterator<Item = &'a Entry>,
{
    entries
        .into_iter()
        .map(|e| (e.key.as_str(), e.value.as_str()))
        .collect()
}

/// Escape control characters so one entry stays on one row
pub fn display_cell(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if c.is_control() {
            out.extend(c.escape_default());
        } else {
            out.push(c);
        }
    }
    out
}
