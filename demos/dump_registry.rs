//! Dump the Unity EditorPrefs registry key to a JSON snapshot
//!
//! This example reads the raw values under `HKEY_CURRENT_USER` and writes
//! them in the snapshot format that `--snapshot` and `SnapshotStore` accept.
//! On platforms without a registry it reports the store as unavailable.

use std::env;
use std::fs;
use uepv::{snapshot_to_string, PreferenceStore, RegistryStore, UNITY_EDITOR_PREFS_KEY};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();

    if args.iter().any(|a| a == "-h" || a == "--help") {
        eprintln!("Usage: {} [output.json] [subkey]", args[0]);
        eprintln!("\nDefault subkey: {}", UNITY_EDITOR_PREFS_KEY);
        return Ok(());
    }

    let store = match args.get(2) {
        Some(subkey) => RegistryStore::new(subkey.as_str()),
        None => RegistryStore::default(),
    };

    eprintln!("Reading registry key: {}", store.location());
    let records = match store.read_raw() {
        Ok(records) => records,
        Err(e) if e.is_store_unavailable() => {
            eprintln!("{}", e);
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    let json = snapshot_to_string(&records)?;
    match args.get(1) {
        Some(path) => {
            fs::write(path, json)?;
            eprintln!("Wrote {} values to {}", records.len(), path);
        }
        None => println!("{}", json),
    }

    Ok(())
}
