use crate::cli::OutputType;
use anyhow::Context;
use std::io::Write;
use std::path::Path;
use uepv::{query_entries, snapshot_to_string, Browser, DynSession, Entry, StoreConfig};

/// Open the configured store, explaining the usual reason it is missing
fn open_session(config: &StoreConfig) -> anyhow::Result<DynSession> {
    config.open_session().map_err(|e| {
        if e.is_store_unavailable() {
            anyhow::anyhow!(
                "{e}. Make sure the Unity Editor has been run on this machine, \
                 or pass --snapshot with a file written by 'uepv dump'."
            )
        } else {
            anyhow::anyhow!("Failed to read preferences: {e}")
        }
    })
}

/// List preferences matching the search text and glob queries
pub fn list(
    config: &StoreConfig,
    search: &str,
    queries: &[String],
    output_type: OutputType,
) -> anyhow::Result<()> {
    let session = open_session(config)?;

    let entries: Vec<Entry> = if queries.is_empty() {
        session.filter(search).cloned().collect()
    } else {
        let patterns: Vec<&str> = queries.iter().map(String::as_str).collect();
        query_entries(session.filter(search), &patterns)
            .map_err(|e| anyhow::anyhow!("Failed to apply query: {}", e))?
    };
    tracing::debug!(
        shown = entries.len(),
        total = session.model().len(),
        "filtered preferences"
    );

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match output_type {
        OutputType::Table => uepv::write_table(&mut out, &entries)?,
        OutputType::JsonArray => writeln!(out, "{}", serde_json::to_string_pretty(&entries)?)?,
        OutputType::JsonObject => {
            let object = uepv::to_object(&entries);
            writeln!(out, "{}", serde_json::to_string_pretty(&object)?)?
        }
    }
    Ok(())
}

/// Print the raw value of every preference with this exact key
pub fn get(config: &StoreConfig, key: &str) -> anyhow::Result<()> {
    let session = open_session(config)?;

    let values: Vec<&str> = session
        .model()
        .get(key)
        .map(|entry| entry.value.as_str())
        .collect();
    if values.is_empty() {
        return Err(anyhow::anyhow!("Preference '{}' not found", key));
    }

    for value in values {
        println!("{}", value);
    }
    Ok(())
}

/// Write the raw records of the configured store as a snapshot
pub fn dump(config: &StoreConfig, output: Option<&Path>) -> anyhow::Result<()> {
    let store = config.store();
    let records = store
        .read_raw()
        .with_context(|| format!("Failed to read preferences from {}", store.location()))?;
    let json = snapshot_to_string(&records)?;

    match output {
        Some(path) => {
            std::fs::write(path, json)
                .with_context(|| format!("Failed to write snapshot to {}", path.display()))?;
            tracing::info!(count = records.len(), path = %path.display(), "wrote snapshot");
        }
        None => println!("{}", json),
    }
    Ok(())
}

/// Run the interactive browser on stdin/stdout
pub fn browse(config: &StoreConfig, page_size: usize) -> anyhow::Result<()> {
    let mut browser = Browser::new(config.session(), page_size);
    // a missing store shows up as the error line instead of aborting
    browser.refresh();

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    browser
        .run(stdin.lock(), stdout.lock())
        .context("Interactive session failed")?;
    Ok(())
}
