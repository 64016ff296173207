use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use uepv::{StoreConfig, DEFAULT_PAGE_SIZE, UNITY_EDITOR_PREFS_KEY, UNITY_HASH_MARKER};

/// CLI arguments for uepv
#[derive(Parser, Debug)]
#[command(name = "uepv", version)]
#[command(about = "View Unity EditorPrefs from the command line")]
pub struct Cli {
    /// Registry subkey under HKEY_CURRENT_USER to read
    #[arg(long, global = true, default_value = UNITY_EDITOR_PREFS_KEY)]
    pub location: String,

    /// Marker that separates a key from Unity's hash suffix
    #[arg(long, global = true, default_value = UNITY_HASH_MARKER)]
    pub delimiter: String,

    /// Keep raw value names (overrides --delimiter)
    #[arg(long, global = true)]
    pub no_truncate: bool,

    /// Read a snapshot written by `uepv dump` instead of the registry
    #[arg(long, global = true, value_name = "FILE")]
    pub snapshot: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List preferences, optionally filtered
    List {
        /// Case-insensitive substring to match against keys and values
        #[arg(short, long, default_value = "")]
        search: String,

        /// Glob pattern over keys (repeatable, OR logic)
        #[arg(short, long = "query", value_name = "PATTERN")]
        queries: Vec<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputType::Table)]
        output_type: OutputType,
    },

    /// Print the value of every preference with exactly this key
    Get {
        key: String,
    },

    /// Write the raw store contents as a JSON snapshot
    Dump {
        /// Output file (stdout if omitted)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Browse preferences interactively
    Browse {
        /// Rows per page
        #[arg(long, default_value_t = DEFAULT_PAGE_SIZE)]
        page_size: usize,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputType {
    /// Aligned `key | value` rows
    Table,
    /// Array of `{"key": ..., "value": ...}` objects
    JsonArray,
    /// Object mapping key to value (last entry wins on duplicate keys)
    JsonObject,
}

impl Cli {
    pub fn store_config(&self) -> StoreConfig {
        StoreConfig {
            location: self.location.clone(),
            delimiter: (!self.no_truncate).then(|| self.delimiter.clone()),
            snapshot: self.snapshot.clone(),
        }
    }
}
