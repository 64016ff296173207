//! # uepv - Unity EditorPrefs Viewer Library
//!
//! This library reads every key/value pair the Unity Editor keeps in its
//! per-user preference store (`EditorPrefs`) and filters them by substring.
//! On Windows the store is the registry key
//! `HKEY_CURRENT_USER\Software\Unity Technologies\Unity Editor 5.x`.
//!
//! ## Features
//!
//! - Read the Unity Editor's registry key in one read-only pass
//! - Strip Unity's `_h<hash>` suffix from value names, or plug in another rule
//! - Decode byte, integer and string payloads to text
//! - Case-insensitive substring search over keys and values
//! - Glob queries over keys (e.g. `"Scene*"`, `"UnityEditor.*"`)
//! - Export and re-read raw snapshots as JSON
//!
//! ## Quick Start
//!
//! ### Filtering Preferences
//!
//! ```rust
//! use uepv::{DelimiterTruncation, MemoryStore, RawRecord, RawValue, Session};
//!
//! let store = MemoryStore::new(vec![
//!     RawRecord::new("Volume_h1", RawValue::Bytes(b"0.8".to_vec())),
//!     RawRecord::new("volumeMax_h2", RawValue::Bytes(b"1.0".to_vec())),
//!     RawRecord::new("Brightness_h3", RawValue::Integer(50)),
//! ]);
//!
//! let session = Session::open(store, DelimiterTruncation::default())?;
//! let keys: Vec<&str> = session.filter("VOL").map(|e| e.key.as_str()).collect();
//! assert_eq!(keys, ["Volume", "volumeMax"]);
//! # Ok::<(), uepv::Error>(())
//! ```
//!
//! ### Reading the Registry
//!
//! ```rust,no_run
//! use uepv::StoreConfig;
//!
//! let mut session = StoreConfig::default().open_session()?;
//! for entry in session.filter("scene") {
//!     println!("{} = {}", entry.key, entry.value);
//! }
//!
//! // Re-read after the editor wrote new values
//! session.refresh()?;
//! # Ok::<(), uepv::Error>(())
//! ```
//!
//! ## Error Handling
//!
//! All functions return [`Result<T, Error>`]. A store that cannot be opened
//! is reported as [`Error::StoreUnavailable`], never as an empty list:
//!
//! ```rust
//! use uepv::{Error, SnapshotStore, Session, Verbatim};
//!
//! match Session::open(SnapshotStore::new("/nonexistent/prefs.json"), Verbatim) {
//!     Ok(_) => println!("Loaded"),
//!     Err(Error::StoreUnavailable { location, reason }) => {
//!         eprintln!("No preference store at {}: {}", location, reason);
//!     }
//!     Err(e) => eprintln!("Other error: {}", e),
//! }
//! ```

// Re-export all public types at crate root
pub use types::{Entry, RawRecord, RawValue};

// Re-export error types
pub use error::{Error, Result};

pub use config::{DynSession, StoreConfig};
pub use interactive::{Action, Browser, ViewState, DEFAULT_PAGE_SIZE};
pub use model::{Filter, PrefList};
pub use normalize::{DelimiterTruncation, KeyNormalizer, Verbatim, UNITY_HASH_MARKER};
pub use output::{display_cell, to_object, write_table, KEY_COLUMN_WIDTH};
pub use query::query_entries;
pub use registry::{decode_payload, RegKind, RegistryStore, UNITY_EDITOR_PREFS_KEY};
pub use session::Session;
pub use snapshot::{load_snapshot, save_snapshot, snapshot_to_string, SnapshotStore};
pub use store::{normalize_record, read_entries, MemoryStore, PreferenceStore};

// All modules are private - use re-exports above for public API
mod config;
mod error;
mod interactive;
mod model;
mod normalize;
mod output;
mod query;
mod registry;
mod session;
mod snapshot;
mod store;
mod types;
