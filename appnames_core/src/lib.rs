pub mod apps;
pub mod config;
pub mod core;
pub mod errors;
pub mod storage;
pub mod utils;

// re‑export ergonomic entry points
pub use apps::{filter, matches_query, select_apps, InstalledApp};
pub use config::{StoreConfig, WireFormat};
pub use crate::core::session::{AliasSession, AppEntry};
pub use errors::StoreError;
pub use storage::{get_all_aliases, parse_bulk_input, AddOutcome, AliasMap, AliasStore};
