pub mod filter;
pub mod selection;

pub use filter::{filter, matches_query};
pub use selection::{select_apps, InstalledApp, DEFAULT_SYSTEM_ALLOW_LIST};
