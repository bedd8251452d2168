pub mod aliases;
pub mod codec;
pub mod store;

pub use aliases::{parse_bulk_input, AddOutcome, AliasMap};
pub use store::{get_all_aliases, AliasStore};
