pub mod session;

pub use session::{AliasSession, AppEntry};
