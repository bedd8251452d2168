//! Opaque named string slots, the persistence contract the alias store
//! consumes.

pub mod backend;
pub mod errors;
pub mod file;
pub mod memory;

pub use backend::KeyValueBackend;
pub use errors::StorageError;
pub use file::{FileBackend, DEFAULT_NAMESPACE};
pub use memory::MemoryBackend;
