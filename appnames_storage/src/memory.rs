use std::collections::HashMap;

use crate::backend::KeyValueBackend;
use crate::errors::StorageError;

/// Slots held in a `HashMap`. Nothing survives the process; used as a test
/// double and by embedders that persist elsewhere.
#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    slots: HashMap<String, String>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-seed a slot, e.g. with a value written by an older version.
    pub fn with_slot(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.slots.insert(key.into(), value.into());
        self
    }
}

impl KeyValueBackend for MemoryBackend {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.slots.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.slots.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}
