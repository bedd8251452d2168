use crate::errors::StorageError;

/// A flat key-value store of opaque string slots.
///
/// Implementations are expected to be durable across process restarts and
/// scoped to one application. `set` overwrites; there is no merge.
pub trait KeyValueBackend {
    /// Returns the value stored under `key`, or `None` if the slot was never written.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Create or overwrite the slot `key`.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

impl<B: KeyValueBackend + ?Sized> KeyValueBackend for Box<B> {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }
}
