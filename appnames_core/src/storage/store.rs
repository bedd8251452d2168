use appnames_storage::KeyValueBackend;
use indexmap::IndexMap;
use log::debug;

use crate::config::{StoreConfig, WireFormat, DEFAULT_KEY};
use crate::errors::StoreError;
use crate::storage::aliases::AliasMap;
use crate::storage::codec;

/// Reads and writes the whole [`AliasMap`] as one slot of a
/// [`KeyValueBackend`].
#[derive(Debug, Clone)]
pub struct AliasStore<B> {
    backend: B,
    key: String,
    format: WireFormat,
}

impl<B: KeyValueBackend> AliasStore<B> {
    /// Default slot key, JSON on write.
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            key: DEFAULT_KEY.to_owned(),
            format: WireFormat::default(),
        }
    }

    pub fn with_config(backend: B, config: &StoreConfig) -> Self {
        Self {
            backend,
            key: config.key.clone(),
            format: config.write_format,
        }
    }

    /// An absent or blank slot loads as an empty map. Malformed entries are
    /// skipped; only backend failures are returned as errors.
    pub fn load(&self) -> Result<AliasMap, StoreError> {
        let map = match self.backend.get(&self.key)? {
            Some(raw) => codec::decode(&raw),
            None => AliasMap::new(),
        };
        debug!("Loaded aliases for {} app(s) from '{}'", map.len(), self.key);
        Ok(map)
    }

    /// Overwrites the slot with the full map.
    pub fn save(&mut self, map: &AliasMap) -> Result<(), StoreError> {
        let raw = codec::encode(map, self.format)?;
        self.backend.set(&self.key, &raw)?;
        debug!(
            "Saved aliases for {} app(s) to '{}' ({:?})",
            map.len(),
            self.key,
            self.format
        );
        Ok(())
    }

    /// The persisted value exactly as stored.
    pub fn raw(&self) -> Result<Option<String>, StoreError> {
        Ok(self.backend.get(&self.key)?)
    }

    pub fn get_all_aliases(&self) -> Result<IndexMap<String, Vec<String>>, StoreError> {
        Ok(self.load()?.into_index_map())
    }
}

/// Read-only view for collaborators that only hold a backend, such as a
/// notification rewriter resolving an app's current display aliases.
pub fn get_all_aliases<B: KeyValueBackend + ?Sized>(
    backend: &B,
    key: &str,
) -> Result<IndexMap<String, Vec<String>>, StoreError> {
    Ok(backend
        .get(key)?
        .map(|raw| codec::decode(&raw).into_index_map())
        .unwrap_or_default())
}
