use std::{fs, io, path::Path};

use appnames_storage::DEFAULT_NAMESPACE;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::apps::selection::DEFAULT_SYSTEM_ALLOW_LIST;
use crate::errors::StoreError;

pub const CONFIG_FILE_NAME: &str = "config.json";
/// Slot the alias record lives under.
pub const DEFAULT_KEY: &str = "custom_names";

/// How `AliasStore::save` encodes the map. Both are always readable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WireFormat {
    /// `{"com.whatsapp":["واتس","whats"]}`
    #[default]
    Json,
    /// `com.whatsapp:واتس,whats;com.google.android.youtube:يوتيوب`
    Legacy,
}

/// Settings shared by every front-end.
///
/// JSON looks like:
/// `{ "namespace":"app_names", "key":"custom_names", "write_format":"json",
///    "system_allow_list":["whatsapp","youtube","camera"] }`
/// and every field may be omitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    pub namespace: String,
    pub key: String,
    pub write_format: WireFormat,
    /// Package-id substrings that let a system app through selection.
    pub system_allow_list: Vec<String>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            namespace: DEFAULT_NAMESPACE.to_owned(),
            key: DEFAULT_KEY.to_owned(),
            write_format: WireFormat::default(),
            system_allow_list: DEFAULT_SYSTEM_ALLOW_LIST
                .iter()
                .map(|s| (*s).to_owned())
                .collect(),
        }
    }
}

impl StoreConfig {
    /// Reads `<dir>/config.json`; a missing file yields the defaults.
    pub fn load_from(dir: &Path) -> Result<Self, StoreError> {
        let path = dir.join(CONFIG_FILE_NAME);
        let text = match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("No config at {:?}, using defaults", path);
                return Ok(Self::default());
            }
            Err(e) => return Err(StoreError::Config(format!("{}: {e}", path.display()))),
        };
        serde_json::from_str(&text)
            .map_err(|e| StoreError::Config(format!("{}: {e}", path.display())))
    }
}
