use std::collections::BTreeMap;
use std::{fs, io, path::PathBuf};

use directories::ProjectDirs;
use log::{debug, warn};

use crate::backend::KeyValueBackend;
use crate::errors::StorageError;

/// Namespace used when none is given, one file per namespace.
pub const DEFAULT_NAMESPACE: &str = "app_names";

/// Slots persisted as one JSON object per namespace:
/// `{ "custom_names": "com.whatsapp:واتس" }` in `<dir>/app_names.json`.
#[derive(Debug, Clone)]
pub struct FileBackend {
    dir: PathBuf,
    namespace: String,
}

impl FileBackend {
    /// `~/.config/appnames` on Linux, `%APPDATA%\appnames\config` on Windows, etc.
    pub fn new(namespace: &str) -> Result<Self, StorageError> {
        Self::at(Self::default_dir()?, namespace)
    }

    /// Use an explicit directory (created if missing).
    pub fn at(dir: impl Into<PathBuf>, namespace: &str) -> Result<Self, StorageError> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self {
            dir,
            namespace: namespace.to_owned(),
        })
    }

    pub fn default_dir() -> Result<PathBuf, StorageError> {
        let proj = ProjectDirs::from("", "", "appnames").ok_or(StorageError::NoConfigDir)?;
        Ok(proj.config_dir().to_path_buf())
    }

    fn file(&self) -> PathBuf {
        self.dir.join(format!("{}.json", self.namespace))
    }

    /// A namespace file that is not a JSON object of strings reads as empty;
    /// the next `set` replaces it.
    fn read_all(&self) -> Result<BTreeMap<String, String>, StorageError> {
        let path = self.file();
        match fs::read_to_string(&path) {
            Ok(text) if text.trim().is_empty() => Ok(BTreeMap::new()),
            Ok(text) => match serde_json::from_str(&text) {
                Ok(slots) => Ok(slots),
                Err(e) => {
                    warn!("Ignoring corrupt namespace file {:?}: {e}", path);
                    Ok(BTreeMap::new())
                }
            },
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(e.into()),
        }
    }

    /// Written to a sibling temp file, then renamed over the target.
    fn write_all(&self, slots: &BTreeMap<String, String>) -> Result<(), StorageError> {
        let target = self.file();
        let tmp = self.dir.join(format!(".{}.json.tmp", self.namespace));
        let file = fs::File::create(&tmp)?;
        serde_json::to_writer_pretty(&file, slots)?;
        file.sync_all()?;
        fs::rename(&tmp, &target)?;
        debug!("Wrote {} slot(s) to {:?}", slots.len(), target);
        Ok(())
    }
}

impl KeyValueBackend for FileBackend {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.read_all()?.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut slots = self.read_all()?;
        slots.insert(key.to_owned(), value.to_owned());
        self.write_all(&slots)
    }
}
