//! Text encodings of an [`AliasMap`].
//!
//! Two formats are understood:
//!
//! * **JSON**: an object of application id → array of aliases, keys in
//!   insertion order. Written by default.
//! * **Legacy**: `id:alias,alias;id:alias`, no escaping. Read for
//!   compatibility with data written by older versions, written only on
//!   request and only when nothing in the map collides with a separator.
//!
//! Decoding never fails: corrupt entries are logged and skipped, and the rest
//! of the record still loads.

use indexmap::IndexMap;
use log::warn;
use serde_json::Value;

use crate::config::WireFormat;
use crate::errors::StoreError;
use crate::storage::aliases::AliasMap;

pub const ENTRY_SEPARATOR: &str = ";";
pub const FIELD_SEPARATOR: &str = ":";
pub const ALIAS_SEPARATOR: &str = ",";

const RESERVED: [char; 3] = [';', ':', ','];

/// A record starting with `{` is tried as JSON first; anything that does not
/// parse as a JSON document is read as legacy text.
pub fn decode(raw: &str) -> AliasMap {
    let trimmed = raw.trim_start();
    if trimmed.is_empty() {
        return AliasMap::new();
    }
    if trimmed.starts_with('{') {
        if let Some(map) = decode_json(trimmed) {
            return map;
        }
    }
    decode_legacy(raw)
}

pub fn decode_legacy(raw: &str) -> AliasMap {
    let mut map = AliasMap::new();
    if raw.trim().is_empty() {
        return map;
    }
    for entry in raw.split(ENTRY_SEPARATOR) {
        if entry.is_empty() {
            continue;
        }
        let fields: Vec<&str> = entry.split(FIELD_SEPARATOR).collect();
        let [app_id, aliases] = fields.as_slice() else {
            warn!(
                "Skipping alias entry {:?}: expected 2 fields, found {}",
                entry,
                fields.len()
            );
            continue;
        };
        if app_id.is_empty() {
            warn!("Skipping alias entry {:?}: empty application id", entry);
            continue;
        }
        for alias in aliases.split(ALIAS_SEPARATOR) {
            map.add_alias(app_id, alias);
        }
    }
    map
}

/// `None` when `raw` is not a JSON object at all; per-entry problems are
/// skipped.
pub fn decode_json(raw: &str) -> Option<AliasMap> {
    let mut map = AliasMap::new();
    let document: IndexMap<String, Value> = match serde_json::from_str(raw) {
        Ok(document) => document,
        Err(e) => {
            warn!("Alias record is not JSON ({e}), reading it as legacy text");
            return None;
        }
    };
    for (app_id, value) in document {
        let Value::Array(items) = value else {
            warn!("Skipping aliases of {:?}: not an array", app_id);
            continue;
        };
        for item in items {
            match item {
                Value::String(alias) => {
                    map.add_alias(&app_id, &alias);
                }
                other => warn!("Skipping non-string alias {} of {:?}", other, app_id),
            }
        }
    }
    Some(map)
}

pub fn encode(map: &AliasMap, format: WireFormat) -> Result<String, StoreError> {
    match format {
        WireFormat::Json => Ok(serde_json::to_string(map)?),
        WireFormat::Legacy => encode_legacy(map),
    }
}

pub fn encode_legacy(map: &AliasMap) -> Result<String, StoreError> {
    let mut entries = Vec::with_capacity(map.len());
    for (app_id, aliases) in map.iter() {
        if let Some(bad) = std::iter::once(app_id)
            .chain(aliases.iter().map(String::as_str))
            .find(|s| s.contains(RESERVED))
        {
            return Err(StoreError::Unrepresentable(format!(
                "{bad:?} (under {app_id:?}) contains one of ';', ':' or ','"
            )));
        }
        entries.push(format!(
            "{app_id}{FIELD_SEPARATOR}{}",
            aliases.join(ALIAS_SEPARATOR)
        ));
    }
    Ok(entries.join(ENTRY_SEPARATOR))
}
