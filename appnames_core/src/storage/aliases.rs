use indexmap::IndexMap;
use serde::Serialize;

/// ASCII comma and ARABIC COMMA (U+060C); users type either.
pub const BULK_SEPARATORS: [char; 2] = [',', '،'];

/// Result of trying to attach one alias to an application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    Added,
    /// Already present for this application; the map is unchanged.
    Duplicate,
    /// Nothing left after trimming; the map is unchanged.
    Blank,
}

impl AddOutcome {
    pub fn is_added(self) -> bool {
        self == AddOutcome::Added
    }
}

/// Application id → its aliases, both in insertion order.
///
/// Every list is non-empty and duplicate-free; the mutators below are the
/// only way in, so the invariants hold for any value of this type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AliasMap {
    entries: IndexMap<String, Vec<String>>,
}

impl AliasMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of applications with at least one alias.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn contains_app(&self, app_id: &str) -> bool {
        self.entries.contains_key(app_id)
    }

    /// The aliases of `app_id`, empty if it has none.
    pub fn aliases_for(&self, app_id: &str) -> &[String] {
        self.entries.get(app_id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(id, aliases)| (id.as_str(), aliases.as_slice()))
    }

    /// Trims `alias` and appends it to `app_id`'s list, creating the list on
    /// first use.
    pub fn add_alias(&mut self, app_id: &str, alias: &str) -> AddOutcome {
        let alias = alias.trim();
        if alias.is_empty() || app_id.trim().is_empty() {
            return AddOutcome::Blank;
        }
        if self.aliases_for(app_id).iter().any(|a| a == alias) {
            return AddOutcome::Duplicate;
        }
        self.entries
            .entry(app_id.to_owned())
            .or_default()
            .push(alias.to_owned());
        AddOutcome::Added
    }

    /// Splits `raw` with [`parse_bulk_input`] and adds every piece in order.
    pub fn add_bulk(&mut self, app_id: &str, raw: &str) -> Vec<(String, AddOutcome)> {
        parse_bulk_input(raw)
            .into_iter()
            .map(|alias| {
                let outcome = self.add_alias(app_id, &alias);
                (alias, outcome)
            })
            .collect()
    }

    /// Removes `alias` (trimmed, like [`AliasMap::add_alias`]) from `app_id`,
    /// dropping the application once its list is empty. Returns `false` (and
    /// changes nothing) if either is unknown.
    pub fn remove_alias(&mut self, app_id: &str, alias: &str) -> bool {
        let alias = alias.trim();
        let Some(aliases) = self.entries.get_mut(app_id) else {
            return false;
        };
        let Some(pos) = aliases.iter().position(|a| a == alias) else {
            return false;
        };
        aliases.remove(pos);
        if aliases.is_empty() {
            self.entries.shift_remove(app_id);
        }
        true
    }

    /// First application (in insertion order) that carries `alias`,
    /// compared case-insensitively after trimming.
    pub fn app_for_alias(&self, alias: &str) -> Option<&str> {
        let needle = alias.trim().to_lowercase();
        if needle.is_empty() {
            return None;
        }
        self.entries
            .iter()
            .find(|(_, aliases)| aliases.iter().any(|a| a.to_lowercase() == needle))
            .map(|(id, _)| id.as_str())
    }

    pub fn into_index_map(self) -> IndexMap<String, Vec<String>> {
        self.entries
    }
}

/// Builds a map through [`AliasMap::add_alias`], so blanks and duplicates in
/// the input are dropped.
impl<K, I, S> FromIterator<(K, I)> for AliasMap
where
    K: AsRef<str>,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    fn from_iter<T: IntoIterator<Item = (K, I)>>(iter: T) -> Self {
        let mut map = AliasMap::new();
        for (app_id, aliases) in iter {
            for alias in aliases {
                map.add_alias(app_id.as_ref(), alias.as_ref());
            }
        }
        map
    }
}

/// Splits user input holding several aliases at once.
///
/// `"واتس، واتساب, whats"` → `["واتس", "واتساب", "whats"]`
pub fn parse_bulk_input(raw: &str) -> Vec<String> {
    raw.split(BULK_SEPARATORS)
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(str::to_owned)
        .collect()
}
