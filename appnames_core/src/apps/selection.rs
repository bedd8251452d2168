use serde::{Deserialize, Serialize};

/// Package-id substrings of system apps users commonly still want to rename.
pub const DEFAULT_SYSTEM_ALLOW_LIST: &[&str] = &["whatsapp", "youtube", "camera"];

/// One entry of the platform's installed-application list.
///
/// JSON looks like:
/// `{ "package_name":"com.whatsapp", "label":"WhatsApp", "is_system":false }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstalledApp {
    pub package_name: String,
    pub label: String,
    #[serde(default)]
    pub is_system: bool,
}

impl InstalledApp {
    pub fn new(package_name: impl Into<String>, label: impl Into<String>, is_system: bool) -> Self {
        Self {
            package_name: package_name.into(),
            label: label.into(),
            is_system,
        }
    }

    /// User-installed apps always qualify; system apps only when their
    /// package id contains an allow-listed substring.
    pub fn is_candidate<S: AsRef<str>>(&self, allow_list: &[S]) -> bool {
        !self.is_system
            || allow_list.iter().any(|needle| {
                let needle: &str = needle.as_ref();
                !needle.is_empty() && self.package_name.contains(needle)
            })
    }
}

/// Candidates from `apps`, sorted case-insensitively by label.
pub fn select_apps<S: AsRef<str>>(
    apps: impl IntoIterator<Item = InstalledApp>,
    allow_list: &[S],
) -> Vec<InstalledApp> {
    let mut selected: Vec<InstalledApp> = apps
        .into_iter()
        .filter(|app| app.is_candidate(allow_list))
        .collect();
    selected.sort_by_cached_key(|app| app.label.to_lowercase());
    selected
}
