use appnames_storage::KeyValueBackend;
use log::info;

use crate::apps::filter::filter;
use crate::apps::selection::{select_apps, InstalledApp};
use crate::errors::StoreError;
use crate::storage::aliases::{AddOutcome, AliasMap};
use crate::storage::store::AliasStore;

/// An installed app as the editor shows it: the app plus its current aliases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppEntry {
    pub app: InstalledApp,
    pub aliases: Vec<String>,
}

/// The alias editor without a UI.
///
/// Owns the store and the map loaded from it for the editor's lifetime.
/// Every mutation that changes the map is saved immediately, so the
/// persisted copy is always the copy of record. Nothing here redraws; each
/// call returns what changed and the front-end decides how to show it.
pub struct AliasSession<B: KeyValueBackend> {
    store: AliasStore<B>,
    aliases: AliasMap,
}

impl<B: KeyValueBackend> AliasSession<B> {
    pub fn open(store: AliasStore<B>) -> Result<Self, StoreError> {
        let aliases = store.load()?;
        Ok(Self { store, aliases })
    }

    pub fn aliases(&self) -> &AliasMap {
        &self.aliases
    }

    pub fn store(&self) -> &AliasStore<B> {
        &self.store
    }

    /// Adds every alias in `raw` (comma or Arabic-comma separated) to
    /// `app_id` and saves once if any of them was new.
    ///
    /// One outcome per non-blank piece, in input order. If the save fails
    /// the in-memory map is left as it was before the call.
    pub fn add(&mut self, app_id: &str, raw: &str) -> Result<Vec<(String, AddOutcome)>, StoreError> {
        let mut updated = self.aliases.clone();
        let outcomes = updated.add_bulk(app_id, raw);
        if outcomes.iter().any(|(_, outcome)| outcome.is_added()) {
            self.commit(updated)?;
        }
        for (alias, outcome) in &outcomes {
            match outcome {
                AddOutcome::Added => info!("Added alias '{}' to '{}'", alias, app_id),
                AddOutcome::Duplicate => info!("Alias '{}' already exists for '{}'", alias, app_id),
                AddOutcome::Blank => {}
            }
        }
        Ok(outcomes)
    }

    /// Removes one alias and saves. `Ok(false)` if there was nothing to remove.
    pub fn remove(&mut self, app_id: &str, alias: &str) -> Result<bool, StoreError> {
        let mut updated = self.aliases.clone();
        if !updated.remove_alias(app_id, alias) {
            return Ok(false);
        }
        self.commit(updated)?;
        info!("Removed alias '{}' from '{}'", alias, app_id);
        Ok(true)
    }

    /// Saves `updated` and only then makes it the current map, so memory
    /// never runs ahead of the copy of record.
    fn commit(&mut self, updated: AliasMap) -> Result<(), StoreError> {
        self.store.save(&updated)?;
        self.aliases = updated;
        Ok(())
    }

    /// Re-reads the persisted copy, dropping any unsaved state.
    pub fn reload(&mut self) -> Result<(), StoreError> {
        self.aliases = self.store.load()?;
        Ok(())
    }

    /// What the editor lists: selected apps in label order, hidden when the
    /// label does not match `query`, each with its aliases.
    pub fn visible_apps<S: AsRef<str>>(
        &self,
        installed: impl IntoIterator<Item = InstalledApp>,
        allow_list: &[S],
        query: &str,
    ) -> Vec<AppEntry> {
        let selected = select_apps(installed, allow_list);
        let rows: Vec<(&str, bool)> = selected
            .iter()
            .map(|app| (app.label.as_str(), true))
            .collect();
        let visible = filter(&rows, query);

        selected
            .iter()
            .zip(visible)
            .filter(|(_, visible)| *visible)
            .map(|(app, _)| AppEntry {
                aliases: self.aliases.aliases_for(&app.package_name).to_vec(),
                app: app.clone(),
            })
            .collect()
    }
}
