use tracing::info;

use crate::calculator::CalculationResult;
use crate::error::{CoolCalcError, Result};
use crate::i18n::Language;
use crate::records::{RecordId, RecordStore, RoomRecord};
use crate::storage::{self, KeyValueStore, Preferences};
use crate::summary::{self, Summary};

/// Owns the persisted state: records plus preferences.
///
/// State is read once in [`CoolCalcApp::load`] and written back after every
/// mutation. Calculations themselves are stateless and live in
/// [`crate::calculator`].
pub struct CoolCalcApp<S: KeyValueStore> {
    store: S,
    records: RecordStore,
    preferences: Preferences,
}

impl<S: KeyValueStore> CoolCalcApp<S> {
    pub fn load(store: S, defaults: Preferences) -> Self {
        let records = RecordStore::from_records(storage::load_records(&store));
        let preferences = storage::load_preferences(&store, defaults);
        info!(
            records = records.len(),
            language = %preferences.language,
            "Loaded saved state"
        );

        Self {
            store,
            records,
            preferences,
        }
    }

    pub fn records(&self) -> &[RoomRecord] {
        self.records.records()
    }

    pub fn record(&self, id: &RecordId) -> Result<&RoomRecord> {
        self.records
            .get(id)
            .ok_or_else(|| CoolCalcError::RecordNotFound(id.clone()))
    }

    pub fn preferences(&self) -> Preferences {
        self.preferences
    }

    pub fn language(&self) -> Language {
        self.preferences.language
    }

    /// Switches the active language for this session without persisting it.
    pub fn override_language(&mut self, language: Language) {
        self.preferences.language = language;
    }

    pub fn is_full(&self) -> bool {
        self.records.is_full()
    }

    pub fn confirm(&mut self, result: &CalculationResult) -> Result<RoomRecord> {
        let record = self
            .records
            .confirm(result, self.preferences.language)?
            .clone();
        self.save_records()?;
        Ok(record)
    }

    pub fn delete(&mut self, id: &RecordId) -> Result<bool> {
        let removed = self.records.delete(id);
        if removed {
            self.save_records()?;
        }
        Ok(removed)
    }

    pub fn rename(&mut self, id: &RecordId, new_name: &str) -> Result<bool> {
        let renamed = self.records.rename(id, new_name);
        if renamed {
            self.save_records()?;
        }
        Ok(renamed)
    }

    pub fn clear(&mut self) -> Result<()> {
        self.records.clear();
        self.save_records()
    }

    /// `None` while there is nothing to summarize.
    pub fn summary(&self) -> Option<Summary> {
        if self.records.is_empty() {
            None
        } else {
            Some(summary::summarize(self.records.records()))
        }
    }

    pub fn set_preferences(&mut self, preferences: Preferences) -> Result<()> {
        self.preferences = preferences;
        storage::save_preferences(&mut self.store, &self.preferences)
    }

    pub fn into_store(self) -> S {
        self.store
    }

    fn save_records(&mut self) -> Result<()> {
        storage::save_records(&mut self.store, self.records.records())
    }
}
