//! Flat key-value persistence for records and preferences.
//!
//! Keys mirror the browser storage the estimator started out on: `records`
//! holds a JSON array, `darkMode` holds `"true"`/`"false"` and `language`
//! holds a language code. There is no schema version; anything unreadable is
//! treated as absent.

use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use tracing::{debug, warn};

use crate::error::Result;
use crate::i18n::Language;
use crate::records::RoomRecord;

pub const RECORDS_KEY: &str = "records";
pub const DARK_MODE_KEY: &str = "darkMode";
pub const LANGUAGE_KEY: &str = "language";

pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// One file per key inside a directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(key)
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(content) => Ok(Some(content)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let path = self.path_for(key);
        let staging = path.with_extension("tmp");
        fs::write(&staging, value)?;
        fs::rename(&staging, &path)?;
        debug!(key, path = %path.display(), "Wrote key");
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Reads the saved records. Missing, unreadable or malformed data yields an
/// empty list.
pub fn load_records<S: KeyValueStore>(store: &S) -> Vec<RoomRecord> {
    let raw = match store.get(RECORDS_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Vec::new(),
        Err(err) => {
            warn!(error = %err, "Could not read saved records; starting empty");
            return Vec::new();
        }
    };

    match serde_json::from_str(&raw) {
        Ok(records) => records,
        Err(err) => {
            warn!(error = %err, "Saved records are malformed; starting empty");
            Vec::new()
        }
    }
}

pub fn save_records<S: KeyValueStore>(store: &mut S, records: &[RoomRecord]) -> Result<()> {
    let json = serde_json::to_string(records)?;
    store.set(RECORDS_KEY, &json)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Preferences {
    pub dark_mode: bool,
    pub language: Language,
}

/// Reads preferences, falling back to `defaults` for anything missing or
/// unrecognised.
pub fn load_preferences<S: KeyValueStore>(store: &S, defaults: Preferences) -> Preferences {
    let dark_mode = match store.get(DARK_MODE_KEY) {
        Ok(Some(raw)) => match raw.trim() {
            "true" => true,
            "false" => false,
            other => {
                warn!(value = other, "Ignoring unrecognised darkMode value");
                defaults.dark_mode
            }
        },
        Ok(None) => defaults.dark_mode,
        Err(err) => {
            warn!(error = %err, "Could not read darkMode");
            defaults.dark_mode
        }
    };

    let language = match store.get(LANGUAGE_KEY) {
        Ok(Some(raw)) => Language::from_code(&raw).unwrap_or_else(|| {
            warn!(value = raw.trim(), "Ignoring unrecognised language");
            defaults.language
        }),
        Ok(None) => defaults.language,
        Err(err) => {
            warn!(error = %err, "Could not read language");
            defaults.language
        }
    };

    Preferences {
        dark_mode,
        language,
    }
}

pub fn save_preferences<S: KeyValueStore>(store: &mut S, preferences: &Preferences) -> Result<()> {
    store.set(
        DARK_MODE_KEY,
        if preferences.dark_mode { "true" } else { "false" },
    )?;
    store.set(LANGUAGE_KEY, preferences.language.code())
}
