use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::error::{CoolCalcError, Result};
use crate::i18n::Language;

pub const CONFIG_ENV: &str = "COOLCALC_CONFIG";
const APP_DIR: &str = "coolcalc";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Directory for the key-value store. `None` means the platform data dir.
    pub data_dir: Option<PathBuf>,
    pub default_tropical: bool,
    pub default_language: Language,
    pub advisory: AdvisoryConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            default_tropical: true,
            default_language: Language::En,
            advisory: AdvisoryConfig::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AdvisoryConfig {
    pub endpoint: String,
    pub model: String,
    pub temperature: f64,
    pub top_k: u32,
    pub top_p: f64,
    pub timeout_secs: u64,
    /// Name of the environment variable holding the API key.
    pub api_key_env: String,
}

impl Default for AdvisoryConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://generativelanguage.googleapis.com".to_string(),
            model: "gemini-3-flash-preview".to_string(),
            temperature: 0.7,
            top_k: 40,
            top_p: 0.95,
            timeout_secs: 30,
            api_key_env: "API_KEY".to_string(),
        }
    }
}

impl AdvisoryConfig {
    pub fn api_key(&self) -> Option<String> {
        env::var(&self.api_key_env)
            .ok()
            .filter(|key| !key.trim().is_empty())
    }
}

impl AppConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|err| {
            CoolCalcError::Config(format!("failed to read {}: {err}", path.display()))
        })?;
        Self::from_toml_str(&content)
    }

    /// Resolves the config source: an explicit path, then `COOLCALC_CONFIG`,
    /// then `<config dir>/coolcalc/config.toml` when it exists, else defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        if let Ok(path) = env::var(CONFIG_ENV) {
            return Self::from_file(Path::new(&path));
        }

        if let Some(path) = dirs::config_dir().map(|dir| dir.join(APP_DIR).join("config.toml")) {
            if path.is_file() {
                debug!(path = %path.display(), "Loading config");
                return Self::from_file(&path);
            }
        }

        Ok(Self::default())
    }

    pub fn resolved_data_dir(&self) -> PathBuf {
        self.data_dir
            .clone()
            .or_else(|| dirs::data_dir().map(|dir| dir.join(APP_DIR)))
            .unwrap_or_else(|| PathBuf::from(".coolcalc"))
    }
}
