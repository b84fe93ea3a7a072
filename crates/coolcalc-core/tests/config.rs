use std::path::PathBuf;

use coolcalc_core::config::{AdvisoryConfig, AppConfig};
use coolcalc_core::{CoolCalcError, Language};

#[test]
fn empty_file_gives_defaults() -> coolcalc_core::Result<()> {
    let config = AppConfig::from_toml_str("")?;

    assert_eq!(config, AppConfig::default());
    assert!(config.default_tropical);
    assert_eq!(config.default_language, Language::En);
    assert_eq!(config.advisory.model, "gemini-3-flash-preview");
    assert_eq!(config.advisory.top_k, 40);
    assert_eq!(config.advisory.api_key_env, "API_KEY");
    Ok(())
}

#[test]
fn partial_file_keeps_remaining_defaults() -> coolcalc_core::Result<()> {
    let config = AppConfig::from_toml_str(
        r#"
data_dir = "/var/lib/coolcalc"
default_tropical = false
default_language = "fr"

[advisory]
model = "other-model"
timeout_secs = 5
"#,
    )?;

    assert_eq!(config.data_dir, Some(PathBuf::from("/var/lib/coolcalc")));
    assert!(!config.default_tropical);
    assert_eq!(config.default_language, Language::Fr);
    assert_eq!(config.advisory.model, "other-model");
    assert_eq!(config.advisory.timeout_secs, 5);
    assert_eq!(config.advisory.endpoint, AdvisoryConfig::default().endpoint);
    assert_eq!(config.advisory.temperature, 0.7);
    Ok(())
}

#[test]
fn invalid_toml_is_reported() {
    let err = AppConfig::from_toml_str("default_tropical = \"sometimes\"").unwrap_err();
    assert!(matches!(err, CoolCalcError::Toml(_)));
}

#[test]
fn explicit_path_is_loaded() -> coolcalc_core::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "default_language = \"zh\"\n")?;

    let config = AppConfig::load(Some(&path))?;

    assert_eq!(config.default_language, Language::Zh);
    Ok(())
}

#[test]
fn missing_explicit_path_is_a_config_error() {
    let err = AppConfig::load(Some(std::path::Path::new("/nonexistent/coolcalc.toml"))).unwrap_err();
    assert!(matches!(err, CoolCalcError::Config(_)));
}

#[test]
fn data_dir_override_wins() {
    let config = AppConfig {
        data_dir: Some(PathBuf::from("/tmp/coolcalc-data")),
        ..AppConfig::default()
    };

    assert_eq!(config.resolved_data_dir(), PathBuf::from("/tmp/coolcalc-data"));
}
