/*!
 * Tests for application configuration handling
 */

use std::path::PathBuf;

use flashgen::app_config::{Config, LogLevel};

#[test]
fn test_config_default_shouldUseEnglishAndHttpPrefix() {
    let config = Config::default();

    assert_eq!(config.source_language, "en");
    assert_eq!(config.marker_prefix, "HTTP_");
    assert_eq!(config.table_path, PathBuf::from("translation.json"));
    assert_eq!(config.log_level, LogLevel::Info);
}

#[test]
fn test_config_validate_withDefaults_shouldSucceed() {
    assert!(Config::default().validate().is_ok());
}

#[test]
fn test_config_validate_withEmptySourceLanguage_shouldFail() {
    let mut config = Config::default();
    config.source_language = String::new();

    assert!(config.validate().is_err());
}

#[test]
fn test_config_validate_withUppercaseSourceLanguage_shouldFail() {
    let mut config = Config::default();
    config.source_language = "EN".to_string();

    assert!(config.validate().is_err());
}

#[test]
fn test_config_validate_withLowercasePrefix_shouldFail() {
    let mut config = Config::default();
    config.marker_prefix = "http_".to_string();

    assert!(config.validate().is_err());
}

#[test]
fn test_config_saveAndLoad_shouldRoundTrip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("conf.json");

    let mut config = Config::default();
    config.source_language = "fr".to_string();
    config.table_path = PathBuf::from("i18n/table.json");
    config.save_to(&path).unwrap();

    let loaded = Config::from_file(&path).unwrap();

    assert_eq!(loaded.source_language, "fr");
    assert_eq!(loaded.table_path, PathBuf::from("i18n/table.json"));
}

#[test]
fn test_config_fromFile_withPartialJson_shouldFillDefaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("conf.json");
    std::fs::write(&path, r#"{ "source_language": "de" }"#).unwrap();

    let config = Config::from_file(&path).unwrap();

    assert_eq!(config.source_language, "de");
    assert_eq!(config.marker_prefix, "HTTP_");
}

#[test]
fn test_config_fromFile_withMissingFile_shouldFail() {
    assert!(Config::from_file("/nonexistent/conf.json").is_err());
}
