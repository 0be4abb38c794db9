/*!
 * Tests for application configuration functionality
 */

use anyhow::Result;
use tgquery::app_config::{Config, LogLevel, OutputFormat};
use tgquery::{AppError, RecordPolicy};
use crate::common;

/// Test default configuration values
#[test]
fn test_default_config_withNoParameters_shouldHaveCorrectDefaults() {
    let config = Config::default();

    assert_eq!(config.log_level, LogLevel::Info);
    assert_eq!(config.parser.record_policy, RecordPolicy::Lenient);
    assert_eq!(config.output.format, OutputFormat::Text);
    assert_eq!(config.output.precision, 3);
    assert!(config.validate().is_ok());
}

/// Test configuration validation
#[test]
fn test_config_validation_withExcessivePrecision_shouldFail() {
    let mut config = Config::default();
    config.output.precision = 40;

    assert!(matches!(config.validate(), Err(AppError::Config(_))));
}

/// Partial files fall back to defaults for missing sections
#[test]
fn test_config_deserialization_withPartialJson_shouldFillDefaults() -> Result<()> {
    let config: Config = serde_json::from_str(r#"{ "parser": { "record_policy": "strict" } }"#)?;

    assert_eq!(config.parser.record_policy, RecordPolicy::Strict);
    assert_eq!(config.log_level, LogLevel::Info);
    assert_eq!(config.output.precision, 3);
    Ok(())
}

#[test]
fn test_config_serialization_shouldRoundTripThroughJson() -> Result<()> {
    let mut config = Config::default();
    config.log_level = LogLevel::Debug;
    config.output.format = OutputFormat::Json;

    let json = serde_json::to_string_pretty(&config)?;
    assert!(json.contains("\"debug\""));
    assert!(json.contains("\"lenient\""));

    let back: Config = serde_json::from_str(&json)?;
    assert_eq!(back, config);
    Ok(())
}

#[test]
fn test_loadOrDefault_withMissingFile_shouldUseDefaults() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let config = Config::load_or_default(temp_dir.path().join("absent.json"))?;

    assert_eq!(config, Config::default());
    Ok(())
}

#[test]
fn test_fromFile_withInvalidJson_shouldFailWithConfigError() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_file(temp_dir.path(), "tgquery.json", "{ not json")?;

    assert!(matches!(Config::from_file(&path), Err(AppError::Config(_))));
    Ok(())
}

#[test]
fn test_fromFile_withValidFile_shouldLoadValues() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_file(
        temp_dir.path(),
        "tgquery.json",
        r#"{ "log_level": "warn", "output": { "format": "json", "precision": 6 } }"#,
    )?;

    let config = Config::from_file(&path)?;

    assert_eq!(config.log_level, LogLevel::Warn);
    assert_eq!(config.output.format, OutputFormat::Json);
    assert_eq!(config.output.precision, 6);
    assert_eq!(config.log_level.to_level_filter(), log::LevelFilter::Warn);
    Ok(())
}
