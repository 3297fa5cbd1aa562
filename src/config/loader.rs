// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::classify::ClassifierPolicy;
use crate::converters::DeadLetterFormat;
use crate::errors::ConfigError;
use crate::observability::messages::config::ConfigLoaded;
use crate::observability::messages::StructuredLog;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Error handling configuration for one decorated stage.
///
/// # Fields
/// * `description` - Label recorded on every dead letter and failure header
/// * `strategy` - What happens to unrecoverable faults (optional, defaults to `capture`)
/// * `classifier` - Which faults count as recoverable (optional, defaults to `default`)
/// * `dead_letter` - Output format of dead letters (optional)
///
/// # Example
/// ```yaml
/// description: "Parse quantity"
/// strategy: capture
/// classifier: default
/// dead_letter:
///   format: protobuf
/// ```
#[derive(Debug, Deserialize)]
pub struct Config {
    pub description: String,
    #[serde(default)]
    pub strategy: Strategy,
    #[serde(default)]
    pub classifier: ClassifierPolicy,
    #[serde(default)]
    pub dead_letter: DeadLetterOptions,
}

/// How unrecoverable faults are handled.
///
/// # Variants
/// * `Capture` - Failures are split off and turned into dead letters
/// * `LogAndDrop` - Failures are logged at error level and the record is dropped
/// * `Describe` - Every fault is annotated with its input and propagated
/// * `Headers` - The original value is forwarded inline with failure headers
#[derive(Debug, Default, Deserialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    #[default]
    Capture,
    LogAndDrop,
    Describe,
    Headers,
}

impl Strategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::Capture => "capture",
            Strategy::LogAndDrop => "log_and_drop",
            Strategy::Describe => "describe",
            Strategy::Headers => "headers",
        }
    }
}

/// Dead letter output options.
#[derive(Debug, Default, Deserialize)]
pub struct DeadLetterOptions {
    #[serde(default)]
    pub format: DeadLetterFormat,
}

/// Load a config from a YAML file
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
        path: path.display().to_string(),
        source,
    })?;
    let cfg: Config = serde_yaml::from_str(&content)?;
    Ok(cfg)
}

pub fn validate_config(cfg: &Config) -> Result<(), ConfigError> {
    if cfg.description.trim().is_empty() {
        return Err(ConfigError::EmptyDescription);
    }
    Ok(())
}

/// Load and validate a config from a YAML file
pub fn load_and_validate_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let path = path.as_ref();
    let cfg = load_config(path)?;
    validate_config(&cfg)?;

    ConfigLoaded {
        path: &path.display().to_string(),
        description: &cfg.description,
        strategy: cfg.strategy.as_str(),
        classifier: cfg.classifier.as_str(),
    }
    .log();

    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(yaml: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(yaml.as_bytes()).unwrap();
        file
    }

    #[test]
    fn parse_basic_config() {
        let yaml = r#"
description: Parse quantity
strategy: log_and_drop
classifier: capture_all
dead_letter:
  format: protobuf
"#;

        let cfg: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(cfg.description, "Parse quantity");
        assert_eq!(cfg.strategy, Strategy::LogAndDrop);
        assert_eq!(cfg.classifier, ClassifierPolicy::CaptureAll);
        assert_eq!(cfg.dead_letter.format, DeadLetterFormat::Protobuf);
    }

    #[test]
    fn test_defaults() {
        let cfg: Config = serde_yaml::from_str("description: d").unwrap();
        assert_eq!(cfg.strategy, Strategy::Capture);
        assert_eq!(cfg.classifier, ClassifierPolicy::Default);
        assert_eq!(cfg.dead_letter.format, DeadLetterFormat::Json);
    }

    #[test]
    fn test_load_and_validate_valid_config() {
        let file = write_config("description: Parse quantity\nstrategy: headers\n");

        let cfg = load_and_validate_config(file.path()).unwrap();
        assert_eq!(cfg.strategy, Strategy::Headers);
    }

    #[test]
    fn test_empty_description_is_rejected() {
        let file = write_config("description: '  '\n");

        let result = load_and_validate_config(file.path());
        assert!(matches!(result, Err(ConfigError::EmptyDescription)));
    }

    #[test]
    fn test_missing_description_is_a_parse_error() {
        let file = write_config("strategy: capture\n");

        let result = load_config(file.path());
        assert!(matches!(result, Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn test_unknown_strategy_is_a_parse_error() {
        let result = serde_yaml::from_str::<Config>("description: d\nstrategy: retry\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.yaml");

        let error = load_config(&path).unwrap_err();
        assert!(matches!(error, ConfigError::ReadFile { .. }));
        assert!(error.to_string().contains("missing.yaml"));
    }
}
