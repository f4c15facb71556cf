// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Configuration validation
//!
//! Checks that values are within the ranges the codec accepts and that the
//! sections agree with each other. All problems are collected and reported
//! together.

use crate::{ConfigError, ConfigResult, MdkeyConfig};
use mdkey_codec::MortonLayout;

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];
const LOG_FORMATS: &[&str] = &["text", "json"];

/// Validation errors that can occur during config validation
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigValidationError {
    OutOfRange {
        field: String,
        value: u64,
        min: u64,
        max: u64,
    },
    LabelCountMismatch { expected: usize, actual: usize },
    InvalidValue { field: String, reason: String },
}

impl std::fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OutOfRange {
                field,
                value,
                min,
                max,
            } => {
                write!(f, "{} = {} is outside valid range ({}-{})", field, value, min, max)
            }
            Self::LabelCountMismatch { expected, actual } => {
                write!(
                    f,
                    "layout.labels has {} entries but layout.dimensions is {}",
                    actual, expected
                )
            }
            Self::InvalidValue { field, reason } => {
                write!(f, "Invalid configuration value for {}: {}", field, reason)
            }
        }
    }
}

/// Validate the complete configuration
///
/// Checks for:
/// - Layout ranges (dimensions and bits per dimension in 1-64)
/// - Label count matching the dimension count
/// - Known log level and format
///
/// # Errors
///
/// Returns `ConfigError::ValidationError` with details if validation fails
pub fn validate_config(config: &MdkeyConfig) -> ConfigResult<()> {
    let mut errors = Vec::new();

    validate_layout(config, &mut errors);
    validate_logging(config, &mut errors);

    if !errors.is_empty() {
        let error_messages = errors
            .iter()
            .map(|e| format!("  - {}", e))
            .collect::<Vec<_>>()
            .join("\n");

        return Err(ConfigError::ValidationError(format!(
            "Configuration validation failed:\n{}",
            error_messages
        )));
    }

    Ok(())
}

fn validate_layout(config: &MdkeyConfig, errors: &mut Vec<ConfigValidationError>) {
    let layout = &config.layout;

    if !(1..=MortonLayout::MAX_DIMENSIONS).contains(&layout.dimensions) {
        errors.push(ConfigValidationError::OutOfRange {
            field: "layout.dimensions".to_string(),
            value: layout.dimensions as u64,
            min: 1,
            max: MortonLayout::MAX_DIMENSIONS as u64,
        });
    }

    if !(1..=MortonLayout::MAX_BITS_PER_DIMENSION).contains(&layout.bits_per_dimension) {
        errors.push(ConfigValidationError::OutOfRange {
            field: "layout.bits_per_dimension".to_string(),
            value: layout.bits_per_dimension as u64,
            min: 1,
            max: MortonLayout::MAX_BITS_PER_DIMENSION as u64,
        });
    }

    if !layout.labels.is_empty() && layout.labels.len() != layout.dimensions {
        errors.push(ConfigValidationError::LabelCountMismatch {
            expected: layout.dimensions,
            actual: layout.labels.len(),
        });
    }
}

fn validate_logging(config: &MdkeyConfig, errors: &mut Vec<ConfigValidationError>) {
    let level = config.logging.level.to_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(ConfigValidationError::InvalidValue {
            field: "logging.level".to_string(),
            reason: format!("'{}' is not one of {}", config.logging.level, LOG_LEVELS.join(", ")),
        });
    }

    let format = config.logging.format.to_lowercase();
    if !LOG_FORMATS.contains(&format.as_str()) {
        errors.push(ConfigValidationError::InvalidValue {
            field: "logging.format".to_string(),
            reason: format!("'{}' is not one of {}", config.logging.format, LOG_FORMATS.join(", ")),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_default() {
        assert!(validate_config(&MdkeyConfig::default()).is_ok());
    }

    #[test]
    fn test_layout_out_of_range() {
        let mut config = MdkeyConfig::default();
        config.layout.bits_per_dimension = 65;
        let err = validate_config(&config).unwrap_err();
        assert!(err.to_string().contains("layout.bits_per_dimension = 65"));
    }

    #[test]
    fn test_label_count_mismatch() {
        let mut config = MdkeyConfig::default();
        config.layout.dimensions = 2;
        let mut errors = Vec::new();
        validate_layout(&config, &mut errors);
        assert_eq!(
            errors,
            vec![ConfigValidationError::LabelCountMismatch {
                expected: 2,
                actual: 3
            }]
        );

        config.layout.labels.clear();
        errors.clear();
        validate_layout(&config, &mut errors);
        assert!(errors.is_empty());
    }

    #[test]
    fn test_collects_every_problem() {
        let mut config = MdkeyConfig::default();
        config.layout.dimensions = 0;
        config.logging.level = "loud".to_string();
        config.logging.format = "xml".to_string();
        let message = validate_config(&config).unwrap_err().to_string();
        assert!(message.contains("layout.dimensions"));
        assert!(message.contains("layout.labels"));
        assert!(message.contains("logging.level"));
        assert!(message.contains("logging.format"));
    }

    #[test]
    fn test_log_level_case_insensitive() {
        let mut config = MdkeyConfig::default();
        config.logging.level = "WARN".to_string();
        assert!(validate_config(&config).is_ok());
    }
}
