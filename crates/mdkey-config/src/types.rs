// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Configuration type definitions
//!
//! Each struct maps to a section of `mdkey_configuration.toml`.

use mdkey_codec::{MortonLayout, MortonResult};
use serde::{Deserialize, Serialize};

/// Root configuration structure
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct MdkeyConfig {
    pub layout: LayoutConfig,
    pub logging: LoggingConfig,
}

/// Key layout: dimension count, bits per dimension and display labels
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub dimensions: usize,
    pub bits_per_dimension: u32,
    /// One label per dimension, or empty for positional names
    pub labels: Vec<String>,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            dimensions: 3,
            bits_per_dimension: 32,
            labels: vec!["x".to_string(), "y".to_string(), "t".to_string()],
        }
    }
}

impl LayoutConfig {
    /// Build the codec layout described by this section.
    pub fn to_layout(&self) -> MortonResult<MortonLayout> {
        MortonLayout::new(self.dimensions, self.bits_per_dimension)
    }

    /// Label for `dimension`, falling back to `d{index}`.
    pub fn label(&self, dimension: usize) -> String {
        self.labels
            .get(dimension)
            .cloned()
            .unwrap_or_else(|| format!("d{}", dimension))
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// trace, debug, info, warn or error
    pub level: String,
    /// text or json
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "text".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layout_is_xyt() {
        let layout = LayoutConfig::default().to_layout().unwrap();
        assert_eq!(layout, MortonLayout::XYT);
    }

    #[test]
    fn test_labels() {
        let config = LayoutConfig::default();
        assert_eq!(config.label(2), "t");
        assert_eq!(config.label(5), "d5");
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: MdkeyConfig = toml::from_str("[layout]\nbits_per_dimension = 16\n").unwrap();
        assert_eq!(config.layout.dimensions, 3);
        assert_eq!(config.layout.bits_per_dimension, 16);
        assert_eq!(config.logging, LoggingConfig::default());
    }
}
