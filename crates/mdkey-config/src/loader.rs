// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Configuration file loading with override support
//!
//! Three tiers, applied in order:
//! 1. TOML file (base values)
//! 2. Environment variables (runtime overrides)
//! 3. CLI arguments (explicit user overrides)

use crate::validation::validate_config;
use crate::{ConfigError, ConfigResult, MdkeyConfig};
use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// File name searched for when no explicit path is given
pub const CONFIG_FILE_NAME: &str = "mdkey_configuration.toml";

/// Find the mdkey configuration file
///
/// Search order:
/// 1. `MDKEY_CONFIG_PATH` environment variable
/// 2. Current working directory
/// 3. Up to 5 parent directories
///
/// # Errors
///
/// Returns `ConfigError::FileNotFound` if no config file is found in any location
pub fn find_config_file() -> ConfigResult<PathBuf> {
    if let Ok(env_path) = env::var("MDKEY_CONFIG_PATH") {
        let path = PathBuf::from(env_path);
        if path.exists() {
            return Ok(path);
        }
        return Err(ConfigError::FileNotFound(format!(
            "Config file specified by MDKEY_CONFIG_PATH not found: {}",
            path.display()
        )));
    }

    let mut search_paths = Vec::new();
    if let Ok(cwd) = env::current_dir() {
        search_paths.push(cwd.join(CONFIG_FILE_NAME));
        for ancestor in cwd.ancestors().skip(1).take(5) {
            search_paths.push(ancestor.join(CONFIG_FILE_NAME));
        }
    }

    if let Some(path) = search_paths.iter().find(|p| p.exists()) {
        return Ok(path.clone());
    }

    let search_list = search_paths
        .iter()
        .map(|p| format!("  - {}", p.display()))
        .collect::<Vec<_>>()
        .join("\n");

    Err(ConfigError::FileNotFound(format!(
        "mdkey configuration file '{}' not found in any of these locations:\n{}\n\nSet MDKEY_CONFIG_PATH environment variable to specify custom location.",
        CONFIG_FILE_NAME, search_list
    )))
}

/// Load configuration from TOML file
///
/// # Arguments
///
/// * `config_path` - Optional path to config file. If `None`, will search for config file.
/// * `cli_args` - Optional CLI argument overrides
///
/// # Errors
///
/// Returns error if config file is not found, contains invalid TOML, or fails validation
pub fn load_config(
    config_path: Option<&Path>,
    cli_args: Option<&HashMap<String, String>>,
) -> ConfigResult<MdkeyConfig> {
    let config_file = match config_path {
        Some(path) => path.to_path_buf(),
        None => find_config_file()?,
    };

    let content = fs::read_to_string(&config_file)?;
    let mut config: MdkeyConfig = toml::from_str(&content)?;

    apply_environment_overrides(&mut config);
    if let Some(cli) = cli_args {
        apply_cli_overrides(&mut config, cli);
    }

    validate_config(&config)?;
    Ok(config)
}

/// Load configuration, or fall back to built-in defaults when no file exists
///
/// Defaults are used only when the file was searched for and not found. A
/// path given explicitly or through `MDKEY_CONFIG_PATH` must exist. Environment
/// and CLI overrides and validation apply to the defaults as well.
///
/// # Errors
///
/// Same as [`load_config`], except for `FileNotFound` from the search.
pub fn load_config_or_default(
    config_path: Option<&Path>,
    cli_args: Option<&HashMap<String, String>>,
) -> ConfigResult<MdkeyConfig> {
    if config_path.is_some() || env::var_os("MDKEY_CONFIG_PATH").is_some() {
        return load_config(config_path, cli_args);
    }

    match load_config(None, cli_args) {
        Err(ConfigError::FileNotFound(_)) => {
            let mut config = MdkeyConfig::default();
            apply_environment_overrides(&mut config);
            if let Some(cli) = cli_args {
                apply_cli_overrides(&mut config, cli);
            }
            validate_config(&config)?;
            Ok(config)
        }
        other => other,
    }
}

/// Apply environment variable overrides to configuration
///
/// Supported environment variables:
/// - `MDKEY_DIMENSIONS` -> `layout.dimensions`
/// - `MDKEY_BITS_PER_DIMENSION` -> `layout.bits_per_dimension`
/// - `MDKEY_LOG_LEVEL` -> `logging.level`
/// - `MDKEY_LOG_FORMAT` -> `logging.format`
pub fn apply_environment_overrides(config: &mut MdkeyConfig) {
    if let Ok(value) = env::var("MDKEY_DIMENSIONS") {
        if let Ok(dimensions) = value.parse::<usize>() {
            config.layout.dimensions = dimensions;
        }
    }
    if let Ok(value) = env::var("MDKEY_BITS_PER_DIMENSION") {
        if let Ok(bits) = value.parse::<u32>() {
            config.layout.bits_per_dimension = bits;
        }
    }
    if let Ok(value) = env::var("MDKEY_LOG_LEVEL") {
        config.logging.level = value;
    }
    if let Ok(value) = env::var("MDKEY_LOG_FORMAT") {
        config.logging.format = value;
    }
}

/// Apply CLI argument overrides to configuration
///
/// Recognised keys: `dimensions`, `bits_per_dimension`, `log_level`, `log_format`.
pub fn apply_cli_overrides(config: &mut MdkeyConfig, cli_args: &HashMap<String, String>) {
    if let Some(value) = cli_args.get("dimensions") {
        if let Ok(dimensions) = value.parse::<usize>() {
            config.layout.dimensions = dimensions;
        }
    }
    if let Some(value) = cli_args.get("bits_per_dimension") {
        if let Ok(bits) = value.parse::<u32>() {
            config.layout.bits_per_dimension = bits;
        }
    }
    if let Some(value) = cli_args.get("log_level") {
        config.logging.level = value.clone();
    }
    if let Some(value) = cli_args.get("log_format") {
        config.logging.format = value.clone();
    }
}
