// Configuration module for clipdeck
// This module handles loading and saving configuration at ~/.config/clipdeck/config.toml

mod types;

pub use types::{
    ClipboardBackend, ClipboardConfig, Config, MAX_HISTORY_LIMIT, MIN_HISTORY_LIMIT,
    clamp_history_limit,
};

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ClipdeckError;

/// Result of loading configuration
pub struct ConfigResult {
    pub config: Config,
    pub warning: Option<String>,
}

/// Loads configuration from ~/.config/clipdeck/config.toml
/// Returns default configuration if file doesn't exist or on parse errors
pub fn load_config() -> ConfigResult {
    load_config_from(&config_path())
}

pub fn load_config_from(config_path: &Path) -> ConfigResult {
    log::debug!("Loading config from {:?}", config_path);

    if !config_path.exists() {
        log::debug!("Config file does not exist, using defaults");
        return ConfigResult {
            config: Config::default(),
            warning: None,
        };
    }

    let contents = match fs::read_to_string(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            log::error!("Failed to read config file {:?}: {}", config_path, e);
            return ConfigResult {
                config: Config::default(),
                warning: Some(format!("Failed to read config: {}", e)),
            };
        }
    };

    match toml::from_str::<Config>(&contents) {
        Ok(config) => {
            log::debug!("Config parsed successfully: {:?}", config);
            ConfigResult {
                config,
                warning: None,
            }
        }
        Err(e) => {
            log::error!("Failed to parse config file {:?}: {}", config_path, e);
            ConfigResult {
                config: Config::default(),
                warning: Some(format!("Invalid config: {}", e)),
            }
        }
    }
}

/// Writes the config file, creating its directory when missing.
pub fn save_config_to(config_path: &Path, config: &Config) -> Result<(), ClipdeckError> {
    if let Some(parent) = config_path.parent() {
        fs::create_dir_all(parent)?;
    }
    let contents = toml::to_string_pretty(config)?;
    fs::write(config_path, contents)?;
    log::debug!("Config saved to {:?}", config_path);
    Ok(())
}

/// Returns the path to the configuration file
///
/// Always uses ~/.config/clipdeck/config.toml on all platforms for consistency.
pub fn config_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join("clipdeck")
        .join("config.toml")
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
