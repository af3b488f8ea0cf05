//! Configuration loading
//!
//! Reads `~/.config/status-banner/config.toml`. A missing file is not an
//! error; an unreadable or invalid one falls back to defaults and reports a
//! warning the caller can surface in the banner itself.

pub mod types;

use std::path::{Path, PathBuf};

pub use types::{Config, StyleConfig, TextAlignment, TimingConfig};

use crate::error::{BannerError, Result};

/// Outcome of loading the config file
#[derive(Debug)]
pub struct ConfigResult {
    pub config: Config,
    pub warning: Option<String>,
}

pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| {
        home.join(".config")
            .join("status-banner")
            .join("config.toml")
    })
}

/// Parse the file at `path`.
pub fn read_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path).map_err(|source| BannerError::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;
    let config = toml::from_str(&content)?;
    Ok(config)
}

pub fn load_config_from(path: &Path) -> ConfigResult {
    if !path.exists() {
        return ConfigResult {
            config: Config::default(),
            warning: None,
        };
    }

    match read_config(path) {
        Ok(config) => ConfigResult {
            config,
            warning: None,
        },
        Err(e) => {
            log::warn!("Falling back to default config: {}", e);
            ConfigResult {
                config: Config::default(),
                warning: Some(e.to_string()),
            }
        }
    }
}

pub fn load_config() -> ConfigResult {
    match config_path() {
        Some(path) => load_config_from(&path),
        None => ConfigResult {
            config: Config::default(),
            warning: None,
        },
    }
}
