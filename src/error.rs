use std::path::PathBuf;

use thiserror::Error;

/// Custom error types for status-banner
#[derive(Debug, Error)]
pub enum BannerError {
    #[error("Failed to read config file {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Unknown style '{0}'")]
    UnknownStyle(String),

    #[error("Invalid color '{value}' in style '{style}'")]
    InvalidColor { style: String, value: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, BannerError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
