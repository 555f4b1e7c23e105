//! Core error types for energyweek-core.
//!
//! The analysis path itself is total and has no error conditions; errors
//! only arise at the input boundary (parsing user-entered names) and in
//! the configuration layer.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for energyweek-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Input parsing errors
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors parsing user input into the week vocabulary.
#[derive(Error, Debug)]
pub enum ParseError {
    /// Unrecognized weekday name
    #[error("Unknown weekday: '{0}'. Use mon/tue/wed/thu/fri")]
    UnknownWeekday(String),

    /// Unrecognized time block name
    #[error("Unknown time block: '{0}'. Use morning/afternoon/evening")]
    UnknownTimeBlock(String),

    /// Unrecognized energy level
    #[error("Unknown energy level: '{0}'. Use 1-4 or rest/low/good/high")]
    UnknownEnergyLevel(String),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// No user configuration directory on this platform
    #[error("Could not determine user config directory")]
    NoConfigDir,

    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Unknown configuration key
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
