//! Error types for core module
//!
//! Covers settings persistence and the startup configuration that is applied before
//! the game session exists.

use thiserror::Error;

/// Errors that can occur in the core module
#[derive(Error, Debug)]
pub enum CoreError {
    /// Settings file I/O error
    #[error("Settings I/O error: {0}")]
    SettingsIo(#[from] std::io::Error),

    /// Settings serialization/deserialization error
    #[error("Settings serialization error: {0}")]
    SettingsSerialization(#[from] serde_json::Error),

    /// No platform configuration directory could be resolved
    #[error("No configuration directory available on this platform")]
    NoConfigDir,

    /// A settings value that cannot be used as-is
    #[error("Invalid setting `{field}`: {message}")]
    InvalidSetting { field: &'static str, message: String },
}

/// Result type alias for core operations
pub type CoreResult<T> = Result<T, CoreError>;
