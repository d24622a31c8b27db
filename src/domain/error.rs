//! Domain error types

use thiserror::Error;

/// Error when settings persistence fails
#[derive(Debug, Clone, Error)]
pub enum SettingsError {
    #[error("Failed to read settings file: {0}")]
    ReadError(String),

    #[error("Failed to parse settings file: {0}")]
    ParseError(String),

    #[error("Failed to write settings file: {0}")]
    WriteError(String),
}
