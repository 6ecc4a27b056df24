//! Domain error types

use thiserror::Error;

/// Error when a score is outside the 1–10 scale
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid score: \"{input}\". Expected a whole number from 1 to 10")]
pub struct InvalidScore {
    pub input: String,
}

/// Rejection reasons for an incoming review submission.
///
/// The messages are shown verbatim to reviewers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReviewValidationError {
    /// Subject, period or score missing or malformed
    #[error("Data review tidak lengkap.")]
    IncompleteReview,

    /// At least one nomination is blank
    #[error("Seluruh nominasi wajib diisi.")]
    IncompleteNominations,

    /// An audio part is missing or empty
    #[error("Rekaman audio wajib diunggah.")]
    MissingAudio,
}

/// Error when configuration fails
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(String),

    #[error("Failed to parse config file: {0}")]
    ParseError(String),

    #[error("Failed to write config file: {0}")]
    WriteError(String),

    #[error("Invalid config value for '{key}': {message}")]
    ValidationError { key: String, message: String },

    #[error("Config file already exists at: {0}")]
    AlreadyExists(String),
}
