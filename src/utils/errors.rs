//! Error handling for podlocale
//!
//! This module defines the main error types used throughout the crate
//! and provides a unified error handling strategy.

use thiserror::Error;

/// Main error type for podlocale operations
#[derive(Error, Debug)]
pub enum LocaleError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Language resource not found: {resource}")]
    ResourceNotFound { resource: String },

    #[error("Language resource returned status {status}: {resource}")]
    ResourceStatus { resource: String, status: u16 },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("URL parsing error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type alias for podlocale operations
pub type Result<T> = std::result::Result<T, LocaleError>;

impl LocaleError {
    /// Get error severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            LocaleError::Config(_) => ErrorSeverity::Critical,
            LocaleError::UrlParse(_) => ErrorSeverity::Critical,
            LocaleError::InvalidInput(_) => ErrorSeverity::Info,
            LocaleError::ResourceNotFound { .. } => ErrorSeverity::Warning,
            _ => ErrorSeverity::Error,
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Info,
    Warning,
    Error,
    Critical,
}

impl std::fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorSeverity::Info => write!(f, "INFO"),
            ErrorSeverity::Warning => write!(f, "WARN"),
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}
