//! Unified error handling for the application surface.
//!
//! Wraps domain errors and adds the failures that only exist outside the
//! domain: bad configuration and unwritable output.

use domain::DomainError;
use thiserror::Error;

/// Application error types.
#[derive(Error, Debug)]
pub enum AppError {
    /// A domain constraint rejected the input
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Configuration that cannot be used
    #[error("Configuration error: {0}")]
    Config(String),

    /// Writing command output failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// Get error code for reporting
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Domain(DomainError::NotPossible { .. }) => "NOT_POSSIBLE",
            AppError::Domain(DomainError::UnknownGender(_)) => "UNKNOWN_GENDER",
            AppError::Config(_) => "CONFIG_ERROR",
            AppError::Io(_) => "IO_ERROR",
        }
    }
}

/// Convenience constructors
impl AppError {
    pub fn config(msg: impl Into<String>) -> Self {
        AppError::Config(msg.into())
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;
