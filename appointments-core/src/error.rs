//! Error types for the appointments ecosystem.

use thiserror::Error;

/// Errors that can occur in appointment book operations.
#[derive(Error, Debug)]
pub enum AppointmentError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Invalid {field}: {reason}")]
    InvalidField { field: &'static str, reason: String },

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for appointment book operations.
pub type AppointmentResult<T> = Result<T, AppointmentError>;
