//! # AppError
//!
//! Centralized error handling for the Folio ecosystem.
//! Maps domain-specific failures to actionable error types.

use thiserror::Error;

/// The primary error type for all folio-core operations.
#[derive(Error, Debug)]
pub enum AppError {
    /// Resource not found (e.g., post id, asset file)
    #[error("{0} not found: {1}")]
    NotFound(String, String),

    /// Validation failure (e.g., empty title, skill level out of range)
    #[error("validation error: {0}")]
    ValidationError(String),

    /// Security/Auth failure (e.g., dashboard access without a session)
    #[error("unauthorized: {0}")]
    Unauthorized(String),

    /// Infrastructure failure (e.g., store unavailable, I/O error)
    #[error("internal service error: {0}")]
    Internal(String),

    /// Resource already exists (e.g., duplicate skill name on a non-upsert path)
    #[error("conflict: {0}")]
    Conflict(String),
}

/// A specialized Result type for Folio logic.
pub type Result<T> = std::result::Result<T, AppError>;
