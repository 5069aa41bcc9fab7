//! Application-wide error types.

use thiserror::Error;

/// Result type alias using `AppError`.
pub type AppResult<T> = Result<T, AppError>;

/// Errors surfaced to callers of the prorator.
///
/// Domain errors convert into these. The `String` is the domain error's
/// message.
#[derive(Debug, Error)]
pub enum AppError {
    /// A budget record required by the query is missing.
    #[error("Not found: {0}")]
    NotFound(String),

    /// The query or a stored record is unusable as given.
    #[error("Validation error: {0}")]
    Validation(String),

    /// The budget source failed.
    #[error("External service error: {0}")]
    ExternalService(String),

    /// Process setup failed, e.g. tracing initialization.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// HTTP status a wrapping API should answer with.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::NotFound(_) => 404,
            Self::Validation(_) => 400,
            Self::ExternalService(_) | Self::Internal(_) => 500,
        }
    }

    /// Stable machine-readable code.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "NOT_FOUND",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::ExternalService(_) => "EXTERNAL_SERVICE_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }
}
