//! Error types for the mw-app service layer.

use mw_elements::ElementError;
use mw_formula::FormulaError;

/// Application error type that wraps errors from the backend crates and
/// provides the single outward-facing error for both frontends.
///
/// Each variant keeps its structured source; the displayed text describes
/// the root cause without re-wrapping lower-level messages.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    Formula(#[from] FormulaError),

    #[error("{0}")]
    Element(#[from] ElementError),

    #[error("An unexpected error occurred: {message}")]
    Internal { message: String },
}

/// Result type for mw-app operations.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Whether this error was caused by the client's input (HTTP 400), as
    /// opposed to an internal failure (HTTP 500).
    ///
    /// Every parse and lookup failure is client-shaped, including provider
    /// backend errors; only unclassified internal failures are not.
    pub fn is_client_error(&self) -> bool {
        match self {
            AppError::Formula(_) | AppError::Element(_) => true,
            AppError::Internal { .. } => false,
        }
    }
}
