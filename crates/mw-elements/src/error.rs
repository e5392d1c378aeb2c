//! Atomic weight lookup errors.

use thiserror::Error;

/// Result type for element lookups.
pub type ElementResult<T> = Result<T, ElementError>;

/// Errors that can occur while resolving an element symbol to a weight.
///
/// "Unknown symbol" and "the lookup itself failed" are deliberately distinct
/// so callers can classify them differently.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ElementError {
    /// The symbol has no entry in the provider's data.
    #[error("Element '{symbol}' is not recognized or not part of the periodic table")]
    UnknownElement { symbol: String },

    /// The lookup failed for a reason other than "not found".
    #[error("Atomic weight lookup failed for element '{symbol}': {message}")]
    Backend { symbol: String, message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_names_the_symbol() {
        let err = ElementError::UnknownElement {
            symbol: "Xx".into(),
        };
        assert!(err.to_string().contains("'Xx'"));

        let err = ElementError::Backend {
            symbol: "Fe".into(),
            message: "connection refused".into(),
        };
        assert!(err.to_string().contains("connection refused"));
    }
}
