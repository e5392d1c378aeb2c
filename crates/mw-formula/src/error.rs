//! Formula parsing errors.

use thiserror::Error;

/// Result type for formula parsing operations.
pub type FormulaResult<T> = Result<T, FormulaError>;

/// Errors that can occur while parsing a chemical formula.
///
/// Every variant describes malformed client input; none of them indicate an
/// internal failure.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormulaError {
    /// Formula missing or empty.
    #[error("Invalid formula: formula must be a non-empty string")]
    EmptyFormula,

    /// More than one hydrate separator of the same kind.
    #[error("Invalid hydrate format: only one '{separator}' is allowed in the formula")]
    MultipleSeparators { separator: char },

    /// Text after the separator is not of the form `nH2O` / `H2O`.
    #[error("Invalid hydrate format after '{separator}': must be in the form 'nH2O' or 'H2O'")]
    InvalidHydrateFormat { separator: char },

    /// Unmatched `(` in the formula.
    #[error("Unmatched parentheses in formula")]
    UnbalancedParentheses,

    /// A character outside the accepted grammar.
    #[error(
        "Unexpected character '{found}' in formula: only letters, digits, parentheses, \
         and '.' or '·' for hydrates are allowed"
    )]
    InvalidCharacter { found: char },

    /// A count or multiplier digit run exceeds the supported range.
    #[error("Element count too large in formula: {text}")]
    CountTooLarge { text: String },
}
