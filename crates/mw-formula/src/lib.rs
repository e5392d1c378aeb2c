//! mw-formula: chemical formula parsing for molweight.
//!
//! Provides:
//! - recursive-descent parsing of formula strings (nested parentheses,
//!   implicit/explicit counts)
//! - hydrate notation splitting ("CuSO4.5H2O", "CaCl2·6H2O")
//! - canonical element → count compositions
//!
//! The parser is a set of pure functions over strings: no I/O, no shared
//! state, every invocation independent. Element symbols are taken at face
//! value here; resolving them against a periodic table is the job of the
//! weight provider downstream.
//!
//! # Example
//!
//! ```
//! use mw_formula::Composition;
//!
//! let composition = Composition::parse("CuSO4.5H2O").unwrap();
//! assert_eq!(composition.count("Cu"), 1);
//! assert_eq!(composition.count("O"), 9);
//! assert_eq!(composition.count("H"), 10);
//! ```

pub mod composition;
pub mod error;
pub mod hydrate;
pub mod scanner;

// Re-exports for ergonomics
pub use composition::Composition;
pub use error::{FormulaError, FormulaResult};
pub use hydrate::{HydratePart, HydrateSplit, split_hydrate};
pub use scanner::{ElementCount, parse_group};
