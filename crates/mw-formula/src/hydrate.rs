//! Hydrate notation splitting.
//!
//! A hydrate formula attaches a water multiple to a main formula with a
//! single separator character, e.g. `CuSO4.5H2O` or `CaCl2·6H2O`. Splitting
//! happens before any recursive-descent parsing; each side is handed to the
//! scanner on its own.

use crate::error::{FormulaError, FormulaResult};

/// Separator characters accepted between a formula and its hydrate suffix.
/// `.` is examined first; each is checked independently for appearing
/// exactly once.
const SEPARATORS: [char; 2] = ['.', '·'];

/// The water part of a hydrate formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HydratePart<'a> {
    /// Water multiple in front of the literal group (1 when absent).
    pub multiplier: u32,
    /// The literal water group (`H2O`), re-parsed by the caller.
    pub group: &'a str,
}

/// A formula split at its hydrate separator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HydrateSplit<'a> {
    /// Main formula text, trimmed, hydrate-free.
    pub main: &'a str,
    /// The hydrate suffix, when the formula has one.
    pub hydrate: Option<HydratePart<'a>>,
}

/// Split a raw formula into its main part and optional hydrate suffix.
///
/// The input must be non-empty. When a separator is present it must occur
/// exactly once, and everything after it must match `nH2O` / `H2O` exactly.
/// Both sides are trimmed of surrounding whitespace.
pub fn split_hydrate(formula: &str) -> FormulaResult<HydrateSplit<'_>> {
    if formula.is_empty() {
        return Err(FormulaError::EmptyFormula);
    }

    for separator in SEPARATORS {
        let Some((main, suffix)) = formula.split_once(separator) else {
            continue;
        };
        if suffix.contains(separator) {
            return Err(FormulaError::MultipleSeparators { separator });
        }
        let hydrate = parse_hydrate_suffix(suffix.trim(), separator)?;
        return Ok(HydrateSplit {
            main: main.trim(),
            hydrate: Some(hydrate),
        });
    }

    Ok(HydrateSplit {
        main: formula.trim(),
        hydrate: None,
    })
}

/// Match the trimmed hydrate suffix against `[digits]H2O`, nothing else.
fn parse_hydrate_suffix(suffix: &str, separator: char) -> FormulaResult<HydratePart<'_>> {
    let digits_end = suffix
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(suffix.len());
    let (digits, group) = suffix.split_at(digits_end);

    if group != "H2O" {
        return Err(FormulaError::InvalidHydrateFormat { separator });
    }

    let multiplier = if digits.is_empty() {
        1
    } else {
        digits
            .parse::<u32>()
            .map_err(|_| FormulaError::CountTooLarge {
                text: digits.to_string(),
            })?
    };

    Ok(HydratePart { multiplier, group })
}
