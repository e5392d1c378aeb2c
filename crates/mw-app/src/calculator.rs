//! Molecular weight computation.

use mw_elements::{AtomicWeightProvider, ElementError};
use mw_formula::Composition;

use crate::error::AppResult;

/// Compute the molecular weight [amu] of a chemical formula.
///
/// Splits hydrate notation, parses both sides recursively, folds repeated
/// symbols into one canonical composition, then sums `weight * count` over
/// every element. No partial results: the formula fully parses and fully
/// resolves, or the whole computation fails with one error.
pub fn compute_weight(formula: &str, provider: &dyn AtomicWeightProvider) -> AppResult<f64> {
    let composition = Composition::parse(formula)?;
    weigh_composition(&composition, provider)
}

/// Sum atomic weights over an already-parsed composition.
pub fn weigh_composition(
    composition: &Composition,
    provider: &dyn AtomicWeightProvider,
) -> AppResult<f64> {
    let mut total = 0.0;
    for (symbol, count) in composition.iter() {
        let weight = provider.atomic_weight(symbol)?;
        // A weight of exactly zero is treated as unresolved.
        if weight == 0.0 {
            return Err(ElementError::UnknownElement {
                symbol: symbol.to_string(),
            }
            .into());
        }
        total += weight * f64::from(count);
    }
    Ok(total)
}
