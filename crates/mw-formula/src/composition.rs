//! Canonical element → count compositions.

use std::collections::BTreeMap;

use crate::error::{FormulaError, FormulaResult};
use crate::hydrate::split_hydrate;
use crate::scanner::{ElementCount, parse_group, scale_count};

/// Canonical mapping from element symbol to total atom count.
///
/// A pure multiset: repeated symbols anywhere in the formula, including
/// across hydrate sides, fold into a single summed entry. Insertion order is
/// irrelevant; iteration is in symbol order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Composition {
    counts: BTreeMap<String, u32>,
}

impl Composition {
    /// Parse a full formula, hydrate notation included, into its
    /// composition.
    ///
    /// Runs the hydrate split, scans each side recursively, applies the
    /// hydrate multiplier, and folds repeated symbols into summed entries.
    pub fn parse(formula: &str) -> FormulaResult<Self> {
        let split = split_hydrate(formula)?;
        let mut composition = Composition::default();
        composition.fold_pairs(parse_group(split.main)?, 1)?;
        if let Some(hydrate) = split.hydrate {
            composition.fold_pairs(parse_group(hydrate.group)?, hydrate.multiplier)?;
        }
        Ok(composition)
    }

    /// Add `count` atoms of `symbol`, summing with any existing entry.
    pub fn add(&mut self, symbol: impl Into<String>, count: u32) -> FormulaResult<()> {
        let symbol = symbol.into();
        let current = self.counts.get(&symbol).copied().unwrap_or(0);
        let total = current
            .checked_add(count)
            .ok_or_else(|| FormulaError::CountTooLarge {
                text: format!("{current}+{count}"),
            })?;
        self.counts.insert(symbol, total);
        Ok(())
    }

    /// Total count for a symbol, 0 when absent.
    pub fn count(&self, symbol: &str) -> u32 {
        self.counts.get(symbol).copied().unwrap_or(0)
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.counts.contains_key(symbol)
    }

    /// Iterate over (symbol, count) entries in symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> + '_ {
        self.counts.iter().map(|(symbol, &count)| (symbol.as_str(), count))
    }

    /// Number of distinct element symbols.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    fn fold_pairs(&mut self, pairs: Vec<ElementCount>, multiplier: u32) -> FormulaResult<()> {
        for (symbol, count) in pairs {
            self.add(symbol, scale_count(count, multiplier)?)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flat_formula_matches_token_scan() {
        let composition = Composition::parse("H2O").unwrap();
        assert_eq!(composition.count("H"), 2);
        assert_eq!(composition.count("O"), 1);
        assert_eq!(composition.len(), 2);

        let composition = Composition::parse("NaCl").unwrap();
        assert_eq!(composition.count("Na"), 1);
        assert_eq!(composition.count("Cl"), 1);
    }

    #[test]
    fn repeated_symbols_sum_never_overwrite() {
        let composition = Composition::parse("CH3COOH").unwrap();
        assert_eq!(composition.count("C"), 2);
        assert_eq!(composition.count("H"), 4);
        assert_eq!(composition.count("O"), 2);
    }

    #[test]
    fn hydrate_water_folds_into_main_side() {
        let composition = Composition::parse("CuSO4.5H2O").unwrap();
        assert_eq!(composition.count("Cu"), 1);
        assert_eq!(composition.count("S"), 1);
        assert_eq!(composition.count("O"), 9);
        assert_eq!(composition.count("H"), 10);
    }

    #[test]
    fn absent_symbol_counts_zero() {
        let composition = Composition::parse("H2O").unwrap();
        assert_eq!(composition.count("Na"), 0);
        assert!(!composition.contains("Na"));
    }

    #[test]
    fn zero_count_entry_is_kept() {
        let composition = Composition::parse("H0O").unwrap();
        assert!(composition.contains("H"));
        assert_eq!(composition.count("H"), 0);
        assert_eq!(composition.count("O"), 1);
    }

    #[test]
    fn empty_formula_is_rejected() {
        assert_eq!(Composition::parse(""), Err(FormulaError::EmptyFormula));
    }

    #[test]
    fn whitespace_only_input_is_an_empty_composition() {
        // Non-emptiness is checked on the raw string; the sides are trimmed.
        let composition = Composition::parse(" ").unwrap();
        assert!(composition.is_empty());
    }

    #[test]
    fn fold_overflow_is_rejected() {
        let err = Composition::parse("H4000000000H4000000000").unwrap_err();
        assert!(matches!(err, FormulaError::CountTooLarge { .. }));
    }

    #[test]
    fn iteration_is_in_symbol_order() {
        let composition = Composition::parse("ZnCuAg").unwrap();
        let symbols: Vec<&str> = composition.iter().map(|(s, _)| s).collect();
        assert_eq!(symbols, vec!["Ag", "Cu", "Zn"]);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    const SYMBOLS: [&str; 8] = ["H", "C", "N", "O", "Na", "Cl", "Fe", "Mg"];

    fn tokens() -> impl Strategy<Value = Vec<(usize, u32)>> {
        prop::collection::vec((0usize..SYMBOLS.len(), 1u32..500), 1..12)
    }

    proptest! {
        #[test]
        fn parse_is_idempotent(tokens in tokens()) {
            let formula: String = tokens
                .iter()
                .map(|&(idx, count)| format!("{}{}", SYMBOLS[idx], count))
                .collect();

            let first = Composition::parse(&formula).unwrap();
            let second = Composition::parse(&formula).unwrap();
            prop_assert_eq!(first, second);
        }

        #[test]
        fn folded_counts_equal_per_symbol_sums(tokens in tokens()) {
            let formula: String = tokens
                .iter()
                .map(|&(idx, count)| format!("{}{}", SYMBOLS[idx], count))
                .collect();

            let composition = Composition::parse(&formula).unwrap();
            for (position, symbol) in SYMBOLS.iter().enumerate() {
                let expected: u32 = tokens
                    .iter()
                    .filter(|&&(idx, _)| idx == position)
                    .map(|&(_, count)| count)
                    .sum();
                prop_assert_eq!(composition.count(symbol), expected);
            }
        }

        #[test]
        fn group_multiplier_scales_every_count(tokens in tokens(), multiplier in 1u32..20) {
            let inner: String = tokens
                .iter()
                .map(|&(idx, count)| format!("{}{}", SYMBOLS[idx], count))
                .collect();
            let grouped = format!("({inner}){multiplier}");

            let flat = Composition::parse(&inner).unwrap();
            let scaled = Composition::parse(&grouped).unwrap();
            for (symbol, count) in flat.iter() {
                prop_assert_eq!(scaled.count(symbol), count * multiplier);
            }
        }
    }
}
