//! Integration tests for the weight calculator service.

use mw_app::{AppError, compute_weight};
use mw_elements::{AtomicWeightProvider, ElementError, ElementResult, PeriodicTable};
use mw_formula::FormulaError;

/// Fixed-weight provider for exercising the calculator without the real
/// periodic table.
struct StubProvider;

impl AtomicWeightProvider for StubProvider {
    fn atomic_weight(&self, symbol: &str) -> ElementResult<f64> {
        match symbol {
            "H" => Ok(1.008),
            "O" => Ok(15.999),
            // Deliberately zero to exercise the unresolved-weight policy.
            "Zz" => Ok(0.0),
            "Boom" => Err(ElementError::Backend {
                symbol: symbol.to_string(),
                message: "lookup exploded".to_string(),
            }),
            _ => Err(ElementError::UnknownElement {
                symbol: symbol.to_string(),
            }),
        }
    }
}

fn assert_approx(actual: f64, expected: f64, tol: f64) {
    assert!(
        (actual - expected).abs() < tol,
        "expected {expected} ± {tol}, got {actual}"
    );
}

#[test]
fn water_weight() {
    let weight = compute_weight("H2O", &StubProvider).unwrap();
    assert_approx(weight, 18.015, 1e-9);
}

#[test]
fn weight_scales_with_counts() {
    let h2 = compute_weight("H2", &StubProvider).unwrap();
    let h4 = compute_weight("H4", &StubProvider).unwrap();
    assert_approx(h4, 2.0 * h2, 1e-12);
}

#[test]
fn unknown_element_is_a_client_error() {
    let err = compute_weight("Xx2O", &StubProvider).unwrap_err();
    assert!(err.is_client_error());
    assert!(err.to_string().contains("'Xx'"));
}

#[test]
fn zero_weight_counts_as_unknown() {
    let err = compute_weight("Zz", &StubProvider).unwrap_err();
    match err {
        AppError::Element(ElementError::UnknownElement { symbol }) => {
            assert_eq!(symbol, "Zz");
        }
        other => panic!("expected UnknownElement, got {other:?}"),
    }
}

#[test]
fn backend_failure_is_distinct_from_unknown() {
    let err = compute_weight("Boom", &StubProvider).unwrap_err();
    match err {
        AppError::Element(ElementError::Backend { message, .. }) => {
            assert!(message.contains("exploded"));
        }
        other => panic!("expected Backend, got {other:?}"),
    }
}

#[test]
fn parse_errors_pass_through() {
    let err = compute_weight("Mg(OH2", &StubProvider).unwrap_err();
    match err {
        AppError::Formula(FormulaError::UnbalancedParentheses) => {}
        other => panic!("expected UnbalancedParentheses, got {other:?}"),
    }
}

#[test]
fn zero_count_contributes_nothing() {
    let bare = compute_weight("O", &StubProvider).unwrap();
    let with_zero = compute_weight("H0O", &StubProvider).unwrap();
    assert_approx(with_zero, bare, 1e-12);
}

#[test]
fn water_weight_against_the_real_table() {
    let table = PeriodicTable::new();
    let weight = compute_weight("H2O", &table).unwrap();
    assert_approx(weight, 18.015, 0.01);
}

#[test]
fn hydrate_weight_against_the_real_table() {
    // CuSO4·5H2O, a classic: ~249.68 amu
    let table = PeriodicTable::new();
    let weight = compute_weight("CuSO4.5H2O", &table).unwrap();
    assert_approx(weight, 249.68, 0.05);

    let middle_dot = compute_weight("CuSO4·5H2O", &table).unwrap();
    assert_approx(middle_dot, weight, 1e-12);
}

#[test]
fn group_weight_against_the_real_table() {
    // Mg(OH)2: 24.305 + 2*15.999 + 2*1.008
    let table = PeriodicTable::new();
    let weight = compute_weight("Mg(OH)2", &table).unwrap();
    assert_approx(weight, 58.319, 0.01);
}
