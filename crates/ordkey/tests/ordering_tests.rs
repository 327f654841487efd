//! Tests for the two ordering strategies.
//!
//! These tests verify the comparison strategies over the generated
//! demonstration set:
//! - Strict-weak-ordering laws for the lexicographic strategy
//! - Documented law violations for the flawed single-pass strategy
//!
//! ## Test Organization
//!
//! 1. **Lexicographic Laws** - irreflexivity, asymmetry, transitivity
//! 2. **Flawed Violations** - asymmetry and transitivity witnesses
//! 3. **Strategy Metadata** - names and contract labels

use ordkey::prelude::*;

/// The 30-key demonstration input, in insertion order.
fn demo_keys() -> Vec<OrderedKey<f64>> {
    KeySpace::default().sequence(30)
}

// ============================================================================
// Lexicographic Law Tests
// ============================================================================

/// Test irreflexivity of the lexicographic strategy.
///
/// Verifies that no generated key precedes itself.
#[test]
fn test_lexicographic_irreflexive() {
    let less = Lexicographic.less_fn::<f64>();

    for key in &demo_keys() {
        assert!(!less(key, key), "{key} must not precede itself");
    }
}

/// Test asymmetry of the lexicographic strategy.
///
/// Verifies that `x < y` implies not `y < x` over all generated pairs.
#[test]
fn test_lexicographic_asymmetric() {
    let less = Lexicographic.less_fn::<f64>();
    let keys = demo_keys();

    for x in &keys {
        for y in &keys {
            assert!(
                !(less(x, y) && less(y, x)),
                "asymmetry violated for {x} and {y}"
            );
        }
    }
}

/// Test transitivity of the lexicographic strategy.
///
/// Verifies `x < y` and `y < z` imply `x < z` over all generated triples.
#[test]
fn test_lexicographic_transitive() {
    let less = Lexicographic.less_fn::<f64>();
    let keys = demo_keys();

    for x in &keys {
        for y in &keys {
            for z in &keys {
                if less(x, y) && less(y, z) {
                    assert!(less(x, z), "transitivity violated for {x}, {y}, {z}");
                }
            }
        }
    }
}

/// Test equivalence consistency of the lexicographic strategy.
///
/// Verifies that "neither less" coincides with equal components.
#[test]
fn test_lexicographic_equivalence_is_component_equality() {
    let less = Lexicographic.less_fn::<f64>();
    let keys = demo_keys();

    for x in &keys {
        for y in &keys {
            let neither = !less(x, y) && !less(y, x);
            assert_eq!(
                neither,
                x.components() == y.components(),
                "equivalence mismatch for {x} and {y}"
            );
        }
    }
}

// ============================================================================
// Flawed Violation Tests
// ============================================================================

/// Test the golden asymmetry witness for the flawed strategy.
///
/// Verifies that the generated keys for indices 2 and 14 report each
/// other as less: `(2, 2, 2) < (1, 4, 14)` and `(1, 4, 14) < (2, 2, 2)`.
#[test]
fn test_flawed_asymmetry_witness() {
    let less = FlawedSinglePass.less_fn::<f64>();
    let keys = demo_keys();

    let x = &keys[1]; // index 2: (2, 2, 2)
    let y = &keys[13]; // index 14: (1, 4, 14)
    assert_eq!(x.components(), (2, 2, 2));
    assert_eq!(y.components(), (1, 4, 14));

    assert!(less(x, y), "witness must report x < y");
    assert!(less(y, x), "witness must report y < x");
}

/// Test that asymmetry violations exist in the generated set.
///
/// Verifies at least one pair reports `x < y` and `y < x` simultaneously.
#[test]
fn test_flawed_violates_asymmetry_somewhere() {
    let less = FlawedSinglePass.less_fn::<f64>();
    let keys = demo_keys();

    let mut witnesses = 0usize;
    for x in &keys {
        for y in &keys {
            if less(x, y) && less(y, x) {
                witnesses += 1;
            }
        }
    }

    assert!(
        witnesses > 0,
        "the generated set must contain an asymmetry violation"
    );
}

/// Test the golden transitivity witness for the flawed strategy.
///
/// Verifies `(4, 4, 4) < (5, 0, 5)` and `(5, 0, 5) < (1, 1, 1)` while
/// `(4, 4, 4)` does not compare less than `(1, 1, 1)`.
#[test]
fn test_flawed_transitivity_witness() {
    let less = FlawedSinglePass.less_fn::<f64>();
    let keys = demo_keys();

    let x = &keys[3]; // index 4: (4, 4, 4)
    let y = &keys[4]; // index 5: (5, 0, 5)
    let z = &keys[0]; // index 1: (1, 1, 1)
    assert_eq!(x.components(), (4, 4, 4));
    assert_eq!(y.components(), (5, 0, 5));
    assert_eq!(z.components(), (1, 1, 1));

    assert!(less(x, y), "witness must report x < y");
    assert!(less(y, z), "witness must report y < z");
    assert!(!less(x, z), "witness must not report x < z");
}

/// Test that the flawed strategy stays irreflexive.
///
/// The violation is in asymmetry and transitivity; a key never reports
/// itself as less.
#[test]
fn test_flawed_still_irreflexive() {
    let less = FlawedSinglePass.less_fn::<f64>();

    for key in &demo_keys() {
        assert!(!less(key, key), "{key} must not precede itself");
    }
}

// ============================================================================
// Strategy Metadata Tests
// ============================================================================

/// Test strategy names.
///
/// Verifies the stable diagnostic names and `Display` output.
#[test]
fn test_strategy_names() {
    assert_eq!(Lexicographic.name(), "lexicographic");
    assert_eq!(FlawedSinglePass.name(), "flawed-single-pass");
    assert_eq!(format!("{}", Lexicographic), "lexicographic");
    assert_eq!(format!("{}", FlawedSinglePass), "flawed-single-pass");
}

/// Test the contract labels.
///
/// Verifies that only the lexicographic strategy claims the
/// strict-weak-ordering contract.
#[test]
fn test_strategy_contract_labels() {
    assert!(Lexicographic.is_strict_weak());
    assert!(!FlawedSinglePass.is_strict_weak());
}
