// ============================================================================
// Accumulator Property Tests
// ============================================================================

use memory_calculator::numeric::round_half_even;
use memory_calculator::prelude::*;
use proptest::prelude::*;

fn value() -> impl Strategy<Value = f64> {
    -1.0e6..1.0e6
}

fn precision() -> impl Strategy<Value = i64> {
    1i64..=15
}

fn nonzero_factor() -> impl Strategy<Value = f64> {
    prop_oneof![-100.0..-0.5, 0.5..100.0]
}

proptest! {
    #[test]
    fn prop_add_rounds_the_sum(start in value(), x in value(), digits in precision()) {
        let mut acc = Accumulator::new(start, digits).unwrap();
        let old = acc.value();
        let expected = round_half_even(old + x, Precision::new(digits).unwrap());

        let result = acc.add(x).unwrap();
        prop_assert_eq!(result, expected);
        prop_assert_eq!(acc.value(), result);
    }

    #[test]
    fn prop_subtract_is_add_of_negation(start in value(), x in value(), digits in precision()) {
        let mut a = Accumulator::new(start, digits).unwrap();
        let mut b = a.clone();
        prop_assert_eq!(a.subtract(x).unwrap(), b.add(-x).unwrap());
    }

    #[test]
    fn prop_multiply_then_divide_restores(start in value(), x in nonzero_factor()) {
        let mut acc = Accumulator::with_value(start).unwrap();
        let original = acc.value();

        acc.multiply(x).unwrap();
        let restored = acc.divide(x).unwrap();

        let tolerance = 1e-8 * original.abs().max(1.0);
        prop_assert!((restored - original).abs() <= tolerance,
            "restored {} from {} via {}", restored, original, x);
    }

    #[test]
    fn prop_divide_by_zero_never_mutates(start in value(), digits in precision()) {
        let mut acc = Accumulator::new(start, digits).unwrap();
        let before = acc.value();

        let err = acc.divide(0).unwrap_err();
        prop_assert_eq!(err.kind(), ErrorKind::DivisionByZero);
        let err = acc.divide(0.0).unwrap_err();
        prop_assert_eq!(err.kind(), ErrorKind::DivisionByZero);
        prop_assert_eq!(acc.value(), before);
    }

    #[test]
    fn prop_zeroth_root_is_invalid(start in value()) {
        let mut acc = Accumulator::with_value(start).unwrap();
        let before = acc.value();

        prop_assert_eq!(acc.root(0).unwrap_err().kind(), ErrorKind::InvalidRoot);
        prop_assert_eq!(acc.value(), before);
    }

    #[test]
    fn prop_even_root_of_negative_is_invalid(start in -1.0e6..-1.0e-3, half in -50i64..50) {
        let n = half * 2;
        prop_assume!(n != 0);
        let mut acc = Accumulator::with_value(start).unwrap();
        let before = acc.value();

        prop_assert_eq!(acc.root(n).unwrap_err().kind(), ErrorKind::InvalidRoot);
        prop_assert_eq!(acc.value(), before);
    }

    #[test]
    fn prop_odd_root_of_negative_is_real(start in -1.0e6..-1.0e-3, half in 0i64..10) {
        let n = half * 2 + 1;
        let mut acc = Accumulator::with_value(start).unwrap();

        let root = acc.root(n).unwrap();
        prop_assert!(root < 0.0);
        prop_assert!(root.is_finite());
    }

    #[test]
    fn prop_reset_always_zero(start in value(), digits in precision()) {
        let mut acc = Accumulator::new(start, digits).unwrap();
        prop_assert_eq!(acc.reset(), 0.0);
        prop_assert_eq!(acc.value(), 0.0);
    }

    #[test]
    fn prop_invalid_precision_leaves_state(
        start in value(),
        digits in precision(),
        bad in prop_oneof![-100i64..1, 16i64..100],
    ) {
        let mut acc = Accumulator::new(start, digits).unwrap();
        let before = (acc.value(), acc.precision());

        prop_assert_eq!(acc.set_precision(bad).unwrap_err().kind(), ErrorKind::Range);
        prop_assert_eq!(
            acc.set_precision(digits as f64).unwrap_err().kind(),
            ErrorKind::Type
        );
        prop_assert_eq!((acc.value(), acc.precision()), before);
    }
}

// ============================================================================
// Scenarios
// ============================================================================

#[test]
fn test_display_scenario() {
    let mut acc = Accumulator::default();
    assert_eq!(acc.value(), 0.0);
    assert_eq!(acc.add(3).unwrap(), 3.0);
    assert_eq!(acc.divide(2).unwrap(), 1.5);
    assert_eq!(acc.to_string(), "Accumulator with current memory: 1.5");
}

#[test]
fn test_multiplication_scenario() {
    let mut acc = Accumulator::default();
    assert_eq!(acc.add(4).unwrap(), 4.0);
    assert_eq!(acc.multiply(2).unwrap(), 8.0);
    assert_eq!(acc.multiply(-0.5).unwrap(), -4.0);
    assert_eq!(acc.multiply(0).unwrap(), 0.0);
}

#[test]
fn test_negative_root_scenarios() {
    let mut acc = Accumulator::with_value(-16).unwrap();
    assert_eq!(acc.root(-4).unwrap_err().kind(), ErrorKind::InvalidRoot);

    let mut acc = Accumulator::with_value(-8).unwrap();
    assert_eq!(acc.root(-3).unwrap(), -0.5);
}

#[test]
fn test_construction_with_bad_precision() {
    assert_eq!(
        Accumulator::new(0, 17).unwrap_err(),
        CalculatorError::PrecisionOutOfRange { precision: 17 }
    );
}
