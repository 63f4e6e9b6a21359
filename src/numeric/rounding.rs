// ============================================================================
// Rounding
// Round-half-to-even at a fixed number of decimal digits
// ============================================================================

use super::precision::Precision;

/// Round `x` to `precision` decimal digits, ties to even.
///
/// Rounding is done on the exact binary value of `x`: the value is rendered
/// with exactly `precision` fractional digits (std's fixed formatting is
/// correctly rounded, ties to even) and parsed back to the nearest f64. A
/// literal such as `2.675` is stored slightly below the midpoint and so
/// rounds to `2.67` at two digits.
///
/// Non-finite input is returned unchanged.
#[inline]
pub fn round_half_even(x: f64, precision: Precision) -> f64 {
    if !x.is_finite() {
        return x;
    }
    let digits = precision.digits() as usize;
    let text = format!("{:.*}", digits, x);
    // Fixed-notation output of a finite f64 always parses back
    text.parse::<f64>().unwrap_or(x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck::quickcheck;

    fn p(digits: i64) -> Precision {
        Precision::new(digits).unwrap()
    }

    #[test]
    fn test_absorbs_representation_noise() {
        assert_eq!(round_half_even(0.1 + 0.2, p(10)), 0.3);
        assert_eq!(round_half_even(-4.0 - 0.54, p(10)), -4.54);
        assert_eq!(round_half_even(1.1 * 3.0, p(10)), 3.3);
    }

    #[test]
    fn test_ties_to_even() {
        // Exact binary midpoints
        assert_eq!(round_half_even(0.125, p(2)), 0.12);
        assert_eq!(round_half_even(0.375, p(2)), 0.38);
        assert_eq!(round_half_even(2.5, p(1)), 2.5);
        assert_eq!(round_half_even(0.25, p(1)), 0.2);
        assert_eq!(round_half_even(0.75, p(1)), 0.8);
    }

    #[test]
    fn test_rounds_the_binary_value() {
        assert_eq!(round_half_even(2.675, p(2)), 2.67);
    }

    #[test]
    fn test_sign_and_zero() {
        assert_eq!(round_half_even(-1.23456, p(3)), -1.235);
        let tiny_negative = round_half_even(-1e-12, p(10));
        assert_eq!(tiny_negative, 0.0);
        assert!(tiny_negative.is_sign_negative());
    }

    #[test]
    fn test_large_values_unchanged() {
        assert_eq!(round_half_even(1e300, p(10)), 1e300);
        assert_eq!(round_half_even(-123456789012.0, p(15)), -123456789012.0);
    }

    #[test]
    fn test_non_finite_passthrough() {
        assert!(round_half_even(f64::NAN, p(10)).is_nan());
        assert_eq!(round_half_even(f64::INFINITY, p(10)), f64::INFINITY);
    }

    quickcheck! {
        fn prop_rounding_is_idempotent(x: f64, digits: u8) -> bool {
            if !x.is_finite() {
                return true;
            }
            let precision = p((digits % 15) as i64 + 1);
            let once = round_half_even(x, precision);
            round_half_even(once, precision) == once
        }

        fn prop_rounding_stays_close(x: f64, digits: u8) -> bool {
            if !x.is_finite() || x.abs() > 1e12 {
                return true;
            }
            let precision = p((digits % 15) as i64 + 1);
            let bound = 0.5 * 10f64.powi(-(precision.digits() as i32)) + 1e-3;
            (round_half_even(x, precision) - x).abs() <= bound
        }
    }
}
