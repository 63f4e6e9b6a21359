// ============================================================================
// Float Rendering
// Shortest round-trip text for stored values
// ============================================================================

/// Render a float as its shortest round-trip text.
///
/// Integral values keep a trailing `.0` (`3.0`). Values with a decimal
/// exponent below -4 or at least 16 use exponent form with a signed,
/// two-digit-minimum exponent (`1e-05`, `1.5e+16`).
pub fn render_float(x: f64) -> String {
    if x.is_nan() {
        return "nan".to_string();
    }
    if x.is_infinite() {
        return if x > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    // `{:e}` yields the shortest round-trip digits, e.g. "-4.54e0", "1e16"
    let sci = format!("{:e}", x.abs());
    let (mantissa, exponent) = match sci.split_once('e') {
        Some(parts) => parts,
        None => return sci,
    };
    let exponent: i32 = exponent.parse().unwrap_or(0);
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();

    let sign = if x.is_sign_negative() { "-" } else { "" };

    if (-4..16).contains(&exponent) {
        format!("{}{}", sign, fixed_notation(&digits, exponent))
    } else {
        let exp_sign = if exponent < 0 { '-' } else { '+' };
        format!("{}{}e{}{:02}", sign, mantissa, exp_sign, exponent.abs())
    }
}

/// Place the decimal point into a digit string with the given exponent.
fn fixed_notation(digits: &str, exponent: i32) -> String {
    if exponent < 0 {
        let zeros = "0".repeat((-exponent - 1) as usize);
        return format!("0.{}{}", zeros, digits);
    }

    let int_len = exponent as usize + 1;
    if digits.len() <= int_len {
        let zeros = "0".repeat(int_len - digits.len());
        format!("{}{}.0", digits, zeros)
    } else {
        format!("{}.{}", &digits[..int_len], &digits[int_len..])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integral_values_keep_fraction() {
        assert_eq!(render_float(0.0), "0.0");
        assert_eq!(render_float(3.0), "3.0");
        assert_eq!(render_float(-4.0), "-4.0");
        assert_eq!(render_float(1000.0), "1000.0");
    }

    #[test]
    fn test_fractional_values() {
        assert_eq!(render_float(1.5), "1.5");
        assert_eq!(render_float(-4.54), "-4.54");
        assert_eq!(render_float(0.0625), "0.0625");
        assert_eq!(render_float(0.0001), "0.0001");
        assert_eq!(render_float(-455.3), "-455.3");
        assert_eq!(render_float(0.1 + 0.2), "0.30000000000000004");
    }

    #[test]
    fn test_exponent_form() {
        assert_eq!(render_float(0.00001), "1e-05");
        assert_eq!(render_float(1.5e-7), "1.5e-07");
        assert_eq!(render_float(1e16), "1e+16");
        assert_eq!(render_float(-2.5e300), "-2.5e+300");
        assert_eq!(render_float(1e15), "1000000000000000.0");
    }

    #[test]
    fn test_negative_zero() {
        assert_eq!(render_float(-0.0), "-0.0");
    }
}
