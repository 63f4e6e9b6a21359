// ============================================================================
// Operand
// Caller-supplied input to value setters and arithmetic operations
// ============================================================================

use super::errors::{CalcResult, CalculatorError};
use rust_decimal::Decimal;
use std::fmt;

/// A value handed to the accumulator by a caller.
///
/// Integers and floats are numeric. Anything else arrives as `NonNumeric`
/// and is rejected by every operation that needs a number; strings are
/// never parsed.
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    Int(i64),
    Float(f64),
    /// Description of the rejected input
    NonNumeric(String),
}

impl Operand {
    /// Numeric view of the operand as a float.
    ///
    /// # Errors
    /// Returns `NotNumeric` for non-numeric input.
    pub fn to_f64(&self) -> CalcResult<f64> {
        match self {
            Operand::Int(i) => Ok(*i as f64),
            Operand::Float(x) => Ok(*x),
            Operand::NonNumeric(found) => Err(CalculatorError::NotNumeric {
                found: found.clone(),
            }),
        }
    }

    /// Finite numeric view of the operand.
    ///
    /// # Errors
    /// Returns `NotNumeric` for non-numeric input and `NonFinite` for NaN
    /// or infinite floats.
    pub fn to_finite_f64(&self) -> CalcResult<f64> {
        let x = self.to_f64()?;
        if x.is_finite() {
            Ok(x)
        } else {
            Err(CalculatorError::NonFinite { value: x })
        }
    }

    /// True when the operand is numeric and equal to zero.
    pub fn is_zero(&self) -> bool {
        match self {
            Operand::Int(i) => *i == 0,
            Operand::Float(x) => *x == 0.0,
            Operand::NonNumeric(_) => false,
        }
    }

    /// Parity test `n % 2 == 1` with the remainder taking the sign of the
    /// divisor, so `-3` is odd and `1.5` is not.
    pub fn is_odd(&self) -> bool {
        match self {
            Operand::Int(i) => i.rem_euclid(2) == 1,
            Operand::Float(x) => x.rem_euclid(2.0) == 1.0,
            Operand::NonNumeric(_) => false,
        }
    }

    /// Short name of the operand's type, used in error messages.
    pub fn type_name(&self) -> &str {
        match self {
            Operand::Int(_) => "int",
            Operand::Float(_) => "float",
            Operand::NonNumeric(found) => found,
        }
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Int(i) => write!(f, "{}", i),
            Operand::Float(x) => write!(f, "{}", x),
            Operand::NonNumeric(found) => write!(f, "<{}>", found),
        }
    }
}

// ============================================================================
// Conversions
// ============================================================================

macro_rules! impl_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Operand {
                #[inline]
                fn from(value: $t) -> Self {
                    Operand::Int(value as i64)
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<f64> for Operand {
    #[inline]
    fn from(value: f64) -> Self {
        Operand::Float(value)
    }
}

impl From<f32> for Operand {
    #[inline]
    fn from(value: f32) -> Self {
        Operand::Float(value as f64)
    }
}

impl From<&str> for Operand {
    fn from(value: &str) -> Self {
        Operand::NonNumeric(format!("str {:?}", value))
    }
}

impl From<String> for Operand {
    fn from(value: String) -> Self {
        Operand::from(value.as_str())
    }
}

impl From<Decimal> for Operand {
    /// Converts to the nearest f64 by re-parsing the decimal's exact text,
    /// which is correctly rounded.
    fn from(value: Decimal) -> Self {
        match value.to_string().parse::<f64>() {
            Ok(x) => Operand::Float(x),
            Err(_) => Operand::NonNumeric(format!("decimal {}", value)),
        }
    }
}
