// ============================================================================
// Precision
// Number of decimal digits kept on every write to the accumulator
// ============================================================================

use super::errors::{CalcResult, CalculatorError};
use super::operand::Operand;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Rounding precision in decimal digits, always within [1, 15].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "i64", into = "u8"))]
pub struct Precision(u8);

impl Precision {
    /// Smallest accepted precision
    pub const MIN: u8 = 1;

    /// Largest accepted precision (digits an f64 carries reliably)
    pub const MAX: u8 = 15;

    /// Precision used when none is given
    pub const DEFAULT: Self = Self(10);

    /// Create from an integer digit count.
    ///
    /// # Errors
    /// Returns `PrecisionOutOfRange` outside [1, 15].
    pub fn new(digits: i64) -> CalcResult<Self> {
        if digits < Self::MIN as i64 || digits > Self::MAX as i64 {
            return Err(CalculatorError::PrecisionOutOfRange { precision: digits });
        }
        Ok(Self(digits as u8))
    }

    /// Create from caller input. Only integers are accepted; `2.0` is
    /// rejected rather than truncated.
    ///
    /// # Errors
    /// Returns `PrecisionNotInteger` for floats and non-numeric input, and
    /// `PrecisionOutOfRange` outside [1, 15].
    pub fn from_operand(operand: &Operand) -> CalcResult<Self> {
        match operand {
            Operand::Int(digits) => Self::new(*digits),
            other => Err(CalculatorError::PrecisionNotInteger {
                found: other.type_name().to_string(),
            }),
        }
    }

    /// Digit count.
    #[inline]
    pub const fn digits(self) -> u8 {
        self.0
    }
}

impl Default for Precision {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<i64> for Precision {
    type Error = CalculatorError;

    fn try_from(digits: i64) -> Result<Self, Self::Error> {
        Self::new(digits)
    }
}

impl From<Precision> for u8 {
    fn from(precision: Precision) -> Self {
        precision.0
    }
}

impl fmt::Display for Precision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
