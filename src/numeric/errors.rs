// ============================================================================
// Calculator Errors
// Error types for accumulator operations
// ============================================================================

use std::fmt;

/// Broad classification of a [`CalculatorError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Input has the wrong type (non-numeric value, non-integer precision)
    Type,
    /// Input is numeric but outside the accepted range
    Range,
    /// Division by zero, including zero raised to a negative power
    DivisionByZero,
    /// Root degree is zero, or even against a negative value
    InvalidRoot,
}

/// Errors that can occur while mutating an accumulator.
///
/// Every variant is raised before any state is touched, so a failed call
/// always leaves the accumulator exactly as it was.
#[derive(Debug, Clone, PartialEq)]
pub enum CalculatorError {
    /// Value or operand was not an integer or float
    NotNumeric { found: String },
    /// Precision was not given as an integer
    PrecisionNotInteger { found: String },
    /// Precision outside the inclusive range [1, 15]
    PrecisionOutOfRange { precision: i64 },
    /// Operand or computed result is NaN or infinite
    NonFinite { value: f64 },
    /// Attempted division by zero
    DivisionByZero,
    /// Attempted to take the 0th root
    ZeroRoot,
    /// Attempted an even (or non-odd) root of a negative value
    EvenRootOfNegative { value: f64, degree: f64 },
}

impl CalculatorError {
    /// Classify the error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            CalculatorError::NotNumeric { .. } | CalculatorError::PrecisionNotInteger { .. } => {
                ErrorKind::Type
            },
            CalculatorError::PrecisionOutOfRange { .. } | CalculatorError::NonFinite { .. } => {
                ErrorKind::Range
            },
            CalculatorError::DivisionByZero => ErrorKind::DivisionByZero,
            CalculatorError::ZeroRoot | CalculatorError::EvenRootOfNegative { .. } => {
                ErrorKind::InvalidRoot
            },
        }
    }
}

impl fmt::Display for CalculatorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CalculatorError::NotNumeric { found } => {
                write!(f, "value not numeric: expected int or float, got {}", found)
            },
            CalculatorError::PrecisionNotInteger { found } => {
                write!(f, "precision not an integer: got {}", found)
            },
            CalculatorError::PrecisionOutOfRange { precision } => write!(
                f,
                "precision out of range: {} is not between 1 and 15",
                precision
            ),
            CalculatorError::NonFinite { value } => {
                write!(f, "non-finite value: {} cannot be stored", value)
            },
            CalculatorError::DivisionByZero => write!(f, "division by zero"),
            CalculatorError::ZeroRoot => write!(f, "0th root invalid"),
            CalculatorError::EvenRootOfNegative { value, degree } => write!(
                f,
                "even root of negative value invalid: root {} of {}",
                degree, value
            ),
        }
    }
}

impl std::error::Error for CalculatorError {}

/// Result type alias for accumulator operations
pub type CalcResult<T> = Result<T, CalculatorError>;
