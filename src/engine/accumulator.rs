// ============================================================================
// Accumulator
// Single-value memory calculator with validated, rounded state
// ============================================================================

use crate::interfaces::{AccumulatorEvent, EventHandler, NoOpEventHandler, Operation};
use crate::numeric::{
    render_float, round_half_even, CalcResult, CalculatorError, Operand, Precision,
};
use chrono::Utc;
use rust_decimal::Decimal;
use std::fmt;
use std::sync::Arc;

/// Stateful arithmetic accumulator.
///
/// Holds one finite value and a rounding precision. Every successful write
/// stores the result rounded half-to-even at `precision` digits; every
/// failed operation leaves both fields untouched.
///
/// # Example
/// ```
/// use memory_calculator::prelude::*;
///
/// let mut acc = Accumulator::default();
/// assert_eq!(acc.add(3).unwrap(), 3.0);
/// assert_eq!(acc.divide(2).unwrap(), 1.5);
/// assert_eq!(acc.to_string(), "Accumulator with current memory: 1.5");
/// ```
#[derive(Clone)]
pub struct Accumulator {
    /// Current result, always finite and already rounded
    value: f64,

    /// Digits kept on every write
    precision: Precision,

    /// Receives change and rejection events
    event_handler: Arc<dyn EventHandler>,
}

impl Accumulator {
    /// Create an accumulator.
    ///
    /// Precision is validated first, then the value is validated and rounded
    /// at that precision.
    ///
    /// # Errors
    /// Same as [`set_precision`](Self::set_precision) and
    /// [`set_value`](Self::set_value).
    pub fn new(value: impl Into<Operand>, precision: impl Into<Operand>) -> CalcResult<Self> {
        let precision = Precision::from_operand(&precision.into())?;
        let value = value.into().to_finite_f64()?;
        Ok(Self {
            value: round_half_even(value, precision),
            precision,
            event_handler: Arc::new(NoOpEventHandler),
        })
    }

    /// Create with the given initial value and the default precision.
    pub fn with_value(value: impl Into<Operand>) -> CalcResult<Self> {
        Self::new(value, Precision::DEFAULT.digits())
    }

    /// Attach an event handler.
    pub fn with_event_handler(mut self, event_handler: Arc<dyn EventHandler>) -> Self {
        self.event_handler = event_handler;
        self
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Current stored value.
    #[inline]
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Current rounding precision in decimal digits.
    #[inline]
    pub fn precision(&self) -> u8 {
        self.precision.digits()
    }

    /// Replace the stored value, rounded at the current precision.
    ///
    /// # Errors
    /// - `NotNumeric` if `value` is not an integer or float
    /// - `NonFinite` if `value` is NaN or infinite
    pub fn set_value(&mut self, value: impl Into<Operand>) -> CalcResult<f64> {
        let operand = value.into();
        self.apply(Operation::SetValue, |_| operand.to_finite_f64())
    }

    /// Replace the rounding precision. The stored value is not re-rounded.
    ///
    /// # Errors
    /// - `PrecisionNotInteger` if `precision` is not an integer
    /// - `PrecisionOutOfRange` outside [1, 15]
    pub fn set_precision(&mut self, precision: impl Into<Operand>) -> CalcResult<u8> {
        let precision = match Precision::from_operand(&precision.into()) {
            Ok(precision) => precision,
            Err(error) => return Err(self.reject(Operation::SetPrecision, error)),
        };

        let previous = self.precision;
        self.precision = precision;
        self.event_handler.on_event(AccumulatorEvent::PrecisionChanged {
            previous: previous.digits(),
            current: precision.digits(),
            timestamp: Utc::now(),
        });
        Ok(precision.digits())
    }

    // ========================================================================
    // Arithmetic Operations
    // ========================================================================

    /// `value <- value + addend`
    pub fn add(&mut self, addend: impl Into<Operand>) -> CalcResult<f64> {
        let addend = addend.into();
        self.apply(Operation::Add, |value| Ok(value + addend.to_finite_f64()?))
    }

    /// `value <- value - subtrahend`
    pub fn subtract(&mut self, subtrahend: impl Into<Operand>) -> CalcResult<f64> {
        let subtrahend = subtrahend.into();
        self.apply(Operation::Subtract, |value| {
            Ok(value - subtrahend.to_finite_f64()?)
        })
    }

    /// `value <- value * multiplicand`
    pub fn multiply(&mut self, multiplicand: impl Into<Operand>) -> CalcResult<f64> {
        let multiplicand = multiplicand.into();
        self.apply(Operation::Multiply, |value| {
            Ok(value * multiplicand.to_finite_f64()?)
        })
    }

    /// `value <- value / denominator`
    ///
    /// # Errors
    /// Returns `DivisionByZero` if `denominator` is zero.
    pub fn divide(&mut self, denominator: impl Into<Operand>) -> CalcResult<f64> {
        let denominator = denominator.into();
        self.apply(Operation::Divide, |value| {
            let denominator = denominator.to_finite_f64()?;
            if denominator == 0.0 {
                return Err(CalculatorError::DivisionByZero);
            }
            Ok(value / denominator)
        })
    }

    /// Take the n-th root of the stored value.
    ///
    /// A negative value only has a real root when `n` is odd (`n % 2 == 1`,
    /// remainder signed like the divisor); that root is computed on the
    /// magnitude and negated. Non-negative values use `value ^ (1/n)`, so a
    /// negative or fractional `n` acts as a reciprocal or integer power.
    ///
    /// # Errors
    /// - `ZeroRoot` if `n` is zero
    /// - `EvenRootOfNegative` if the value is negative and `n` is not odd
    /// - `DivisionByZero` if the value is zero and `n` is negative
    pub fn root(&mut self, n: impl Into<Operand>) -> CalcResult<f64> {
        let n = n.into();
        self.apply(Operation::Root, |value| {
            let degree = n.to_finite_f64()?;
            if degree == 0.0 {
                return Err(CalculatorError::ZeroRoot);
            }

            let exponent = 1.0 / degree;
            if value < 0.0 {
                if n.is_odd() {
                    Ok(-(-value).powf(exponent))
                } else {
                    Err(CalculatorError::EvenRootOfNegative { value, degree })
                }
            } else if value == 0.0 && exponent < 0.0 {
                // Zero to a negative power
                Err(CalculatorError::DivisionByZero)
            } else {
                Ok(value.powf(exponent))
            }
        })
    }

    /// Set the stored value back to zero. Never fails.
    pub fn reset(&mut self) -> f64 {
        self.store(Operation::Reset, 0.0)
    }

    // ========================================================================
    // Conversion
    // ========================================================================

    /// Stored value as a `Decimal` with `precision` fractional digits.
    ///
    /// Returns `None` when the value is outside the range `Decimal` can hold.
    pub fn to_decimal(&self) -> Option<Decimal> {
        format!("{:.*}", self.precision.digits() as usize, self.value)
            .parse::<Decimal>()
            .ok()
    }

    // ========================================================================
    // Internals
    // ========================================================================

    /// Compute a new raw value from the current one and commit it, or
    /// report the rejection and leave state untouched.
    fn apply<F>(&mut self, operation: Operation, compute: F) -> CalcResult<f64>
    where
        F: FnOnce(f64) -> CalcResult<f64>,
    {
        let raw = match compute(self.value) {
            Ok(raw) if raw.is_finite() => raw,
            Ok(raw) => {
                return Err(self.reject(operation, CalculatorError::NonFinite { value: raw }))
            },
            Err(error) => return Err(self.reject(operation, error)),
        };
        Ok(self.store(operation, raw))
    }

    /// Round and store a finite value.
    fn store(&mut self, operation: Operation, raw: f64) -> f64 {
        let previous = self.value;
        self.value = round_half_even(raw, self.precision);
        self.event_handler.on_event(AccumulatorEvent::ValueChanged {
            operation,
            previous,
            current: self.value,
            timestamp: Utc::now(),
        });
        self.value
    }

    fn reject(&self, operation: Operation, error: CalculatorError) -> CalculatorError {
        self.event_handler
            .on_event(AccumulatorEvent::OperationRejected {
                operation,
                error: error.clone(),
                timestamp: Utc::now(),
            });
        error
    }
}

impl Default for Accumulator {
    fn default() -> Self {
        Self {
            value: 0.0,
            precision: Precision::DEFAULT,
            event_handler: Arc::new(NoOpEventHandler),
        }
    }
}

impl fmt::Debug for Accumulator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Accumulator")
            .field("value", &self.value)
            .field("precision", &self.precision.digits())
            .finish_non_exhaustive()
    }
}

impl fmt::Display for Accumulator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Accumulator with current memory: {}",
            render_float(self.value)
        )
    }
}
