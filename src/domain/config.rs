// ============================================================================
// Accumulator Configuration
// Initial value and rounding precision for a new accumulator
// ============================================================================

use crate::numeric::{CalcResult, CalculatorError, Precision};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration for creating an accumulator
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AccumulatorConfig {
    /// Value stored at construction, rounded to `precision` digits
    pub initial_value: f64,

    /// Decimal digits kept on every write (1-15)
    pub precision: u8,
}

impl AccumulatorConfig {
    /// Create a configuration with explicit parameters
    pub fn new(initial_value: f64, precision: u8) -> Self {
        Self {
            initial_value,
            precision,
        }
    }

    /// Builder method: Set the initial value
    pub fn with_initial_value(mut self, value: f64) -> Self {
        self.initial_value = value;
        self
    }

    /// Builder method: Set the rounding precision
    pub fn with_precision(mut self, precision: u8) -> Self {
        self.precision = precision;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> CalcResult<()> {
        Precision::new(self.precision as i64)?;

        if !self.initial_value.is_finite() {
            return Err(CalculatorError::NonFinite {
                value: self.initial_value,
            });
        }

        Ok(())
    }
}

impl Default for AccumulatorConfig {
    fn default() -> Self {
        Self::standard()
    }
}

// ============================================================================
// Preset Configurations (Factory Methods)
// ============================================================================

impl AccumulatorConfig {
    /// Starts at 0 with 10 digits of precision
    pub fn standard() -> Self {
        Self::new(0.0, Precision::DEFAULT.digits())
    }

    /// Starts at 0 with the maximum 15 digits
    pub fn high_precision() -> Self {
        Self::new(0.0, Precision::MAX)
    }

    /// Starts at 0 with 2 digits, suited to currency amounts
    pub fn coarse() -> Self {
        Self::new(0.0, 2)
    }
}
