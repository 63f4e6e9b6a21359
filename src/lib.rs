// ============================================================================
// Memory Calculator Library
// Single-value accumulator with validated state and rounding on write
// ============================================================================

//! # Memory Calculator
//!
//! A stateful arithmetic accumulator: one stored value, mutated in place by
//! add, subtract, multiply, divide, n-th root and reset.
//!
//! ## Features
//!
//! - **Validated state**: value and precision change only through setters
//!   that reject bad input and leave state untouched
//! - **Rounding on write**: every stored value is rounded half-to-even at the
//!   configured precision (1-15 digits, default 10)
//! - **Real roots only**: odd roots of negative values stay real, even roots
//!   of negative values are rejected
//! - **Event hooks** for logging state changes and rejections
//!
//! ## Example
//!
//! ```rust
//! use memory_calculator::prelude::*;
//!
//! let mut acc = Accumulator::default();
//! assert_eq!(acc.add(4).unwrap(), 4.0);
//! assert_eq!(acc.multiply(2).unwrap(), 8.0);
//! assert_eq!(acc.multiply(-0.5).unwrap(), -4.0);
//!
//! // Odd root of a negative value
//! acc.set_value(-8).unwrap();
//! assert_eq!(acc.root(-3).unwrap(), -0.5);
//!
//! // Failed operations leave the value untouched
//! let err = acc.divide(0).unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::DivisionByZero);
//! assert_eq!(acc.value(), -0.5);
//! ```

pub mod domain;
pub mod engine;
pub mod interfaces;
pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::AccumulatorConfig;
    pub use crate::engine::{
        create_from_config, Accumulator, AccumulatorBuilder, SharedAccumulator,
    };
    pub use crate::interfaces::{
        AccumulatorEvent, EventHandler, LoggingEventHandler, NoOpEventHandler, Operation,
    };
    pub use crate::numeric::{CalcResult, CalculatorError, ErrorKind, Operand, Precision};
}
