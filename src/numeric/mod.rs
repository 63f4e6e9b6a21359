// ============================================================================
// Numeric Module
// Operands, precision, rounding and rendering for the accumulator
// ============================================================================
//
// This module provides:
// - Operand: caller input (int, float, or rejected non-numeric input)
// - Precision: validated digit count in [1, 15]
// - round_half_even: rounding applied on every write
// - render_float: shortest round-trip text for display
// - CalculatorError: error taxonomy for all operations
//
// Design principles:
// - All validation returns Result (no panics)
// - Rounding happens on write, never on read

mod errors;
mod operand;
mod precision;
mod repr;
mod rounding;

pub use errors::{CalcResult, CalculatorError, ErrorKind};
pub use operand::Operand;
pub use precision::Precision;
pub use repr::render_float;
pub use rounding::round_half_even;
