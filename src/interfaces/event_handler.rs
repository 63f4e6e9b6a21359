// ============================================================================
// Event Handler Interface
// Defines the contract for observing accumulator state changes
// ============================================================================

use crate::numeric::CalculatorError;
use chrono::{DateTime, Utc};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The accumulator operation that produced an event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Operation {
    SetValue,
    SetPrecision,
    Add,
    Subtract,
    Multiply,
    Divide,
    Root,
    Reset,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operation::SetValue => "set_value",
            Operation::SetPrecision => "set_precision",
            Operation::Add => "add",
            Operation::Subtract => "subtract",
            Operation::Multiply => "multiply",
            Operation::Divide => "divide",
            Operation::Root => "root",
            Operation::Reset => "reset",
        };
        f.write_str(name)
    }
}

/// Events emitted by the accumulator
#[derive(Debug, Clone)]
pub enum AccumulatorEvent {
    /// Stored value replaced by a new rounded value
    ValueChanged {
        operation: Operation,
        previous: f64,
        current: f64,
        timestamp: DateTime<Utc>,
    },

    /// Rounding precision replaced
    PrecisionChanged {
        previous: u8,
        current: u8,
        timestamp: DateTime<Utc>,
    },

    /// Operation refused, state untouched
    OperationRejected {
        operation: Operation,
        error: CalculatorError,
        timestamp: DateTime<Utc>,
    },
}

/// Event handler trait for observing accumulator events
/// Implementations can handle logging, metrics, auditing, etc.
pub trait EventHandler: Send + Sync {
    /// Handle an accumulator event
    fn on_event(&self, event: AccumulatorEvent);
}

/// No-op event handler, the default
pub struct NoOpEventHandler;

impl EventHandler for NoOpEventHandler {
    fn on_event(&self, _event: AccumulatorEvent) {
        // Do nothing
    }
}

/// Logging event handler
pub struct LoggingEventHandler;

impl EventHandler for LoggingEventHandler {
    fn on_event(&self, event: AccumulatorEvent) {
        match event {
            AccumulatorEvent::ValueChanged {
                operation,
                previous,
                current,
                ..
            } => tracing::debug!(%operation, previous, current, "accumulator value changed"),
            AccumulatorEvent::PrecisionChanged {
                previous, current, ..
            } => tracing::debug!(previous, current, "accumulator precision changed"),
            AccumulatorEvent::OperationRejected {
                operation, error, ..
            } => tracing::warn!(%operation, %error, "accumulator operation rejected"),
        }
    }
}
