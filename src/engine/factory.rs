// ============================================================================
// Accumulator Factory
// Creates accumulators from configuration
// ============================================================================

use crate::domain::config::AccumulatorConfig;
use crate::engine::{Accumulator, SharedAccumulator};
use crate::interfaces::{EventHandler, NoOpEventHandler};
use crate::numeric::CalcResult;
use std::sync::Arc;

// ============================================================================
// Factory Functions
// ============================================================================

/// Creates an accumulator from configuration
///
/// # Arguments
/// * `config` - Initial value and precision
/// * `event_handler` - Receives value, precision and rejection events
///
/// # Example
/// ```
/// use memory_calculator::prelude::*;
/// use std::sync::Arc;
///
/// let config = AccumulatorConfig::coarse().with_initial_value(2.3456);
/// let acc = create_from_config(config, Arc::new(NoOpEventHandler)).unwrap();
/// assert_eq!(acc.value(), 2.35);
/// ```
pub fn create_from_config(
    config: AccumulatorConfig,
    event_handler: Arc<dyn EventHandler>,
) -> CalcResult<Accumulator> {
    config.validate()?;

    let accumulator = Accumulator::new(config.initial_value, config.precision)?;
    Ok(accumulator.with_event_handler(event_handler))
}

// ============================================================================
// Builder Pattern
// ============================================================================

/// Builder for creating accumulators with fluent API
///
/// # Example
/// ```
/// use memory_calculator::prelude::*;
/// use std::sync::Arc;
///
/// let acc = AccumulatorBuilder::new()
///     .initial_value(-8.0)
///     .precision(4)
///     .event_handler(Arc::new(LoggingEventHandler))
///     .build()
///     .unwrap();
/// assert_eq!(acc.precision(), 4);
/// ```
pub struct AccumulatorBuilder {
    config: AccumulatorConfig,
    event_handler: Arc<dyn EventHandler>,
}

impl AccumulatorBuilder {
    /// Create a builder with the standard configuration
    pub fn new() -> Self {
        Self::from_config(AccumulatorConfig::standard())
    }

    /// Start from an existing configuration
    pub fn from_config(config: AccumulatorConfig) -> Self {
        Self {
            config,
            event_handler: Arc::new(NoOpEventHandler),
        }
    }

    /// Set the initial value
    pub fn initial_value(mut self, value: f64) -> Self {
        self.config.initial_value = value;
        self
    }

    /// Set the rounding precision
    pub fn precision(mut self, precision: u8) -> Self {
        self.config.precision = precision;
        self
    }

    /// Set the event handler
    pub fn event_handler(mut self, event_handler: Arc<dyn EventHandler>) -> Self {
        self.event_handler = event_handler;
        self
    }

    // ========================================================================
    // Preset Configurations
    // ========================================================================

    /// Apply the maximum-precision configuration
    pub fn high_precision() -> Self {
        Self::from_config(AccumulatorConfig::high_precision())
    }

    /// Apply the two-digit configuration
    pub fn coarse() -> Self {
        Self::from_config(AccumulatorConfig::coarse())
    }

    // ========================================================================
    // Build
    // ========================================================================

    /// Build the accumulator
    pub fn build(self) -> CalcResult<Accumulator> {
        create_from_config(self.config, self.event_handler)
    }

    /// Build an accumulator shared between threads
    pub fn build_shared(self) -> CalcResult<SharedAccumulator> {
        self.build().map(SharedAccumulator::new)
    }

    /// Get the configuration without building (for inspection)
    pub fn get_config(&self) -> &AccumulatorConfig {
        &self.config
    }
}

impl Default for AccumulatorBuilder {
    fn default() -> Self {
        Self::new()
    }
}
