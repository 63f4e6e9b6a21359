// ============================================================================
// Engine Module
// Contains the accumulator and its construction helpers
// ============================================================================

mod accumulator;
mod shared;

pub mod factory;

pub use accumulator::Accumulator;
pub use factory::{create_from_config, AccumulatorBuilder};
pub use shared::SharedAccumulator;
