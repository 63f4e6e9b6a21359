// ============================================================================
// Shared Accumulator
// Mutex-guarded accumulator for concurrent callers
// ============================================================================

use crate::engine::Accumulator;
use crate::numeric::{CalcResult, Operand};
use parking_lot::Mutex;
use std::fmt;
use std::sync::Arc;

/// Thread-safe handle to an [`Accumulator`].
///
/// The whole accumulator sits behind one lock, so each operation is applied
/// atomically. Clones share the same accumulator.
#[derive(Clone)]
pub struct SharedAccumulator {
    inner: Arc<Mutex<Accumulator>>,
}

impl SharedAccumulator {
    pub fn new(accumulator: Accumulator) -> Self {
        Self {
            inner: Arc::new(Mutex::new(accumulator)),
        }
    }

    pub fn value(&self) -> f64 {
        self.inner.lock().value()
    }

    pub fn precision(&self) -> u8 {
        self.inner.lock().precision()
    }

    pub fn set_value(&self, value: impl Into<Operand>) -> CalcResult<f64> {
        self.inner.lock().set_value(value)
    }

    pub fn set_precision(&self, precision: impl Into<Operand>) -> CalcResult<u8> {
        self.inner.lock().set_precision(precision)
    }

    pub fn add(&self, addend: impl Into<Operand>) -> CalcResult<f64> {
        self.inner.lock().add(addend)
    }

    pub fn subtract(&self, subtrahend: impl Into<Operand>) -> CalcResult<f64> {
        self.inner.lock().subtract(subtrahend)
    }

    pub fn multiply(&self, multiplicand: impl Into<Operand>) -> CalcResult<f64> {
        self.inner.lock().multiply(multiplicand)
    }

    pub fn divide(&self, denominator: impl Into<Operand>) -> CalcResult<f64> {
        self.inner.lock().divide(denominator)
    }

    pub fn root(&self, n: impl Into<Operand>) -> CalcResult<f64> {
        self.inner.lock().root(n)
    }

    pub fn reset(&self) -> f64 {
        self.inner.lock().reset()
    }

    /// Run several operations under a single lock acquisition.
    pub fn with_lock<R>(&self, f: impl FnOnce(&mut Accumulator) -> R) -> R {
        let mut guard = self.inner.lock();
        f(&mut guard)
    }

    /// Copy of the current accumulator state.
    pub fn snapshot(&self) -> Accumulator {
        self.inner.lock().clone()
    }
}

impl From<Accumulator> for SharedAccumulator {
    fn from(accumulator: Accumulator) -> Self {
        Self::new(accumulator)
    }
}

impl fmt::Display for SharedAccumulator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let guard = self.inner.lock();
        fmt::Display::fmt(&*guard, f)
    }
}

impl fmt::Debug for SharedAccumulator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let guard = self.inner.lock();
        f.debug_tuple("SharedAccumulator").field(&*guard).finish()
    }
}
