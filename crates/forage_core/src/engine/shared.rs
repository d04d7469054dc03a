use std::sync::{Arc, Mutex, MutexGuard};

use super::{EngineError, SimulationEngine};
use crate::snapshot::WorldSnapshot;

/// Cloneable handle that serializes every call into the wrapped engine.
///
/// The lock is held for one call at a time, so a batch of steps is not
/// atomic: a clone used from another thread can slip a `train` between two
/// steps.
pub struct SharedEngine<E> {
    inner: Arc<Mutex<E>>,
}

impl<E> Clone for SharedEngine<E> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<E> SharedEngine<E> {
    pub fn new(engine: E) -> Self {
        Self {
            inner: Arc::new(Mutex::new(engine)),
        }
    }

    pub fn lock(&self) -> Result<MutexGuard<'_, E>, EngineError> {
        self.inner.lock().map_err(|_| EngineError::Poisoned)
    }

    /// Runs `f` with exclusive access to the engine.
    pub fn with<R>(&self, f: impl FnOnce(&mut E) -> R) -> Result<R, EngineError> {
        let mut guard = self.lock()?;
        Ok(f(&mut guard))
    }
}

impl<E: SimulationEngine> SimulationEngine for SharedEngine<E> {
    fn step(&mut self) -> Result<(), EngineError> {
        self.lock()?.step()
    }

    fn world(&self) -> Result<WorldSnapshot, EngineError> {
        self.lock()?.world()
    }

    fn train(&mut self) -> Result<String, EngineError> {
        self.lock()?.train()
    }
}
