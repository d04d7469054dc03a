//! The contract between a simulation and whatever drives it.
//!
//! Drivers only ever see [`SimulationEngine`]. The engine is not reentrant:
//! callers on different threads must go through [`SharedEngine`] so that
//! `step`, `world` and `train` never overlap.

mod scripted;
mod shared;

pub use scripted::{EngineCall, ScriptedEngine};
pub use shared::SharedEngine;

use thiserror::Error;

use crate::snapshot::WorldSnapshot;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    /// Unrecoverable internal failure of the engine.
    #[error("engine fault: {0}")]
    Fault(String),

    /// Another holder of a shared engine panicked mid-call.
    #[error("engine lock poisoned")]
    Poisoned,

    #[error("invalid simulation config: {0}")]
    InvalidConfig(String),

    #[error("brain failure: {0}")]
    Brain(#[from] forage_nn::NetworkError),

    #[error("evolution failure: {0}")]
    Evolution(#[from] forage_ga::GaError),
}

impl EngineError {
    #[must_use]
    pub fn fault<S: Into<String>>(msg: S) -> Self {
        Self::Fault(msg.into())
    }

    #[must_use]
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        Self::InvalidConfig(msg.into())
    }
}

pub trait SimulationEngine {
    /// Advances the world by one discrete unit.
    fn step(&mut self) -> Result<(), EngineError>;

    /// Current state as a fresh snapshot. Must not change the engine.
    fn world(&self) -> Result<WorldSnapshot, EngineError>;

    /// Advances to the next generation and describes the one that ended.
    fn train(&mut self) -> Result<String, EngineError>;
}

impl<E: SimulationEngine + ?Sized> SimulationEngine for Box<E> {
    fn step(&mut self) -> Result<(), EngineError> {
        (**self).step()
    }

    fn world(&self) -> Result<WorldSnapshot, EngineError> {
        (**self).world()
    }

    fn train(&mut self) -> Result<String, EngineError> {
        (**self).train()
    }
}
