//! Error types for the render loop and its hosts.

use forage_core::EngineError;
use thiserror::Error;

/// Everything that can stop the render loop.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DriverError {
    /// `step`, `world` or `train` failed. Never retried.
    #[error("engine fault: {0}")]
    EngineFault(#[from] EngineError),

    /// Invalid viewport or driver settings, detected before the first tick.
    #[error("configuration fault: {0}")]
    ConfigurationFault(String),

    /// The drawing surface refused a command.
    #[error("surface error: {0}")]
    Surface(String),

    /// The engine handed out coordinates outside the arena while strict
    /// bounds checking was on.
    #[error("engine contract violation: {0}")]
    ContractViolation(String),

    /// The loop already failed; it cannot tick again.
    #[error("render loop halted after an earlier fault")]
    Halted,

    /// The loop was cancelled and cannot tick again.
    #[error("render loop was stopped")]
    Stopped,

    /// `run` was called on a loop that already ticked; it is not restartable.
    #[error("render loop already started")]
    AlreadyStarted,
}

/// Result type alias for driver operations.
pub type Result<T> = std::result::Result<T, DriverError>;

impl DriverError {
    #[must_use]
    pub fn configuration<S: Into<String>>(msg: S) -> Self {
        Self::ConfigurationFault(msg.into())
    }

    #[must_use]
    pub fn surface<S: Into<String>>(msg: S) -> Self {
        Self::Surface(msg.into())
    }

    /// Whether this error came from the engine (as opposed to the host).
    pub fn is_engine_fault(&self) -> bool {
        matches!(self, Self::EngineFault(_) | Self::ContractViolation(_))
    }
}
