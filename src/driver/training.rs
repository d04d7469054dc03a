use std::fmt;

use forage_core::SimulationEngine;

use super::StopToken;
use crate::error::Result;

/// What a training request produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrainingReport {
    /// Engine-provided description of the generation that just ended.
    pub summary: String,
    /// How many times the trigger has been activated, this one included.
    pub generation: u64,
}

impl fmt::Display for TrainingReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, gene={}", self.summary, self.generation)
    }
}

/// User-initiated training.
///
/// The generation counter belongs to the trigger, not the engine: it counts
/// activations and never resets, even if the engine evolves on its own or a
/// `train` call fails.
#[derive(Debug, Default)]
pub struct TrainingTrigger {
    generation: u64,
    stop_on_failure: Option<StopToken>,
}

impl TrainingTrigger {
    /// Creates a trigger whose counter starts at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests a stop on `stop` whenever `train` fails, so the render loop
    /// watching that token ends before its next tick. Hosts whose trigger
    /// runs outside the loop's scheduler (a click handler) need this.
    pub fn stop_on_failure(mut self, stop: StopToken) -> Self {
        self.stop_on_failure = Some(stop);
        self
    }

    /// Gets the number of activations so far.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Trains one generation and reports it.
    pub fn activate<E>(&mut self, engine: &mut E) -> Result<TrainingReport>
    where
        E: SimulationEngine + ?Sized,
    {
        self.generation += 1;

        let summary = engine.train().inspect_err(|err| {
            tracing::warn!(generation = self.generation, error = %err, "Training failed");
            if let Some(stop) = &self.stop_on_failure {
                stop.request_stop();
            }
        })?;

        let report = TrainingReport {
            summary,
            generation: self.generation,
        };
        tracing::info!(generation = report.generation, "{report}");
        Ok(report)
    }
}
