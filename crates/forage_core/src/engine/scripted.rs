use std::cell::{Cell, RefCell};
use std::collections::VecDeque;

use super::{EngineError, SimulationEngine};
use crate::snapshot::WorldSnapshot;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineCall {
    Step,
    World,
    Train,
}

/// Deterministic engine that replays scripted snapshots and summaries and
/// keeps a journal of every call it received.
///
/// Snapshots are consumed in order; the last one keeps being returned once
/// the script runs out. Failure points are 1-based call numbers.
#[derive(Debug, Default)]
pub struct ScriptedEngine {
    snapshots: RefCell<VecDeque<WorldSnapshot>>,
    summaries: VecDeque<String>,
    journal: RefCell<Vec<EngineCall>>,
    step_calls: usize,
    world_calls: Cell<usize>,
    train_calls: usize,
    fail_step_on: Option<usize>,
    fail_world_on: Option<usize>,
    fail_train_on: Option<usize>,
}

impl ScriptedEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_snapshot(self, snapshot: WorldSnapshot) -> Self {
        self.snapshots.borrow_mut().push_back(snapshot);
        self
    }

    pub fn with_summaries<I, S>(mut self, summaries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.summaries.extend(summaries.into_iter().map(Into::into));
        self
    }

    pub fn fail_step_on(mut self, call: usize) -> Self {
        self.fail_step_on = Some(call);
        self
    }

    pub fn fail_world_on(mut self, call: usize) -> Self {
        self.fail_world_on = Some(call);
        self
    }

    pub fn fail_train_on(mut self, call: usize) -> Self {
        self.fail_train_on = Some(call);
        self
    }

    pub fn step_calls(&self) -> usize {
        self.step_calls
    }

    pub fn world_calls(&self) -> usize {
        self.world_calls.get()
    }

    pub fn train_calls(&self) -> usize {
        self.train_calls
    }

    pub fn journal(&self) -> Vec<EngineCall> {
        self.journal.borrow().clone()
    }
}

impl SimulationEngine for ScriptedEngine {
    fn step(&mut self) -> Result<(), EngineError> {
        self.journal.borrow_mut().push(EngineCall::Step);
        self.step_calls += 1;

        if self.fail_step_on == Some(self.step_calls) {
            return Err(EngineError::fault(format!(
                "scripted step failure on call {}",
                self.step_calls
            )));
        }
        Ok(())
    }

    fn world(&self) -> Result<WorldSnapshot, EngineError> {
        self.journal.borrow_mut().push(EngineCall::World);
        let call = self.world_calls.get() + 1;
        self.world_calls.set(call);

        if self.fail_world_on == Some(call) {
            return Err(EngineError::fault(format!(
                "scripted world failure on call {call}"
            )));
        }

        let mut snapshots = self.snapshots.borrow_mut();
        let snapshot = if snapshots.len() > 1 {
            snapshots.pop_front()
        } else {
            snapshots.front().cloned()
        };
        Ok(snapshot.unwrap_or_default())
    }

    fn train(&mut self) -> Result<String, EngineError> {
        self.journal.borrow_mut().push(EngineCall::Train);
        self.train_calls += 1;

        if self.fail_train_on == Some(self.train_calls) {
            return Err(EngineError::fault(format!(
                "scripted train failure on call {}",
                self.train_calls
            )));
        }

        Ok(self
            .summaries
            .pop_front()
            .unwrap_or_else(|| format!("scripted generation {}", self.train_calls)))
    }
}
