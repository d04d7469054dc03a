use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use forage_core::{Metrics, SharedEngine, SimulationEngine};

use super::training_log::TrainingLog;
use crate::driver::{FrameScheduler, IntervalScheduler, StopToken, TrainingTrigger};
use crate::error::{DriverError, Result};

/// Frame pacing for the terminal host. While waiting for the next frame it
/// reads the keyboard: `t` trains, `q`, Esc and Ctrl+C stop.
///
/// Training goes through its own handle on the shared engine, so it runs
/// between ticks and never inside a batch of steps.
pub struct KeyboardScheduler<E> {
    engine: SharedEngine<E>,
    trigger: TrainingTrigger,
    interval: IntervalScheduler,
    stop: StopToken,
    log: TrainingLog,
    metrics: Arc<Metrics>,
}

impl<E: SimulationEngine> KeyboardScheduler<E> {
    pub fn new(
        engine: SharedEngine<E>,
        frame_interval: Duration,
        stop: StopToken,
        log: TrainingLog,
    ) -> Self {
        Self {
            engine,
            trigger: TrainingTrigger::new(),
            interval: IntervalScheduler::new(frame_interval),
            stop,
            log,
            metrics: Arc::new(Metrics::new()),
        }
    }

    pub fn with_metrics(mut self, metrics: Arc<Metrics>) -> Self {
        self.metrics = metrics;
        self
    }

    pub fn trigger(&self) -> &TrainingTrigger {
        &self.trigger
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Char('t') | KeyCode::Char('T') => {
                let report = self.trigger.activate(&mut self.engine)?;
                self.metrics.record_generation();
                self.log.push(report.to_string());
            }
            KeyCode::Char('q') | KeyCode::Esc => self.stop.request_stop(),
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.stop.request_stop()
            }
            _ => {}
        }
        Ok(())
    }
}

fn input_error(err: std::io::Error) -> DriverError {
    DriverError::surface(format!("failed to read terminal input: {err}"))
}

impl<E: SimulationEngine> FrameScheduler for KeyboardScheduler<E> {
    fn next_frame(&mut self) -> Result<()> {
        while !self.stop.is_stop_requested() {
            if !event::poll(self.interval.remaining()).map_err(input_error)? {
                break;
            }
            if let Event::Key(key) = event::read().map_err(input_error)? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key)?;
                }
            }
        }
        self.interval.mark_frame();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use forage_core::ScriptedEngine;

    fn scheduler(engine: ScriptedEngine) -> (KeyboardScheduler<ScriptedEngine>, StopToken, TrainingLog) {
        let stop = StopToken::new();
        let log = TrainingLog::new();
        let scheduler = KeyboardScheduler::new(
            SharedEngine::new(engine),
            Duration::from_millis(16),
            stop.clone(),
            log.clone(),
        );
        (scheduler, stop, log)
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn t_trains_and_logs_the_report() {
        let engine = ScriptedEngine::new().with_summaries(["loss=0.3", "loss=0.1"]);
        let (mut scheduler, stop, log) = scheduler(engine);

        scheduler.handle_key(press(KeyCode::Char('t'))).unwrap();
        scheduler.handle_key(press(KeyCode::Char('t'))).unwrap();

        assert_eq!(log.lines(), vec!["loss=0.3, gene=1", "loss=0.1, gene=2"]);
        assert_eq!(scheduler.trigger().generation(), 2);
        assert!(!stop.is_stop_requested());
    }

    #[test]
    fn quit_keys_request_a_stop() {
        for key in [
            press(KeyCode::Char('q')),
            press(KeyCode::Esc),
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        ] {
            let (mut scheduler, stop, _) = scheduler(ScriptedEngine::new());
            scheduler.handle_key(key).unwrap();
            assert!(stop.is_stop_requested());
        }
    }

    #[test]
    fn plain_c_is_ignored() {
        let (mut scheduler, stop, log) = scheduler(ScriptedEngine::new());
        scheduler.handle_key(press(KeyCode::Char('c'))).unwrap();
        assert!(!stop.is_stop_requested());
        assert!(log.is_empty());
    }

    #[test]
    fn training_fault_is_reported() {
        let (mut scheduler, _, log) = scheduler(ScriptedEngine::new().fail_train_on(1));
        let err = scheduler.handle_key(press(KeyCode::Char('t'))).unwrap_err();
        assert!(err.is_engine_fault());
        assert!(log.is_empty());
    }
}
