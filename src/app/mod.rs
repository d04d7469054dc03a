//! Native hosts: the terminal visualization, the headless runner and the
//! training-only mode.

pub mod input;
pub mod shutdown;
pub mod terminal;
pub mod training_log;

pub use input::KeyboardScheduler;
pub use shutdown::spawn_signal_handler;
pub use terminal::TerminalSurface;
pub use training_log::TrainingLog;

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use forage_core::{Metrics, SharedEngine, SimulationEngine, WorldSnapshot};
use forage_tui::Tui;

use crate::driver::{
    CoordinateMapper, DrawList, FrameBudget, FrameScheduler, RenderLoop, StopToken,
    TrainingReport, TrainingTrigger,
};
use crate::model::config::AppConfig;

fn render_loop(config: &AppConfig, metrics: &Arc<Metrics>) -> Result<RenderLoop> {
    let mapper = CoordinateMapper::new(config.geometry()?);
    Ok(RenderLoop::new(mapper, config.driver.steps_per_frame)?
        .with_strict_bounds(config.driver.strict_bounds)
        .with_metrics(Arc::clone(metrics)))
}

/// Runs the terminal visualization until `stop` is set or the user quits.
/// Returns the number of frames drawn.
pub fn run_tui<E: SimulationEngine>(config: &AppConfig, engine: E, stop: StopToken) -> Result<u64> {
    let metrics = Arc::new(Metrics::new());
    let mut driver = render_loop(config, &metrics)?;

    let mut engine = SharedEngine::new(engine);
    let log = TrainingLog::new();
    let mut scheduler = KeyboardScheduler::new(
        engine.clone(),
        Duration::from_millis(config.driver.frame_interval_ms),
        stop.clone(),
        log.clone(),
    )
    .with_metrics(Arc::clone(&metrics));

    let mut tui = Tui::new()?;
    tui.init()?;

    let result = {
        let mut surface =
            TerminalSurface::new(&mut tui.terminal, log).with_metrics(Arc::clone(&metrics));
        driver.run(&mut engine, &mut surface, &mut scheduler, &stop)
    };

    tui.exit()?;

    let frames = result?;
    tracing::info!(
        frames,
        generations = scheduler.trigger().generation(),
        "Terminal session ended"
    );
    Ok(frames)
}

/// Outcome of a headless run.
#[derive(Debug, Clone)]
pub struct HeadlessRun {
    pub frames: u64,
    /// The world as it stood when the run ended.
    pub world: WorldSnapshot,
}

/// Drives the engine for `frames` frames against an in-memory surface,
/// training every `train_every` frames when set. Each training report is
/// handed to `on_report`.
pub fn run_headless<E, F>(
    config: &AppConfig,
    engine: E,
    frames: u64,
    train_every: Option<u64>,
    stop: StopToken,
    mut on_report: F,
) -> Result<HeadlessRun>
where
    E: SimulationEngine,
    F: FnMut(&TrainingReport),
{
    let metrics = Arc::new(Metrics::new());
    let mut driver = render_loop(config, &metrics)?;

    let mut engine = SharedEngine::new(engine);
    let mut trainer = engine.clone();
    let mut trigger = TrainingTrigger::new();
    let mut budget = FrameBudget::new(frames, stop.clone());
    let mut frame = 0u64;

    let mut scheduler = || -> crate::error::Result<()> {
        budget.next_frame()?;
        frame += 1;
        if let Some(every) = train_every.filter(|every| *every > 0) {
            if frame % every == 0 {
                let report = trigger.activate(&mut trainer)?;
                metrics.record_generation();
                on_report(&report);
            }
        }
        Ok(())
    };

    let mut surface = DrawList::new();
    let drawn = driver.run(&mut engine, &mut surface, &mut scheduler, &stop)?;

    tracing::info!(
        frames = drawn,
        steps = driver.metrics().step_count(),
        generations = driver.metrics().generation_count(),
        "Headless run finished"
    );
    Ok(HeadlessRun {
        frames: drawn,
        world: engine.world()?,
    })
}

/// Activates the training trigger `generations` times, without drawing.
pub fn run_training<E, F>(engine: &mut E, generations: u64, mut on_report: F) -> Result<TrainingTrigger>
where
    E: SimulationEngine + ?Sized,
    F: FnMut(&TrainingReport),
{
    let mut trigger = TrainingTrigger::new();
    for _ in 0..generations {
        let report = trigger.activate(engine)?;
        on_report(&report);
    }
    Ok(trigger)
}
