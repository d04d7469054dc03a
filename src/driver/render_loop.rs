use std::sync::Arc;

use forage_core::{Metrics, SimulationEngine};

use super::scheduler::FrameScheduler;
use super::stop::StopToken;
use super::surface::RenderTarget;
use super::viewport::CoordinateMapper;
use crate::error::{DriverError, Result};

/// Simulation steps per drawn frame unless configured otherwise.
pub const DEFAULT_STEPS_PER_FRAME: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    /// Nothing ticked yet.
    Idle,
    Running,
    /// A tick failed; no further ticks are allowed.
    Halted,
    /// Cancelled through the stop token.
    Stopped,
}

/// What one tick did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameStats {
    pub steps: usize,
    pub foods: usize,
    pub animals: usize,
}

/// Advances an engine a fixed number of steps per frame and draws the
/// resulting world.
///
/// The step count per frame is a constant, not derived from elapsed time:
/// the simulation runs `steps_per_frame` times faster than the display
/// refreshes, and only the last state of each batch is drawn.
pub struct RenderLoop {
    mapper: CoordinateMapper,
    steps_per_frame: usize,
    strict_bounds: bool,
    state: LoopState,
    metrics: Arc<Metrics>,
}

impl RenderLoop {
    /// Creates an idle loop. `steps_per_frame` must be at least one.
    pub fn new(mapper: CoordinateMapper, steps_per_frame: usize) -> Result<Self> {
        if steps_per_frame == 0 {
            return Err(DriverError::configuration(
                "steps per frame must be at least 1",
            ));
        }

        Ok(Self {
            mapper,
            steps_per_frame,
            strict_bounds: false,
            state: LoopState::Idle,
            metrics: Arc::new(Metrics::new()),
        })
    }

    /// Reject snapshots with positions outside the unit square instead of
    /// drawing them off-canvas.
    pub fn with_strict_bounds(mut self, strict: bool) -> Self {
        self.strict_bounds = strict;
        self
    }

    /// Records frame and step counts into `metrics` instead of a private set.
    pub fn with_metrics(mut self, metrics: Arc<Metrics>) -> Self {
        self.metrics = metrics;
        self
    }

    /// Gets the lifecycle state.
    pub fn state(&self) -> LoopState {
        self.state
    }

    /// Gets the number of engine steps per frame.
    pub fn steps_per_frame(&self) -> usize {
        self.steps_per_frame
    }

    /// Gets the coordinate mapper.
    pub fn mapper(&self) -> &CoordinateMapper {
        &self.mapper
    }

    /// Gets the metrics this loop records into.
    pub fn metrics(&self) -> &Arc<Metrics> {
        &self.metrics
    }

    /// Sizes the surface for the viewport. Call once, before the first tick.
    pub fn setup<S>(&self, surface: &mut S) -> Result<()>
    where
        S: RenderTarget + ?Sized,
    {
        let geometry = self.mapper.geometry();
        surface.configure(&geometry.surface_dimensions(), geometry.device_pixel_scale())
    }

    /// Runs one frame: `steps_per_frame` steps, one snapshot, one draw pass.
    ///
    /// Any failure halts the loop. A failing step ends the batch right
    /// there: no more steps, no snapshot, nothing drawn.
    pub fn tick<E, S>(&mut self, engine: &mut E, surface: &mut S) -> Result<FrameStats>
    where
        E: SimulationEngine + ?Sized,
        S: RenderTarget + ?Sized,
    {
        match self.state {
            LoopState::Halted => return Err(DriverError::Halted),
            LoopState::Stopped => return Err(DriverError::Stopped),
            LoopState::Idle => {
                tracing::debug!(steps_per_frame = self.steps_per_frame, "Render loop started");
                self.state = LoopState::Running;
            }
            LoopState::Running => {}
        }

        match self.render_frame(engine, surface) {
            Ok(stats) => {
                self.metrics
                    .record_frame(stats.steps, stats.animals, stats.foods);
                Ok(stats)
            }
            Err(err) => {
                self.state = LoopState::Halted;
                tracing::error!(error = %err, frame = self.metrics.frame_count(), "Render loop halted");
                Err(err)
            }
        }
    }

    /// Ticks until the stop token is set or something fails.
    ///
    /// Configures the surface first. The token is checked before every tick
    /// and `scheduler` is called after each one. Returns the number of frames
    /// drawn by this call.
    pub fn run<E, S, F>(
        &mut self,
        engine: &mut E,
        surface: &mut S,
        scheduler: &mut F,
        stop: &StopToken,
    ) -> Result<u64>
    where
        E: SimulationEngine + ?Sized,
        S: RenderTarget + ?Sized,
        F: FrameScheduler + ?Sized,
    {
        if self.state != LoopState::Idle {
            return Err(DriverError::AlreadyStarted);
        }

        if let Err(err) = self.setup(surface) {
            self.state = LoopState::Halted;
            return Err(err);
        }

        let mut frames = 0;
        loop {
            if stop.is_stop_requested() {
                self.state = LoopState::Stopped;
                tracing::info!(frames, "Render loop stopped");
                return Ok(frames);
            }

            self.tick(engine, surface)?;
            frames += 1;

            if let Err(err) = scheduler.next_frame() {
                self.state = LoopState::Halted;
                tracing::error!(error = %err, "Frame scheduler failed");
                return Err(err);
            }
        }
    }

    fn render_frame<E, S>(&self, engine: &mut E, surface: &mut S) -> Result<FrameStats>
    where
        E: SimulationEngine + ?Sized,
        S: RenderTarget + ?Sized,
    {
        for _ in 0..self.steps_per_frame {
            engine.step()?;
        }

        let world = engine.world()?;

        if self.strict_bounds {
            if let Some(violation) = world.find_violation() {
                return Err(DriverError::ContractViolation(violation));
            }
        }

        let geometry = self.mapper.geometry();
        surface.clear(geometry.logical_width(), geometry.logical_height())?;

        let radius = self.mapper.food_radius();
        for food in &world.foods {
            let (x, y) = self.mapper.to_pixels(food.position);
            surface.fill_circle(x, y, radius)?;
        }

        let size = self.mapper.agent_size();
        for animal in &world.animals {
            let (x, y) = self.mapper.to_pixels(animal.position);
            surface.draw_triangle(x, y, size, f64::from(animal.rotation))?;
        }

        surface.present()?;

        Ok(FrameStats {
            steps: self.steps_per_frame,
            foods: world.foods.len(),
            animals: world.animals.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::driver::surface::{DrawCommand, DrawList};
    use crate::driver::viewport::ViewportGeometry;
    use forage_core::{EngineCall, NormalizedPosition, ScriptedEngine, WorldSnapshot};

    fn render_loop() -> RenderLoop {
        let geometry = ViewportGeometry::new(100.0, 50.0, 1.0).unwrap();
        RenderLoop::new(CoordinateMapper::new(geometry), 3).unwrap()
    }

    #[test]
    fn zero_steps_per_frame_is_a_configuration_fault() {
        let geometry = ViewportGeometry::new(100.0, 50.0, 1.0).unwrap();
        assert!(matches!(
            RenderLoop::new(CoordinateMapper::new(geometry), 0),
            Err(DriverError::ConfigurationFault(_))
        ));
    }

    #[test]
    fn first_tick_starts_the_loop() {
        let mut driver = render_loop();
        let mut engine = ScriptedEngine::new();
        let mut surface = DrawList::new();

        assert_eq!(driver.state(), LoopState::Idle);
        let stats = driver.tick(&mut engine, &mut surface).unwrap();

        assert_eq!(driver.state(), LoopState::Running);
        assert_eq!(stats.steps, 3);
        assert_eq!(driver.metrics().frame_count(), 1);
        assert_eq!(surface.frames_presented(), 1);
    }

    #[test]
    fn halted_loop_refuses_to_tick() {
        let mut driver = render_loop();
        let mut engine = ScriptedEngine::new().fail_world_on(1);
        let mut surface = DrawList::new();

        assert!(driver.tick(&mut engine, &mut surface).is_err());
        assert_eq!(driver.state(), LoopState::Halted);
        assert_eq!(
            driver.tick(&mut engine, &mut surface).unwrap_err(),
            DriverError::Halted
        );
        assert_eq!(engine.step_calls(), 3);
    }

    #[test]
    fn strict_bounds_rejects_stray_coordinates() {
        let mut driver = render_loop().with_strict_bounds(true);
        let snapshot = WorldSnapshot {
            foods: vec![forage_core::Food {
                position: NormalizedPosition::new(1.2, 0.5),
            }],
            animals: vec![],
        };
        let mut engine = ScriptedEngine::new().with_snapshot(snapshot);
        let mut surface = DrawList::new();

        let err = driver.tick(&mut engine, &mut surface).unwrap_err();
        assert!(matches!(err, DriverError::ContractViolation(_)));
        assert!(surface.commands().is_empty());
    }

    #[test]
    fn lenient_bounds_draw_off_canvas() {
        let mut driver = render_loop();
        let snapshot = WorldSnapshot {
            foods: vec![forage_core::Food {
                position: NormalizedPosition::new(1.2, 0.5),
            }],
            animals: vec![],
        };
        let mut engine = ScriptedEngine::new().with_snapshot(snapshot);
        let mut surface = DrawList::new();

        driver.tick(&mut engine, &mut surface).unwrap();
        assert_eq!(
            surface.circles().next(),
            Some(&DrawCommand::Circle {
                x: f64::from(1.2f32) * 100.0,
                y: 25.0,
                radius: 0.5,
            })
        );
    }

    #[test]
    fn run_is_not_restartable() {
        let mut driver = render_loop();
        let mut engine = ScriptedEngine::new();
        let mut surface = DrawList::new();
        let stop = StopToken::new();
        stop.request_stop();

        let frames = driver
            .run(&mut engine, &mut surface, &mut || -> Result<()> { Ok(()) }, &stop)
            .unwrap();
        assert_eq!(frames, 0);
        assert_eq!(driver.state(), LoopState::Stopped);
        assert!(engine.journal().is_empty());

        assert_eq!(
            driver
                .run(&mut engine, &mut surface, &mut || -> Result<()> { Ok(()) }, &stop)
                .unwrap_err(),
            DriverError::AlreadyStarted
        );
        assert_eq!(
            driver.tick(&mut engine, &mut surface).unwrap_err(),
            DriverError::Stopped
        );
    }

    #[test]
    fn scheduler_failure_halts_the_loop() {
        let mut driver = render_loop();
        let mut engine = ScriptedEngine::new();
        let mut surface = DrawList::new();

        let err = driver
            .run(
                &mut engine,
                &mut surface,
                &mut || -> Result<()> { Err(DriverError::surface("window closed")) },
                &StopToken::new(),
            )
            .unwrap_err();

        assert_eq!(err, DriverError::surface("window closed"));
        assert_eq!(driver.state(), LoopState::Halted);
        assert_eq!(
            engine.journal().iter().filter(|c| **c == EngineCall::World).count(),
            1
        );
    }
}
