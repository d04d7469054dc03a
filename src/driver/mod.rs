//! The render loop and everything it needs from a host.
//!
//! A host supplies a [`RenderTarget`], a [`FrameScheduler`] and a
//! [`StopToken`]; the loop owns the viewport mapping and the step/draw
//! cadence. Training runs outside the loop through [`TrainingTrigger`].

pub mod render_loop;
pub mod scheduler;
pub mod stop;
pub mod surface;
pub mod training;
pub mod viewport;

pub use render_loop::{FrameStats, LoopState, RenderLoop, DEFAULT_STEPS_PER_FRAME};
#[cfg(not(target_arch = "wasm32"))]
pub use scheduler::IntervalScheduler;
pub use scheduler::{FrameBudget, FrameScheduler};
pub use stop::StopToken;
pub use surface::{triangle_vertices, DrawCommand, DrawList, RenderTarget, APEX_RATIO};
pub use training::{TrainingReport, TrainingTrigger};
pub use viewport::{CoordinateMapper, SurfaceDimensions, ViewportGeometry};
