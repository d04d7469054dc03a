//! Frame pacing between ticks.
//!
//! After every completed tick the render loop hands control to a
//! [`FrameScheduler`], which returns once the next frame is due. This is the
//! loop's only suspension point.

#[cfg(not(target_arch = "wasm32"))]
use std::time::{Duration, Instant};

use super::stop::StopToken;
use crate::error::Result;

pub trait FrameScheduler {
    fn next_frame(&mut self) -> Result<()>;
}

impl<F> FrameScheduler for F
where
    F: FnMut() -> Result<()>,
{
    fn next_frame(&mut self) -> Result<()> {
        self()
    }
}

/// Paces frames at a fixed interval, sleeping off whatever the tick did not
/// use. A tick that overruns is followed by the next one immediately.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone)]
pub struct IntervalScheduler {
    interval: Duration,
    last_frame: Option<Instant>,
}

#[cfg(not(target_arch = "wasm32"))]
impl IntervalScheduler {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_frame: None,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Time left until the next frame is due.
    pub fn remaining(&self) -> Duration {
        self.last_frame
            .map(|last| self.interval.saturating_sub(last.elapsed()))
            .unwrap_or(Duration::ZERO)
    }

    pub fn mark_frame(&mut self) {
        self.last_frame = Some(Instant::now());
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl FrameScheduler for IntervalScheduler {
    fn next_frame(&mut self) -> Result<()> {
        let remaining = self.remaining();
        if !remaining.is_zero() {
            std::thread::sleep(remaining);
        }
        self.mark_frame();
        Ok(())
    }
}

/// Lets a fixed number of frames through, then requests a stop. Frames are
/// not paced.
#[derive(Debug, Clone)]
pub struct FrameBudget {
    remaining: u64,
    stop: StopToken,
}

impl FrameBudget {
    pub fn new(frames: u64, stop: StopToken) -> Self {
        if frames == 0 {
            stop.request_stop();
        }
        Self {
            remaining: frames,
            stop,
        }
    }

    pub fn remaining(&self) -> u64 {
        self.remaining
    }
}

impl FrameScheduler for FrameBudget {
    fn next_frame(&mut self) -> Result<()> {
        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining == 0 {
            self.stop.request_stop();
        }
        Ok(())
    }
}
