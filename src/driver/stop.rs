//! Cooperative cancellation for the render loop.
//!
//! The loop checks the token before every tick; anything holding a clone
//! (a signal handler, a key binding, a test) can ask it to stop.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

#[derive(Debug, Clone, Default)]
pub struct StopToken {
    stop_requested: Arc<AtomicBool>,
}

impl StopToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests a stop. The current tick still finishes.
    pub fn request_stop(&self) {
        if !self.stop_requested.swap(true, Ordering::SeqCst) {
            tracing::info!("Stop requested");
        }
    }

    pub fn is_stop_requested(&self) -> bool {
        self.stop_requested.load(Ordering::SeqCst)
    }
}
