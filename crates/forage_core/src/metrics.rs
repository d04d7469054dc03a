//! Frame and generation counters plus logging setup.

use std::fs::File;
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

/// How often (in frames) a progress line is logged at info level.
const REPORT_EVERY: u64 = 600;

/// Counters shared by the driver and whoever wants to display them.
#[derive(Debug, Default)]
pub struct Metrics {
    frame_count: AtomicU64,
    step_count: AtomicU64,
    animal_count: AtomicU64,
    food_count: AtomicU64,
    generation_count: AtomicU64,
}

impl Metrics {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a drawn frame.
    pub fn record_frame(&self, steps: usize, animals: usize, foods: usize) {
        let frame = self.frame_count.fetch_add(1, Ordering::Relaxed) + 1;
        self.step_count.fetch_add(steps as u64, Ordering::Relaxed);
        self.animal_count.store(animals as u64, Ordering::Relaxed);
        self.food_count.store(foods as u64, Ordering::Relaxed);

        if frame % REPORT_EVERY == 0 {
            tracing::info!(
                frame,
                steps = self.step_count(),
                animals,
                foods,
                "Render loop progress"
            );
        }
    }

    pub fn record_generation(&self) {
        self.generation_count.fetch_add(1, Ordering::Relaxed);
    }

    #[must_use]
    pub fn frame_count(&self) -> u64 {
        self.frame_count.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn step_count(&self) -> u64 {
        self.step_count.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn animal_count(&self) -> u64 {
        self.animal_count.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn food_count(&self) -> u64 {
        self.food_count.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn generation_count(&self) -> u64 {
        self.generation_count.load(Ordering::Relaxed)
    }
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Initialize tracing to stderr. Honors `RUST_LOG`, defaults to `info`.
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .try_init()
        .ok();
}

/// Initialize tracing into a file, for hosts that own the terminal.
pub fn init_file_logging(path: &Path) -> std::io::Result<()> {
    let file = File::create(path)?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .ok();
    Ok(())
}
