use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use anyhow::{Context, Result};
use forage_core::config::SimConfig;
use serde::{Deserialize, Serialize};

use crate::driver::render_loop::DEFAULT_STEPS_PER_FRAME;
use crate::driver::viewport::ViewportGeometry;
use crate::error::DriverError;

pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// Logical drawing area. The browser host overrides this with the real
/// canvas size.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ViewportConfig {
    pub width: f64,
    pub height: f64,
    pub device_pixel_scale: f64,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            device_pixel_scale: 1.0,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct DriverConfig {
    pub steps_per_frame: usize,
    /// Frame pacing for native hosts. The browser paces with
    /// `requestAnimationFrame` instead.
    pub frame_interval_ms: u64,
    /// Halt on snapshot coordinates outside the unit square.
    pub strict_bounds: bool,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            steps_per_frame: DEFAULT_STEPS_PER_FRAME,
            frame_interval_ms: 16,
            strict_bounds: false,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub viewport: ViewportConfig,
    pub driver: DriverConfig,
    pub sim: SimConfig,
}

impl AppConfig {
    /// Reads `path`. A missing file means defaults; an unreadable or
    /// malformed one is an error.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "No config file, using defaults");
                return Ok(Self::default());
            }
            Err(err) => {
                return Err(err)
                    .with_context(|| format!("failed to read config file {}", path.display()))
            }
        };

        let config: Self = toml::from_str(&content)
            .with_context(|| format!("failed to parse config file {}", path.display()))?;
        config
            .validate()
            .with_context(|| format!("invalid config file {}", path.display()))?;

        tracing::info!(path = %path.display(), "Loaded config");
        Ok(config)
    }

    pub fn geometry(&self) -> crate::error::Result<ViewportGeometry> {
        ViewportGeometry::new(
            self.viewport.width,
            self.viewport.height,
            self.viewport.device_pixel_scale,
        )
    }

    pub fn validate(&self) -> Result<()> {
        self.geometry()?;
        if self.driver.steps_per_frame == 0 {
            return Err(DriverError::configuration("driver.steps_per_frame must be at least 1").into());
        }
        self.sim.validate()?;
        Ok(())
    }
}
