//! Viewport geometry and the normalized → pixel mapping.
//!
//! All drawing happens in logical pixels. The device pixel scale is applied
//! once, when the surface is configured: the backing store is enlarged by
//! the scale and the drawing context is scaled to match, so shapes come out
//! crisp on high-density displays without the draw calls knowing about it.

use forage_core::NormalizedPosition;

use crate::error::{DriverError, Result};

/// Share of the logical width used as the base size of everything drawn.
const BASE_UNIT_RATIO: f64 = 0.01;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportGeometry {
    logical_width: f64,
    logical_height: f64,
    device_pixel_scale: f64,
}

impl ViewportGeometry {
    /// Creates a geometry; every dimension must be finite and positive.
    pub fn new(logical_width: f64, logical_height: f64, device_pixel_scale: f64) -> Result<Self> {
        let check = |name: &str, value: f64| {
            if value.is_finite() && value > 0.0 {
                Ok(())
            } else {
                Err(DriverError::configuration(format!(
                    "viewport {name} must be a positive number, got {value}"
                )))
            }
        };

        check("width", logical_width)?;
        check("height", logical_height)?;
        check("device pixel scale", device_pixel_scale)?;

        Ok(Self {
            logical_width,
            logical_height,
            device_pixel_scale,
        })
    }

    /// Gets the logical width in CSS pixels.
    pub fn logical_width(&self) -> f64 {
        self.logical_width
    }

    /// Gets the logical height in CSS pixels.
    pub fn logical_height(&self) -> f64 {
        self.logical_height
    }

    /// Gets the device pixels per logical pixel.
    pub fn device_pixel_scale(&self) -> f64 {
        self.device_pixel_scale
    }

    /// Backing store rounded from `logical * scale`; CSS size stays logical.
    pub fn surface_dimensions(&self) -> SurfaceDimensions {
        SurfaceDimensions {
            backing_width: (self.logical_width * self.device_pixel_scale).round() as u32,
            backing_height: (self.logical_height * self.device_pixel_scale).round() as u32,
            css_width: self.logical_width,
            css_height: self.logical_height,
        }
    }
}

/// Sizes a drawing surface has to take on during setup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceDimensions {
    /// Device pixels actually backing the surface.
    pub backing_width: u32,
    pub backing_height: u32,
    /// Size the surface occupies on screen, in logical pixels.
    pub css_width: f64,
    pub css_height: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordinateMapper {
    geometry: ViewportGeometry,
}

impl CoordinateMapper {
    /// Creates a mapper for the given viewport.
    pub fn new(geometry: ViewportGeometry) -> Self {
        Self { geometry }
    }

    /// Gets the viewport this mapper targets.
    pub fn geometry(&self) -> &ViewportGeometry {
        &self.geometry
    }

    /// No clamping: positions outside the unit square land off-canvas.
    pub fn to_pixels(&self, position: NormalizedPosition) -> (f64, f64) {
        (
            f64::from(position.x) * self.geometry.logical_width,
            f64::from(position.y) * self.geometry.logical_height,
        )
    }

    /// One percent of the logical width.
    pub fn base_unit(&self) -> f64 {
        BASE_UNIT_RATIO * self.geometry.logical_width
    }

    /// Base radius of an animal triangle.
    pub fn agent_size(&self) -> f64 {
        self.base_unit()
    }

    /// Radius of a food circle, half the agent size.
    pub fn food_radius(&self) -> f64 {
        self.base_unit() / 2.0
    }
}
