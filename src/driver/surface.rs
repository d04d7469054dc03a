//! Drawing surfaces the render loop can target.
//!
//! Surfaces are wrapped rather than extended: each backend (browser canvas,
//! terminal, in-memory list) implements [`RenderTarget`] on its own type.

use std::f64::consts::PI;

use super::viewport::SurfaceDimensions;
use crate::error::Result;

/// Ratio between the apex radius and the base radius of an agent triangle.
pub const APEX_RATIO: f64 = 1.5;

pub trait RenderTarget {
    /// One-time setup: size the backing store to `dims` and scale the
    /// drawing context by `scale` so later calls use logical pixels.
    fn configure(&mut self, dims: &SurfaceDimensions, scale: f64) -> Result<()>;

    fn clear(&mut self, width: f64, height: f64) -> Result<()>;

    fn fill_circle(&mut self, x: f64, y: f64, radius: f64) -> Result<()>;

    /// Filled and outlined triangle centered on `(x, y)`, apex pointing
    /// along `rotation`. See [`triangle_vertices`].
    fn draw_triangle(&mut self, x: f64, y: f64, size: f64, rotation: f64) -> Result<()>;

    /// Called once a frame is fully drawn. Immediate-mode surfaces have
    /// nothing to do here.
    fn present(&mut self) -> Result<()> {
        Ok(())
    }
}

/// Apex at `rotation` and radius `1.5 * size`; base vertices at
/// `rotation + 2π/3` and `rotation + 4π/3`, radius `size`.
pub fn triangle_vertices(x: f64, y: f64, size: f64, rotation: f64) -> [(f64, f64); 3] {
    let vertex = |angle: f64, radius: f64| (x + angle.cos() * radius, y + angle.sin() * radius);

    [
        vertex(rotation, size * APEX_RATIO),
        vertex(rotation + 2.0 / 3.0 * PI, size),
        vertex(rotation + 4.0 / 3.0 * PI, size),
    ]
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCommand {
    Clear { width: f64, height: f64 },
    Circle { x: f64, y: f64, radius: f64 },
    Triangle { x: f64, y: f64, size: f64, rotation: f64 },
}

/// Surface that records draw commands instead of rasterizing them.
///
/// `clear` starts a new frame: the list only ever holds the commands of the
/// frame being drawn (or the last one presented).
#[derive(Debug, Clone, Default)]
pub struct DrawList {
    commands: Vec<DrawCommand>,
    dimensions: Option<SurfaceDimensions>,
    scale: f64,
    frames_presented: u64,
}

impl DrawList {
    /// Creates an empty, unconfigured list.
    pub fn new() -> Self {
        Self {
            scale: 1.0,
            ..Self::default()
        }
    }

    /// Gets the commands of the current frame, in draw order.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Gets the dimensions passed to `configure`, if it was called.
    pub fn dimensions(&self) -> Option<&SurfaceDimensions> {
        self.dimensions.as_ref()
    }

    /// Gets the context scale; 1.0 until configured.
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Gets the number of `present` calls.
    pub fn frames_presented(&self) -> u64 {
        self.frames_presented
    }

    /// Circle commands of the current frame.
    pub fn circles(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Circle { .. }))
    }

    /// Triangle commands of the current frame.
    pub fn triangles(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Triangle { .. }))
    }
}

impl RenderTarget for DrawList {
    fn configure(&mut self, dims: &SurfaceDimensions, scale: f64) -> Result<()> {
        self.dimensions = Some(*dims);
        self.scale = scale;
        Ok(())
    }

    fn clear(&mut self, width: f64, height: f64) -> Result<()> {
        self.commands.clear();
        self.commands.push(DrawCommand::Clear { width, height });
        Ok(())
    }

    fn fill_circle(&mut self, x: f64, y: f64, radius: f64) -> Result<()> {
        self.commands.push(DrawCommand::Circle { x, y, radius });
        Ok(())
    }

    fn draw_triangle(&mut self, x: f64, y: f64, size: f64, rotation: f64) -> Result<()> {
        self.commands.push(DrawCommand::Triangle {
            x,
            y,
            size,
            rotation,
        });
        Ok(())
    }

    fn present(&mut self) -> Result<()> {
        self.frames_presented += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: (f64, f64), b: (f64, f64)) -> bool {
        (a.0 - b.0).abs() < 1e-9 && (a.1 - b.1).abs() < 1e-9
    }

    #[test]
    fn triangle_at_rotation_zero() {
        let [apex, left, right] = triangle_vertices(0.0, 0.0, 10.0, 0.0);

        assert!(close(apex, (15.0, 0.0)));
        assert!(close(
            left,
            (10.0 * (2.0 * PI / 3.0).cos(), 10.0 * (2.0 * PI / 3.0).sin())
        ));
        assert!(close(
            right,
            (10.0 * (4.0 * PI / 3.0).cos(), 10.0 * (4.0 * PI / 3.0).sin())
        ));
    }

    #[test]
    fn triangle_is_translated_and_rotated() {
        let [apex, _, _] = triangle_vertices(100.0, 50.0, 2.0, PI / 2.0);
        assert!(close(apex, (100.0, 53.0)));
    }

    #[test]
    fn clear_starts_a_new_frame() {
        let mut list = DrawList::new();
        list.clear(10.0, 10.0).unwrap();
        list.fill_circle(1.0, 1.0, 1.0).unwrap();
        list.clear(10.0, 10.0).unwrap();

        assert_eq!(
            list.commands(),
            &[DrawCommand::Clear {
                width: 10.0,
                height: 10.0
            }]
        );
    }

    #[test]
    fn configure_records_dimensions() {
        let mut list = DrawList::new();
        let dims = SurfaceDimensions {
            backing_width: 200,
            backing_height: 100,
            css_width: 100.0,
            css_height: 50.0,
        };
        list.configure(&dims, 2.0).unwrap();

        assert_eq!(list.dimensions(), Some(&dims));
        assert_eq!(list.scale(), 2.0);
    }
}
