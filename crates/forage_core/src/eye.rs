use std::f32::consts::PI;

use crate::config::EyeConfig;
use crate::snapshot::NormalizedPosition;
use crate::world::Food;

/// Splits the field of view into `cells` sectors and reports, per sector,
/// how close the nearest foods are.
#[derive(Debug, Clone, PartialEq)]
pub struct Eye {
    fov_range: f32,
    fov_angle: f32,
    cells: usize,
}

impl Eye {
    pub fn new(config: &EyeConfig) -> Self {
        Self {
            fov_range: config.fov_range,
            fov_angle: config.fov_angle,
            cells: config.cells,
        }
    }

    pub fn cells(&self) -> usize {
        self.cells
    }

    /// Each food within range and inside the field of view adds
    /// `(fov_range - distance) / fov_range` to the cell it falls into.
    /// Cell 0 is the leftmost sector (most negative relative angle).
    pub fn process_vision(
        &self,
        position: NormalizedPosition,
        rotation: f32,
        foods: &[Food],
    ) -> Vec<f32> {
        let mut cells = vec![0.0; self.cells];

        for food in foods {
            let dx = food.position.x - position.x;
            let dy = food.position.y - position.y;
            let dist = dx.hypot(dy);

            if dist >= self.fov_range {
                continue;
            }

            let angle = wrap_angle(dy.atan2(dx) - rotation);
            if angle < -self.fov_angle / 2.0 || angle > self.fov_angle / 2.0 {
                continue;
            }

            let angle = angle + self.fov_angle / 2.0;
            let cell = (angle / self.fov_angle) * self.cells as f32;
            let cell = (cell as usize).min(self.cells - 1);

            cells[cell] += (self.fov_range - dist) / self.fov_range;
        }

        cells
    }
}

/// Wraps an angle into `[-π, π)`.
fn wrap_angle(angle: f32) -> f32 {
    (angle + PI).rem_euclid(2.0 * PI) - PI
}
