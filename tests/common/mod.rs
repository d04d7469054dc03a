pub mod macros;

use forage_core::{Animal, Food, NormalizedPosition, ScriptedEngine, WorldSnapshot};
use forage_lib::driver::{CoordinateMapper, RenderLoop, ViewportGeometry};

#[allow(dead_code)]
#[derive(Default)]
pub struct SnapshotBuilder {
    snapshot: WorldSnapshot,
}

#[allow(dead_code)]
impl SnapshotBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_food(mut self, x: f32, y: f32) -> Self {
        self.snapshot.foods.push(Food {
            position: NormalizedPosition::new(x, y),
        });
        self
    }

    pub fn with_animal(mut self, x: f32, y: f32, rotation: f32) -> Self {
        self.snapshot.animals.push(Animal {
            position: NormalizedPosition::new(x, y),
            rotation,
        });
        self
    }

    pub fn build(self) -> WorldSnapshot {
        self.snapshot
    }

    /// A scripted engine that keeps returning this snapshot.
    pub fn engine(self) -> ScriptedEngine {
        ScriptedEngine::new().with_snapshot(self.build())
    }
}

#[allow(dead_code)]
pub fn render_loop(width: f64, height: f64, steps_per_frame: usize) -> RenderLoop {
    let geometry = ViewportGeometry::new(width, height, 1.0).expect("valid geometry");
    RenderLoop::new(CoordinateMapper::new(geometry), steps_per_frame).expect("valid steps")
}
