//! Read-only views of the world handed to renderers.
//!
//! A snapshot carries no entity identity: the n-th animal of one snapshot is
//! not necessarily the n-th animal of the next one.

use serde::{Deserialize, Serialize};

/// Position relative to the arena, nominally within `[0, 1]` on both axes.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq)]
pub struct NormalizedPosition {
    pub x: f32,
    pub y: f32,
}

impl NormalizedPosition {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn distance(&self, other: &NormalizedPosition) -> f32 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Both coordinates finite and inside the unit square.
    pub fn is_normalized(&self) -> bool {
        let in_range = |v: f32| v.is_finite() && (0.0..=1.0).contains(&v);
        in_range(self.x) && in_range(self.y)
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct Food {
    #[serde(flatten)]
    pub position: NormalizedPosition,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct Animal {
    #[serde(flatten)]
    pub position: NormalizedPosition,
    /// Heading in radians; not wrapped into any canonical range.
    pub rotation: f32,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct WorldSnapshot {
    pub foods: Vec<Food>,
    pub animals: Vec<Animal>,
}

impl WorldSnapshot {
    /// Describes the first entity that violates the coordinate contract,
    /// if any.
    pub fn find_violation(&self) -> Option<String> {
        if let Some((i, food)) = self
            .foods
            .iter()
            .enumerate()
            .find(|(_, food)| !food.position.is_normalized())
        {
            return Some(format!("food #{i} at {:?}", food.position));
        }

        self.animals
            .iter()
            .enumerate()
            .find(|(_, animal)| !animal.position.is_normalized() || !animal.rotation.is_finite())
            .map(|(i, animal)| {
                format!(
                    "animal #{i} at {:?} rotated {}",
                    animal.position, animal.rotation
                )
            })
    }
}
