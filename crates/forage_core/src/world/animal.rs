use forage_ga::Chromosome;
use forage_nn::NetworkError;
use rand::{Rng, RngCore};
use std::f32::consts::PI;

use super::food::random_position;
use crate::brain::{Brain, Steering};
use crate::config::AnimalConfig;
use crate::eye::Eye;
use crate::snapshot::{self, NormalizedPosition};

#[derive(Debug, Clone, PartialEq)]
pub struct Animal {
    pub position: NormalizedPosition,
    pub rotation: f32,
    pub speed: f32,
    pub brain: Brain,
    /// Foods eaten during the current generation.
    pub satiation: usize,
}

impl Animal {
    pub fn random(
        rng: &mut dyn RngCore,
        eye: &Eye,
        config: &AnimalConfig,
    ) -> Result<Self, NetworkError> {
        let brain = Brain::random(rng, eye)?;
        Ok(Self::new(rng, brain, config))
    }

    pub fn from_chromosome(
        chromosome: Chromosome,
        rng: &mut dyn RngCore,
        eye: &Eye,
        config: &AnimalConfig,
    ) -> Result<Self, NetworkError> {
        let brain = Brain::from_chromosome(chromosome, eye)?;
        Ok(Self::new(rng, brain, config))
    }

    pub fn as_chromosome(&self) -> Chromosome {
        self.brain.as_chromosome()
    }

    fn new(rng: &mut dyn RngCore, brain: Brain, config: &AnimalConfig) -> Self {
        Self {
            position: random_position(rng),
            rotation: rng.gen_range(-PI..PI),
            speed: config.speed_max,
            brain,
            satiation: 0,
        }
    }

    pub fn steer(&mut self, steering: Steering, config: &AnimalConfig) {
        self.speed = (self.speed + steering.speed_delta).clamp(config.speed_min, config.speed_max);
        self.rotation += steering.rotation_delta;
    }

    /// Moves along the heading and wraps around the arena edges.
    pub fn advance(&mut self) {
        let (sin, cos) = self.rotation.sin_cos();
        self.position.x = (self.position.x + cos * self.speed).rem_euclid(1.0);
        self.position.y = (self.position.y + sin * self.speed).rem_euclid(1.0);
    }

    pub fn snapshot(&self) -> snapshot::Animal {
        snapshot::Animal {
            position: self.position,
            rotation: self.rotation,
        }
    }
}
