use forage_ga::Chromosome;
use forage_nn::{LayerTopology, Network, NetworkError};
use rand::RngCore;

use crate::config::AnimalConfig;
use crate::eye::Eye;

/// Steering decision produced by one brain evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Steering {
    pub speed_delta: f32,
    pub rotation_delta: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Brain {
    nn: Network,
}

impl Brain {
    pub fn random(rng: &mut dyn RngCore, eye: &Eye) -> Result<Self, NetworkError> {
        Ok(Self {
            nn: Network::random(rng, &Self::topology(eye))?,
        })
    }

    pub fn from_chromosome(chromosome: Chromosome, eye: &Eye) -> Result<Self, NetworkError> {
        Ok(Self {
            nn: Network::from_weights(&Self::topology(eye), chromosome)?,
        })
    }

    pub fn as_chromosome(&self) -> Chromosome {
        self.nn.weights().collect()
    }

    /// Feeds the eye's cells through the network. The first output is the
    /// speed delta, the second the rotation delta, each clamped to the
    /// animal's acceleration limits.
    pub fn think(&self, vision: &[f32], config: &AnimalConfig) -> Result<Steering, NetworkError> {
        match self.nn.propagate(vision)?.as_slice() {
            &[speed, rotation] => Ok(Steering {
                speed_delta: speed.clamp(-config.speed_accel, config.speed_accel),
                rotation_delta: rotation.clamp(-config.rotation_accel, config.rotation_accel),
            }),
            other => Err(NetworkError::OutputSizeMismatch {
                expected: 2,
                actual: other.len(),
            }),
        }
    }

    fn topology(eye: &Eye) -> [LayerTopology; 3] {
        [
            LayerTopology {
                neurons: eye.cells(),
            },
            LayerTopology {
                neurons: 2 * eye.cells(),
            },
            LayerTopology { neurons: 2 },
        ]
    }
}
