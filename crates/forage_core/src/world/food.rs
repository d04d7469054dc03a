use rand::{Rng, RngCore};

use crate::snapshot::{self, NormalizedPosition};

#[derive(Debug, Clone, PartialEq)]
pub struct Food {
    pub position: NormalizedPosition,
}

impl Food {
    pub fn random(rng: &mut dyn RngCore) -> Self {
        Self {
            position: random_position(rng),
        }
    }

    pub fn respawn(&mut self, rng: &mut dyn RngCore) {
        self.position = random_position(rng);
    }

    pub fn snapshot(&self) -> snapshot::Food {
        snapshot::Food {
            position: self.position,
        }
    }
}

pub(crate) fn random_position(rng: &mut dyn RngCore) -> NormalizedPosition {
    NormalizedPosition::new(rng.gen(), rng.gen())
}
