use rand::{Rng, RngCore};

use crate::chromosome::Chromosome;
use crate::GaError;

pub trait MutationMethod {
    fn mutate(&self, rng: &mut dyn RngCore, child: &mut Chromosome);
}

#[derive(Clone, Debug)]
pub struct GaussianMutation {
    /// Probability of touching a gene:
    /// - 0.0 = no genes will be touched
    /// - 1.0 = all genes will be touched
    chance: f32,

    /// Magnitude of the change:
    /// - 0.0 = touched genes are left as they are
    /// - 3.0 = touched genes move by at most 3.0 either way
    coeff: f32,
}

impl GaussianMutation {
    pub fn new(chance: f32, coeff: f32) -> Result<Self, GaError> {
        if !(0.0..=1.0).contains(&chance) {
            return Err(GaError::InvalidChance(chance));
        }

        Ok(Self { chance, coeff })
    }

    pub fn chance(&self) -> f32 {
        self.chance
    }

    pub fn coeff(&self) -> f32 {
        self.coeff
    }
}

impl MutationMethod for GaussianMutation {
    fn mutate(&self, rng: &mut dyn RngCore, child: &mut Chromosome) {
        for gene in child.iter_mut() {
            let sign = if rng.gen_bool(0.5) { -1.0 } else { 1.0 };

            if rng.gen_bool(self.chance as f64) {
                *gene += sign * self.coeff * rng.gen::<f32>();
            }
        }
    }
}
