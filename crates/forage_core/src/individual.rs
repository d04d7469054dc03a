use forage_ga::{Chromosome, Individual};
use forage_nn::NetworkError;
use rand::RngCore;

use crate::config::AnimalConfig;
use crate::eye::Eye;
use crate::world::Animal;

/// Bridges animals and the genetic algorithm: fitness is how much an animal
/// ate, the chromosome is its brain.
pub struct AnimalIndividual {
    fitness: f32,
    chromosome: Chromosome,
}

impl AnimalIndividual {
    pub fn from_animal(animal: &Animal) -> Self {
        Self {
            fitness: animal.satiation as f32,
            chromosome: animal.as_chromosome(),
        }
    }

    pub fn into_animal(
        self,
        rng: &mut dyn RngCore,
        eye: &Eye,
        config: &AnimalConfig,
    ) -> Result<Animal, NetworkError> {
        Animal::from_chromosome(self.chromosome, rng, eye, config)
    }
}

impl Individual for AnimalIndividual {
    fn fitness(&self) -> f32 {
        self.fitness
    }

    fn chromosome(&self) -> &Chromosome {
        &self.chromosome
    }

    fn create(chromosome: Chromosome) -> Self {
        Self {
            fitness: 0.0,
            chromosome,
        }
    }
}
