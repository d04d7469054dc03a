//! # Forage GA
//!
//! Generic genetic algorithm: select two parents, cross them over, mutate
//! the child, repeat until the next generation is as large as the current
//! one.
//!
//! The algorithm only knows about [`Individual`]s and their
//! [`Chromosome`]s; the simulation decides what a chromosome encodes and how
//! fitness is measured.

use rand::RngCore;
use thiserror::Error;

pub mod chromosome;
pub mod crossover;
pub mod individual;
pub mod mutation;
pub mod selection;
pub mod statistics;

pub use chromosome::Chromosome;
pub use crossover::{CrossoverMethod, UniformCrossover};
pub use individual::Individual;
pub use mutation::{GaussianMutation, MutationMethod};
pub use selection::{RouletteWheelSelection, SelectionMethod};
pub use statistics::Statistics;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GaError {
    #[error("cannot evolve an empty population")]
    EmptyPopulation,

    #[error("invalid fitness value: {0}")]
    InvalidFitness(String),

    #[error("parents have different chromosome lengths ({left} vs {right})")]
    ChromosomeLengthMismatch { left: usize, right: usize },

    #[error("mutation chance must be within [0, 1], got {0}")]
    InvalidChance(f32),
}

pub struct GeneticAlgorithm<S, C, M> {
    selection_method: S,
    crossover_method: C,
    mutation_method: M,
}

impl<S, C, M> GeneticAlgorithm<S, C, M>
where
    S: SelectionMethod,
    C: CrossoverMethod,
    M: MutationMethod,
{
    pub fn new(selection_method: S, crossover_method: C, mutation_method: M) -> Self {
        Self {
            selection_method,
            crossover_method,
            mutation_method,
        }
    }

    pub fn evolve<I>(
        &self,
        rng: &mut dyn RngCore,
        population: &[I],
    ) -> Result<(Vec<I>, Statistics), GaError>
    where
        I: Individual,
    {
        let stats = Statistics::new(population).ok_or(GaError::EmptyPopulation)?;

        let new_population = (0..population.len())
            .map(|_| {
                let parent_a = self.selection_method.select(rng, population)?.chromosome();
                let parent_b = self.selection_method.select(rng, population)?.chromosome();

                let mut child = self.crossover_method.crossover(rng, parent_a, parent_b)?;
                self.mutation_method.mutate(rng, &mut child);

                Ok(I::create(child))
            })
            .collect::<Result<Vec<_>, GaError>>()?;

        Ok((new_population, stats))
    }
}
