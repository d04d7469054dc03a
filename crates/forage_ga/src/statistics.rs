use serde::{Deserialize, Serialize};
use std::fmt;

use crate::individual::Individual;

/// Fitness summary of one generation, taken before it was replaced.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Statistics {
    pub min_fitness: f32,
    pub max_fitness: f32,
    pub avg_fitness: f32,
    pub median_fitness: f32,
}

impl Statistics {
    /// Returns `None` for an empty population.
    pub fn new<I>(population: &[I]) -> Option<Self>
    where
        I: Individual,
    {
        if population.is_empty() {
            return None;
        }

        let mut fitnesses: Vec<f32> = population.iter().map(Individual::fitness).collect();
        fitnesses.sort_by(f32::total_cmp);

        let len = fitnesses.len();
        let median_fitness = if len % 2 == 0 {
            (fitnesses[len / 2 - 1] + fitnesses[len / 2]) / 2.0
        } else {
            fitnesses[len / 2]
        };

        Some(Self {
            min_fitness: fitnesses[0],
            max_fitness: fitnesses[len - 1],
            avg_fitness: fitnesses.iter().sum::<f32>() / len as f32,
            median_fitness,
        })
    }
}

impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "min={:.2}, max={:.2}, avg={:.2}, median={:.2}",
            self.min_fitness, self.max_fitness, self.avg_fitness, self.median_fitness
        )
    }
}
