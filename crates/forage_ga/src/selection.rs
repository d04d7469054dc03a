use rand::seq::SliceRandom;
use rand::distributions::WeightedError;
use rand::RngCore;

use crate::individual::Individual;
use crate::GaError;

pub trait SelectionMethod {
    fn select<'a, I>(&self, rng: &mut dyn RngCore, population: &'a [I]) -> Result<&'a I, GaError>
    where
        I: Individual;
}

/// Fitness-proportionate selection.
///
/// A population whose fitness is zero everywhere (nobody ate anything yet)
/// degrades to uniform selection instead of failing.
#[derive(Clone, Debug, Default)]
pub struct RouletteWheelSelection;

impl SelectionMethod for RouletteWheelSelection {
    fn select<'a, I>(&self, rng: &mut dyn RngCore, population: &'a [I]) -> Result<&'a I, GaError>
    where
        I: Individual,
    {
        match population.choose_weighted(rng, |individual| individual.fitness()) {
            Ok(individual) => Ok(individual),
            Err(WeightedError::NoItem) => Err(GaError::EmptyPopulation),
            Err(WeightedError::AllWeightsZero) => {
                population.choose(rng).ok_or(GaError::EmptyPopulation)
            }
            Err(err) => Err(GaError::InvalidFitness(err.to_string())),
        }
    }
}
