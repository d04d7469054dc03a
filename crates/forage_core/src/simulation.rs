//! The evolutionary engine: animals with neural brains forage for food, and
//! every `generation_length` steps the genetic algorithm breeds the next
//! population from the best eaters.

use forage_ga::{
    GaussianMutation, GeneticAlgorithm, RouletteWheelSelection, Statistics, UniformCrossover,
};
use forage_nn::NetworkError;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::config::SimConfig;
use crate::engine::{EngineError, SimulationEngine};
use crate::eye::Eye;
use crate::individual::AnimalIndividual;
use crate::snapshot::WorldSnapshot;
use crate::world::{Animal, World};

type Evolution = GeneticAlgorithm<RouletteWheelSelection, UniformCrossover, GaussianMutation>;

pub struct Simulation {
    config: SimConfig,
    rng: ChaCha8Rng,
    eye: Eye,
    world: World,
    ga: Evolution,
    age: usize,
    generation: u64,
}

impl Simulation {
    pub fn new(config: SimConfig) -> Result<Self, EngineError> {
        config.validate()?;

        let seed = config.seed.unwrap_or_else(rand::random);
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let eye = Eye::new(&config.eye);
        let world = World::random(&mut rng, &eye, &config)?;
        let ga = GeneticAlgorithm::new(
            RouletteWheelSelection,
            UniformCrossover,
            GaussianMutation::new(
                config.evolution.mutation_chance,
                config.evolution.mutation_coeff,
            )?,
        );

        tracing::info!(
            seed,
            animals = world.animals.len(),
            foods = world.foods.len(),
            "Simulation created"
        );

        Ok(Self {
            config,
            rng,
            eye,
            world,
            ga,
            age: 0,
            generation: 0,
        })
    }

    pub fn world_state(&self) -> &World {
        &self.world
    }

    /// Steps taken in the current generation.
    pub fn age(&self) -> usize {
        self.age
    }

    /// Number of completed generations.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// One simulation step. Returns the statistics of the generation that
    /// just ended when this step triggered an evolution.
    pub fn advance(&mut self) -> Result<Option<Statistics>, EngineError> {
        self.world
            .process_collisions(&mut self.rng, self.config.world.food_size);
        self.process_brains()?;
        self.world.process_movements();

        self.age += 1;
        if self.age > self.config.evolution.generation_length {
            return self.evolve().map(Some);
        }
        Ok(None)
    }

    pub fn evolve(&mut self) -> Result<Statistics, EngineError> {
        let current: Vec<AnimalIndividual> = self
            .world
            .animals
            .iter()
            .map(AnimalIndividual::from_animal)
            .collect();

        let (evolved, stats) = self.ga.evolve(&mut self.rng, &current)?;

        self.world.animals = evolved
            .into_iter()
            .map(|individual| individual.into_animal(&mut self.rng, &self.eye, &self.config.animal))
            .collect::<Result<Vec<_>, _>>()?;
        self.world.randomize_foods(&mut self.rng);

        self.age = 0;
        self.generation += 1;

        tracing::info!(generation = self.generation, %stats, "Generation evolved");
        Ok(stats)
    }

    fn process_brains(&mut self) -> Result<(), EngineError> {
        let eye = &self.eye;
        let foods = &self.world.foods;
        let config = &self.config.animal;

        let think = |animal: &mut Animal| -> Result<(), NetworkError> {
            let vision = eye.process_vision(animal.position, animal.rotation, foods);
            let steering = animal.brain.think(&vision, config)?;
            animal.steer(steering, config);
            Ok(())
        };

        #[cfg(feature = "parallel")]
        self.world.animals.par_iter_mut().try_for_each(think)?;
        #[cfg(not(feature = "parallel"))]
        self.world.animals.iter_mut().try_for_each(think)?;

        Ok(())
    }
}

impl SimulationEngine for Simulation {
    fn step(&mut self) -> Result<(), EngineError> {
        self.advance().map(|_| ())
    }

    fn world(&self) -> Result<WorldSnapshot, EngineError> {
        Ok(self.world.snapshot())
    }

    fn train(&mut self) -> Result<String, EngineError> {
        loop {
            if let Some(stats) = self.advance()? {
                return Ok(stats.to_string());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_config(seed: u64) -> SimConfig {
        let mut config = SimConfig {
            seed: Some(seed),
            ..SimConfig::default()
        };
        config.world.num_animals = 6;
        config.world.num_foods = 8;
        config.evolution.generation_length = 20;
        config
    }

    #[test]
    fn same_seed_same_world() {
        let mut a = Simulation::new(small_config(42)).unwrap();
        let mut b = Simulation::new(small_config(42)).unwrap();

        for _ in 0..50 {
            a.step().unwrap();
            b.step().unwrap();
        }

        assert_eq!(a.world().unwrap(), b.world().unwrap());
        assert_eq!(a.generation(), b.generation());
    }

    #[test]
    fn world_does_not_change_state() {
        let sim = Simulation::new(small_config(1)).unwrap();
        let first = sim.world().unwrap();
        let second = sim.world().unwrap();
        assert_eq!(first, second);
        assert_eq!(sim.age(), 0);
    }

    #[test]
    fn generation_rolls_over_after_its_length() {
        let mut sim = Simulation::new(small_config(3)).unwrap();

        for _ in 0..20 {
            assert!(sim.advance().unwrap().is_none());
        }
        assert_eq!(sim.age(), 20);

        let stats = sim.advance().unwrap();
        assert!(stats.is_some());
        assert_eq!(sim.generation(), 1);
        assert_eq!(sim.age(), 0);
    }

    #[test]
    fn train_finishes_a_generation() {
        let mut sim = Simulation::new(small_config(5)).unwrap();
        sim.step().unwrap();

        let summary = sim.train().unwrap();
        assert!(summary.starts_with("min="), "{summary}");
        assert!(summary.contains("avg="));
        assert_eq!(sim.generation(), 1);

        let world = sim.world_state();
        assert_eq!(world.animals.len(), 6);
        assert_eq!(world.foods.len(), 8);
        assert!(world.animals.iter().all(|a| a.satiation == 0));
    }

    #[test]
    fn snapshot_stays_in_the_arena() {
        let mut sim = Simulation::new(small_config(8)).unwrap();
        for _ in 0..100 {
            sim.step().unwrap();
        }
        assert!(sim.world().unwrap().find_violation().is_none());
    }

    #[test]
    fn invalid_config_is_rejected() {
        let mut config = small_config(1);
        config.world.num_animals = 0;
        assert!(matches!(
            Simulation::new(config),
            Err(EngineError::InvalidConfig(_))
        ));
    }
}
