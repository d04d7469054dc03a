mod animal;
mod food;

pub use animal::Animal;
pub use food::Food;

use forage_nn::NetworkError;
use rand::RngCore;

use crate::config::SimConfig;
use crate::eye::Eye;
use crate::snapshot::WorldSnapshot;

#[derive(Debug, Clone)]
pub struct World {
    pub animals: Vec<Animal>,
    pub foods: Vec<Food>,
}

impl World {
    pub fn random(rng: &mut dyn RngCore, eye: &Eye, config: &SimConfig) -> Result<Self, NetworkError> {
        let animals = (0..config.world.num_animals)
            .map(|_| Animal::random(rng, eye, &config.animal))
            .collect::<Result<Vec<_>, _>>()?;

        let foods = (0..config.world.num_foods)
            .map(|_| Food::random(rng))
            .collect();

        Ok(Self { animals, foods })
    }

    /// Every animal touching a food eats it; the food reappears elsewhere.
    pub fn process_collisions(&mut self, rng: &mut dyn RngCore, food_size: f32) {
        for animal in &mut self.animals {
            for food in &mut self.foods {
                if animal.position.distance(&food.position) <= food_size {
                    animal.satiation += 1;
                    food.respawn(rng);
                }
            }
        }
    }

    pub fn process_movements(&mut self) {
        for animal in &mut self.animals {
            animal.advance();
        }
    }

    pub fn randomize_foods(&mut self, rng: &mut dyn RngCore) {
        for food in &mut self.foods {
            food.respawn(rng);
        }
    }

    pub fn snapshot(&self) -> WorldSnapshot {
        WorldSnapshot {
            foods: self.foods.iter().map(Food::snapshot).collect(),
            animals: self.animals.iter().map(Animal::snapshot).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SimConfig;
    use crate::snapshot::NormalizedPosition;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn world(seed: u64) -> (World, ChaCha8Rng) {
        let config = SimConfig::default();
        let eye = Eye::new(&config.eye);
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let world = World::random(&mut rng, &eye, &config).unwrap();
        (world, rng)
    }

    #[test]
    fn random_world_matches_config() {
        let (world, _) = world(1);
        assert_eq!(world.animals.len(), 40);
        assert_eq!(world.foods.len(), 60);

        let snapshot = world.snapshot();
        assert!(snapshot.find_violation().is_none());
        assert!(world.animals.iter().all(|a| a.satiation == 0));
    }

    #[test]
    fn animal_on_food_eats_it() {
        let (mut world, mut rng) = world(2);
        world.animals.truncate(1);
        world.foods.truncate(1);

        let spot = NormalizedPosition::new(0.4, 0.4);
        world.animals[0].position = spot;
        world.foods[0].position = NormalizedPosition::new(0.405, 0.4);

        world.process_collisions(&mut rng, 0.01);

        assert_eq!(world.animals[0].satiation, 1);
        assert_ne!(world.foods[0].position, NormalizedPosition::new(0.405, 0.4));
    }

    #[test]
    fn distant_food_is_left_alone() {
        let (mut world, mut rng) = world(3);
        world.animals.truncate(1);
        world.foods.truncate(1);

        world.animals[0].position = NormalizedPosition::new(0.1, 0.1);
        world.foods[0].position = NormalizedPosition::new(0.9, 0.9);

        world.process_collisions(&mut rng, 0.01);
        assert_eq!(world.animals[0].satiation, 0);
    }

    #[test]
    fn movement_wraps_around_edges() {
        let (mut world, _) = world(4);
        world.animals.truncate(1);

        let animal = &mut world.animals[0];
        animal.position = NormalizedPosition::new(0.999, 0.5);
        animal.rotation = 0.0;
        animal.speed = 0.005;

        world.process_movements();

        let position = world.animals[0].position;
        assert!((position.x - 0.004).abs() < 1e-4, "{position:?}");
        assert!((position.y - 0.5).abs() < 1e-6);
    }

    proptest! {
        #[test]
        fn movement_keeps_animals_in_the_arena(
            x in 0.0f32..1.0,
            y in 0.0f32..1.0,
            rotation in -20.0f32..20.0,
            speed in 0.0f32..0.5,
        ) {
            let (mut world, _) = world(5);
            world.animals.truncate(1);

            let animal = &mut world.animals[0];
            animal.position = NormalizedPosition::new(x, y);
            animal.rotation = rotation;
            animal.speed = speed;

            for _ in 0..10 {
                world.process_movements();
                prop_assert!(world.animals[0].position.is_normalized());
            }
        }
    }
}
