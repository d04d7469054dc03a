//! Simulation parameters.
//!
//! Maps onto the `[sim]` table of `config.toml`. Every field has a default,
//! so a config file only needs to name what it changes.
//!
//! ## Example
//!
//! ```toml
//! [sim]
//! seed = 42
//!
//! [sim.world]
//! num_animals = 40
//! num_foods = 60
//!
//! [sim.evolution]
//! generation_length = 2500
//! mutation_chance = 0.01
//! ```

use serde::{Deserialize, Serialize};
use std::f32::consts::{FRAC_PI_2, FRAC_PI_4, PI};

use crate::engine::EngineError;

/// Arena population and food size.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct WorldConfig {
    pub num_animals: usize,
    pub num_foods: usize,
    /// Distance at which an animal eats a food.
    pub food_size: f32,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            num_animals: 40,
            num_foods: 60,
            food_size: 0.01,
        }
    }
}

/// Movement limits applied to every animal's brain output.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct AnimalConfig {
    pub speed_min: f32,
    pub speed_max: f32,
    pub speed_accel: f32,
    pub rotation_accel: f32,
}

impl Default for AnimalConfig {
    fn default() -> Self {
        Self {
            speed_min: 0.001,
            speed_max: 0.005,
            speed_accel: 0.2,
            rotation_accel: FRAC_PI_2,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct EyeConfig {
    /// How far an animal sees, in arena units.
    pub fov_range: f32,
    /// Total angle of vision, centered on the heading.
    pub fov_angle: f32,
    /// Number of photoreceptors the field of view is split into.
    pub cells: usize,
}

impl Default for EyeConfig {
    fn default() -> Self {
        Self {
            fov_range: 0.25,
            fov_angle: PI + FRAC_PI_4,
            cells: 9,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct EvolutionConfig {
    /// Steps after which a generation ends on its own.
    pub generation_length: usize,
    pub mutation_chance: f32,
    pub mutation_coeff: f32,
}

impl Default for EvolutionConfig {
    fn default() -> Self {
        Self {
            generation_length: 2500,
            mutation_chance: 0.01,
            mutation_coeff: 0.3,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct SimConfig {
    /// Fixed seed for reproducible runs; random when absent.
    pub seed: Option<u64>,
    pub world: WorldConfig,
    pub animal: AnimalConfig,
    pub eye: EyeConfig,
    pub evolution: EvolutionConfig,
}

impl SimConfig {
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.world.num_animals == 0 {
            return Err(EngineError::invalid_config("world.num_animals must be positive"));
        }
        if !(self.world.food_size > 0.0) {
            return Err(EngineError::invalid_config("world.food_size must be positive"));
        }
        if !(self.animal.speed_min >= 0.0 && self.animal.speed_min <= self.animal.speed_max) {
            return Err(EngineError::invalid_config(
                "animal.speed_min must be within [0, speed_max]",
            ));
        }
        if !(self.animal.speed_accel >= 0.0 && self.animal.rotation_accel >= 0.0) {
            return Err(EngineError::invalid_config(
                "animal accelerations must not be negative",
            ));
        }
        if self.eye.cells == 0 {
            return Err(EngineError::invalid_config("eye.cells must be positive"));
        }
        if !(self.eye.fov_range > 0.0) {
            return Err(EngineError::invalid_config("eye.fov_range must be positive"));
        }
        if !(self.eye.fov_angle > 0.0 && self.eye.fov_angle <= 2.0 * PI) {
            return Err(EngineError::invalid_config(
                "eye.fov_angle must be within (0, 2π]",
            ));
        }
        if self.evolution.generation_length == 0 {
            return Err(EngineError::invalid_config(
                "evolution.generation_length must be positive",
            ));
        }
        if !(0.0..=1.0).contains(&self.evolution.mutation_chance) {
            return Err(EngineError::invalid_config(
                "evolution.mutation_chance must be within [0, 1]",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(SimConfig::default().validate().is_ok());
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let config: SimConfig = toml::from_str(
            r#"
            seed = 7

            [world]
            num_animals = 3

            [eye]
            cells = 5
            "#,
        )
        .unwrap();

        assert_eq!(config.seed, Some(7));
        assert_eq!(config.world.num_animals, 3);
        assert_eq!(config.world.num_foods, 60);
        assert_eq!(config.eye.cells, 5);
        assert_eq!(config.evolution, EvolutionConfig::default());
    }

    #[test]
    fn rejects_nonsense() {
        let mut config = SimConfig::default();
        config.eye.cells = 0;
        assert!(matches!(config.validate(), Err(EngineError::InvalidConfig(_))));

        let mut config = SimConfig::default();
        config.animal.speed_min = 1.0;
        assert!(config.validate().is_err());

        let mut config = SimConfig::default();
        config.evolution.mutation_chance = 2.0;
        assert!(config.validate().is_err());

        let mut config = SimConfig::default();
        config.world.food_size = f32::NAN;
        assert!(config.validate().is_err());
    }
}
