//! # Forage Core
//!
//! The simulation side of forage: the engine contract the render loop talks
//! to, and the evolutionary engine that implements it.
//!
//! - [`engine::SimulationEngine`]: `step`, `world`, `train`
//! - [`simulation::Simulation`]: animals with neural-network brains foraging
//!   in a unit square, evolved by a genetic algorithm
//! - [`engine::ScriptedEngine`]: deterministic stand-in for driver tests
//! - [`engine::SharedEngine`]: lock around an engine shared across threads
//!
//! ## Example
//!
//! ```
//! use forage_core::config::SimConfig;
//! use forage_core::engine::SimulationEngine;
//! use forage_core::simulation::Simulation;
//!
//! let mut config = SimConfig::default();
//! config.seed = Some(42);
//! config.evolution.generation_length = 10;
//!
//! let mut sim = Simulation::new(config).unwrap();
//! sim.step().unwrap();
//! assert_eq!(sim.world().unwrap().animals.len(), 40);
//!
//! let summary = sim.train().unwrap();
//! assert!(summary.starts_with("min="));
//! ```

/// Neural steering of a single animal
pub mod brain;
/// Simulation parameters loaded from TOML
pub mod config;
/// Engine contract, shared handle and scripted stand-in
pub mod engine;
/// Sector-based food vision
pub mod eye;
/// Animal ↔ genetic algorithm bridge
pub mod individual;
/// Frame counters and tracing setup
pub mod metrics;
/// The evolutionary engine
pub mod simulation;
/// Renderer-facing world snapshots
pub mod snapshot;
/// Mutable world state owned by the engine
pub mod world;

pub use engine::{EngineCall, EngineError, ScriptedEngine, SharedEngine, SimulationEngine};
pub use metrics::{init_file_logging, init_logging, Metrics};
pub use simulation::Simulation;
pub use snapshot::{Animal, Food, NormalizedPosition, WorldSnapshot};
