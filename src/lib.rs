//! # Forage
//!
//! Drives an evolving foraging simulation and draws it: a fixed number of
//! simulation steps per frame, one snapshot per frame, and a training
//! trigger that advances whole generations on demand.
//!
//! The [`driver`] module is host-agnostic. Hosts plug in a drawing surface
//! and a frame scheduler: the terminal host in [`app`] (native only) and
//! the browser host in `client` (wasm32 only).

#[cfg(not(target_arch = "wasm32"))]
pub mod app;
#[cfg(target_arch = "wasm32")]
pub mod client;
pub mod driver;
pub mod error;
pub mod model;
pub mod ui;

pub use error::DriverError;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

/// The simulation engine, exposed to JavaScript for pages that run their
/// own frame loop.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub struct Simulation {
    engine: forage_core::Simulation,
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
impl Simulation {
    #[wasm_bindgen(constructor)]
    pub fn new(seed: Option<u64>) -> Result<Simulation, JsValue> {
        console_error_panic_hook::set_once();

        let mut config = crate::model::config::AppConfig::default().sim;
        config.seed = seed;

        let engine = forage_core::Simulation::new(config)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(Simulation { engine })
    }

    pub fn step(&mut self) -> Result<(), JsValue> {
        use forage_core::SimulationEngine;
        self.engine
            .step()
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// `{ foods: [{x, y}], animals: [{x, y, rotation}] }`
    pub fn world(&self) -> Result<JsValue, JsValue> {
        use forage_core::SimulationEngine;
        let snapshot = self
            .engine
            .world()
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        serde_wasm_bindgen::to_value(&snapshot).map_err(Into::into)
    }

    pub fn train(&mut self) -> Result<String, JsValue> {
        use forage_core::SimulationEngine;
        self.engine
            .train()
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }
}
