use rand::RngCore;
use serde::{Deserialize, Serialize};

use crate::neuron::Neuron;
use crate::NetworkError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layer {
    pub neurons: Vec<Neuron>,
}

impl Layer {
    pub fn random(rng: &mut dyn RngCore, input_size: usize, output_size: usize) -> Self {
        let neurons = (0..output_size)
            .map(|_| Neuron::random(rng, input_size))
            .collect();

        Self { neurons }
    }

    pub fn from_weights(
        input_size: usize,
        output_size: usize,
        weights: &mut dyn Iterator<Item = f32>,
    ) -> Result<Self, NetworkError> {
        let neurons = (0..output_size)
            .map(|_| Neuron::from_weights(input_size, weights))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { neurons })
    }

    pub fn propagate(&self, inputs: &[f32]) -> Result<Vec<f32>, NetworkError> {
        self.neurons
            .iter()
            .map(|neuron| neuron.propagate(inputs))
            .collect()
    }
}
