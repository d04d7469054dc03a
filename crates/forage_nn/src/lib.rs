//! # Forage NN
//!
//! A small fully-connected feed-forward network used as the brain of each
//! animal. Every neuron is a ReLU unit with its own bias.
//!
//! The network can be flattened into a single list of genes with
//! [`Network::weights`] and rebuilt from one with [`Network::from_weights`],
//! which is how the genetic algorithm reads and writes brains.
//!
//! ```
//! use forage_nn::{LayerTopology, Network};
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//!
//! let mut rng = ChaCha8Rng::seed_from_u64(42);
//! let topology = [LayerTopology { neurons: 3 }, LayerTopology { neurons: 2 }];
//! let network = Network::random(&mut rng, &topology).unwrap();
//!
//! let outputs = network.propagate(&[0.0, 0.5, 1.0]).unwrap();
//! assert_eq!(outputs.len(), 2);
//! ```

use rand::RngCore;
use serde::{Deserialize, Serialize};
use thiserror::Error;

mod layer;
mod neuron;

pub use layer::Layer;
pub use neuron::Neuron;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NetworkError {
    #[error("a network needs at least two layers, got {0}")]
    TooFewLayers(usize),

    #[error("expected {expected} inputs, got {actual}")]
    InputSizeMismatch { expected: usize, actual: usize },

    #[error("expected {expected} outputs, got {actual}")]
    OutputSizeMismatch { expected: usize, actual: usize },

    #[error("not enough weights to build the network")]
    NotEnoughWeights,

    #[error("{0} weights left over after building the network")]
    TooManyWeights(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayerTopology {
    pub neurons: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Network {
    layers: Vec<Layer>,
}

impl Network {
    pub fn random(rng: &mut dyn RngCore, topology: &[LayerTopology]) -> Result<Self, NetworkError> {
        if topology.len() < 2 {
            return Err(NetworkError::TooFewLayers(topology.len()));
        }

        let layers = topology
            .windows(2)
            .map(|pair| Layer::random(rng, pair[0].neurons, pair[1].neurons))
            .collect();

        Ok(Self { layers })
    }

    /// Rebuilds a network from genes laid out the way [`Network::weights`]
    /// emits them. The gene count must match the topology exactly.
    pub fn from_weights(
        topology: &[LayerTopology],
        weights: impl IntoIterator<Item = f32>,
    ) -> Result<Self, NetworkError> {
        if topology.len() < 2 {
            return Err(NetworkError::TooFewLayers(topology.len()));
        }

        let mut weights = weights.into_iter();

        let layers = topology
            .windows(2)
            .map(|pair| Layer::from_weights(pair[0].neurons, pair[1].neurons, &mut weights))
            .collect::<Result<Vec<_>, _>>()?;

        let leftover = weights.count();
        if leftover > 0 {
            return Err(NetworkError::TooManyWeights(leftover));
        }

        Ok(Self { layers })
    }

    pub fn propagate(&self, inputs: &[f32]) -> Result<Vec<f32>, NetworkError> {
        let mut activations = inputs.to_vec();
        for layer in &self.layers {
            activations = layer.propagate(&activations)?;
        }
        Ok(activations)
    }

    /// Flattens the network: for every neuron, its bias followed by its
    /// input weights.
    pub fn weights(&self) -> impl Iterator<Item = f32> + '_ {
        self.layers
            .iter()
            .flat_map(|layer| layer.neurons.iter())
            .flat_map(|neuron| std::iter::once(&neuron.bias).chain(&neuron.weights))
            .copied()
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    /// Number of genes needed to describe a network of the given topology.
    pub fn weight_count(topology: &[LayerTopology]) -> usize {
        topology
            .windows(2)
            .map(|pair| (pair[0].neurons + 1) * pair[1].neurons)
            .sum()
    }
}
