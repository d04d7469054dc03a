use rand::{Rng, RngCore};
use serde::{Deserialize, Serialize};

use crate::NetworkError;

/// A single ReLU unit: `max(0, bias + Σ wᵢxᵢ)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Neuron {
    pub bias: f32,
    pub weights: Vec<f32>,
}

impl Neuron {
    pub fn random(rng: &mut dyn RngCore, input_size: usize) -> Self {
        let bias = rng.gen_range(-1.0..=1.0);
        let weights = (0..input_size)
            .map(|_| rng.gen_range(-1.0..=1.0))
            .collect();

        Self { bias, weights }
    }

    pub fn from_weights(
        input_size: usize,
        weights: &mut dyn Iterator<Item = f32>,
    ) -> Result<Self, NetworkError> {
        let bias = weights.next().ok_or(NetworkError::NotEnoughWeights)?;
        let weights = (0..input_size)
            .map(|_| weights.next().ok_or(NetworkError::NotEnoughWeights))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { bias, weights })
    }

    pub fn propagate(&self, inputs: &[f32]) -> Result<f32, NetworkError> {
        if inputs.len() != self.weights.len() {
            return Err(NetworkError::InputSizeMismatch {
                expected: self.weights.len(),
                actual: inputs.len(),
            });
        }

        let output = inputs
            .iter()
            .zip(&self.weights)
            .map(|(input, weight)| input * weight)
            .sum::<f32>();

        Ok((self.bias + output).max(0.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn random_neuron_has_one_weight_per_input() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let neuron = Neuron::random(&mut rng, 4);

        assert_eq!(neuron.weights.len(), 4);
        assert!((-1.0..=1.0).contains(&neuron.bias));
        assert!(neuron.weights.iter().all(|w| (-1.0..=1.0).contains(w)));
    }

    #[test]
    fn propagate_applies_relu() {
        let neuron = Neuron {
            bias: 0.5,
            weights: vec![-0.3, 0.8],
        };

        // Negative pre-activation clamps to zero.
        assert_eq!(neuron.propagate(&[-10.0, -10.0]).unwrap(), 0.0);

        let expected = 0.5 + (-0.3 * 0.5) + (0.8 * 1.0);
        let actual = neuron.propagate(&[0.5, 1.0]).unwrap();
        assert!((actual - expected).abs() < 1e-6);
    }

    #[test]
    fn propagate_rejects_wrong_input_size() {
        let neuron = Neuron {
            bias: 0.0,
            weights: vec![1.0, 1.0],
        };

        let err = neuron.propagate(&[1.0]).unwrap_err();
        assert_eq!(
            err,
            NetworkError::InputSizeMismatch {
                expected: 2,
                actual: 1
            }
        );
    }

    #[test]
    fn from_weights_reads_bias_first() {
        let mut weights = vec![0.1, 0.2, 0.3].into_iter();
        let neuron = Neuron::from_weights(2, &mut weights).unwrap();

        assert_eq!(neuron.bias, 0.1);
        assert_eq!(neuron.weights, vec![0.2, 0.3]);
    }

    #[test]
    fn from_weights_fails_when_exhausted() {
        let mut weights = vec![0.1].into_iter();
        assert_eq!(
            Neuron::from_weights(2, &mut weights).unwrap_err(),
            NetworkError::NotEnoughWeights
        );
    }
}
