use rand::{Rng, RngCore};

use crate::chromosome::Chromosome;
use crate::GaError;

pub trait CrossoverMethod {
    fn crossover(
        &self,
        rng: &mut dyn RngCore,
        parent_a: &Chromosome,
        parent_b: &Chromosome,
    ) -> Result<Chromosome, GaError>;
}

/// Picks every gene from either parent with equal probability.
#[derive(Clone, Debug, Default)]
pub struct UniformCrossover;

impl CrossoverMethod for UniformCrossover {
    fn crossover(
        &self,
        rng: &mut dyn RngCore,
        parent_a: &Chromosome,
        parent_b: &Chromosome,
    ) -> Result<Chromosome, GaError> {
        if parent_a.len() != parent_b.len() {
            return Err(GaError::ChromosomeLengthMismatch {
                left: parent_a.len(),
                right: parent_b.len(),
            });
        }

        Ok(parent_a
            .iter()
            .zip(parent_b.iter())
            .map(|(&a, &b)| if rng.gen_bool(0.5) { a } else { b })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn every_gene_comes_from_a_parent() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let parent_a: Chromosome = (1..=100).map(|n| n as f32).collect();
        let parent_b: Chromosome = (1..=100).map(|n| -n as f32).collect();

        let child = UniformCrossover
            .crossover(&mut rng, &parent_a, &parent_b)
            .unwrap();

        assert_eq!(child.len(), 100);

        let from_a = child
            .iter()
            .zip(parent_a.iter())
            .filter(|(c, p)| c == p)
            .count();
        let from_b = child
            .iter()
            .zip(parent_b.iter())
            .filter(|(c, p)| c == p)
            .count();

        assert_eq!(from_a + from_b, 100);
        // Both parents contribute a sizeable share.
        assert!(from_a > 25 && from_b > 25, "a={from_a} b={from_b}");
    }

    #[test]
    fn mismatched_parents_are_rejected() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let parent_a: Chromosome = vec![1.0, 2.0].into();
        let parent_b: Chromosome = vec![1.0].into();

        assert_eq!(
            UniformCrossover
                .crossover(&mut rng, &parent_a, &parent_b)
                .unwrap_err(),
            GaError::ChromosomeLengthMismatch { left: 2, right: 1 }
        );
    }
}
