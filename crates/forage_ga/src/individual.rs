use crate::chromosome::Chromosome;

pub trait Individual {
    fn fitness(&self) -> f32;
    fn chromosome(&self) -> &Chromosome;
    fn create(chromosome: Chromosome) -> Self;
}

/// Individual used by the unit tests. Its fitness is the sum of its genes.
#[cfg(test)]
#[derive(Debug, Clone, PartialEq)]
pub struct TestIndividual {
    chromosome: Chromosome,
    fitness: f32,
}

#[cfg(test)]
impl TestIndividual {
    pub fn with_fitness(fitness: f32) -> Self {
        Self {
            chromosome: Chromosome::default(),
            fitness,
        }
    }
}

#[cfg(test)]
impl Individual for TestIndividual {
    fn fitness(&self) -> f32 {
        self.fitness
    }

    fn chromosome(&self) -> &Chromosome {
        &self.chromosome
    }

    fn create(chromosome: Chromosome) -> Self {
        let fitness = chromosome.iter().sum();
        Self {
            chromosome,
            fitness,
        }
    }
}
