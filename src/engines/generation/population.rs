use crate::engines::generation::chromosome::Chromosome;
use crate::engines::generation::operators::{
    crossover, mutate, random_chromosome, sample_parents, truncation_selection,
};
use crate::engines::simulation::FitnessEvaluator;
use rand::Rng;
use rayon::prelude::*;

/// One generation of chromosomes with their scores.
///
/// `scores[i]` always belongs to `chromosomes[i]`.
#[derive(Debug, Clone, Default)]
pub struct Population {
    chromosomes: Vec<Chromosome>,
    scores: Vec<i64>,
}

impl Population {
    /// Fresh random population, scored
    pub fn random<R: Rng>(
        size: usize,
        chromosome_length: usize,
        evaluator: &FitnessEvaluator,
        parallel: bool,
        rng: &mut R,
    ) -> Self {
        let chromosomes = (0..size)
            .map(|_| random_chromosome(chromosome_length, rng))
            .collect();
        Self::scored(chromosomes, evaluator, parallel)
    }

    /// Scores every chromosome; results are in population order either way
    pub fn scored(chromosomes: Vec<Chromosome>, evaluator: &FitnessEvaluator, parallel: bool) -> Self {
        let scores: Vec<i64> = if parallel {
            chromosomes.par_iter().map(|c| evaluator.evaluate(c)).collect()
        } else {
            chromosomes.iter().map(|c| evaluator.evaluate(c)).collect()
        };
        Self { chromosomes, scores }
    }

    pub fn len(&self) -> usize {
        self.chromosomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chromosomes.is_empty()
    }

    pub fn scores(&self) -> &[i64] {
        &self.scores
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Chromosome, i64)> {
        self.chromosomes.iter().zip(self.scores.iter().copied())
    }

    /// First chromosome holding the highest score
    pub fn best(&self) -> Option<(&Chromosome, i64)> {
        let mut best: Option<(&Chromosome, i64)> = None;
        for (chromosome, score) in self.iter() {
            if best.map_or(true, |(_, top)| score > top) {
                best = Some((chromosome, score));
            }
        }
        best
    }

    /// Top half by score, best first
    pub fn select_survivors(self) -> Vec<Chromosome> {
        let scored = self.chromosomes.into_iter().zip(self.scores).collect();
        truncation_selection(scored)
            .into_iter()
            .map(|(c, _)| c)
            .collect()
    }

    /// Refill to `size` from `survivors` by crossover and mutation.
    ///
    /// Children come in pairs; when one slot is left only the first child of
    /// the last pairing is kept.
    pub fn breed<R: Rng>(
        survivors: &[Chromosome],
        size: usize,
        mutation_rate: f64,
        rng: &mut R,
    ) -> Vec<Chromosome> {
        let mut next_generation = Vec::with_capacity(size);

        while next_generation.len() < size {
            let (parent1, parent2) = sample_parents(survivors, rng);
            let (mut child1, mut child2) = crossover(parent1, parent2, rng);

            mutate(&mut child1, mutation_rate, rng);
            mutate(&mut child2, mutation_rate, rng);

            next_generation.push(child1);
            if next_generation.len() < size {
                next_generation.push(child2);
            }
        }

        next_generation
    }
}
