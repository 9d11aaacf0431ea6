use crate::config::evolution::MIN_POPULATION_SIZE;
use crate::config::search::MIN_MAX_STEPS;
use crate::engines::generation::{chromosome::Chromosome, population::Population};
use crate::engines::simulation::FitnessEvaluator;
use crate::error::SheepgenError;
use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone)]
pub struct EvolutionConfig {
    pub population_size: usize,
    pub generations: usize,
    pub chromosome_length: usize,
    pub mutation_rate: f64,
    pub parallel_evaluation: bool,
    pub seed: Option<u64>,
}

impl EvolutionConfig {
    fn validate(&self) -> Result<(), SheepgenError> {
        if self.population_size < MIN_POPULATION_SIZE {
            return Err(SheepgenError::Configuration(format!(
                "Population size must be at least {}, got {}",
                MIN_POPULATION_SIZE, self.population_size
            )));
        }
        if self.generations == 0 {
            return Err(SheepgenError::Configuration(
                "At least one generation is required".to_string(),
            ));
        }
        if self.chromosome_length < MIN_MAX_STEPS {
            return Err(SheepgenError::Configuration(format!(
                "Chromosome length must be at least {}, got {}",
                MIN_MAX_STEPS, self.chromosome_length
            )));
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(SheepgenError::Configuration(format!(
                "Mutation rate must be between 0 and 1, got {}",
                self.mutation_rate
            )));
        }
        Ok(())
    }
}

/// Best chromosome seen over the whole run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BestChromosome {
    pub chromosome: Chromosome,
    pub score: i64,
    /// Zero-based generation that first produced this score
    pub generation: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchState {
    Running { generation: usize },
    Done,
}

pub trait ProgressCallback: Send {
    fn on_generation_start(&mut self, generation: usize);
    fn on_generation_complete(&mut self, generation: usize, generation_best: i64, best_ever: i64);
    fn on_new_best(&mut self, generation: usize, score: i64);
}

impl<T: ProgressCallback + ?Sized> ProgressCallback for &mut T {
    fn on_generation_start(&mut self, generation: usize) {
        (**self).on_generation_start(generation);
    }

    fn on_generation_complete(&mut self, generation: usize, generation_best: i64, best_ever: i64) {
        (**self).on_generation_complete(generation, generation_best, best_ever);
    }

    fn on_new_best(&mut self, generation: usize, score: i64) {
        (**self).on_new_best(generation, score);
    }
}

/// Fixed-length generational search.
///
/// Each generation keeps the top half of the previous one, breeds it back to
/// full size, scores the children and updates the best-ever chromosome.
/// There is no early exit.
pub struct EvolutionEngine<R: Rng = StdRng> {
    config: EvolutionConfig,
    evaluator: FitnessEvaluator,
    rng: R,
    population: Population,
    generation: usize,
    best: Option<BestChromosome>,
}

impl EvolutionEngine<StdRng> {
    pub fn new(config: EvolutionConfig, evaluator: FitnessEvaluator) -> Result<Self, SheepgenError> {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(config, evaluator, rng)
    }
}

impl<R: Rng> EvolutionEngine<R> {
    /// Build an engine around a caller-supplied random source
    pub fn with_rng(
        config: EvolutionConfig,
        evaluator: FitnessEvaluator,
        mut rng: R,
    ) -> Result<Self, SheepgenError> {
        config.validate()?;
        if config.chromosome_length != evaluator.max_steps() {
            return Err(SheepgenError::Configuration(format!(
                "Chromosome length {} does not match step budget {}",
                config.chromosome_length,
                evaluator.max_steps()
            )));
        }

        let population = Population::random(
            config.population_size,
            config.chromosome_length,
            &evaluator,
            config.parallel_evaluation,
            &mut rng,
        );

        Ok(Self {
            config,
            evaluator,
            rng,
            population,
            generation: 0,
            best: None,
        })
    }

    pub fn state(&self) -> SearchState {
        if self.generation < self.config.generations {
            SearchState::Running {
                generation: self.generation,
            }
        } else {
            SearchState::Done
        }
    }

    pub fn best(&self) -> Option<&BestChromosome> {
        self.best.as_ref()
    }

    pub fn population(&self) -> &Population {
        &self.population
    }

    pub fn evaluator(&self) -> &FitnessEvaluator {
        &self.evaluator
    }

    /// Run one generation. Returns false once the run is done.
    pub fn step<C: ProgressCallback>(&mut self, callback: &mut C) -> bool {
        let generation = match self.state() {
            SearchState::Running { generation } => generation,
            SearchState::Done => return false,
        };
        callback.on_generation_start(generation);

        let survivors = std::mem::take(&mut self.population).select_survivors();
        let children = Population::breed(
            &survivors,
            self.config.population_size,
            self.config.mutation_rate,
            &mut self.rng,
        );
        self.population =
            Population::scored(children, &self.evaluator, self.config.parallel_evaluation);

        // First chromosome with the top score; later ties never replace it
        let Some((chromosome, generation_best)) = self.population.best() else {
            return false;
        };
        let improved = self.best.as_ref().map_or(true, |b| generation_best > b.score);
        if improved {
            self.best = Some(BestChromosome {
                chromosome: chromosome.clone(),
                score: generation_best,
                generation,
            });
            log::info!("Generation {}: new best score {}", generation + 1, generation_best);
            callback.on_new_best(generation, generation_best);
        }

        let best_ever = self.best.as_ref().map_or(generation_best, |b| b.score);
        log::debug!(
            "Generation {}/{} complete. Generation best: {}, best ever: {}",
            generation + 1,
            self.config.generations,
            generation_best,
            best_ever
        );
        callback.on_generation_complete(generation, generation_best, best_ever);

        self.generation += 1;
        true
    }

    /// Run every remaining generation and return the best-ever chromosome
    pub fn run<C: ProgressCallback>(
        &mut self,
        mut callback: C,
    ) -> Result<BestChromosome, SheepgenError> {
        while self.step(&mut callback) {}

        self.best.clone().ok_or_else(|| {
            SheepgenError::Configuration("Search finished without evaluating any chromosome".to_string())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::GridParser;
    use crate::types::Move;
    use std::sync::Arc;

    struct Silent;

    impl ProgressCallback for Silent {
        fn on_generation_start(&mut self, _generation: usize) {}
        fn on_generation_complete(&mut self, _generation: usize, _generation_best: i64, _best_ever: i64) {}
        fn on_new_best(&mut self, _generation: usize, _score: i64) {}
    }

    fn config(generations: usize) -> EvolutionConfig {
        EvolutionConfig {
            population_size: 10,
            generations,
            chromosome_length: 5,
            mutation_rate: 0.25,
            parallel_evaluation: false,
            seed: Some(3),
        }
    }

    fn evaluator() -> FitnessEvaluator {
        let grid = GridParser::lenient().parse("S C C H").unwrap();
        FitnessEvaluator::new(Arc::new(grid), 5)
    }

    #[test]
    fn test_state_machine_runs_fixed_generations() {
        let mut engine = EvolutionEngine::new(config(3), evaluator()).unwrap();
        assert_eq!(engine.state(), SearchState::Running { generation: 0 });
        assert!(engine.best().is_none());

        assert!(engine.step(&mut Silent));
        assert!(engine.step(&mut Silent));
        assert!(engine.step(&mut Silent));
        assert_eq!(engine.state(), SearchState::Done);
        assert!(!engine.step(&mut Silent));
        assert!(engine.best().is_some());
        assert_eq!(engine.population().len(), 10);
    }

    #[test]
    fn test_rejects_bad_config() {
        let mut small = config(1);
        small.population_size = 3;
        assert!(EvolutionEngine::new(small, evaluator()).is_err());

        let mut short = config(1);
        short.chromosome_length = 2;
        assert!(EvolutionEngine::new(short, evaluator()).is_err());

        let mut none = config(1);
        none.generations = 0;
        assert!(EvolutionEngine::new(none, evaluator()).is_err());
    }

    /// Records every new-best event
    #[derive(Default)]
    struct BestRecorder {
        events: Vec<(usize, i64)>,
    }

    impl ProgressCallback for BestRecorder {
        fn on_generation_start(&mut self, _generation: usize) {}
        fn on_generation_complete(&mut self, _generation: usize, _generation_best: i64, _best_ever: i64) {}
        fn on_new_best(&mut self, generation: usize, score: i64) {
            self.events.push((generation, score));
        }
    }

    #[test]
    fn test_ties_keep_first_best() {
        // Every chromosome whose first three moving genes are Right scores 220,
        // so the population quickly fills with distinct tying chromosomes.
        let mut tied = config(30);
        tied.population_size = 20;
        let mut engine =
            EvolutionEngine::with_rng(tied, evaluator(), StdRng::seed_from_u64(21)).unwrap();
        let mut recorder = BestRecorder::default();
        let mut last_change: Option<(Chromosome, usize)> = None;

        while let SearchState::Running { generation } = engine.state() {
            let previous = engine.best().map(|b| b.score);
            engine.step(&mut recorder);
            let (leader, top) = engine.population().best().unwrap();
            let best = engine.best().unwrap();

            if previous.map_or(true, |p| top > p) {
                // First chromosome in the generation with the top score
                assert_eq!(best.generation, generation);
                assert_eq!(&best.chromosome, leader);
                last_change = Some((leader.clone(), generation));
            } else {
                // A tie or a worse generation leaves the incumbent alone
                assert!(best.generation < generation);
            }
        }

        let best = engine.best().unwrap();
        assert_eq!(best.score, 220);
        let (chromosome, generation) = last_change.unwrap();
        assert_eq!(best.chromosome, chromosome);
        assert_eq!(best.generation, generation);

        // New-best events only fire on strictly greater scores
        assert!(recorder.events.windows(2).all(|w| w[0].1 < w[1].1));
        assert_eq!(recorder.events.last(), Some(&(best.generation, best.score)));
    }

    #[test]
    fn test_best_is_consistent_with_evaluator() {
        let mut engine = EvolutionEngine::new(config(20), evaluator()).unwrap();
        let best = engine.run(Silent).unwrap();
        assert_eq!(best.chromosome.len(), 5);
        assert_eq!(engine.evaluator().evaluate(&best.chromosome), best.score);
        assert!(best.chromosome.iter().all(|m| Move::ALL.contains(m)));
    }
}
