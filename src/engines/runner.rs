use crate::config::AppConfig;
use crate::engines::generation::{
    chromosome::Chromosome,
    evolution_engine::{EvolutionConfig as EngineEvolutionConfig, EvolutionEngine, ProgressCallback},
};
use crate::engines::simulation::FitnessEvaluator;
use crate::engines::trace::{PathTrace, PathTracer};
use crate::error::Result;
use crate::grid::{Grid, GridParser};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Everything a front-end needs to show the result of one search
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchOutcome {
    pub best_score: i64,
    pub best_chromosome: Chromosome,
    pub best_generation: usize,
    pub trace: PathTrace,
}

/// Validated configuration plus the glue from a grid to a `SearchOutcome`
pub struct SearchRunner {
    config: AppConfig,
}

impl SearchRunner {
    pub fn new(config: AppConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn parse_grid(&self, text: &str) -> Result<Grid> {
        GridParser::new(self.config.search.strict_cells).parse(text)
    }

    pub fn engine_config(&self) -> EngineEvolutionConfig {
        let evolution = &self.config.evolution;
        EngineEvolutionConfig {
            population_size: evolution.population_size,
            generations: evolution.num_generations,
            chromosome_length: self.config.search.max_steps,
            mutation_rate: evolution.mutation_rate,
            parallel_evaluation: evolution.parallel_evaluation,
            seed: evolution.seed,
        }
    }

    pub fn run<C: ProgressCallback>(&self, grid: Grid, callback: C) -> Result<SearchOutcome> {
        let evaluator = self.evaluator(grid);
        let engine = EvolutionEngine::new(self.engine_config(), evaluator)?;
        self.finish(engine, callback)
    }

    /// Same as `run`, drawing all randomness from `rng`
    pub fn run_with_rng<R: Rng, C: ProgressCallback>(
        &self,
        grid: Grid,
        rng: R,
        callback: C,
    ) -> Result<SearchOutcome> {
        let evaluator = self.evaluator(grid);
        let engine = EvolutionEngine::with_rng(self.engine_config(), evaluator, rng)?;
        self.finish(engine, callback)
    }

    fn evaluator(&self, grid: Grid) -> FitnessEvaluator {
        FitnessEvaluator::new(Arc::new(grid), self.config.search.max_steps)
    }

    fn finish<R: Rng, C: ProgressCallback>(
        &self,
        mut engine: EvolutionEngine<R>,
        callback: C,
    ) -> Result<SearchOutcome> {
        let evaluator = engine.evaluator();
        log::info!(
            "Starting search on {}x{} grid: population {}, {} generations, max steps {}",
            evaluator.grid().rows(),
            evaluator.grid().cols(),
            self.config.evolution.population_size,
            self.config.evolution.num_generations,
            evaluator.max_steps()
        );

        let best = engine.run(callback)?;
        let evaluator = engine.evaluator();
        let trace = PathTracer::trace(evaluator.grid(), &best.chromosome, evaluator.max_steps());

        if trace.reached_home {
            log::info!(
                "Search complete. Score {}, home in {} steps with {} coins",
                best.score,
                trace.steps,
                trace.coins
            );
        } else {
            log::warn!(
                "Search complete without reaching home. Best score {} after {} steps",
                best.score,
                trace.steps
            );
        }

        Ok(SearchOutcome {
            best_score: best.score,
            best_chromosome: best.chromosome,
            best_generation: best.generation,
            trace,
        })
    }
}
