use sheepgen::config::AppConfig;
use sheepgen::engines::generation::{
    ChannelProgressCallback, ProgressCallback, ProgressMessage,
};
use sheepgen::{SearchRunner, SheepgenError};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::mpsc::channel;

/// Records what the engine reported
#[derive(Default)]
struct TestProgressCallback {
    generations: usize,
    best_history: Vec<i64>,
}

impl ProgressCallback for TestProgressCallback {
    fn on_generation_start(&mut self, _generation: usize) {}

    fn on_generation_complete(&mut self, generation: usize, _generation_best: i64, best_ever: i64) {
        self.generations = generation + 1;
        self.best_history.push(best_ever);
    }

    fn on_new_best(&mut self, _generation: usize, _score: i64) {}
}

fn create_test_config(population_size: usize, generations: usize, max_steps: usize) -> AppConfig {
    let mut config = AppConfig::default();
    config.evolution.population_size = population_size;
    config.evolution.num_generations = generations;
    config.evolution.seed = Some(42);
    config.search.max_steps = max_steps;
    config
}

#[test]
fn test_finds_home_around_tiger() {
    let runner = SearchRunner::new(create_test_config(60, 200, 10)).unwrap();
    let grid = runner.parse_grid("S . .\n. T .\n. . H").unwrap();

    let outcome = runner.run(grid, TestProgressCallback::default()).unwrap();

    assert!(outcome.trace.reached_home);
    assert!(outcome.trace.steps <= 4);
    assert_eq!(outcome.best_score, 60);
}

#[test]
fn test_collects_coins_on_the_way_home() {
    let runner = SearchRunner::new(create_test_config(60, 50, 5)).unwrap();
    let grid = runner.parse_grid("S C C H").unwrap();

    let outcome = runner.run(grid, TestProgressCallback::default()).unwrap();

    assert_eq!(outcome.best_score, 220);
    assert_eq!(outcome.trace.coins, 2);
    assert_eq!(outcome.trace.steps, 3);
    assert!(outcome.trace.reached_home);
}

#[test]
fn test_missing_home_rejected_before_search() {
    let runner = SearchRunner::new(create_test_config(10, 5, 5)).unwrap();
    let result = runner.parse_grid("S . .\n. T .\n. . C");
    assert!(matches!(result, Err(SheepgenError::MissingCell(_))));
}

#[test]
fn test_short_step_budget_rejected() {
    let result = SearchRunner::new(create_test_config(10, 5, 2));
    assert!(matches!(result, Err(SheepgenError::Configuration(_))));
}

#[test]
fn test_runs_every_generation_and_best_never_drops() {
    let runner = SearchRunner::new(create_test_config(20, 30, 12)).unwrap();
    let grid = runner
        .parse_grid("S . C . .\n. T . T .\nC . . . C\n. T T . .\n. . C . H")
        .unwrap();

    let mut callback = TestProgressCallback::default();
    let outcome = runner.run(grid, &mut callback).unwrap();

    assert_eq!(callback.generations, 30);
    assert!(callback.best_history.windows(2).all(|w| w[0] <= w[1]));
    assert_eq!(callback.best_history.last().copied(), Some(outcome.best_score));
}

#[test]
fn test_same_seed_same_outcome() {
    let text = "S . T . C\n. C . . .\nT . . T .\n. . C . H";
    let runner = SearchRunner::new(create_test_config(24, 40, 14)).unwrap();

    let first = runner
        .run_with_rng(runner.parse_grid(text).unwrap(), StdRng::seed_from_u64(7), TestProgressCallback::default())
        .unwrap();
    let second = runner
        .run_with_rng(runner.parse_grid(text).unwrap(), StdRng::seed_from_u64(7), TestProgressCallback::default())
        .unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_unreachable_home_still_returns_best_effort() {
    let runner = SearchRunner::new(create_test_config(20, 20, 6)).unwrap();
    let grid = runner.parse_grid("S C . T H").unwrap();

    let outcome = runner.run(grid, TestProgressCallback::default()).unwrap();

    assert!(!outcome.trace.reached_home);
    // Best reachable: coin collected, standing at (0, 2), two cells from home
    assert_eq!(outcome.best_score, 20 - 2 * 10);
}

#[test]
fn test_channel_progress_reports_each_generation() {
    let runner = SearchRunner::new(create_test_config(10, 4, 5)).unwrap();
    let grid = runner.parse_grid("S . . H").unwrap();
    let (tx, rx) = channel();

    runner.run(grid, ChannelProgressCallback::new(tx)).unwrap();

    let messages: Vec<ProgressMessage> = rx.iter().collect();
    let starts = messages
        .iter()
        .filter(|m| matches!(m, ProgressMessage::GenerationStart(_)))
        .count();
    let completes = messages
        .iter()
        .filter(|m| matches!(m, ProgressMessage::GenerationComplete { .. }))
        .count();
    assert_eq!(starts, 4);
    assert_eq!(completes, 4);
    assert!(matches!(messages[1], ProgressMessage::NewBest { generation: 0, .. }));
}
