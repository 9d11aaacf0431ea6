use super::movement::apply_move;
use crate::grid::Grid;
use crate::types::{CellKind, Move, Position};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::Arc;

/// Reward per coin when the run ends away from home
pub const WANDERING_COIN_REWARD: i64 = 20;
/// Penalty per cell of Manhattan distance left to home
pub const DISTANCE_PENALTY: i64 = 10;
/// Reward per coin when the run reaches home
pub const HOMING_COIN_REWARD: i64 = 100;
/// Reward per unused step when the run reaches home
pub const SPARE_STEP_REWARD: i64 = 10;

/// Per-evaluation state, dropped when the replay finishes
#[derive(Debug, Clone)]
struct SimulationTrace {
    position: Position,
    collected: HashSet<Position>,
    steps: usize,
    reached_home: bool,
}

impl SimulationTrace {
    fn new(start: Position) -> Self {
        Self {
            position: start,
            collected: HashSet::new(),
            steps: 0,
            reached_home: false,
        }
    }
}

/// What happened when a chromosome was replayed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationOutcome {
    pub final_position: Position,
    pub coins: usize,
    pub steps: usize,
    pub reached_home: bool,
}

/// Scores chromosomes against one grid.
///
/// Built once per run; `evaluate` is pure, so the same chromosome always
/// gets the same score and evaluations can run on any thread.
#[derive(Debug, Clone)]
pub struct FitnessEvaluator {
    grid: Arc<Grid>,
    max_steps: usize,
}

impl FitnessEvaluator {
    pub fn new(grid: Arc<Grid>, max_steps: usize) -> Self {
        Self { grid, max_steps }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn max_steps(&self) -> usize {
        self.max_steps
    }

    /// Replay `chromosome` from the start cell.
    ///
    /// Blocked and edge moves consume their gene without counting a step.
    /// The replay stops on arrival at home or once `max_steps` steps are taken.
    pub fn simulate(&self, chromosome: &[Move]) -> SimulationOutcome {
        let grid = self.grid.as_ref();
        let mut trace = SimulationTrace::new(grid.start());

        for &mv in chromosome {
            let next = apply_move(trace.position, mv, grid);
            if next == trace.position {
                continue;
            }

            trace.position = next;
            trace.steps += 1;

            match grid.cell_at(next) {
                CellKind::Coin => {
                    trace.collected.insert(next);
                }
                CellKind::Home => {
                    trace.reached_home = true;
                    break;
                }
                _ => {}
            }

            if trace.steps >= self.max_steps {
                break;
            }
        }

        SimulationOutcome {
            final_position: trace.position,
            coins: trace.collected.len(),
            steps: trace.steps,
            reached_home: trace.reached_home,
        }
    }

    pub fn score(&self, outcome: &SimulationOutcome) -> i64 {
        let coins = outcome.coins as i64;
        if outcome.reached_home {
            let spare = self.max_steps.saturating_sub(outcome.steps) as i64;
            coins * HOMING_COIN_REWARD + spare * SPARE_STEP_REWARD
        } else {
            let distance = outcome.final_position.manhattan_distance(&self.grid.home()) as i64;
            coins * WANDERING_COIN_REWARD - distance * DISTANCE_PENALTY
        }
    }

    pub fn evaluate(&self, chromosome: &[Move]) -> i64 {
        self.score(&self.simulate(chromosome))
    }
}
