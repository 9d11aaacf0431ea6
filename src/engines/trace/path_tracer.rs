use crate::engines::simulation::apply_move;
use crate::grid::Grid;
use crate::types::{CellKind, Move, Position};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// A grid cell after the winning path has been drawn on it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TraceCell {
    Original(CellKind),
    Visited,
    Collected,
    Arrived,
}

impl TraceCell {
    pub fn symbol(&self) -> &'static str {
        match self {
            TraceCell::Original(kind) => kind.symbol(),
            TraceCell::Visited => "*",
            TraceCell::Collected => "**",
            TraceCell::Arrived => "H",
        }
    }
}

impl fmt::Display for TraceCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathTrace {
    pub grid: Vec<Vec<TraceCell>>,
    /// Executed moves only; blocked and edge moves are left out
    pub moves: Vec<Move>,
    pub coins: usize,
    pub steps: usize,
    pub reached_home: bool,
}

pub struct PathTracer;

impl PathTracer {
    /// Replay `chromosome` once and draw it onto a copy of `grid`
    pub fn trace(grid: &Grid, chromosome: &[Move], max_steps: usize) -> PathTrace {
        let mut annotated: Vec<Vec<TraceCell>> = grid
            .cells()
            .iter()
            .map(|row| row.iter().map(|&k| TraceCell::Original(k)).collect())
            .collect();

        let mut pos = grid.start();
        let mut moves = Vec::new();
        let mut collected: HashSet<Position> = HashSet::new();
        let mut steps = 0;
        let mut reached_home = false;

        for &mv in chromosome {
            let next = apply_move(pos, mv, grid);
            if next == pos {
                continue;
            }

            moves.push(mv);
            pos = next;
            steps += 1;

            let cell = &mut annotated[pos.row][pos.col];
            match grid.cell_at(pos) {
                CellKind::Coin => {
                    if collected.insert(pos) {
                        *cell = TraceCell::Collected;
                    }
                }
                CellKind::Home => {
                    reached_home = true;
                    *cell = TraceCell::Arrived;
                    break;
                }
                CellKind::Start | CellKind::Tiger => {}
                CellKind::Empty => *cell = TraceCell::Visited,
            }

            if steps >= max_steps {
                break;
            }
        }

        PathTrace {
            grid: annotated,
            moves,
            coins: collected.len(),
            steps,
            reached_home,
        }
    }
}
