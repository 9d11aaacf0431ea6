use crate::grid::Grid;
use crate::types::{CellKind, Move, Position};

/// Apply one move to `pos`.
///
/// A step off the edge leaves that axis unchanged. A step onto a Tiger
/// returns `pos` itself, so callers detect a blocked move by equality.
pub fn apply_move(pos: Position, mv: Move, grid: &Grid) -> Position {
    let mut candidate = pos;
    match mv {
        Move::Up if pos.row > 0 => candidate.row -= 1,
        Move::Down if pos.row + 1 < grid.rows() => candidate.row += 1,
        Move::Left if pos.col > 0 => candidate.col -= 1,
        Move::Right if pos.col + 1 < grid.cols() => candidate.col += 1,
        _ => {}
    }

    if grid.cell_at(candidate) == CellKind::Tiger {
        return pos;
    }
    candidate
}
