use crate::error::{Result, SheepgenError};
use crate::types::{CellKind, Position};

/// Read-only map used for one search
///
/// Construction checks the shape and locates the single Start and Home
/// cells, so every `Grid` that exists is a valid search input.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    cells: Vec<Vec<CellKind>>,
    rows: usize,
    cols: usize,
    start: Position,
    home: Position,
}

impl Grid {
    pub fn new(cells: Vec<Vec<CellKind>>) -> Result<Self> {
        let rows = cells.len();
        let cols = cells.first().map(Vec::len).unwrap_or(0);
        if rows == 0 || cols == 0 {
            return Err(SheepgenError::EmptyGrid);
        }

        for (row, line) in cells.iter().enumerate() {
            if line.len() != cols {
                return Err(SheepgenError::NonRectangular {
                    row,
                    expected: cols,
                    actual: line.len(),
                });
            }
        }

        let start = Self::locate_unique(&cells, CellKind::Start)?;
        let home = Self::locate_unique(&cells, CellKind::Home)?;

        Ok(Self {
            cells,
            rows,
            cols,
            start,
            home,
        })
    }

    fn locate_unique(cells: &[Vec<CellKind>], kind: CellKind) -> Result<Position> {
        let mut found: Option<Position> = None;
        for (row, line) in cells.iter().enumerate() {
            for (col, &cell) in line.iter().enumerate() {
                if cell != kind {
                    continue;
                }
                let pos = Position::new(row, col);
                if let Some(first) = found {
                    return Err(SheepgenError::DuplicateCell {
                        kind,
                        first,
                        second: pos,
                    });
                }
                found = Some(pos);
            }
        }
        found.ok_or(SheepgenError::MissingCell(kind))
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn start(&self) -> Position {
        self.start
    }

    pub fn home(&self) -> Position {
        self.home
    }

    pub fn contains(&self, pos: Position) -> bool {
        pos.row < self.rows && pos.col < self.cols
    }

    /// Cell lookup; `pos` must be inside the grid
    pub fn cell_at(&self, pos: Position) -> CellKind {
        self.cells[pos.row][pos.col]
    }

    pub fn get(&self, pos: Position) -> Option<CellKind> {
        self.cells.get(pos.row)?.get(pos.col).copied()
    }

    pub fn cells(&self) -> &[Vec<CellKind>] {
        &self.cells
    }

    /// Distinct Coin cells, the upper bound on coins any run can collect
    pub fn coin_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&c| c == CellKind::Coin)
            .count()
    }

    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.rows).flat_map(move |row| (0..self.cols).map(move |col| Position::new(row, col)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use CellKind::*;

    #[test]
    fn test_locates_start_and_home() {
        let grid = Grid::new(vec![vec![Start, Empty], vec![Coin, Home]]).unwrap();
        assert_eq!(grid.start(), Position::new(0, 0));
        assert_eq!(grid.home(), Position::new(1, 1));
        assert_eq!(grid.coin_count(), 1);
        assert_eq!(grid.positions().count(), 4);
    }

    #[test]
    fn test_missing_home_is_rejected() {
        let err = Grid::new(vec![vec![Start, Empty, Coin]]).unwrap_err();
        assert!(matches!(err, SheepgenError::MissingCell(Home)));
    }

    #[test]
    fn test_duplicate_start_is_rejected() {
        let err = Grid::new(vec![vec![Start, Start, Home]]).unwrap_err();
        assert!(matches!(err, SheepgenError::DuplicateCell { kind: Start, .. }));
    }

    #[test]
    fn test_ragged_rows_are_rejected() {
        let err = Grid::new(vec![vec![Start, Empty], vec![Home]]).unwrap_err();
        assert!(matches!(
            err,
            SheepgenError::NonRectangular { row: 1, expected: 2, actual: 1 }
        ));
    }

    #[test]
    fn test_get_outside_is_none() {
        let grid = Grid::new(vec![vec![Start, Home]]).unwrap();
        assert_eq!(grid.get(Position::new(0, 2)), None);
        assert!(!grid.contains(Position::new(1, 0)));
    }
}
