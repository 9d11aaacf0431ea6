use crate::error::{Result, SheepgenError};
use crate::grid::model::Grid;
use crate::types::CellKind;

/// Reads the whitespace-separated text form of a grid
///
/// ```text
/// S . .
/// . T .
/// . . H
/// ```
pub struct GridParser {
    strict: bool,
}

impl GridParser {
    /// Unknown tokens become empty cells
    pub fn lenient() -> Self {
        Self { strict: false }
    }

    /// Unknown tokens are an error
    pub fn strict() -> Self {
        Self { strict: true }
    }

    pub fn new(strict: bool) -> Self {
        Self { strict }
    }

    pub fn parse(&self, text: &str) -> Result<Grid> {
        let mut cells = Vec::new();

        for (row, line) in text.trim().lines().enumerate() {
            let parsed = line
                .split_whitespace()
                .enumerate()
                .map(|(col, token)| self.parse_token(token, row, col))
                .collect::<Result<Vec<_>>>()?;
            cells.push(parsed);
        }

        Grid::new(cells)
    }

    /// Like `parse`, but the caller also states the expected size
    pub fn parse_with_dimensions(&self, text: &str, rows: usize, cols: usize) -> Result<Grid> {
        let grid = self.parse(text)?;
        if grid.rows() != rows || grid.cols() != cols {
            return Err(SheepgenError::DimensionMismatch {
                expected_rows: rows,
                expected_cols: cols,
                rows: grid.rows(),
                cols: grid.cols(),
            });
        }
        Ok(grid)
    }

    fn parse_token(&self, token: &str, row: usize, col: usize) -> Result<CellKind> {
        match CellKind::from_token(token) {
            Some(kind) => Ok(kind),
            None if self.strict => Err(SheepgenError::UnknownCell {
                token: token.to_string(),
                row,
                col,
            }),
            None => {
                log::debug!("Treating '{}' at ({}, {}) as empty", token, row, col);
                Ok(CellKind::Empty)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Position;

    #[test]
    fn test_parse_basic_grid() {
        let grid = GridParser::lenient()
            .parse("\n S . .\n . T .\n . . H \n")
            .unwrap();
        assert_eq!((grid.rows(), grid.cols()), (3, 3));
        assert_eq!(grid.cell_at(Position::new(1, 1)), CellKind::Tiger);
        assert_eq!(grid.home(), Position::new(2, 2));
    }

    #[test]
    fn test_lenient_maps_unknown_to_empty() {
        let grid = GridParser::lenient().parse("S x H").unwrap();
        assert_eq!(grid.cell_at(Position::new(0, 1)), CellKind::Empty);
    }

    #[test]
    fn test_strict_rejects_unknown() {
        let err = GridParser::strict().parse("S x H").unwrap_err();
        assert!(matches!(err, SheepgenError::UnknownCell { row: 0, col: 1, .. }));
    }

    #[test]
    fn test_dimension_mismatch() {
        let err = GridParser::lenient()
            .parse_with_dimensions("S C C H", 2, 4)
            .unwrap_err();
        assert!(matches!(err, SheepgenError::DimensionMismatch { rows: 1, cols: 4, .. }));
    }

    #[test]
    fn test_empty_text() {
        assert!(matches!(
            GridParser::lenient().parse("   \n"),
            Err(SheepgenError::EmptyGrid)
        ));
    }
}
