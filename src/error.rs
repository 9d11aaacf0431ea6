use crate::types::{CellKind, Position};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SheepgenError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Grid must contain a {0} cell")]
    MissingCell(CellKind),

    #[error("Grid contains more than one {kind} cell: {first} and {second}")]
    DuplicateCell {
        kind: CellKind,
        first: Position,
        second: Position,
    },

    #[error("Grid is not rectangular: row {row} has {actual} cells, expected {expected}")]
    NonRectangular {
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("Grid is {rows}x{cols}, expected {expected_rows}x{expected_cols}")]
    DimensionMismatch {
        expected_rows: usize,
        expected_cols: usize,
        rows: usize,
        cols: usize,
    },

    #[error("Grid is empty")]
    EmptyGrid,

    #[error("Unknown cell '{token}' at row {row}, column {col}")]
    UnknownCell { token: String, row: usize, col: usize },

    #[error("Config load error: {0}")]
    ConfigLoad(#[from] config::ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serde error: {0}")]
    Serde(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SheepgenError>;
