//! Genetic search for a path that takes a sheep from its start cell to home
//! on a grid of tigers and coins.

pub mod config;
pub mod engines;
pub mod error;
pub mod grid;
pub mod report;
pub mod types;

pub use engines::{SearchOutcome, SearchRunner};
pub use error::{Result, SheepgenError};
pub use grid::{Grid, GridParser};
