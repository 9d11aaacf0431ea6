pub mod simulation;
pub mod generation;
pub mod trace;
pub mod runner;

pub use runner::{SearchOutcome, SearchRunner};
