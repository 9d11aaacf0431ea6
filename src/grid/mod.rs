pub mod model;
pub mod parser;

pub use model::Grid;
pub use parser::GridParser;
