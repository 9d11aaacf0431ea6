pub mod movement;
pub mod fitness;

pub use movement::apply_move;
pub use fitness::{FitnessEvaluator, SimulationOutcome};
