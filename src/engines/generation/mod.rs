pub mod chromosome;
pub mod operators;
pub mod population;
pub mod evolution_engine;
pub mod progress;

pub use chromosome::{Chromosome, format_moves};
pub use population::Population;
pub use evolution_engine::{BestChromosome, EvolutionConfig, EvolutionEngine, ProgressCallback, SearchState};
pub use progress::{ChannelProgressCallback, ConsoleProgressCallback, ProgressMessage};
