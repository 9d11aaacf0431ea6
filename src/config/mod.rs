pub mod traits;
pub mod evolution;
pub mod search;
pub mod manager;

pub use manager::{ConfigManager, AppConfig};
pub use evolution::EvolutionConfig;
pub use search::SearchConfig;
pub use traits::{ConfigSection, ConfigManifest, FieldManifest};
