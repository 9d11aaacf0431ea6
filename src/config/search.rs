use super::traits::{ConfigManifest, ConfigSection, FieldManifest};
use crate::error::SheepgenError;
use serde::{Deserialize, Serialize};

/// Crossover needs a cut point strictly inside the chromosome
pub const MIN_MAX_STEPS: usize = 3;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Chromosome length and step budget
    pub max_steps: usize,
    /// Reject unrecognised grid tokens instead of reading them as empty
    pub strict_cells: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_steps: 20,
            strict_cells: false,
        }
    }
}

impl ConfigSection for SearchConfig {
    fn section_name() -> &'static str {
        "search"
    }

    fn validate(&self) -> Result<(), SheepgenError> {
        if self.max_steps < MIN_MAX_STEPS {
            return Err(SheepgenError::Configuration(format!(
                "Max steps must be at least {}, got {}",
                MIN_MAX_STEPS, self.max_steps
            )));
        }
        Ok(())
    }

    fn to_manifest(&self) -> ConfigManifest {
        ConfigManifest {
            section: "Search".to_string(),
            fields: vec![
                FieldManifest {
                    name: "max_steps".to_string(),
                    field_type: "integer".to_string(),
                    default: serde_json::json!(20),
                    min: Some(MIN_MAX_STEPS as f64),
                    max: None,
                    description: "Moves per chromosome and step budget".to_string(),
                },
                FieldManifest {
                    name: "strict_cells".to_string(),
                    field_type: "bool".to_string(),
                    default: serde_json::json!(false),
                    min: None,
                    max: None,
                    description: "Fail on unknown grid tokens".to_string(),
                },
            ],
        }
    }
}
