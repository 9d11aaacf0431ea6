use super::traits::{ConfigManifest, ConfigSection, FieldManifest};
use crate::error::SheepgenError;
use serde::{Deserialize, Serialize};

/// Smallest population whose top half still holds two distinct parents
pub const MIN_POPULATION_SIZE: usize = 4;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvolutionConfig {
    pub population_size: usize,
    pub num_generations: usize,
    pub mutation_rate: f64,
    pub seed: Option<u64>,
    pub parallel_evaluation: bool,
}

impl Default for EvolutionConfig {
    fn default() -> Self {
        Self {
            population_size: 60,
            num_generations: 200,
            mutation_rate: 0.25,
            seed: None,
            parallel_evaluation: true,
        }
    }
}

impl ConfigSection for EvolutionConfig {
    fn section_name() -> &'static str {
        "evolution"
    }

    fn validate(&self) -> Result<(), SheepgenError> {
        if self.population_size < MIN_POPULATION_SIZE {
            return Err(SheepgenError::Configuration(format!(
                "Population size must be at least {}",
                MIN_POPULATION_SIZE
            )));
        }
        if self.num_generations == 0 {
            return Err(SheepgenError::Configuration(
                "Number of generations must be at least 1".to_string()
            ));
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(SheepgenError::Configuration(
                "Mutation rate must be between 0 and 1".to_string()
            ));
        }
        Ok(())
    }

    fn to_manifest(&self) -> ConfigManifest {
        ConfigManifest {
            section: "Evolution".to_string(),
            fields: vec![
                FieldManifest {
                    name: "population_size".to_string(),
                    field_type: "integer".to_string(),
                    default: serde_json::json!(60),
                    min: Some(MIN_POPULATION_SIZE as f64),
                    max: Some(100_000.0),
                    description: "Number of chromosomes per generation".to_string(),
                },
                FieldManifest {
                    name: "num_generations".to_string(),
                    field_type: "integer".to_string(),
                    default: serde_json::json!(200),
                    min: Some(1.0),
                    max: None,
                    description: "Fixed number of breeding cycles".to_string(),
                },
                FieldManifest {
                    name: "mutation_rate".to_string(),
                    field_type: "float".to_string(),
                    default: serde_json::json!(0.25),
                    min: Some(0.0),
                    max: Some(1.0),
                    description: "Chance that a child gets one random gene replaced".to_string(),
                },
                FieldManifest {
                    name: "seed".to_string(),
                    field_type: "integer".to_string(),
                    default: serde_json::Value::Null,
                    min: Some(0.0),
                    max: None,
                    description: "RNG seed; omit for a fresh run each time".to_string(),
                },
                FieldManifest {
                    name: "parallel_evaluation".to_string(),
                    field_type: "bool".to_string(),
                    default: serde_json::json!(true),
                    min: None,
                    max: None,
                    description: "Score chromosomes on the rayon thread pool".to_string(),
                },
            ],
        }
    }
}
