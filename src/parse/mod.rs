//! Parse phase: JSON from the surrounding application → model types.

pub mod types;

pub use types::*;

use crate::error::ConfigError;
use crate::inputs::InputDefinition;
use crate::outputs::OutputDefinition;

/// Deserialize a workflow analysis input-definition list.
pub fn parse_input_definitions(json: &str) -> Result<InputDefinition, ConfigError> {
    serde_json::from_str::<Vec<InputDefinitionEntry>>(json)
        .map(InputDefinition::new)
        .map_err(|e| ConfigError::parse("input definition", e))
}

/// Deserialize a workflow analysis output-definition list.
pub fn parse_output_definitions(json: &str) -> Result<OutputDefinition, ConfigError> {
    serde_json::from_str::<Vec<OutputDefinitionEntry>>(json)
        .map(OutputDefinition::new)
        .map_err(|e| ConfigError::parse("output definition", e))
}

/// Deserialize a data-table record schema.
pub fn parse_record_schema(json: &str) -> Result<RecordTypeSchema, ConfigError> {
    serde_json::from_str::<RecordTypeSchema>(json)
        .map_err(|e| ConfigError::parse("record schema", e))
}
