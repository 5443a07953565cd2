//! Output-definition model: where each workflow output lands after a run.

use serde::{Deserialize, Serialize};

use crate::inputs::parse_input_name;
use crate::parse::types::{OutputDefinitionEntry, OutputDestination};

/// One row of the outputs table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputTableRow {
    pub configuration_index: usize,
    pub task_name: String,
    pub variable: String,
    pub type_text: String,
    pub destination: OutputDestination,
}

/// The ordered output configuration for a selected workflow. Same index
/// discipline as the input definition: display order never changes the
/// slot an edit writes to.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OutputDefinition {
    entries: Vec<OutputDefinitionEntry>,
}

impl OutputDefinition {
    pub fn new(entries: Vec<OutputDefinitionEntry>) -> Self {
        OutputDefinition { entries }
    }

    pub fn entries(&self) -> &[OutputDefinitionEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn annotate(&self) -> Vec<OutputTableRow> {
        self.entries
            .iter()
            .enumerate()
            .map(|(index, entry)| {
                let name = parse_input_name(&entry.output_name);
                let task_name = if name.call.is_empty() {
                    name.workflow
                } else {
                    name.call
                };
                OutputTableRow {
                    configuration_index: index,
                    task_name,
                    variable: name.variable,
                    type_text: entry.output_type.type_text(),
                    destination: entry.destination.clone(),
                }
            })
            .collect()
    }

    /// A new definition where every unset output writes back to a record
    /// attribute named after its variable.
    pub fn with_default_destinations(&self) -> Self {
        let entries = self
            .entries
            .iter()
            .map(|entry| {
                let mut entry = entry.clone();
                if entry.destination == OutputDestination::None {
                    entry.destination = OutputDestination::RecordUpdate {
                        record_attribute: parse_input_name(&entry.output_name).variable,
                    };
                }
                entry
            })
            .collect();
        OutputDefinition { entries }
    }

    /// A new definition with only the given slot's destination replaced.
    /// An out-of-range index returns the definition unchanged.
    pub fn update_destination(
        &self,
        configuration_index: usize,
        destination: OutputDestination,
    ) -> Self {
        let mut entries = self.entries.clone();
        if let Some(entry) = entries.get_mut(configuration_index) {
            entry.destination = destination;
        }
        OutputDefinition { entries }
    }
}
