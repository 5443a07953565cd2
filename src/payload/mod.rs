//! Run-set submission payload assembly.
//!
//! The POST body the run-submission service expects: the configured input
//! and output definitions plus the data-table records to launch against.
//! Empty output definitions serialize as `[]`, never omitted.

use serde::{Deserialize, Serialize};

use crate::inputs::InputDefinition;
use crate::outputs::OutputDefinition;
use crate::parse::types::{InputDefinitionEntry, OutputDefinitionEntry};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WdsRecordSet {
    pub record_type: String,
    pub record_ids: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSetRequest {
    pub workflow_url: String,
    pub workflow_input_definitions: Vec<InputDefinitionEntry>,
    pub workflow_output_definitions: Vec<OutputDefinitionEntry>,
    pub wds_records: WdsRecordSet,
}

impl RunSetRequest {
    pub fn new(
        workflow_url: impl Into<String>,
        inputs: &InputDefinition,
        outputs: &OutputDefinition,
        record_type: impl Into<String>,
        record_ids: Vec<String>,
    ) -> Self {
        RunSetRequest {
            workflow_url: workflow_url.into(),
            workflow_input_definitions: inputs.entries().to_vec(),
            workflow_output_definitions: outputs.entries().to_vec(),
            wds_records: WdsRecordSet {
                record_type: record_type.into(),
                record_ids,
            },
        }
    }
}
