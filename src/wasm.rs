//! WASM entry points for browser use.

use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::error::ConfigError;
use crate::parse;
use crate::parse::types::{InputSource, InputType, SourceKind, key_by_name};
use crate::payload::RunSetRequest;
use crate::validate::{self, ValidationWarning};

#[derive(Debug, Clone, Serialize)]
pub struct WarningDto {
    pub code: String,
    pub message: String,
    pub input_name: Option<String>,
}

impl From<&ValidationWarning> for WarningDto {
    fn from(w: &ValidationWarning) -> Self {
        WarningDto {
            code: w.code.to_string(),
            message: w.message.clone(),
            input_name: Some(w.input_name.clone()),
        }
    }
}

fn parse_failure(e: ConfigError) -> WarningDto {
    WarningDto {
        code: "P001".into(),
        message: e.to_string(),
        input_name: None,
    }
}

/// Validate an input-definition list against a record schema.
/// Returns a JSON array of warning objects.
#[wasm_bindgen]
pub fn validate_input_definitions(inputs_json: &str, record_schema_json: &str) -> JsValue {
    let result = validate_input_definitions_inner(inputs_json, record_schema_json);
    serde_wasm_bindgen::to_value(&result).unwrap_or(JsValue::NULL)
}

pub fn validate_input_definitions_inner(
    inputs_json: &str,
    record_schema_json: &str,
) -> Vec<WarningDto> {
    let definition = match parse::parse_input_definitions(inputs_json) {
        Ok(d) => d,
        Err(e) => return vec![parse_failure(e)],
    };

    // An absent schema means "no attributes exist yet", not a failure.
    let attributes = if record_schema_json.trim().is_empty() {
        Default::default()
    } else {
        match parse::parse_record_schema(record_schema_json) {
            Ok(schema) => key_by_name(&schema.attributes),
            Err(e) => return vec![parse_failure(e)],
        }
    };

    validate::validate_inputs(definition.entries(), &attributes)
        .iter()
        .map(WarningDto::from)
        .collect()
}

/// Seed an `object_builder` source from a struct input type.
/// Returns the seeded source, or null if the JSON doesn't describe a struct.
#[wasm_bindgen]
pub fn seed_struct_source(input_type_json: &str) -> JsValue {
    match seed_struct_source_inner(input_type_json) {
        Ok(source) => serde_wasm_bindgen::to_value(&source).unwrap_or(JsValue::NULL),
        Err(_) => JsValue::NULL,
    }
}

pub fn seed_struct_source_inner(input_type_json: &str) -> Result<InputSource, ConfigError> {
    let input_type: InputType = serde_json::from_str(input_type_json)
        .map_err(|e| ConfigError::parse("input type", e))?;
    if input_type.struct_fields().is_none() {
        return Err(ConfigError::NotAStruct {
            field_name: input_type.type_text(),
        });
    }
    Ok(input_type.initial_source(SourceKind::ObjectBuilder))
}

/// Assemble the run-set submission payload.
/// Returns the payload object, or null on malformed input.
#[wasm_bindgen]
pub fn build_run_set_request(
    workflow_url: &str,
    inputs_json: &str,
    outputs_json: &str,
    record_type: &str,
    record_ids_json: &str,
) -> JsValue {
    match build_run_set_request_inner(
        workflow_url,
        inputs_json,
        outputs_json,
        record_type,
        record_ids_json,
    ) {
        Ok(request) => serde_wasm_bindgen::to_value(&request).unwrap_or(JsValue::NULL),
        Err(_) => JsValue::NULL,
    }
}

pub fn build_run_set_request_inner(
    workflow_url: &str,
    inputs_json: &str,
    outputs_json: &str,
    record_type: &str,
    record_ids_json: &str,
) -> Result<RunSetRequest, ConfigError> {
    let inputs = parse::parse_input_definitions(inputs_json)?;
    let outputs = if outputs_json.trim().is_empty() {
        Default::default()
    } else {
        parse::parse_output_definitions(outputs_json)?
    };
    let record_ids: Vec<String> = serde_json::from_str(record_ids_json)
        .map_err(|e| ConfigError::parse("record ids", e))?;
    Ok(RunSetRequest::new(
        workflow_url,
        &inputs,
        &outputs,
        record_type,
        record_ids,
    ))
}
