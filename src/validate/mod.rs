//! Pure warning checks over an input definition and a record schema.
//!
//! Each check returns the subset of entries satisfying the flagged condition.
//! These run on every render, so they are linear in entry count and never
//! fail: missing external context (an empty attribute map) is the
//! maximally-permissive case, not an error.

use std::collections::HashMap;

use crate::inputs::parse_input_name;
use crate::parse::types::{
    AttributeSchema, InputDefinitionEntry, InputSource, InputType, PrimitiveType, SourceField,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationWarning {
    pub code: &'static str,
    pub message: String,
    pub input_name: String,
    /// The variable segment of the input name, the handle the table uses to
    /// decorate the offending row.
    pub variable: String,
    pub configuration_index: usize,
}

impl std::fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[{}] {} (input '{}')",
            self.code, self.message, self.input_name
        )
    }
}

fn warning(
    code: &'static str,
    message: String,
    index: usize,
    entry: &InputDefinitionEntry,
) -> ValidationWarning {
    ValidationWarning {
        code,
        message,
        input_name: entry.input_name.clone(),
        variable: parse_input_name(&entry.input_name).variable,
        configuration_index: index,
    }
}

/// Run all three checks, concatenated in code order.
pub fn validate_inputs(
    entries: &[InputDefinitionEntry],
    attributes: &HashMap<String, AttributeSchema>,
) -> Vec<ValidationWarning> {
    let mut warnings = required_inputs_without_source(entries);
    warnings.extend(inputs_missing_expected_attributes(entries, attributes));
    warnings.extend(inputs_with_incorrect_values(entries));
    warnings
}

// ---------------------------------------------------------------------------
// W001: required inputs with no source
// ---------------------------------------------------------------------------

/// Non-optional entries whose source is `none`, or a literal/lookup whose
/// value field is still empty.
pub fn required_inputs_without_source(
    entries: &[InputDefinitionEntry],
) -> Vec<ValidationWarning> {
    entries
        .iter()
        .enumerate()
        .filter(|(_, e)| !e.input_type.is_optional() && source_is_blank(&e.source))
        .map(|(i, e)| {
            warning(
                "W001",
                "this input is required and has no source".to_string(),
                i,
                e,
            )
        })
        .collect()
}

fn source_is_blank(source: &InputSource) -> bool {
    match source {
        InputSource::None => true,
        InputSource::Literal { parameter_value } => parameter_value.is_empty(),
        InputSource::RecordLookup { record_attribute } => record_attribute.is_empty(),
        InputSource::ObjectBuilder { .. } => false,
    }
}

// ---------------------------------------------------------------------------
// W002: record lookups against attributes the data table doesn't have
// ---------------------------------------------------------------------------

/// Entries whose `record_lookup` names an attribute missing from the record
/// schema. An empty map means no attributes exist, so every lookup is flagged.
pub fn inputs_missing_expected_attributes(
    entries: &[InputDefinitionEntry],
    attributes: &HashMap<String, AttributeSchema>,
) -> Vec<ValidationWarning> {
    entries
        .iter()
        .enumerate()
        .filter_map(|(i, e)| match &e.source {
            InputSource::RecordLookup { record_attribute }
                if !attributes.contains_key(record_attribute) =>
            {
                Some(warning(
                    "W002",
                    format!(
                        "attribute '{}' doesn't exist in the data table",
                        record_attribute
                    ),
                    i,
                    e,
                ))
            }
            _ => None,
        })
        .collect()
}

// ---------------------------------------------------------------------------
// W003: literal values that don't parse as their declared type
// ---------------------------------------------------------------------------

/// Entries whose literal value fails the declared type's syntactic rule.
/// Struct-typed entries recurse into their builder fields instead: the entry
/// is flagged if any required leaf is missing or invalid.
pub fn inputs_with_incorrect_values(entries: &[InputDefinitionEntry]) -> Vec<ValidationWarning> {
    entries
        .iter()
        .enumerate()
        .filter_map(|(i, e)| {
            incorrect_value_message(&e.input_type, &e.source).map(|msg| warning("W003", msg, i, e))
        })
        .collect()
}

fn incorrect_value_message(ty: &InputType, source: &InputSource) -> Option<String> {
    match source {
        InputSource::Literal { parameter_value } => literal_error(ty, parameter_value),
        InputSource::ObjectBuilder { fields } => object_builder_error(ty, fields),
        InputSource::None | InputSource::RecordLookup { .. } => None,
    }
}

/// Strict per-primitive parsing: Int via `i64`, Float via `f64` (both on the
/// trimmed text), Boolean exactly "true"/"false", everything else non-empty.
fn literal_error(ty: &InputType, value: &str) -> Option<String> {
    match ty.unwrap_optional() {
        InputType::Primitive { primitive_type } => match primitive_type {
            PrimitiveType::Int => value
                .trim()
                .parse::<i64>()
                .is_err()
                .then(|| format!("'{}' is not a valid Int", value)),
            PrimitiveType::Float => value
                .trim()
                .parse::<f64>()
                .is_err()
                .then(|| format!("'{}' is not a valid Float", value)),
            PrimitiveType::Boolean => (value != "true" && value != "false")
                .then(|| format!("'{}' is not a valid Boolean", value)),
            PrimitiveType::String | PrimitiveType::File => value
                .is_empty()
                .then(|| "value must not be empty".to_string()),
        },
        _ => value
            .is_empty()
            .then(|| "value must not be empty".to_string()),
    }
}

fn object_builder_error(ty: &InputType, fields: &[SourceField]) -> Option<String> {
    // A builder paired with a non-struct type is an invariant violation
    // guarded at seeding time; traversal never attempts a repair.
    let type_fields = ty.struct_fields()?;
    type_fields
        .iter()
        .zip(fields)
        .find(|(t, s)| has_invalid_leaf(&t.field_type, &s.source))
        .map(|(t, _)| {
            format!(
                "struct field '{}' is missing a required value or has an invalid one",
                t.field_name
            )
        })
}

fn has_invalid_leaf(ty: &InputType, source: &InputSource) -> bool {
    match source {
        InputSource::None => !ty.is_optional(),
        InputSource::Literal { parameter_value } => literal_error(ty, parameter_value).is_some(),
        InputSource::RecordLookup { record_attribute } => {
            !ty.is_optional() && record_attribute.is_empty()
        }
        InputSource::ObjectBuilder { fields } => match ty.struct_fields() {
            Some(type_fields) => type_fields
                .iter()
                .zip(fields)
                .any(|(t, s)| has_invalid_leaf(&t.field_type, &s.source)),
            None => false,
        },
    }
}
