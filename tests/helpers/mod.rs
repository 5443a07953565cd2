#![allow(dead_code)]

use submission_config::inputs::InputDefinition;
use submission_config::parse::types::*;

// =============================================================================
// Type builders
// =============================================================================

pub fn int_type() -> InputType {
    InputType::primitive(PrimitiveType::Int)
}

pub fn string_type() -> InputType {
    InputType::primitive(PrimitiveType::String)
}

pub fn float_type() -> InputType {
    InputType::primitive(PrimitiveType::Float)
}

pub fn boolean_type() -> InputType {
    InputType::primitive(PrimitiveType::Boolean)
}

pub fn file_type() -> InputType {
    InputType::primitive(PrimitiveType::File)
}

pub fn field(name: &str, field_type: InputType) -> StructField {
    StructField {
        field_name: name.into(),
        field_type,
    }
}

/// struct { a: Int, b: String }
pub fn pair_struct() -> InputType {
    InputType::structure(vec![field("a", int_type()), field("b", string_type())])
}

/// struct { id: String, metrics: struct { depth: Int, purity: optional(Float) } }
pub fn nested_struct() -> InputType {
    InputType::structure(vec![
        field("id", string_type()),
        field(
            "metrics",
            InputType::structure(vec![
                field("depth", int_type()),
                field("purity", InputType::optional(float_type())),
            ]),
        ),
    ])
}

// =============================================================================
// Entry / definition builders
// =============================================================================

pub fn entry(name: &str, input_type: InputType, source: InputSource) -> InputDefinitionEntry {
    InputDefinitionEntry {
        input_name: name.into(),
        input_type,
        source,
    }
}

pub fn definition(entries: Vec<InputDefinitionEntry>) -> InputDefinition {
    InputDefinition::new(entries)
}

pub fn attribute(name: &str, datatype: &str) -> AttributeSchema {
    AttributeSchema {
        name: name.into(),
        datatype: datatype.into(),
    }
}

pub fn attributes_named(names: &[&str]) -> std::collections::HashMap<String, AttributeSchema> {
    key_by_name(
        &names
            .iter()
            .map(|n| attribute(n, "STRING"))
            .collect::<Vec<_>>(),
    )
}
