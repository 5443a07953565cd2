//! Rust types mirroring the workflow-service input/output definition JSON.
//!
//! These types are the serde target for the workflow analysis response, the
//! data-table record schema, and the run-set submission payload. The receiving
//! service validates payloads structurally, so each `InputSource` variant must
//! serialize with exactly the fields listed here.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// =============================================================================
// TYPES — the workflow's declared input types
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PrimitiveType {
    String,
    Int,
    Float,
    Boolean,
    File,
}

impl PrimitiveType {
    pub fn name(&self) -> &'static str {
        match self {
            PrimitiveType::String => "String",
            PrimitiveType::Int => "Int",
            PrimitiveType::Float => "Float",
            PrimitiveType::Boolean => "Boolean",
            PrimitiveType::File => "File",
        }
    }
}

/// A workflow-declared value type. Immutable once the workflow is selected;
/// only `InputSource` leaves change during editing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InputType {
    Primitive { primitive_type: PrimitiveType },
    Optional { optional_type: Box<InputType> },
    Array { array_type: Box<InputType> },
    Struct { fields: Vec<StructField> },
}

/// One named field of a struct type. Field names are unique within a struct.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructField {
    pub field_name: String,
    pub field_type: InputType,
}

impl InputType {
    pub fn primitive(p: PrimitiveType) -> Self {
        InputType::Primitive { primitive_type: p }
    }

    pub fn optional(inner: InputType) -> Self {
        InputType::Optional {
            optional_type: Box::new(inner),
        }
    }

    pub fn array(inner: InputType) -> Self {
        InputType::Array {
            array_type: Box::new(inner),
        }
    }

    pub fn structure(fields: Vec<StructField>) -> Self {
        InputType::Struct { fields }
    }

    pub fn is_optional(&self) -> bool {
        matches!(self, InputType::Optional { .. })
    }

    /// Strips exactly one `optional` layer; identity for everything else.
    /// `optional(optional(T))` unwraps to `optional(T)`, never to `T`.
    pub fn unwrap_optional(&self) -> &InputType {
        match self {
            InputType::Optional { optional_type } => optional_type,
            other => other,
        }
    }

    /// The struct fields reachable after one optional unwrap, so
    /// `optional(struct)` counts as struct-shaped.
    pub fn struct_fields(&self) -> Option<&[StructField]> {
        match self.unwrap_optional() {
            InputType::Struct { fields } => Some(fields),
            _ => None,
        }
    }

    /// Short display label. Optionality is signaled by row styling, not by
    /// the label, so an optional renders as its inner type's text.
    pub fn type_text(&self) -> String {
        match self {
            InputType::Primitive { primitive_type } => primitive_type.name().to_string(),
            InputType::Optional { optional_type } => optional_type.type_text(),
            InputType::Array { array_type } => format!("Array[{}]", array_type.type_text()),
            InputType::Struct { .. } => "Struct".to_string(),
        }
    }

    /// The source kinds the editor may offer for this type, in display order.
    /// `None` is offered iff the type is optional at the top level.
    pub fn legal_source_kinds(&self) -> Vec<SourceKind> {
        let editor = if self.struct_fields().is_some() {
            SourceKind::ObjectBuilder
        } else {
            SourceKind::Literal
        };
        let mut kinds = vec![editor, SourceKind::RecordLookup];
        if self.is_optional() {
            kinds.push(SourceKind::None);
        }
        kinds
    }

    /// The source a freshly selected kind starts from. Replaces the previous
    /// source entirely; old field values are not preserved. An object builder
    /// is seeded from the type up front so the field-count/order invariant
    /// holds from the first instant.
    pub fn initial_source(&self, kind: SourceKind) -> InputSource {
        match kind {
            SourceKind::None => InputSource::None,
            SourceKind::RecordLookup => InputSource::RecordLookup {
                record_attribute: String::new(),
            },
            SourceKind::Literal => InputSource::Literal {
                parameter_value: String::new(),
            },
            SourceKind::ObjectBuilder => match self.struct_fields() {
                Some(fields) => InputSource::seed_object_builder(fields),
                None => InputSource::Literal {
                    parameter_value: String::new(),
                },
            },
        }
    }
}

// =============================================================================
// SOURCES — how an input's runtime value is supplied
// =============================================================================

/// The mechanism supplying an input's value at run time. The shape of a
/// source must mirror the shape of its paired type: an `object_builder` has
/// exactly the struct's field count and order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InputSource {
    #[default]
    None,
    Literal {
        parameter_value: String,
    },
    RecordLookup {
        record_attribute: String,
    },
    ObjectBuilder {
        fields: Vec<SourceField>,
    },
}

/// One field of an `object_builder` source. The `name` tag lets a partially
/// filled builder remember field names before every leaf has a value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceField {
    pub name: String,
    pub source: InputSource,
}

impl InputSource {
    pub fn literal(value: impl Into<String>) -> Self {
        InputSource::Literal {
            parameter_value: value.into(),
        }
    }

    pub fn record_lookup(attribute: impl Into<String>) -> Self {
        InputSource::RecordLookup {
            record_attribute: attribute.into(),
        }
    }

    /// A fresh `object_builder` mirroring the struct's field count and order,
    /// every leaf unset and every name tag empty.
    pub fn seed_object_builder(fields: &[StructField]) -> Self {
        InputSource::ObjectBuilder {
            fields: fields
                .iter()
                .map(|_| SourceField {
                    name: String::new(),
                    source: InputSource::None,
                })
                .collect(),
        }
    }

    /// A copy with the tag kept and only the literal text replaced. Sources
    /// of any other kind are returned unchanged.
    pub fn with_parameter_value(&self, value: impl Into<String>) -> Self {
        match self {
            InputSource::Literal { .. } => InputSource::Literal {
                parameter_value: value.into(),
            },
            other => other.clone(),
        }
    }

    /// A copy with the tag kept and only the attribute name replaced. Sources
    /// of any other kind are returned unchanged.
    pub fn with_record_attribute(&self, attribute: impl Into<String>) -> Self {
        match self {
            InputSource::RecordLookup { .. } => InputSource::RecordLookup {
                record_attribute: attribute.into(),
            },
            other => other.clone(),
        }
    }

    pub fn kind(&self) -> SourceKind {
        match self {
            InputSource::None => SourceKind::None,
            InputSource::Literal { .. } => SourceKind::Literal,
            InputSource::RecordLookup { .. } => SourceKind::RecordLookup,
            InputSource::ObjectBuilder { .. } => SourceKind::ObjectBuilder,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceKind {
    Literal,
    RecordLookup,
    ObjectBuilder,
    None,
}

impl SourceKind {
    /// The label shown in the source selector.
    pub fn label(&self) -> &'static str {
        match self {
            SourceKind::Literal => "Type a Value",
            SourceKind::RecordLookup => "Fetch from Data Table",
            SourceKind::ObjectBuilder => "Use Struct Builder",
            SourceKind::None => "None",
        }
    }
}

// =============================================================================
// DEFINITION ENTRIES
// =============================================================================

/// One typed input parameter and its configured source. The entry's position
/// in the definition list is its stable configuration identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputDefinitionEntry {
    pub input_name: String,
    pub input_type: InputType,
    #[serde(default)]
    pub source: InputSource,
}

/// Where a workflow output lands after a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum OutputDestination {
    #[default]
    None,
    RecordUpdate {
        record_attribute: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputDefinitionEntry {
    pub output_name: String,
    pub output_type: InputType,
    #[serde(default)]
    pub destination: OutputDestination,
}

// =============================================================================
// RECORD SCHEMA — the data-table collaborator's attribute set
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeSchema {
    pub name: String,
    pub datatype: String,
}

/// The shape of one record type in the paired data table. Read-only to this
/// crate; only attribute names are consulted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordTypeSchema {
    pub name: String,
    pub attributes: Vec<AttributeSchema>,
    #[serde(default)]
    pub count: u64,
}

/// Attribute list keyed by name, the form lookup validation consumes.
pub fn key_by_name(attributes: &[AttributeSchema]) -> HashMap<String, AttributeSchema> {
    attributes
        .iter()
        .map(|a| (a.name.clone(), a.clone()))
        .collect()
}
