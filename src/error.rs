//! Unified error type for the submission-config model.
//!
//! Only programming-invariant violations and JSON parse failures live here.
//! Validation findings are warnings (`validate::ValidationWarning`), never
//! errors: a half-filled configuration is a normal editor state.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("failed to parse {what} JSON: {message}")]
    Parse { what: &'static str, message: String },

    #[error("field index {index} is out of bounds for a struct with {len} fields")]
    FieldIndexOutOfBounds { index: usize, len: usize },

    #[error("'{field_name}' is not a struct and cannot be descended into")]
    NotAStruct { field_name: String },

    #[error("the source at this path is not an object builder")]
    NotAnObjectBuilder,

    #[error("already at the root of the struct being edited")]
    AlreadyAtRoot,

    #[error("a field path must contain at least one index")]
    EmptyFieldPath,
}

impl ConfigError {
    pub fn parse(what: &'static str, err: impl std::fmt::Display) -> Self {
        ConfigError::Parse {
            what,
            message: err.to_string(),
        }
    }
}
