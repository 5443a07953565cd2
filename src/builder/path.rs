//! Structural addressing into nested Type/Source trees by field-index path.
//!
//! A `StructPath` is a chain of struct-field indices, root-relative; length
//! zero is the root. Reads follow the chain through the Type tree (declared
//! field types and names) or the mirroring Source tree (configured sources
//! and their name tags). Writes rebuild the root Source with one node
//! replaced, leaving every other node shared-by-clone.
//!
//! Each descent step unwraps one `optional` layer before reading struct
//! fields, so an `optional(struct)` chain addresses the same nodes the
//! editor displays.

use crate::error::ConfigError;
use crate::parse::types::{InputSource, InputType};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StructPath(Vec<usize>);

impl StructPath {
    pub fn new() -> Self {
        StructPath(Vec::new())
    }

    pub fn depth(&self) -> usize {
        self.0.len()
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    pub fn push(&mut self, index: usize) {
        self.0.push(index);
    }

    pub fn pop(&mut self) -> Option<usize> {
        self.0.pop()
    }

    pub fn truncate(&mut self, len: usize) {
        self.0.truncate(len);
    }

    pub fn indices(&self) -> &[usize] {
        &self.0
    }

    /// The prefix of the first `len` indices.
    pub fn prefix(&self, len: usize) -> StructPath {
        StructPath(self.0[..len.min(self.0.len())].to_vec())
    }
}

impl From<Vec<usize>> for StructPath {
    fn from(indices: Vec<usize>) -> Self {
        StructPath(indices)
    }
}

// ---------------------------------------------------------------------------
// Reads
// ---------------------------------------------------------------------------

/// The Type node reached by following the path. The final node is returned
/// as declared (a trailing optional wrapper is preserved).
pub fn type_at<'a>(root: &'a InputType, path: &StructPath) -> Option<&'a InputType> {
    let mut current = root;
    for &index in path.indices() {
        current = &current.struct_fields()?.get(index)?.field_type;
    }
    Some(current)
}

/// The declared field name at the path's last step. Empty paths have no
/// field name (the root's label lives outside the type tree).
pub fn field_name_at<'a>(root: &'a InputType, path: &StructPath) -> Option<&'a str> {
    let (&last, prefix) = path.indices().split_last()?;
    let parent = type_at(root, &StructPath(prefix.to_vec()))?;
    parent
        .struct_fields()?
        .get(last)
        .map(|f| f.field_name.as_str())
}

/// The Source node mirroring `type_at` for the same path.
pub fn source_at<'a>(root: &'a InputSource, path: &StructPath) -> Option<&'a InputSource> {
    let mut current = root;
    for &index in path.indices() {
        match current {
            InputSource::ObjectBuilder { fields } => current = &fields.get(index)?.source,
            _ => return None,
        }
    }
    Some(current)
}

/// The name tag stored on the source-tree mirror at the path's last step.
pub fn source_name_at<'a>(root: &'a InputSource, path: &StructPath) -> Option<&'a str> {
    let (&last, prefix) = path.indices().split_last()?;
    match source_at(root, &StructPath(prefix.to_vec()))? {
        InputSource::ObjectBuilder { fields } => fields.get(last).map(|f| f.name.as_str()),
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Writes
// ---------------------------------------------------------------------------

/// A new root Source with the node at `path` replaced by `new_source`.
/// An empty path replaces the whole tree.
pub fn set_source_at(
    root: &InputSource,
    path: &StructPath,
    new_source: InputSource,
) -> Result<InputSource, ConfigError> {
    replace_source(root, path.indices(), new_source)
}

fn replace_source(
    current: &InputSource,
    indices: &[usize],
    new_source: InputSource,
) -> Result<InputSource, ConfigError> {
    let Some((&index, rest)) = indices.split_first() else {
        return Ok(new_source);
    };
    match current {
        InputSource::ObjectBuilder { fields } => {
            let field = fields.get(index).ok_or(ConfigError::FieldIndexOutOfBounds {
                index,
                len: fields.len(),
            })?;
            let replaced = replace_source(&field.source, rest, new_source)?;
            let mut fields = fields.clone();
            fields[index].source = replaced;
            Ok(InputSource::ObjectBuilder { fields })
        }
        _ => Err(ConfigError::NotAnObjectBuilder),
    }
}

/// A new root Source with the name tag at `path` set to `name`. The path
/// must be non-empty: the root mirror carries no name tag.
pub fn set_source_name_at(
    root: &InputSource,
    path: &StructPath,
    name: &str,
) -> Result<InputSource, ConfigError> {
    rename_source_field(root, path.indices(), name)
}

fn rename_source_field(
    current: &InputSource,
    indices: &[usize],
    name: &str,
) -> Result<InputSource, ConfigError> {
    let (&index, rest) = indices.split_first().ok_or(ConfigError::EmptyFieldPath)?;
    match current {
        InputSource::ObjectBuilder { fields } => {
            let field = fields.get(index).ok_or(ConfigError::FieldIndexOutOfBounds {
                index,
                len: fields.len(),
            })?;
            let mut fields = fields.clone();
            if rest.is_empty() {
                fields[index].name = name.to_string();
            } else {
                fields[index].source = rename_source_field(&field.source, rest, name)?;
            }
            Ok(InputSource::ObjectBuilder { fields })
        }
        _ => Err(ConfigError::NotAnObjectBuilder),
    }
}
