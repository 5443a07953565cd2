//! Nested struct editor state.
//!
//! A `StructBuilder` scopes the editor to one node of a struct-typed input:
//! the current scope is an index path into the field tree, and every view
//! (breadcrumbs, field list) and mutation (set a field's source) is derived
//! from that path. Navigation is the only way the path changes, and every
//! navigation step explicitly resets the transient view state (search text,
//! show-optional toggle) rather than leaving that to render-time comparison.

pub mod path;

use crate::error::ConfigError;
use crate::parse::types::{InputSource, InputType, SourceField};

pub use path::StructPath;

use path::{field_name_at, set_source_at, set_source_name_at, source_at, type_at};

/// One field of the current scope: its declared type zipped with its
/// configured source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructFieldView {
    pub index: usize,
    pub field_name: String,
    pub field_type: InputType,
    pub type_text: String,
    pub optional: bool,
    pub source: InputSource,
}

/// Editor state for one struct-typed input row. Created when the builder
/// view opens, discarded when it closes; the edited source tree is read
/// back with [`StructBuilder::root_source`] and written to the row's
/// configuration index.
#[derive(Debug, Clone)]
pub struct StructBuilder {
    root_name: String,
    root_type: InputType,
    root_source: InputSource,
    path: StructPath,
    search_filter: String,
    show_optional: bool,
}

impl StructBuilder {
    /// Opens the builder at the root of a struct-typed input. Seeds the
    /// source from the type unless it is already a builder of matching
    /// arity, so the zip invariant holds before any edit.
    pub fn new(
        name: impl Into<String>,
        input_type: InputType,
        source: InputSource,
    ) -> Result<Self, ConfigError> {
        let name = name.into();
        let Some(type_fields) = input_type.struct_fields() else {
            return Err(ConfigError::NotAStruct { field_name: name });
        };
        let root_source = match &source {
            InputSource::ObjectBuilder { fields } if fields.len() == type_fields.len() => source,
            _ => InputSource::seed_object_builder(type_fields),
        };
        Ok(StructBuilder {
            root_name: name,
            root_type: input_type,
            root_source,
            path: StructPath::new(),
            search_filter: String::new(),
            show_optional: true,
        })
    }

    pub fn is_root(&self) -> bool {
        self.path.is_root()
    }

    pub fn depth(&self) -> usize {
        self.path.depth()
    }

    pub fn path(&self) -> &StructPath {
        &self.path
    }

    pub fn root_name(&self) -> &str {
        &self.root_name
    }

    /// The full edited source tree, ready to write back at the input row's
    /// configuration index.
    pub fn root_source(&self) -> &InputSource {
        &self.root_source
    }

    pub fn into_source(self) -> InputSource {
        self.root_source
    }

    // -- transient view state --------------------------------------------

    pub fn search_filter(&self) -> &str {
        &self.search_filter
    }

    pub fn set_search_filter(&mut self, filter: impl Into<String>) {
        self.search_filter = filter.into();
    }

    pub fn show_optional(&self) -> bool {
        self.show_optional
    }

    pub fn set_show_optional(&mut self, show: bool) {
        self.show_optional = show;
    }

    fn reset_view_state(&mut self) {
        self.search_filter.clear();
        self.show_optional = true;
    }

    // -- scoped views -----------------------------------------------------

    /// The declared type at the current scope. The path is only ever
    /// extended through struct fields, so the fallback is unreachable.
    pub fn current_type(&self) -> &InputType {
        type_at(&self.root_type, &self.path).unwrap_or(&self.root_type)
    }

    pub fn current_source(&self) -> &InputSource {
        source_at(&self.root_source, &self.path).unwrap_or(&self.root_source)
    }

    /// The field name at the current scope; the input's own name at root.
    pub fn current_name(&self) -> &str {
        field_name_at(&self.root_type, &self.path).unwrap_or(&self.root_name)
    }

    /// The field name at each non-empty prefix of the path, shallowest
    /// first. Clicking breadcrumb `p` maps to `jump(p)`.
    pub fn breadcrumbs(&self) -> Vec<String> {
        (1..=self.path.depth())
            .filter_map(|len| {
                field_name_at(&self.root_type, &self.path.prefix(len)).map(str::to_string)
            })
            .collect()
    }

    /// The per-field view at the current scope: type fields zipped with
    /// source fields. Arity is guaranteed by seeding, so the zip drops
    /// nothing.
    pub fn fields(&self) -> Vec<StructFieldView> {
        let type_fields = self.current_type().struct_fields().unwrap_or(&[]);
        let source_fields: &[SourceField] = match self.current_source() {
            InputSource::ObjectBuilder { fields } => fields,
            _ => &[],
        };
        type_fields
            .iter()
            .zip(source_fields)
            .enumerate()
            .map(|(index, (t, s))| StructFieldView {
                index,
                field_name: t.field_name.clone(),
                type_text: t.field_type.type_text(),
                optional: t.field_type.is_optional(),
                field_type: t.field_type.clone(),
                source: s.source.clone(),
            })
            .collect()
    }

    /// `fields()` with the transient search/show-optional state applied.
    pub fn visible_fields(&self) -> Vec<StructFieldView> {
        let query = self.search_filter.to_lowercase();
        self.fields()
            .into_iter()
            .filter(|f| query.is_empty() || f.field_name.to_lowercase().contains(&query))
            .filter(|f| self.show_optional || !f.optional)
            .collect()
    }

    // -- navigation -------------------------------------------------------

    /// Drill into the struct-typed field at `index` in the current scope.
    /// Seeds that field's builder source if it isn't one yet, and stamps the
    /// declared field name into the source mirror's name tag.
    pub fn descend(&mut self, index: usize) -> Result<(), ConfigError> {
        let fields = self
            .current_type()
            .struct_fields()
            .ok_or_else(|| ConfigError::NotAStruct {
                field_name: self.current_name().to_string(),
            })?;
        let field = fields.get(index).ok_or(ConfigError::FieldIndexOutOfBounds {
            index,
            len: fields.len(),
        })?;
        let target_fields = field
            .field_type
            .struct_fields()
            .ok_or_else(|| ConfigError::NotAStruct {
                field_name: field.field_name.clone(),
            })?
            .to_vec();
        let field_name = field.field_name.clone();

        let mut child = self.path.clone();
        child.push(index);

        let already_seeded = matches!(
            source_at(&self.root_source, &child),
            Some(InputSource::ObjectBuilder { fields }) if fields.len() == target_fields.len()
        );
        if !already_seeded {
            let seeded = InputSource::seed_object_builder(&target_fields);
            self.root_source = set_source_at(&self.root_source, &child, seeded)?;
        }
        self.root_source = set_source_name_at(&self.root_source, &child, &field_name)?;

        self.path = child;
        self.reset_view_state();
        Ok(())
    }

    /// Back one level. At any nested depth the equivalent of "Done" is
    /// "Back"; only the root offers "Done".
    pub fn ascend(&mut self) -> Result<(), ConfigError> {
        if self.path.pop().is_none() {
            return Err(ConfigError::AlreadyAtRoot);
        }
        self.reset_view_state();
        Ok(())
    }

    /// Breadcrumb click: truncate the path to `depth` elements (0 = root).
    /// Depths at or beyond the current one leave the path unchanged but
    /// still reset the view state.
    pub fn jump(&mut self, depth: usize) {
        self.path.truncate(depth);
        self.reset_view_state();
    }

    // -- scoped mutation --------------------------------------------------

    /// Replace the whole source at the current scope. At root this bypasses
    /// path addressing and swaps the entire tree.
    pub fn set_current_source(&mut self, source: InputSource) -> Result<(), ConfigError> {
        if self.path.is_root() {
            self.root_source = source;
        } else {
            self.root_source = set_source_at(&self.root_source, &self.path, source)?;
        }
        Ok(())
    }

    /// Set the source of the field at `index` in the current scope, and
    /// record the declared field name in the mirror's name tag.
    pub fn set_field_source(
        &mut self,
        index: usize,
        source: InputSource,
    ) -> Result<(), ConfigError> {
        let fields = self
            .current_type()
            .struct_fields()
            .ok_or_else(|| ConfigError::NotAStruct {
                field_name: self.current_name().to_string(),
            })?;
        let field_name = fields
            .get(index)
            .ok_or(ConfigError::FieldIndexOutOfBounds {
                index,
                len: fields.len(),
            })?
            .field_name
            .clone();

        let mut child = self.path.clone();
        child.push(index);
        self.root_source = set_source_at(&self.root_source, &child, source)?;
        self.root_source = set_source_name_at(&self.root_source, &child, &field_name)?;
        Ok(())
    }
}
