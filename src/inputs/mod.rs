//! Input-definition table model: display rows, sorting, filtering, and
//! index-stable source updates.
//!
//! Display order is presentation state only. Every row carries the
//! `configuration_index` it had in the underlying definition, and all edits
//! go through that index — never through the display position.

use serde::{Deserialize, Serialize};

use crate::parse::types::{InputDefinitionEntry, InputSource};

// =============================================================================
// INPUT NAMES
// =============================================================================

/// The segments of a dotted input name: `workflow.call.variable` for
/// call-scoped inputs, `workflow.variable` for workflow-scoped ones.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedInputName {
    pub workflow: String,
    pub call: String,
    pub variable: String,
}

/// Split a dotted input name. Three segments mean a call-scoped variable;
/// anything else leaves `call` empty. Malformed names degrade to empty
/// strings rather than failing.
pub fn parse_input_name(input_name: &str) -> ParsedInputName {
    let parts: Vec<&str> = input_name.split('.').collect();
    ParsedInputName {
        workflow: parts.first().copied().unwrap_or("").to_string(),
        call: if parts.len() == 3 {
            parts[1].to_string()
        } else {
            String::new()
        },
        variable: parts.last().copied().unwrap_or("").to_string(),
    }
}

// =============================================================================
// DISPLAY ROWS
// =============================================================================

/// One row of the inputs table, derived from an entry and its index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputTableRow {
    /// The entry's index in the definition list — its stable identity.
    pub configuration_index: usize,
    /// Call name if call-scoped, else workflow name, else empty.
    pub task_name: String,
    pub variable: String,
    pub type_text: String,
    pub optional: bool,
    pub source: InputSource,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    TaskName,
    Variable,
    TypeText,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

fn sort_key(row: &InputTableRow, field: SortField) -> &str {
    match field {
        SortField::TaskName => &row.task_name,
        SortField::Variable => &row.variable,
        SortField::TypeText => &row.type_text,
    }
}

/// Case-insensitive lexicographic sort on the chosen field. The sort is
/// stable: ties keep their pre-sort relative order across re-renders.
pub fn sort_rows(rows: &mut [InputTableRow], field: SortField, direction: SortDirection) {
    rows.sort_by(|a, b| {
        let ord = sort_key(a, field)
            .to_lowercase()
            .cmp(&sort_key(b, field).to_lowercase());
        match direction {
            SortDirection::Ascending => ord,
            SortDirection::Descending => ord.reverse(),
        }
    });
}

/// Free-text name search: case-insensitive substring match on the variable.
pub fn filter_by_name(rows: Vec<InputTableRow>, query: &str) -> Vec<InputTableRow> {
    if query.is_empty() {
        return rows;
    }
    let query = query.to_lowercase();
    rows.into_iter()
        .filter(|r| r.variable.to_lowercase().contains(&query))
        .collect()
}

/// The hide-optional-inputs toggle.
pub fn without_optional(rows: Vec<InputTableRow>) -> Vec<InputTableRow> {
    rows.into_iter().filter(|r| !r.optional).collect()
}

// =============================================================================
// INPUT DEFINITION
// =============================================================================

/// The ordered input configuration for a selected workflow. Entry order is
/// fixed at creation; callers treat each returned definition as the new
/// canonical value and discard the old one.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InputDefinition {
    entries: Vec<InputDefinitionEntry>,
}

impl InputDefinition {
    pub fn new(entries: Vec<InputDefinitionEntry>) -> Self {
        InputDefinition { entries }
    }

    pub fn entries(&self) -> &[InputDefinitionEntry] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> Option<&InputDefinitionEntry> {
        self.entries.get(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Derive display rows in definition order, each stamped with its
    /// configuration index. Pure and total.
    pub fn annotate(&self) -> Vec<InputTableRow> {
        self.entries
            .iter()
            .enumerate()
            .map(|(index, entry)| {
                let name = parse_input_name(&entry.input_name);
                let task_name = if name.call.is_empty() {
                    name.workflow
                } else {
                    name.call
                };
                InputTableRow {
                    configuration_index: index,
                    task_name,
                    variable: name.variable,
                    type_text: entry.input_type.type_text(),
                    optional: entry.input_type.is_optional(),
                    source: entry.source.clone(),
                }
            })
            .collect()
    }

    /// A new definition with only the given slot's source replaced. An
    /// out-of-range index returns the definition unchanged.
    pub fn update_source(&self, configuration_index: usize, source: InputSource) -> Self {
        let mut entries = self.entries.clone();
        if let Some(entry) = entries.get_mut(configuration_index) {
            entry.source = source;
        }
        InputDefinition { entries }
    }
}
