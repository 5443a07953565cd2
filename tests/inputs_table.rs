//! Integration tests for the inputs-table model: display rows, sorting,
//! filtering, and configuration-index-stable updates.

mod helpers;

use helpers::*;
use submission_config::inputs::{
    SortDirection, SortField, filter_by_name, sort_rows, without_optional,
};
use submission_config::parse::types::InputSource;

#[test]
fn annotate_derives_task_and_variable_from_the_input_name() {
    let def = definition(vec![
        entry("wf.align.reference", file_type(), InputSource::None),
        entry("wf.sample_count", int_type(), InputSource::None),
    ]);
    let rows = def.annotate();

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].configuration_index, 0);
    assert_eq!(rows[0].task_name, "align");
    assert_eq!(rows[0].variable, "reference");
    assert_eq!(rows[0].type_text, "File");
    assert_eq!(rows[1].task_name, "wf");
    assert_eq!(rows[1].variable, "sample_count");
}

#[test]
fn annotate_marks_optional_rows_and_renders_inner_type_text() {
    let def = definition(vec![entry(
        "wf.maybe",
        submission_config::parse::types::InputType::optional(int_type()),
        InputSource::None,
    )]);
    let rows = def.annotate();
    assert!(rows[0].optional);
    assert_eq!(rows[0].type_text, "Int");
}

#[test]
fn sort_is_case_insensitive_and_stable() {
    // [b, a, B] ascending keeps b before B
    let def = definition(vec![
        entry("wf.b", int_type(), InputSource::None),
        entry("wf.a", int_type(), InputSource::None),
        entry("wf.B", int_type(), InputSource::None),
    ]);
    let mut rows = def.annotate();
    sort_rows(&mut rows, SortField::Variable, SortDirection::Ascending);

    let variables: Vec<&str> = rows.iter().map(|r| r.variable.as_str()).collect();
    assert_eq!(variables, vec!["a", "b", "B"]);
}

#[test]
fn sorting_twice_matches_sorting_once() {
    let def = definition(vec![
        entry("wf.delta", int_type(), InputSource::None),
        entry("wf.Alpha", int_type(), InputSource::None),
        entry("wf.charlie", int_type(), InputSource::None),
        entry("wf.alpha", int_type(), InputSource::None),
    ]);
    let mut once = def.annotate();
    sort_rows(&mut once, SortField::Variable, SortDirection::Ascending);

    let mut twice = once.clone();
    sort_rows(&mut twice, SortField::Variable, SortDirection::Ascending);

    assert_eq!(once, twice);
}

#[test]
fn descending_sort_reverses_distinct_keys() {
    let def = definition(vec![
        entry("wf.a", int_type(), InputSource::None),
        entry("wf.c", int_type(), InputSource::None),
        entry("wf.b", int_type(), InputSource::None),
    ]);
    let mut rows = def.annotate();
    sort_rows(&mut rows, SortField::Variable, SortDirection::Descending);

    let variables: Vec<&str> = rows.iter().map(|r| r.variable.as_str()).collect();
    assert_eq!(variables, vec!["c", "b", "a"]);
}

#[test]
fn name_filter_is_a_case_insensitive_substring_match() {
    let def = definition(vec![
        entry("wf.reference_fasta", file_type(), InputSource::None),
        entry("wf.sample_id", string_type(), InputSource::None),
        entry("wf.REFERENCE_index", file_type(), InputSource::None),
    ]);
    let rows = filter_by_name(def.annotate(), "reference");
    let variables: Vec<&str> = rows.iter().map(|r| r.variable.as_str()).collect();
    assert_eq!(variables, vec!["reference_fasta", "REFERENCE_index"]);

    // empty query keeps everything
    assert_eq!(filter_by_name(def.annotate(), "").len(), 3);
}

#[test]
fn optional_rows_can_be_hidden() {
    let def = definition(vec![
        entry("wf.required", int_type(), InputSource::None),
        entry(
            "wf.optional",
            submission_config::parse::types::InputType::optional(int_type()),
            InputSource::None,
        ),
    ]);
    let rows = without_optional(def.annotate());
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].variable, "required");
}

#[test]
fn updates_address_the_configuration_index_not_the_display_position() {
    let def = definition(vec![
        entry("wf.zebra", int_type(), InputSource::None),
        entry("wf.apple", int_type(), InputSource::None),
        entry("wf.mango", int_type(), InputSource::None),
    ]);

    // Re-sort the display, then edit the row now shown first ("apple").
    let mut rows = def.annotate();
    sort_rows(&mut rows, SortField::Variable, SortDirection::Ascending);
    assert_eq!(rows[0].variable, "apple");

    let edited = def.update_source(rows[0].configuration_index, InputSource::literal("42"));

    // The edit landed on the original slot 1, not on display slot 0.
    assert_eq!(edited.entries()[1].source, InputSource::literal("42"));
    assert_eq!(edited.entries()[0].source, InputSource::None);
    assert_eq!(edited.entries()[2].source, InputSource::None);

    // Re-deriving rows under any sort shows the new source on "apple".
    let mut rows = edited.annotate();
    sort_rows(&mut rows, SortField::Variable, SortDirection::Descending);
    let apple = rows.iter().find(|r| r.variable == "apple").unwrap();
    assert_eq!(apple.source, InputSource::literal("42"));
}

#[test]
fn update_source_leaves_the_original_definition_untouched() {
    let def = definition(vec![entry("wf.x", int_type(), InputSource::None)]);
    let _edited = def.update_source(0, InputSource::literal("1"));
    assert_eq!(def.entries()[0].source, InputSource::None);
}

#[test]
fn out_of_range_update_is_a_no_op() {
    let def = definition(vec![entry("wf.x", int_type(), InputSource::None)]);
    let edited = def.update_source(7, InputSource::literal("1"));
    assert_eq!(edited, def);
}
