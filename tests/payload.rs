//! Run-set payload assembly tests.

mod helpers;

use helpers::*;
use submission_config::outputs::OutputDefinition;
use submission_config::parse::types::{
    InputSource, OutputDefinitionEntry, OutputDestination,
};
use submission_config::payload::RunSetRequest;

fn output(name: &str, destination: OutputDestination) -> OutputDefinitionEntry {
    OutputDefinitionEntry {
        output_name: name.into(),
        output_type: file_type(),
        destination,
    }
}

#[test]
fn the_request_carries_definitions_and_records() {
    let inputs = definition(vec![
        entry("wf.task.reads", file_type(), InputSource::record_lookup("reads")),
        entry("wf.task.limit", int_type(), InputSource::literal("10")),
    ]);
    let outputs = OutputDefinition::new(vec![output(
        "wf.task.report",
        OutputDestination::RecordUpdate {
            record_attribute: "report".to_string(),
        },
    )]);

    let request = RunSetRequest::new(
        "https://example.org/wf.wdl",
        &inputs,
        &outputs,
        "sample",
        vec!["s1".to_string(), "s2".to_string()],
    );

    assert_eq!(request.workflow_url, "https://example.org/wf.wdl");
    assert_eq!(request.workflow_input_definitions, inputs.entries());
    assert_eq!(request.workflow_output_definitions, outputs.entries());
    assert_eq!(request.wds_records.record_type, "sample");
    assert_eq!(request.wds_records.record_ids, vec!["s1", "s2"]);
}

#[test]
fn empty_outputs_serialize_as_an_empty_list() {
    let request = RunSetRequest::new(
        "https://example.org/wf.wdl",
        &definition(vec![]),
        &OutputDefinition::default(),
        "sample",
        vec![],
    );
    let json = serde_json::to_value(&request).unwrap();
    assert_eq!(json["workflow_output_definitions"], serde_json::json!([]));
    assert_eq!(json["wds_records"]["record_ids"], serde_json::json!([]));
}

#[test]
fn default_destinations_fill_unset_outputs_only() {
    let outputs = OutputDefinition::new(vec![
        output("wf.task.report", OutputDestination::None),
        output(
            "wf.task.log",
            OutputDestination::RecordUpdate {
                record_attribute: "custom_log".to_string(),
            },
        ),
    ]);
    let defaulted = outputs.with_default_destinations();
    assert_eq!(
        defaulted.entries()[0].destination,
        OutputDestination::RecordUpdate {
            record_attribute: "report".to_string(),
        }
    );
    assert_eq!(
        defaulted.entries()[1].destination,
        OutputDestination::RecordUpdate {
            record_attribute: "custom_log".to_string(),
        }
    );
    // the original is untouched
    assert_eq!(outputs.entries()[0].destination, OutputDestination::None);
}

#[test]
fn request_wire_shape() {
    let inputs = definition(vec![entry(
        "hello.greeting",
        string_type(),
        InputSource::literal("hello world"),
    )]);
    let request = RunSetRequest::new(
        "https://example.org/hello.wdl",
        &inputs,
        &OutputDefinition::default(),
        "sample",
        vec!["s1".to_string(), "s2".to_string()],
    );

    insta::assert_json_snapshot!(request, @r#"
    {
      "workflow_url": "https://example.org/hello.wdl",
      "workflow_input_definitions": [
        {
          "input_name": "hello.greeting",
          "input_type": {
            "type": "primitive",
            "primitive_type": "String"
          },
          "source": {
            "type": "literal",
            "parameter_value": "hello world"
          }
        }
      ],
      "workflow_output_definitions": [],
      "wds_records": {
        "record_type": "sample",
        "record_ids": [
          "s1",
          "s2"
        ]
      }
    }
    "#);
}
