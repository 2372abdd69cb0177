//! End-to-end tests: YAML config → registry → running pipeline → debug channel.

use chrono::{DateTime, Utc};
use logpipe_core::{LogEvent, PipelineError, RunningPipeline};
use serde_json::{json, Value};
use std::time::Duration;

const WAIT: Duration = Duration::from_millis(300);

fn timestamp() -> DateTime<Utc> {
    DateTime::parse_from_rfc3339("2017-04-05T18:30:41.193Z")
        .unwrap()
        .with_timezone(&Utc)
}

fn event(extra: Value) -> LogEvent {
    let extra = match extra {
        Value::Object(map) => map,
        other => panic!("extra must be an object, got {}", other),
    };
    LogEvent::new(timestamp(), "filter test message").with_extra(extra)
}

fn start(yaml: &str) -> RunningPipeline {
    logpipe_core::logging::init_tracing(logpipe_core::logging::level_from_env());
    let registry = logpipe_filters::builtin_registry().unwrap();
    RunningPipeline::from_yaml(yaml.trim(), &registry).unwrap()
}

async fn roundtrip(yaml: &str, input: Value) -> LogEvent {
    let mut pipeline = start(yaml);
    pipeline.inject_event(event(input)).await.unwrap();
    pipeline.await_output_event(WAIT).await.unwrap()
}

// =============================================================================
// Scenarios
// =============================================================================

#[tokio::test]
async fn test_remove_field_empty_fields() {
    let yaml = r#"
debugch: true
filter:
  - type: remove_field
"#;
    let output = roundtrip(yaml, json!({ "fieldA": "foo", "fieldB": "bar" })).await;

    assert_eq!(output, event(json!({ "fieldA": "foo", "fieldB": "bar" })));
}

#[tokio::test]
async fn test_remove_field_one_field() {
    let yaml = r#"
debugch: true
filter:
  - type: remove_field
    fields:
      - fieldA
"#;
    let output = roundtrip(yaml, json!({ "fieldA": "foo", "fieldB": "bar" })).await;

    assert_eq!(output, event(json!({ "fieldB": "bar" })));
}

#[tokio::test]
async fn test_remove_field_two_fields() {
    let yaml = r#"
debugch: true
filter:
  - type: remove_field
    fields:
      - fieldA
      - fieldB
"#;
    let output = roundtrip(yaml, json!({ "fieldA": "foo", "fieldB": "bar" })).await;

    assert_eq!(output, event(json!({})));
    assert!(output.extra.is_empty());
}

#[tokio::test]
async fn test_remove_field_child_field() {
    let yaml = r#"
debugch: true
filter:
  - type: remove_field
    fields:
      - fieldA.childA
"#;
    let input = json!({
        "fieldA": { "childA": "child test A", "childB": "child test B" },
        "fieldB": "bar",
    });
    let output = roundtrip(yaml, input).await;

    assert_eq!(
        output,
        event(json!({
            "fieldA": { "childB": "child test B" },
            "fieldB": "bar",
        }))
    );
}

#[tokio::test]
async fn test_remove_field_missing_paths_leave_event_unchanged() {
    let yaml = r#"
debugch: true
filter:
  - type: remove_field
    fields:
      - fieldC
      - fieldB.child
      - fieldA.childC
"#;
    let input = json!({ "fieldA": { "childA": "A" }, "fieldB": "bar" });
    let output = roundtrip(yaml, input.clone()).await;

    assert_eq!(output, event(input));
}

#[tokio::test]
async fn test_chained_filters_are_idempotent() {
    let yaml = r#"
debugch: true
filter:
  - type: remove_field
    fields: [fieldA, fieldB.childA]
  - type: remove_field
    fields: [fieldA, fieldB.childA]
"#;
    let input = json!({ "fieldA": 1, "fieldB": { "childA": 2, "childB": 3 } });
    let output = roundtrip(yaml, input).await;

    assert_eq!(output, event(json!({ "fieldB": { "childB": 3 } })));
}

#[tokio::test]
async fn test_events_keep_arrival_order() {
    let mut pipeline = start(
        r#"
debugch: true
filter:
  - type: remove_field
    fields: [secret]
"#,
    );

    for i in 0..5 {
        let mut ev = event(json!({ "seq": i, "secret": "x" }));
        ev.message = format!("event {}", i);
        pipeline.inject_event(ev).await.unwrap();
    }

    for i in 0..5 {
        let output = pipeline.await_output_event(WAIT).await.unwrap();
        assert_eq!(output.message, format!("event {}", i));
        assert_eq!(Value::Object(output.extra), json!({ "seq": i }));
    }

    pipeline.shutdown().await.unwrap();
}

// =============================================================================
// Configuration & harness errors
// =============================================================================

#[tokio::test]
async fn test_no_output_times_out() {
    let mut pipeline = start("debugch: true\nfilter:\n  - type: remove_field\n");

    let err = pipeline.await_output_event(Duration::from_millis(20)).await.unwrap_err();
    assert!(matches!(err, PipelineError::Timeout(_)));
}

#[test]
fn test_unknown_filter_type_fails_before_start() {
    let registry = logpipe_filters::builtin_registry().unwrap();
    let err = RunningPipeline::from_yaml("filter:\n  - type: grok\n", &registry)
        .err()
        .unwrap();

    assert!(matches!(err, PipelineError::UnknownFilterType(ref t) if t == "grok"));
}

#[test]
fn test_malformed_fields_fail_before_start() {
    let registry = logpipe_filters::builtin_registry().unwrap();
    let err = RunningPipeline::from_yaml(
        "filter:\n  - type: remove_field\n    fields:\n      - [a, b]\n",
        &registry,
    )
    .err()
    .unwrap();

    assert!(err.is_config());
    assert!(err.to_string().starts_with("CONFIG/FILTER remove_field"));
}

#[test]
fn test_builtin_registered_once() {
    let mut registry = logpipe_filters::builtin_registry().unwrap();
    assert_eq!(registry.types(), vec!["remove_field"]);

    let err = logpipe_filters::register_builtin(&mut registry).unwrap_err();
    assert!(matches!(err, PipelineError::DuplicateFilterType(_)));
}
