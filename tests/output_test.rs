//! Contract tests for the dump sink implementations

use serde_json::json;

use structwalk::output::{BufferedSink, DebugSink, DumpSink, EchoSink, TreeSink};

#[test]
fn test_buffered_sink_starts_empty_and_keeps_the_last_value() {
    let mut sink = BufferedSink::new();
    assert!(sink.data().is_none());

    sink.dump(&json!("data"));
    assert_eq!(sink.data(), Some(&json!("data")));

    sink.dump(&json!({"id": 1}));
    assert_eq!(sink.data(), Some(&json!({"id": 1})));
}

#[test]
fn test_echo_sink_writes_strings_raw_with_no_added_formatting() {
    let mut sink = EchoSink::new(Vec::new());
    sink.dump(&json!("string"));

    assert_eq!(sink.into_inner(), b"string");
}

#[test]
fn test_echo_sink_writes_containers_as_compact_json() {
    let mut sink = EchoSink::new(Vec::new());
    sink.dump(&json!({"id": 1}));

    assert_eq!(String::from_utf8(sink.into_inner()).unwrap(), r#"{"id":1}"#);
}

#[test]
fn test_debug_sink_writes_the_native_structural_dump() {
    let mut sink = DebugSink::new(Vec::new());
    sink.dump(&json!("string"));

    let output = String::from_utf8(sink.into_inner()).unwrap();
    assert!(output.contains(r#"String("string")"#));
}

#[test]
fn test_tree_sink_renders_nested_entries_as_branches() {
    let mut sink = TreeSink::new(Vec::new());
    sink.dump(&json!({"user": {"name": "a"}, "tags": ["x"]}));

    let output = String::from_utf8(sink.into_inner()).unwrap();
    assert!(output.contains("user"));
    assert!(output.contains(r#"name: "a""#));
    assert!(output.contains(r#"0: "x""#));
}

#[test]
fn test_stdout_sinks_exist_for_interactive_use() {
    // Smoke test only; the written bytes go to the real stdout.
    EchoSink::stdout().dump(&json!(""));
    DebugSink::stdout().dump(&json!(null));
    TreeSink::stdout().dump(&json!({}));
}
