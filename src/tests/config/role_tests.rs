//! Tests for StreamRole parsing and naming.

use crate::config::StreamRole;

#[test]
fn role_from_str_accepts_role_and_stream_names() {
    assert_eq!(StreamRole::from_str("input"), Some(StreamRole::Input));
    assert_eq!(StreamRole::from_str("STDOUT"), Some(StreamRole::Output));
    assert_eq!(StreamRole::from_str("stderr"), Some(StreamRole::Error));
    assert_eq!(StreamRole::from_str("stdlog"), None);
}

#[test]
fn role_indices_are_distinct_and_ordered() {
    let indices: Vec<usize> = StreamRole::ALL.iter().map(|r| r.index()).collect();
    assert_eq!(indices, vec![0, 1, 2]);
}

#[test]
fn role_serde_uses_lowercase_names_with_aliases() {
    let role: StreamRole = serde_json::from_str(r#""stdin""#).unwrap();
    assert_eq!(role, StreamRole::Input);

    let json = serde_json::to_string(&StreamRole::Error).unwrap();
    assert_eq!(json, r#""error""#);
    assert_eq!(StreamRole::Error.stream_name(), "stderr");
    assert_eq!(StreamRole::Output.to_string(), "output");
}
