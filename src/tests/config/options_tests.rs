//! Tests for RedirectOptions defaults and parsing.

use crate::config::RedirectOptions;

#[test]
fn options_default_to_no_close() {
    assert!(RedirectOptions::default().no_close);
    assert!(!RedirectOptions::new().with_no_close(false).no_close);
}

#[test]
fn options_parse_with_missing_fields() {
    let opts: RedirectOptions = serde_json::from_str("{}").unwrap();
    assert_eq!(opts, RedirectOptions::default());

    let opts: RedirectOptions = serde_json::from_str(r#"{"no_close": false}"#).unwrap();
    assert!(!opts.no_close);
}
