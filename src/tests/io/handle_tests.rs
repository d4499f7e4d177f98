//! Tests for the process-wide front-door handles.

use std::io::{Read, Write};
use std::sync::Arc;

use crate::config::StreamRole;
use crate::io::{MemoryStream, stderr, stdin, stdout};
use crate::session::{redirect_input, redirect_output};
use crate::tests::{same_stream, serial};

#[test]
fn handles_report_their_role() {
    assert_eq!(stdin().role(), StreamRole::Input);
    assert_eq!(stdout().role(), StreamRole::Output);
    assert_eq!(stderr().role(), StreamRole::Error);
}

#[test]
fn handle_follows_the_current_slot() {
    let _serial = serial();
    let before = stdout().current();

    let out = Arc::new(MemoryStream::new("out"));
    {
        let _session = redirect_output(out.clone());
        assert!(!same_stream(&stdout().current(), &before));
        assert_eq!(stdout().id(), "out");
        writeln!(stdout(), "line {}", 1).unwrap();
        stdout().flush().unwrap();
    }

    assert!(same_stream(&stdout().current(), &before));
    assert_eq!(out.contents_string(), "line 1\n");
}

#[test]
fn handle_reads_through_redirected_input() {
    let _serial = serial();
    let src = Arc::new(MemoryStream::from_string("in", "one\ntwo"));

    let _session = redirect_input(src);
    let mut line = String::new();
    stdin().read_line(&mut line).unwrap();
    assert_eq!(line, "one\n");

    let mut rest = String::new();
    stdin().read_to_string(&mut rest).unwrap();
    assert_eq!(rest, "two");
}
