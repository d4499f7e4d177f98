//! Tests for the in-memory stream.

use crate::error::is_closed_error;
use crate::io::{MemoryStream, StdioStream};

#[test]
fn memory_stream_reads_lines_in_order() {
    let src = MemoryStream::from_string("in", "a\nb\n");

    let mut line = String::new();
    assert_eq!(src.read_line(&mut line).unwrap(), 2);
    assert_eq!(src.read_line(&mut line).unwrap(), 2);
    assert_eq!(src.read_line(&mut line).unwrap(), 0);
    assert_eq!(line, "a\nb\n");
}

#[test]
fn memory_stream_collects_writes() {
    let sink = MemoryStream::new("out");
    sink.write_all(b"abc").unwrap();
    sink.write_all(b"def").unwrap();
    sink.flush().unwrap();

    assert_eq!(sink.contents(), b"abcdef".to_vec());
    assert_eq!(sink.flush_count(), 1);
}

#[test]
fn memory_stream_rejects_io_after_close() {
    let sink = MemoryStream::new("out");
    sink.write_all(b"kept").unwrap();
    sink.close().unwrap();

    assert!(sink.is_closed());
    let err = sink.write(b"lost").unwrap_err();
    assert!(is_closed_error(&err));
    assert!(sink.flush().is_err());
    assert_eq!(sink.contents_string(), "kept");
}
