//! Tests for platform and file-backed streams.

use std::fs;
use std::io;

use crate::io::{FileStream, PlatformStderr, PlatformStdin, PlatformStdout, StdioStream};

#[test]
fn file_stream_writes_and_appends() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.txt");

    {
        let out = FileStream::create(&path).unwrap();
        out.write_all(b"abc").unwrap();
        out.close().unwrap();
        assert!(out.is_closed());
    }
    assert_eq!(fs::read(&path).unwrap(), b"abc".to_vec());

    {
        let out = FileStream::append(&path).unwrap();
        out.write_all(b"def").unwrap();
    }
    assert_eq!(fs::read(&path).unwrap(), b"abcdef".to_vec());
}

#[test]
fn file_stream_reads_lines() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("input.txt");
    fs::write(&path, b"first\nsecond\n").unwrap();

    let inp = FileStream::open(&path).unwrap();
    assert!(inp.readable());
    assert!(!inp.writable());

    let mut line = String::new();
    inp.read_line(&mut line).unwrap();
    assert_eq!(line, "first\n");

    let err = inp.write(b"x").unwrap_err();
    assert_eq!(err.kind(), io::ErrorKind::Unsupported);
}

#[test]
fn platform_streams_report_direction() {
    assert!(PlatformStdin::new().readable());
    assert!(!PlatformStdin::new().writable());
    assert!(PlatformStdout::new().writable());
    assert!(!PlatformStderr::new().readable());

    let err = PlatformStdout::new().read(&mut [0u8; 4]).unwrap_err();
    assert_eq!(err.kind(), io::ErrorKind::Unsupported);
}

#[test]
fn platform_close_only_marks_the_handle() {
    let err_stream = PlatformStderr::new();
    err_stream.close().unwrap();
    assert!(err_stream.is_closed());
    assert!(err_stream.write(b"x").is_err());

    // A fresh handle to the same descriptor still works.
    PlatformStderr::new().flush().unwrap();
}
