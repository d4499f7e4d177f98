//! Tests for RedirectError formatting and io::Error conversion.

use std::io;

use crate::config::StreamRole;
use crate::error::{RedirectError, is_closed_error};

#[test]
fn unbalanced_release_display_names_role() {
    let err = RedirectError::UnbalancedRelease {
        role: StreamRole::Output,
    };
    assert!(err.to_string().contains("output"));
}

#[test]
fn role_busy_display_includes_count() {
    let err = RedirectError::RoleBusy {
        role: StreamRole::Input,
        use_count: 2,
    };
    assert!(err.to_string().contains("2 active session(s)"));
}

#[test]
fn closed_error_survives_io_conversion() {
    let err: io::Error = RedirectError::closed("buf").into();
    assert!(is_closed_error(&err));
    assert!(err.to_string().contains("buf"));

    let other = io::Error::new(io::ErrorKind::Other, "boom");
    assert!(!is_closed_error(&other));
}

#[cfg(feature = "miette")]
#[test]
fn diagnostic_carries_help() {
    use crate::error::RedirectDiagnostic;

    let diag = RedirectDiagnostic::from(RedirectError::RoleBusy {
        role: StreamRole::Error,
        use_count: 1,
    });
    assert!(diag.help.is_some());
    assert!(diag.message.contains("error"));
}
