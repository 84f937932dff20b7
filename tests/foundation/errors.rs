//! Integration tests for Error types
//!
//! Tests error construction, display, context, and error kinds.

use exmap_foundation::{Error, ErrorContext, ErrorKind};

// =============================================================================
// Error Construction
// =============================================================================

#[test]
fn error_serialization() {
    let err = Error::serialization("unsupported payload");
    assert!(matches!(err.kind, ErrorKind::SerializationError(_)));
    assert!(format!("{err}").contains("unsupported payload"));
}

#[test]
fn error_deserialization() {
    let err = Error::deserialization("truncated input");
    assert!(matches!(err.kind, ErrorKind::DeserializationError(_)));
    assert!(format!("{err}").contains("deserialization"));
}

#[test]
fn error_io() {
    let err = Error::io("permission denied");
    assert!(matches!(err.kind, ErrorKind::IoError(_)));
    assert!(err.context.is_none());
}

// =============================================================================
// Error Context
// =============================================================================

#[test]
fn context_display() {
    let ctx = ErrorContext::new()
        .with_source("tasks.msgpack")
        .with_frame("load_from_file");
    let text = format!("{ctx}");
    assert!(text.contains("at tasks.msgpack"));
    assert!(text.contains("in load_from_file"));
}

#[test]
fn context_attaches_to_error() {
    let err = Error::io("missing").with_context(ErrorContext::new().with_source("a.bin"));
    assert_eq!(err.context.and_then(|c| c.source), Some("a.bin".to_string()));
}

#[test]
fn error_is_std_error() {
    fn takes_error(_: &dyn std::error::Error) {}
    takes_error(&Error::io("x"));
}
