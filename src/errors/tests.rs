//! Unit tests for error handling.
//!
//! This module contains tests for error types and error reporting.

use crate::ast::ast::NodeKind;
use crate::errors::errors::{Error, ErrorImpl, ErrorTip};
use crate::NodePath;

#[test]
fn test_missing_node_error() {
    let error = Error::new(
        ErrorImpl::MissingNode {
            expected: "an operand",
        },
        NodePath::root().child(0).child(1),
    );

    assert_eq!(error.get_error_name(), "MissingNode");
    assert_eq!(error.get_position().to_string(), "root/0/1");
}

#[test]
fn test_unexpected_kind_error() {
    let error = Error::new(
        ErrorImpl::UnexpectedKind {
            kind: NodeKind::Read,
            expected: "an expression",
        },
        NodePath::root(),
    );

    assert_eq!(error.get_error_name(), "UnexpectedKind");
    assert_eq!(
        error.to_string(),
        "unexpected read node: expected an expression at root"
    );
}

#[test]
fn test_invalid_lexeme_error() {
    let error = Error::new(
        ErrorImpl::InvalidLexeme {
            kind: NodeKind::Identifier,
            lexeme: "1x".to_string(),
        },
        NodePath::root().child(3),
    );

    assert_eq!(error.get_error_name(), "InvalidLexeme");
    assert_eq!(
        error.get_tip().to_string(),
        "`1x` is not a valid identifier payload"
    );
}

#[test]
fn test_io_error_conversion() {
    let io = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
    let error: Error = io.into();

    assert_eq!(error.get_error_name(), "Io");
    assert!(matches!(error.get_tip(), ErrorTip::None));
    assert_eq!(error.get_position(), &NodePath::root());
}

#[test]
fn test_deserialize_error_conversion() {
    let parsed: Result<NodeKind, serde_json::Error> = serde_json::from_str("{");
    let error: Error = parsed.unwrap_err().into();

    assert_eq!(error.get_error_name(), "Deserialize");
    match error.get_tip() {
        ErrorTip::Suggestion(_) => (),
        _ => panic!("Expected suggestion tip"),
    }
}

#[test]
fn test_verification_error() {
    let error = Error::detached(ErrorImpl::Verification {
        message: "bad".to_string(),
    });

    assert_eq!(error.get_error_name(), "Verification");
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}
