use std::fmt::Display;

use thiserror::Error;

use crate::{ast::ast::NodeKind, NodePath};

#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    internal_error: ErrorImpl,
    position: NodePath,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: NodePath) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    /// Errors that do not belong to any node of the tree.
    pub fn detached(error_impl: ErrorImpl) -> Self {
        Error::new(error_impl, NodePath::root())
    }

    pub fn get_position(&self) -> &NodePath {
        &self.position
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::MissingNode { .. } => "MissingNode",
            ErrorImpl::UnexpectedKind { .. } => "UnexpectedKind",
            ErrorImpl::InvalidLexeme { .. } => "InvalidLexeme",
            ErrorImpl::Io { .. } => "Io",
            ErrorImpl::Deserialize { .. } => "Deserialize",
            ErrorImpl::Verification { .. } => "Verification",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::MissingNode { expected } => ErrorTip::Suggestion(format!(
                "Expected {} here, is the parser output truncated?",
                expected
            )),
            ErrorImpl::UnexpectedKind { kind, expected } => ErrorTip::Suggestion(format!(
                "Found `{}` where {} was expected",
                kind, expected
            )),
            ErrorImpl::InvalidLexeme { kind, lexeme } => ErrorTip::Suggestion(format!(
                "`{}` is not a valid {} payload",
                lexeme, kind
            )),
            ErrorImpl::Io { .. } => ErrorTip::None,
            ErrorImpl::Deserialize { .. } => ErrorTip::Suggestion(String::from(
                "The input must be an AST serialized as JSON",
            )),
            ErrorImpl::Verification { .. } => ErrorTip::Suggestion(String::from(
                "The emitted IR was rejected by the LLVM verifier",
            )),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} at {}", self.internal_error, self.position)
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Error::detached(ErrorImpl::Io {
            message: error.to_string(),
        })
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Error::detached(ErrorImpl::Deserialize {
            message: error.to_string(),
        })
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("missing node: expected {expected}")]
    MissingNode { expected: &'static str },
    #[error("unexpected {kind} node: expected {expected}")]
    UnexpectedKind {
        kind: NodeKind,
        expected: &'static str,
    },
    #[error("invalid {kind} lexeme {lexeme:?}")]
    InvalidLexeme { kind: NodeKind, lexeme: String },
    #[error("i/o error: {message}")]
    Io { message: String },
    #[error("could not read AST: {message}")]
    Deserialize { message: String },
    #[error("IR verification failed: {message}")]
    Verification { message: String },
}
