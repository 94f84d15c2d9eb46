//! Payload validation for leaf nodes.
//!
//! Identifier names are spliced into the output as `%name` and integer
//! literals as immediates, so both have to be well formed before they reach
//! the emitter.

use lazy_static::lazy_static;
use regex::Regex;

use crate::errors::errors::ErrorImpl;

use super::ast::{AstNode, NodeKind};

lazy_static! {
    static ref IDENTIFIER: Regex = Regex::new("^[a-zA-Z_][a-zA-Z0-9_]*$").unwrap();
    static ref INT_LITERAL: Regex = Regex::new("^-?[0-9]+$").unwrap();
    static ref GENERATED_NAME: Regex =
        Regex::new("^_(tmp|scanf_format|scanf_str|printf_format|printf_str)_[0-9]+$").unwrap();
}

/// Names of the `_tmp_<n>` / `_scanf_*_<n>` / `_printf_*_<n>` shape belong to
/// the code generator and are rejected as variable names.
pub fn is_valid_identifier(name: &str) -> bool {
    IDENTIFIER.is_match(name) && !GENERATED_NAME.is_match(name)
}

/// Integer literals must also fit in an `i32`.
pub fn is_valid_int_literal(text: &str) -> bool {
    INT_LITERAL.is_match(text) && text.parse::<i32>().is_ok()
}

/// Returns the payload of an identifier node.
pub fn identifier_name(node: &AstNode) -> Result<&str, ErrorImpl> {
    let name = node.lexeme();
    if is_valid_identifier(name) {
        Ok(name)
    } else {
        Err(ErrorImpl::InvalidLexeme {
            kind: NodeKind::Identifier,
            lexeme: name.to_string(),
        })
    }
}

/// Returns the payload of an integer literal node.
pub fn int_literal_text(node: &AstNode) -> Result<&str, ErrorImpl> {
    let text = node.lexeme();
    if is_valid_int_literal(text) {
        Ok(text)
    } else {
        Err(ErrorImpl::InvalidLexeme {
            kind: NodeKind::IntLiteral,
            lexeme: text.to_string(),
        })
    }
}
