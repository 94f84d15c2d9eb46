//! Error types and error handling for the code generator.
//!
//! This module defines the error types used throughout the translation
//! process. It includes:
//!
//! - Error structures carrying the path of the offending node
//! - Specific error variants for malformed trees and driver failures
//! - Helpful error messages and suggestions

pub mod errors;

#[cfg(test)]
mod tests;
