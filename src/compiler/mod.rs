//! Code generation module for the compiler.
//!
//! This module contains the textual LLVM IR generator that walks the AST
//! produced by the parser. It handles:
//!
//! - Dispatch over node kinds and the assign/read/write statement emitters
//! - Operand resolution and binary operations
//! - Variable allocation bookkeeping and temporary naming
//! - Format templates for the `scanf`/`printf` calls
//! - Optional verification of the emitted text through LLVM

pub mod allocations;
pub mod compiler;
pub mod expr;
pub mod options;
pub mod stmt;
pub mod templates;
#[cfg(feature = "verify")]
pub mod verify;

#[cfg(test)]
mod tests;
