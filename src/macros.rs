//! Utility macros for the compiler.
//!
//! This module defines helper macros used throughout the code generator:
//!
//! - `EMIT!` - Formats one instruction into the body of `main`

/// Formats an instruction and appends it to the compiler's output.
///
/// # Arguments
///
/// * `$compiler` - The `Compiler` being written to
/// * `$fmt`, `$args` - A `format!` string and its arguments
///
/// # Example
///
/// ```ignore
/// EMIT!(compiler, "%{} = alloca i32", name);
/// ```
#[macro_export]
macro_rules! EMIT {
    ($compiler:expr, $($arg:tt)*) => {
        $compiler.emit(format!($($arg)*))
    };
}
