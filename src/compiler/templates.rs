//! Format strings for the console I/O calls.
//!
//! A read or write statement over `k` values builds a template of `k` `%d`
//! tokens separated by single spaces, stores it into a stack array and
//! decays that array to an `i8*` for the variadic call:
//!
//! ```text
//! %_printf_format_1 = alloca [4 x i8]
//! store [4 x i8] c"%d\0A\00", [4 x i8]* %_printf_format_1
//! %_printf_str_1 = getelementptr [4 x i8], [4 x i8]* %_printf_format_1, i32 0, i32 0
//! ```

use crate::EMIT;

use super::compiler::Compiler;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IoFunction {
    Scanf,
    Printf,
}

impl IoFunction {
    pub fn name(&self) -> &'static str {
        match self {
            IoFunction::Scanf => "scanf",
            IoFunction::Printf => "printf",
        }
    }

    /// Escaped bytes appended after the `%d` tokens.
    fn terminator(&self) -> &'static str {
        match self {
            IoFunction::Scanf => "\\00",
            IoFunction::Printf => "\\0A\\00",
        }
    }

    /// Number of bytes the terminator occupies in the array.
    fn terminator_len(&self) -> usize {
        match self {
            IoFunction::Scanf => 1,
            IoFunction::Printf => 2,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatTemplate {
    function: IoFunction,
    text: String,
}

impl FormatTemplate {
    pub fn new(function: IoFunction, arity: usize) -> Self {
        FormatTemplate {
            function,
            text: vec!["%d"; arity].join(" "),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Template length plus room for the terminator.
    pub fn byte_len(&self) -> usize {
        self.text.len() + self.function.terminator_len()
    }

    pub fn array_type(&self) -> String {
        format!("[{} x i8]", self.byte_len())
    }

    pub fn literal(&self) -> String {
        format!("c\"{}{}\"", self.text, self.function.terminator())
    }

    pub fn format_label(&self, index: u32) -> String {
        format!("%_{}_format_{}", self.function.name(), index)
    }

    pub fn pointer_label(&self, index: u32) -> String {
        format!("%_{}_str_{}", self.function.name(), index)
    }
}

/// Emits the array, the template store and the pointer decay for
/// `template`. Returns the name of the `i8*` to pass to the call.
pub fn gen_format_template(compiler: &mut Compiler, template: &FormatTemplate) -> String {
    let index = compiler.next_label(template.function);
    let array = template.array_type();
    let format = template.format_label(index);
    let pointer = template.pointer_label(index);

    EMIT!(compiler, "{} = alloca {}", format, array);
    EMIT!(
        compiler,
        "store {} {}, {}* {}",
        array,
        template.literal(),
        array,
        format
    );
    EMIT!(
        compiler,
        "{} = getelementptr {}, {}* {}, i32 0, i32 0",
        pointer,
        array,
        array,
        format
    );

    pointer
}
