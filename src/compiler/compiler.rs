//! Main compiler module.
//!
//! This module contains the core Compiler structure: the per-run state of a
//! translation (allocation table, temporary counter, scaffolding label
//! counters, emitted lines and collected diagnostics) and the entry point that
//! wraps the generated body into the `main` routine.

use log::debug;

use crate::{
    ast::ast::AstNode,
    errors::errors::{Error, ErrorImpl},
    NodePath, EMIT,
};

use super::{
    allocations::AllocationTable,
    options::{CompilerOptions, LabelPolicy},
    stmt::gen_node,
    templates::IoFunction,
};

/// The main compiler structure that holds the state of one translation.
///
/// Nothing here outlives a run: a fresh `Compiler` starts with an empty
/// allocation table and both counters at zero, so repeated or concurrent
/// translations never observe each other.
pub struct Compiler {
    /// Options the run was started with
    pub options: CompilerOptions,
    /// Variables that already have storage
    pub allocations: AllocationTable,

    /// Number of temporaries created so far
    temp_counter: u32,
    /// Number of read statements emitted so far
    scanf_counter: u32,
    /// Number of write statements emitted so far
    printf_counter: u32,

    /// Path of the node currently being generated
    position: NodePath,
    /// Output lines, without trailing newlines
    lines: Vec<String>,
    /// Problems found in the tree, in traversal order
    diagnostics: Vec<Error>,
}

/// The result of a run: the IR text and every diagnostic raised on the way.
#[derive(Debug, Clone)]
pub struct Compilation {
    pub ir: String,
    pub diagnostics: Vec<Error>,
}

impl Compilation {
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

impl Compiler {
    pub fn new(options: CompilerOptions) -> Self {
        Compiler {
            options,
            allocations: AllocationTable::new(),
            temp_counter: 0,
            scanf_counter: 0,
            printf_counter: 0,
            position: NodePath::root(),
            lines: vec![],
            diagnostics: vec![],
        }
    }

    /// Appends one instruction to the body of `main`.
    pub fn emit(&mut self, instruction: String) {
        self.lines.push(format!("\t{}", instruction));
    }

    /// Appends a line outside of any routine body.
    fn emit_top_level(&mut self, line: &str) {
        self.lines.push(line.to_string());
    }

    /// Returns the name of a fresh temporary, `%_tmp_1` first.
    pub fn next_temp(&mut self) -> String {
        self.temp_counter += 1;
        format!("%_tmp_{}", self.temp_counter)
    }

    /// Returns the suffix for the scaffolding labels of the next read or
    /// write statement.
    pub fn next_label(&mut self, function: IoFunction) -> u32 {
        let counter = match function {
            IoFunction::Scanf => &mut self.scanf_counter,
            IoFunction::Printf => &mut self.printf_counter,
        };
        *counter += 1;

        match self.options.label_policy {
            LabelPolicy::PerStatement => *counter,
            LabelPolicy::Fixed => 1,
        }
    }

    /// Emits the `alloca` for `name` unless it was already emitted.
    pub fn declare(&mut self, name: &str) {
        if self.allocations.declare(name) {
            debug!("allocating %{}", name);
            EMIT!(self, "%{} = alloca i32", name);
        }
    }

    /// Records a diagnostic against the node currently being generated.
    pub fn report(&mut self, error: ErrorImpl) {
        let error = Error::new(error, self.position.clone());
        debug!("{}", error);
        self.diagnostics.push(error);
    }

    /// Runs `f` with the position moved to child `index` of the current node.
    pub fn within<T>(&mut self, index: usize, f: impl FnOnce(&mut Compiler) -> T) -> T {
        self.position.push(index);
        let result = f(self);
        self.position.pop();
        result
    }

    pub fn get_position(&self) -> &NodePath {
        &self.position
    }

    /// Declares the C functions used for console I/O.
    fn create_external_functions(&mut self) {
        for function in [IoFunction::Printf, IoFunction::Scanf] {
            self.emit_top_level(&format!("; Declare {}", function.name()));
            self.emit_top_level(&format!("declare i32 @{}(i8*, ...)", function.name()));
            self.emit_top_level("");
        }
    }

    /// Generates the whole module: declarations, then `main` wrapping the
    /// code for `ast`.
    fn compile(&mut self, ast: Option<&AstNode>) {
        self.create_external_functions();
        self.emit_top_level("define i32 @main() {");

        match ast {
            Some(ast) => gen_node(self, Some(ast)),
            // Still a complete module, just with an empty `main`
            None => self.report(ErrorImpl::MissingNode {
                expected: "a program",
            }),
        }

        EMIT!(self, "ret i32 0");
        self.emit_top_level("}");
    }

    fn finish(self) -> Compilation {
        let mut ir = self.lines.join("\n");
        ir.push('\n');

        Compilation {
            ir,
            diagnostics: self.diagnostics,
        }
    }
}

/// Translates `ast` into LLVM IR text.
///
/// An absent tree is reported as a diagnostic and yields an empty `main`.
/// Malformed subtrees never stop the run; see the statement and expression
/// emitters for what is emitted in their place.
pub fn compile(ast: Option<&AstNode>, options: CompilerOptions) -> Compilation {
    let mut compiler = Compiler::new(options);
    compiler.compile(ast);

    debug!(
        "generated {} temporaries for {} variables",
        compiler.temp_counter,
        compiler.allocations.len()
    );

    compiler.finish()
}
