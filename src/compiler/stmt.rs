use log::debug;

use crate::{
    ast::{
        ast::{AstNode, NodeKind},
        lexemes::identifier_name,
    },
    errors::errors::ErrorImpl,
    EMIT,
};

use super::{
    compiler::Compiler,
    expr::gen_operand,
    templates::{gen_format_template, FormatTemplate, IoFunction},
};

/// Generates code for `node` and, through the structural arm, for every
/// statement below it in source order.
pub fn gen_node(compiler: &mut Compiler, node: Option<&AstNode>) {
    let Some(node) = node else {
        compiler.report(ErrorImpl::MissingNode {
            expected: "a statement",
        });
        return;
    };

    match node.kind {
        NodeKind::Assign => gen_assign(compiler, node),
        NodeKind::Read => gen_read(compiler, node),
        NodeKind::Write => gen_write(compiler, node),
        // Only meaningful inside an expression
        NodeKind::Identifier | NodeKind::IntLiteral => {}
        NodeKind::Program
        | NodeKind::StatementList
        | NodeKind::Plus
        | NodeKind::Minus
        | NodeKind::Other => {
            for (index, child) in node.children.iter().enumerate() {
                compiler.within(index, |compiler| gen_node(compiler, Some(child)));
            }
        }
    }
}

/// Resolves a node that has to name a variable. Reports and returns `None`
/// when it does not.
fn variable_name<'n>(
    compiler: &mut Compiler,
    node: Option<&'n AstNode>,
    expected: &'static str,
) -> Option<&'n str> {
    let Some(node) = node else {
        compiler.report(ErrorImpl::MissingNode { expected });
        return None;
    };

    if node.kind != NodeKind::Identifier {
        compiler.report(ErrorImpl::UnexpectedKind {
            kind: node.kind,
            expected,
        });
        return None;
    }

    match identifier_name(node) {
        Ok(name) => Some(name),
        Err(error) => {
            compiler.report(error);
            None
        }
    }
}

/// `x := expr`
///
/// A missing or invalid target drops the whole statement before anything is
/// emitted. A bad value still stores [`super::expr::PLACEHOLDER`].
fn gen_assign(compiler: &mut Compiler, node: &AstNode) {
    let Some(variable) = compiler.within(0, move |compiler| {
        variable_name(compiler, node.child(0), "an assignment target")
    }) else {
        return;
    };

    let rvalue = compiler.within(1, |compiler| gen_operand(compiler, node.child(1)));

    compiler.declare(variable);
    debug!("assign %{} <- {}", variable, rvalue);
    EMIT!(compiler, "store i32 {}, i32* %{}", rvalue, variable);
}

/// `read(a, b, ...)`
///
/// Arguments that are not valid identifiers are reported and left out of
/// both the template and the call, so the two always agree.
fn gen_read(compiler: &mut Compiler, node: &AstNode) {
    let mut arguments = vec![];
    for (index, child) in node.children.iter().enumerate() {
        let name = compiler.within(index, move |compiler| {
            variable_name(compiler, Some(child), "an identifier to read into")
        });

        if let Some(name) = name {
            compiler.declare(name);
            arguments.push(format!("i32* %{}", name));
        }
    }

    if arguments.is_empty() {
        compiler.report(ErrorImpl::MissingNode {
            expected: "at least one identifier to read into",
        });
        return;
    }

    let template = FormatTemplate::new(IoFunction::Scanf, arguments.len());
    let pointer = gen_format_template(compiler, &template);

    debug!("read {} value(s)", arguments.len());
    EMIT!(
        compiler,
        "call i32 (i8*, ...) @scanf(i8* {}, {})",
        pointer,
        arguments.join(", ")
    );
}

/// `write(expr, ...)`
///
/// The template is emitted before any argument is evaluated. Every argument
/// contributes one `i32`, degrading to the placeholder if it is malformed.
fn gen_write(compiler: &mut Compiler, node: &AstNode) {
    if node.children.is_empty() {
        compiler.report(ErrorImpl::MissingNode {
            expected: "at least one expression to write",
        });
        return;
    }

    let template = FormatTemplate::new(IoFunction::Printf, node.children.len());
    let pointer = gen_format_template(compiler, &template);

    let mut arguments = vec![];
    for (index, child) in node.children.iter().enumerate() {
        let value = compiler.within(index, |compiler| gen_operand(compiler, Some(child)));
        arguments.push(format!("i32 {}", value));
    }

    debug!("write {} value(s)", arguments.len());
    EMIT!(
        compiler,
        "call i32 (i8*, ...) @printf(i8* {}, {})",
        pointer,
        arguments.join(", ")
    );
}
