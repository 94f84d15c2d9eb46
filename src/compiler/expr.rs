use log::{debug, warn};

use crate::{
    ast::{
        ast::{AstNode, NodeKind},
        lexemes::{identifier_name, int_literal_text},
    },
    errors::errors::ErrorImpl,
    EMIT,
};

use super::compiler::Compiler;

/// Operand used in place of anything that could not be generated.
pub const PLACEHOLDER: &str = "undef";

/// Resolves `node` to an `i32` operand, emitting whatever instructions are
/// needed to compute it.
///
/// Integer literals are returned as immediates. Identifiers are loaded into
/// a fresh temporary. Absent or invalid nodes are reported and resolve to
/// [`PLACEHOLDER`].
pub fn gen_operand(compiler: &mut Compiler, node: Option<&AstNode>) -> String {
    let Some(node) = node else {
        compiler.report(ErrorImpl::MissingNode {
            expected: "an operand",
        });
        return PLACEHOLDER.to_string();
    };

    match node.kind {
        NodeKind::IntLiteral => match int_literal_text(node) {
            Ok(text) => text.to_string(),
            Err(error) => {
                compiler.report(error);
                PLACEHOLDER.to_string()
            }
        },
        NodeKind::Identifier => match identifier_name(node) {
            Ok(name) => gen_load(compiler, name),
            Err(error) => {
                compiler.report(error);
                PLACEHOLDER.to_string()
            }
        },
        kind if kind.is_binary_op() => gen_operation(compiler, node),
        kind => {
            compiler.report(ErrorImpl::UnexpectedKind {
                kind,
                expected: "an operand",
            });
            PLACEHOLDER.to_string()
        }
    }
}

fn gen_load(compiler: &mut Compiler, name: &str) -> String {
    // Only assignments and reads allocate
    if !compiler.allocations.is_declared(name) {
        warn!("%{} is loaded before it is assigned or read", name);
    }

    let temp = compiler.next_temp();
    EMIT!(compiler, "{} = load i32, i32* %{}", temp, name);
    temp
}

/// Generates a `+` or `-` node. The left operand is generated completely
/// before the right one, which fixes the numbering of temporaries.
pub fn gen_operation(compiler: &mut Compiler, node: &AstNode) -> String {
    let opcode = match node.kind {
        NodeKind::Plus => "add",
        NodeKind::Minus => "sub",
        kind => {
            compiler.report(ErrorImpl::UnexpectedKind {
                kind,
                expected: "an arithmetic operation",
            });
            return PLACEHOLDER.to_string();
        }
    };

    let left = compiler.within(0, |compiler| gen_operand(compiler, node.child(0)));
    let right = compiler.within(1, |compiler| gen_operand(compiler, node.child(1)));

    let temp = compiler.next_temp();
    debug!("{} = {} {}, {}", temp, opcode, left, right);
    EMIT!(compiler, "{} = {} i32 {}, {}", temp, opcode, left, right);
    temp
}
