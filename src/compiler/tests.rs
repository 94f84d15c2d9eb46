//! Unit tests for the code generator's bookkeeping.
//!
//! This module covers the allocation table, temporary and label numbering,
//! format templates and diagnostic positions. Whole-program output is
//! checked in `tests/integration_tests.rs`.

use crate::{ast::ast::AstNode, errors::errors::ErrorImpl, NodePath};

use super::{
    allocations::AllocationTable,
    compiler::{compile, Compiler},
    expr::{gen_operand, gen_operation, PLACEHOLDER},
    options::{CompilerOptions, LabelPolicy},
    templates::{gen_format_template, FormatTemplate, IoFunction},
};

#[test]
fn test_allocation_table_declares_once() {
    let mut table = AllocationTable::new();
    assert_eq!(table.len(), 0);

    assert!(table.declare("x"));
    assert!(!table.declare("x"));
    assert!(table.declare("y"));

    assert!(table.is_declared("x"));
    assert!(!table.is_declared("z"));
    assert_eq!(table.len(), 2);
}

#[test]
fn test_temporaries_are_sequential() {
    let mut compiler = Compiler::new(CompilerOptions::new());

    assert_eq!(compiler.next_temp(), "%_tmp_1");
    assert_eq!(compiler.next_temp(), "%_tmp_2");
    assert_eq!(compiler.next_temp(), "%_tmp_3");
}

#[test]
fn test_labels_per_statement() {
    let mut compiler = Compiler::new(CompilerOptions::new());

    assert_eq!(compiler.next_label(IoFunction::Scanf), 1);
    assert_eq!(compiler.next_label(IoFunction::Printf), 1);
    assert_eq!(compiler.next_label(IoFunction::Printf), 2);
    assert_eq!(compiler.next_label(IoFunction::Scanf), 2);
}

#[test]
fn test_labels_fixed() {
    let options = CompilerOptions::new().with_label_policy(LabelPolicy::Fixed);
    let mut compiler = Compiler::new(options);

    assert_eq!(compiler.next_label(IoFunction::Printf), 1);
    assert_eq!(compiler.next_label(IoFunction::Printf), 1);
    assert_eq!(compiler.next_label(IoFunction::Scanf), 1);
}

#[test]
fn test_default_label_policy() {
    assert_eq!(
        CompilerOptions::default().label_policy,
        LabelPolicy::PerStatement
    );
}

#[test]
fn test_read_template() {
    let template = FormatTemplate::new(IoFunction::Scanf, 3);

    assert_eq!(template.text(), "%d %d %d");
    assert_eq!(template.byte_len(), 9);
    assert_eq!(template.array_type(), "[9 x i8]");
    assert_eq!(template.literal(), r#"c"%d %d %d\00""#);
    assert_eq!(template.format_label(1), "%_scanf_format_1");
    assert_eq!(template.pointer_label(1), "%_scanf_str_1");
}

#[test]
fn test_write_template() {
    let template = FormatTemplate::new(IoFunction::Printf, 1);

    assert_eq!(template.text(), "%d");
    assert_eq!(template.byte_len(), 4);
    assert_eq!(template.literal(), r#"c"%d\0A\00""#);
    assert_eq!(template.format_label(2), "%_printf_format_2");
    assert_eq!(template.pointer_label(2), "%_printf_str_2");
}

#[test]
fn test_gen_format_template_returns_pointer() {
    let mut compiler = Compiler::new(CompilerOptions::new());
    let template = FormatTemplate::new(IoFunction::Printf, 2);

    assert_eq!(gen_format_template(&mut compiler, &template), "%_printf_str_1");
    assert_eq!(gen_format_template(&mut compiler, &template), "%_printf_str_2");
}

#[test]
fn test_literal_operand_emits_nothing() {
    let compiled = compile(
        Some(&AstNode::write(vec![AstNode::int_literal(42)])),
        CompilerOptions::new(),
    );

    assert!(!compiled.ir.contains("load"));
    assert!(compiled.ir.contains("i32 42)"));
}

#[test]
fn test_operand_placeholders() {
    let mut compiler = Compiler::new(CompilerOptions::new());

    assert_eq!(gen_operand(&mut compiler, None), PLACEHOLDER);
    assert_eq!(
        gen_operand(&mut compiler, Some(&AstNode::read(&["a"]))),
        PLACEHOLDER
    );
    assert_eq!(
        gen_operand(&mut compiler, Some(&AstNode::int_literal("1e3"))),
        PLACEHOLDER
    );
    // No temporary was spent on any of them
    assert_eq!(compiler.next_temp(), "%_tmp_1");
}

#[test]
fn test_gen_operation_rejects_non_arithmetic() {
    let mut compiler = Compiler::new(CompilerOptions::new());

    let result = gen_operation(&mut compiler, &AstNode::identifier("x"));

    assert_eq!(result, PLACEHOLDER);
    assert_eq!(compiler.next_temp(), "%_tmp_1");
}

#[test]
fn test_report_records_position() {
    let program = AstNode::program(vec![
        AstNode::read(&["a"]),
        AstNode::write(vec![AstNode::plus(
            AstNode::identifier("a"),
            AstNode::read(&["b"]),
        )]),
    ]);

    let compiled = compile(Some(&program), CompilerOptions::new());

    assert_eq!(compiled.diagnostics.len(), 1);
    let diagnostic = &compiled.diagnostics[0];
    assert_eq!(diagnostic.get_error_name(), "UnexpectedKind");
    assert_eq!(
        diagnostic.get_position(),
        &NodePath::root().child(0).child(1).child(0).child(1)
    );
}

#[test]
fn test_within_restores_position() {
    let mut compiler = Compiler::new(CompilerOptions::new());

    compiler.within(3, |compiler| {
        compiler.within(0, |compiler| {
            compiler.report(ErrorImpl::MissingNode {
                expected: "an operand",
            })
        })
    });

    assert_eq!(compiler.get_position(), &NodePath::root());
}
