use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// Node Kinds
///
/// The closed set of syntactic kinds a Micro AST node can carry.
/// Anything the parser emits that the code generator has no use for
/// deserializes into `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    Program,
    StatementList,
    Assign,
    Read,
    Write,
    Identifier,
    IntLiteral,
    Plus,
    Minus,
    #[serde(other)]
    Other,
}

impl NodeKind {
    pub fn is_binary_op(&self) -> bool {
        matches!(self, NodeKind::Plus | NodeKind::Minus)
    }
}

impl Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            NodeKind::Program => "program",
            NodeKind::StatementList => "statement_list",
            NodeKind::Assign => "assign",
            NodeKind::Read => "read",
            NodeKind::Write => "write",
            NodeKind::Identifier => "identifier",
            NodeKind::IntLiteral => "int_literal",
            NodeKind::Plus => "plus",
            NodeKind::Minus => "minus",
            NodeKind::Other => "other",
        };
        write!(f, "{}", name)
    }
}

/// AST Node
///
/// Every node owns its children in source order. Leaves (identifiers and
/// integer literals) carry their source text in `lexeme`.
///
/// Serialized form, as produced by the parser:
///
/// ```json
/// { "kind": "assign", "children": [
///     { "kind": "identifier", "lexeme": "x" },
///     { "kind": "int_literal", "lexeme": "1" } ] }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AstNode {
    pub kind: NodeKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lexeme: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<AstNode>,
}

impl AstNode {
    pub fn new(kind: NodeKind, children: Vec<AstNode>) -> Self {
        AstNode {
            kind,
            lexeme: None,
            children,
        }
    }

    pub fn leaf(kind: NodeKind, lexeme: impl Into<String>) -> Self {
        AstNode {
            kind,
            lexeme: Some(lexeme.into()),
            children: vec![],
        }
    }

    pub fn identifier(name: impl Into<String>) -> Self {
        Self::leaf(NodeKind::Identifier, name)
    }

    pub fn int_literal(value: impl Display) -> Self {
        Self::leaf(NodeKind::IntLiteral, value.to_string())
    }

    pub fn assign(target: &str, value: AstNode) -> Self {
        Self::new(NodeKind::Assign, vec![Self::identifier(target), value])
    }

    pub fn plus(left: AstNode, right: AstNode) -> Self {
        Self::new(NodeKind::Plus, vec![left, right])
    }

    pub fn minus(left: AstNode, right: AstNode) -> Self {
        Self::new(NodeKind::Minus, vec![left, right])
    }

    pub fn read(names: &[&str]) -> Self {
        Self::new(
            NodeKind::Read,
            names.iter().map(|name| Self::identifier(*name)).collect(),
        )
    }

    pub fn write(values: Vec<AstNode>) -> Self {
        Self::new(NodeKind::Write, values)
    }

    pub fn program(statements: Vec<AstNode>) -> Self {
        Self::new(
            NodeKind::Program,
            vec![Self::new(NodeKind::StatementList, statements)],
        )
    }

    /// Returns the child at `index`, or `None` when the parser left it out.
    pub fn child(&self, index: usize) -> Option<&AstNode> {
        self.children.get(index)
    }

    pub fn lexeme(&self) -> &str {
        self.lexeme.as_deref().unwrap_or("")
    }
}
