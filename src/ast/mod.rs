/// AST (Abstract Syntax Tree) module
/// Contains the tree handed to the code generator by the external parser
///
/// Submodules:
/// - ast: Node kinds, the node structure and construction helpers
/// - lexemes: Validation of identifier and integer literal payloads
pub mod ast;
pub mod lexemes;
