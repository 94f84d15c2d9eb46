#![allow(clippy::module_inception)]

use std::fmt::Display;

use crate::errors::errors::{Error, ErrorTip};

pub mod ast;
pub mod compiler;
pub mod errors;
pub mod macros;

pub use compiler::{
    compiler::{compile, Compilation},
    options::{CompilerOptions, LabelPolicy},
};

/// Location of a node, as the child indices leading to it from the root.
///
/// The parser hands over a bare tree without source spans, so diagnostics
/// point into the tree instead of into the source file.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NodePath(Vec<usize>);

impl NodePath {
    pub fn root() -> Self {
        NodePath(vec![])
    }

    pub fn child(&self, index: usize) -> Self {
        let mut path = self.clone();
        path.push(index);
        path
    }

    pub fn push(&mut self, index: usize) {
        self.0.push(index);
    }

    pub fn pop(&mut self) -> Option<usize> {
        self.0.pop()
    }
}

impl Display for NodePath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "root")?;
        for index in &self.0 {
            write!(f, "/{}", index)?;
        }
        Ok(())
    }
}

pub fn display_error(error: &Error) -> String {
    /*
        Error: MissingNode (Expected an operand here, ...)
        -> root/0/3/1
    */

    let mut rendered = if let ErrorTip::None = error.get_tip() {
        format!("Error: {}", error.get_error_name())
    } else {
        format!("Error: {} ({})", error.get_error_name(), error.get_tip())
    };

    rendered.push_str(&format!("\n-> {}", error.get_position()));
    rendered
}
