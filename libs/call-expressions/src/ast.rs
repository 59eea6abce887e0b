//! # Source AST
//!
//! Tree built by the s-expression parser. `Program` is always the root and
//! only the root.

use serde::Serialize;
use transpile_pipeline::{Children, SyntaxNode};

/// A node of an s-expression program.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum Node {
    /// Top-level forms in source order.
    Program { body: Vec<Node> },
    /// `(name params…)`
    CallExpression { name: String, params: Vec<Node> },
    /// Digits exactly as written.
    NumberLiteral { value: String },
    /// Text between the quotes.
    StringLiteral { value: String },
}

impl SyntaxNode for Node {
    fn node_type(&self) -> &'static str {
        match self {
            Node::Program { .. } => "Program",
            Node::CallExpression { .. } => "CallExpression",
            Node::NumberLiteral { .. } => "NumberLiteral",
            Node::StringLiteral { .. } => "StringLiteral",
        }
    }

    fn children(&self) -> Children<'_, Self> {
        match self {
            Node::Program { body } => Children::Many(body.as_slice()),
            Node::CallExpression { params, .. } => Children::Many(params.as_slice()),
            Node::NumberLiteral { .. } | Node::StringLiteral { .. } => Children::Leaf,
        }
    }
}

impl Node {
    fn take_children(&mut self) -> Vec<Node> {
        match self {
            Node::Program { body } => std::mem::take(body),
            Node::CallExpression { params, .. } => std::mem::take(params),
            Node::NumberLiteral { .. } | Node::StringLiteral { .. } => Vec::new(),
        }
    }
}

/// Frees nested calls from a worklist instead of recursing, so dropping a
/// deeply nested program does not overflow the stack.
impl Drop for Node {
    fn drop(&mut self) {
        let mut pending = self.take_children();
        while let Some(mut node) = pending.pop() {
            pending.append(&mut node.take_children());
        }
    }
}
