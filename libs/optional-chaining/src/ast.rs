//! # Source AST
//!
//! Tree built by the declaration parser. Member access only appears wrapped
//! in a `ChainExpression`, and only one level deep.

use serde::Serialize;
use transpile_pipeline::{Children, SyntaxNode};

/// A node of a declaration program.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum Node {
    /// Top-level statements in source order.
    Program { body: Vec<Node> },
    /// `kind declarations… ;`
    VariableDeclaration { kind: String, declarations: Vec<Node> },
    /// `name = init`
    VariableDeclarator { name: String, init: Box<Node> },
    /// Boundary of a member access that may short-circuit.
    ChainExpression { expression: Box<Node> },
    /// `object.property` or `object?.property`
    MemberExpression {
        object: String,
        optional: bool,
        property: String,
    },
    NumberLiteral { value: String },
    /// Text between the quotes.
    StringLiteral { value: String },
}

impl SyntaxNode for Node {
    fn node_type(&self) -> &'static str {
        match self {
            Node::Program { .. } => "Program",
            Node::VariableDeclaration { .. } => "VariableDeclaration",
            Node::VariableDeclarator { .. } => "VariableDeclarator",
            Node::ChainExpression { .. } => "ChainExpression",
            Node::MemberExpression { .. } => "MemberExpression",
            Node::NumberLiteral { .. } => "NumberLiteral",
            Node::StringLiteral { .. } => "StringLiteral",
        }
    }

    fn children(&self) -> Children<'_, Self> {
        match self {
            Node::Program { body } => Children::Many(body.as_slice()),
            Node::VariableDeclaration { declarations, .. } => {
                Children::Many(declarations.as_slice())
            }
            Node::VariableDeclarator { init, .. } => Children::One(&**init),
            Node::ChainExpression { expression } => Children::One(&**expression),
            Node::MemberExpression { .. }
            | Node::NumberLiteral { .. }
            | Node::StringLiteral { .. } => Children::Leaf,
        }
    }
}
