//! # Target AST
//!
//! ESTree-shaped syntax tree produced by the transformers and rendered by
//! [`crate::codegen`]. Both grammars target this one tree, so they share a
//! single code generator.
//!
//! Target nodes own all their data; nothing in this tree points back into a
//! source tree.
//!
//! ## Example
//!
//! ```rust
//! use transpile_pipeline::estree::Node;
//!
//! let call = Node::call("add", vec![Node::number("2")]);
//! let program = Node::Program { body: vec![Node::statement(call)] };
//! assert_eq!(program.node_type(), "Program");
//! ```

use serde::{Deserialize, Serialize};

// =============================================================================
// NODE
// =============================================================================

/// A node of the target tree, tagged by `type` when serialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Node {
    /// Root holding the top-level statements.
    Program { body: Vec<Node> },
    /// An expression used as a statement.
    ExpressionStatement { expression: Box<Node> },
    /// `callee(arguments…)`
    CallExpression {
        callee: Box<Node>,
        arguments: Vec<Node>,
    },
    /// `kind declarations…`
    VariableDeclaration {
        kind: String,
        declarations: Vec<Node>,
    },
    /// `id = init`. `init` stays empty until the initializer is attached.
    VariableDeclarator {
        id: Box<Node>,
        init: Option<Box<Node>>,
    },
    /// `left operator right`
    LogicalExpression {
        left: Box<Node>,
        operator: String,
        right: Box<Node>,
    },
    /// `object.property`
    MemberExpression {
        object: Box<Node>,
        optional: bool,
        property: Box<Node>,
    },
    Identifier { name: String },
    NumberLiteral { value: String },
    /// Text between the quotes.
    StringLiteral { value: String },
}

impl Node {
    // =========================================================================
    // CONSTRUCTORS
    // =========================================================================

    /// Empty program.
    pub fn program() -> Self {
        Node::Program { body: Vec::new() }
    }

    pub fn identifier(name: impl Into<String>) -> Self {
        Node::Identifier { name: name.into() }
    }

    pub fn number(value: impl Into<String>) -> Self {
        Node::NumberLiteral {
            value: value.into(),
        }
    }

    pub fn string(value: impl Into<String>) -> Self {
        Node::StringLiteral {
            value: value.into(),
        }
    }

    /// Wrap an expression as a statement.
    pub fn statement(expression: Node) -> Self {
        Node::ExpressionStatement {
            expression: Box::new(expression),
        }
    }

    /// Call of the named function.
    pub fn call(callee: impl Into<String>, arguments: Vec<Node>) -> Self {
        Node::CallExpression {
            callee: Box::new(Node::identifier(callee)),
            arguments,
        }
    }

    pub fn declaration(kind: impl Into<String>, declarations: Vec<Node>) -> Self {
        Node::VariableDeclaration {
            kind: kind.into(),
            declarations,
        }
    }

    /// Declarator of the named binding.
    pub fn declarator(name: impl Into<String>, init: Option<Node>) -> Self {
        Node::VariableDeclarator {
            id: Box::new(Node::identifier(name)),
            init: init.map(Box::new),
        }
    }

    pub fn logical(left: Node, operator: impl Into<String>, right: Node) -> Self {
        Node::LogicalExpression {
            left: Box::new(left),
            operator: operator.into(),
            right: Box::new(right),
        }
    }

    /// Non-optional access of a named property on a named object.
    pub fn member(object: impl Into<String>, property: impl Into<String>) -> Self {
        Node::MemberExpression {
            object: Box::new(Node::identifier(object)),
            optional: false,
            property: Box::new(Node::identifier(property)),
        }
    }

    // =========================================================================
    // INSPECTION
    // =========================================================================

    /// Tag naming the node's variant.
    pub const fn node_type(&self) -> &'static str {
        match self {
            Node::Program { .. } => "Program",
            Node::ExpressionStatement { .. } => "ExpressionStatement",
            Node::CallExpression { .. } => "CallExpression",
            Node::VariableDeclaration { .. } => "VariableDeclaration",
            Node::VariableDeclarator { .. } => "VariableDeclarator",
            Node::LogicalExpression { .. } => "LogicalExpression",
            Node::MemberExpression { .. } => "MemberExpression",
            Node::Identifier { .. } => "Identifier",
            Node::NumberLiteral { .. } => "NumberLiteral",
            Node::StringLiteral { .. } => "StringLiteral",
        }
    }

    // =========================================================================
    // FIELD ACCESS
    // =========================================================================

    /// Mutable child collection named by `field`, if this node has one.
    pub fn collection_mut(&mut self, field: Field) -> Option<&mut Vec<Node>> {
        match (self, field) {
            (Node::Program { body }, Field::Body) => Some(body),
            (Node::CallExpression { arguments, .. }, Field::Arguments) => Some(arguments),
            (Node::VariableDeclaration { declarations, .. }, Field::Declarations) => {
                Some(declarations)
            }
            _ => None,
        }
    }

    /// Whether this node has the child collection `field`.
    pub fn has_collection(&self, field: Field) -> bool {
        matches!(
            (self, field),
            (Node::Program { .. }, Field::Body)
                | (Node::CallExpression { .. }, Field::Arguments)
                | (Node::VariableDeclaration { .. }, Field::Declarations)
        )
    }

    /// Whether this node has the single-node field `field`.
    pub fn has_slot(&self, field: Field) -> bool {
        matches!(
            (self, field),
            (Node::ExpressionStatement { .. }, Field::Expression)
                | (Node::VariableDeclarator { .. }, Field::Init)
        )
    }

    /// Put `child` into the single-node field `field`, replacing what was
    /// there. Hands `child` back when this node has no such field.
    pub fn set_child(&mut self, field: Field, child: Node) -> Result<(), Node> {
        match (self, field) {
            (Node::ExpressionStatement { expression }, Field::Expression) => {
                **expression = child;
                Ok(())
            }
            (Node::VariableDeclarator { init, .. }, Field::Init) => {
                *init = Some(Box::new(child));
                Ok(())
            }
            _ => Err(child),
        }
    }

    /// Move every child node into `out`, leaving empty leaves behind.
    fn take_children(&mut self, out: &mut Vec<Node>) {
        match self {
            Node::Program { body } => out.append(body),
            Node::ExpressionStatement { expression } => out.push(take(expression)),
            Node::CallExpression { callee, arguments } => {
                out.push(take(callee));
                out.append(arguments);
            }
            Node::VariableDeclaration { declarations, .. } => out.append(declarations),
            Node::VariableDeclarator { id, init } => {
                out.push(take(id));
                out.extend(init.take().map(|init| *init));
            }
            Node::LogicalExpression { left, right, .. } => {
                out.push(take(left));
                out.push(take(right));
            }
            Node::MemberExpression {
                object, property, ..
            } => {
                out.push(take(object));
                out.push(take(property));
            }
            Node::Identifier { .. } | Node::NumberLiteral { .. } | Node::StringLiteral { .. } => {}
        }
    }
}

fn take(node: &mut Node) -> Node {
    std::mem::replace(node, Node::Identifier { name: String::new() })
}

/// Frees nested children from a worklist instead of recursing, so dropping
/// a deeply nested tree does not overflow the stack.
impl Drop for Node {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        self.take_children(&mut pending);
        while let Some(mut node) = pending.pop() {
            node.take_children(&mut pending);
        }
    }
}

// =============================================================================
// FIELD
// =============================================================================

/// Fields of target nodes that a context can point into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Field {
    /// `Program.body`
    Body,
    /// `ExpressionStatement.expression`
    Expression,
    /// `CallExpression.arguments`
    Arguments,
    /// `VariableDeclaration.declarations`
    Declarations,
    /// `VariableDeclarator.init`
    Init,
}

// =============================================================================
// TESTS
// =============================================================================
