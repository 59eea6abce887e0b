//! # Transformer
//!
//! Builds the ESTree target tree for an s-expression program in one walk:
//!
//! - a call becomes a `CallExpression` with an `Identifier` callee, and its
//!   `arguments` become the context its params are appended to;
//! - literals copy straight across, also at the top level;
//! - a call whose parent is the `Program` is wrapped in an
//!   `ExpressionStatement`.

use crate::ast::Node;
use transpile_pipeline::estree::{self, Field};
use transpile_pipeline::{
    traverse, Context, SyntaxNode, TargetBuilder, TargetId, TraversalError, Visit, Visitor,
};

/// Build the target tree for `program`.
pub fn transform(program: &Node) -> Result<estree::Node, TraversalError> {
    let mut transformer = Transformer {
        builder: TargetBuilder::new(),
    };
    traverse(program, &mut transformer)?;
    transformer.builder.finish()
}

struct Transformer {
    builder: TargetBuilder,
}

impl Transformer {
    /// Attach a call into the parent's context, as a statement when the
    /// parent is the program.
    fn attach_call(
        &mut self,
        parent: Visit<'_, Node>,
        call: estree::Node,
    ) -> Result<TargetId, TraversalError> {
        match parent.node {
            Node::Program { .. } => self.builder.attach_statement(parent, call),
            _ => self.builder.attach(parent, call),
        }
    }
}

impl Visitor<Node> for Transformer {
    fn enter(
        &mut self,
        visit: Visit<'_, Node>,
        parent: Option<Visit<'_, Node>>,
    ) -> Result<(), TraversalError> {
        tracing::trace!(id = %visit.id, node_type = visit.node.node_type(), "transform");

        let Some(parent) = parent else {
            // The root program's body is the builder's initial context.
            return match visit.node {
                Node::Program { .. } => Ok(()),
                other => Err(unknown(other)),
            };
        };

        match visit.node {
            Node::Program { .. } => return Err(unknown(visit.node)),
            Node::CallExpression { name, .. } => {
                let call = self.attach_call(parent, estree::Node::call(name.clone(), Vec::new()))?;
                self.builder
                    .install(visit.id, Context::append(call, Field::Arguments));
            }
            Node::NumberLiteral { value } => {
                self.builder.attach(parent, estree::Node::number(value.clone()))?;
            }
            Node::StringLiteral { value } => {
                self.builder.attach(parent, estree::Node::string(value.clone()))?;
            }
        }
        Ok(())
    }
}

fn unknown(node: &Node) -> TraversalError {
    TraversalError::UnknownNodeType {
        node_type: node.node_type(),
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn number(value: &str) -> Node {
        Node::NumberLiteral {
            value: value.to_string(),
        }
    }

    fn call(name: &str, params: Vec<Node>) -> Node {
        Node::CallExpression {
            name: name.to_string(),
            params,
        }
    }

    #[test]
    fn test_nested_call() {
        let program = Node::Program {
            body: vec![call(
                "add",
                vec![number("2"), call("subtract", vec![number("4"), number("2")])],
            )],
        };
        assert_eq!(
            transform(&program).unwrap(),
            estree::Node::Program {
                body: vec![estree::Node::statement(estree::Node::call(
                    "add",
                    vec![
                        estree::Node::number("2"),
                        estree::Node::call(
                            "subtract",
                            vec![estree::Node::number("4"), estree::Node::number("2")]
                        ),
                    ],
                ))],
            }
        );
    }

    #[test]
    fn test_top_level_literal_not_wrapped() {
        let program = Node::Program {
            body: vec![Node::StringLiteral {
                value: "hi".to_string(),
            }],
        };
        assert_eq!(
            transform(&program).unwrap(),
            estree::Node::Program {
                body: vec![estree::Node::string("hi")],
            }
        );
    }

    #[test]
    fn test_source_tree_untouched() {
        let program = Node::Program {
            body: vec![call("f", vec![number("1")])],
        };
        let before = program.clone();
        transform(&program).unwrap();
        assert_eq!(program, before);
    }

    #[test]
    fn test_nested_program_rejected() {
        let program = Node::Program {
            body: vec![Node::Program { body: Vec::new() }],
        };
        assert_eq!(
            transform(&program).unwrap_err(),
            TraversalError::UnknownNodeType { node_type: "Program" }
        );
    }

    #[test]
    fn test_root_must_be_program() {
        assert_eq!(
            transform(&number("1")).unwrap_err(),
            TraversalError::UnknownNodeType {
                node_type: "NumberLiteral"
            }
        );
    }

    #[test]
    fn test_empty_program() {
        let program = Node::Program { body: Vec::new() };
        assert_eq!(transform(&program).unwrap(), estree::Node::program());
    }
}
