//! # Transformer
//!
//! Builds the ESTree target tree for a declaration program in one walk.
//!
//! An optional chain `x?.y` desugars into the guard `x && x.y`; a plain
//! chain `x.y` becomes the member access itself. Only a single-level access
//! is desugared. Declarations whose parent is the `Program` are wrapped in an
//! `ExpressionStatement`; literals copy straight across, also at the top
//! level.
//!
//! Each node type has a rule only under a particular parent: a declaration
//! under the program, a declarator under a declaration, a chain under a
//! declarator, a member under a chain. A node met anywhere else fails with
//! `UnknownNodeType`.

use crate::ast::Node;
use config::constants::GUARD_OPERATOR;
use transpile_pipeline::estree::{self, Field};
use transpile_pipeline::{
    traverse, Context, SyntaxNode, TargetBuilder, TraversalError, Visit, Visitor,
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

        match (visit.node, parent.node) {
            (Node::VariableDeclaration { kind, .. }, Node::Program { .. }) => {
                let declaration = estree::Node::declaration(kind.clone(), Vec::new());
                let declaration = self.builder.attach_statement(parent, declaration)?;
                self.builder
                    .install(visit.id, Context::append(declaration, Field::Declarations));
            }
            (Node::VariableDeclarator { name, .. }, Node::VariableDeclaration { .. }) => {
                let declarator = self
                    .builder
                    .attach(parent, estree::Node::declarator(name.clone(), None))?;
                self.builder
                    .install(visit.id, Context::assign(declarator, Field::Init));
            }
            (Node::ChainExpression { expression }, Node::VariableDeclarator { .. }) => {
                self.builder.attach(parent, desugar(expression)?)?;
            }
            // Already translated by its chain.
            (Node::MemberExpression { .. }, Node::ChainExpression { .. }) => {}
            (Node::NumberLiteral { value }, _) => {
                self.builder.attach(parent, estree::Node::number(value.clone()))?;
            }
            (Node::StringLiteral { value }, _) => {
                self.builder.attach(parent, estree::Node::string(value.clone()))?;
            }
            (node, _) => return Err(unknown(node)),
        }
        Ok(())
    }
}

/// Target expression for the member access inside a chain.
fn desugar(expression: &Node) -> Result<estree::Node, TraversalError> {
    match expression {
        Node::MemberExpression {
            object,
            optional: true,
            property,
        } => Ok(estree::Node::logical(
            estree::Node::identifier(object.clone()),
            GUARD_OPERATOR,
            estree::Node::member(object.clone(), property.clone()),
        )),
        Node::MemberExpression {
            object,
            optional: false,
            property,
        } => Ok(estree::Node::member(object.clone(), property.clone())),
        other => Err(unknown(other)),
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

    fn member(object: &str, optional: bool, property: &str) -> Node {
        Node::MemberExpression {
            object: object.to_string(),
            optional,
            property: property.to_string(),
        }
    }

    fn chain(expression: Node) -> Node {
        Node::ChainExpression {
            expression: Box::new(expression),
        }
    }

    fn declare(kind: &str, declarators: Vec<(&str, Node)>) -> Node {
        Node::Program {
            body: vec![Node::VariableDeclaration {
                kind: kind.to_string(),
                declarations: declarators
                    .into_iter()
                    .map(|(name, init)| Node::VariableDeclarator {
                        name: name.to_string(),
                        init: Box::new(init),
                    })
                    .collect(),
            }],
        }
    }

    fn expected(kind: &str, declarators: Vec<(&str, estree::Node)>) -> estree::Node {
        estree::Node::Program {
            body: vec![estree::Node::statement(estree::Node::declaration(
                kind,
                declarators
                    .into_iter()
                    .map(|(name, init)| estree::Node::declarator(name, Some(init)))
                    .collect(),
            ))],
        }
    }

    #[test]
    fn test_optional_chain_becomes_guard() {
        let program = declare("let", vec![("o", chain(member("x", true, "y")))]);
        let guard = estree::Node::logical(
            estree::Node::identifier("x"),
            "&&",
            estree::Node::member("x", "y"),
        );
        assert_eq!(transform(&program).unwrap(), expected("let", vec![("o", guard)]));
    }

    #[test]
    fn test_plain_chain_has_no_guard() {
        let program = declare("const", vec![("o", chain(member("x", false, "y")))]);
        assert_eq!(
            transform(&program).unwrap(),
            expected("const", vec![("o", estree::Node::member("x", "y"))])
        );
    }

    #[test]
    fn test_literal_initializers() {
        let program = declare(
            "let",
            vec![
                ("a", Node::NumberLiteral { value: "1".to_string() }),
                ("b", Node::StringLiteral { value: "s".to_string() }),
            ],
        );
        assert_eq!(
            transform(&program).unwrap(),
            expected(
                "let",
                vec![("a", estree::Node::number("1")), ("b", estree::Node::string("s"))]
            )
        );
    }

    #[test]
    fn test_top_level_literal_not_wrapped() {
        let program = Node::Program {
            body: vec![Node::NumberLiteral { value: "2".to_string() }],
        };
        assert_eq!(
            transform(&program).unwrap(),
            estree::Node::Program {
                body: vec![estree::Node::number("2")],
            }
        );
    }

    #[test]
    fn test_chain_in_program_body_rejected() {
        let program = Node::Program {
            body: vec![chain(member("x", true, "y"))],
        };
        assert_eq!(
            transform(&program).unwrap_err(),
            TraversalError::UnknownNodeType {
                node_type: "ChainExpression"
            }
        );
    }

    #[test]
    fn test_bare_member_rejected() {
        let program = declare("let", vec![("o", member("x", true, "y"))]);
        assert_eq!(
            transform(&program).unwrap_err(),
            TraversalError::UnknownNodeType {
                node_type: "MemberExpression"
            }
        );
    }

    #[test]
    fn test_chain_around_literal_rejected() {
        let program = declare(
            "let",
            vec![("o", chain(Node::NumberLiteral { value: "1".to_string() }))],
        );
        assert_eq!(
            transform(&program).unwrap_err(),
            TraversalError::UnknownNodeType {
                node_type: "NumberLiteral"
            }
        );
    }

    #[test]
    fn test_declarator_outside_declaration_rejected() {
        let program = Node::Program {
            body: vec![Node::VariableDeclarator {
                name: "o".to_string(),
                init: Box::new(Node::NumberLiteral { value: "1".to_string() }),
            }],
        };
        assert_eq!(
            transform(&program).unwrap_err(),
            TraversalError::UnknownNodeType {
                node_type: "VariableDeclarator"
            }
        );
    }

    #[test]
    fn test_root_must_be_program() {
        assert_eq!(
            transform(&chain(member("x", true, "y"))).unwrap_err(),
            TraversalError::UnknownNodeType {
                node_type: "ChainExpression"
            }
        );
    }
}
