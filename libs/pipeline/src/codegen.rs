//! # Code Generator
//!
//! Renders a target tree back to source text. Rendering is a pure function of
//! the tree: statements are joined by the style's statement separator, call
//! arguments and declarators by its list separator, and every
//! `ExpressionStatement` ends in `;`.
//!
//! ## Example
//!
//! ```rust
//! use transpile_pipeline::codegen::generate;
//! use transpile_pipeline::estree::Node;
//!
//! let inner = Node::call("subtract", vec![Node::number("4"), Node::number("2")]);
//! let call = Node::call("add", vec![Node::number("2"), inner]);
//! let program = Node::Program { body: vec![Node::statement(call)] };
//! assert_eq!(generate(&program).unwrap(), "add(2, subtract(4, 2));");
//! ```

use crate::error::CodegenError;
use crate::estree::Node;
use config::constants::{
    RenderStyle, STACKER_RED_ZONE_BYTES, STACKER_STACK_SIZE_BYTES, STATEMENT_TERMINATOR,
    STRING_DELIMITER,
};

/// Render `node` with the default style.
pub fn generate(node: &Node) -> Result<String, CodegenError> {
    generate_with(node, &RenderStyle::default())
}

/// Render `node` with the given separators.
///
/// A `Program` is only accepted at the top; one found below it fails with
/// `UnknownNodeType`.
pub fn generate_with(node: &Node, style: &RenderStyle) -> Result<String, CodegenError> {
    let mut renderer = Renderer {
        style,
        out: String::new(),
    };
    match node {
        Node::Program { body } => renderer.render_list(body, style.statement_separator)?,
        other => renderer.render(other)?,
    }
    Ok(renderer.out)
}

/// Writes every node into one output buffer.
struct Renderer<'s> {
    style: &'s RenderStyle,
    out: String,
}

impl Renderer<'_> {
    fn render(&mut self, node: &Node) -> Result<(), CodegenError> {
        stacker::maybe_grow(STACKER_RED_ZONE_BYTES, STACKER_STACK_SIZE_BYTES, || {
            self.render_node(node)
        })
    }

    fn render_node(&mut self, node: &Node) -> Result<(), CodegenError> {
        let list_separator = self.style.list_separator;
        match node {
            Node::Program { .. } => {
                return Err(CodegenError::UnknownNodeType {
                    node_type: node.node_type(),
                })
            }
            Node::ExpressionStatement { expression } => {
                self.render(expression)?;
                self.out.push(STATEMENT_TERMINATOR);
            }
            Node::CallExpression { callee, arguments } => {
                self.render(callee)?;
                self.out.push('(');
                self.render_list(arguments, list_separator)?;
                self.out.push(')');
            }
            Node::VariableDeclaration { kind, declarations } => {
                self.out.push_str(kind);
                self.out.push(' ');
                self.render_list(declarations, list_separator)?;
            }
            Node::VariableDeclarator { id, init } => {
                self.render(id)?;
                if let Some(init) = init {
                    self.out.push_str(" = ");
                    self.render(init)?;
                }
            }
            Node::LogicalExpression {
                left,
                operator,
                right,
            } => {
                self.render(left)?;
                self.out.push(' ');
                self.out.push_str(operator);
                self.out.push(' ');
                self.render(right)?;
            }
            Node::MemberExpression {
                object, property, ..
            } => {
                self.render(object)?;
                self.out.push('.');
                self.render(property)?;
            }
            Node::Identifier { name } => self.out.push_str(name),
            Node::NumberLiteral { value } => self.out.push_str(value),
            Node::StringLiteral { value } => {
                self.out.push(STRING_DELIMITER);
                self.out.push_str(value);
                self.out.push(STRING_DELIMITER);
            }
        }
        Ok(())
    }

    fn render_list(&mut self, nodes: &[Node], separator: &str) -> Result<(), CodegenError> {
        for (index, node) in nodes.iter().enumerate() {
            if index > 0 {
                self.out.push_str(separator);
            }
            self.render(node)?;
        }
        Ok(())
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn program(body: Vec<Node>) -> Node {
        Node::Program { body }
    }

    #[test]
    fn test_empty_program() {
        assert_eq!(generate(&program(Vec::new())).unwrap(), "");
    }

    #[test]
    fn test_nested_calls() {
        let tree = program(vec![Node::statement(Node::call(
            "add",
            vec![
                Node::number("2"),
                Node::call("subtract", vec![Node::number("4"), Node::number("2")]),
            ],
        ))]);
        assert_eq!(generate(&tree).unwrap(), "add(2, subtract(4, 2));");
    }

    #[test]
    fn test_statements_joined_by_newline() {
        let tree = program(vec![
            Node::statement(Node::call("f", Vec::new())),
            Node::statement(Node::number("2")),
        ]);
        assert_eq!(generate(&tree).unwrap(), "f();\n2;");
    }

    #[test]
    fn test_guarded_declaration() {
        let init = Node::logical(Node::identifier("x"), "&&", Node::member("x", "y"));
        let tree = program(vec![Node::statement(Node::declaration(
            "let",
            vec![Node::declarator("o", Some(init))],
        ))]);
        assert_eq!(generate(&tree).unwrap(), "let o = x && x.y;");
    }

    #[test]
    fn test_declarators_joined_by_list_separator() {
        let tree = Node::declaration(
            "const",
            vec![
                Node::declarator("a", Some(Node::number("1"))),
                Node::declarator("b", Some(Node::string("hi"))),
            ],
        );
        assert_eq!(generate(&tree).unwrap(), "const a = 1, b = \"hi\"");
    }

    #[test]
    fn test_declarator_without_init() {
        assert_eq!(generate(&Node::declarator("o", None)).unwrap(), "o");
    }

    #[test]
    fn test_string_literal_requoted() {
        assert_eq!(generate(&Node::string("a b")).unwrap(), "\"a b\"");
    }

    #[test]
    fn test_custom_style() {
        let style = RenderStyle {
            statement_separator: " ",
            list_separator: ",",
        };
        let tree = program(vec![
            Node::statement(Node::call("f", vec![Node::number("1"), Node::number("2")])),
            Node::statement(Node::number("3")),
        ]);
        assert_eq!(generate_with(&tree, &style).unwrap(), "f(1,2); 3;");
    }

    #[test]
    fn test_nested_program_rejected() {
        let tree = program(vec![Node::statement(program(Vec::new()))]);
        assert_eq!(
            generate(&tree).unwrap_err(),
            CodegenError::UnknownNodeType { node_type: "Program" }
        );
    }

    #[test]
    fn test_deep_nesting_renders() {
        let depth = 50_000;
        let mut node = Node::number("1");
        for _ in 0..depth {
            node = Node::call("f", vec![node]);
        }
        let output = generate(&program(vec![Node::statement(node)])).unwrap();
        assert_eq!(output.len(), depth * 3 + 2);
        assert!(output.starts_with("f(f(") && output.ends_with("1));"));
    }
}
