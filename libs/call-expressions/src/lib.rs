//! # Call Expressions
//!
//! Rewrites an s-expression language into call-expression syntax.
//!
//! ```text
//! (add 2 (subtract 4 2))  →  add(2, subtract(4, 2));
//! ```
//!
//! ## Example
//!
//! ```rust
//! assert_eq!(
//!     call_expressions::compile("(add 2 (subtract 4 2))").unwrap(),
//!     "add(2, subtract(4, 2));"
//! );
//! ```
//!
//! ## Grammar
//!
//! ```text
//! program := form*
//! form    := NUMBER | STRING | "(" NAME form* ")"
//! ```
//!
//! Top-level forms become statements joined by newlines. String literals
//! have no escape sequences.

pub mod ast;
pub mod parser;
pub mod transformer;

pub use ast::Node;

use config::constants::LexicalRules;
use transpile_pipeline::{estree, Grammar, ParseError, PipelineError, Stages, Token, TraversalError};

/// The s-expression grammar.
#[derive(Debug, Clone, Copy, Default)]
pub struct CallExpressions;

impl Grammar for CallExpressions {
    const NAME: &'static str = "calls";
    type Ast = Node;

    fn rules() -> LexicalRules {
        LexicalRules::call_expressions()
    }

    fn parse(tokens: &[Token]) -> Result<Node, ParseError> {
        parser::parse(tokens)
    }

    fn transform(ast: &Node) -> Result<estree::Node, TraversalError> {
        transformer::transform(ast)
    }
}

/// Translate s-expression source into call-expression source.
pub fn compile(source: &str) -> Result<String, PipelineError> {
    transpile_pipeline::compile::<CallExpressions>(source)
}

/// Translate s-expression source, keeping every intermediate product.
pub fn stages(source: &str) -> Result<Stages<Node>, PipelineError> {
    transpile_pipeline::stages::<CallExpressions>(source)
}
