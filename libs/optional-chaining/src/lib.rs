//! # Optional Chaining
//!
//! Desugars single-level optional member access in `let`/`const`
//! declarations into a logical-AND guard.
//!
//! ```text
//! let o = x?.y;  →  let o = x && x.y;
//! ```
//!
//! ## Example
//!
//! ```rust
//! assert_eq!(
//!     optional_chaining::compile("let o = x?.y;").unwrap(),
//!     "let o = x && x.y;"
//! );
//! ```
//!
//! Multi-level chains such as `a?.b?.c` are rejected by the parser.

pub mod ast;
pub mod parser;
pub mod transformer;

pub use ast::Node;

use config::constants::LexicalRules;
use transpile_pipeline::{estree, Grammar, ParseError, PipelineError, Stages, Token, TraversalError};

/// The declaration grammar with optional member access.
#[derive(Debug, Clone, Copy, Default)]
pub struct OptionalChaining;

impl Grammar for OptionalChaining {
    const NAME: &'static str = "chains";
    type Ast = Node;

    fn rules() -> LexicalRules {
        LexicalRules::optional_chaining()
    }

    fn parse(tokens: &[Token]) -> Result<Node, ParseError> {
        parser::parse(tokens)
    }

    fn transform(ast: &Node) -> Result<estree::Node, TraversalError> {
        transformer::transform(ast)
    }
}

/// Translate declaration source, desugaring optional member access.
pub fn compile(source: &str) -> Result<String, PipelineError> {
    transpile_pipeline::compile::<OptionalChaining>(source)
}

/// Translate declaration source, keeping every intermediate product.
pub fn stages(source: &str) -> Result<Stages<Node>, PipelineError> {
    transpile_pipeline::stages::<OptionalChaining>(source)
}
