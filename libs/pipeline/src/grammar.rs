//! # Grammar
//!
//! A grammar plugs its lexical rules, parser and transformer into the shared
//! pipeline. [`compile`] and [`stages`] run any grammar through all five
//! stages:
//!
//! ```text
//! text -> tokenize -> parse -> transform -> generate -> text
//! ```
//!
//! Each run is a pure function of its input and shares nothing with other
//! runs, so grammars can be driven from several threads at once.

use crate::codegen::generate;
use crate::error::{ParseError, PipelineError, TraversalError};
use crate::estree::Node;
use crate::lexer::{tokenize, Token};
use crate::traverse::SyntaxNode;
use config::constants::{LexicalRules, StackConfig};
use serde::Serialize;
use std::fmt;

// =============================================================================
// GRAMMAR
// =============================================================================

/// One source language the pipeline can translate.
pub trait Grammar {
    /// Short name used in diagnostics, e.g. `calls`.
    const NAME: &'static str;

    /// Root type of the grammar's source tree.
    type Ast: SyntaxNode + Serialize + fmt::Debug;

    /// Characters and words the lexer accepts for this grammar.
    fn rules() -> LexicalRules;

    /// Build the source tree from a token sequence.
    fn parse(tokens: &[Token]) -> Result<Self::Ast, ParseError>;

    /// Build the target tree from the source tree.
    fn transform(ast: &Self::Ast) -> Result<Node, TraversalError>;
}

// =============================================================================
// DRIVERS
// =============================================================================

/// Every intermediate product of one pipeline run.
#[derive(Debug, Serialize)]
pub struct Stages<A> {
    pub tokens: Vec<Token>,
    pub source_ast: A,
    pub target_ast: Node,
    pub output: String,
}

/// Translate `source` with grammar `G`.
pub fn compile<G: Grammar>(source: &str) -> Result<String, PipelineError> {
    stages::<G>(source).map(|stages| stages.output)
}

/// Translate `source` with grammar `G`, keeping every intermediate product.
///
/// The recursive stages run on a stack that grows on demand, so deeply
/// nested input does not overflow the caller's stack.
pub fn stages<G: Grammar>(source: &str) -> Result<Stages<G::Ast>, PipelineError> {
    let stack = StackConfig::default();
    stacker::maybe_grow(stack.red_zone_bytes, stack.stack_size_bytes, || {
        run::<G>(source)
    })
}

fn run<G: Grammar>(source: &str) -> Result<Stages<G::Ast>, PipelineError> {
    let tokens = tokenize(source, &G::rules())?;
    let source_ast = G::parse(&tokens)?;
    let target_ast = G::transform(&source_ast)?;
    let output = generate(&target_ast)?;
    tracing::debug!(
        grammar = G::NAME,
        tokens = tokens.len(),
        output_len = output.len(),
        "pipeline finished"
    );
    Ok(Stages {
        tokens,
        source_ast,
        target_ast,
        output,
    })
}
