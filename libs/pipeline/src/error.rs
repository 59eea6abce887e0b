//! # Pipeline Errors
//!
//! One error type per stage, plus [`PipelineError`] which wraps whichever
//! stage failed first. Every stage is fail-fast: there is no recovery and no
//! partial result.
//!
//! ## Example
//!
//! ```rust
//! use transpile_pipeline::error::{LexError, PipelineError};
//! use transpile_pipeline::span::Position;
//!
//! let error: PipelineError = LexError::UnrecognizedCharacter {
//!     character: '#',
//!     position: Position::new(7, 0, 7),
//! }
//! .into();
//! assert_eq!(error.to_string(), "lex error: unrecognized character '#' at 1:8");
//! ```

use crate::lexer::{Token, TokenKind};
use crate::span::{Position, Span};
use thiserror::Error;

// =============================================================================
// LEX ERROR
// =============================================================================

/// Errors raised by the lexer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    /// A character that no lexical rule accepts.
    #[error("unrecognized character {character:?} at {position}")]
    UnrecognizedCharacter {
        /// The offending character.
        character: char,
        /// Where it was found.
        position: Position,
    },

    /// A string literal whose closing quote never comes.
    #[error("unterminated string literal starting at {position}")]
    UnterminatedString {
        /// Position of the opening quote.
        position: Position,
    },
}

// =============================================================================
// PARSE ERROR
// =============================================================================

/// Errors raised by the grammar parsers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A token that matches no production in the current parse mode.
    #[error("unexpected {kind} token '{text}' at {span}")]
    UnexpectedToken {
        /// Kind of the offending token.
        kind: TokenKind,
        /// Its text.
        text: String,
        /// Its location.
        span: Span,
    },

    /// The token sequence ran out before a production was complete.
    #[error("unexpected end of input, expected {expected}")]
    UnexpectedEnd {
        /// Description of what was still needed.
        expected: &'static str,
    },
}

impl ParseError {
    /// Create an unexpected token error from the offending token.
    pub fn unexpected(token: &Token) -> Self {
        Self::UnexpectedToken {
            kind: token.kind,
            text: token.text.clone(),
            span: token.span,
        }
    }
}

// =============================================================================
// TRAVERSAL ERROR
// =============================================================================

/// Errors raised while walking a source tree.
///
/// Parsers only produce node types the transformers know, so this signals a
/// broken internal invariant rather than bad user input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TraversalError {
    /// A node type with no rule at the position where it was met.
    #[error("no traversal rule for node type {node_type}")]
    UnknownNodeType {
        /// Tag of the node, e.g. `ChainExpression`.
        node_type: &'static str,
    },
}

// =============================================================================
// CODEGEN ERROR
// =============================================================================

/// Errors raised while rendering a target tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodegenError {
    /// A target node the generator cannot render where it was found.
    #[error("cannot render node type {node_type}")]
    UnknownNodeType {
        /// Tag of the node, e.g. `Program`.
        node_type: &'static str,
    },
}

// =============================================================================
// PIPELINE ERROR
// =============================================================================

/// The first failure of a pipeline run, tagged with its stage.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PipelineError {
    #[error("lex error: {0}")]
    Lex(#[from] LexError),

    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("traversal error: {0}")]
    Traversal(#[from] TraversalError),

    #[error("codegen error: {0}")]
    Codegen(#[from] CodegenError),
}

// =============================================================================
// TESTS
// =============================================================================
