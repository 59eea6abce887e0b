//! # Transpile Pipeline
//!
//! Grammar-agnostic stages of a source-to-source transpiler.
//!
//! ## Architecture
//!
//! ```text
//! Source Text → Lexer → Tokens → Parser → Source AST
//!     → Transformer (Tree Walker + Contexts) → Target AST → Code Generator → Text
//! ```
//!
//! This crate owns the lexer, the token stream parsers advance through, the
//! tree walker, the context table transformers build the target tree with,
//! the ESTree-shaped target tree and its code generator. A grammar crate adds
//! its source tree, parser and transform visitor, and plugs them in through
//! [`Grammar`].
//!
//! ## Example
//!
//! ```rust
//! use config::constants::LexicalRules;
//! use transpile_pipeline::{tokenize, TokenKind};
//!
//! let tokens = tokenize("(add 2)", &LexicalRules::call_expressions()).unwrap();
//! let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
//! assert_eq!(
//!     kinds,
//!     vec![TokenKind::Paren, TokenKind::Name, TokenKind::Number, TokenKind::Paren]
//! );
//! ```
//!
//! ## Pipeline Integration
//!
//! ```text
//! config → transpile-pipeline → call-expressions / optional-chaining → transpile-cli
//! ```

pub mod codegen;
pub mod context;
pub mod error;
pub mod estree;
pub mod grammar;
pub mod lexer;
pub mod span;
pub mod stream;
pub mod traverse;

// Re-export public API
pub use codegen::{generate, generate_with};
pub use context::{Context, TargetBuilder, TargetId};
pub use error::{CodegenError, LexError, ParseError, PipelineError, TraversalError};
pub use grammar::{compile, stages, Grammar, Stages};
pub use lexer::{tokenize, Token, TokenKind};
pub use span::{Position, Span};
pub use stream::TokenStream;
pub use traverse::{traverse, Children, NodeId, SyntaxNode, Visit, Visitor};
