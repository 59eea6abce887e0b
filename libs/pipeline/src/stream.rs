//! # Token Stream
//!
//! The single shared cursor a recursive-descent parser advances through its
//! token sequence. Every accessor that recognizes a token consumes it, so no
//! token is inspected by two productions.
//!
//! ## Example
//!
//! ```rust
//! use config::constants::LexicalRules;
//! use transpile_pipeline::lexer::{tokenize, TokenKind};
//! use transpile_pipeline::stream::TokenStream;
//!
//! let tokens = tokenize("(add)", &LexicalRules::call_expressions()).unwrap();
//! let mut stream = TokenStream::new(&tokens);
//! stream.expect(TokenKind::Paren, "(", "`(`").unwrap();
//! assert_eq!(stream.expect_kind(TokenKind::Name, "name").unwrap().text, "add");
//! assert!(stream.match_token(TokenKind::Paren, ")"));
//! assert!(stream.is_at_end());
//! ```

use crate::error::ParseError;
use crate::lexer::{Token, TokenKind};

// =============================================================================
// TOKEN STREAM
// =============================================================================

/// Cursor over a borrowed token sequence.
#[derive(Debug, Clone)]
pub struct TokenStream<'a> {
    /// Token sequence, never mutated.
    tokens: &'a [Token],
    /// Current token index.
    current: usize,
}

impl<'a> TokenStream<'a> {
    /// Create a stream positioned at the first token.
    pub fn new(tokens: &'a [Token]) -> Self {
        Self { tokens, current: 0 }
    }

    // =========================================================================
    // TOKEN ACCESS
    // =========================================================================

    /// Get current token, if any.
    pub fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.current)
    }

    /// Get current token, failing with `UnexpectedEnd` when exhausted.
    pub fn peek_or_end(&self, expected: &'static str) -> Result<&'a Token, ParseError> {
        self.peek().ok_or(ParseError::UnexpectedEnd { expected })
    }

    /// Check if every token has been consumed.
    pub fn is_at_end(&self) -> bool {
        self.current >= self.tokens.len()
    }

    /// Consume and return the current token.
    pub fn advance(&mut self, expected: &'static str) -> Result<&'a Token, ParseError> {
        let token = self.peek_or_end(expected)?;
        self.current += 1;
        Ok(token)
    }

    // =========================================================================
    // MATCHING
    // =========================================================================

    /// Check if current token has the given kind and text.
    pub fn check(&self, kind: TokenKind, text: &str) -> bool {
        self.peek().is_some_and(|t| t.is(kind, text))
    }

    /// Consume current token if it has the given kind and text.
    pub fn match_token(&mut self, kind: TokenKind, text: &str) -> bool {
        if self.check(kind, text) {
            self.current += 1;
            true
        } else {
            false
        }
    }

    /// Consume a token of the given kind and text.
    ///
    /// ## Returns
    ///
    /// The consumed token, `UnexpectedEnd` when exhausted, or
    /// `UnexpectedToken` naming whatever was found instead
    pub fn expect(
        &mut self,
        kind: TokenKind,
        text: &str,
        expected: &'static str,
    ) -> Result<&'a Token, ParseError> {
        let token = self.peek_or_end(expected)?;
        if !token.is(kind, text) {
            return Err(ParseError::unexpected(token));
        }
        self.current += 1;
        Ok(token)
    }

    /// Consume a token of the given kind, whatever its text.
    pub fn expect_kind(
        &mut self,
        kind: TokenKind,
        expected: &'static str,
    ) -> Result<&'a Token, ParseError> {
        let token = self.peek_or_end(expected)?;
        if token.kind != kind {
            return Err(ParseError::unexpected(token));
        }
        self.current += 1;
        Ok(token)
    }
}

// =============================================================================
// TESTS
// =============================================================================
