//! # Tokens
//!
//! Token types produced by the lexer and consumed by the grammar parsers.
//!
//! ## Example
//!
//! ```rust
//! use transpile_pipeline::lexer::{Token, TokenKind};
//! use transpile_pipeline::span::Span;
//!
//! let token = Token::new(TokenKind::Number, Span::from_bytes(0, 2), "42");
//! assert_eq!(token.kind, TokenKind::Number);
//! assert!(token.is(TokenKind::Number, "42"));
//! ```

use crate::span::Span;
use config::constants::STRING_DELIMITER;
use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// TOKEN
// =============================================================================

/// A token produced by the lexer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// Token type.
    pub kind: TokenKind,
    /// Token text exactly as it appears in the source.
    pub text: String,
    /// Source span.
    pub span: Span,
}

impl Token {
    /// Create a new token.
    pub fn new(kind: TokenKind, span: Span, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
            span,
        }
    }

    /// Check kind and text at once, e.g. the `;` mark or the `(` paren.
    pub fn is(&self, kind: TokenKind, text: &str) -> bool {
        self.kind == kind && self.text == text
    }

    /// Text of a string token without its surrounding quotes.
    pub fn unquoted(&self) -> &str {
        self.text
            .strip_prefix(STRING_DELIMITER)
            .and_then(|t| t.strip_suffix(STRING_DELIMITER))
            .unwrap_or(&self.text)
    }
}

// =============================================================================
// TOKEN KIND
// =============================================================================

/// Types of tokens. Shared by every grammar; a grammar that has no keywords
/// or no marks simply never produces them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenKind {
    /// `(` or `)`
    Paren,
    /// Run of lowercase letters that is not a keyword, like `add`
    Name,
    /// Run of decimal digits, like `42`
    Number,
    /// Double-quoted text, like `"hi"`, quotes included
    String,
    /// Single punctuation character other than a paren, like `=` or `?`
    Mark,
    /// Reserved word, like `let`
    Keyword,
}

impl TokenKind {
    /// Get display string for error messages.
    pub const fn display(&self) -> &'static str {
        match self {
            Self::Paren => "paren",
            Self::Name => "name",
            Self::Number => "number",
            Self::String => "string",
            Self::Mark => "mark",
            Self::Keyword => "keyword",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display())
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_is() {
        let token = Token::new(TokenKind::Mark, Span::from_bytes(0, 1), ";");
        assert!(token.is(TokenKind::Mark, ";"));
        assert!(!token.is(TokenKind::Mark, "="));
        assert!(!token.is(TokenKind::Paren, ";"));
    }

    #[test]
    fn test_unquoted_strips_delimiters() {
        let token = Token::new(TokenKind::String, Span::from_bytes(0, 4), "\"hi\"");
        assert_eq!(token.unquoted(), "hi");
        let empty = Token::new(TokenKind::String, Span::from_bytes(0, 2), "\"\"");
        assert_eq!(empty.unquoted(), "");
    }

    #[test]
    fn test_token_display() {
        assert_eq!(TokenKind::Paren.display(), "paren");
        assert_eq!(TokenKind::Keyword.to_string(), "keyword");
    }

    #[test]
    fn test_token_kind_serializes_snake_case() {
        let json = serde_json::to_string(&TokenKind::Keyword).unwrap();
        assert_eq!(json, "\"keyword\"");
    }
}
