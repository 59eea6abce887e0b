//! # Lexer
//!
//! Tokenizes source text into tokens. The scanner itself is shared by every
//! grammar; the grammar only supplies its [`LexicalRules`]: the punctuation
//! set and the reserved words.
//!
//! ## Example
//!
//! ```rust
//! use config::constants::LexicalRules;
//! use transpile_pipeline::lexer::{tokenize, TokenKind};
//!
//! let tokens = tokenize("(add 2 3)", &LexicalRules::call_expressions()).unwrap();
//! assert_eq!(tokens.len(), 5);
//! assert_eq!(tokens[1].kind, TokenKind::Name);
//! assert_eq!(tokens[1].text, "add");
//! ```

mod cursor;
mod token;

pub use cursor::Cursor;
pub use token::{Token, TokenKind};

use crate::error::LexError;
use crate::span::{Position, Span};
use config::constants::{LexicalRules, PAREN_CHARACTERS, STRING_DELIMITER};

// =============================================================================
// PUBLIC API
// =============================================================================

/// Tokenize `source` under the given grammar rules.
///
/// Fails on the first character no rule accepts; no partial token stream is
/// returned.
pub fn tokenize(source: &str, rules: &LexicalRules) -> Result<Vec<Token>, LexError> {
    Lexer::new(source, rules).tokenize()
}

// =============================================================================
// LEXER
// =============================================================================

/// Maximal-munch scanner over a single source string.
pub struct Lexer<'a> {
    /// Character cursor.
    cursor: Cursor<'a>,
    /// Grammar-specific punctuation and keywords.
    rules: &'a LexicalRules,
    /// Collected tokens.
    tokens: Vec<Token>,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for source text.
    pub fn new(source: &'a str, rules: &'a LexicalRules) -> Self {
        Self {
            cursor: Cursor::new(source),
            rules,
            tokens: Vec::new(),
        }
    }

    /// Tokenize the entire source.
    pub fn tokenize(mut self) -> Result<Vec<Token>, LexError> {
        while let Some(c) = self.cursor.peek() {
            if c.is_whitespace() {
                self.cursor.advance();
                continue;
            }
            self.scan_token(c)?;
        }
        tracing::debug!(tokens = self.tokens.len(), "tokenized source");
        Ok(self.tokens)
    }

    /// Scan a single token starting with `c`.
    ///
    /// One decision per position, driven by the character class of `c`.
    fn scan_token(&mut self, c: char) -> Result<(), LexError> {
        let start = self.cursor.position();

        if self.rules.is_punctuation(c) {
            self.cursor.advance();
            let kind = if PAREN_CHARACTERS.contains(&c) {
                TokenKind::Paren
            } else {
                TokenKind::Mark
            };
            self.push(kind, start);
            return Ok(());
        }

        match c {
            '0'..='9' => {
                self.cursor.advance_while(|c| c.is_ascii_digit());
                self.push(TokenKind::Number, start);
            }
            'a'..='z' => {
                // Keyword check only after the whole run is consumed.
                self.cursor.advance_while(|c| c.is_ascii_lowercase());
                let kind = if self.rules.is_keyword(self.cursor.slice_from(start)) {
                    TokenKind::Keyword
                } else {
                    TokenKind::Name
                };
                self.push(kind, start);
            }
            STRING_DELIMITER => self.scan_string(start)?,
            _ => {
                return Err(LexError::UnrecognizedCharacter {
                    character: c,
                    position: start,
                })
            }
        }
        Ok(())
    }

    /// Scan a string literal. Both quotes end up in the token text; there are
    /// no escape sequences.
    fn scan_string(&mut self, start: Position) -> Result<(), LexError> {
        self.cursor.advance(); // Opening quote
        self.cursor.advance_while(|c| c != STRING_DELIMITER);
        if self.cursor.advance().is_none() {
            return Err(LexError::UnterminatedString { position: start });
        }
        self.push(TokenKind::String, start);
        Ok(())
    }

    fn push(&mut self, kind: TokenKind, start: Position) {
        let end = self.cursor.position();
        let text = self.cursor.slice_from(start);
        self.tokens.push(Token::new(kind, Span::new(start, end), text));
    }
}

// =============================================================================
// TESTS
// =============================================================================
