//! # Parser
//!
//! Recursive descent over the grammar
//!
//! ```text
//! program := form*
//! form    := NUMBER | STRING | "(" NAME form* ")"
//! ```
//!
//! One function per nonterminal, all advancing the same [`TokenStream`].

use crate::ast::Node;
use config::constants::{STACKER_RED_ZONE_BYTES, STACKER_STACK_SIZE_BYTES};
use transpile_pipeline::{ParseError, Token, TokenKind, TokenStream};

/// Parse a token sequence into a `Program`.
///
/// A stray `)` or name at the top level fails with `UnexpectedToken`; a
/// missing `)` fails with `UnexpectedEnd`.
pub fn parse(tokens: &[Token]) -> Result<Node, ParseError> {
    Parser::new(tokens).parse_program()
}

/// Parser state: the shared token cursor.
struct Parser<'a> {
    stream: TokenStream<'a>,
}

impl<'a> Parser<'a> {
    fn new(tokens: &'a [Token]) -> Self {
        Self {
            stream: TokenStream::new(tokens),
        }
    }

    fn parse_program(&mut self) -> Result<Node, ParseError> {
        let mut body = Vec::new();
        while !self.stream.is_at_end() {
            body.push(self.parse_form()?);
        }
        Ok(Node::Program { body })
    }

    fn parse_form(&mut self) -> Result<Node, ParseError> {
        stacker::maybe_grow(STACKER_RED_ZONE_BYTES, STACKER_STACK_SIZE_BYTES, || {
            self.parse_form_token()
        })
    }

    fn parse_form_token(&mut self) -> Result<Node, ParseError> {
        let token = self.stream.advance("number, string or `(`")?;
        match token.kind {
            TokenKind::Number => Ok(Node::NumberLiteral {
                value: token.text.clone(),
            }),
            TokenKind::String => Ok(Node::StringLiteral {
                value: token.unquoted().to_string(),
            }),
            TokenKind::Paren if token.text == "(" => self.parse_call_body(),
            _ => Err(ParseError::unexpected(token)),
        }
    }

    /// Rest of a call after its opening `(`.
    fn parse_call_body(&mut self) -> Result<Node, ParseError> {
        let name = self.stream.expect_kind(TokenKind::Name, "function name")?;

        let mut params = Vec::new();
        while !self.stream.match_token(TokenKind::Paren, ")") {
            if self.stream.is_at_end() {
                return Err(ParseError::UnexpectedEnd { expected: "`)`" });
            }
            params.push(self.parse_form()?);
        }

        Ok(Node::CallExpression {
            name: name.text.clone(),
            params,
        })
    }
}

// =============================================================================
// TESTS
// =============================================================================
