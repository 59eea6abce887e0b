//! # Parser
//!
//! Recursive descent over the grammar
//!
//! ```text
//! program     := (";" | statement)*
//! statement   := NUMBER | STRING | declaration
//! declaration := KEYWORD declarator+ ";"
//! declarator  := NAME "=" initializer
//! initializer := NUMBER | STRING | member
//! member      := NAME "?"? "." NAME
//! ```
//!
//! A single [`Parser::walk`] consumes the current token and dispatches on it
//! and a parse [`Mode`]; the production it picks continues after that token.
//! Declarators are separated by whitespace only.

use crate::ast::Node;
use config::constants::{STACKER_RED_ZONE_BYTES, STACKER_STACK_SIZE_BYTES};
use transpile_pipeline::{ParseError, Token, TokenKind, TokenStream};

/// Parse a token sequence into a `Program`.
pub fn parse(tokens: &[Token]) -> Result<Node, ParseError> {
    Parser::new(tokens).parse_program()
}

/// Which production the next token must start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    /// Top level of the program.
    Statement,
    /// Inside a declaration, before `=`.
    Declarator,
    /// After `=`.
    Initializer,
}

impl Mode {
    /// What this mode is waiting for, for end-of-input errors.
    const fn expected(self) -> &'static str {
        match self {
            Mode::Statement => "statement",
            Mode::Declarator => "declarator name",
            Mode::Initializer => "initializer",
        }
    }
}

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
            // Empty statements.
            if self.stream.match_token(TokenKind::Mark, ";") {
                continue;
            }
            body.push(self.walk(Mode::Statement)?);
        }
        Ok(Node::Program { body })
    }

    /// Parse one node starting at the current token, as allowed by `mode`.
    fn walk(&mut self, mode: Mode) -> Result<Node, ParseError> {
        stacker::maybe_grow(STACKER_RED_ZONE_BYTES, STACKER_STACK_SIZE_BYTES, || {
            self.walk_token(mode)
        })
    }

    fn walk_token(&mut self, mode: Mode) -> Result<Node, ParseError> {
        let token = self.stream.advance(mode.expected())?;
        match (mode, token.kind) {
            (Mode::Statement | Mode::Initializer, TokenKind::Number) => Ok(Node::NumberLiteral {
                value: token.text.clone(),
            }),
            (Mode::Statement | Mode::Initializer, TokenKind::String) => Ok(Node::StringLiteral {
                value: token.unquoted().to_string(),
            }),
            (Mode::Statement, TokenKind::Keyword) => self.declaration(token),
            (Mode::Declarator, TokenKind::Name) => self.declarator(token),
            (Mode::Initializer, TokenKind::Name) => Ok(Node::ChainExpression {
                expression: Box::new(self.member(token)?),
            }),
            _ => Err(ParseError::unexpected(token)),
        }
    }

    /// Rest of a declaration after its keyword.
    fn declaration(&mut self, kind: &Token) -> Result<Node, ParseError> {
        let mut declarations = vec![self.walk(Mode::Declarator)?];
        while !self.stream.match_token(TokenKind::Mark, ";") {
            if self.stream.is_at_end() {
                return Err(ParseError::UnexpectedEnd { expected: "`;`" });
            }
            declarations.push(self.walk(Mode::Declarator)?);
        }
        Ok(Node::VariableDeclaration {
            kind: kind.text.clone(),
            declarations,
        })
    }

    /// Rest of a declarator after its name.
    fn declarator(&mut self, name: &Token) -> Result<Node, ParseError> {
        self.stream.expect(TokenKind::Mark, "=", "`=`")?;
        let init = self.walk(Mode::Initializer)?;
        Ok(Node::VariableDeclarator {
            name: name.text.clone(),
            init: Box::new(init),
        })
    }

    /// Rest of a member access after its object name.
    fn member(&mut self, object: &Token) -> Result<Node, ParseError> {
        let optional = self.stream.match_token(TokenKind::Mark, "?");
        self.stream.expect(TokenKind::Mark, ".", "`.`")?;
        let property = self.stream.expect_kind(TokenKind::Name, "property name")?;
        Ok(Node::MemberExpression {
            object: object.text.clone(),
            optional,
            property: property.text.clone(),
        })
    }
}

// =============================================================================
// TESTS
// =============================================================================
