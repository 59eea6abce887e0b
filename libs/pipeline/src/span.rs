//! # Source Span
//!
//! Source locations carried by tokens and reported by lexer and parser
//! errors.
//!
//! ## Usage
//!
//! ```rust
//! use transpile_pipeline::span::{Position, Span};
//!
//! let span = Span::from_bytes(0, 4);
//! assert_eq!(span.start.byte, 0);
//! assert_eq!(span.len(), 4);
//! assert_eq!(Position::new(3, 0, 3).to_string(), "1:4");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// POSITION
// =============================================================================

/// A point in the source text.
///
/// Line and column are 0-indexed internally and displayed 1-indexed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Position {
    /// Byte offset from the start of the source.
    pub byte: usize,
    /// Line number (0-indexed).
    pub line: usize,
    /// Column in characters (0-indexed).
    pub column: usize,
}

impl Position {
    /// Create a position.
    pub const fn new(byte: usize, line: usize, column: usize) -> Self {
        Self { byte, line, column }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line + 1, self.column + 1)
    }
}

// =============================================================================
// SPAN
// =============================================================================

/// A half-open range of source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Span {
    /// First position covered (inclusive).
    pub start: Position,
    /// Position after the last covered character (exclusive).
    pub end: Position,
}

impl Span {
    /// Create a span between two positions.
    pub const fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    /// Create a single-line span from byte offsets, with columns equal to
    /// the byte offsets. Convenient for ASCII sources in tests.
    pub const fn from_bytes(start: usize, end: usize) -> Self {
        Self {
            start: Position::new(start, 0, start),
            end: Position::new(end, 0, end),
        }
    }

    /// Empty span at the start of the source.
    pub const fn zero() -> Self {
        Self::from_bytes(0, 0)
    }

    /// Length in bytes.
    pub const fn len(&self) -> usize {
        self.end.byte - self.start.byte
    }

    /// Whether the span covers no text.
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.start.fmt(f)
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_from_bytes() {
        let span = Span::from_bytes(2, 5);
        assert_eq!(span.start.byte, 2);
        assert_eq!(span.end.column, 5);
        assert_eq!(span.len(), 3);
        assert!(!span.is_empty());
    }

    #[test]
    fn test_span_zero_is_empty() {
        assert!(Span::zero().is_empty());
    }

    #[test]
    fn test_position_display_is_one_indexed() {
        assert_eq!(Position::new(0, 0, 0).to_string(), "1:1");
        assert_eq!(Position::new(12, 2, 4).to_string(), "3:5");
    }
}
