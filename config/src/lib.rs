//! # Config Crate
//!
//! Centralized configuration constants for the transpilation pipeline.
//! Lexical rule sets, rendering separators and stack limits are defined here
//! so that the lexer, both grammars and the code generator agree on them.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{LexicalRules, CHAIN_KEYWORDS, CHAIN_PUNCTUATION};
//!
//! let rules = LexicalRules::optional_chaining();
//! assert_eq!(rules.punctuation, CHAIN_PUNCTUATION);
//! assert!(rules.is_keyword("let"));
//! assert!(!rules.is_keyword("letx"));
//! assert_eq!(rules.keywords, CHAIN_KEYWORDS);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Validated Construction**: Custom rule sets go through `new` and are
//!   rejected when they would shadow a scanned character class

pub mod constants;

#[cfg(test)]
mod tests;
