//! # Tests for Config Constants
//!
//! Unit tests verifying the constants agree with each other.

use crate::constants::*;

// =============================================================================
// LEXICAL TESTS
// =============================================================================

#[test]
fn test_paren_characters_are_call_punctuation() {
    for c in PAREN_CHARACTERS {
        assert!(CALL_PUNCTUATION.contains(c), "{c:?} should be call punctuation");
    }
}

#[test]
fn test_grammars_share_no_punctuation() {
    assert!(
        CALL_PUNCTUATION.iter().all(|c| !CHAIN_PUNCTUATION.contains(c)),
        "grammars should not overlap"
    );
}

#[test]
fn test_terminator_is_chain_punctuation() {
    assert!(CHAIN_PUNCTUATION.contains(&STATEMENT_TERMINATOR));
}

#[test]
fn test_call_grammar_has_no_keywords() {
    assert!(CALL_KEYWORDS.is_empty());
}

// =============================================================================
// RENDERING TESTS
// =============================================================================

#[test]
fn test_separators_match_render_style() {
    let style = RenderStyle::default();
    assert_eq!(style.statement_separator, STATEMENT_SEPARATOR);
    assert_eq!(style.list_separator, LIST_SEPARATOR);
}

// =============================================================================
// LIMIT TESTS
// =============================================================================

#[test]
fn test_red_zone_smaller_than_stack() {
    assert!(STACKER_RED_ZONE_BYTES > 0);
    assert!(STACKER_RED_ZONE_BYTES < STACKER_STACK_SIZE_BYTES);
}
