//! Centralized configuration values shared across the transpilation pipeline.
//!
//! Each public item in this module documents its purpose so that the lexer,
//! the grammars and the code generator can remain declarative and avoid
//! scattering literals.

use std::fmt;

// =============================================================================
// LEXICAL CONSTANTS
// =============================================================================

/// Punctuation recognized by the call-expressions grammar.
///
/// # Examples
/// ```
/// use config::constants::CALL_PUNCTUATION;
/// assert!(CALL_PUNCTUATION.contains(&'('));
/// ```
pub const CALL_PUNCTUATION: &[char] = &['(', ')'];

/// Reserved words of the call-expressions grammar. It has none, so every
/// lowercase run is a name.
pub const CALL_KEYWORDS: &[&str] = &[];

/// Punctuation recognized by the optional-chaining grammar.
///
/// # Examples
/// ```
/// use config::constants::CHAIN_PUNCTUATION;
/// assert_eq!(CHAIN_PUNCTUATION, &['=', '?', '.', ';']);
/// ```
pub const CHAIN_PUNCTUATION: &[char] = &['=', '?', '.', ';'];

/// Reserved words of the optional-chaining grammar, which double as the
/// declaration kinds it accepts.
pub const CHAIN_KEYWORDS: &[&str] = &["let", "const"];

/// Punctuation characters that lex as `paren` tokens. Any other punctuation
/// character lexes as a `mark`.
pub const PAREN_CHARACTERS: &[char] = &['(', ')'];

/// Opening and closing delimiter of string literals.
pub const STRING_DELIMITER: char = '"';

// =============================================================================
// RENDERING CONSTANTS
// =============================================================================

/// Terminator appended to every rendered statement.
pub const STATEMENT_TERMINATOR: char = ';';

/// Separator placed between the statements of a rendered program.
pub const STATEMENT_SEPARATOR: &str = "\n";

/// Separator placed between call arguments and between declarators.
pub const LIST_SEPARATOR: &str = ", ";

/// Operator of the short-circuit guard produced by optional-chain desugaring.
///
/// # Examples
/// ```
/// use config::constants::GUARD_OPERATOR;
/// assert_eq!(format!("x {GUARD_OPERATOR} x.y"), "x && x.y");
/// ```
pub const GUARD_OPERATOR: &str = "&&";

// =============================================================================
// LIMIT CONSTANTS
// =============================================================================

/// Bytes of stack space allocated when a recursive stage has to grow the
/// stack using the `stacker` crate.
///
/// # Examples
/// ```
/// use config::constants::STACKER_STACK_SIZE_BYTES;
/// assert!(STACKER_STACK_SIZE_BYTES >= 1024);
/// ```
pub const STACKER_STACK_SIZE_BYTES: usize = 8 * 1024 * 1024;

/// Remaining stack below which `stacker` allocates a new segment.
pub const STACKER_RED_ZONE_BYTES: usize = STACKER_STACK_SIZE_BYTES / 8;

// =============================================================================
// LEXICAL RULES
// =============================================================================

/// The grammar-specific half of the lexer: which single characters are
/// punctuation and which lowercase runs are keywords.
///
/// # Examples
/// ```
/// use config::constants::LexicalRules;
/// let rules = LexicalRules::new(&['+'], &["fn"]).expect("valid rules");
/// assert!(rules.is_punctuation('+'));
/// assert!(rules.is_keyword("fn"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LexicalRules {
    /// Characters emitted as one token each.
    pub punctuation: &'static [char],
    /// Runs reclassified from `name` to `keyword` on an exact match.
    pub keywords: &'static [&'static str],
}

impl LexicalRules {
    /// Builds a rule set, rejecting punctuation that would shadow a scanned
    /// character class and keywords that could never be produced by the
    /// lowercase-run scanner.
    pub fn new(
        punctuation: &'static [char],
        keywords: &'static [&'static str],
    ) -> Result<Self, ConfigError> {
        for (index, &c) in punctuation.iter().enumerate() {
            if c.is_whitespace()
                || c.is_ascii_digit()
                || c.is_ascii_lowercase()
                || c == STRING_DELIMITER
            {
                return Err(ConfigError::ShadowedPunctuation(c));
            }
            if punctuation[..index].contains(&c) {
                return Err(ConfigError::DuplicatePunctuation(c));
            }
        }
        for (index, &keyword) in keywords.iter().enumerate() {
            if keyword.is_empty() || !keyword.chars().all(|c| c.is_ascii_lowercase()) {
                return Err(ConfigError::InvalidKeyword(keyword.to_string()));
            }
            if keywords[..index].contains(&keyword) {
                return Err(ConfigError::DuplicateKeyword(keyword.to_string()));
            }
        }
        Ok(Self {
            punctuation,
            keywords,
        })
    }

    /// Rules of the call-expressions grammar.
    pub const fn call_expressions() -> Self {
        Self {
            punctuation: CALL_PUNCTUATION,
            keywords: CALL_KEYWORDS,
        }
    }

    /// Rules of the optional-chaining grammar.
    pub const fn optional_chaining() -> Self {
        Self {
            punctuation: CHAIN_PUNCTUATION,
            keywords: CHAIN_KEYWORDS,
        }
    }

    /// Whether `c` is emitted as a single punctuation token.
    pub fn is_punctuation(&self, c: char) -> bool {
        self.punctuation.contains(&c)
    }

    /// Whether the complete run `text` is a reserved word. Prefixes never
    /// match: `letx` is not the keyword `let`.
    pub fn is_keyword(&self, text: &str) -> bool {
        self.keywords.contains(&text)
    }
}

// =============================================================================
// RENDER STYLE
// =============================================================================

/// Separators used by the code generator.
///
/// # Examples
/// ```
/// use config::constants::RenderStyle;
/// let style = RenderStyle::default();
/// assert_eq!(style.statement_separator, "\n");
/// assert_eq!(style.list_separator, ", ");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderStyle {
    /// Placed between rendered statements.
    pub statement_separator: &'static str,
    /// Placed between call arguments and between declarators.
    pub list_separator: &'static str,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            statement_separator: STATEMENT_SEPARATOR,
            list_separator: LIST_SEPARATOR,
        }
    }
}

// =============================================================================
// STACK CONFIG
// =============================================================================

/// Stack growth parameters for the recursive stages.
///
/// # Examples
/// ```
/// use config::constants::StackConfig;
/// let stack = StackConfig::default();
/// assert!(stack.red_zone_bytes < stack.stack_size_bytes);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StackConfig {
    /// Remaining stack below which a new segment is allocated.
    pub red_zone_bytes: usize,
    /// Size of each newly allocated segment.
    pub stack_size_bytes: usize,
}

impl StackConfig {
    /// Builds a stack configuration, requiring a non-zero red zone smaller
    /// than the segment size.
    ///
    /// # Examples
    /// ```
    /// use config::constants::StackConfig;
    /// let stack = StackConfig::new(64 * 1024, 1024 * 1024).expect("valid stack");
    /// assert_eq!(stack.red_zone_bytes, 64 * 1024);
    /// assert!(StackConfig::new(0, 1024).is_err());
    /// ```
    pub fn new(red_zone_bytes: usize, stack_size_bytes: usize) -> Result<Self, ConfigError> {
        if red_zone_bytes == 0 || red_zone_bytes >= stack_size_bytes {
            return Err(ConfigError::InvalidStack {
                red_zone_bytes,
                stack_size_bytes,
            });
        }
        Ok(Self {
            red_zone_bytes,
            stack_size_bytes,
        })
    }
}

impl Default for StackConfig {
    fn default() -> Self {
        Self {
            red_zone_bytes: STACKER_RED_ZONE_BYTES,
            stack_size_bytes: STACKER_STACK_SIZE_BYTES,
        }
    }
}

// =============================================================================
// CONFIG ERROR
// =============================================================================

/// Error returned when invalid configuration values are provided.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Punctuation character that belongs to a scanned character class.
    ShadowedPunctuation(char),
    /// Punctuation character listed twice.
    DuplicatePunctuation(char),
    /// Keyword that is empty or not a pure lowercase run.
    InvalidKeyword(String),
    /// Keyword listed twice.
    DuplicateKeyword(String),
    /// Red zone that is zero or not smaller than the segment size.
    InvalidStack {
        red_zone_bytes: usize,
        stack_size_bytes: usize,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ShadowedPunctuation(c) => {
                write!(f, "punctuation {c:?} shadows a scanned character class")
            }
            ConfigError::DuplicatePunctuation(c) => {
                write!(f, "punctuation {c:?} is listed more than once")
            }
            ConfigError::InvalidKeyword(keyword) => {
                write!(f, "keyword {keyword:?} must be a non-empty lowercase run")
            }
            ConfigError::DuplicateKeyword(keyword) => {
                write!(f, "keyword {keyword:?} is listed more than once")
            }
            ConfigError::InvalidStack {
                red_zone_bytes,
                stack_size_bytes,
            } => write!(
                f,
                "red zone must be in 1..{stack_size_bytes} bytes: {red_zone_bytes}"
            ),
        }
    }
}

impl std::error::Error for ConfigError {}
