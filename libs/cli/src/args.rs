//! Command-line arguments.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Translate source text with one of the bundled grammars.
#[derive(Debug, Parser)]
#[command(name = "transpile", version)]
pub struct Cli {
    /// Grammar of the input
    #[arg(short, long, value_enum)]
    pub grammar: GrammarKind,

    /// Print every intermediate stage as JSON before the output
    #[arg(long)]
    pub stages: bool,

    /// Fail unless the output equals this text
    #[arg(long, value_name = "TEXT")]
    pub expect: Option<String>,

    /// Read the source from a file
    #[arg(short, long, value_name = "PATH", conflicts_with = "source")]
    pub file: Option<PathBuf>,

    /// Log pipeline stages to stderr (overridden by RUST_LOG)
    #[arg(short, long)]
    pub verbose: bool,

    /// Source text; stdin is read when neither this nor --file is given
    pub source: Option<String>,
}

/// Grammars selectable with `--grammar`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum GrammarKind {
    /// S-expressions to call expressions
    Calls,
    /// Optional member access to logical-AND guards
    Chains,
}
