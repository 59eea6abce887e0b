//! # Transpile CLI
//!
//! Library half of the `transpile` binary: argument types, source loading
//! and the run loop, kept out of `main` so they can be tested without a
//! process.
//!
//! ## Example
//!
//! ```rust
//! use clap::Parser;
//! use transpile_cli::{run, Cli};
//!
//! let cli = Cli::try_parse_from(["transpile", "--grammar", "chains", "let o = x?.y;"]).unwrap();
//! let mut out = Vec::new();
//! run(&cli, "let o = x?.y;", &mut out).unwrap();
//! assert_eq!(String::from_utf8(out).unwrap(), "let o = x && x.y;\n");
//! ```

pub mod args;

pub use args::{Cli, GrammarKind};

use call_expressions::CallExpressions;
use optional_chaining::OptionalChaining;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use thiserror::Error;
use transpile_pipeline::{Grammar, PipelineError};

// =============================================================================
// ERRORS
// =============================================================================

/// Failures of one CLI invocation.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("failed to read {}: {source}", .path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read stdin: {0}")]
    ReadStdin(#[source] io::Error),

    #[error(transparent)]
    Pipeline(#[from] PipelineError),

    #[error("failed to serialize stages: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to write output: {0}")]
    Write(#[from] io::Error),

    #[error("output mismatch\nexpected: {expected}\n  actual: {actual}")]
    Mismatch { expected: String, actual: String },
}

// =============================================================================
// RUN
// =============================================================================

/// Load the source named by `cli`: the positional argument, the `--file`
/// path, or else everything on `stdin`.
pub fn read_source(cli: &Cli, mut stdin: impl Read) -> Result<String, CliError> {
    if let Some(source) = &cli.source {
        return Ok(source.clone());
    }
    if let Some(path) = &cli.file {
        return std::fs::read_to_string(path).map_err(|source| CliError::ReadFile {
            path: path.clone(),
            source,
        });
    }
    let mut source = String::new();
    stdin
        .read_to_string(&mut source)
        .map_err(CliError::ReadStdin)?;
    Ok(source)
}

/// Translate `source` as `cli` asks and write the result to `out`.
pub fn run(cli: &Cli, source: &str, out: &mut impl Write) -> Result<(), CliError> {
    let output = match cli.grammar {
        GrammarKind::Calls => translate::<CallExpressions>(source, cli.stages, &mut *out)?,
        GrammarKind::Chains => translate::<OptionalChaining>(source, cli.stages, &mut *out)?,
    };
    writeln!(out, "{output}")?;

    if let Some(expected) = &cli.expect {
        if *expected != output {
            return Err(CliError::Mismatch {
                expected: expected.clone(),
                actual: output,
            });
        }
        tracing::info!("output matches expectation");
    }
    Ok(())
}

fn translate<G: Grammar>(
    source: &str,
    show_stages: bool,
    out: &mut impl Write,
) -> Result<String, CliError> {
    tracing::debug!(grammar = G::NAME, bytes = source.len(), "translating");
    if !show_stages {
        return Ok(transpile_pipeline::compile::<G>(source)?);
    }
    let stages = transpile_pipeline::stages::<G>(source)?;
    writeln!(out, "{}", serde_json::to_string_pretty(&stages)?)?;
    Ok(stages.output)
}
