use clap::Parser;
use std::io::Write;
use transpile_cli::{read_source, run, Cli, CliError, GrammarKind};
use transpile_pipeline::PipelineError;

fn cli(args: &[&str]) -> Cli {
    let mut argv = vec!["transpile"];
    argv.extend_from_slice(args);
    Cli::try_parse_from(argv).unwrap()
}

fn run_to_string(cli: &Cli, source: &str) -> (Result<(), CliError>, String) {
    let mut out = Vec::new();
    let result = run(cli, source, &mut out);
    (result, String::from_utf8(out).unwrap())
}

#[test]
fn parses_grammar_and_source() {
    let cli = cli(&["--grammar", "calls", "(add 1 2)"]);
    assert_eq!(cli.grammar, GrammarKind::Calls);
    assert_eq!(cli.source.as_deref(), Some("(add 1 2)"));
    assert!(!cli.stages);
    assert!(cli.expect.is_none());
}

#[test]
fn grammar_is_required() {
    assert!(Cli::try_parse_from(["transpile", "(add 1 2)"]).is_err());
    assert!(Cli::try_parse_from(["transpile", "-g", "lisp", "(add 1 2)"]).is_err());
}

#[test]
fn file_conflicts_with_source() {
    let result = Cli::try_parse_from(["transpile", "-g", "calls", "--file", "a.txt", "(f)"]);
    assert!(result.is_err());
}

#[test]
fn runs_call_grammar() {
    let (result, out) = run_to_string(&cli(&["-g", "calls"]), "(add 2 (subtract 4 2))");
    result.unwrap();
    assert_eq!(out, "add(2, subtract(4, 2));\n");
}

#[test]
fn runs_chain_grammar() {
    let (result, out) = run_to_string(&cli(&["-g", "chains"]), "let o = x?.y;");
    result.unwrap();
    assert_eq!(out, "let o = x && x.y;\n");
}

#[test]
fn expect_accepts_matching_output() {
    let cli = cli(&["-g", "chains", "--expect", "let o = x && x.y;"]);
    let (result, _) = run_to_string(&cli, "let o = x?.y;");
    assert!(result.is_ok());
}

#[test]
fn expect_rejects_mismatch() {
    let cli = cli(&["-g", "calls", "--expect", "add(1, 2)"]);
    let (result, out) = run_to_string(&cli, "(add 1 2)");
    match result {
        Err(CliError::Mismatch { expected, actual }) => {
            assert_eq!(expected, "add(1, 2)");
            assert_eq!(actual, "add(1, 2);");
        }
        other => panic!("expected mismatch, got {other:?}"),
    }
    // The output is still printed.
    assert_eq!(out, "add(1, 2);\n");
}

#[test]
fn stages_prints_json_then_output() {
    let (result, out) = run_to_string(&cli(&["-g", "calls", "--stages"]), "(f 1)");
    result.unwrap();
    let (json, output) = out.rsplit_once("}\n").unwrap();
    let stages: serde_json::Value = serde_json::from_str(&format!("{json}}}")).unwrap();
    assert_eq!(stages["tokens"].as_array().unwrap().len(), 4);
    assert_eq!(stages["source_ast"]["type"], "Program");
    assert_eq!(stages["output"], "f(1);");
    assert_eq!(output, "f(1);\n");
}

#[test]
fn pipeline_errors_are_reported() {
    let (result, out) = run_to_string(&cli(&["-g", "calls"]), "(add 1");
    assert!(matches!(result, Err(CliError::Pipeline(PipelineError::Parse(_)))));
    assert!(out.is_empty());
}

#[test]
fn reads_positional_source_first() {
    let cli = cli(&["-g", "calls", "(f)"]);
    assert_eq!(read_source(&cli, "ignored".as_bytes()).unwrap(), "(f)");
}

#[test]
fn reads_stdin_without_source() {
    let cli = cli(&["-g", "chains"]);
    assert_eq!(
        read_source(&cli, "let a = 1;".as_bytes()).unwrap(),
        "let a = 1;"
    );
}

#[test]
fn reads_file() {
    let path = std::env::temp_dir().join(format!("transpile-cli-{}.txt", std::process::id()));
    std::fs::File::create(&path)
        .unwrap()
        .write_all(b"(add 1 2)")
        .unwrap();
    let cli = cli(&["-g", "calls", "--file", path.to_str().unwrap()]);
    let source = read_source(&cli, std::io::empty()).unwrap();
    std::fs::remove_file(&path).unwrap();
    assert_eq!(source, "(add 1 2)");
}

#[test]
fn missing_file_is_reported() {
    let cli = cli(&["-g", "calls", "--file", "/nonexistent/transpile-input"]);
    let err = read_source(&cli, std::io::empty()).unwrap_err();
    assert!(matches!(err, CliError::ReadFile { .. }));
    assert!(err.to_string().starts_with("failed to read /nonexistent/transpile-input"));
}
