use super::{execute_once, RunnerError};
use crate::cli::{Cli, OutputFormat};
use serde_json::json;

fn cli(brief: bool, format: OutputFormat) -> Cli {
    Cli {
        expression: None,
        brief,
        format,
    }
}

#[test]
fn renders_text_table() {
    let output = execute_once(&cli(false, OutputFormat::Text), "!a").expect("run");
    assert!(output.starts_with("+---+ +-----+"));
    assert!(output.contains("| a | | ! a |"));
}

#[test]
fn renders_json_rows() {
    let output = execute_once(&cli(false, OutputFormat::Json), "a & b").expect("run");
    let value: serde_json::Value = serde_json::from_str(&output).expect("json");
    assert_eq!(value["indices"], json!([1, 2, 3]));
    assert_eq!(value["labels"], json!(["a", "b", "a & b"]));
    assert_eq!(value["rows"].as_array().expect("rows").len(), 4);
    assert_eq!(value["rows"][3]["assignment"], json!([true, true]));
    assert_eq!(value["rows"][3]["results"], json!([true]));
}

#[test]
fn brief_json_has_single_result_column() {
    let output = execute_once(&cli(true, OutputFormat::Json), "a & (b | !a)").expect("run");
    let value: serde_json::Value = serde_json::from_str(&output).expect("json");
    assert_eq!(value["labels"], json!(["a", "b", "[result]"]));
    assert_eq!(value["rows"][0]["results"], json!([false]));
}

#[test]
fn surfaces_parse_errors() {
    let error = execute_once(&cli(false, OutputFormat::Text), "a &").expect_err("must fail");
    assert!(matches!(error, RunnerError::Parse(_)));
    assert_eq!(
        error.to_string(),
        "unexpected token at 3: expected factor, got EOF"
    );
}

#[test]
fn surfaces_lex_errors() {
    let error = execute_once(&cli(false, OutputFormat::Text), "a # b").expect_err("must fail");
    assert_eq!(
        error.to_string(),
        "lex error: unexpected character '#' at 2"
    );
}
