use super::{Cli, OutputFormat};
use clap::{CommandFactory, Parser};

#[test]
fn cli_help_lists_core_flags() {
    let mut command = Cli::command();
    let help = command.render_long_help().to_string();
    assert!(help.contains("--brief"));
    assert!(help.contains("--format"));
}

#[test]
fn cli_parses_expression_argument() {
    let cli = Cli::try_parse_from(["truthtab-runner", "a & b"]).expect("must parse");
    assert_eq!(cli.expression.as_deref(), Some("a & b"));
    assert!(!cli.brief);
    assert_eq!(cli.format, OutputFormat::Text);
}

#[test]
fn cli_defaults_to_interactive_mode() {
    let cli = Cli::try_parse_from(["truthtab-runner"]).expect("must parse");
    assert!(cli.expression.is_none());
}

#[test]
fn cli_parses_brief_and_json_format() {
    let cli = Cli::try_parse_from(["truthtab-runner", "--brief", "--format", "json", "!a"])
        .expect("must parse");
    assert!(cli.brief);
    assert_eq!(cli.format, OutputFormat::Json);
    assert_eq!(cli.expression.as_deref(), Some("!a"));
}
