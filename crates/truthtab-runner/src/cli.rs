use clap::{Parser, ValueEnum};

#[derive(Debug, Clone, Parser)]
#[command(name = "truthtab-runner")]
#[command(about = "Truth-table calculator for boolean expressions over !, &, ^, |")]
pub struct Cli {
    /// Expression to evaluate; starts the interactive prompt when omitted.
    pub expression: Option<String>,
    /// Print only the final result column instead of every sub-expression.
    #[arg(long, default_value_t = false)]
    pub brief: bool,
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, ValueEnum, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

#[cfg(test)]
#[path = "cli_test.rs"]
mod tests;
