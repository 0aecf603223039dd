use crate::cli::{Cli, OutputFormat};
use crate::table::render_table;
use serde_json::json;
use truthtab_expr::{Calculator, EvalError, ParseError};

#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Eval(#[from] EvalError),
    #[error("json encode failed: {0}")]
    JsonEncode(#[from] serde_json::Error),
}

pub fn execute_once(cli: &Cli, expression: &str) -> Result<String, RunnerError> {
    let calculator = Calculator::from_input(expression)?;
    let verbose = !cli.brief;
    match cli.format {
        OutputFormat::Text => Ok(render_table(&calculator, verbose)?),
        OutputFormat::Json => render_json(&calculator, verbose),
    }
}

fn render_json(calculator: &Calculator, verbose: bool) -> Result<String, RunnerError> {
    let (indices, labels) = calculator.describe(verbose);
    let rows = calculator
        .evaluate_all(verbose)?
        .into_iter()
        .map(|row| {
            json!({
                "assignment": row.assignment,
                "results": row.results,
            })
        })
        .collect::<Vec<_>>();
    let value = json!({
        "indices": indices,
        "labels": labels,
        "rows": rows,
    });
    Ok(serde_json::to_string_pretty(&value)?)
}

#[cfg(test)]
#[path = "run_test.rs"]
mod tests;
