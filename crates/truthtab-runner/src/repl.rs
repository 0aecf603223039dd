use crate::cli::Cli;
use crate::run::execute_once;
use std::io::{self, BufRead, Write};

// Intercepted by the loop before the expression core ever sees it.
pub const EXIT_KEYWORD: &str = "exit";

pub fn run_repl(cli: &Cli, input: impl BufRead, mut output: impl Write) -> io::Result<()> {
    writeln!(output, "for exits write: {EXIT_KEYWORD}")?;

    let mut lines = input.lines();
    loop {
        writeln!(output)?;
        write!(output, ">>> ")?;
        output.flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        let text = line.trim();
        if text.is_empty() {
            continue;
        }
        if text == EXIT_KEYWORD {
            writeln!(output)?;
            break;
        }

        match execute_once(cli, text) {
            Ok(rendered) => writeln!(output, "{rendered}")?,
            Err(error) => writeln!(output, "{error}")?,
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "repl_test.rs"]
mod tests;
