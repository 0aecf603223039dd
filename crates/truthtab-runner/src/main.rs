use clap::Parser;
use std::io;
use truthtab_runner::{execute_once, run_repl, Cli};

fn main() {
    let cli = Cli::parse();
    match cli.expression.clone() {
        Some(expression) => match execute_once(&cli, expression.as_str()) {
            Ok(output) => {
                println!("{output}");
            }
            Err(error) => {
                eprintln!("{error}");
                std::process::exit(1);
            }
        },
        None => {
            let stdin = io::stdin();
            let stdout = io::stdout();
            if let Err(error) = run_repl(&cli, stdin.lock(), stdout.lock()) {
                eprintln!("{error}");
                std::process::exit(1);
            }
        }
    }
}

#[cfg(test)]
#[path = "main_test.rs"]
mod tests;
