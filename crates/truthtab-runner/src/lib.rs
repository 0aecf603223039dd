mod cli;
mod repl;
mod run;
mod table;

pub use cli::{Cli, OutputFormat};
pub use repl::{run_repl, EXIT_KEYWORD};
pub use run::{execute_once, RunnerError};
pub use table::render_table;
