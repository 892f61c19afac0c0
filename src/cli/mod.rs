mod commands;
mod exit_codes;

pub use commands::{Cli, Commands};
pub use exit_codes::{CONDITION_FALSE, INVALID_INPUT, SUCCESS};

use anyhow::Result;

/// run a parsed CLI invocation, returning the process exit code
pub fn run(cli: Cli) -> Result<i32> {
    commands::execute(cli)
}
