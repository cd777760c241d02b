//! CLI domain: parse, route, help and output only.
//! No domain logic; a single route table dispatches to the commands.

mod help;
mod output;
mod parse;
mod route;

pub use help::command_name;
pub use output::{exit_code, map_error, FAILURE_EXIT_CODE};
pub use parse::{Cli, Commands};
pub use route::{build_logging_config, build_logging_config_with_env, RunContext};
