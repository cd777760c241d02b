//! CLI output: error mapping from command errors to the stable CLI surface.

use crate::error::CommandError;

/// Exit status for any failed command.
pub const FAILURE_EXIT_CODE: i32 = 1;

/// Map command errors to the text printed on stderr.
pub fn map_error(e: &CommandError) -> String {
    e.to_string()
}

/// Process exit status for a command outcome.
pub fn exit_code(result: &Result<(), CommandError>) -> i32 {
    match result {
        Ok(()) => 0,
        Err(_) => FAILURE_EXIT_CODE,
    }
}
