//! Settings sources, in precedence order: global file, environment, explicit file.

pub mod environment;
pub mod explicit_file;
pub mod global_file;
