//! Integration test modules

pub mod parse;
pub mod session_config;
pub mod settings;
pub mod shared_actor;
pub mod test_utils;
pub mod ui;
