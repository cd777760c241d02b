//! Merge rules: defaults first, later sources override earlier ones key by key.

use crate::config::paths::default_log_file;
use config::Config;
use config::ConfigBuilder;
use config::ConfigError;

/// Create a Config builder with merge policy defaults applied.
pub fn builder_with_defaults() -> Result<ConfigBuilder<config::builder::DefaultState>, ConfigError>
{
    Config::builder()
        .set_default("logging.level", "info")?
        .set_default("logging.format", "text")?
        .set_default("logging.output", "stderr")?
        .set_default("logging.file", default_log_file().display().to_string())?
        .set_default("logging.color", true)
}
