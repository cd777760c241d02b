//! Global settings file source: `$CF_HOME/.cf/settings.toml`.

use crate::config::paths::settings_file_path;
use config::builder::DefaultState;
use config::ConfigBuilder;
use config::ConfigError;
use config::File;
use std::path::Path;
use tracing::debug;

/// Add the global settings file to the builder if it exists.
pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    match settings_file_path() {
        Some(path) => add_path_to_builder(builder, &path),
        None => Ok(builder),
    }
}

/// Add a settings file at `path` when present; absence is not an error.
pub fn add_path_to_builder(
    builder: ConfigBuilder<DefaultState>,
    path: &Path,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    if path.exists() {
        Ok(builder.add_source(File::from(path).required(false)))
    } else {
        debug!(settings_path = %path.display(), "No settings file found");
        Ok(builder)
    }
}
