//! CLI settings (`settings.toml`): everything that is not session state.

use super::merge::merge_policy::builder_with_defaults;
use super::sources::{environment, explicit_file, global_file};
use crate::error::CommandError;
use crate::logging::LoggingConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CliSettings {
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl CliSettings {
    /// Load defaults, then the global settings file, then `CFCLI__*` env vars,
    /// then an explicit `--config` file.
    pub fn load(explicit: Option<&Path>) -> Result<Self, CommandError> {
        let builder = builder_with_defaults()?;
        let builder = global_file::add_to_builder(builder)?;
        let builder = environment::add_to_builder(builder)?;
        let builder = match explicit {
            Some(path) => explicit_file::add_to_builder(builder, path)?,
            None => builder,
        };
        Ok(builder.build()?.try_deserialize()?)
    }

    /// Load from a specific global file path, skipping environment lookups.
    pub fn load_from_file(path: &Path) -> Result<Self, CommandError> {
        let builder = builder_with_defaults()?;
        let builder = global_file::add_path_to_builder(builder, path)?;
        Ok(builder.build()?.try_deserialize()?)
    }

    /// Write settings as TOML, creating parent directories.
    pub fn save(&self, path: &Path) -> Result<(), CommandError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)
            .map_err(|e| CommandError::Config(format!("Failed to serialize settings: {}", e)))?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
