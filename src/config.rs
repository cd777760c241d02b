//! Configuration System
//!
//! Two kinds of configuration live here:
//!
//! - the session: target endpoint, tokens and targeted org/space, persisted as
//!   JSON in `$CF_HOME/.cf/config.json` and exposed to commands through the
//!   [`Config`] trait;
//! - CLI settings (logging), loaded from `settings.toml` with the `config`
//!   crate and layered defaults.
//!
//! Environment variable overrides (`CF_STAGING_TIMEOUT`, `CF_USERNAME`, ...)
//! are captured once in [`EnvOverride`].

use crate::error::CommandError;
use serde::{Deserialize, Serialize};
use std::time::Duration;

mod env;
mod merge;
mod paths;
mod session;
mod settings;
mod sources;
mod token;

pub use env::EnvOverride;
pub use paths::{cf_home_dir, config_dir, default_log_file, session_file_path, settings_file_path};
pub use session::{SessionConfig, SessionFile, DEFAULT_UAA_OAUTH_CLIENT};
pub use settings::CliSettings;
pub use token::decode_user_from_token;

/// Name the CLI is invoked as, used in tips and error messages.
pub const DEFAULT_BINARY_NAME: &str = "cf";

/// Grant type stored once a client-credentials login succeeds.
pub const CLIENT_CREDENTIALS_GRANT_TYPE: &str = "client_credentials";

/// Targeted organization as stored in the session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetedOrganization {
    #[serde(rename = "GUID", default)]
    pub guid: String,
    #[serde(rename = "Name", default)]
    pub name: String,
}

/// Targeted space as stored in the session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetedSpace {
    #[serde(rename = "GUID", default)]
    pub guid: String,
    #[serde(rename = "Name", default)]
    pub name: String,
    #[serde(rename = "AllowSSH", default)]
    pub allow_ssh: bool,
}

/// The user behind the current access token.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct User {
    pub name: String,
    pub origin: String,
    pub is_client: bool,
}

/// Endpoint details recorded by `set_target_information`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TargetInformation {
    pub api: String,
    pub api_version: String,
    pub auth: String,
    pub min_cli_version: String,
    pub doppler: String,
    pub routing: String,
    pub skip_ssl_validation: bool,
}

/// Session and environment state consumed by commands.
///
/// Setters take `&self`; implementations use interior mutability so a single
/// `Arc<dyn Config>` can be shared by every collaborator of a command.
pub trait Config: Send + Sync {
    fn binary_name(&self) -> String;

    fn target(&self) -> String;
    fn api_version(&self) -> String;
    fn skip_ssl_validation(&self) -> bool;

    fn access_token(&self) -> String;
    fn refresh_token(&self) -> String;
    fn uaa_grant_type(&self) -> String;
    fn uaa_oauth_client(&self) -> String;
    fn uaa_oauth_client_secret(&self) -> String;

    /// Decodes the user from the stored access token.
    fn current_user(&self) -> Result<User, CommandError>;

    fn has_targeted_organization(&self) -> bool;
    fn has_targeted_space(&self) -> bool;
    fn targeted_organization(&self) -> TargetedOrganization;
    fn targeted_space(&self) -> TargetedSpace;

    fn staging_timeout(&self) -> Duration;
    fn startup_timeout(&self) -> Duration;
    fn docker_password(&self) -> String;
    fn cf_username(&self) -> String;
    fn cf_password(&self) -> String;
    fn experimental(&self) -> bool;

    fn set_target_information(&self, info: TargetInformation);
    fn set_token_information(&self, access_token: &str, refresh_token: &str, ssh_oauth_client: &str);
    fn set_uaa_grant_type(&self, grant_type: &str);
    fn set_uaa_client_credentials(&self, client: &str, client_secret: &str);
    fn set_organization_information(&self, guid: &str, name: &str);
    fn set_space_information(&self, guid: &str, name: &str, allow_ssh: bool);
    fn unset_organization_and_space_information(&self);
    fn unset_space_information(&self);
    fn unset_user_information(&self);

    /// Persist the session state.
    fn write_config(&self) -> Result<(), CommandError>;
}
