//! JSON session file and the `Config` implementation backed by it.

use super::{
    decode_user_from_token, session_file_path, Config, EnvOverride, TargetInformation,
    TargetedOrganization, TargetedSpace, User, DEFAULT_BINARY_NAME,
};
use crate::error::CommandError;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

/// OAuth client used when none has been configured.
pub const DEFAULT_UAA_OAUTH_CLIENT: &str = "cf";

const CURRENT_CONFIG_VERSION: u32 = 3;

/// On-disk layout of `config.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionFile {
    #[serde(rename = "ConfigVersion", default = "default_config_version")]
    pub config_version: u32,
    #[serde(rename = "Target", default)]
    pub target: String,
    #[serde(rename = "APIVersion", default)]
    pub api_version: String,
    #[serde(rename = "AuthorizationEndpoint", default)]
    pub authorization_endpoint: String,
    #[serde(rename = "DopplerEndPoint", default)]
    pub doppler_endpoint: String,
    #[serde(rename = "UaaEndpoint", default)]
    pub uaa_endpoint: String,
    #[serde(rename = "RoutingAPIEndpoint", default)]
    pub routing_endpoint: String,
    #[serde(rename = "AccessToken", default)]
    pub access_token: String,
    #[serde(rename = "SSHOAuthClient", default)]
    pub ssh_oauth_client: String,
    #[serde(rename = "UAAOAuthClient", default = "default_uaa_oauth_client")]
    pub uaa_oauth_client: String,
    #[serde(rename = "UAAOAuthClientSecret", default)]
    pub uaa_oauth_client_secret: String,
    #[serde(rename = "UAAGrantType", default)]
    pub uaa_grant_type: String,
    #[serde(rename = "RefreshToken", default)]
    pub refresh_token: String,
    #[serde(rename = "OrganizationFields", default)]
    pub organization_fields: TargetedOrganization,
    #[serde(rename = "SpaceFields", default)]
    pub space_fields: TargetedSpace,
    #[serde(rename = "SSLDisabled", default)]
    pub ssl_disabled: bool,
    #[serde(rename = "MinCLIVersion", default)]
    pub min_cli_version: String,
    #[serde(rename = "ColorEnabled", default)]
    pub color_enabled: String,
    #[serde(rename = "Locale", default)]
    pub locale: String,
    #[serde(rename = "Trace", default)]
    pub trace: String,
}

fn default_config_version() -> u32 {
    CURRENT_CONFIG_VERSION
}

fn default_uaa_oauth_client() -> String {
    DEFAULT_UAA_OAUTH_CLIENT.to_string()
}

impl Default for SessionFile {
    fn default() -> Self {
        Self {
            config_version: default_config_version(),
            target: String::new(),
            api_version: String::new(),
            authorization_endpoint: String::new(),
            doppler_endpoint: String::new(),
            uaa_endpoint: String::new(),
            routing_endpoint: String::new(),
            access_token: String::new(),
            ssh_oauth_client: String::new(),
            uaa_oauth_client: default_uaa_oauth_client(),
            uaa_oauth_client_secret: String::new(),
            uaa_grant_type: String::new(),
            refresh_token: String::new(),
            organization_fields: TargetedOrganization::default(),
            space_fields: TargetedSpace::default(),
            ssl_disabled: false,
            min_cli_version: String::new(),
            color_enabled: String::new(),
            locale: String::new(),
            trace: String::new(),
        }
    }
}

/// Session config loaded from (and written back to) `config.json`.
pub struct SessionConfig {
    path: PathBuf,
    file: RwLock<SessionFile>,
    env: EnvOverride,
    binary_name: String,
}

impl SessionConfig {
    /// Load from the default location (`$CF_HOME/.cf/config.json`).
    pub fn load() -> Result<Self, CommandError> {
        let path = session_file_path().ok_or_else(|| {
            CommandError::Config("Unable to determine home directory".to_string())
        })?;
        Self::load_from_file(&path, EnvOverride::from_env())
    }

    /// Load from an explicit path. A missing file yields a default session.
    pub fn load_from_file(path: &Path, env: EnvOverride) -> Result<Self, CommandError> {
        let file = if path.exists() {
            let raw = std::fs::read_to_string(path)?;
            if raw.trim().is_empty() {
                SessionFile::default()
            } else {
                serde_json::from_str(&raw)?
            }
        } else {
            debug!(path = %path.display(), "No session file found, using defaults");
            SessionFile::default()
        };

        Ok(Self::from_parts(path.to_path_buf(), file, env))
    }

    pub fn from_parts(path: PathBuf, file: SessionFile, env: EnvOverride) -> Self {
        Self {
            path,
            file: RwLock::new(file),
            env,
            binary_name: DEFAULT_BINARY_NAME.to_string(),
        }
    }

    pub fn with_binary_name(mut self, binary_name: impl Into<String>) -> Self {
        self.binary_name = binary_name.into();
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn env(&self) -> &EnvOverride {
        &self.env
    }

    /// Snapshot of the current file contents.
    pub fn snapshot(&self) -> SessionFile {
        self.file.read().clone()
    }
}

impl Config for SessionConfig {
    /// Persist the session: write a sibling temp file, then rename over the target.
    fn write_config(&self) -> Result<(), CommandError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let raw = serde_json::to_string_pretty(&*self.file.read())?;
        let tmp = self.path.with_extension("json.tmp");
        std::fs::write(&tmp, raw)?;
        std::fs::rename(&tmp, &self.path)?;
        debug!(path = %self.path.display(), "Session config written");
        Ok(())
    }

    fn binary_name(&self) -> String {
        self.binary_name.clone()
    }

    fn target(&self) -> String {
        self.file.read().target.clone()
    }

    fn api_version(&self) -> String {
        self.file.read().api_version.clone()
    }

    fn skip_ssl_validation(&self) -> bool {
        self.file.read().ssl_disabled
    }

    fn access_token(&self) -> String {
        self.file.read().access_token.clone()
    }

    fn refresh_token(&self) -> String {
        self.file.read().refresh_token.clone()
    }

    fn uaa_grant_type(&self) -> String {
        self.file.read().uaa_grant_type.clone()
    }

    fn uaa_oauth_client(&self) -> String {
        self.file.read().uaa_oauth_client.clone()
    }

    fn uaa_oauth_client_secret(&self) -> String {
        self.file.read().uaa_oauth_client_secret.clone()
    }

    fn current_user(&self) -> Result<User, CommandError> {
        decode_user_from_token(&self.file.read().access_token)
    }

    fn has_targeted_organization(&self) -> bool {
        !self.file.read().organization_fields.guid.is_empty()
    }

    fn has_targeted_space(&self) -> bool {
        !self.file.read().space_fields.guid.is_empty()
    }

    fn targeted_organization(&self) -> TargetedOrganization {
        self.file.read().organization_fields.clone()
    }

    fn targeted_space(&self) -> TargetedSpace {
        self.file.read().space_fields.clone()
    }

    fn staging_timeout(&self) -> Duration {
        self.env.staging_timeout()
    }

    fn startup_timeout(&self) -> Duration {
        self.env.startup_timeout()
    }

    fn docker_password(&self) -> String {
        self.env.docker_password.clone()
    }

    fn cf_username(&self) -> String {
        self.env.cf_username.clone()
    }

    fn cf_password(&self) -> String {
        self.env.cf_password.clone()
    }

    fn experimental(&self) -> bool {
        self.env.experimental()
    }

    fn set_target_information(&self, info: TargetInformation) {
        let mut file = self.file.write();
        file.target = info.api;
        file.api_version = info.api_version;
        file.authorization_endpoint = info.auth;
        file.min_cli_version = info.min_cli_version;
        file.doppler_endpoint = info.doppler;
        file.routing_endpoint = info.routing;
        file.ssl_disabled = info.skip_ssl_validation;
        file.organization_fields = TargetedOrganization::default();
        file.space_fields = TargetedSpace::default();
    }

    fn set_token_information(&self, access_token: &str, refresh_token: &str, ssh_oauth_client: &str) {
        let mut file = self.file.write();
        file.access_token = access_token.to_string();
        file.refresh_token = refresh_token.to_string();
        file.ssh_oauth_client = ssh_oauth_client.to_string();
    }

    fn set_uaa_grant_type(&self, grant_type: &str) {
        self.file.write().uaa_grant_type = grant_type.to_string();
    }

    fn set_uaa_client_credentials(&self, client: &str, client_secret: &str) {
        let mut file = self.file.write();
        file.uaa_oauth_client = client.to_string();
        file.uaa_oauth_client_secret = client_secret.to_string();
    }

    fn set_organization_information(&self, guid: &str, name: &str) {
        let mut file = self.file.write();
        file.organization_fields = TargetedOrganization {
            guid: guid.to_string(),
            name: name.to_string(),
        };
    }

    fn set_space_information(&self, guid: &str, name: &str, allow_ssh: bool) {
        let mut file = self.file.write();
        file.space_fields = TargetedSpace {
            guid: guid.to_string(),
            name: name.to_string(),
            allow_ssh,
        };
    }

    fn unset_organization_and_space_information(&self) {
        let mut file = self.file.write();
        file.organization_fields = TargetedOrganization::default();
        file.space_fields = TargetedSpace::default();
    }

    fn unset_space_information(&self) {
        self.file.write().space_fields = TargetedSpace::default();
    }

    fn unset_user_information(&self) {
        let mut file = self.file.write();
        file.access_token.clear();
        file.refresh_token.clear();
        file.uaa_grant_type.clear();
        file.uaa_oauth_client = default_uaa_oauth_client();
        file.uaa_oauth_client_secret.clear();
        file.organization_fields = TargetedOrganization::default();
        file.space_fields = TargetedSpace::default();
    }
}
