use super::shared::{meets_minimum, warn_if_api_version_below_supported_minimum, MIN_UAA_VERSION_FOR_ORIGIN};
use super::BaseCommand;
use crate::actor::GrantType;
use crate::config::{CLIENT_CREDENTIALS_GRANT_TYPE, DEFAULT_UAA_OAUTH_CLIENT};
use crate::error::CommandError;
use tracing::info;

#[derive(Debug, Clone, Default, clap::Args)]
pub struct AuthArgs {
    /// Username, or client ID with --client-credentials (falls back to CF_USERNAME)
    pub username: Option<String>,
    /// Password, or client secret with --client-credentials (falls back to CF_PASSWORD)
    pub password: Option<String>,
    /// Use (non-user) service account (also called client credentials)
    #[arg(long = "client-credentials")]
    pub client_credentials: bool,
    /// Indicates the identity provider to be used for authentication
    #[arg(long)]
    pub origin: Option<String>,
}

pub struct AuthCommand {
    base: BaseCommand,
}

impl AuthCommand {
    pub fn new(base: BaseCommand) -> Self {
        Self { base }
    }

    pub async fn execute(&self, args: &AuthArgs) -> Result<(), CommandError> {
        let origin = args.origin.clone().unwrap_or_default();
        if args.client_credentials && !origin.is_empty() {
            return Err(CommandError::ArgumentCombination {
                args: vec!["--client-credentials".to_string(), "--origin".to_string()],
            });
        }
        if !origin.is_empty() && !meets_minimum(&self.base.actor.uaa_api_version(), MIN_UAA_VERSION_FOR_ORIGIN) {
            return Err(CommandError::MinimumUaaApiVersionNotMet {
                command: "--origin".to_string(),
                minimum_version: MIN_UAA_VERSION_FOR_ORIGIN.to_string(),
            });
        }

        let (username, password) = self.credentials(args)?;
        let config = &self.base.config;
        if !args.client_credentials {
            if config.uaa_grant_type() == CLIENT_CREDENTIALS_GRANT_TYPE {
                return Err(CommandError::PasswordGrantTypeLogoutRequired {
                    binary_name: self.base.binary_name(),
                });
            }
            if config.uaa_oauth_client() != DEFAULT_UAA_OAUTH_CLIENT
                || !config.uaa_oauth_client_secret().is_empty()
            {
                return Err(CommandError::ManualClientCredentials {
                    binary_name: self.base.binary_name(),
                    client_id: config.uaa_oauth_client(),
                });
            }
        }

        let ui = &self.base.ui;
        let target = config.target();
        ui.display_text_with_flavor("API endpoint: {Endpoint}", &[("Endpoint", target.as_str())]);
        warn_if_api_version_below_supported_minimum(ui.as_ref(), &config.api_version());
        ui.display_text("Authenticating...");

        let (credentials, grant_type) = if args.client_credentials {
            (
                vec![
                    ("client_id".to_string(), username),
                    ("client_secret".to_string(), password),
                ],
                GrantType::ClientCredentials,
            )
        } else {
            (
                vec![
                    ("username".to_string(), username),
                    ("password".to_string(), password),
                ],
                GrantType::Password,
            )
        };
        info!(?grant_type, "authenticating");
        self.base
            .actor
            .authenticate(&credentials, &origin, grant_type)
            .await?;

        ui.display_ok();
        let target_command = format!("{} target", self.base.binary_name());
        ui.display_text_with_flavor(
            "Use '{Command}' to view or set your target org and space.",
            &[("Command", target_command.as_str())],
        );
        Ok(())
    }

    /// Positional values first, then `CF_USERNAME` / `CF_PASSWORD`.
    fn credentials(&self, args: &AuthArgs) -> Result<(String, String), CommandError> {
        let username = args
            .username
            .clone()
            .filter(|u| !u.is_empty())
            .unwrap_or_else(|| self.base.config.cf_username());
        let password = args
            .password
            .clone()
            .filter(|p| !p.is_empty())
            .unwrap_or_else(|| self.base.config.cf_password());

        let mut missing = Vec::new();
        if username.is_empty() {
            missing.push("USERNAME".to_string());
        }
        if password.is_empty() {
            missing.push("PASSWORD".to_string());
        }
        if !missing.is_empty() {
            return Err(CommandError::MissingCredentials { missing });
        }
        Ok((username, password))
    }
}
