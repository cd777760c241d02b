use super::shared::warn_if_api_version_below_supported_minimum;
use super::BaseCommand;
use crate::actor::{AuthPrompt, AuthPromptType, GrantType, Organization, Space, TargetSettings};
use crate::config::{CLIENT_CREDENTIALS_GRANT_TYPE, DEFAULT_UAA_OAUTH_CLIENT};
use crate::error::{ActorError, CommandError};
use crate::ui::MAX_MENU_CHOICES;
use tracing::{debug, warn};

const MAX_LOGIN_TRIES: usize = 3;

#[derive(Debug, Clone, Default, clap::Args)]
pub struct LoginArgs {
    /// API endpoint (e.g. https://api.example.com)
    #[arg(short = 'a')]
    pub api: Option<String>,
    /// Username
    #[arg(short = 'u')]
    pub username: Option<String>,
    /// Password
    #[arg(short = 'p')]
    pub password: Option<String>,
    /// Org
    #[arg(short = 'o')]
    pub org: Option<String>,
    /// Space
    #[arg(short = 's')]
    pub space: Option<String>,
    /// Prompt for a one-time passcode to login
    #[arg(long)]
    pub sso: bool,
    /// One-time passcode
    #[arg(long = "sso-passcode")]
    pub sso_passcode: Option<String>,
    /// Indicates the identity provider to be used for login
    #[arg(long)]
    pub origin: Option<String>,
    /// Skip verification of the API endpoint. Not recommended!
    #[arg(long = "skip-ssl-validation")]
    pub skip_ssl_validation: bool,
}

impl LoginArgs {
    fn validate(&self) -> Result<(), CommandError> {
        let combination = |a: &str, b: &str| CommandError::ArgumentCombination {
            args: vec![a.to_string(), b.to_string()],
        };
        let has_origin = self.origin.as_deref().is_some_and(|o| !o.is_empty());
        let has_passcode = self.sso_passcode.as_deref().is_some_and(|p| !p.is_empty());
        if has_origin && self.sso {
            return Err(combination("--sso", "--origin"));
        }
        if has_origin && has_passcode {
            return Err(combination("--sso-passcode", "--origin"));
        }
        if self.sso && has_passcode {
            return Err(combination("--sso-passcode", "--sso"));
        }
        Ok(())
    }
}

/// Normalize a user-supplied endpoint: no trailing slash, `https://` when no scheme.
pub(crate) fn normalize_endpoint(endpoint: &str) -> String {
    let trimmed = endpoint.trim().trim_end_matches('/');
    if trimmed.contains("://") {
        trimmed.to_string()
    } else {
        format!("https://{}", trimmed)
    }
}

pub struct LoginCommand {
    base: BaseCommand,
}

impl LoginCommand {
    pub fn new(base: BaseCommand) -> Self {
        Self { base }
    }

    pub async fn execute(&self, args: &LoginArgs) -> Result<(), CommandError> {
        let config = &self.base.config;
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
        args.validate()?;

        let settings = self.determine_api_endpoint(args)?;
        self.target_api(settings).await?;
        warn_if_api_version_below_supported_minimum(self.base.ui.as_ref(), &config.api_version());
        self.base.ui.display_newline();

        let result = self.login_and_target(args).await;
        self.show_status();
        result
    }

    fn determine_api_endpoint(&self, args: &LoginArgs) -> Result<TargetSettings, CommandError> {
        let ui = &self.base.ui;
        let mut endpoint = args.api.clone().unwrap_or_default();
        let mut skip_ssl_validation = args.skip_ssl_validation;
        let configured = self.base.config.target();

        if endpoint.is_empty() && !configured.is_empty() {
            endpoint = configured;
            skip_ssl_validation = self.base.config.skip_ssl_validation() || args.skip_ssl_validation;
        }

        if endpoint.is_empty() {
            endpoint = ui.display_text_prompt("API endpoint", &[])?;
        } else {
            ui.display_text_with_flavor("API endpoint: {APIEndpoint}", &[("APIEndpoint", endpoint.as_str())]);
        }

        Ok(TargetSettings {
            url: normalize_endpoint(&endpoint),
            skip_ssl_validation,
            dial_timeout_seconds: 0,
        })
    }

    async fn target_api(&self, settings: TargetSettings) -> Result<(), CommandError> {
        let insecure = settings.url.starts_with("http:");
        self.base
            .show_warnings(self.base.actor.set_target(settings).await)?;
        if insecure {
            self.base.ui.display_warning(
                "Warning: Insecure http API endpoint detected: secure https API endpoints are recommended",
                &[],
            );
        }
        Ok(())
    }

    async fn login_and_target(&self, args: &LoginArgs) -> Result<(), CommandError> {
        let sso = args.sso || args.sso_passcode.as_deref().is_some_and(|p| !p.is_empty());
        let authenticated = if sso {
            self.authenticate_sso(args).await?
        } else {
            self.authenticate(args).await?
        };
        if let Err(err) = authenticated {
            debug!(error = %err, "login failed");
            return Err(CommandError::UnableToAuthenticate);
        }

        self.base
            .config
            .write_config()
            .map_err(|e| CommandError::Config(format!("Error writing config: {}", e)))?;

        self.target_organization(args).await?;
        let org = self.base.targeted_organization();
        if org.guid.is_empty() {
            return Ok(());
        }
        self.base
            .ui
            .display_text_with_flavor("Targeted org {Organization}.", &[("Organization", org.name.as_str())]);
        self.base.ui.display_newline();
        self.target_space(args, &org.guid).await
    }

    /// Outer error: prompting failed. Inner error: every attempt was rejected.
    async fn authenticate(&self, args: &LoginArgs) -> Result<Result<(), ActorError>, CommandError> {
        let ui = &self.base.ui;
        let prompts = self.base.actor.get_login_prompts().await?;
        let mut username_flag = args.username.clone().filter(|u| !u.is_empty());
        let mut password_flag = args.password.clone().filter(|p| !p.is_empty());
        let mut credentials: Vec<(String, String)> = Vec::new();

        if let Some(prompt) = prompts.iter().find(|p| p.key == "username") {
            let value = match username_flag.take() {
                Some(value) => value,
                None => ui.display_text_prompt(&prompt.display_name, &[])?,
            };
            credentials.push(("username".to_string(), value));
        }

        for prompt in prompts
            .iter()
            .filter(|p| p.prompt_type != AuthPromptType::Password && p.key != "username")
        {
            let value = self.prompt_for(prompt)?;
            credentials.push((prompt.key.clone(), value));
        }

        let password_prompt = prompts.iter().find(|p| p.key == "password");
        let secret_prompts: Vec<&AuthPrompt> = prompts
            .iter()
            .filter(|p| {
                p.prompt_type == AuthPromptType::Password && p.key != "password" && p.key != "passcode"
            })
            .collect();

        let origin = args.origin.clone().unwrap_or_default();
        let mut outcome = Err(ActorError::Other("no login attempt made".to_string()));
        for attempt in 1..=MAX_LOGIN_TRIES {
            let mut attempt_credentials = credentials.clone();
            if let Some(prompt) = password_prompt {
                let value = match password_flag.take() {
                    Some(value) => value,
                    None => ui.display_password_prompt(&prompt.display_name, &[])?,
                };
                attempt_credentials.push(("password".to_string(), value));
            }
            for prompt in &secret_prompts {
                let value = ui.display_password_prompt(&prompt.display_name, &[])?;
                attempt_credentials.push((prompt.key.clone(), value));
            }

            ui.display_newline();
            ui.display_text("Authenticating...");
            outcome = self
                .base
                .actor
                .authenticate(&attempt_credentials, &origin, GrantType::Password)
                .await;

            match &outcome {
                Ok(()) => {
                    ui.display_ok();
                    break;
                }
                Err(err) => {
                    warn!(attempt, "authentication attempt failed");
                    ui.display_warning(&err.to_string(), &[]);
                    ui.display_newline();
                    if matches!(err, ActorError::AccountLocked) {
                        break;
                    }
                }
            }
        }
        Ok(outcome)
    }

    async fn authenticate_sso(&self, args: &LoginArgs) -> Result<Result<(), ActorError>, CommandError> {
        let ui = &self.base.ui;
        let prompts = self.base.actor.get_login_prompts().await?;
        let display_name = prompts
            .iter()
            .find(|p| p.key == "passcode")
            .map(|p| p.display_name.clone())
            .unwrap_or_else(|| "Temporary Authentication Code".to_string());
        let mut passcode_flag = args.sso_passcode.clone().filter(|p| !p.is_empty());

        let mut outcome = Err(ActorError::Other("no login attempt made".to_string()));
        for _ in 0..MAX_LOGIN_TRIES {
            let passcode = match passcode_flag.take() {
                Some(value) => value,
                None => ui.display_password_prompt(&display_name, &[])?,
            };
            ui.display_text("Authenticating...");
            outcome = self
                .base
                .actor
                .authenticate(&[("passcode".to_string(), passcode)], "", GrantType::Password)
                .await;
            match &outcome {
                Ok(()) => {
                    ui.display_ok();
                    ui.display_newline();
                    break;
                }
                Err(err) => {
                    ui.display_warning(&err.to_string(), &[]);
                    ui.display_newline();
                }
            }
        }
        Ok(outcome)
    }

    fn prompt_for(&self, prompt: &AuthPrompt) -> Result<String, CommandError> {
        let ui = &self.base.ui;
        match prompt.prompt_type {
            AuthPromptType::Menu if !prompt.entries.is_empty() => {
                ui.display_text_menu(&prompt.entries, &prompt.display_name, &[])
            }
            AuthPromptType::Password => ui.display_password_prompt(&prompt.display_name, &[]),
            _ => ui.display_text_prompt(&prompt.display_name, &[]),
        }
    }

    async fn target_organization(&self, args: &LoginArgs) -> Result<(), CommandError> {
        let config = &self.base.config;
        if let Some(name) = args.org.as_deref().filter(|o| !o.is_empty()) {
            let org = self
                .base
                .show_warnings(self.base.actor.get_organization_by_name(name).await)?;
            config.set_organization_information(&org.guid, &org.name);
            return Ok(());
        }

        let orgs = self
            .base
            .show_warnings(self.base.actor.get_organizations("").await)?;
        match orgs.as_slice() {
            [] => {}
            [org] => config.set_organization_information(&org.guid, &org.name),
            _ => {
                if let Some(org) = self.prompt_chosen_org(&orgs)? {
                    config.set_organization_information(&org.guid, &org.name);
                }
            }
        }
        Ok(())
    }

    async fn target_space(&self, args: &LoginArgs, org_guid: &str) -> Result<(), CommandError> {
        if let Some(name) = args.space.as_deref().filter(|s| !s.is_empty()) {
            let space = self.base.show_warnings(
                self.base
                    .actor
                    .get_space_by_name_and_organization(name, org_guid)
                    .await,
            )?;
            self.set_space(&space);
            return Ok(());
        }

        let spaces = self
            .base
            .show_warnings(self.base.actor.get_organization_spaces(org_guid).await)?;
        match spaces.as_slice() {
            [] => {}
            [space] => self.set_space(space),
            _ => {
                if let Some(space) = self.prompt_chosen_space(&spaces)? {
                    self.set_space(&space);
                }
            }
        }
        Ok(())
    }

    fn set_space(&self, space: &Space) {
        self.base
            .config
            .set_space_information(&space.guid, &space.name, true);
        self.base
            .ui
            .display_text_with_flavor("Targeted space {Space}.", &[("Space", space.name.as_str())]);
        self.base.ui.display_newline();
    }

    fn prompt_chosen_org(&self, orgs: &[Organization]) -> Result<Option<Organization>, CommandError> {
        let names: Vec<String> = orgs.iter().map(|o| o.name.clone()).collect();
        let Some(chosen) = self.prompt_menu(&names, "Select an org:", "Org")? else {
            return Ok(None);
        };
        orgs.iter()
            .find(|o| o.name == chosen)
            .cloned()
            .map(Some)
            .ok_or_else(|| ActorError::OrganizationNotFound { name: chosen }.into())
    }

    fn prompt_chosen_space(&self, spaces: &[Space]) -> Result<Option<Space>, CommandError> {
        let names: Vec<String> = spaces.iter().map(|s| s.name.clone()).collect();
        let Some(chosen) = self.prompt_menu(&names, "Select a space:", "Space")? else {
            return Ok(None);
        };
        spaces
            .iter()
            .find(|s| s.name == chosen)
            .cloned()
            .map(Some)
            .ok_or_else(|| ActorError::SpaceNotFound { name: chosen }.into())
    }

    /// Numbered menu for short lists; long lists ask for a typed name (empty skips).
    fn prompt_menu(&self, choices: &[String], text: &str, prompt: &str) -> Result<Option<String>, CommandError> {
        let ui = &self.base.ui;
        ui.display_text(text);
        if choices.len() < MAX_MENU_CHOICES {
            return ui.display_text_menu(choices, prompt, &[]).map(Some);
        }
        ui.display_text("There are too many options to display; please type in the name.");
        ui.display_newline();
        let answer = ui.display_text_prompt(prompt, &[])?;
        let answer = answer.trim();
        Ok((!answer.is_empty()).then(|| answer.to_string()))
    }

    fn show_status(&self) {
        let config = &self.base.config;
        let binary_name = self.base.binary_name();
        let mut rows = vec![
            (
                "API endpoint:".to_string(),
                config.target().trim_end_matches('/').to_string(),
            ),
            ("API version:".to_string(), config.api_version()),
        ];

        let user = config.current_user().ok().filter(|u| !u.name.is_empty());
        let Some(user) = user else {
            self.base.ui.display_key_value_table("", &rows, 3);
            let login_command = format!("{} login", binary_name);
            self.base.ui.display_text_with_flavor(
                "Not logged in. Use '{CFLoginCommand}' to log in.",
                &[("CFLoginCommand", login_command.as_str())],
            );
            return;
        };
        rows.push(("user:".to_string(), user.name));

        let org = config.targeted_organization();
        if org.name.is_empty() {
            self.base.ui.display_key_value_table("", &rows, 3);
            let target_command = format!("{} target", binary_name);
            self.base.ui.display_text_with_flavor(
                "No org or space targeted, use '{CFTargetCommand} -o ORG -s SPACE'",
                &[("CFTargetCommand", target_command.as_str())],
            );
            return;
        }
        rows.push(("org:".to_string(), org.name));

        let space = config.targeted_space().name;
        let space = if space.is_empty() {
            format!("No space targeted, use '{} target -s SPACE'", binary_name)
        } else {
            space
        };
        rows.push(("space:".to_string(), space));
        self.base.ui.display_key_value_table("", &rows, 3);
    }
}
