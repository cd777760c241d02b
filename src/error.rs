//! Error types for the command layer.
//!
//! `ActorError` is what actor implementations hand back; commands either
//! propagate it verbatim (wrapped in `CommandError::Actor`) or translate a
//! few well-known kinds into friendlier `CommandError` variants.

use thiserror::Error;

/// Errors raised behind the actor traits.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActorError {
    #[error("Not logged in. Use '{binary_name} login' or '{binary_name} login --sso' to log in.")]
    NotLoggedIn { binary_name: String },

    #[error("No org targeted, use '{binary_name} target -o ORG' to target an org.")]
    NoOrganizationTargeted { binary_name: String },

    #[error("No space targeted, use '{binary_name} target -s SPACE' to target a space.")]
    NoSpaceTargeted { binary_name: String },

    #[error("Organization '{name}' not found.")]
    OrganizationNotFound { name: String },

    #[error("Space '{name}' not found.")]
    SpaceNotFound { name: String },

    #[error("App '{name}' not found.")]
    ApplicationNotFound { name: String },

    #[error("Domain '{name}' not found.")]
    DomainNotFound { name: String },

    #[error("Process {process_type} not found")]
    ProcessNotFound { process_type: String },

    #[error("Security group '{name}' not found.")]
    SecurityGroupNotFound { name: String },

    #[error("Security group '{name}' not bound to this space for lifecycle phase '{lifecycle}'.")]
    SecurityGroupNotBound { name: String, lifecycle: String },

    #[error("Route '{url}' not found.")]
    RouteNotFound { url: String },

    #[error("Route does not have app '{app_guid}' as a destination.")]
    RouteDestinationNotFound { app_guid: String },

    #[error("Route '{url}' already exists.")]
    RouteAlreadyExists { url: String },

    #[error("Policy does not exist.")]
    PolicyDoesNotExist,

    #[error("Space '{name}' already exists.")]
    SpaceAlreadyExists { name: String },

    #[error("Space quota '{name}' not found.")]
    SpaceQuotaNotFound { name: String },

    #[error("Service binding not found.")]
    ServiceBindingNotFound,

    #[error("Credentials were rejected, please try again.")]
    UaaUnauthorized { message: String },

    #[error("The account is locked.")]
    AccountLocked,

    #[error("Timed out waiting for application '{name}' to start")]
    StartupTimeout { name: String },

    #[error("All instances of the app crashed")]
    AllInstancesCrashed,

    #[error("Timed out waiting for package to stage")]
    StagingTimeout,

    #[error("timeout connecting to log server, no log will be shown")]
    LogTimeout,

    #[error("{0}")]
    Other(String),
}

/// Errors returned from command execution.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error(transparent)]
    Actor(#[from] ActorError),

    #[error("Incorrect Usage: The following arguments cannot be used together: {}", .args.join(", "))]
    ArgumentCombination { args: Vec<String> },

    #[error("Incorrect Usage: '{arg1}' and '{arg2}' must be used together.")]
    RequiredFlags { arg1: String, arg2: String },

    #[error("Incorrect Usage: the required argument(s) {} were not provided", .missing.join(", "))]
    MissingCredentials { missing: Vec<String> },

    #[error("Incorrect Usage: {0}")]
    InvalidArgument(String),

    #[error("Incorrect Usage: --protocol and --port flags must be specified together")]
    NetworkPolicyProtocolOrPortNotProvided,

    #[error("Incorrect Usage: --org flag can only be used with --space flag")]
    NetworkPolicyDestinationOrgWithoutSpace,

    #[error("Incorrect Usage: ORG and SPACE must be provided together")]
    SecurityGroupOrgSpaceIncomplete,

    #[error("Option '{command}' requires UAA API version {minimum_version} or higher. Update your UAA server.")]
    MinimumUaaApiVersionNotMet {
        command: String,
        minimum_version: String,
    },

    #[error("Use '{binary_name} auth {client_id} CLIENT_SECRET --client-credentials' to authenticate with client credentials.")]
    ManualClientCredentials {
        binary_name: String,
        client_id: String,
    },

    #[error("Service account currently logged in. Use '{binary_name} logout' to log out service account and try again.")]
    PasswordGrantTypeLogoutRequired { binary_name: String },

    #[error("Unable to authenticate.")]
    UnableToAuthenticate,

    #[error("Start unsuccessful\n\nTIP: use '{binary_name} logs {app_name} --recent' for more information")]
    ApplicationUnableToStart {
        app_name: String,
        binary_name: String,
    },

    #[error("Start app timeout\n\nTIP: Application must be listening on the right port. Instead of hard coding the port, use the $PORT environment variable.\n\nUse '{binary_name} logs {app_name} --recent' for more information")]
    StartupTimeout {
        app_name: String,
        binary_name: String,
    },

    #[error("Error staging application: Stager timeout\n\nTIP: Use '{binary_name} logs {app_name} --recent' for more information")]
    StagingTimeout {
        app_name: String,
        binary_name: String,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to get user input: {0}")]
    Ui(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl CommandError {
    /// The actor error this command error wraps, if any.
    pub fn as_actor_error(&self) -> Option<&ActorError> {
        match self {
            CommandError::Actor(e) => Some(e),
            _ => None,
        }
    }
}

impl From<config::ConfigError> for CommandError {
    fn from(err: config::ConfigError) -> Self {
        CommandError::Config(err.to_string())
    }
}

impl From<serde_json::Error> for CommandError {
    fn from(err: serde_json::Error) -> Self {
        CommandError::Config(format!("Invalid session config: {}", err))
    }
}
