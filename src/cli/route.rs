//! CLI route: single route table and run context. Dispatches each verb to its command.

use crate::actor::{Actor, ConfigSharedActor, NetworkingActor, PushActor, SharedActor};
use crate::cli::parse::{Cli, Commands};
use crate::cli::command_name;
use crate::command::add_network_policy::AddNetworkPolicyCommand;
use crate::command::apps::AppsCommand;
use crate::command::auth::AuthCommand;
use crate::command::bind_security_group::BindSecurityGroupCommand;
use crate::command::cleanup_outdated_service_bindings::CleanupOutdatedServiceBindingsCommand;
use crate::command::create_space::CreateSpaceCommand;
use crate::command::delete_label::DeleteLabelCommand;
use crate::command::login::LoginCommand;
use crate::command::map_route::MapRouteCommand;
use crate::command::org::OrgCommand;
use crate::command::push::PushCommand;
use crate::command::remove_network_policy::RemoveNetworkPolicyCommand;
use crate::command::restage::RestageCommand;
use crate::command::restart::RestartCommand;
use crate::command::run_task::RunTaskCommand;
use crate::command::scale::ScaleCommand;
use crate::command::space::SpaceCommand;
use crate::command::stage::StageCommand;
use crate::command::start::StartCommand;
use crate::command::target::TargetCommand;
use crate::command::unbind_security_group::UnbindSecurityGroupCommand;
use crate::command::unbind_service::UnbindServiceCommand;
use crate::command::unmap_route::UnmapRouteCommand;
use crate::command::BaseCommand;
use crate::config::{CliSettings, Config, EnvOverride, SessionConfig};
use crate::error::CommandError;
use crate::logging::LoggingConfig;
use crate::ui::{ProgressBar, TerminalUi, Ui, UploadProgressBar};
use std::io::IsTerminal;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, info};

/// Runtime context for CLI execution: UI, session config and the actors commands talk to.
pub struct RunContext {
    base: BaseCommand,
    networking_actor: Arc<dyn NetworkingActor>,
    push_actor: Arc<dyn PushActor>,
    progress_bar: Arc<dyn ProgressBar>,
    pwd: PathBuf,
}

impl RunContext {
    pub fn new(
        base: BaseCommand,
        networking_actor: Arc<dyn NetworkingActor>,
        push_actor: Arc<dyn PushActor>,
        progress_bar: Arc<dyn ProgressBar>,
        pwd: PathBuf,
    ) -> Self {
        Self {
            base,
            networking_actor,
            push_actor,
            progress_bar,
            pwd,
        }
    }

    /// Wire a context from the session file, the terminal and the caller's actors.
    /// Target checks are answered from the session itself.
    pub fn from_session(
        actor: Arc<dyn Actor>,
        networking_actor: Arc<dyn NetworkingActor>,
        push_actor: Arc<dyn PushActor>,
    ) -> Result<Self, CommandError> {
        let session = SessionConfig::load()?;
        let env = session.env().clone();
        let config: Arc<dyn Config> = Arc::new(session);
        let ui: Arc<dyn Ui> = Arc::new(TerminalUi::new(use_color(&env)));
        let shared_actor: Arc<dyn SharedActor> = Arc::new(ConfigSharedActor::new(config.clone()));
        let pwd = std::env::current_dir()?;
        debug!(pwd = %pwd.display(), "run context initialized");

        Ok(Self::new(
            BaseCommand::new(ui, config, shared_actor, actor),
            networking_actor,
            push_actor,
            Arc::new(UploadProgressBar::new()),
            pwd,
        ))
    }

    pub fn base(&self) -> &BaseCommand {
        &self.base
    }

    /// Execute a CLI command via the single route table.
    pub async fn execute(&self, command: &Commands) -> Result<(), CommandError> {
        let name = command_name(command);
        info!(command = name, "executing command");
        let result = self.execute_inner(command).await;
        match &result {
            Ok(()) => debug!(command = name, "command completed"),
            Err(e) => debug!(command = name, error = %e, "command failed"),
        }
        result
    }

    async fn execute_inner(&self, command: &Commands) -> Result<(), CommandError> {
        let base = self.base.clone();
        match command {
            Commands::AddNetworkPolicy(args) => {
                AddNetworkPolicyCommand::new(base, self.networking_actor.clone())
                    .execute(args)
                    .await
            }
            Commands::RemoveNetworkPolicy(args) => {
                RemoveNetworkPolicyCommand::new(base, self.networking_actor.clone())
                    .execute(args)
                    .await
            }
            Commands::Auth(args) => AuthCommand::new(base).execute(args).await,
            Commands::Login(args) => LoginCommand::new(base).execute(args).await,
            Commands::Target(args) => TargetCommand::new(base).execute(args).await,
            Commands::BindSecurityGroup(args) => {
                BindSecurityGroupCommand::new(base).execute(args).await
            }
            Commands::UnbindSecurityGroup(args) => {
                UnbindSecurityGroupCommand::new(base).execute(args).await
            }
            Commands::CreateSpace(args) => CreateSpaceCommand::new(base).execute(args).await,
            Commands::MapRoute(args) => MapRouteCommand::new(base).execute(args).await,
            Commands::UnmapRoute(args) => UnmapRouteCommand::new(base).execute(args).await,
            Commands::Stage(args) => StageCommand::new(base).execute(args).await,
            Commands::Restage(args) => RestageCommand::new(base).execute(args).await,
            Commands::Start(args) => StartCommand::new(base).execute(args).await,
            Commands::Restart(args) => RestartCommand::new(base).execute(args).await,
            Commands::Scale(args) => ScaleCommand::new(base).execute(args).await,
            Commands::RunTask(args) => RunTaskCommand::new(base).execute(args).await,
            Commands::DeleteLabel(args) => DeleteLabelCommand::new(base).execute(args).await,
            Commands::UnbindService(args) => UnbindServiceCommand::new(base).execute(args).await,
            Commands::CleanupOutdatedServiceBindings(args) => {
                CleanupOutdatedServiceBindingsCommand::new(base)
                    .execute(args)
                    .await
            }
            Commands::Org(args) => OrgCommand::new(base).execute(args).await,
            Commands::Space(args) => SpaceCommand::new(base).execute(args).await,
            Commands::Apps(args) => AppsCommand::new(base).execute(args).await,
            Commands::Push(args) => {
                PushCommand::new(
                    base,
                    self.push_actor.clone(),
                    self.progress_bar.clone(),
                    self.pwd.clone(),
                )
                .execute(args)
                .await
            }
        }
    }
}

fn use_color(env: &EnvOverride) -> bool {
    !env.color_disabled() && (env.force_tty || std::io::stdout().is_terminal())
}

/// Build logging configuration from CLI args, environment, and settings file.
pub fn build_logging_config(cli: &Cli) -> LoggingConfig {
    build_logging_config_with_env(cli, &EnvOverride::from_env())
}

/// Same as [`build_logging_config`] with an explicit environment snapshot.
pub fn build_logging_config_with_env(cli: &Cli, env: &EnvOverride) -> LoggingConfig {
    let trace = env.trace_enabled();

    // Logging stays off unless asked for
    if !cli.verbose && !trace {
        return LoggingConfig {
            level: "off".to_string(),
            ..LoggingConfig::default()
        };
    }

    let mut config = CliSettings::load(cli.config.as_deref())
        .map(|s| s.logging)
        .unwrap_or_default();

    if trace {
        config.level = "trace".to_string();
    }
    if let Some(ref level) = cli.log_level {
        config.level = level.clone();
    }
    if let Some(ref format) = cli.log_format {
        config.format = format.clone();
    }
    if let Some(ref output) = cli.log_output {
        config.output = output.clone();
    }
    if let Some(ref file) = cli.log_file {
        config.file = file.clone();
    }
    config
}
