use super::flag::parse_megabytes;
use super::shared::{with_poll_warnings, AppSummaryDisplayer};
use super::BaseCommand;
use crate::actor::{Application, ProcessScale};
use crate::config::User;
use crate::error::{ActorError, CommandError};
use tracing::info;

#[derive(Debug, Clone, clap::Args)]
pub struct ScaleArgs {
    /// Application name
    pub app: String,
    /// Number of instances
    #[arg(short = 'i')]
    pub instances: Option<u32>,
    /// Memory limit (e.g. 256M, 1024M, 1G)
    #[arg(short = 'm', value_parser = parse_megabytes)]
    pub memory: Option<u64>,
    /// Disk limit (e.g. 256M, 1024M, 1G)
    #[arg(short = 'k', value_parser = parse_megabytes)]
    pub disk: Option<u64>,
    /// App process to scale
    #[arg(long, default_value = "web")]
    pub process: String,
    /// Force restart of app without prompt
    #[arg(short = 'f')]
    pub force: bool,
}

impl Default for ScaleArgs {
    fn default() -> Self {
        Self {
            app: String::new(),
            instances: None,
            memory: None,
            disk: None,
            process: "web".to_string(),
            force: false,
        }
    }
}

impl ScaleArgs {
    fn requires_restart(&self) -> bool {
        self.memory.is_some() || self.disk.is_some()
    }

    fn any_change(&self) -> bool {
        self.instances.is_some() || self.requires_restart()
    }
}

pub struct ScaleCommand {
    base: BaseCommand,
}

impl ScaleCommand {
    pub fn new(base: BaseCommand) -> Self {
        Self { base }
    }

    pub async fn execute(&self, args: &ScaleArgs) -> Result<(), CommandError> {
        self.base.check_target(true, true)?;
        let user = self.base.current_user()?;
        let space = self.base.targeted_space();
        let app = self.base.show_warnings(
            self.base
                .actor
                .get_application_by_name_and_space(&args.app, &space.guid)
                .await,
        )?;

        if !args.any_change() {
            return self.show_current_scale(&args.app, &user).await;
        }

        self.announce("Scaling", &args.app, &user);
        if args.requires_restart() && !args.force {
            let confirmed = self.base.ui.display_bool_prompt(
                false,
                "This will cause the app to restart. Are you sure you want to scale {AppName}?",
                &[("AppName", args.app.as_str())],
            )?;
            if !confirmed {
                self.base.ui.display_text("Scaling cancelled");
                return Ok(());
            }
        }

        let scale = ProcessScale {
            process_type: args.process.clone(),
            instances: args.instances,
            memory_in_mb: args.memory,
            disk_in_mb: args.disk,
        };
        info!(app = %app.name, ?scale, "scaling process");
        self.base.show_warnings(
            self.base
                .actor
                .scale_process_by_application(&app.guid, &scale)
                .await,
        )?;

        if args.requires_restart() {
            if let Err(err) = self.restart(&app, &args.app, &user).await {
                if matches!(err, CommandError::ApplicationUnableToStart { .. }) {
                    self.show_current_scale(&args.app, &user).await?;
                }
                return Err(err);
            }
        }

        self.show_current_scale(&args.app, &user).await
    }

    async fn restart(&self, app: &Application, app_name: &str, user: &User) -> Result<(), CommandError> {
        let actor = &self.base.actor;
        self.announce("Stopping", app_name, user);
        self.base.show_warnings(actor.stop_application(&app.guid).await)?;
        self.announce("Starting", app_name, user);
        self.base.show_warnings(actor.start_application(&app.guid).await)?;

        let polled = with_poll_warnings(self.base.ui.clone(), |tx| actor.poll_start(app, false, tx)).await;
        match polled {
            Ok(()) => Ok(()),
            Err(ActorError::AllInstancesCrashed) => Err(CommandError::ApplicationUnableToStart {
                app_name: app_name.to_string(),
                binary_name: self.base.binary_name(),
            }),
            Err(ActorError::StartupTimeout { .. }) => Err(CommandError::StartupTimeout {
                app_name: app_name.to_string(),
                binary_name: self.base.binary_name(),
            }),
            Err(err) => Err(err.into()),
        }
    }

    async fn show_current_scale(&self, app_name: &str, user: &User) -> Result<(), CommandError> {
        self.announce("Showing current scale of", app_name, user);
        let summary = self.base.show_warnings(
            self.base
                .actor
                .get_detailed_app_summary(app_name, &self.base.targeted_space().guid, false)
                .await,
        )?;
        AppSummaryDisplayer::new(self.base.ui.as_ref()).display_processes(&summary.process_summaries);
        Ok(())
    }

    fn announce(&self, verb: &str, app_name: &str, user: &User) {
        let org = self.base.targeted_organization();
        let space = self.base.targeted_space();
        let template = format!(
            "{} app {{AppName}} in org {{OrgName}} / space {{SpaceName}} as {{Username}}...",
            verb
        );
        self.base.ui.display_text_with_flavor(
            &template,
            &[
                ("AppName", app_name),
                ("OrgName", org.name.as_str()),
                ("SpaceName", space.name.as_str()),
                ("Username", user.name.as_str()),
            ],
        );
    }
}
