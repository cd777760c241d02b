use super::shared::{AppAction, Stager};
use super::BaseCommand;
use crate::actor::{Application, DeploymentStrategy};
use crate::error::CommandError;
use tracing::info;

/// Flags shared by the commands that (re)start an app.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct AppLifecycleArgs {
    /// Application name
    pub app: String,
    /// Deployment strategy, either rolling or null
    #[arg(long, value_enum)]
    pub strategy: Option<DeploymentStrategy>,
    /// Exit when the first instance of the web process is healthy
    #[arg(long = "no-wait")]
    pub no_wait: bool,
}

impl AppLifecycleArgs {
    pub(crate) fn strategy(&self) -> DeploymentStrategy {
        self.strategy.unwrap_or_default()
    }
}

/// Announce `verb` for the app, then look it up in the targeted space.
pub(crate) async fn announce_and_get_app(
    base: &BaseCommand,
    verb: &str,
    app_name: &str,
) -> Result<Application, CommandError> {
    base.check_target(true, true)?;
    let user = base.current_user()?;
    let org = base.targeted_organization();
    let space = base.targeted_space();

    let template = format!(
        "{} app {{AppName}} in org {{OrgName}} / space {{SpaceName}} as {{Username}}...",
        verb
    );
    base.ui.display_text_with_flavor(
        &template,
        &[
            ("AppName", app_name),
            ("OrgName", org.name.as_str()),
            ("SpaceName", space.name.as_str()),
            ("Username", user.name.as_str()),
        ],
    );
    let app = base.show_warnings(
        base.actor
            .get_application_by_name_and_space(app_name, &space.guid)
            .await,
    )?;
    Ok(app)
}

pub struct RestageCommand {
    base: BaseCommand,
}

impl RestageCommand {
    pub fn new(base: BaseCommand) -> Self {
        Self { base }
    }

    pub async fn execute(&self, args: &AppLifecycleArgs) -> Result<(), CommandError> {
        let app = announce_and_get_app(&self.base, "Restaging", &args.app).await?;
        self.base.ui.display_newline();

        let package = self.base.show_warnings(
            self.base
                .actor
                .get_newest_ready_package_for_application(&app)
                .await,
        )?;
        info!(app = %app.name, package = %package.guid, strategy = ?args.strategy(), "restaging");

        Stager::new(self.base.clone())
            .stage_and_start(
                &app,
                &package.guid,
                args.strategy(),
                args.no_wait,
                AppAction::Restage,
            )
            .await
    }
}
