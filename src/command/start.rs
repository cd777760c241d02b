use super::restage::announce_and_get_app;
use super::shared::{AppAction, Stager};
use super::BaseCommand;
use crate::actor::DeploymentStrategy;
use crate::error::CommandError;

#[derive(Debug, Clone, Default, clap::Args)]
pub struct StartArgs {
    /// Application name
    pub app: String,
}

pub struct StartCommand {
    base: BaseCommand,
}

impl StartCommand {
    pub fn new(base: BaseCommand) -> Self {
        Self { base }
    }

    pub async fn execute(&self, args: &StartArgs) -> Result<(), CommandError> {
        let app = announce_and_get_app(&self.base, "Starting", &args.app).await?;

        if app.started() {
            self.base.ui.display_newline();
            self.base.ui.display_text_with_flavor(
                "App '{AppName}' is already started.",
                &[("AppName", args.app.as_str())],
            );
            self.base.ui.display_ok();
            return Ok(());
        }

        Stager::new(self.base.clone())
            .start_app(&app, None, DeploymentStrategy::Default, false, AppAction::Start)
            .await
    }
}
