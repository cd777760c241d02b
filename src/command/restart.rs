use super::restage::{announce_and_get_app, AppLifecycleArgs};
use super::shared::{AppAction, Stager};
use super::BaseCommand;
use crate::error::CommandError;

pub struct RestartCommand {
    base: BaseCommand,
}

impl RestartCommand {
    pub fn new(base: BaseCommand) -> Self {
        Self { base }
    }

    pub async fn execute(&self, args: &AppLifecycleArgs) -> Result<(), CommandError> {
        let app = announce_and_get_app(&self.base, "Restarting", &args.app).await?;
        Stager::new(self.base.clone())
            .start_app(&app, None, args.strategy(), args.no_wait, AppAction::Restart)
            .await
    }
}
