use super::shared::Stager;
use super::BaseCommand;
use crate::error::CommandError;

#[derive(Debug, Clone, Default, clap::Args)]
pub struct StageArgs {
    /// Application name
    pub app: String,
    /// The guid of the package to stage; the newest ready package when omitted
    #[arg(long = "package-guid")]
    pub package_guid: Option<String>,
}

pub struct StageCommand {
    base: BaseCommand,
}

impl StageCommand {
    pub fn new(base: BaseCommand) -> Self {
        Self { base }
    }

    pub async fn execute(&self, args: &StageArgs) -> Result<(), CommandError> {
        self.base.check_target(true, true)?;
        let user = self.base.current_user()?;
        let org = self.base.targeted_organization();
        let space = self.base.targeted_space();
        let ui = &self.base.ui;
        let actor = &self.base.actor;

        ui.display_text_with_flavor(
            "Staging package for {AppName} in org {OrgName} / space {SpaceName} as {Username}...",
            &[
                ("AppName", args.app.as_str()),
                ("OrgName", org.name.as_str()),
                ("SpaceName", space.name.as_str()),
                ("Username", user.name.as_str()),
            ],
        );
        ui.display_newline();

        let app = self.base.show_warnings(
            actor
                .get_application_by_name_and_space(&args.app, &space.guid)
                .await,
        )?;
        let package_guid = match args.package_guid.as_deref().filter(|g| !g.is_empty()) {
            Some(guid) => guid.to_string(),
            None => {
                self.base
                    .show_warnings(actor.get_newest_ready_package_for_application(&app).await)?
                    .guid
            }
        };

        let droplet = Stager::new(self.base.clone())
            .stage_app(&app, &package_guid)
            .await?;

        ui.display_newline();
        ui.display_text("Package staged");
        let created = droplet
            .created_at
            .map(|at| ui.user_friendly_date(at))
            .unwrap_or_default();
        ui.display_key_value_table(
            "",
            &[
                ("droplet guid:".to_string(), droplet.guid),
                ("state:".to_string(), droplet.state.to_string()),
                ("created:".to_string(), created),
            ],
            3,
        );
        Ok(())
    }
}
