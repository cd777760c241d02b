use super::BaseCommand;
use crate::actor::ApplicationSummary;
use crate::error::CommandError;

#[derive(Debug, Clone, Default, clap::Args)]
pub struct AppsArgs {
    /// Selector to filter apps by labels
    #[arg(long)]
    pub labels: Option<String>,
}

pub struct AppsCommand {
    base: BaseCommand,
}

impl AppsCommand {
    pub fn new(base: BaseCommand) -> Self {
        Self { base }
    }

    pub async fn execute(&self, args: &AppsArgs) -> Result<(), CommandError> {
        self.base.check_target(true, true)?;
        let user = self.base.current_user()?;
        let org = self.base.targeted_organization();
        let space = self.base.targeted_space();
        let ui = &self.base.ui;

        ui.display_text_with_flavor(
            "Getting apps in org {OrgName} / space {SpaceName} as {Username}...",
            &[
                ("OrgName", org.name.as_str()),
                ("SpaceName", space.name.as_str()),
                ("Username", user.name.as_str()),
            ],
        );
        ui.display_newline();

        let summaries = self.base.show_warnings(
            self.base
                .actor
                .get_app_summaries_for_space(&space.guid, args.labels.as_deref().unwrap_or(""))
                .await,
        )?;

        if summaries.is_empty() {
            ui.display_text("No apps found");
            return Ok(());
        }

        let mut rows = vec![vec![
            "name".to_string(),
            "requested state".to_string(),
            "processes".to_string(),
            "routes".to_string(),
        ]];
        rows.extend(summaries.iter().map(app_row));
        ui.display_table("", &rows, 3);
        Ok(())
    }
}

fn app_row(summary: &ApplicationSummary) -> Vec<String> {
    // web first, then the rest in the order the platform returned them
    let mut processes: Vec<_> = summary.process_summaries.iter().collect();
    processes.sort_by_key(|p| p.process_type != "web");
    let processes = processes
        .iter()
        .map(|p| p.instance_ratio())
        .collect::<Vec<_>>()
        .join(", ");
    let routes = summary
        .routes
        .iter()
        .map(|r| r.url())
        .collect::<Vec<_>>()
        .join(", ");
    vec![
        summary.application.name.clone(),
        summary.application.state.to_string(),
        processes,
        routes,
    ]
}
