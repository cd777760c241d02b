use super::BaseCommand;
use crate::error::CommandError;

#[derive(Debug, Clone, Default, clap::Args)]
pub struct OrgArgs {
    /// Organization name
    pub organization: String,
    /// Retrieve and display the given org's guid. All other output for the org is suppressed.
    #[arg(long)]
    pub guid: bool,
}

pub struct OrgCommand {
    base: BaseCommand,
}

impl OrgCommand {
    pub fn new(base: BaseCommand) -> Self {
        Self { base }
    }

    pub async fn execute(&self, args: &OrgArgs) -> Result<(), CommandError> {
        self.base.check_target(false, false)?;

        if args.guid {
            let org = self.base.show_warnings(
                self.base
                    .actor
                    .get_organization_by_name(&args.organization)
                    .await,
            )?;
            self.base.ui.display_text(&org.guid);
            return Ok(());
        }

        let user = self.base.current_user()?;
        self.base.ui.display_text_with_flavor(
            "Getting info for org {OrgName} as {Username}...",
            &[
                ("OrgName", args.organization.as_str()),
                ("Username", user.name.as_str()),
            ],
        );
        self.base.ui.display_newline();

        let summary = self.base.show_warnings(
            self.base
                .actor
                .get_organization_summary_by_name(&args.organization)
                .await,
        )?;

        self.base.ui.display_key_value_table(
            "",
            &[
                ("name:".to_string(), summary.name),
                ("domains:".to_string(), summary.domain_names.join(", ")),
                ("quota:".to_string(), summary.quota_name),
                ("spaces:".to_string(), summary.space_names.join(", ")),
            ],
            3,
        );
        Ok(())
    }
}
