use super::BaseCommand;
use crate::error::CommandError;

#[derive(Debug, Clone, Default, clap::Args)]
pub struct SpaceArgs {
    /// Space name
    pub space: String,
    /// Retrieve and display the given space's guid. All other output for the space is suppressed.
    #[arg(long)]
    pub guid: bool,
}

pub struct SpaceCommand {
    base: BaseCommand,
}

impl SpaceCommand {
    pub fn new(base: BaseCommand) -> Self {
        Self { base }
    }

    pub async fn execute(&self, args: &SpaceArgs) -> Result<(), CommandError> {
        self.base.check_target(true, false)?;
        let org = self.base.targeted_organization();
        let actor = &self.base.actor;

        if args.guid {
            let space = self.base.show_warnings(
                actor
                    .get_space_by_name_and_organization(&args.space, &org.guid)
                    .await,
            )?;
            self.base.ui.display_text(&space.guid);
            return Ok(());
        }

        let user = self.base.current_user()?;
        self.base.ui.display_text_with_flavor(
            "Getting info for space {TargetSpace} in org {OrgName} as {CurrentUser}...",
            &[
                ("TargetSpace", args.space.as_str()),
                ("OrgName", org.name.as_str()),
                ("CurrentUser", user.name.as_str()),
            ],
        );
        self.base.ui.display_newline();

        let summary = self.base.show_warnings(
            actor
                .get_space_summary_by_name_and_organization(&args.space, &org.guid)
                .await,
        )?;

        self.base.ui.display_key_value_table(
            "",
            &[
                ("name:".to_string(), summary.name),
                ("org:".to_string(), summary.org_name),
                ("apps:".to_string(), summary.app_names.join(", ")),
                ("domains:".to_string(), summary.domain_names.join(", ")),
                (
                    "services:".to_string(),
                    summary.service_instance_names.join(", "),
                ),
                (
                    "isolation segment:".to_string(),
                    summary.isolation_segment_name,
                ),
                ("quota:".to_string(), summary.quota_name),
                (
                    "running security groups:".to_string(),
                    summary.running_security_group_names.join(", "),
                ),
                (
                    "staging security groups:".to_string(),
                    summary.staging_security_group_names.join(", "),
                ),
            ],
            3,
        );
        Ok(())
    }
}
