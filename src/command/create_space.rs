use super::BaseCommand;
use crate::error::{ActorError, CommandError};
use tracing::info;

const SPACE_ROLES: [&str; 2] = ["SpaceManager", "SpaceDeveloper"];

#[derive(Debug, Clone, Default, clap::Args)]
pub struct CreateSpaceArgs {
    /// Space name
    pub space: String,
    /// Organization; the targeted org when omitted
    #[arg(short = 'o')]
    pub org: Option<String>,
    /// Quota to assign to the newly created space
    #[arg(short = 'q')]
    pub quota: Option<String>,
}

pub struct CreateSpaceCommand {
    base: BaseCommand,
}

impl CreateSpaceCommand {
    pub fn new(base: BaseCommand) -> Self {
        Self { base }
    }

    pub async fn execute(&self, args: &CreateSpaceArgs) -> Result<(), CommandError> {
        let explicit_org = args.org.as_deref().filter(|o| !o.is_empty());
        self.base.check_target(explicit_org.is_none(), false)?;
        let user = self.base.current_user()?;
        let actor = &self.base.actor;
        let ui = &self.base.ui;

        let (org_guid, org_name) = match explicit_org {
            Some(name) => {
                let org = self
                    .base
                    .show_warnings(actor.get_organization_by_name(name).await)?;
                (org.guid, org.name)
            }
            None => {
                let org = self.base.targeted_organization();
                (org.guid, org.name)
            }
        };

        ui.display_text_with_flavor(
            "Creating space {SpaceName} in org {OrgName} as {CurrentUser}...",
            &[
                ("SpaceName", args.space.as_str()),
                ("OrgName", org_name.as_str()),
                ("CurrentUser", user.name.as_str()),
            ],
        );
        let space = match self
            .base
            .show_warnings(actor.create_space(&args.space, &org_guid).await)
        {
            Ok(space) => space,
            Err(ActorError::SpaceAlreadyExists { .. }) => {
                ui.display_text_with_flavor(
                    "Space '{SpaceName}' already exists.",
                    &[("SpaceName", args.space.as_str())],
                );
                ui.display_ok();
                return Ok(());
            }
            Err(err) => return Err(err.into()),
        };
        info!(space = %space.name, org = %org_name, "space created");
        ui.display_ok();

        if let Some(quota) = args.quota.as_deref().filter(|q| !q.is_empty()) {
            ui.display_text_with_flavor(
                "Setting space quota {QuotaName} to space {SpaceName} as {Username}...",
                &[
                    ("QuotaName", quota),
                    ("SpaceName", space.name.as_str()),
                    ("Username", user.name.as_str()),
                ],
            );
            self.base.show_warnings(
                actor
                    .apply_space_quota_by_name(quota, &space.guid, &org_guid)
                    .await,
            )?;
            ui.display_ok();
        }

        for role in SPACE_ROLES {
            ui.display_text_with_flavor(
                "Assigning role {RoleName} to user {CurrentUser} in org {OrgName} / space {SpaceName} as {CurrentUser}...",
                &[
                    ("RoleName", role),
                    ("CurrentUser", user.name.as_str()),
                    ("OrgName", org_name.as_str()),
                    ("SpaceName", space.name.as_str()),
                ],
            );
            self.base.show_warnings(
                actor
                    .create_space_role(role, &org_guid, &space.guid, &user.name, user.is_client)
                    .await,
            )?;
            ui.display_ok();
        }

        ui.display_newline();
        let binary_name = self.base.binary_name();
        ui.display_text_with_flavor(
            r#"TIP: Use '{BinaryName} target -o "{OrgName}" -s "{SpaceName}"' to target new space"#,
            &[
                ("BinaryName", binary_name.as_str()),
                ("OrgName", org_name.as_str()),
                ("SpaceName", space.name.as_str()),
            ],
        );
        Ok(())
    }
}
