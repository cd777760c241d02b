use super::BaseCommand;
use crate::actor::{SecurityGroupLifecycle, Space};
use crate::error::CommandError;
use tracing::debug;

pub(crate) const SECURITY_GROUP_TIP: &str =
    "TIP: Changes require an app restart (for running) or restage (for staging) to apply to existing applications.";

#[derive(Debug, Clone, Default, clap::Args)]
pub struct BindSecurityGroupArgs {
    /// Security group name
    pub security_group: String,
    /// Organization name
    pub org: String,
    /// Space name; all spaces in the org when omitted
    #[arg(long)]
    pub space: Option<String>,
    /// Lifecycle phase the group applies to
    #[arg(long, value_enum, default_value_t = SecurityGroupLifecycle::Running)]
    pub lifecycle: SecurityGroupLifecycle,
}

pub struct BindSecurityGroupCommand {
    base: BaseCommand,
}

impl BindSecurityGroupCommand {
    pub fn new(base: BaseCommand) -> Self {
        Self { base }
    }

    pub async fn execute(&self, args: &BindSecurityGroupArgs) -> Result<(), CommandError> {
        self.base.check_target(false, false)?;
        let user = self.base.current_user()?;
        let actor = &self.base.actor;
        let ui = &self.base.ui;

        let security_group = self
            .base
            .show_warnings(actor.get_security_group(&args.security_group).await)?;
        let org = self
            .base
            .show_warnings(actor.get_organization_by_name(&args.org).await)?;
        let lifecycle = args.lifecycle.to_string();

        let spaces = match args.space.as_deref().filter(|s| !s.is_empty()) {
            Some(space_name) => {
                self.announce(&lifecycle, &security_group.name, space_name, &org.name, &user.name);
                let space = self.base.show_warnings(
                    actor
                        .get_space_by_name_and_organization(space_name, &org.guid)
                        .await,
                )?;
                self.bind(&security_group.guid, &space, args.lifecycle).await?;
                vec![]
            }
            None => {
                ui.display_text_with_flavor(
                    "Assigning {lifecycle} security group {security_group} to all spaces in org {organization} as {username}...",
                    &[
                        ("lifecycle", lifecycle.as_str()),
                        ("security_group", security_group.name.as_str()),
                        ("organization", org.name.as_str()),
                        ("username", user.name.as_str()),
                    ],
                );
                let spaces = self
                    .base
                    .show_warnings(actor.get_organization_spaces(&org.guid).await)?;
                if spaces.is_empty() {
                    ui.display_text_with_flavor(
                        "No spaces in org {organization}.",
                        &[("organization", org.name.as_str())],
                    );
                }
                spaces
            }
        };

        for space in &spaces {
            self.announce(&lifecycle, &security_group.name, &space.name, &org.name, &user.name);
            self.bind(&security_group.guid, space, args.lifecycle).await?;
        }

        ui.display_newline();
        ui.display_text(SECURITY_GROUP_TIP);
        Ok(())
    }

    fn announce(&self, lifecycle: &str, security_group: &str, space: &str, org: &str, user: &str) {
        self.base.ui.display_text_with_flavor(
            "Assigning {lifecycle} security group {security_group} to space {space} in org {organization} as {username}...",
            &[
                ("lifecycle", lifecycle),
                ("security_group", security_group),
                ("space", space),
                ("organization", org),
                ("username", user),
            ],
        );
    }

    async fn bind(
        &self,
        security_group_guid: &str,
        space: &Space,
        lifecycle: SecurityGroupLifecycle,
    ) -> Result<(), CommandError> {
        debug!(space = %space.name, %lifecycle, "binding security group");
        self.base.show_warnings(
            self.base
                .actor
                .bind_security_group_to_spaces(security_group_guid, std::slice::from_ref(space), lifecycle)
                .await,
        )?;
        self.base.ui.display_ok();
        Ok(())
    }
}
