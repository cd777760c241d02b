use super::bind_security_group::SECURITY_GROUP_TIP;
use super::BaseCommand;
use crate::actor::SecurityGroupLifecycle;
use crate::error::{ActorError, CommandError};

#[derive(Debug, Clone, Default, clap::Args)]
pub struct UnbindSecurityGroupArgs {
    /// Security group name
    pub security_group: String,
    /// Organization name; the targeted org when omitted
    pub org: Option<String>,
    /// Space name; the targeted space when omitted
    pub space: Option<String>,
    /// Lifecycle phase the group applies to
    #[arg(long, value_enum, default_value_t = SecurityGroupLifecycle::Running)]
    pub lifecycle: SecurityGroupLifecycle,
}

pub struct UnbindSecurityGroupCommand {
    base: BaseCommand,
}

impl UnbindSecurityGroupCommand {
    pub fn new(base: BaseCommand) -> Self {
        Self { base }
    }

    pub async fn execute(&self, args: &UnbindSecurityGroupArgs) -> Result<(), CommandError> {
        let org = args.org.as_deref().filter(|o| !o.is_empty());
        let space = args.space.as_deref().filter(|s| !s.is_empty());
        let (org_name, space_name) = match (org, space) {
            (Some(org), Some(space)) => {
                self.base.check_target(false, false)?;
                (org.to_string(), space.to_string())
            }
            (None, None) => {
                self.base.check_target(true, true)?;
                (
                    self.base.targeted_organization().name,
                    self.base.targeted_space().name,
                )
            }
            _ => return Err(CommandError::SecurityGroupOrgSpaceIncomplete),
        };
        let user = self.base.current_user()?;
        let ui = &self.base.ui;

        ui.display_text_with_flavor(
            "Removing security group {security_group} from org {organization} / space {space} as {username}...",
            &[
                ("security_group", args.security_group.as_str()),
                ("organization", org_name.as_str()),
                ("space", space_name.as_str()),
                ("username", user.name.as_str()),
            ],
        );

        let lifecycle = args.lifecycle.to_string();
        match self.base.show_warnings(
            self.base
                .actor
                .unbind_security_group(&args.security_group, &org_name, &space_name, args.lifecycle)
                .await,
        ) {
            Ok(()) => {}
            Err(ActorError::SecurityGroupNotBound { .. }) => ui.display_warning(
                "Security group {security_group} not bound to space {space} for lifecycle phase '{lifecycle}'.",
                &[
                    ("security_group", args.security_group.as_str()),
                    ("space", space_name.as_str()),
                    ("lifecycle", lifecycle.as_str()),
                ],
            ),
            Err(err) => return Err(err.into()),
        }

        ui.display_ok();
        ui.display_newline();
        ui.display_text(SECURITY_GROUP_TIP);
        Ok(())
    }
}
