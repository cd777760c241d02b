use super::BaseCommand;
use crate::actor::Space;
use crate::error::{ActorError, CommandError};
use tracing::debug;

#[derive(Debug, Clone, Default, clap::Args)]
pub struct TargetArgs {
    /// Organization
    #[arg(short = 'o', long = "org")]
    pub org: Option<String>,
    /// Space
    #[arg(short = 's', long = "space")]
    pub space: Option<String>,
}

pub struct TargetCommand {
    base: BaseCommand,
}

impl TargetCommand {
    pub fn new(base: BaseCommand) -> Self {
        Self { base }
    }

    pub async fn execute(&self, args: &TargetArgs) -> Result<(), CommandError> {
        self.base.check_target(false, false)?;
        let user = self.base.current_user()?;

        let org = args.org.as_deref().filter(|o| !o.is_empty());
        let space = args.space.as_deref().filter(|s| !s.is_empty());

        if let Some(org) = org {
            if let Err(err) = self.target_organization(org, space.is_none()).await {
                self.base.config.unset_organization_and_space_information();
                return Err(err);
            }
        }

        if let Some(space) = space {
            if !self.base.config.has_targeted_organization() {
                return Err(ActorError::NoOrganizationTargeted {
                    binary_name: self.base.binary_name(),
                }
                .into());
            }
            if let Err(err) = self.target_space(space).await {
                self.base.config.unset_space_information();
                return Err(err);
            }
        }

        self.display_target(&user.name);
        Ok(())
    }

    /// Target the org and forget the space; a lone space is targeted when none was asked for.
    async fn target_organization(&self, name: &str, auto_target_space: bool) -> Result<(), CommandError> {
        let config = &self.base.config;
        let org = self
            .base
            .show_warnings(self.base.actor.get_organization_by_name(name).await)?;
        config.set_organization_information(&org.guid, &org.name);
        config.unset_space_information();

        if !auto_target_space {
            return Ok(());
        }
        let spaces = self
            .base
            .show_warnings(self.base.actor.get_organization_spaces(&org.guid).await)?;
        if let [space] = spaces.as_slice() {
            debug!(space = %space.name, "auto-targeting only space in org");
            self.set_space(space);
        }
        Ok(())
    }

    async fn target_space(&self, name: &str) -> Result<(), CommandError> {
        let org_guid = self.base.targeted_organization().guid;
        let space = self.base.show_warnings(
            self.base
                .actor
                .get_space_by_name_and_organization(name, &org_guid)
                .await,
        )?;
        self.set_space(&space);
        Ok(())
    }

    fn set_space(&self, space: &Space) {
        self.base
            .config
            .set_space_information(&space.guid, &space.name, space.allow_ssh);
    }

    fn display_target(&self, user_name: &str) {
        let config = &self.base.config;
        let binary_name = self.base.binary_name();
        let mut rows = vec![
            ("api endpoint:".to_string(), config.target()),
            ("api version:".to_string(), config.api_version()),
            ("user:".to_string(), user_name.to_string()),
        ];

        if !config.has_targeted_organization() {
            self.base.ui.display_key_value_table("", &rows, 3);
            let target_command = format!("{} target", binary_name);
            self.base.ui.display_text_with_flavor(
                "No org or space targeted, use '{CFTargetCommand} -o ORG -s SPACE'",
                &[("CFTargetCommand", target_command.as_str())],
            );
            return;
        }
        rows.push(("org:".to_string(), config.targeted_organization().name));

        if !config.has_targeted_space() {
            self.base.ui.display_key_value_table("", &rows, 3);
            let target_command = format!("{} target", binary_name);
            self.base.ui.display_text_with_flavor(
                "No space targeted, use '{CFTargetCommand} -s SPACE'",
                &[("CFTargetCommand", target_command.as_str())],
            );
            return;
        }
        rows.push(("space:".to_string(), config.targeted_space().name));
        self.base.ui.display_key_value_table("", &rows, 3);
    }
}
