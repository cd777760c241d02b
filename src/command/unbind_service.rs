use super::shared::{delete_service_binding, display_unbinding_in_progress};
use super::BaseCommand;
use crate::actor::ServiceCredentialBinding;
use crate::error::{ActorError, CommandError};

#[derive(Debug, Clone, Default, clap::Args)]
pub struct UnbindServiceArgs {
    /// Application name
    pub app: String,
    /// Service instance name
    pub service_instance: String,
    /// Only delete the binding with this GUID
    #[arg(long)]
    pub guid: Option<String>,
    /// Wait for the operation to complete
    #[arg(short = 'w', long)]
    pub wait: bool,
}

pub struct UnbindServiceCommand {
    base: BaseCommand,
}

impl UnbindServiceCommand {
    pub fn new(base: BaseCommand) -> Self {
        Self { base }
    }

    pub async fn execute(&self, args: &UnbindServiceArgs) -> Result<(), CommandError> {
        self.base.check_target(true, true)?;
        let user = self.base.current_user()?;
        let org = self.base.targeted_organization();
        let space = self.base.targeted_space();
        let ui = &self.base.ui;

        ui.display_text_with_flavor(
            "Unbinding app {AppName} from service {ServiceInstanceName} in org {OrgName} / space {SpaceName} as {Username}...",
            &[
                ("AppName", args.app.as_str()),
                ("ServiceInstanceName", args.service_instance.as_str()),
                ("OrgName", org.name.as_str()),
                ("SpaceName", space.name.as_str()),
                ("Username", user.name.as_str()),
            ],
        );

        let listed = self.base.show_warnings(
            self.base
                .actor
                .list_service_app_bindings(&space.guid, &args.service_instance, &args.app)
                .await,
        );
        let bindings: Vec<ServiceCredentialBinding> = match listed {
            Ok(bindings) => bindings
                .into_iter()
                .filter(|b| args.guid.as_deref().map_or(true, |guid| b.guid == guid))
                .collect(),
            Err(ActorError::ServiceBindingNotFound) => Vec::new(),
            Err(err) => return Err(err.into()),
        };

        if bindings.is_empty() {
            ui.display_text_with_flavor(
                "Binding between {ServiceInstanceName} and {AppName} does not exist",
                &[
                    ("ServiceInstanceName", args.service_instance.as_str()),
                    ("AppName", args.app.as_str()),
                ],
            );
            ui.display_ok();
            return Ok(());
        }

        for binding in &bindings {
            if !delete_service_binding(&self.base, &binding.guid, args.wait).await? {
                display_unbinding_in_progress(&self.base, &args.service_instance);
            }
        }
        Ok(())
    }
}
