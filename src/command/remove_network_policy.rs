use super::add_network_policy::{announce, NetworkPolicyArgs};
use super::BaseCommand;
use crate::actor::NetworkingActor;
use crate::error::{ActorError, CommandError};
use std::sync::Arc;

pub struct RemoveNetworkPolicyCommand {
    base: BaseCommand,
    networking_actor: Arc<dyn NetworkingActor>,
}

impl RemoveNetworkPolicyCommand {
    pub fn new(base: BaseCommand, networking_actor: Arc<dyn NetworkingActor>) -> Self {
        Self {
            base,
            networking_actor,
        }
    }

    pub async fn execute(&self, args: &NetworkPolicyArgs) -> Result<(), CommandError> {
        let resolved = args.resolve(&self.base).await?;
        announce(&self.base, "Removing", args, &resolved);

        match self.base.show_warnings(
            self.networking_actor
                .remove_network_policy(&resolved.policy)
                .await,
        ) {
            Ok(()) => {}
            Err(ActorError::PolicyDoesNotExist) => {
                self.base.ui.display_text("Policy does not exist.");
            }
            Err(err) => return Err(err.into()),
        }
        self.base.ui.display_ok();
        Ok(())
    }
}
