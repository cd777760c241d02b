use super::SharedActor;
use crate::config::Config;
use crate::error::ActorError;
use std::sync::Arc;

/// Target checks answered from session config alone.
pub struct ConfigSharedActor {
    config: Arc<dyn Config>,
}

impl ConfigSharedActor {
    pub fn new(config: Arc<dyn Config>) -> Self {
        Self { config }
    }

    pub fn is_logged_in(&self) -> bool {
        !self.config.access_token().is_empty() || !self.config.refresh_token().is_empty()
    }
}

impl SharedActor for ConfigSharedActor {
    fn check_target(&self, check_organization: bool, check_space: bool) -> Result<(), ActorError> {
        let binary_name = self.config.binary_name();
        if !self.is_logged_in() {
            return Err(ActorError::NotLoggedIn { binary_name });
        }
        if check_organization && !self.config.has_targeted_organization() {
            return Err(ActorError::NoOrganizationTargeted { binary_name });
        }
        if check_space && !self.config.has_targeted_space() {
            return Err(ActorError::NoSpaceTargeted { binary_name });
        }
        Ok(())
    }
}
