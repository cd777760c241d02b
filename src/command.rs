//! One module per CLI verb.
//!
//! Every command holds a [`BaseCommand`] and follows the same shape: validate
//! flags, check the target, call actors (displaying each call's warnings before
//! looking at its error), print the outcome.

use crate::actor::{Actor, ActorResult, SharedActor};
use crate::config::{Config, TargetedOrganization, TargetedSpace, User};
use crate::error::{ActorError, CommandError};
use crate::ui::Ui;
use std::sync::Arc;

pub mod add_network_policy;
pub mod apps;
pub mod auth;
pub mod bind_security_group;
pub mod cleanup_outdated_service_bindings;
pub mod create_space;
pub mod delete_label;
pub mod flag;
pub mod login;
pub mod map_route;
pub mod org;
pub mod push;
pub mod remove_network_policy;
pub mod restage;
pub mod restart;
pub mod run_task;
pub mod scale;
pub mod shared;
pub mod space;
pub mod stage;
pub mod start;
pub mod target;
pub mod unbind_security_group;
pub mod unbind_service;
pub mod unmap_route;

#[cfg(test)]
pub(crate) mod fakes;

/// Collaborators every command needs.
#[derive(Clone)]
pub struct BaseCommand {
    pub ui: Arc<dyn Ui>,
    pub config: Arc<dyn Config>,
    pub shared_actor: Arc<dyn SharedActor>,
    pub actor: Arc<dyn Actor>,
}

impl BaseCommand {
    pub fn new(
        ui: Arc<dyn Ui>,
        config: Arc<dyn Config>,
        shared_actor: Arc<dyn SharedActor>,
        actor: Arc<dyn Actor>,
    ) -> Self {
        Self {
            ui,
            config,
            shared_actor,
            actor,
        }
    }

    /// Display the call's warnings, then hand back its result.
    pub fn show_warnings<T>(&self, (result, warnings): ActorResult<T>) -> Result<T, ActorError> {
        self.ui.display_warnings(&warnings);
        result
    }

    pub fn check_target(&self, organization: bool, space: bool) -> Result<(), CommandError> {
        self.shared_actor
            .check_target(organization, space)
            .map_err(CommandError::from)
    }

    pub fn current_user(&self) -> Result<User, CommandError> {
        self.config.current_user()
    }

    pub fn targeted_organization(&self) -> TargetedOrganization {
        self.config.targeted_organization()
    }

    pub fn targeted_space(&self) -> TargetedSpace {
        self.config.targeted_space()
    }

    pub fn binary_name(&self) -> String {
        self.config.binary_name()
    }
}
