//! Staging packages and starting applications, shared by stage, restage,
//! start, restart and scale.

use super::{with_poll_warnings, AppSummaryDisplayer};
use crate::actor::{
    Application, DeploymentStrategy, Droplet, LogStream, LogStreamCancel, StagingStreams,
};
use crate::command::BaseCommand;
use crate::error::{ActorError, CommandError};
use crate::ui::Ui;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::{debug, info};

/// Time allowed for the log drain to finish after the stream is cancelled.
const LOG_DRAIN_GRACE: Duration = Duration::from_secs(2);

/// What the caller is doing to the app; decides whether a running app is stopped first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    Start,
    Restart,
    Restage,
}

/// Background printer for staging logs.
pub(crate) struct StagingLogs {
    cancel: LogStreamCancel,
    handle: JoinHandle<()>,
}

impl StagingLogs {
    /// Print staging log lines as they arrive; log errors become warnings.
    pub(crate) fn spawn(ui: Arc<dyn Ui>, stream: LogStream) -> Self {
        let (mut messages, mut errors, cancel) = stream.into_parts();
        let handle = tokio::spawn(async move {
            let (mut messages_open, mut errors_open) = (true, true);
            loop {
                tokio::select! {
                    message = messages.recv(), if messages_open => match message {
                        Some(message) if message.staging() => ui.display_log_message(&message, false),
                        Some(_) => {}
                        None => messages_open = false,
                    },
                    err = errors.recv(), if errors_open => match err {
                        Some(err) => ui.display_warning(&err.to_string(), &[]),
                        None => errors_open = false,
                    },
                    else => break,
                }
            }
            debug!("staging log drain finished");
        });
        Self { cancel, handle }
    }

    /// Stop the producer and wait briefly for already-sent lines to print.
    pub(crate) async fn stop(mut self) {
        self.cancel.cancel();
        if tokio::time::timeout(LOG_DRAIN_GRACE, &mut self.handle)
            .await
            .is_err()
        {
            debug!("staging log drain did not finish, aborting");
            self.handle.abort();
        }
    }
}

pub struct Stager {
    base: BaseCommand,
}

impl Stager {
    pub fn new(base: BaseCommand) -> Self {
        Self { base }
    }

    /// Stage a package while tracing its logs; returns the resulting droplet.
    pub async fn stage_app(
        &self,
        app: &Application,
        package_guid: &str,
    ) -> Result<Droplet, CommandError> {
        let ui = &self.base.ui;
        ui.display_text("Staging app and tracing logs...");

        let logs = self.base.show_warnings(
            self.base
                .actor
                .get_streaming_logs_for_application_by_name_and_space(&app.name, &app.space_guid)
                .await,
        )?;
        let logs = StagingLogs::spawn(ui.clone(), logs);

        info!(app = %app.name, package_guid, "staging package");
        let streams = self
            .base
            .actor
            .stage_package(package_guid, &app.name, &app.space_guid)
            .await;
        let staged = self.drain_staging(streams).await;
        logs.stop().await;

        match staged {
            Err(ActorError::StagingTimeout) => Err(CommandError::StagingTimeout {
                app_name: app.name.clone(),
                binary_name: self.base.binary_name(),
            }),
            other => other.map_err(CommandError::from),
        }
    }

    async fn drain_staging(&self, streams: StagingStreams) -> Result<Droplet, ActorError> {
        let StagingStreams {
            mut droplet,
            mut warnings,
            mut errors,
        } = streams;
        let (mut droplet_open, mut warnings_open, mut errors_open) = (true, true, true);
        let mut staged = None;

        loop {
            tokio::select! {
                value = droplet.recv(), if droplet_open => match value {
                    Some(value) => staged = Some(value),
                    None => {
                        debug!("processing droplet stream closed");
                        droplet_open = false;
                    }
                },
                value = warnings.recv(), if warnings_open => match value {
                    Some(value) => self.base.ui.display_warnings(&value),
                    None => {
                        debug!("processing warnings stream closed");
                        warnings_open = false;
                    }
                },
                value = errors.recv(), if errors_open => match value {
                    Some(err) => return Err(err),
                    None => {
                        debug!("processing error stream closed");
                        errors_open = false;
                    }
                },
                else => break,
            }
        }

        staged.ok_or_else(|| ActorError::Other("staging finished without a droplet".to_string()))
    }

    /// Point the app at `droplet_guid` (when given) and bring it up, then show its summary.
    pub async fn start_app(
        &self,
        app: &Application,
        droplet_guid: Option<&str>,
        strategy: DeploymentStrategy,
        no_wait: bool,
        action: AppAction,
    ) -> Result<(), CommandError> {
        let ui = &self.base.ui;
        let actor = &self.base.actor;

        if strategy == DeploymentStrategy::Rolling {
            ui.display_text_with_flavor(
                "Creating deployment for app {AppName}...",
                &[("AppName", app.name.as_str())],
            );
            let droplet_guid = droplet_guid.unwrap_or_default();
            let deployment_guid = self.base.show_warnings(
                actor
                    .create_deployment_by_application_and_droplet(&app.guid, droplet_guid)
                    .await,
            )?;
            ui.display_text("Waiting for app to deploy...");
            let polled = with_poll_warnings(ui.clone(), |tx| {
                actor.poll_start_for_rolling(app, &deployment_guid, no_wait, tx)
            })
            .await;
            self.translate_poll_error(app, polled)?;
        } else {
            if action != AppAction::Start && app.started() {
                ui.display_text("Stopping app...");
                self.base
                    .show_warnings(actor.stop_application(&app.guid).await)?;
            }
            if let Some(droplet_guid) = droplet_guid {
                self.base.show_warnings(
                    actor
                        .set_application_droplet(&app.guid, droplet_guid)
                        .await,
                )?;
            }
            ui.display_newline();
            ui.display_text("Waiting for app to start...");
            self.base
                .show_warnings(actor.start_application(&app.guid).await)?;
            let polled =
                with_poll_warnings(ui.clone(), |tx| actor.poll_start(app, no_wait, tx)).await;
            self.translate_poll_error(app, polled)?;
        }

        ui.display_newline();
        self.display_summary(&app.name, &app.space_guid).await
    }

    /// Stage the package, then start the app on the new droplet.
    pub async fn stage_and_start(
        &self,
        app: &Application,
        package_guid: &str,
        strategy: DeploymentStrategy,
        no_wait: bool,
        action: AppAction,
    ) -> Result<(), CommandError> {
        let droplet = self.stage_app(app, package_guid).await?;
        self.start_app(app, Some(&droplet.guid), strategy, no_wait, action)
            .await
    }

    pub async fn display_summary(&self, app_name: &str, space_guid: &str) -> Result<(), CommandError> {
        let summary = self.base.show_warnings(
            self.base
                .actor
                .get_detailed_app_summary(app_name, space_guid, false)
                .await,
        )?;
        AppSummaryDisplayer::new(self.base.ui.as_ref()).display(&summary);
        Ok(())
    }

    pub(crate) fn translate_poll_error(
        &self,
        app: &Application,
        polled: Result<(), ActorError>,
    ) -> Result<(), CommandError> {
        match polled {
            Ok(()) => Ok(()),
            Err(ActorError::StartupTimeout { .. }) => Err(CommandError::StartupTimeout {
                app_name: app.name.clone(),
                binary_name: self.base.binary_name(),
            }),
            Err(ActorError::AllInstancesCrashed) => Err(CommandError::ApplicationUnableToStart {
                app_name: app.name.clone(),
                binary_name: self.base.binary_name(),
            }),
            Err(err) => Err(err.into()),
        }
    }
}
