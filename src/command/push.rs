//! `push`: prepare the space, plan each app, then apply the plans while
//! rendering the actor's event streams.

use super::flag::{parse_megabytes, parse_var};
use super::shared::{AppSummaryDisplayer, StagingLogs};
use super::BaseCommand;
use crate::actor::{
    ActualizeStreams, DeploymentStrategy, FlagOverrides, HealthCheckType, ManifestSource,
    PrepareSpaceStreams, PushActor, PushEvent, PushPlan,
};
use crate::error::{ActorError, CommandError};
use crate::ui::ProgressBar;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, info};

const EXPERIMENTAL_WARNING: &str = "This command is in EXPERIMENTAL stage and may change without notice";
const MANIFEST_FILE: &str = "manifest.yml";

#[derive(Debug, Clone, Default, clap::Args)]
pub struct PushArgs {
    /// Application name; omit to push every app in the manifest
    pub app: Option<String>,
    /// Custom buildpack by name or Git URL; repeat for multiple buildpacks
    #[arg(short = 'b', long = "buildpack")]
    pub buildpacks: Vec<String>,
    /// Stack to use (a stack is a pre-built file system, including an operating system)
    #[arg(short = 's', long)]
    pub stack: Option<String>,
    /// Docker image to use
    #[arg(short = 'o', long)]
    pub docker_image: Option<String>,
    /// Repository username; the password comes from CF_DOCKER_PASSWORD or a prompt
    #[arg(long)]
    pub docker_username: Option<String>,
    /// Application health check type
    #[arg(short = 'u', long, value_enum)]
    pub health_check_type: Option<HealthCheckType>,
    /// Time (in seconds) allowed to elapse between starting up an app and the first healthy response
    #[arg(short = 't', long = "app-start-timeout")]
    pub app_start_timeout: Option<u64>,
    /// Valid path on the app for an HTTP health check
    #[arg(long)]
    pub endpoint: Option<String>,
    /// Number of instances
    #[arg(short = 'i', long)]
    pub instances: Option<u32>,
    /// Path to manifest
    #[arg(short = 'f', long)]
    pub manifest: Option<PathBuf>,
    /// Path to a variable substitution file for manifest; can specify multiple times
    #[arg(long = "vars-file")]
    pub vars_files: Vec<PathBuf>,
    /// Variable key value pair for variable substitution, (e.g., name=app1); can specify multiple times
    #[arg(long = "var", value_parser = parse_var)]
    pub vars: Vec<(String, String)>,
    /// Memory limit (e.g. 256M, 1024M, 1G)
    #[arg(short = 'm', long, value_parser = parse_megabytes)]
    pub memory: Option<u64>,
    /// Disk limit (e.g. 256M, 1024M, 1G)
    #[arg(short = 'k', long, value_parser = parse_megabytes)]
    pub disk: Option<u64>,
    /// Ignore manifest file
    #[arg(long)]
    pub no_manifest: bool,
    /// Do not map a route to this app
    #[arg(long)]
    pub no_route: bool,
    /// Do not stage and start the app after pushing
    #[arg(long)]
    pub no_start: bool,
    /// Path to app directory or to a zip file of the contents of the app directory
    #[arg(short = 'p', long)]
    pub path: Option<PathBuf>,
    /// Startup command, set to null to reset to default start command
    #[arg(short = 'c', long)]
    pub start_command: Option<String>,
    /// Deployment strategy
    #[arg(long, value_enum)]
    pub strategy: Option<DeploymentStrategy>,
}

impl PushArgs {
    /// Reject flag combinations before anything is sent to the platform.
    pub fn validate(&self) -> Result<(), CommandError> {
        let conflict = |a: &str, b: &str| {
            Err(CommandError::ArgumentCombination {
                args: vec![a.to_string(), b.to_string()],
            })
        };
        let required = |a: &str, b: &str| {
            Err(CommandError::RequiredFlags {
                arg1: a.to_string(),
                arg2: b.to_string(),
            })
        };
        let docker = self.docker_image.is_some();
        let http = self.health_check_type == Some(HealthCheckType::Http);

        if self.docker_username.is_some() && !docker {
            return required("--docker-image, -o", "--docker-username");
        }
        if docker && !self.buildpacks.is_empty() {
            return conflict("--buildpack, -b", "--docker-image, -o");
        }
        if docker && self.path.is_some() {
            return conflict("--docker-image, -o", "--path, -p");
        }
        if docker && self.stack.is_some() {
            return conflict("--stack, -s", "--docker-image, -o");
        }
        if self.no_manifest && self.manifest.is_some() {
            return conflict("--no-manifest", "--manifest, -f");
        }
        if self.no_manifest && !self.vars_files.is_empty() {
            return conflict("--no-manifest", "--vars-file");
        }
        if self.no_manifest && !self.vars.is_empty() {
            return conflict("--no-manifest", "--vars");
        }
        if http && self.endpoint.is_none() {
            return required("--endpoint", "--health-check-type=http, -u=http");
        }
        if self.endpoint.is_some() && !http {
            return required("--health-check-type=http, -u=http", "--endpoint");
        }
        Ok(())
    }
}

pub struct PushCommand {
    base: BaseCommand,
    push_actor: Arc<dyn PushActor>,
    progress_bar: Arc<dyn ProgressBar>,
    pwd: PathBuf,
}

impl PushCommand {
    pub fn new(
        base: BaseCommand,
        push_actor: Arc<dyn PushActor>,
        progress_bar: Arc<dyn ProgressBar>,
        pwd: PathBuf,
    ) -> Self {
        Self {
            base,
            push_actor,
            progress_bar,
            pwd,
        }
    }

    pub async fn execute(&self, args: &PushArgs) -> Result<(), CommandError> {
        if self.base.config.experimental() {
            self.base.ui.display_warning(EXPERIMENTAL_WARNING, &[]);
        }
        self.base.check_target(true, true)?;
        args.validate()?;

        let org = self.base.targeted_organization();
        let space = self.base.targeted_space();
        let manifest = self.manifest_source(args);
        let overrides = self.flag_overrides(args)?;

        let streams = self
            .push_actor
            .prepare_space(&space.guid, args.app.as_deref(), &manifest, &overrides)
            .await;
        let app_names = self
            .process_prepare_space(streams, args.app.as_deref().unwrap_or_default(), &space.guid)
            .await?;

        self.announce_pushing(&app_names)?;
        self.base.ui.display_text("Getting app info...");
        let plans = self.base.show_warnings(
            self.push_actor
                .conceptualize(&app_names, &space.guid, &org.guid, &self.pwd, &overrides)
                .await,
        )?;

        for plan in plans {
            info!(app = %plan.application.name, "applying push plan");
            let streams = self
                .push_actor
                .actualize(&plan, self.progress_bar.clone())
                .await;
            let plan = self.process_actualize(streams, plan).await?;
            self.restart_and_summarize(&plan).await?;
        }
        Ok(())
    }

    fn manifest_source(&self, args: &PushArgs) -> ManifestSource {
        if args.no_manifest {
            return ManifestSource::default();
        }
        let path = match &args.manifest {
            Some(path) if path.is_dir() => Some(path.join(MANIFEST_FILE)),
            Some(path) => Some(path.clone()),
            None => Some(self.pwd.join(MANIFEST_FILE)).filter(|p| p.is_file()),
        };
        debug!(manifest = ?path, "resolved manifest path");
        ManifestSource {
            path,
            vars_files: args.vars_files.clone(),
            vars: args.vars.clone(),
        }
    }

    fn flag_overrides(&self, args: &PushArgs) -> Result<FlagOverrides, CommandError> {
        let docker_password = match &args.docker_username {
            Some(_) => Some(self.docker_password()?),
            None => None,
        };
        Ok(FlagOverrides {
            buildpacks: args.buildpacks.clone(),
            stack: args.stack.clone(),
            disk: args.disk,
            docker_image: args.docker_image.clone(),
            docker_username: args.docker_username.clone(),
            docker_password,
            health_check_endpoint: args.endpoint.clone(),
            health_check_type: args.health_check_type,
            health_check_timeout: args.app_start_timeout,
            instances: args.instances,
            memory: args.memory,
            no_start: args.no_start,
            provided_app_path: args.path.clone(),
            skip_route_creation: args.no_route,
            start_command: args.start_command.clone(),
            strategy: args.strategy.unwrap_or_default(),
        })
    }

    fn docker_password(&self) -> Result<String, CommandError> {
        let ui = &self.base.ui;
        let password = self.base.config.docker_password();
        if !password.is_empty() {
            ui.display_text("Using docker repository password from environment variable CF_DOCKER_PASSWORD.");
            return Ok(password);
        }
        ui.display_text("Environment variable CF_DOCKER_PASSWORD not set.");
        ui.display_password_prompt("Docker password", &[])
    }

    /// Drain every stream; an actor error is reported once they have all closed.
    async fn process_prepare_space(
        &self,
        streams: PrepareSpaceStreams,
        app_name: &str,
        space_guid: &str,
    ) -> Result<Vec<String>, CommandError> {
        let PrepareSpaceStreams {
            mut app_names,
            mut events,
            mut warnings,
            mut errors,
        } = streams;
        let (mut names_open, mut events_open, mut warnings_open, mut errors_open) =
            (true, true, true, true);
        let mut names = Vec::new();
        let mut failure: Option<ActorError> = None;
        let mut logs = None;

        loop {
            tokio::select! {
                value = app_names.recv(), if names_open => match value {
                    Some(value) => names = value,
                    None => names_open = false,
                },
                value = events.recv(), if events_open => match value {
                    Some(event) => {
                        self.process_event(event, app_name, space_guid, &mut logs).await?;
                    }
                    None => events_open = false,
                },
                value = warnings.recv(), if warnings_open => match value {
                    Some(value) => self.base.ui.display_warnings(&value),
                    None => warnings_open = false,
                },
                value = errors.recv(), if errors_open => match value {
                    Some(err) => failure = Some(err),
                    None => errors_open = false,
                },
                else => break,
            }
        }
        if let Some(logs) = logs {
            logs.stop().await;
        }

        match failure {
            Some(err) => Err(err.into()),
            None => Ok(names),
        }
    }

    /// Render the apply streams; returns the latest plan the actor reported.
    async fn process_actualize(
        &self,
        streams: ActualizeStreams,
        mut plan: PushPlan,
    ) -> Result<PushPlan, CommandError> {
        let ActualizeStreams {
            mut plans,
            mut events,
            mut warnings,
            mut errors,
        } = streams;
        let (mut plans_open, mut events_open, mut warnings_open, mut errors_open) =
            (true, true, true, true);
        let mut complete = false;
        let mut logs = None;
        let app_name = plan.application.name.clone();

        let outcome = loop {
            if complete && !plans_open && !events_open && !warnings_open {
                break Ok(());
            }
            tokio::select! {
                value = plans.recv(), if plans_open => match value {
                    Some(value) => plan = value,
                    None => plans_open = false,
                },
                value = events.recv(), if events_open => match value {
                    Some(event) => {
                        match self.process_event(event, &app_name, &plan.space_guid, &mut logs).await {
                            Ok(done) => complete |= done,
                            Err(err) => break Err(err),
                        }
                    }
                    None => events_open = false,
                },
                value = warnings.recv(), if warnings_open => match value {
                    Some(value) => self.base.ui.display_warnings(&value),
                    None => warnings_open = false,
                },
                value = errors.recv(), if errors_open => match value {
                    Some(err) => break Err(err.into()),
                    None => errors_open = false,
                },
                else => break Ok(()),
            }
        };
        if let Some(logs) = logs {
            logs.stop().await;
        }
        outcome.map(|()| plan)
    }

    /// Print one milestone; returns true once the push of this app is complete.
    async fn process_event(
        &self,
        event: PushEvent,
        app_name: &str,
        space_guid: &str,
        logs: &mut Option<StagingLogs>,
    ) -> Result<bool, CommandError> {
        let ui = &self.base.ui;
        let values = [("AppName", app_name)];
        match event {
            PushEvent::SkippingApplicationCreation => {
                ui.display_text_with_flavor("Updating app {AppName}...", &values)
            }
            PushEvent::CreatingApplication => {
                ui.display_text_with_flavor("Creating app {AppName}...", &values)
            }
            PushEvent::CreatingAndMappingRoutes => ui.display_text("Mapping routes..."),
            PushEvent::CreatingArchive => ui.display_text("Packaging files to upload..."),
            PushEvent::UploadingApplicationWithArchive => {
                ui.display_text("Uploading files...");
                self.progress_bar.ready();
            }
            PushEvent::RetryUpload => ui.display_text("Retrying upload due to an error..."),
            PushEvent::UploadWithArchiveComplete => {
                self.progress_bar.complete();
                ui.display_newline();
                ui.display_text("Waiting for API to complete processing files...");
            }
            PushEvent::StoppingApplication => ui.display_text("Stopping Application..."),
            PushEvent::StoppingApplicationComplete => ui.display_text("Application Stopped"),
            PushEvent::ApplyManifest => ui.display_text("Applying manifest..."),
            PushEvent::ApplyManifestComplete => ui.display_text("Manifest applied"),
            PushEvent::StartingStaging => {
                ui.display_newline();
                ui.display_text("Staging app and tracing logs...");
                // A missing log stream never fails the push.
                match self.base.show_warnings(
                    self.base
                        .actor
                        .get_streaming_logs_for_application_by_name_and_space(app_name, space_guid)
                        .await,
                ) {
                    Ok(stream) => *logs = Some(StagingLogs::spawn(ui.clone(), stream)),
                    Err(e) => debug!(app = %app_name, error = %e, "staging logs unavailable"),
                }
            }
            PushEvent::StagingComplete => {
                if let Some(logs) = logs.take() {
                    logs.stop().await;
                }
            }
            PushEvent::Complete => return Ok(true),
            PushEvent::Other(name) => debug!(event = %name, "unrendered push event"),
        }
        Ok(false)
    }

    fn announce_pushing(&self, app_names: &[String]) -> Result<(), CommandError> {
        let user = self.base.current_user()?;
        let org = self.base.targeted_organization();
        let space = self.base.targeted_space();
        let noun = if app_names.len() > 1 { "apps" } else { "app" };
        let names = app_names.join(", ");
        self.base.ui.display_text_with_flavor(
            &format!(
                "Pushing {} {{AppName}} to org {{OrgName}} / space {{SpaceName}} as {{Username}}...",
                noun
            ),
            &[
                ("AppName", names.as_str()),
                ("OrgName", org.name.as_str()),
                ("SpaceName", space.name.as_str()),
                ("Username", user.name.as_str()),
            ],
        );
        Ok(())
    }

    async fn restart_and_summarize(&self, plan: &PushPlan) -> Result<(), CommandError> {
        let ui = &self.base.ui;
        let app = &plan.application;
        let mut crashed = false;

        if !plan.no_start {
            ui.display_newline();
            ui.display_text_with_flavor(
                "Waiting for app {AppName} to start...",
                &[("AppName", app.name.as_str())],
            );
            match self
                .base
                .show_warnings(self.base.actor.restart_application(&app.guid, false).await)
            {
                Ok(()) => {}
                Err(ActorError::StartupTimeout { .. }) => {
                    return Err(CommandError::StartupTimeout {
                        app_name: app.name.clone(),
                        binary_name: self.base.binary_name(),
                    })
                }
                Err(ActorError::AllInstancesCrashed) => crashed = true,
                Err(err) => return Err(err.into()),
            }
        }

        let summary = self.base.show_warnings(
            self.base
                .actor
                .get_detailed_app_summary(&app.name, &plan.space_guid, true)
                .await,
        )?;
        ui.display_newline();
        AppSummaryDisplayer::new(ui.as_ref()).display(&summary);

        if crashed {
            return Err(CommandError::ApplicationUnableToStart {
                app_name: app.name.clone(),
                binary_name: self.base.binary_name(),
            });
        }
        Ok(())
    }
}
