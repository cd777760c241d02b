//! Push types: the plan an actor reconciles and the events it reports.

use super::types::{Application, DeploymentStrategy};
use std::path::PathBuf;

/// Milestones reported while preparing a space or applying a plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PushEvent {
    SkippingApplicationCreation,
    CreatingApplication,
    CreatingAndMappingRoutes,
    CreatingArchive,
    UploadingApplicationWithArchive,
    RetryUpload,
    UploadWithArchiveComplete,
    StoppingApplication,
    StoppingApplicationComplete,
    ApplyManifest,
    ApplyManifestComplete,
    StartingStaging,
    StagingComplete,
    Complete,
    /// Anything the command has no rendering for.
    Other(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum HealthCheckType {
    Http,
    Port,
    Process,
}

/// Values from command-line flags that override manifest values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlagOverrides {
    pub buildpacks: Vec<String>,
    pub stack: Option<String>,
    pub disk: Option<u64>,
    pub docker_image: Option<String>,
    pub docker_username: Option<String>,
    pub docker_password: Option<String>,
    pub health_check_endpoint: Option<String>,
    pub health_check_type: Option<HealthCheckType>,
    pub health_check_timeout: Option<u64>,
    pub instances: Option<u32>,
    pub memory: Option<u64>,
    pub no_start: bool,
    pub provided_app_path: Option<PathBuf>,
    pub skip_route_creation: bool,
    pub start_command: Option<String>,
    pub strategy: DeploymentStrategy,
}

/// Where the push actor should read a manifest from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ManifestSource {
    pub path: Option<PathBuf>,
    pub vars_files: Vec<PathBuf>,
    pub vars: Vec<(String, String)>,
}

/// One application's desired state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PushPlan {
    pub application: Application,
    pub space_guid: String,
    pub org_guid: String,
    pub bits_path: Option<PathBuf>,
    pub docker_image: Option<String>,
    pub no_start: bool,
    pub overrides: FlagOverrides,
}
