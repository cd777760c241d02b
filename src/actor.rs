//! Actor contracts.
//!
//! Commands never talk to the platform API directly; they call these traits.
//! Implementations live outside this crate except [`ConfigSharedActor`],
//! which answers target checks from the session config.
//!
//! Most methods return `(Result<T, ActorError>, Warnings)` so warnings survive
//! failures. Long-running operations return channel bundles from [`stream`].

use crate::error::ActorError;
use async_trait::async_trait;
use std::path::Path;
use std::sync::Arc;
use tokio::sync::mpsc;

pub mod push;
mod shared;
pub mod stream;
pub mod types;

pub use push::{FlagOverrides, HealthCheckType, ManifestSource, PushEvent, PushPlan};
pub use shared::ConfigSharedActor;
pub use stream::{
    closed_receiver, ActualizeStreams, JobStream, LogStream, LogStreamCancel,
    PrepareSpaceStreams, StagingStreams,
};
pub use types::*;

use crate::ui::ProgressBar;

/// Checks that hold for every command.
pub trait SharedActor: Send + Sync {
    /// Fails when not logged in, or when an org/space is required but not targeted.
    fn check_target(&self, check_organization: bool, check_space: bool) -> Result<(), ActorError>;
}

/// Platform operations used by commands.
#[async_trait]
pub trait Actor: Send + Sync {
    // Endpoint and authentication
    async fn set_target(&self, settings: TargetSettings) -> ActorResult<()>;
    async fn get_login_prompts(&self) -> Result<Vec<AuthPrompt>, ActorError>;
    async fn authenticate(
        &self,
        credentials: &[(String, String)],
        origin: &str,
        grant_type: GrantType,
    ) -> Result<(), ActorError>;
    fn uaa_api_version(&self) -> String;
    fn cloud_controller_api_version(&self) -> String;

    // Organizations and spaces
    async fn get_organization_by_name(&self, name: &str) -> ActorResult<Organization>;
    async fn get_organizations(&self, label_selector: &str) -> ActorResult<Vec<Organization>>;
    async fn get_organization_spaces(&self, org_guid: &str) -> ActorResult<Vec<Space>>;
    async fn get_organization_summary_by_name(&self, name: &str)
        -> ActorResult<OrganizationSummary>;
    async fn get_space_by_name_and_organization(
        &self,
        space_name: &str,
        org_guid: &str,
    ) -> ActorResult<Space>;
    async fn get_space_summary_by_name_and_organization(
        &self,
        space_name: &str,
        org_guid: &str,
    ) -> ActorResult<SpaceSummary>;
    async fn create_space(&self, space_name: &str, org_guid: &str) -> ActorResult<Space>;
    async fn apply_space_quota_by_name(
        &self,
        quota_name: &str,
        space_guid: &str,
        org_guid: &str,
    ) -> ActorResult<()>;
    async fn create_space_role(
        &self,
        role: &str,
        org_guid: &str,
        space_guid: &str,
        username: &str,
        is_client: bool,
    ) -> ActorResult<()>;

    // Applications
    async fn get_application_by_name_and_space(
        &self,
        app_name: &str,
        space_guid: &str,
    ) -> ActorResult<Application>;
    async fn get_app_summaries_for_space(
        &self,
        space_guid: &str,
        label_selector: &str,
    ) -> ActorResult<Vec<ApplicationSummary>>;
    async fn get_detailed_app_summary(
        &self,
        app_name: &str,
        space_guid: &str,
        with_obfuscated_values: bool,
    ) -> ActorResult<DetailedApplicationSummary>;
    async fn get_newest_ready_package_for_application(
        &self,
        app: &Application,
    ) -> ActorResult<Package>;
    async fn stage_package(
        &self,
        package_guid: &str,
        app_name: &str,
        space_guid: &str,
    ) -> StagingStreams;
    async fn get_streaming_logs_for_application_by_name_and_space(
        &self,
        app_name: &str,
        space_guid: &str,
    ) -> ActorResult<LogStream>;
    async fn set_application_droplet(&self, app_guid: &str, droplet_guid: &str)
        -> ActorResult<()>;
    async fn start_application(&self, app_guid: &str) -> ActorResult<()>;
    async fn stop_application(&self, app_guid: &str) -> ActorResult<()>;
    async fn restart_application(&self, app_guid: &str, no_wait: bool) -> ActorResult<()>;
    /// Waits for instances to start; warnings stream out while polling.
    async fn poll_start(
        &self,
        app: &Application,
        no_wait: bool,
        warnings: mpsc::Sender<Warnings>,
    ) -> Result<(), ActorError>;
    async fn create_deployment_by_application_and_droplet(
        &self,
        app_guid: &str,
        droplet_guid: &str,
    ) -> ActorResult<String>;
    async fn poll_start_for_rolling(
        &self,
        app: &Application,
        deployment_guid: &str,
        no_wait: bool,
        warnings: mpsc::Sender<Warnings>,
    ) -> Result<(), ActorError>;
    async fn get_process_by_type_and_application(
        &self,
        process_type: &str,
        app_guid: &str,
    ) -> ActorResult<Process>;
    async fn scale_process_by_application(
        &self,
        app_guid: &str,
        scale: &ProcessScale,
    ) -> ActorResult<()>;
    async fn run_task(&self, app_guid: &str, task: &Task) -> ActorResult<Task>;

    // Routes and domains
    async fn get_domain_by_name(&self, name: &str) -> ActorResult<Domain>;
    async fn get_route_by_attributes(
        &self,
        domain: &Domain,
        hostname: &str,
        path: &str,
        port: Option<u16>,
    ) -> ActorResult<Route>;
    async fn create_route(
        &self,
        space_guid: &str,
        domain_name: &str,
        hostname: &str,
        path: &str,
        port: Option<u16>,
    ) -> ActorResult<Route>;
    async fn get_route_destination_by_app_guid(
        &self,
        route: &Route,
        app_guid: &str,
    ) -> ActorResult<RouteDestination>;
    async fn map_route(&self, route_guid: &str, app_guid: &str, app_protocol: &str)
        -> ActorResult<()>;
    async fn unmap_route(&self, route_guid: &str, destination_guid: &str) -> ActorResult<()>;

    // Security groups
    async fn get_security_group(&self, name: &str) -> ActorResult<SecurityGroup>;
    async fn bind_security_group_to_spaces(
        &self,
        security_group_guid: &str,
        spaces: &[Space],
        lifecycle: SecurityGroupLifecycle,
    ) -> ActorResult<()>;
    async fn unbind_security_group(
        &self,
        security_group_name: &str,
        org_name: &str,
        space_name: &str,
        lifecycle: SecurityGroupLifecycle,
    ) -> ActorResult<()>;

    // Labels
    async fn update_labels(&self, resource: &LabelResource, labels: &LabelChanges)
        -> ActorResult<()>;

    // Service bindings
    async fn list_app_bindings(
        &self,
        space_guid: &str,
        app_name: &str,
    ) -> ActorResult<Vec<ServiceCredentialBinding>>;
    async fn list_service_app_bindings(
        &self,
        space_guid: &str,
        service_instance_name: &str,
        app_name: &str,
    ) -> ActorResult<Vec<ServiceCredentialBinding>>;
    async fn delete_service_app_binding(&self, binding_guid: &str) -> ActorResult<JobStream>;
    async fn get_service_instance_by_guid(&self, guid: &str) -> ActorResult<ServiceInstance>;
}

/// Container networking policies.
#[async_trait]
pub trait NetworkingActor: Send + Sync {
    async fn add_network_policy(&self, policy: &NetworkPolicy) -> ActorResult<()>;
    async fn remove_network_policy(&self, policy: &NetworkPolicy) -> ActorResult<()>;
}

/// Push orchestration: space preparation, planning and reconciliation.
#[async_trait]
pub trait PushActor: Send + Sync {
    async fn prepare_space(
        &self,
        space_guid: &str,
        app_name: Option<&str>,
        manifest: &ManifestSource,
        overrides: &FlagOverrides,
    ) -> PrepareSpaceStreams;
    async fn conceptualize(
        &self,
        app_names: &[String],
        space_guid: &str,
        org_guid: &str,
        current_dir: &Path,
        overrides: &FlagOverrides,
    ) -> ActorResult<Vec<PushPlan>>;
    async fn actualize(&self, plan: &PushPlan, progress_bar: Arc<dyn ProgressBar>)
        -> ActualizeStreams;
}
