//! Recording fakes for command tests.
//!
//! Each actor method is backed by a [`Stub`]: it records the call's arguments
//! and answers with the next queued reply, or a default success once the queue
//! is empty.

use super::BaseCommand;
use crate::actor::*;
use crate::config::{Config, TargetInformation, TargetedOrganization, TargetedSpace, User};
use crate::error::{ActorError, CommandError};
use crate::ui::{BufferedUi, ProgressBar};
use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

/// Reply a stub gives when nothing is queued.
pub(crate) trait FakeReply {
    fn fake_default() -> Self;
}

impl<T: Default> FakeReply for ActorResult<T> {
    fn fake_default() -> Self {
        (Ok(T::default()), Vec::new())
    }
}

impl<T: Default> FakeReply for Result<T, ActorError> {
    fn fake_default() -> Self {
        Ok(T::default())
    }
}

impl FakeReply for StagingStreams {
    fn fake_default() -> Self {
        Self::default()
    }
}

impl FakeReply for PrepareSpaceStreams {
    fn fake_default() -> Self {
        Self::default()
    }
}

impl FakeReply for ActualizeStreams {
    fn fake_default() -> Self {
        Self::default()
    }
}

impl FakeReply for String {
    fn fake_default() -> Self {
        String::new()
    }
}

pub(crate) struct Stub<A, R> {
    calls: Mutex<Vec<A>>,
    queued: Mutex<VecDeque<R>>,
}

impl<A, R: FakeReply> Default for Stub<A, R> {
    fn default() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            queued: Mutex::new(VecDeque::new()),
        }
    }
}

impl<A: Clone, R: FakeReply> Stub<A, R> {
    /// Queue the reply for the next unanswered call.
    pub fn push(&self, reply: R) {
        self.queued.lock().push_back(reply);
    }

    pub fn call(&self, args: A) -> R {
        self.calls.lock().push(args);
        self.queued
            .lock()
            .pop_front()
            .unwrap_or_else(R::fake_default)
    }

    pub fn calls(&self) -> Vec<A> {
        self.calls.lock().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().len()
    }
}

fn s(value: &str) -> String {
    value.to_string()
}

#[derive(Default)]
pub(crate) struct FakeSharedActor {
    pub check_target: Stub<(bool, bool), Result<(), ActorError>>,
}

impl SharedActor for FakeSharedActor {
    fn check_target(&self, check_organization: bool, check_space: bool) -> Result<(), ActorError> {
        self.check_target.call((check_organization, check_space))
    }
}

#[derive(Default)]
pub(crate) struct FakeActor {
    pub set_target: Stub<TargetSettings, ActorResult<()>>,
    pub get_login_prompts: Stub<(), Result<Vec<AuthPrompt>, ActorError>>,
    pub authenticate: Stub<(Vec<(String, String)>, String, GrantType), Result<(), ActorError>>,
    pub uaa_api_version: Stub<(), String>,
    pub cloud_controller_api_version: Stub<(), String>,

    pub get_organization_by_name: Stub<String, ActorResult<Organization>>,
    pub get_organizations: Stub<String, ActorResult<Vec<Organization>>>,
    pub get_organization_spaces: Stub<String, ActorResult<Vec<Space>>>,
    pub get_organization_summary_by_name: Stub<String, ActorResult<OrganizationSummary>>,
    pub get_space_by_name_and_organization: Stub<(String, String), ActorResult<Space>>,
    pub get_space_summary_by_name_and_organization: Stub<(String, String), ActorResult<SpaceSummary>>,
    pub create_space: Stub<(String, String), ActorResult<Space>>,
    pub apply_space_quota_by_name: Stub<(String, String, String), ActorResult<()>>,
    pub create_space_role: Stub<(String, String, String, String, bool), ActorResult<()>>,

    pub get_application_by_name_and_space: Stub<(String, String), ActorResult<Application>>,
    pub get_app_summaries_for_space: Stub<(String, String), ActorResult<Vec<ApplicationSummary>>>,
    pub get_detailed_app_summary: Stub<(String, String, bool), ActorResult<DetailedApplicationSummary>>,
    pub get_newest_ready_package_for_application: Stub<String, ActorResult<Package>>,
    pub stage_package: Stub<(String, String, String), StagingStreams>,
    pub get_streaming_logs_for_application_by_name_and_space: Stub<(String, String), ActorResult<LogStream>>,
    pub set_application_droplet: Stub<(String, String), ActorResult<()>>,
    pub start_application: Stub<String, ActorResult<()>>,
    pub stop_application: Stub<String, ActorResult<()>>,
    pub restart_application: Stub<(String, bool), ActorResult<()>>,
    pub poll_start: Stub<(String, bool), Result<(), ActorError>>,
    pub create_deployment_by_application_and_droplet: Stub<(String, String), ActorResult<String>>,
    pub poll_start_for_rolling: Stub<(String, String, bool), Result<(), ActorError>>,
    pub get_process_by_type_and_application: Stub<(String, String), ActorResult<Process>>,
    pub scale_process_by_application: Stub<(String, ProcessScale), ActorResult<()>>,
    pub run_task: Stub<(String, Task), ActorResult<Task>>,

    pub get_domain_by_name: Stub<String, ActorResult<Domain>>,
    pub get_route_by_attributes: Stub<(String, String, String, Option<u16>), ActorResult<Route>>,
    pub create_route: Stub<(String, String, String, String, Option<u16>), ActorResult<Route>>,
    pub get_route_destination_by_app_guid: Stub<(String, String), ActorResult<RouteDestination>>,
    pub map_route: Stub<(String, String, String), ActorResult<()>>,
    pub unmap_route: Stub<(String, String), ActorResult<()>>,

    pub get_security_group: Stub<String, ActorResult<SecurityGroup>>,
    pub bind_security_group_to_spaces: Stub<(String, Vec<Space>, SecurityGroupLifecycle), ActorResult<()>>,
    pub unbind_security_group: Stub<(String, String, String, SecurityGroupLifecycle), ActorResult<()>>,

    pub update_labels: Stub<(LabelResource, LabelChanges), ActorResult<()>>,

    pub list_app_bindings: Stub<(String, String), ActorResult<Vec<ServiceCredentialBinding>>>,
    pub list_service_app_bindings: Stub<(String, String, String), ActorResult<Vec<ServiceCredentialBinding>>>,
    pub delete_service_app_binding: Stub<String, ActorResult<JobStream>>,
    pub get_service_instance_by_guid: Stub<String, ActorResult<ServiceInstance>>,

    poll_warnings: Mutex<Vec<Warnings>>,
}

impl FakeActor {
    /// Warnings the start pollers emit on their channel before returning.
    pub fn set_poll_warnings(&self, warnings: Vec<Warnings>) {
        *self.poll_warnings.lock() = warnings;
    }

    async fn emit_poll_warnings(&self, tx: mpsc::Sender<Warnings>) {
        let warnings = self.poll_warnings.lock().clone();
        for batch in warnings {
            let _ = tx.send(batch).await;
        }
    }
}

#[async_trait]
impl Actor for FakeActor {
    async fn set_target(&self, settings: TargetSettings) -> ActorResult<()> {
        self.set_target.call(settings)
    }

    async fn get_login_prompts(&self) -> Result<Vec<AuthPrompt>, ActorError> {
        self.get_login_prompts.call(())
    }

    async fn authenticate(
        &self,
        credentials: &[(String, String)],
        origin: &str,
        grant_type: GrantType,
    ) -> Result<(), ActorError> {
        self.authenticate
            .call((credentials.to_vec(), s(origin), grant_type))
    }

    fn uaa_api_version(&self) -> String {
        self.uaa_api_version.call(())
    }

    fn cloud_controller_api_version(&self) -> String {
        self.cloud_controller_api_version.call(())
    }

    async fn get_organization_by_name(&self, name: &str) -> ActorResult<Organization> {
        self.get_organization_by_name.call(s(name))
    }

    async fn get_organizations(&self, label_selector: &str) -> ActorResult<Vec<Organization>> {
        self.get_organizations.call(s(label_selector))
    }

    async fn get_organization_spaces(&self, org_guid: &str) -> ActorResult<Vec<Space>> {
        self.get_organization_spaces.call(s(org_guid))
    }

    async fn get_organization_summary_by_name(
        &self,
        name: &str,
    ) -> ActorResult<OrganizationSummary> {
        self.get_organization_summary_by_name.call(s(name))
    }

    async fn get_space_by_name_and_organization(
        &self,
        space_name: &str,
        org_guid: &str,
    ) -> ActorResult<Space> {
        self.get_space_by_name_and_organization
            .call((s(space_name), s(org_guid)))
    }

    async fn get_space_summary_by_name_and_organization(
        &self,
        space_name: &str,
        org_guid: &str,
    ) -> ActorResult<SpaceSummary> {
        self.get_space_summary_by_name_and_organization
            .call((s(space_name), s(org_guid)))
    }

    async fn create_space(&self, space_name: &str, org_guid: &str) -> ActorResult<Space> {
        self.create_space.call((s(space_name), s(org_guid)))
    }

    async fn apply_space_quota_by_name(
        &self,
        quota_name: &str,
        space_guid: &str,
        org_guid: &str,
    ) -> ActorResult<()> {
        self.apply_space_quota_by_name
            .call((s(quota_name), s(space_guid), s(org_guid)))
    }

    async fn create_space_role(
        &self,
        role: &str,
        org_guid: &str,
        space_guid: &str,
        username: &str,
        is_client: bool,
    ) -> ActorResult<()> {
        self.create_space_role
            .call((s(role), s(org_guid), s(space_guid), s(username), is_client))
    }

    async fn get_application_by_name_and_space(
        &self,
        app_name: &str,
        space_guid: &str,
    ) -> ActorResult<Application> {
        self.get_application_by_name_and_space
            .call((s(app_name), s(space_guid)))
    }

    async fn get_app_summaries_for_space(
        &self,
        space_guid: &str,
        label_selector: &str,
    ) -> ActorResult<Vec<ApplicationSummary>> {
        self.get_app_summaries_for_space
            .call((s(space_guid), s(label_selector)))
    }

    async fn get_detailed_app_summary(
        &self,
        app_name: &str,
        space_guid: &str,
        with_obfuscated_values: bool,
    ) -> ActorResult<DetailedApplicationSummary> {
        self.get_detailed_app_summary
            .call((s(app_name), s(space_guid), with_obfuscated_values))
    }

    async fn get_newest_ready_package_for_application(
        &self,
        app: &Application,
    ) -> ActorResult<Package> {
        self.get_newest_ready_package_for_application
            .call(app.guid.clone())
    }

    async fn stage_package(
        &self,
        package_guid: &str,
        app_name: &str,
        space_guid: &str,
    ) -> StagingStreams {
        self.stage_package
            .call((s(package_guid), s(app_name), s(space_guid)))
    }

    async fn get_streaming_logs_for_application_by_name_and_space(
        &self,
        app_name: &str,
        space_guid: &str,
    ) -> ActorResult<LogStream> {
        self.get_streaming_logs_for_application_by_name_and_space
            .call((s(app_name), s(space_guid)))
    }

    async fn set_application_droplet(
        &self,
        app_guid: &str,
        droplet_guid: &str,
    ) -> ActorResult<()> {
        self.set_application_droplet
            .call((s(app_guid), s(droplet_guid)))
    }

    async fn start_application(&self, app_guid: &str) -> ActorResult<()> {
        self.start_application.call(s(app_guid))
    }

    async fn stop_application(&self, app_guid: &str) -> ActorResult<()> {
        self.stop_application.call(s(app_guid))
    }

    async fn restart_application(&self, app_guid: &str, no_wait: bool) -> ActorResult<()> {
        self.restart_application.call((s(app_guid), no_wait))
    }

    async fn poll_start(
        &self,
        app: &Application,
        no_wait: bool,
        warnings: mpsc::Sender<Warnings>,
    ) -> Result<(), ActorError> {
        self.emit_poll_warnings(warnings).await;
        self.poll_start.call((app.guid.clone(), no_wait))
    }

    async fn create_deployment_by_application_and_droplet(
        &self,
        app_guid: &str,
        droplet_guid: &str,
    ) -> ActorResult<String> {
        self.create_deployment_by_application_and_droplet
            .call((s(app_guid), s(droplet_guid)))
    }

    async fn poll_start_for_rolling(
        &self,
        app: &Application,
        deployment_guid: &str,
        no_wait: bool,
        warnings: mpsc::Sender<Warnings>,
    ) -> Result<(), ActorError> {
        self.emit_poll_warnings(warnings).await;
        self.poll_start_for_rolling
            .call((app.guid.clone(), s(deployment_guid), no_wait))
    }

    async fn get_process_by_type_and_application(
        &self,
        process_type: &str,
        app_guid: &str,
    ) -> ActorResult<Process> {
        self.get_process_by_type_and_application
            .call((s(process_type), s(app_guid)))
    }

    async fn scale_process_by_application(
        &self,
        app_guid: &str,
        scale: &ProcessScale,
    ) -> ActorResult<()> {
        self.scale_process_by_application
            .call((s(app_guid), scale.clone()))
    }

    async fn run_task(&self, app_guid: &str, task: &Task) -> ActorResult<Task> {
        self.run_task.call((s(app_guid), task.clone()))
    }

    async fn get_domain_by_name(&self, name: &str) -> ActorResult<Domain> {
        self.get_domain_by_name.call(s(name))
    }

    async fn get_route_by_attributes(
        &self,
        domain: &Domain,
        hostname: &str,
        path: &str,
        port: Option<u16>,
    ) -> ActorResult<Route> {
        self.get_route_by_attributes
            .call((domain.name.clone(), s(hostname), s(path), port))
    }

    async fn create_route(
        &self,
        space_guid: &str,
        domain_name: &str,
        hostname: &str,
        path: &str,
        port: Option<u16>,
    ) -> ActorResult<Route> {
        self.create_route
            .call((s(space_guid), s(domain_name), s(hostname), s(path), port))
    }

    async fn get_route_destination_by_app_guid(
        &self,
        route: &Route,
        app_guid: &str,
    ) -> ActorResult<RouteDestination> {
        self.get_route_destination_by_app_guid
            .call((route.guid.clone(), s(app_guid)))
    }

    async fn map_route(
        &self,
        route_guid: &str,
        app_guid: &str,
        app_protocol: &str,
    ) -> ActorResult<()> {
        self.map_route
            .call((s(route_guid), s(app_guid), s(app_protocol)))
    }

    async fn unmap_route(&self, route_guid: &str, destination_guid: &str) -> ActorResult<()> {
        self.unmap_route.call((s(route_guid), s(destination_guid)))
    }

    async fn get_security_group(&self, name: &str) -> ActorResult<SecurityGroup> {
        self.get_security_group.call(s(name))
    }

    async fn bind_security_group_to_spaces(
        &self,
        security_group_guid: &str,
        spaces: &[Space],
        lifecycle: SecurityGroupLifecycle,
    ) -> ActorResult<()> {
        self.bind_security_group_to_spaces
            .call((s(security_group_guid), spaces.to_vec(), lifecycle))
    }

    async fn unbind_security_group(
        &self,
        security_group_name: &str,
        org_name: &str,
        space_name: &str,
        lifecycle: SecurityGroupLifecycle,
    ) -> ActorResult<()> {
        self.unbind_security_group.call((
            s(security_group_name),
            s(org_name),
            s(space_name),
            lifecycle,
        ))
    }

    async fn update_labels(
        &self,
        resource: &LabelResource,
        labels: &LabelChanges,
    ) -> ActorResult<()> {
        self.update_labels.call((resource.clone(), labels.clone()))
    }

    async fn list_app_bindings(
        &self,
        space_guid: &str,
        app_name: &str,
    ) -> ActorResult<Vec<ServiceCredentialBinding>> {
        self.list_app_bindings.call((s(space_guid), s(app_name)))
    }

    async fn list_service_app_bindings(
        &self,
        space_guid: &str,
        service_instance_name: &str,
        app_name: &str,
    ) -> ActorResult<Vec<ServiceCredentialBinding>> {
        self.list_service_app_bindings
            .call((s(space_guid), s(service_instance_name), s(app_name)))
    }

    async fn delete_service_app_binding(&self, binding_guid: &str) -> ActorResult<JobStream> {
        self.delete_service_app_binding.call(s(binding_guid))
    }

    async fn get_service_instance_by_guid(&self, guid: &str) -> ActorResult<ServiceInstance> {
        self.get_service_instance_by_guid.call(s(guid))
    }
}

#[derive(Default)]
pub(crate) struct FakeNetworkingActor {
    pub add_network_policy: Stub<NetworkPolicy, ActorResult<()>>,
    pub remove_network_policy: Stub<NetworkPolicy, ActorResult<()>>,
}

#[async_trait]
impl NetworkingActor for FakeNetworkingActor {
    async fn add_network_policy(&self, policy: &NetworkPolicy) -> ActorResult<()> {
        self.add_network_policy.call(policy.clone())
    }

    async fn remove_network_policy(&self, policy: &NetworkPolicy) -> ActorResult<()> {
        self.remove_network_policy.call(policy.clone())
    }
}

#[derive(Default)]
pub(crate) struct FakePushActor {
    pub prepare_space: Stub<(String, Option<String>, ManifestSource, FlagOverrides), PrepareSpaceStreams>,
    pub conceptualize: Stub<(Vec<String>, String, String, PathBuf, FlagOverrides), ActorResult<Vec<PushPlan>>>,
    pub actualize: Stub<PushPlan, ActualizeStreams>,
}

#[async_trait]
impl PushActor for FakePushActor {
    async fn prepare_space(
        &self,
        space_guid: &str,
        app_name: Option<&str>,
        manifest: &ManifestSource,
        overrides: &FlagOverrides,
    ) -> PrepareSpaceStreams {
        self.prepare_space.call((
            s(space_guid),
            app_name.map(s),
            manifest.clone(),
            overrides.clone(),
        ))
    }

    async fn conceptualize(
        &self,
        app_names: &[String],
        space_guid: &str,
        org_guid: &str,
        current_dir: &Path,
        overrides: &FlagOverrides,
    ) -> ActorResult<Vec<PushPlan>> {
        self.conceptualize.call((
            app_names.to_vec(),
            s(space_guid),
            s(org_guid),
            current_dir.to_path_buf(),
            overrides.clone(),
        ))
    }

    async fn actualize(
        &self,
        plan: &PushPlan,
        _progress_bar: Arc<dyn ProgressBar>,
    ) -> ActualizeStreams {
        self.actualize.call(plan.clone())
    }
}

/// Mutable state behind [`FakeConfig`]; tests edit it directly.
#[derive(Debug, Clone)]
pub(crate) struct FakeConfigState {
    pub binary_name: String,
    pub target: String,
    pub api_version: String,
    pub skip_ssl_validation: bool,
    pub access_token: String,
    pub refresh_token: String,
    pub uaa_grant_type: String,
    pub uaa_oauth_client: String,
    pub uaa_oauth_client_secret: String,
    pub current_user: Result<User, String>,
    pub organization: TargetedOrganization,
    pub space: TargetedSpace,
    pub staging_timeout: Duration,
    pub startup_timeout: Duration,
    pub docker_password: String,
    pub cf_username: String,
    pub cf_password: String,
    pub experimental: bool,
    pub target_information: Option<TargetInformation>,
}

impl Default for FakeConfigState {
    fn default() -> Self {
        Self {
            binary_name: s("faceman"),
            target: s("https://api.example.com"),
            api_version: s("3.99.0"),
            skip_ssl_validation: false,
            access_token: s("bearer some-token"),
            refresh_token: s("some-refresh-token"),
            uaa_grant_type: String::new(),
            uaa_oauth_client: s("cf"),
            uaa_oauth_client_secret: String::new(),
            current_user: Ok(User {
                name: s("steve"),
                origin: s("uaa"),
                is_client: false,
            }),
            organization: TargetedOrganization {
                guid: s("some-org-guid"),
                name: s("some-org"),
            },
            space: TargetedSpace {
                guid: s("some-space-guid"),
                name: s("some-space"),
                allow_ssh: false,
            },
            staging_timeout: Duration::from_secs(15 * 60),
            startup_timeout: Duration::from_secs(5 * 60),
            docker_password: String::new(),
            cf_username: String::new(),
            cf_password: String::new(),
            experimental: false,
            target_information: None,
        }
    }
}

#[derive(Default)]
pub(crate) struct FakeConfig {
    pub state: Mutex<FakeConfigState>,
    pub writes: Mutex<Vec<&'static str>>,
}

impl FakeConfig {
    fn record(&self, setter: &'static str) {
        self.writes.lock().push(setter);
    }

    pub fn snapshot(&self) -> FakeConfigState {
        self.state.lock().clone()
    }
}

impl Config for FakeConfig {
    fn binary_name(&self) -> String {
        self.state.lock().binary_name.clone()
    }

    fn target(&self) -> String {
        self.state.lock().target.clone()
    }

    fn api_version(&self) -> String {
        self.state.lock().api_version.clone()
    }

    fn skip_ssl_validation(&self) -> bool {
        self.state.lock().skip_ssl_validation
    }

    fn access_token(&self) -> String {
        self.state.lock().access_token.clone()
    }

    fn refresh_token(&self) -> String {
        self.state.lock().refresh_token.clone()
    }

    fn uaa_grant_type(&self) -> String {
        self.state.lock().uaa_grant_type.clone()
    }

    fn uaa_oauth_client(&self) -> String {
        self.state.lock().uaa_oauth_client.clone()
    }

    fn uaa_oauth_client_secret(&self) -> String {
        self.state.lock().uaa_oauth_client_secret.clone()
    }

    fn current_user(&self) -> Result<User, CommandError> {
        self.state
            .lock()
            .current_user
            .clone()
            .map_err(CommandError::Config)
    }

    fn has_targeted_organization(&self) -> bool {
        !self.state.lock().organization.guid.is_empty()
    }

    fn has_targeted_space(&self) -> bool {
        !self.state.lock().space.guid.is_empty()
    }

    fn targeted_organization(&self) -> TargetedOrganization {
        self.state.lock().organization.clone()
    }

    fn targeted_space(&self) -> TargetedSpace {
        self.state.lock().space.clone()
    }

    fn staging_timeout(&self) -> Duration {
        self.state.lock().staging_timeout
    }

    fn startup_timeout(&self) -> Duration {
        self.state.lock().startup_timeout
    }

    fn docker_password(&self) -> String {
        self.state.lock().docker_password.clone()
    }

    fn cf_username(&self) -> String {
        self.state.lock().cf_username.clone()
    }

    fn cf_password(&self) -> String {
        self.state.lock().cf_password.clone()
    }

    fn experimental(&self) -> bool {
        self.state.lock().experimental
    }

    fn set_target_information(&self, info: TargetInformation) {
        self.record("set_target_information");
        let mut state = self.state.lock();
        state.target = info.api.clone();
        state.api_version = info.api_version.clone();
        state.skip_ssl_validation = info.skip_ssl_validation;
        state.organization = TargetedOrganization::default();
        state.space = TargetedSpace::default();
        state.target_information = Some(info);
    }

    fn set_token_information(&self, access_token: &str, refresh_token: &str, _ssh_oauth_client: &str) {
        self.record("set_token_information");
        let mut state = self.state.lock();
        state.access_token = s(access_token);
        state.refresh_token = s(refresh_token);
    }

    fn set_uaa_grant_type(&self, grant_type: &str) {
        self.record("set_uaa_grant_type");
        self.state.lock().uaa_grant_type = s(grant_type);
    }

    fn set_uaa_client_credentials(&self, client: &str, client_secret: &str) {
        self.record("set_uaa_client_credentials");
        let mut state = self.state.lock();
        state.uaa_oauth_client = s(client);
        state.uaa_oauth_client_secret = s(client_secret);
    }

    fn set_organization_information(&self, guid: &str, name: &str) {
        self.record("set_organization_information");
        self.state.lock().organization = TargetedOrganization {
            guid: s(guid),
            name: s(name),
        };
    }

    fn set_space_information(&self, guid: &str, name: &str, allow_ssh: bool) {
        self.record("set_space_information");
        self.state.lock().space = TargetedSpace {
            guid: s(guid),
            name: s(name),
            allow_ssh,
        };
    }

    fn unset_organization_and_space_information(&self) {
        self.record("unset_organization_and_space_information");
        let mut state = self.state.lock();
        state.organization = TargetedOrganization::default();
        state.space = TargetedSpace::default();
    }

    fn unset_space_information(&self) {
        self.record("unset_space_information");
        self.state.lock().space = TargetedSpace::default();
    }

    fn unset_user_information(&self) {
        self.record("unset_user_information");
        let mut state = self.state.lock();
        state.access_token.clear();
        state.refresh_token.clear();
        state.uaa_grant_type.clear();
    }

    fn write_config(&self) -> Result<(), CommandError> {
        self.record("write_config");
        Ok(())
    }
}

/// Fakes wired into a [`BaseCommand`], logged in with org and space targeted.
pub(crate) struct TestHarness {
    pub ui: Arc<BufferedUi>,
    pub config: Arc<FakeConfig>,
    pub shared_actor: Arc<FakeSharedActor>,
    pub actor: Arc<FakeActor>,
    pub networking_actor: Arc<FakeNetworkingActor>,
    pub push_actor: Arc<FakePushActor>,
}

impl TestHarness {
    pub fn new() -> Self {
        Self::with_input(&[])
    }

    /// Harness whose UI answers prompts with `input`, in order.
    pub fn with_input(input: &[&str]) -> Self {
        Self {
            ui: Arc::new(BufferedUi::with_input(input)),
            config: Arc::new(FakeConfig::default()),
            shared_actor: Arc::new(FakeSharedActor::default()),
            actor: Arc::new(FakeActor::default()),
            networking_actor: Arc::new(FakeNetworkingActor::default()),
            push_actor: Arc::new(FakePushActor::default()),
        }
    }

    pub fn base(&self) -> BaseCommand {
        BaseCommand::new(
            self.ui.clone(),
            self.config.clone(),
            self.shared_actor.clone(),
            self.actor.clone(),
        )
    }

    pub fn out(&self) -> String {
        self.ui.out()
    }

    pub fn err(&self) -> String {
        self.ui.err()
    }
}
