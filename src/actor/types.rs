//! Resource types exchanged with actors.

use crate::error::ActorError;
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;
use std::fmt;

/// Non-fatal messages returned alongside most actor calls.
pub type Warnings = Vec<String>;

/// `(result, warnings)`: warnings are meaningful whether or not the call failed.
pub type ActorResult<T> = (Result<T, ActorError>, Warnings);

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Organization {
    pub guid: String,
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Space {
    pub guid: String,
    pub name: String,
    pub organization_guid: String,
    pub allow_ssh: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ApplicationState {
    Started,
    #[default]
    Stopped,
}

impl fmt::Display for ApplicationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApplicationState::Started => write!(f, "started"),
            ApplicationState::Stopped => write!(f, "stopped"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Application {
    pub guid: String,
    pub name: String,
    pub space_guid: String,
    pub state: ApplicationState,
}

impl Application {
    pub fn started(&self) -> bool {
        self.state == ApplicationState::Started
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Domain {
    pub guid: String,
    pub name: String,
    pub protocols: Vec<String>,
}

impl Domain {
    pub fn is_tcp(&self) -> bool {
        self.protocols.iter().any(|p| p == "tcp")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteDestination {
    pub guid: String,
    pub app_guid: String,
    pub process_type: String,
    pub protocol: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Route {
    pub guid: String,
    pub host: String,
    pub path: String,
    pub port: Option<u16>,
    pub domain_name: String,
    pub space_guid: String,
    pub destinations: Vec<RouteDestination>,
}

impl Route {
    /// `host.domain/path`, or `domain:port` for TCP routes.
    pub fn url(&self) -> String {
        format_route_url(&self.host, &self.domain_name, &self.path, self.port)
    }
}

pub fn format_route_url(host: &str, domain: &str, path: &str, port: Option<u16>) -> String {
    let mut url = if host.is_empty() {
        domain.to_string()
    } else {
        format!("{}.{}", host, domain)
    };
    if let Some(port) = port {
        url.push_str(&format!(":{}", port));
    }
    if !path.is_empty() {
        if !path.starts_with('/') {
            url.push('/');
        }
        url.push_str(path);
    }
    url
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SecurityGroup {
    pub guid: String,
    pub name: String,
}

/// Lifecycle phase a security group applies to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum SecurityGroupLifecycle {
    #[default]
    Running,
    Staging,
}

impl fmt::Display for SecurityGroupLifecycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SecurityGroupLifecycle::Running => write!(f, "running"),
            SecurityGroupLifecycle::Staging => write!(f, "staging"),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DropletState {
    #[default]
    Staged,
    Staging,
    Failed,
    Expired,
}

impl fmt::Display for DropletState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DropletState::Staged => "staged",
            DropletState::Staging => "staging",
            DropletState::Failed => "failed",
            DropletState::Expired => "expired",
        };
        write!(f, "{}", s)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Droplet {
    pub guid: String,
    pub state: DropletState,
    pub created_at: Option<DateTime<Utc>>,
    pub stack: String,
    pub buildpacks: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Package {
    pub guid: String,
    pub state: String,
}

/// Deployment strategy for restage/restart and push.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum DeploymentStrategy {
    #[default]
    #[value(skip)]
    Default,
    Rolling,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProcessInstance {
    pub index: u32,
    pub state: String,
    pub uptime_seconds: u64,
    pub cpu: f64,
    pub memory_usage: u64,
    pub memory_quota: u64,
    pub disk_usage: u64,
    pub disk_quota: u64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProcessSummary {
    pub process_type: String,
    pub command: String,
    pub memory_in_mb: u64,
    pub disk_in_mb: u64,
    pub instances: Vec<ProcessInstance>,
}

impl ProcessSummary {
    pub fn running_instances(&self) -> usize {
        self.instances.iter().filter(|i| i.state == "running").count()
    }

    /// `web:1/2`
    pub fn instance_ratio(&self) -> String {
        format!(
            "{}:{}/{}",
            self.process_type,
            self.running_instances(),
            self.instances.len()
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ApplicationSummary {
    pub application: Application,
    pub process_summaries: Vec<ProcessSummary>,
    pub routes: Vec<Route>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DetailedApplicationSummary {
    pub application: Application,
    pub process_summaries: Vec<ProcessSummary>,
    pub routes: Vec<Route>,
    pub current_droplet: Option<Droplet>,
    pub last_uploaded: Option<DateTime<Utc>>,
}

impl DetailedApplicationSummary {
    pub fn any_instance_crashed(&self) -> bool {
        self.process_summaries
            .iter()
            .flat_map(|p| p.instances.iter())
            .any(|i| i.state == "crashed")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrganizationSummary {
    pub guid: String,
    pub name: String,
    pub domain_names: Vec<String>,
    pub quota_name: String,
    pub space_names: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpaceSummary {
    pub guid: String,
    pub name: String,
    pub org_name: String,
    pub app_names: Vec<String>,
    pub domain_names: Vec<String>,
    pub service_instance_names: Vec<String>,
    pub isolation_segment_name: String,
    pub quota_name: String,
    pub running_security_group_names: Vec<String>,
    pub staging_security_group_names: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Process {
    pub guid: String,
    pub process_type: String,
    pub command: String,
    pub memory_in_mb: u64,
    pub disk_in_mb: u64,
}

/// Requested scale; `None` leaves a dimension unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessScale {
    pub process_type: String,
    pub instances: Option<u32>,
    pub memory_in_mb: Option<u64>,
    pub disk_in_mb: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Task {
    pub guid: String,
    pub name: String,
    pub sequence_id: u64,
    pub command: String,
    pub memory_in_mb: Option<u64>,
    pub disk_in_mb: Option<u64>,
    /// Process whose command and limits the task inherits.
    pub template_process_guid: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServiceInstance {
    pub guid: String,
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServiceCredentialBinding {
    pub guid: String,
    pub created_at: Option<DateTime<Utc>>,
    pub app_name: String,
    pub app_guid: String,
    pub service_instance_guid: String,
    pub service_instance_name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobState {
    Processing,
    Polling,
    Complete,
    Failed,
}

/// One observation of an asynchronous job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PollJobEvent {
    pub state: JobState,
    pub warnings: Warnings,
    pub err: Option<ActorError>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogMessageType {
    #[default]
    Out,
    Err,
}

impl fmt::Display for LogMessageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogMessageType::Out => write!(f, "OUT"),
            LogMessageType::Err => write!(f, "ERR"),
        }
    }
}

/// Source type the log server tags staging output with.
pub const STAGING_LOG_SOURCE: &str = "STG";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogMessage {
    pub message: String,
    pub message_type: LogMessageType,
    pub timestamp: DateTime<Utc>,
    pub source_type: String,
    pub source_instance: String,
}

impl LogMessage {
    pub fn staging(&self) -> bool {
        self.source_type == STAGING_LOG_SOURCE
    }
}

/// Kinds of credential the login prompts ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthPromptType {
    Text,
    Password,
    Menu,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthPrompt {
    pub key: String,
    pub display_name: String,
    pub prompt_type: AuthPromptType,
    pub entries: Vec<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GrantType {
    #[default]
    Password,
    ClientCredentials,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TargetSettings {
    pub url: String,
    pub skip_ssl_validation: bool,
    pub dial_timeout_seconds: u64,
}

/// Resource whose labels a command updates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LabelResource {
    App { name: String, space_guid: String },
    Org { name: String },
    Space { name: String, org_guid: String },
    Route { url: String, space_guid: String },
    Domain { name: String },
    Stack { name: String },
    Buildpack { name: String, stack: String },
}

/// Label changes: `None` deletes the key.
pub type LabelChanges = BTreeMap<String, Option<String>>;

/// Arguments shared by adding and removing a network policy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NetworkPolicy {
    pub source_space_guid: String,
    pub source_app_name: String,
    pub destination_space_guid: String,
    pub destination_app_name: String,
    pub protocol: String,
    pub start_port: u16,
    pub end_port: u16,
}
