//! CLI parse: clap types for cfcli. No behavior; definitions only.

use crate::command::add_network_policy::NetworkPolicyArgs;
use crate::command::apps::AppsArgs;
use crate::command::auth::AuthArgs;
use crate::command::bind_security_group::BindSecurityGroupArgs;
use crate::command::cleanup_outdated_service_bindings::CleanupOutdatedServiceBindingsArgs;
use crate::command::create_space::CreateSpaceArgs;
use crate::command::delete_label::DeleteLabelArgs;
use crate::command::login::LoginArgs;
use crate::command::map_route::{MapRouteArgs, RouteArgs};
use crate::command::org::OrgArgs;
use crate::command::push::PushArgs;
use crate::command::restage::AppLifecycleArgs;
use crate::command::run_task::RunTaskArgs;
use crate::command::scale::ScaleArgs;
use crate::command::space::SpaceArgs;
use crate::command::stage::StageArgs;
use crate::command::start::StartArgs;
use crate::command::target::TargetArgs;
use crate::command::unbind_security_group::UnbindSecurityGroupArgs;
use crate::command::unbind_service::UnbindServiceArgs;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command line client for a Cloud Foundry style platform
#[derive(Parser)]
#[command(name = "cf")]
#[command(about = "A command line tool to interact with Cloud Foundry")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Settings file path (overrides $CF_HOME/.cf/settings.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging (default: off)
    #[arg(long, global = true, default_value = "false")]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long, global = true)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file, both)
    #[arg(long, global = true)]
    pub log_output: Option<String>,

    /// Log file path (if output includes "file")
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create policy to allow direct network traffic from one app to another
    AddNetworkPolicy(NetworkPolicyArgs),
    /// Remove network traffic policy of an app
    RemoveNetworkPolicy(NetworkPolicyArgs),
    /// Authenticate non-interactively
    Auth(AuthArgs),
    /// Log user in
    Login(LoginArgs),
    /// Set or view the targeted org or space
    Target(TargetArgs),
    /// Bind a security group to a particular space, or all existing spaces of an org
    BindSecurityGroup(BindSecurityGroupArgs),
    /// Unbind a security group from a space
    UnbindSecurityGroup(UnbindSecurityGroupArgs),
    /// Create a space
    CreateSpace(CreateSpaceArgs),
    /// Map a route to an app
    MapRoute(MapRouteArgs),
    /// Remove a route from an app
    UnmapRoute(RouteArgs),
    /// Create a new droplet for an app
    Stage(StageArgs),
    /// Stage an app's latest package and restart it
    Restage(AppLifecycleArgs),
    /// Start an app
    Start(StartArgs),
    /// Stop all instances of the app, then start them again
    Restart(AppLifecycleArgs),
    /// Change or view the instance count, disk space limit, and memory limit for an app
    Scale(ScaleArgs),
    /// Run a one-off task on an app
    RunTask(RunTaskArgs),
    /// Delete specified labels from an API resource
    DeleteLabel(DeleteLabelArgs),
    /// Unbind a service instance from an app
    UnbindService(UnbindServiceArgs),
    /// Delete all but the newest service bindings of an app
    CleanupOutdatedServiceBindings(CleanupOutdatedServiceBindingsArgs),
    /// Show org info
    Org(OrgArgs),
    /// Show space info
    Space(SpaceArgs),
    /// List all apps in the target space
    Apps(AppsArgs),
    /// Push a new app or sync changes to an existing app
    Push(PushArgs),
}
