//! Command-name contract for logging and routing.

use crate::cli::parse::Commands;

/// Verb as typed on the command line (e.g. "map-route").
pub fn command_name(command: &Commands) -> &'static str {
    match command {
        Commands::AddNetworkPolicy(_) => "add-network-policy",
        Commands::RemoveNetworkPolicy(_) => "remove-network-policy",
        Commands::Auth(_) => "auth",
        Commands::Login(_) => "login",
        Commands::Target(_) => "target",
        Commands::BindSecurityGroup(_) => "bind-security-group",
        Commands::UnbindSecurityGroup(_) => "unbind-security-group",
        Commands::CreateSpace(_) => "create-space",
        Commands::MapRoute(_) => "map-route",
        Commands::UnmapRoute(_) => "unmap-route",
        Commands::Stage(_) => "stage",
        Commands::Restage(_) => "restage",
        Commands::Start(_) => "start",
        Commands::Restart(_) => "restart",
        Commands::Scale(_) => "scale",
        Commands::RunTask(_) => "run-task",
        Commands::DeleteLabel(_) => "delete-label",
        Commands::UnbindService(_) => "unbind-service",
        Commands::CleanupOutdatedServiceBindings(_) => "cleanup-outdated-service-bindings",
        Commands::Org(_) => "org",
        Commands::Space(_) => "space",
        Commands::Apps(_) => "apps",
        Commands::Push(_) => "push",
    }
}
