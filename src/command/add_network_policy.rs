use super::flag::{parse_port_range, PortRange};
use super::BaseCommand;
use crate::actor::{NetworkPolicy, NetworkingActor};
use crate::config::User;
use crate::error::CommandError;
use std::sync::Arc;
use tracing::debug;

const DEFAULT_PROTOCOL: &str = "tcp";
const DEFAULT_PORT: u16 = 8080;

/// Arguments shared by `add-network-policy` and `remove-network-policy`.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct NetworkPolicyArgs {
    /// Name of app to connect from
    pub source_app: String,
    /// Name of app to connect to
    #[arg(long = "destination-app", required = true)]
    pub destination_app: String,
    /// The org of the destination app (requires --space)
    #[arg(short = 'o', long)]
    pub org: Option<String>,
    /// The space of the destination app
    #[arg(short = 's', long)]
    pub space: Option<String>,
    /// Protocol to connect apps with
    #[arg(long, value_parser = ["tcp", "udp"])]
    pub protocol: Option<String>,
    /// Port or range of ports for connection to destination app
    #[arg(long, value_parser = parse_port_range)]
    pub port: Option<PortRange>,
}

/// Everything a policy command prints and sends, resolved from the arguments.
pub(crate) struct ResolvedPolicy {
    pub policy: NetworkPolicy,
    pub user: User,
    /// Destination org and space names when a destination space was named.
    pub destination: Option<(String, String)>,
}

impl NetworkPolicyArgs {
    /// Both or neither of protocol and port; neither means tcp on 8080.
    pub(crate) fn protocol_and_ports(&self) -> Result<(String, PortRange), CommandError> {
        match (&self.protocol, self.port) {
            (Some(protocol), Some(port)) => Ok((protocol.clone(), port)),
            (None, None) => Ok((
                DEFAULT_PROTOCOL.to_string(),
                PortRange {
                    start: DEFAULT_PORT,
                    end: DEFAULT_PORT,
                },
            )),
            _ => Err(CommandError::NetworkPolicyProtocolOrPortNotProvided),
        }
    }

    pub(crate) async fn resolve(&self, base: &BaseCommand) -> Result<ResolvedPolicy, CommandError> {
        let (protocol, ports) = self.protocol_and_ports()?;
        if self.org.is_some() && self.space.is_none() {
            return Err(CommandError::NetworkPolicyDestinationOrgWithoutSpace);
        }
        base.check_target(true, true)?;

        let org = base.targeted_organization();
        let space = base.targeted_space();
        let mut destination_space_guid = space.guid.clone();
        let mut destination = None;

        if let Some(space_name) = &self.space {
            let (org_guid, org_name) = match &self.org {
                Some(org_name) => {
                    let found = base.show_warnings(
                        base.actor.get_organization_by_name(org_name).await,
                    )?;
                    (found.guid, found.name)
                }
                None => (org.guid.clone(), org.name.clone()),
            };
            let found = base.show_warnings(
                base.actor
                    .get_space_by_name_and_organization(space_name, &org_guid)
                    .await,
            )?;
            debug!(space = %found.name, "resolved destination space");
            destination_space_guid = found.guid;
            destination = Some((org_name, found.name));
        }

        let user = base.current_user()?;
        Ok(ResolvedPolicy {
            policy: NetworkPolicy {
                source_space_guid: space.guid,
                source_app_name: self.source_app.clone(),
                destination_space_guid,
                destination_app_name: self.destination_app.clone(),
                protocol,
                start_port: ports.start,
                end_port: ports.end,
            },
            user,
            destination,
        })
    }
}

/// Announce a policy change; `verb` is `Adding` or `Removing`.
pub(crate) fn announce(base: &BaseCommand, verb: &str, args: &NetworkPolicyArgs, resolved: &ResolvedPolicy) {
    let org = base.targeted_organization();
    let space = base.targeted_space();
    match &resolved.destination {
        Some((dst_org, dst_space)) => base.ui.display_text_with_flavor(
            &format!(
                "{} network policy from app {{SrcAppName}} in org {{Org}} / space {{Space}} to app {{DstAppName}} in org {{DstOrg}} / space {{DstSpace}} as {{User}}...",
                verb
            ),
            &[
                ("SrcAppName", args.source_app.as_str()),
                ("Org", org.name.as_str()),
                ("Space", space.name.as_str()),
                ("DstAppName", args.destination_app.as_str()),
                ("DstOrg", dst_org.as_str()),
                ("DstSpace", dst_space.as_str()),
                ("User", resolved.user.name.as_str()),
            ],
        ),
        None => base.ui.display_text_with_flavor(
            &format!(
                "{} network policy from app {{SrcAppName}} to app {{DstAppName}} in org {{Org}} / space {{Space}} as {{User}}...",
                verb
            ),
            &[
                ("SrcAppName", args.source_app.as_str()),
                ("DstAppName", args.destination_app.as_str()),
                ("Org", org.name.as_str()),
                ("Space", space.name.as_str()),
                ("User", resolved.user.name.as_str()),
            ],
        ),
    }
}

pub struct AddNetworkPolicyCommand {
    base: BaseCommand,
    networking_actor: Arc<dyn NetworkingActor>,
}

impl AddNetworkPolicyCommand {
    pub fn new(base: BaseCommand, networking_actor: Arc<dyn NetworkingActor>) -> Self {
        Self {
            base,
            networking_actor,
        }
    }

    pub async fn execute(&self, args: &NetworkPolicyArgs) -> Result<(), CommandError> {
        let resolved = args.resolve(&self.base).await?;
        announce(&self.base, "Adding", args, &resolved);

        self.base.show_warnings(
            self.networking_actor
                .add_network_policy(&resolved.policy)
                .await,
        )?;
        self.base.ui.display_ok();
        Ok(())
    }
}
