use super::BaseCommand;
use crate::actor::{format_route_url, Application, Domain, Route};
use crate::config::{TargetedOrganization, TargetedSpace, User};
use crate::error::{ActorError, CommandError};
use tracing::debug;

/// Route coordinates shared by map-route and unmap-route.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct RouteArgs {
    /// Application name
    pub app: String,
    /// Domain name
    pub domain: String,
    /// Hostname for the HTTP route (required for shared domains)
    #[arg(long)]
    pub hostname: Option<String>,
    /// Path for the HTTP route
    #[arg(long)]
    pub path: Option<String>,
    /// Port for the TCP route
    #[arg(long)]
    pub port: Option<u16>,
}

impl RouteArgs {
    pub(crate) fn hostname(&self) -> &str {
        self.hostname.as_deref().unwrap_or_default()
    }

    pub(crate) fn path(&self) -> &str {
        self.path.as_deref().unwrap_or_default()
    }

    pub(crate) fn url(&self, domain: &Domain) -> String {
        format_route_url(self.hostname(), &domain.name, self.path(), self.port)
    }
}

#[derive(Debug, Clone, Default, clap::Args)]
pub struct MapRouteArgs {
    #[command(flatten)]
    pub route: RouteArgs,
    /// Protocol for the route destination (http1 or http2)
    #[arg(long = "app-protocol")]
    pub app_protocol: Option<String>,
}

/// Target, user, domain and app resolved before touching the route.
pub(crate) struct RouteContext {
    pub user: User,
    pub org: TargetedOrganization,
    pub space: TargetedSpace,
    pub domain: Domain,
    pub app: Application,
}

impl RouteContext {
    pub(crate) async fn resolve(base: &BaseCommand, args: &RouteArgs) -> Result<Self, CommandError> {
        base.check_target(true, true)?;
        let user = base.current_user()?;
        let org = base.targeted_organization();
        let space = base.targeted_space();

        let domain = base.show_warnings(base.actor.get_domain_by_name(&args.domain).await)?;
        let app = base.show_warnings(
            base.actor
                .get_application_by_name_and_space(&args.app, &space.guid)
                .await,
        )?;
        Ok(Self {
            user,
            org,
            space,
            domain,
            app,
        })
    }

    /// `None` when the route does not exist.
    pub(crate) async fn find_route(
        &self,
        base: &BaseCommand,
        args: &RouteArgs,
    ) -> Result<Option<Route>, CommandError> {
        match base.show_warnings(
            base.actor
                .get_route_by_attributes(&self.domain, args.hostname(), args.path(), args.port)
                .await,
        ) {
            Ok(route) => Ok(Some(route)),
            Err(ActorError::RouteNotFound { .. }) => Ok(None),
            Err(err) => Err(err.into()),
        }
    }
}

pub struct MapRouteCommand {
    base: BaseCommand,
}

impl MapRouteCommand {
    pub fn new(base: BaseCommand) -> Self {
        Self { base }
    }

    pub async fn execute(&self, args: &MapRouteArgs) -> Result<(), CommandError> {
        let ctx = RouteContext::resolve(&self.base, &args.route).await?;
        let ui = &self.base.ui;
        let url = args.route.url(&ctx.domain);

        let route = match ctx.find_route(&self.base, &args.route).await? {
            Some(route) => route,
            None => {
                ui.display_text_with_flavor(
                    "Creating route {URL} for org {OrgName} / space {SpaceName} as {User}...",
                    &[
                        ("URL", url.as_str()),
                        ("OrgName", ctx.org.name.as_str()),
                        ("SpaceName", ctx.space.name.as_str()),
                        ("User", ctx.user.name.as_str()),
                    ],
                );
                let route = self.base.show_warnings(
                    self.base
                        .actor
                        .create_route(
                            &ctx.space.guid,
                            &ctx.domain.name,
                            args.route.hostname(),
                            args.route.path(),
                            args.route.port,
                        )
                        .await,
                )?;
                ui.display_ok();
                route
            }
        };

        let destination = self.base.show_warnings(
            self.base
                .actor
                .get_route_destination_by_app_guid(&route, &ctx.app.guid)
                .await,
        );
        match destination {
            Ok(destination) if !destination.guid.is_empty() => {
                debug!(route = %route.guid, "route already mapped");
                ui.display_text_with_flavor(
                    "App '{AppName}' is already mapped to route '{URL}'. Nothing has been updated.",
                    &[("AppName", ctx.app.name.as_str()), ("URL", url.as_str())],
                );
                ui.display_ok();
                return Ok(());
            }
            Ok(_) | Err(ActorError::RouteDestinationNotFound { .. }) => {}
            Err(err) => return Err(err.into()),
        }

        ui.display_text_with_flavor(
            "Mapping route {URL} to app {AppName} in org {OrgName} / space {SpaceName} as {User}...",
            &[
                ("URL", url.as_str()),
                ("AppName", ctx.app.name.as_str()),
                ("OrgName", ctx.org.name.as_str()),
                ("SpaceName", ctx.space.name.as_str()),
                ("User", ctx.user.name.as_str()),
            ],
        );
        let app_protocol = args.app_protocol.as_deref().unwrap_or_default();
        self.base.show_warnings(
            self.base
                .actor
                .map_route(&route.guid, &ctx.app.guid, app_protocol)
                .await,
        )?;
        ui.display_ok();
        Ok(())
    }
}
