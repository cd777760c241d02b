use super::map_route::{RouteArgs, RouteContext};
use super::BaseCommand;
use crate::error::{ActorError, CommandError};

pub struct UnmapRouteCommand {
    base: BaseCommand,
}

impl UnmapRouteCommand {
    pub fn new(base: BaseCommand) -> Self {
        Self { base }
    }

    pub async fn execute(&self, args: &RouteArgs) -> Result<(), CommandError> {
        let ctx = RouteContext::resolve(&self.base, args).await?;
        let ui = &self.base.ui;
        let url = args.url(&ctx.domain);

        let route = match ctx.find_route(&self.base, args).await? {
            Some(route) => route,
            None => return Err(ActorError::RouteNotFound { url }.into()),
        };

        ui.display_text_with_flavor(
            "Removing route {URL} from app {AppName} in org {OrgName} / space {SpaceName} as {User}...",
            &[
                ("URL", url.as_str()),
                ("AppName", ctx.app.name.as_str()),
                ("OrgName", ctx.org.name.as_str()),
                ("SpaceName", ctx.space.name.as_str()),
                ("User", ctx.user.name.as_str()),
            ],
        );

        let destination = match self.base.show_warnings(
            self.base
                .actor
                .get_route_destination_by_app_guid(&route, &ctx.app.guid)
                .await,
        ) {
            Ok(destination) if !destination.guid.is_empty() => destination,
            Ok(_) | Err(ActorError::RouteDestinationNotFound { .. }) => {
                ui.display_text("Route to be unmapped is not currently mapped to the application.");
                ui.display_ok();
                return Ok(());
            }
            Err(err) => return Err(err.into()),
        };

        self.base.show_warnings(
            self.base
                .actor
                .unmap_route(&route.guid, &destination.guid)
                .await,
        )?;
        ui.display_ok();
        Ok(())
    }
}
