use super::BaseCommand;
use crate::actor::{LabelChanges, LabelResource};
use crate::error::CommandError;
use std::fmt;
use tracing::debug;

/// Resource kinds that carry labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum LabelResourceType {
    App,
    Org,
    Space,
    Route,
    Domain,
    Stack,
    Buildpack,
}

impl fmt::Display for LabelResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LabelResourceType::App => "app",
            LabelResourceType::Org => "org",
            LabelResourceType::Space => "space",
            LabelResourceType::Route => "route",
            LabelResourceType::Domain => "domain",
            LabelResourceType::Stack => "stack",
            LabelResourceType::Buildpack => "buildpack",
        };
        write!(f, "{}", s)
    }
}

impl LabelResourceType {
    /// `(organization, space)` target requirement, `None` for no check at all.
    fn target_requirement(self) -> Option<(bool, bool)> {
        match self {
            LabelResourceType::App | LabelResourceType::Route => Some((true, true)),
            LabelResourceType::Space => Some((true, false)),
            LabelResourceType::Org | LabelResourceType::Stack | LabelResourceType::Buildpack => {
                Some((false, false))
            }
            LabelResourceType::Domain => None,
        }
    }
}

#[derive(Debug, Clone, clap::Args)]
pub struct DeleteLabelArgs {
    /// Resource type
    #[arg(value_enum, ignore_case = true)]
    pub resource_type: LabelResourceType,
    /// Resource name (a URL for routes)
    pub resource_name: String,
    /// Label keys to delete
    #[arg(required = true, num_args = 1..)]
    pub keys: Vec<String>,
    /// Specify stack to disambiguate buildpacks with the same name
    #[arg(short = 's', long)]
    pub stack: Option<String>,
}

pub struct DeleteLabelCommand {
    base: BaseCommand,
}

impl DeleteLabelCommand {
    pub fn new(base: BaseCommand) -> Self {
        Self { base }
    }

    pub async fn execute(&self, args: &DeleteLabelArgs) -> Result<(), CommandError> {
        let stack = args.stack.as_deref().filter(|s| !s.is_empty());
        if stack.is_some() && args.resource_type != LabelResourceType::Buildpack {
            return Err(CommandError::ArgumentCombination {
                args: vec![args.resource_type.to_string(), "--stack, -s".to_string()],
            });
        }

        if let Some((organization, space)) = args.resource_type.target_requirement() {
            self.base.check_target(organization, space)?;
        }
        let user = self.base.current_user()?;
        let org = self.base.targeted_organization();
        let space = self.base.targeted_space();
        let name = args.resource_name.as_str();
        let ui = &self.base.ui;

        let resource = match args.resource_type {
            LabelResourceType::App => {
                ui.display_text_with_flavor(
                    "Deleting label(s) for app {ResourceName} in org {OrgName} / space {SpaceName} as {User}...",
                    &[
                        ("ResourceName", name),
                        ("OrgName", org.name.as_str()),
                        ("SpaceName", space.name.as_str()),
                        ("User", user.name.as_str()),
                    ],
                );
                LabelResource::App {
                    name: name.to_string(),
                    space_guid: space.guid,
                }
            }
            LabelResourceType::Route => {
                ui.display_text_with_flavor(
                    "Deleting label(s) for route {ResourceName} in org {OrgName} / space {SpaceName} as {User}...",
                    &[
                        ("ResourceName", name),
                        ("OrgName", org.name.as_str()),
                        ("SpaceName", space.name.as_str()),
                        ("User", user.name.as_str()),
                    ],
                );
                LabelResource::Route {
                    url: name.to_string(),
                    space_guid: space.guid,
                }
            }
            LabelResourceType::Space => {
                ui.display_text_with_flavor(
                    "Deleting label(s) for space {ResourceName} in org {OrgName} as {User}...",
                    &[
                        ("ResourceName", name),
                        ("OrgName", org.name.as_str()),
                        ("User", user.name.as_str()),
                    ],
                );
                LabelResource::Space {
                    name: name.to_string(),
                    org_guid: org.guid,
                }
            }
            LabelResourceType::Buildpack if stack.is_some() => {
                let stack = stack.unwrap_or_default();
                ui.display_text_with_flavor(
                    "Deleting label(s) for buildpack {ResourceName} with stack {StackName} as {User}...",
                    &[
                        ("ResourceName", name),
                        ("StackName", stack),
                        ("User", user.name.as_str()),
                    ],
                );
                LabelResource::Buildpack {
                    name: name.to_string(),
                    stack: stack.to_string(),
                }
            }
            other => {
                let template = format!(
                    "Deleting label(s) for {} {{ResourceName}} as {{User}}...",
                    other
                );
                ui.display_text_with_flavor(
                    &template,
                    &[("ResourceName", name), ("User", user.name.as_str())],
                );
                match other {
                    LabelResourceType::Org => LabelResource::Org {
                        name: name.to_string(),
                    },
                    LabelResourceType::Domain => LabelResource::Domain {
                        name: name.to_string(),
                    },
                    LabelResourceType::Stack => LabelResource::Stack {
                        name: name.to_string(),
                    },
                    _ => LabelResource::Buildpack {
                        name: name.to_string(),
                        stack: String::new(),
                    },
                }
            }
        };

        let changes: LabelChanges = args.keys.iter().map(|key| (key.clone(), None)).collect();
        debug!(?resource, keys = ?args.keys, "deleting labels");
        self.base
            .show_warnings(self.base.actor.update_labels(&resource, &changes).await)?;
        ui.display_ok();
        Ok(())
    }
}
