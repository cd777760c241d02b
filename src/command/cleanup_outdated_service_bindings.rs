use super::shared::{delete_service_binding, display_unbinding_in_progress};
use super::BaseCommand;
use crate::actor::ServiceCredentialBinding;
use crate::error::CommandError;
use std::collections::BTreeMap;
use tracing::{debug, info};

#[derive(Debug, Clone, clap::Args)]
pub struct CleanupOutdatedServiceBindingsArgs {
    /// Application name
    pub app: String,
    /// Only clean up bindings to this service instance
    #[arg(long = "service-instance")]
    pub service_instance: Option<String>,
    /// Number of newest bindings to keep per service instance
    #[arg(long = "keep-last", default_value_t = 1)]
    pub keep_last: usize,
    /// Force deletion without confirmation
    #[arg(short = 'f', long)]
    pub force: bool,
    /// Wait for each operation to complete
    #[arg(short = 'w', long)]
    pub wait: bool,
}

impl Default for CleanupOutdatedServiceBindingsArgs {
    fn default() -> Self {
        Self {
            app: String::new(),
            service_instance: None,
            keep_last: 1,
            force: false,
            wait: false,
        }
    }
}

/// Every binding except the newest `keep_last` per app and service instance.
///
/// The result is ordered by service instance GUID, then creation time, oldest first.
pub fn outdated_service_bindings(
    bindings: &[ServiceCredentialBinding],
    keep_last: usize,
) -> Vec<ServiceCredentialBinding> {
    let mut groups: BTreeMap<(&str, &str), Vec<&ServiceCredentialBinding>> = BTreeMap::new();
    for binding in bindings {
        groups
            .entry((
                binding.service_instance_guid.as_str(),
                binding.app_guid.as_str(),
            ))
            .or_default()
            .push(binding);
    }

    let mut outdated = Vec::new();
    for mut group in groups.into_values() {
        group.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        let stale = group.len().saturating_sub(keep_last);
        outdated.extend(group.into_iter().take(stale).cloned());
    }
    outdated.sort_by(|a, b| {
        a.service_instance_guid
            .cmp(&b.service_instance_guid)
            .then(a.created_at.cmp(&b.created_at))
    });
    outdated
}

pub struct CleanupOutdatedServiceBindingsCommand {
    base: BaseCommand,
}

impl CleanupOutdatedServiceBindingsCommand {
    pub fn new(base: BaseCommand) -> Self {
        Self { base }
    }

    pub async fn execute(&self, args: &CleanupOutdatedServiceBindingsArgs) -> Result<(), CommandError> {
        self.base.check_target(true, true)?;
        let user = self.base.current_user()?;
        let org = self.base.targeted_organization();
        let space = self.base.targeted_space();
        let ui = &self.base.ui;
        let actor = &self.base.actor;

        ui.display_text_with_flavor(
            "Cleaning up outdated service bindings for app {AppName} in org {OrgName} / space {SpaceName} as {Username}...",
            &[
                ("AppName", args.app.as_str()),
                ("OrgName", org.name.as_str()),
                ("SpaceName", space.name.as_str()),
                ("Username", user.name.as_str()),
            ],
        );

        let service_instance = args.service_instance.as_deref().filter(|s| !s.is_empty());
        let listed = match service_instance {
            Some(name) => {
                actor
                    .list_service_app_bindings(&space.guid, name, &args.app)
                    .await
            }
            None => actor.list_app_bindings(&space.guid, &args.app).await,
        };
        let bindings: Vec<ServiceCredentialBinding> = self
            .base
            .show_warnings(listed)?
            .into_iter()
            .filter(|b| b.app_name == args.app)
            .collect();

        if !args.force {
            let confirmed = ui.display_bool_prompt(
                false,
                "Really delete all outdated service bindings?",
                &[],
            )?;
            if !confirmed {
                ui.display_text("Outdated service bindings have not been deleted.");
                return Ok(());
            }
        }

        let outdated = outdated_service_bindings(&bindings, args.keep_last);
        info!(app = %args.app, found = outdated.len(), keep_last = args.keep_last, "cleaning up service bindings");
        let count = outdated.len().to_string();
        let template = if outdated.len() == 1 {
            "Found {Count} outdated service binding."
        } else {
            "Found {Count} outdated service bindings."
        };
        ui.display_text_with_flavor(template, &[("Count", count.as_str())]);

        if outdated.is_empty() {
            ui.display_ok();
            return Ok(());
        }

        for binding in &outdated {
            if !delete_service_binding(&self.base, &binding.guid, args.wait).await? {
                let name = self.service_instance_name(binding, service_instance).await?;
                display_unbinding_in_progress(&self.base, &name);
            }
        }
        Ok(())
    }

    async fn service_instance_name(
        &self,
        binding: &ServiceCredentialBinding,
        requested: Option<&str>,
    ) -> Result<String, CommandError> {
        if !binding.service_instance_name.is_empty() {
            return Ok(binding.service_instance_name.clone());
        }
        if let Some(name) = requested {
            return Ok(name.to_string());
        }
        debug!(guid = %binding.service_instance_guid, "looking up service instance name");
        let instance = self.base.show_warnings(
            self.base
                .actor
                .get_service_instance_by_guid(&binding.service_instance_guid)
                .await,
        )?;
        Ok(instance.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actor::{JobState, JobStream, PollJobEvent, ServiceInstance};
    use crate::command::fakes::TestHarness;
    use crate::error::ActorError;
    use chrono::{TimeZone, Utc};
    use tokio::sync::mpsc;

    fn binding(guid: &str, day: u32, app: &str, instance: &str) -> ServiceCredentialBinding {
        ServiceCredentialBinding {
            guid: guid.to_string(),
            created_at: Some(Utc.with_ymd_and_hms(2026, 1, day, 12, 0, 0).unwrap()),
            app_name: app.to_string(),
            app_guid: format!("{}-guid", app),
            service_instance_guid: instance.to_string(),
            ..Default::default()
        }
    }

    fn listed() -> Vec<ServiceCredentialBinding> {
        vec![
            binding("binding-1", 1, "some-app", "instance-1"),
            binding("binding-2", 2, "some-app", "instance-2"),
            binding("binding-3", 3, "some-app", "instance-1"),
            binding("binding-4", 4, "some-app", "instance-2"),
            binding("binding-5", 5, "some-app", "instance-2"),
            binding("binding-6", 6, "other-app", "instance-2"),
        ]
    }

    fn guids(bindings: &[ServiceCredentialBinding]) -> Vec<&str> {
        bindings.iter().map(|b| b.guid.as_str()).collect()
    }

    fn harness(input: &[&str]) -> TestHarness {
        let harness = TestHarness::with_input(input);
        harness
            .actor
            .list_app_bindings
            .push((Ok(listed()), vec!["list warning".to_string()]));
        harness
    }

    fn args() -> CleanupOutdatedServiceBindingsArgs {
        CleanupOutdatedServiceBindingsArgs {
            app: "some-app".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_outdated_empty() {
        assert!(outdated_service_bindings(&[], 1).is_empty());
    }

    #[test]
    fn test_outdated_keeps_newest_per_instance() {
        let bindings = vec![
            binding("g4", 3, "a1", "s2"),
            binding("g2", 2, "a1", "s1"),
            binding("g5", 2, "a1", "s2"),
            binding("g1", 1, "a1", "s1"),
            binding("g3", 1, "a1", "s2"),
        ];
        assert_eq!(guids(&outdated_service_bindings(&bindings, 1)), vec!["g1", "g3", "g5"]);
        assert_eq!(guids(&outdated_service_bindings(&bindings, 2)), vec!["g3"]);
        assert!(outdated_service_bindings(&bindings, 3).is_empty());
    }

    #[tokio::test]
    async fn test_confirmed_cleanup_deletes_outdated() {
        let harness = harness(&["y"]);
        CleanupOutdatedServiceBindingsCommand::new(harness.base())
            .execute(&args())
            .await
            .unwrap();

        assert_eq!(harness.shared_actor.check_target.calls(), vec![(true, true)]);
        assert_eq!(
            harness.actor.list_app_bindings.calls(),
            vec![("some-space-guid".to_string(), "some-app".to_string())]
        );
        assert_eq!(
            harness.actor.delete_service_app_binding.calls(),
            vec![
                "binding-1".to_string(),
                "binding-2".to_string(),
                "binding-4".to_string()
            ]
        );
        let out = harness.out();
        assert!(out.starts_with(
            "Cleaning up outdated service bindings for app some-app in org some-org / space some-space as steve...\n\
             Really delete all outdated service bindings? [yN]:"
        ));
        assert!(out.contains("Found 3 outdated service bindings.\n"));
        assert!(out.ends_with("Deleting service binding binding-4...\nOK\n"));
        assert_eq!(harness.err(), "list warning\n");
    }

    #[tokio::test]
    async fn test_service_instance_and_keep_last() {
        let harness = TestHarness::with_input(&["y"]);
        harness.actor.list_service_app_bindings.push((
            Ok(vec![
                binding("binding-2", 2, "some-app", "instance-2"),
                binding("binding-4", 4, "some-app", "instance-2"),
                binding("binding-5", 5, "some-app", "instance-2"),
                binding("binding-6", 6, "other-app", "instance-2"),
            ]),
            vec![],
        ));
        let mut args = args();
        args.service_instance = Some("some-instance".to_string());
        args.keep_last = 2;

        CleanupOutdatedServiceBindingsCommand::new(harness.base())
            .execute(&args)
            .await
            .unwrap();

        assert_eq!(
            harness.actor.list_service_app_bindings.calls(),
            vec![(
                "some-space-guid".to_string(),
                "some-instance".to_string(),
                "some-app".to_string()
            )]
        );
        assert_eq!(harness.actor.list_app_bindings.call_count(), 0);
        assert_eq!(
            harness.actor.delete_service_app_binding.calls(),
            vec!["binding-2".to_string()]
        );
        assert!(harness.out().contains("Found 1 outdated service binding.\n"));
    }

    #[tokio::test]
    async fn test_declined_deletes_nothing() {
        let harness = harness(&["N"]);
        CleanupOutdatedServiceBindingsCommand::new(harness.base())
            .execute(&args())
            .await
            .unwrap();
        assert!(harness
            .out()
            .ends_with("Outdated service bindings have not been deleted.\n"));
        assert_eq!(harness.actor.delete_service_app_binding.call_count(), 0);
    }

    #[tokio::test]
    async fn test_force_skips_prompt() {
        let harness = harness(&[]);
        let mut args = args();
        args.force = true;
        CleanupOutdatedServiceBindingsCommand::new(harness.base())
            .execute(&args)
            .await
            .unwrap();
        assert!(!harness.out().contains("Really delete"));
        assert_eq!(harness.actor.delete_service_app_binding.call_count(), 3);
    }

    #[tokio::test]
    async fn test_in_progress_then_failure() {
        let harness = harness(&[]);
        let (tx1, rx1) = mpsc::channel(2);
        tx1.try_send(PollJobEvent {
            state: JobState::Complete,
            warnings: vec!["job 1 complete warning".to_string()],
            err: None,
        })
        .unwrap();
        drop(tx1);
        let (tx2, rx2) = mpsc::channel(2);
        tx2.try_send(PollJobEvent {
            state: JobState::Polling,
            warnings: vec!["job 2 polling warning".to_string()],
            err: None,
        })
        .unwrap();
        let (tx3, rx3) = mpsc::channel(2);
        tx3.try_send(PollJobEvent {
            state: JobState::Failed,
            warnings: vec!["job 3 failed warning".to_string()],
            err: Some(ActorError::Other("boom".to_string())),
        })
        .unwrap();
        for (rx, warning) in [(rx1, "delete 1 warning"), (rx2, "delete 2 warning"), (rx3, "delete 3 warning")] {
            harness
                .actor
                .delete_service_app_binding
                .push((Ok(JobStream::from_receiver(rx)), vec![warning.to_string()]));
        }
        harness.actor.get_service_instance_by_guid.push((
            Ok(ServiceInstance {
                guid: "instance-2".to_string(),
                name: "some-service-instance".to_string(),
            }),
            vec!["get service instance warning".to_string()],
        ));
        let mut args = args();
        args.force = true;

        let err = CleanupOutdatedServiceBindingsCommand::new(harness.base())
            .execute(&args)
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "boom");
        assert_eq!(
            harness.actor.get_service_instance_by_guid.calls(),
            vec!["instance-2".to_string()]
        );
        assert!(harness.out().contains(
            "Deleting service binding binding-2...\nOK\n\n\
             Unbinding in progress. Use 'faceman service some-service-instance' to check operation status.\n\
             Deleting service binding binding-4...\n"
        ));
        assert_eq!(
            harness.err(),
            "list warning\ndelete 1 warning\njob 1 complete warning\n\
             delete 2 warning\njob 2 polling warning\nget service instance warning\n\
             delete 3 warning\njob 3 failed warning\n"
        );
        drop((tx2, tx3));
    }
}
