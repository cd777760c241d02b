//! Property-based tests for outdated service binding selection

use cfcli::actor::ServiceCredentialBinding;
use cfcli::command::cleanup_outdated_service_bindings::outdated_service_bindings;
use chrono::{TimeZone, Utc};
use proptest::prelude::*;
use std::collections::HashMap;

fn binding_strategy() -> impl Strategy<Value = ServiceCredentialBinding> {
    (0u8..3, 0u8..3, 0i64..1_000_000, any::<u32>()).prop_map(|(si, app, created, id)| {
        ServiceCredentialBinding {
            guid: format!("binding-{}", id),
            created_at: Utc.timestamp_opt(created, 0).single(),
            app_name: format!("app-{}", app),
            app_guid: format!("app-guid-{}", app),
            service_instance_guid: format!("si-guid-{}", si),
            service_instance_name: format!("si-{}", si),
        }
    })
}

fn group_sizes(bindings: &[ServiceCredentialBinding]) -> HashMap<(String, String), usize> {
    let mut sizes = HashMap::new();
    for b in bindings {
        *sizes
            .entry((b.service_instance_guid.clone(), b.app_guid.clone()))
            .or_insert(0) += 1;
    }
    sizes
}

/// Each (service instance, app) group keeps exactly `keep_last` bindings, or all of them
#[test]
fn test_keeps_newest_per_group_property() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(
            &(prop::collection::vec(binding_strategy(), 0..40), 0usize..4),
            |(bindings, keep_last)| {
                let outdated = outdated_service_bindings(&bindings, keep_last);
                let before = group_sizes(&bindings);
                let removed = group_sizes(&outdated);

                for (key, total) in &before {
                    let gone = removed.get(key).copied().unwrap_or(0);
                    assert_eq!(total - gone, (*total).min(keep_last));
                }
                assert!(removed.keys().all(|k| before.contains_key(k)));

                Ok(())
            },
        )
        .unwrap();
}

/// Nothing selected for deletion is newer than a binding that survives in its group
#[test]
fn test_deleted_bindings_are_oldest_property() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(
            &(prop::collection::vec(binding_strategy(), 0..40), 1usize..4),
            |(bindings, keep_last)| {
                let outdated = outdated_service_bindings(&bindings, keep_last);
                for (si, app) in group_sizes(&bindings).into_keys() {
                    let in_group = |b: &&ServiceCredentialBinding| {
                        b.service_instance_guid == si && b.app_guid == app
                    };
                    let mut all: Vec<_> = bindings.iter().filter(in_group).map(|b| b.created_at).collect();
                    all.sort();
                    let mut deleted: Vec<_> = outdated.iter().filter(in_group).map(|b| b.created_at).collect();
                    deleted.sort();
                    let stale = all.len().saturating_sub(keep_last);
                    assert_eq!(deleted, all[..stale].to_vec());
                }

                // result is ordered by service instance, then creation time
                for pair in outdated.windows(2) {
                    let a = (&pair[0].service_instance_guid, pair[0].created_at);
                    let b = (&pair[1].service_instance_guid, pair[1].created_at);
                    assert!(a <= b);
                }

                Ok(())
            },
        )
        .unwrap();
}

/// Keeping zero selects everything
#[test]
fn test_keep_zero_selects_all_property() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(&prop::collection::vec(binding_strategy(), 0..20), |bindings| {
            assert_eq!(outdated_service_bindings(&bindings, 0).len(), bindings.len());
            Ok(())
        })
        .unwrap();
}
