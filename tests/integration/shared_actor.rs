//! Target checks against a real session config

use cfcli::actor::{ConfigSharedActor, SharedActor};
use cfcli::config::{Config, EnvOverride, SessionConfig, SessionFile};
use cfcli::error::ActorError;
use std::sync::Arc;

fn session(file: SessionFile) -> Arc<SessionConfig> {
    Arc::new(SessionConfig::from_parts("config.json".into(), file, EnvOverride::default()))
}

#[test]
fn test_target_checks_follow_session_state() {
    let config = session(SessionFile::default());
    let actor = ConfigSharedActor::new(config.clone());

    assert!(matches!(
        actor.check_target(false, false),
        Err(ActorError::NotLoggedIn { .. })
    ));

    config.set_token_information("bearer token", "refresh", "");
    assert_eq!(actor.check_target(false, false), Ok(()));
    assert_eq!(
        actor.check_target(true, false),
        Err(ActorError::NoOrganizationTargeted {
            binary_name: "cf".to_string()
        })
    );

    config.set_organization_information("org-guid", "acme");
    assert_eq!(actor.check_target(true, false), Ok(()));
    assert!(matches!(
        actor.check_target(true, true),
        Err(ActorError::NoSpaceTargeted { .. })
    ));

    config.set_space_information("space-guid", "dev", false);
    assert_eq!(actor.check_target(true, true), Ok(()));
}

#[test]
fn test_binary_name_in_errors() {
    let config = Arc::new(
        SessionConfig::from_parts("config.json".into(), SessionFile::default(), EnvOverride::default())
            .with_binary_name("faceman"),
    );
    let err = ConfigSharedActor::new(config).check_target(true, true).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Not logged in. Use 'faceman login' or 'faceman login --sso' to log in."
    );
}
