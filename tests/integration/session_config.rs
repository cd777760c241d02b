//! Session file persistence and environment overrides

use crate::integration::test_utils::{access_token, with_cf_home};
use cfcli::config::{
    Config, EnvOverride, SessionConfig, SessionFile, TargetInformation, CLIENT_CREDENTIALS_GRANT_TYPE,
};
use serde_json::json;
use std::time::Duration;
use tempfile::TempDir;

fn env(pairs: &[(&str, &str)]) -> EnvOverride {
    EnvOverride::from_lookup(|key| {
        pairs
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.to_string())
    })
}

#[test]
fn test_session_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(".cf").join("config.json");

    let session = SessionConfig::load_from_file(&path, EnvOverride::default()).unwrap();
    session.set_target_information(TargetInformation {
        api: "https://api.example.com".to_string(),
        api_version: "3.99.0".to_string(),
        auth: "https://login.example.com".to_string(),
        skip_ssl_validation: true,
        ..Default::default()
    });
    session.set_token_information("bearer some-token", "some-refresh", "ssh-proxy");
    session.set_organization_information("org-guid", "acme");
    session.set_space_information("space-guid", "dev", true);
    session.write_config().unwrap();

    let reloaded = SessionConfig::load_from_file(&path, EnvOverride::default()).unwrap();
    assert_eq!(reloaded.target(), "https://api.example.com");
    assert_eq!(reloaded.api_version(), "3.99.0");
    assert!(reloaded.skip_ssl_validation());
    assert_eq!(reloaded.access_token(), "bearer some-token");
    assert_eq!(reloaded.targeted_organization().name, "acme");
    assert_eq!(reloaded.targeted_space().guid, "space-guid");
    assert!(reloaded.targeted_space().allow_ssh);
    assert_eq!(reloaded.uaa_oauth_client(), "cf");

    let raw: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(raw["OrganizationFields"]["Name"], "acme");
    assert_eq!(raw["SpaceFields"]["AllowSSH"], true);
    assert_eq!(raw["SSLDisabled"], true);
}

#[test]
fn test_new_target_clears_org_and_space() {
    let dir = TempDir::new().unwrap();
    let session = SessionConfig::from_parts(
        dir.path().join("config.json"),
        SessionFile::default(),
        EnvOverride::default(),
    );
    session.set_organization_information("org-guid", "acme");
    session.set_space_information("space-guid", "dev", false);
    session.set_target_information(TargetInformation {
        api: "https://api.other.com".to_string(),
        ..Default::default()
    });
    assert!(!session.has_targeted_organization());
    assert!(!session.has_targeted_space());
}

#[test]
fn test_unset_user_information_logs_out() {
    let session = SessionConfig::from_parts(
        "config.json".into(),
        SessionFile::default(),
        EnvOverride::default(),
    );
    session.set_token_information("bearer a", "b", "");
    session.set_organization_information("org-guid", "acme");
    session.unset_user_information();
    assert_eq!(session.access_token(), "");
    assert_eq!(session.refresh_token(), "");
}

#[test]
fn test_current_user_from_token() {
    let session = SessionConfig::from_parts(
        "config.json".into(),
        SessionFile {
            access_token: access_token(json!({"user_name": "steve", "origin": "uaa"})),
            ..Default::default()
        },
        EnvOverride::default(),
    );
    let user = session.current_user().unwrap();
    assert_eq!(user.name, "steve");
    assert_eq!(user.origin, "uaa");
    assert!(!user.is_client);
}

#[test]
fn test_current_user_for_client_credentials() {
    let session = SessionConfig::from_parts(
        "config.json".into(),
        SessionFile {
            access_token: access_token(json!({"client_id": "ci-bot"})),
            uaa_grant_type: CLIENT_CREDENTIALS_GRANT_TYPE.to_string(),
            ..Default::default()
        },
        EnvOverride::default(),
    );
    let user = session.current_user().unwrap();
    assert_eq!(user.name, "ci-bot");
    assert!(user.is_client);
}

#[test]
fn test_environment_overrides() {
    let session = SessionConfig::from_parts(
        "config.json".into(),
        SessionFile::default(),
        env(&[
            ("CF_STAGING_TIMEOUT", "2"),
            ("CF_DOCKER_PASSWORD", "hunter2"),
            ("CF_CLI_EXPERIMENTAL", "true"),
            ("CF_USERNAME", "env-user"),
        ]),
    );
    assert_eq!(session.staging_timeout(), Duration::from_secs(120));
    assert_eq!(session.startup_timeout(), Duration::from_secs(300));
    assert_eq!(session.docker_password(), "hunter2");
    assert!(session.experimental());
    assert_eq!(session.cf_username(), "env-user");
}

#[test]
fn test_load_uses_cf_home() {
    let dir = TempDir::new().unwrap();
    std::fs::create_dir_all(dir.path().join(".cf")).unwrap();
    std::fs::write(
        dir.path().join(".cf").join("config.json"),
        r#"{"Target": "https://api.from-home.com", "OrganizationFields": {"GUID": "g", "Name": "n"}}"#,
    )
    .unwrap();

    let session = with_cf_home(&dir, || SessionConfig::load().unwrap());
    assert_eq!(session.target(), "https://api.from-home.com");
    assert_eq!(session.targeted_organization().guid, "g");
    assert_eq!(session.path(), dir.path().join(".cf").join("config.json"));
}

#[test]
fn test_corrupt_session_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, "{not json").unwrap();
    assert!(SessionConfig::load_from_file(&path, EnvOverride::default()).is_err());
}
