//! Command line parsing of the verb set

use cfcli::actor::{DeploymentStrategy, HealthCheckType};
use cfcli::cli::{command_name, Cli, Commands};
use clap::Parser;

fn parse(args: &[&str]) -> Commands {
    Cli::try_parse_from(args).unwrap().command
}

#[test]
fn test_push_flags() {
    let command = parse(&[
        "cf", "push", "my-app", "-b", "go_buildpack", "-b", "binary_buildpack", "-m", "1G", "-k",
        "512M", "-u", "http", "--endpoint", "/ready", "--var", "env=prod", "--strategy", "rolling",
        "--no-route",
    ]);
    let Commands::Push(args) = command else {
        panic!("expected push");
    };
    assert_eq!(args.app.as_deref(), Some("my-app"));
    assert_eq!(args.buildpacks, vec!["go_buildpack", "binary_buildpack"]);
    assert_eq!(args.memory, Some(1024));
    assert_eq!(args.disk, Some(512));
    assert_eq!(args.health_check_type, Some(HealthCheckType::Http));
    assert_eq!(args.vars, vec![("env".to_string(), "prod".to_string())]);
    assert_eq!(args.strategy, Some(DeploymentStrategy::Rolling));
    assert!(args.no_route);
    assert!(args.validate().is_ok());
}

#[test]
fn test_bad_memory_unit_rejected() {
    assert!(Cli::try_parse_from(["cf", "scale", "my-app", "-m", "256"]).is_err());
}

#[test]
fn test_bad_port_range_rejected() {
    assert!(Cli::try_parse_from([
        "cf",
        "add-network-policy",
        "frontend",
        "--destination-app",
        "backend",
        "--port",
        "9000-8000",
    ])
    .is_err());
}

#[test]
fn test_global_flags_after_verb() {
    let cli = Cli::try_parse_from(["cf", "apps", "--verbose", "--log-format", "json"]).unwrap();
    assert!(cli.verbose);
    assert_eq!(cli.log_format.as_deref(), Some("json"));
    assert_eq!(command_name(&cli.command), "apps");
}

#[test]
fn test_every_verb_routes_by_name() {
    let cases: &[&[&str]] = &[
        &["cf", "auth", "user", "pass"],
        &["cf", "login"],
        &["cf", "target", "-o", "acme"],
        &["cf", "bind-security-group", "sg", "acme"],
        &["cf", "unbind-security-group", "sg", "acme", "dev"],
        &["cf", "create-space", "dev"],
        &["cf", "map-route", "app", "example.com", "--hostname", "www"],
        &["cf", "unmap-route", "app", "example.com"],
        &["cf", "stage", "app"],
        &["cf", "restage", "app"],
        &["cf", "start", "app"],
        &["cf", "restart", "app"],
        &["cf", "run-task", "app", "echo hi"],
        &["cf", "delete-label", "app", "my-app", "env"],
        &["cf", "unbind-service", "app", "db"],
        &["cf", "space", "dev"],
    ];
    for args in cases {
        let command = parse(args);
        assert_eq!(command_name(&command), args[1]);
    }
}
