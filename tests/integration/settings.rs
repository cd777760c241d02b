//! CLI settings layering and logging config construction

use crate::integration::test_utils::with_cf_home;
use cfcli::cli::{build_logging_config_with_env, Cli};
use cfcli::config::{CliSettings, EnvOverride};
use clap::Parser;
use tempfile::TempDir;

fn write_global_settings(dir: &TempDir, content: &str) {
    let cf_dir = dir.path().join(".cf");
    std::fs::create_dir_all(&cf_dir).unwrap();
    std::fs::write(cf_dir.join("settings.toml"), content).unwrap();
}

#[test]
fn test_global_settings_file_is_read() {
    let dir = TempDir::new().unwrap();
    write_global_settings(&dir, "[logging]\nlevel = \"debug\"\n");

    let settings = with_cf_home(&dir, || CliSettings::load(None).unwrap());
    assert_eq!(settings.logging.level, "debug");
    assert_eq!(settings.logging.format, "text");
}

#[test]
fn test_explicit_file_wins_over_global() {
    let dir = TempDir::new().unwrap();
    write_global_settings(&dir, "[logging]\nlevel = \"debug\"\nformat = \"json\"\n");
    let explicit = dir.path().join("override.toml");
    std::fs::write(&explicit, "[logging]\nlevel = \"error\"\n").unwrap();

    let settings = with_cf_home(&dir, || CliSettings::load(Some(&explicit)).unwrap());
    assert_eq!(settings.logging.level, "error");
    assert_eq!(settings.logging.format, "json");
}

#[test]
fn test_save_then_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("settings.toml");
    let mut settings = CliSettings::default();
    settings.logging.output = "both".to_string();
    settings.save(&path).unwrap();

    let loaded = CliSettings::load_from_file(&path).unwrap();
    assert_eq!(loaded.logging.output, "both");
}

#[test]
fn test_verbose_logging_reads_settings() {
    let dir = TempDir::new().unwrap();
    write_global_settings(&dir, "[logging]\nlevel = \"warn\"\noutput = \"file\"\n");

    let config = with_cf_home(&dir, || {
        let cli = Cli::try_parse_from(["cf", "--verbose", "apps"]).unwrap();
        build_logging_config_with_env(&cli, &EnvOverride::default())
    });
    assert_eq!(config.level, "warn");
    assert_eq!(config.output, "file");
}
