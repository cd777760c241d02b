//! Environment variable overrides captured at startup.

use std::time::Duration;

const DEFAULT_STAGING_TIMEOUT_MINUTES: f64 = 15.0;
const DEFAULT_STARTUP_TIMEOUT_MINUTES: f64 = 5.0;

/// Values read from `CF_*` environment variables.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EnvOverride {
    pub cf_color: String,
    pub cf_dial_timeout: String,
    pub cf_log_level: String,
    pub cf_staging_timeout: String,
    pub cf_startup_timeout: String,
    pub cf_trace: String,
    pub cf_username: String,
    pub cf_password: String,
    pub docker_password: String,
    pub experimental: String,
    pub force_tty: bool,
}

impl EnvOverride {
    /// Read overrides from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read overrides through an arbitrary lookup (tests pass a map).
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).unwrap_or_default();
        Self {
            cf_color: get("CF_COLOR"),
            cf_dial_timeout: get("CF_DIAL_TIMEOUT"),
            cf_log_level: get("CF_LOG_LEVEL"),
            cf_staging_timeout: get("CF_STAGING_TIMEOUT"),
            cf_startup_timeout: get("CF_STARTUP_TIMEOUT"),
            cf_trace: get("CF_TRACE"),
            cf_username: get("CF_USERNAME"),
            cf_password: get("CF_PASSWORD"),
            docker_password: get("CF_DOCKER_PASSWORD"),
            experimental: get("CF_CLI_EXPERIMENTAL"),
            force_tty: !get("FORCE_TTY").is_empty(),
        }
    }

    /// Max wait for staging, `CF_STAGING_TIMEOUT` minutes (default 15).
    pub fn staging_timeout(&self) -> Duration {
        minutes_or(&self.cf_staging_timeout, DEFAULT_STAGING_TIMEOUT_MINUTES)
    }

    /// Max wait for instance startup, `CF_STARTUP_TIMEOUT` minutes (default 5).
    pub fn startup_timeout(&self) -> Duration {
        minutes_or(&self.cf_startup_timeout, DEFAULT_STARTUP_TIMEOUT_MINUTES)
    }

    /// Dial timeout in seconds; zero when unset or invalid.
    pub fn dial_timeout(&self) -> Duration {
        self.cf_dial_timeout
            .trim()
            .parse::<u64>()
            .map(Duration::from_secs)
            .unwrap_or_default()
    }

    pub fn experimental(&self) -> bool {
        parse_bool(&self.experimental)
    }

    /// `CF_TRACE=true` turns on request tracing to the terminal.
    pub fn trace_enabled(&self) -> bool {
        parse_bool(&self.cf_trace)
    }

    /// `CF_COLOR=false` disables color even on a terminal.
    pub fn color_disabled(&self) -> bool {
        self.cf_color.eq_ignore_ascii_case("false")
    }
}

fn minutes_or(raw: &str, default_minutes: f64) -> Duration {
    let minutes = raw
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|m| m.is_finite() && *m > 0.0)
        .unwrap_or(default_minutes);
    Duration::from_secs_f64(minutes * 60.0)
}

fn parse_bool(raw: &str) -> bool {
    matches!(raw.trim().to_ascii_lowercase().as_str(), "true" | "1" | "yes")
}
