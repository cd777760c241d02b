//! Logging System
//!
//! Structured logging with the `tracing` crate. Log lines are diagnostics for
//! the CLI's own behavior and never mix with command output: the default
//! destination is stderr, and a file or both can be chosen instead.

use crate::config::default_log_file;
use crate::error::CommandError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::filter::Directive;
use tracing_subscriber::fmt::time::ChronoUtc;
use tracing_subscriber::fmt::writer::{BoxMakeWriter, MakeWriterExt};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

/// Full filter directives, e.g. `CF_LOG=cfcli::command=debug`.
pub const FILTER_ENV: &str = "CF_LOG";
const LEVEL_ENV: &str = "CF_LOG_LEVEL";
const FORMAT_ENV: &str = "CF_LOG_FORMAT";
const OUTPUT_ENV: &str = "CF_LOG_OUTPUT";

/// Logging configuration, the `[logging]` table of `settings.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error, off
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Output format: json, text (default: text)
    #[serde(default = "default_format")]
    pub format: String,

    /// Output destination: stdout, stderr, file, both (stderr and file)
    #[serde(default = "default_output")]
    pub output: String,

    /// Log file path (if output includes "file")
    #[serde(default = "default_log_file")]
    pub file: PathBuf,

    /// Enable colored output (text format only, stdout/stderr only)
    #[serde(default = "default_true")]
    pub color: bool,

    /// Per-module levels, e.g. `"cfcli::command::push" = "debug"`
    #[serde(default)]
    pub modules: HashMap<String, String>,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_format() -> String {
    LogFormat::Text.as_str().to_string()
}

fn default_output() -> String {
    LogOutput::Stderr.as_str().to_string()
}

fn default_true() -> bool {
    true
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_format(),
            output: default_output(),
            file: default_log_file(),
            color: default_true(),
            modules: HashMap::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Json,
    Text,
}

impl LogFormat {
    pub fn parse(value: &str) -> Result<Self, CommandError> {
        match value {
            "json" => Ok(Self::Json),
            "text" => Ok(Self::Text),
            other => Err(CommandError::Config(format!(
                "Invalid log format: {} (must be 'json' or 'text')",
                other
            ))),
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Text => "text",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogOutput {
    Stdout,
    Stderr,
    File,
    /// stderr and the log file
    Both,
}

impl LogOutput {
    pub fn parse(value: &str) -> Result<Self, CommandError> {
        match value {
            "stdout" => Ok(Self::Stdout),
            "stderr" => Ok(Self::Stderr),
            "file" => Ok(Self::File),
            "both" => Ok(Self::Both),
            other => Err(CommandError::Config(format!(
                "Invalid log output: {} (must be 'stdout', 'stderr', 'file', or 'both')",
                other
            ))),
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            Self::Stdout => "stdout",
            Self::Stderr => "stderr",
            Self::File => "file",
            Self::Both => "both",
        }
    }

    fn writes_file(self) -> bool {
        matches!(self, Self::File | Self::Both)
    }
}

/// Initialize the logging system
///
/// Priority order (highest to lowest):
/// 1. `CF_LOG` filter directives
/// 2. `CF_LOG_LEVEL`, `CF_LOG_FORMAT`, `CF_LOG_OUTPUT`
/// 3. CLI flags and settings file (already merged into `config`)
/// 4. Defaults
pub fn init_logging(config: Option<&LoggingConfig>) -> Result<(), CommandError> {
    let defaults = LoggingConfig::default();
    let config = config.unwrap_or(&defaults);

    let filter = build_env_filter(config)?;
    let format = LogFormat::parse(&env_or(FORMAT_ENV, &config.format))?;
    let output = LogOutput::parse(&env_or(OUTPUT_ENV, &config.output))?;
    let writer = build_writer(&config.file, output)?;
    let registry = Registry::default().with(filter);

    let installed = match format {
        LogFormat::Json => registry
            .with(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_timer(ChronoUtc::rfc_3339())
                    .with_writer(writer),
            )
            .try_init(),
        LogFormat::Text => registry
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_timer(ChronoUtc::rfc_3339())
                    .with_ansi(config.color && !output.writes_file())
                    .with_writer(writer),
            )
            .try_init(),
    };
    installed.map_err(|e| CommandError::Config(format!("Failed to install logger: {}", e)))
}

fn env_or(key: &str, fallback: &str) -> String {
    std::env::var(key)
        .ok()
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| fallback.to_string())
}

fn open_log_file(path: &Path) -> Result<Mutex<std::fs::File>, CommandError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| CommandError::Config(format!("Failed to create log directory: {}", e)))?;
    }
    std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map(Mutex::new)
        .map_err(|e| CommandError::Config(format!("Failed to open log file {:?}: {}", path, e)))
}

fn build_writer(file: &Path, output: LogOutput) -> Result<BoxMakeWriter, CommandError> {
    Ok(match output {
        LogOutput::Stdout => BoxMakeWriter::new(std::io::stdout),
        LogOutput::Stderr => BoxMakeWriter::new(std::io::stderr),
        LogOutput::File => BoxMakeWriter::new(open_log_file(file)?),
        LogOutput::Both => BoxMakeWriter::new(std::io::stderr.and(open_log_file(file)?)),
    })
}

/// `CF_LOG` wins outright; otherwise the level plus per-module directives.
fn build_env_filter(config: &LoggingConfig) -> Result<EnvFilter, CommandError> {
    if let Ok(filter) = EnvFilter::try_from_env(FILTER_ENV) {
        return Ok(filter);
    }

    let level = env_or(LEVEL_ENV, &config.level);
    if level == "off" {
        return Ok(EnvFilter::new("off"));
    }

    config
        .modules
        .iter()
        .try_fold(EnvFilter::new(&level), |filter, (module, module_level)| {
            let directive: Directive = format!("{}={}", module, module_level)
                .parse()
                .map_err(|e| CommandError::Config(format!("Invalid log directive: {}", e)))?;
            Ok(filter.add_directive(directive))
        })
}
