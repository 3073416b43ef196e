//! Logging System
//!
//! Structured logging using the `tracing` crate. Context managers emit `trace`
//! events on every enter/leave and `warn`/`error` events on misuse; this module
//! installs a subscriber so applications can see them.

use crate::error::ConfigurationError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::fmt::time::ChronoUtc;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

const ENV_FILTER: &str = "SCOPED_CONTEXT_LOG";
const ENV_MODULES: &str = "SCOPED_CONTEXT_LOG_MODULES";
const ENV_FORMAT: &str = "SCOPED_CONTEXT_LOG_FORMAT";
const ENV_OUTPUT: &str = "SCOPED_CONTEXT_LOG_OUTPUT";

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Install a subscriber at all
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Log level: trace, debug, info, warn, error, off
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Output format: json, text (default: text)
    #[serde(default = "default_format")]
    pub format: String,

    /// Output destination: stdout, stderr, file
    #[serde(default = "default_output")]
    pub output: String,

    /// Log file path (if output is "file")
    #[serde(default = "default_log_file")]
    pub file: PathBuf,

    /// Enable colored output (text format only, stdout/stderr only)
    #[serde(default = "default_true")]
    pub color: bool,

    /// Module-specific log levels
    #[serde(default)]
    pub modules: HashMap<String, String>,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_format() -> String {
    "text".to_string()
}

fn default_output() -> String {
    "stdout".to_string()
}

fn default_log_file() -> PathBuf {
    PathBuf::from("scoped-context.log")
}

fn default_true() -> bool {
    true
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: default_true(),
            level: default_log_level(),
            format: default_format(),
            output: default_output(),
            file: default_log_file(),
            color: default_true(),
            modules: HashMap::new(),
        }
    }
}

/// Initialize the global logging subscriber
///
/// Priority order (highest to lowest):
/// 1. Environment variables (SCOPED_CONTEXT_LOG, SCOPED_CONTEXT_LOG_FORMAT, ...)
/// 2. Configuration
/// 3. Defaults
///
/// Fails if a global subscriber is already installed.
pub fn init_logging(config: Option<&LoggingConfig>) -> Result<(), ConfigurationError> {
    if config.is_some_and(|c| !c.enabled) {
        return Ok(());
    }

    let filter = build_env_filter(config)?;
    let format = determine_format(config)?;
    let output = determine_output(config)?;
    let use_color = config.map(|c| c.color).unwrap_or(true) && output != Output::File;
    let writer = make_writer(output, config)?;

    let base_subscriber = Registry::default().with(filter);
    let installed = if format == "json" {
        base_subscriber
            .with(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_timer(ChronoUtc::rfc_3339())
                    .with_writer(writer),
            )
            .try_init()
    } else {
        base_subscriber
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_timer(ChronoUtc::rfc_3339())
                    .with_ansi(use_color)
                    .with_writer(writer),
            )
            .try_init()
    };

    installed.map_err(|e| ConfigurationError::Logging(e.to_string()))
}

/// Build environment filter from config or environment variables
fn build_env_filter(config: Option<&LoggingConfig>) -> Result<EnvFilter, ConfigurationError> {
    if let Ok(filter) = EnvFilter::try_from_env(ENV_FILTER) {
        return Ok(filter);
    }

    let level = config.map(|c| c.level.as_str()).unwrap_or("info");
    if level == "off" {
        return Ok(EnvFilter::new("off"));
    }

    let mut filter = EnvFilter::new(level);

    if let Some(config) = config {
        for (module, module_level) in &config.modules {
            filter = filter.add_directive(parse_directive(module, module_level)?);
        }
    }

    if let Ok(modules_str) = std::env::var(ENV_MODULES) {
        for module_spec in modules_str.split(',') {
            if let Some((module, module_level)) = module_spec.split_once('=') {
                filter = filter.add_directive(parse_directive(module, module_level)?);
            }
        }
    }

    Ok(filter)
}

fn parse_directive(
    module: &str,
    level: &str,
) -> Result<tracing_subscriber::filter::Directive, ConfigurationError> {
    format!("{}={}", module.trim(), level.trim())
        .parse()
        .map_err(|e| ConfigurationError::Logging(format!("Invalid log directive: {}", e)))
}

/// Determine output format from config or environment
fn determine_format(config: Option<&LoggingConfig>) -> Result<String, ConfigurationError> {
    select_format(std::env::var(ENV_FORMAT).ok(), config)
}

/// A valid environment format wins; an unrecognized one falls back to config.
fn select_format(
    env_format: Option<String>,
    config: Option<&LoggingConfig>,
) -> Result<String, ConfigurationError> {
    if let Some(format) = env_format {
        if format == "json" || format == "text" {
            return Ok(format);
        }
    }

    let format = config.map(|c| c.format.as_str()).unwrap_or("text");
    if format != "json" && format != "text" {
        return Err(ConfigurationError::Logging(format!(
            "Invalid log format: {} (must be 'json' or 'text')",
            format
        )));
    }

    Ok(format.to_string())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Output {
    Stdout,
    Stderr,
    File,
}

/// Determine output destination from config or environment
fn determine_output(config: Option<&LoggingConfig>) -> Result<Output, ConfigurationError> {
    if let Ok(output) = std::env::var(ENV_OUTPUT) {
        return parse_output(&output);
    }
    parse_output(config.map(|c| c.output.as_str()).unwrap_or("stdout"))
}

fn parse_output(output: &str) -> Result<Output, ConfigurationError> {
    match output {
        "stdout" => Ok(Output::Stdout),
        "stderr" => Ok(Output::Stderr),
        "file" => Ok(Output::File),
        _ => Err(ConfigurationError::Logging(format!(
            "Invalid log output: {} (must be 'stdout', 'stderr', or 'file')",
            output
        ))),
    }
}

fn make_writer(
    output: Output,
    config: Option<&LoggingConfig>,
) -> Result<BoxMakeWriter, ConfigurationError> {
    match output {
        Output::Stdout => Ok(BoxMakeWriter::new(std::io::stdout)),
        Output::Stderr => Ok(BoxMakeWriter::new(std::io::stderr)),
        Output::File => {
            let log_file = config
                .map(|c| c.file.clone())
                .unwrap_or_else(default_log_file);

            if let Some(parent) = log_file.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent).map_err(|e| {
                    ConfigurationError::Logging(format!("Failed to create log directory: {}", e))
                })?;
            }
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(&log_file)
                .map_err(|e| {
                    ConfigurationError::Logging(format!(
                        "Failed to open log file {:?}: {}",
                        log_file, e
                    ))
                })?;
            Ok(BoxMakeWriter::new(Mutex::new(file)))
        }
    }
}
