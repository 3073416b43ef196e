//! Configuration System
//!
//! Layered configuration for context-manager policy and logging. Each named
//! entry under `[contexts]` describes one kind of ambient state; code that
//! creates a manager for that kind looks its policy up here.

use crate::logging::LoggingConfig;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

mod facade;
mod merge;
mod sources;

pub use facade::ConfigLoader;
pub use sources::workspace_file::WORKSPACE_CONFIG_FILE;

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error", "off"];
const LOG_FORMATS: &[&str] = &["text", "json"];
const LOG_OUTPUTS: &[&str] = &["stdout", "stderr", "file"];

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScopedContextConfig {
    /// Per-kind manager policy, keyed by context name
    #[serde(default)]
    pub contexts: HashMap<String, ManagerConfig>,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Policy for one kind of ambient state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManagerConfig {
    /// Whether a scope may be entered while another is active
    #[serde(default = "default_true")]
    pub allows_nesting: bool,

    /// Label used in log events and errors (defaults to the context name)
    #[serde(default)]
    pub label: Option<String>,
}

fn default_true() -> bool {
    true
}

impl Default for ManagerConfig {
    fn default() -> Self {
        Self {
            allows_nesting: default_true(),
            label: None,
        }
    }
}

/// Configuration validation errors
#[derive(Debug, Clone)]
pub enum ValidationError {
    Context(String, String),
    Logging(String),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::Context(name, msg) => write!(f, "Context '{}': {}", name, msg),
            ValidationError::Logging(msg) => write!(f, "Logging: {}", msg),
        }
    }
}

impl std::error::Error for ValidationError {}

impl ManagerConfig {
    pub fn validate(&self) -> Result<(), String> {
        if let Some(label) = &self.label {
            if label.trim().is_empty() {
                return Err("Label cannot be empty".to_string());
            }
        }
        Ok(())
    }
}

impl ScopedContextConfig {
    /// Policy for the named context, or the default policy if it is not configured.
    pub fn manager(&self, name: &str) -> ManagerConfig {
        self.contexts.get(name).cloned().unwrap_or_default()
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        for (name, context) in &self.contexts {
            if name.trim().is_empty() {
                errors.push(ValidationError::Context(
                    name.clone(),
                    "Context name cannot be empty".to_string(),
                ));
            }
            if let Err(e) = context.validate() {
                errors.push(ValidationError::Context(name.clone(), e));
            }
        }

        let logging = &self.logging;
        if !LOG_LEVELS.contains(&logging.level.as_str()) {
            errors.push(ValidationError::Logging(format!(
                "Invalid level '{}' (expected one of {})",
                logging.level,
                LOG_LEVELS.join(", ")
            )));
        }
        if !LOG_FORMATS.contains(&logging.format.as_str()) {
            errors.push(ValidationError::Logging(format!(
                "Invalid format '{}' (expected one of {})",
                logging.format,
                LOG_FORMATS.join(", ")
            )));
        }
        if !LOG_OUTPUTS.contains(&logging.output.as_str()) {
            errors.push(ValidationError::Logging(format!(
                "Invalid output '{}' (expected one of {})",
                logging.output,
                LOG_OUTPUTS.join(", ")
            )));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
