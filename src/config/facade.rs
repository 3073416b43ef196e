//! Config loader: assembles sources, deserializes, validates.

use crate::config::merge::builder_with_defaults;
use crate::config::sources::{environment, workspace_file};
use crate::config::ScopedContextConfig;
use crate::error::ConfigurationError;
use config::builder::DefaultState;
use config::ConfigBuilder;
use std::path::Path;
use tracing::debug;

/// Loads [`ScopedContextConfig`] from defaults, a file, and the environment.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration for a workspace.
    ///
    /// Precedence (highest to lowest):
    /// 1. Environment variables (SCOPED_CONTEXT__...)
    /// 2. <workspace_root>/scoped-context.toml, if present
    /// 3. Defaults
    pub fn load(workspace_root: &Path) -> Result<ScopedContextConfig, ConfigurationError> {
        let builder = workspace_file::add_to_builder(builder_with_defaults()?, workspace_root);
        Self::finish(builder)
    }

    /// Load configuration from an explicit file, which must exist.
    pub fn load_from_file(path: &Path) -> Result<ScopedContextConfig, ConfigurationError> {
        let builder = workspace_file::add_required(builder_with_defaults()?, path);
        Self::finish(builder)
    }

    fn finish(
        builder: ConfigBuilder<DefaultState>,
    ) -> Result<ScopedContextConfig, ConfigurationError> {
        let config: ScopedContextConfig = environment::add_to_builder(builder)
            .build()?
            .try_deserialize()?;

        config.validate().map_err(|errors| {
            let error_msgs: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
            ConfigurationError::Invalid(format!(
                "Configuration validation failed:\n{}",
                error_msgs.join("\n")
            ))
        })?;

        debug!(contexts = config.contexts.len(), "Configuration loaded");
        Ok(config)
    }
}
