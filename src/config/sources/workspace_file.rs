//! Workspace config file source: <workspace>/scoped-context.toml

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::File;
use std::path::Path;
use tracing::debug;

/// File name looked up in a workspace directory
pub const WORKSPACE_CONFIG_FILE: &str = "scoped-context.toml";

/// Add the workspace config file to builder if it exists.
pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
    workspace_root: &Path,
) -> ConfigBuilder<DefaultState> {
    let config_path = workspace_root.join(WORKSPACE_CONFIG_FILE);
    if config_path.exists() {
        builder.add_source(File::from(config_path).required(false))
    } else {
        debug!(config_path = %config_path.display(), "No workspace configuration file");
        builder
    }
}

/// Add an explicit config file; it must exist.
pub fn add_required(
    builder: ConfigBuilder<DefaultState>,
    path: &Path,
) -> ConfigBuilder<DefaultState> {
    builder.add_source(File::from(path).required(true))
}
