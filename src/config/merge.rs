//! Merge rules: defaults, override order, conflict handling.

use config::builder::DefaultState;
use config::Config;
use config::ConfigBuilder;
use config::ConfigError;

/// Create a Config builder with merge policy defaults applied.
///
/// Sources added afterwards override these in the order they are added.
pub fn builder_with_defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    Config::builder()
        .set_default("logging.enabled", true)?
        .set_default("logging.level", "info")?
        .set_default("logging.format", "text")?
        .set_default("logging.output", "stdout")
}
