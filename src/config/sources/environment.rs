//! Environment source: SCOPED_CONTEXT__SECTION__KEY=value

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::Environment;

pub const ENV_PREFIX: &str = "SCOPED_CONTEXT";
const ENV_SEPARATOR: &str = "__";

/// Add environment overrides to builder. Values such as `false` or `42` are
/// parsed into their typed form.
pub fn add_to_builder(builder: ConfigBuilder<DefaultState>) -> ConfigBuilder<DefaultState> {
    builder.add_source(
        Environment::with_prefix(ENV_PREFIX)
            .prefix_separator(ENV_SEPARATOR)
            .separator(ENV_SEPARATOR)
            .try_parsing(true),
    )
}
