//! Construction options for a context manager.

use crate::config::ManagerConfig;

pub(crate) const DEFAULT_LABEL: &str = "context";

/// Options accepted by [`ContextManager::create`](crate::context::ContextManager::create).
#[derive(Debug, Clone)]
pub struct ContextOptions<V> {
    /// Whether `enter` is permitted while another frame is active
    pub allows_nesting: bool,

    /// Value entered at construction, so the manager starts with a current value
    pub default: Option<V>,

    /// Name used in log events and error messages
    pub label: Option<String>,
}

impl<V> Default for ContextOptions<V> {
    fn default() -> Self {
        Self {
            allows_nesting: true,
            default: None,
            label: None,
        }
    }
}

impl<V> ContextOptions<V> {
    pub fn allows_nesting(mut self, allows_nesting: bool) -> Self {
        self.allows_nesting = allows_nesting;
        self
    }

    pub fn with_default(mut self, value: V) -> Self {
        self.default = Some(value);
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Options carrying the nesting policy and label from configuration.
    pub fn from_config(config: &ManagerConfig) -> Self {
        Self {
            allows_nesting: config.allows_nesting,
            default: None,
            label: config.label.clone(),
        }
    }
}
