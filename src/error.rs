//! Error types for scoped context management.

use crate::context::ScopeId;
use thiserror::Error;

/// Structural misuse of a context manager.
///
/// Every variant indicates a bug in the caller (unbalanced scopes, disallowed
/// nesting, or one manager being driven by several tasks at once). None of
/// them are transient and none are retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContextError {
    #[error("No active frame in context '{context}'")]
    EmptyContext { context: String },

    #[error("Cannot leave scope {scope} of context '{context}': no active frame")]
    StackUnderflow { context: String, scope: ScopeId },

    #[error(
        "Scope mismatch in context '{context}': top frame is {expected}, got {found}. \
         Scopes were left out of order, most likely because one manager is shared by \
         concurrently running tasks"
    )]
    ScopeMismatch {
        context: String,
        expected: ScopeId,
        found: ScopeId,
    },

    #[error("Context '{context}' does not allow nesting (scope {active} is active)")]
    NestingViolation { context: String, active: ScopeId },
}

/// Failure of a scoped run whose body is itself fallible.
#[derive(Debug, Error)]
pub enum RunError<E> {
    /// Entering failed, or the body succeeded and releasing failed.
    #[error(transparent)]
    Context(#[from] ContextError),

    /// The body failed; its frame was released.
    #[error("Scoped body failed: {0}")]
    Body(E),

    /// The body failed and releasing its frame failed too.
    #[error("{release} (body failed first: {body})")]
    ReleaseAfterBody { release: ContextError, body: E },
}

impl<E> RunError<E> {
    /// Body error, if the body failed.
    pub fn body(&self) -> Option<&E> {
        match self {
            RunError::Body(body) | RunError::ReleaseAfterBody { body, .. } => Some(body),
            RunError::Context(_) => None,
        }
    }

    /// Structural error, if entering or releasing the scope failed.
    pub fn context(&self) -> Option<&ContextError> {
        match self {
            RunError::Context(err) | RunError::ReleaseAfterBody { release: err, .. } => Some(err),
            RunError::Body(_) => None,
        }
    }
}

/// Configuration and logging setup errors
#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error("Configuration error: {0}")]
    Invalid(String),

    #[error("Logging setup failed: {0}")]
    Logging(String),
}

impl From<config::ConfigError> for ConfigurationError {
    fn from(err: config::ConfigError) -> Self {
        ConfigurationError::Invalid(err.to_string())
    }
}
