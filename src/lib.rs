//! Scoped Context: Stack-Based Ambient State
//!
//! A context manager holds "the current value" of one kind of ambient state for
//! the duration of an operation, so code deep in a call graph can read it
//! without the value being threaded through every call. Scopes are strictly
//! LIFO and owned by the id minted on entry; unbalanced, disallowed, or
//! interleaved use is reported as an error instead of silently corrupting the
//! current value.

pub mod config;
pub mod context;
pub mod error;
pub mod logging;

pub use context::{ContextManager, ContextOptions, ScopeGuard, ScopeId};
pub use error::{ContextError, RunError};
