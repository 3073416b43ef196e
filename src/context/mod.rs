//! Context domain: frame stack, scope ids, manager, guards, and scoped runs.
//! Consumers own their managers explicitly; there is no process-wide registry.

mod frame;
pub mod guard;
pub mod id;
pub mod manager;
pub mod options;
mod run;

pub use guard::ScopeGuard;
pub use id::ScopeId;
pub use manager::ContextManager;
pub use options::ContextOptions;
