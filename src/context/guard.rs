//! RAII scope guard
//!
//! Entering through a guard ties the frame's lifetime to a Rust scope: the
//! frame is left when the guard is released explicitly or dropped, including
//! during unwinding and when an async body is dropped mid-flight.

use crate::context::id::ScopeId;
use crate::context::manager::ContextManager;
use crate::error::ContextError;
use tracing::error;

/// Active scope on a [`ContextManager`], left on release or drop.
#[must_use = "dropping the guard immediately leaves the scope"]
pub struct ScopeGuard<'a, V> {
    manager: &'a ContextManager<V>,
    scope: ScopeId,
    released: bool,
}

impl<V> ContextManager<V> {
    /// Enter `value` and return a guard that leaves the scope when done.
    pub fn enter_scope(&self, value: V) -> Result<ScopeGuard<'_, V>, ContextError> {
        let scope = self.enter(value)?;
        Ok(ScopeGuard {
            manager: self,
            scope,
            released: false,
        })
    }
}

impl<'a, V> ScopeGuard<'a, V> {
    /// Id of the frame this guard owns.
    pub fn id(&self) -> ScopeId {
        self.scope
    }

    /// Leave the scope now and return the popped value.
    ///
    /// The release is attempted exactly once; on failure the frame is left
    /// where it is and the drop handler does not retry.
    pub fn release(mut self) -> Result<V, ContextError> {
        self.released = true;
        self.manager.leave(self.scope)
    }
}

impl<V> Drop for ScopeGuard<'_, V> {
    fn drop(&mut self) {
        if self.released {
            return;
        }
        // Cannot propagate from drop, and panicking while unwinding aborts.
        if let Err(err) = self.manager.leave(self.scope) {
            error!(
                context = %self.manager.label(),
                scope = %self.scope,
                error = %err,
                "failed to leave scope on drop"
            );
        }
    }
}

impl<V> std::fmt::Debug for ScopeGuard<'_, V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScopeGuard")
            .field("context", &self.manager.label())
            .field("scope", &self.scope)
            .field("released", &self.released)
            .finish()
    }
}
