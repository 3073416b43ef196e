//! Context Manager
//!
//! Stack of ambient values with enter/leave ownership checks. One manager is
//! created per kind of ambient state and handed to the code that needs it.

use crate::config::ManagerConfig;
use crate::context::frame::{FrameStack, PopFailure};
use crate::context::id::{next_manager_number, ScopeId};
use crate::context::options::{ContextOptions, DEFAULT_LABEL};
use crate::error::ContextError;
use parking_lot::Mutex;
use std::fmt;
use tracing::{trace, warn};

/// Scoped holder of "the current value" of one kind of ambient state.
///
/// The stack lock is held only for the duration of a single operation, never
/// across a scoped body. Interleaved use from several tasks is therefore not
/// prevented; it surfaces as [`ContextError::ScopeMismatch`] or
/// [`ContextError::StackUnderflow`] when the out-of-order `leave` happens.
pub struct ContextManager<V> {
    label: String,
    allows_nesting: bool,
    stack: Mutex<FrameStack<V>>,
}

impl<V> ContextManager<V> {
    /// Create a manager. If `options.default` is set it is entered right away.
    pub fn create(options: ContextOptions<V>) -> Self {
        let mut stack = FrameStack::new(next_manager_number());
        let label = options.label.unwrap_or_else(|| DEFAULT_LABEL.to_string());
        if let Some(value) = options.default {
            let scope = stack.push(value);
            trace!(context = %label, %scope, "entered default scope");
        }
        Self {
            label,
            allows_nesting: options.allows_nesting,
            stack: Mutex::new(stack),
        }
    }

    /// Create an empty manager that allows nesting.
    pub fn new() -> Self {
        Self::create(ContextOptions::default())
    }

    /// Create a manager whose policy comes from configuration. A label set in
    /// `config` wins over `label`.
    pub fn from_config(label: &str, config: &ManagerConfig, default: Option<V>) -> Self {
        let mut options = ContextOptions::from_config(config);
        if options.label.is_none() {
            options.label = Some(label.to_string());
        }
        options.default = default;
        Self::create(options)
    }

    /// Name used in log events and errors.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Whether `enter` is permitted while a frame is active.
    pub fn allows_nesting(&self) -> bool {
        self.allows_nesting
    }

    /// Number of active frames.
    pub fn depth(&self) -> usize {
        self.stack.lock().len()
    }

    /// Whether any scope is active.
    pub fn has(&self) -> bool {
        !self.stack.lock().is_empty()
    }

    /// Make `value` current. The returned id must be passed to [`leave`](Self::leave).
    pub fn enter(&self, value: V) -> Result<ScopeId, ContextError> {
        let mut stack = self.stack.lock();
        if !self.allows_nesting {
            if let Some(active) = stack.top() {
                let active = active.scope_id;
                warn!(context = %self.label, %active, "nested enter rejected");
                return Err(ContextError::NestingViolation {
                    context: self.label.clone(),
                    active,
                });
            }
        }
        let scope = stack.push(value);
        trace!(context = %self.label, %scope, depth = stack.len(), "entered scope");
        Ok(scope)
    }

    /// Pop the top frame, which must be owned by `scope`, and return its value.
    pub fn leave(&self, scope: ScopeId) -> Result<V, ContextError> {
        let mut stack = self.stack.lock();
        match stack.pop_matching(scope) {
            Ok(frame) => {
                trace!(context = %self.label, %scope, depth = stack.len(), "left scope");
                Ok(frame.value)
            }
            Err(PopFailure::Empty) => {
                warn!(context = %self.label, %scope, "leave on empty context");
                Err(ContextError::StackUnderflow {
                    context: self.label.clone(),
                    scope,
                })
            }
            Err(PopFailure::Mismatch { top }) => {
                warn!(
                    context = %self.label,
                    expected = %top,
                    found = %scope,
                    depth = stack.len(),
                    "scope left out of order"
                );
                Err(ContextError::ScopeMismatch {
                    context: self.label.clone(),
                    expected: top,
                    found: scope,
                })
            }
        }
    }

    /// Id of the top frame.
    pub fn id(&self) -> Result<ScopeId, ContextError> {
        self.stack
            .lock()
            .top()
            .map(|frame| frame.scope_id)
            .ok_or_else(|| self.empty())
    }

    pub(crate) fn empty(&self) -> ContextError {
        ContextError::EmptyContext {
            context: self.label.clone(),
        }
    }
}

impl<V: Clone> ContextManager<V> {
    /// Current value; fails if no scope is active.
    pub fn get(&self) -> Result<V, ContextError> {
        self.current().ok_or_else(|| self.empty())
    }

    /// Current value, or `None` if no scope is active.
    pub fn current(&self) -> Option<V> {
        self.stack.lock().top().map(|frame| frame.value.clone())
    }
}

impl<V> Default for ContextManager<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> fmt::Debug for ContextManager<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContextManager")
            .field("label", &self.label)
            .field("allows_nesting", &self.allows_nesting)
            .field("depth", &self.depth())
            .finish()
    }
}
