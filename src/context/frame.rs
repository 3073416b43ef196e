//! Frame stack
//!
//! The LIFO storage behind a context manager. It knows nothing about nesting
//! policy or labels; the manager layers those on top.

use crate::context::id::ScopeId;

/// One active scope: the value it made current and the id that owns it.
#[derive(Debug, Clone)]
pub(crate) struct Frame<V> {
    pub value: V,
    pub scope_id: ScopeId,
}

/// Why a frame could not be popped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PopFailure {
    Empty,
    Mismatch { top: ScopeId },
}

#[derive(Debug)]
pub(crate) struct FrameStack<V> {
    frames: Vec<Frame<V>>,
    manager: u64,
    last_seq: u64,
}

impl<V> FrameStack<V> {
    pub fn new(manager: u64) -> Self {
        FrameStack {
            frames: Vec::new(),
            manager,
            last_seq: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn top(&self) -> Option<&Frame<V>> {
        self.frames.last()
    }

    /// Push `value` under a freshly minted id.
    pub fn push(&mut self, value: V) -> ScopeId {
        self.last_seq += 1;
        let scope_id = ScopeId::new(self.manager, self.last_seq);
        self.frames.push(Frame { value, scope_id });
        scope_id
    }

    /// Pop the top frame if it is owned by `scope_id`. Leaves the stack
    /// untouched on failure.
    pub fn pop_matching(&mut self, scope_id: ScopeId) -> Result<Frame<V>, PopFailure> {
        match self.frames.last() {
            None => Err(PopFailure::Empty),
            Some(top) if top.scope_id != scope_id => {
                Err(PopFailure::Mismatch { top: top.scope_id })
            }
            Some(_) => self.frames.pop().ok_or(PopFailure::Empty),
        }
    }
}
