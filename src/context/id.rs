//! Scope identifiers
//!
//! A `ScopeId` pairs the minting manager's process-unique number with a
//! per-manager sequence number. Neither part is ever reused, so a stale id or
//! an id handed to the wrong manager can never match a live frame.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Token returned by `enter` and required by the matching `leave`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScopeId {
    manager: u64,
    seq: u64,
}

impl ScopeId {
    pub(crate) fn new(manager: u64, seq: u64) -> Self {
        ScopeId { manager, seq }
    }

    /// Number of the manager that minted this id.
    pub fn manager(self) -> u64 {
        self.manager
    }

    /// Position of this id in its manager's minting order (starting at 1).
    pub fn seq(self) -> u64 {
        self.seq
    }
}

impl fmt::Display for ScopeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.manager, self.seq)
    }
}

/// Allocate the next manager number
pub(crate) fn next_manager_number() -> u64 {
    static COUNTER: AtomicU64 = AtomicU64::new(1);
    COUNTER.fetch_add(1, Ordering::Relaxed)
}
