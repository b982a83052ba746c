//! # Slot ordering key.
//!
//! Every slot is stored under a [`SlotKey`] `(group, sequence)`. The derived
//! ordering (group first, then sequence) is the emission order:
//!
//! ```text
//! (−1, 4) < (0, 1) < (0, 2) < (0, 9) < (3, 3)
//!  └ lower groups first   └ FIFO within a group
//! ```
//!
//! Sequences come from a per-signaler counter that only grows, so keys are
//! unique and a slot connected later always sorts after earlier slots of the
//! same group.

use std::fmt;

/// Position of a slot in its signaler's emission order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SlotKey {
    /// Invocation tier; lower groups run first.
    pub group: i32,
    /// Connection order within the signaler; never reused.
    pub sequence: u64,
}

impl SlotKey {
    /// Creates a key.
    pub const fn new(group: i32, sequence: u64) -> Self {
        Self { group, sequence }
    }

    /// Smallest key in `group`.
    pub(crate) const fn group_start(group: i32) -> Self {
        Self::new(group, 0)
    }

    /// Largest key in `group`.
    pub(crate) const fn group_end(group: i32) -> Self {
        Self::new(group, u64::MAX)
    }
}

impl fmt::Display for SlotKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.group, self.sequence)
    }
}
