//! # Detachable connection to one slot.
//!
//! [`SignalerConnection`] weakly refers to a connected slot. It does not keep
//! the slot, nor the signaler, alive and is safe to keep after both are gone.
//!
//! ## States
//! ```text
//!   Unbound ──(Signaler::connect)──► Bound-Connected ──(disconnect*)──► Bound-Disconnected
//!      ▲                                   │                                    │
//!      └────────────── reset() ────────────┴────────────────────────────────────┘
//! ```
//! - `Unbound`: default-constructed or reset; every operation is a no-op.
//! - `Bound-Disconnected` is terminal for the target: once any copy disconnects
//!   (or the signaler drops), every copy reports `is_connected() == false`.
//! - `clone`/`reset`/`swap` change which slot a handle points at, never the
//!   slot's own state.
//!
//! ## Identity
//! Two connections are equal iff they refer to the same slot; unbound
//! connections are equal to each other and sort before bound ones.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::{Arc, Weak};

use crate::slots::{SlotBase, SlotKey};

/// Handle to a slot returned by [`Signaler::connect`](crate::Signaler::connect).
#[derive(Clone, Default)]
pub struct SignalerConnection {
    slot: Option<Weak<dyn SlotBase>>,
}

impl SignalerConnection {
    pub(crate) fn new(slot: Weak<dyn SlotBase>) -> Self {
        Self { slot: Some(slot) }
    }

    fn target(&self) -> Option<Arc<dyn SlotBase>> {
        self.slot.as_ref()?.upgrade()
    }

    /// Address of the referenced slot; `None` when unbound.
    fn identity(&self) -> Option<usize> {
        self.slot
            .as_ref()
            .map(|slot| slot.as_ptr().cast::<()>() as usize)
    }

    /// Disconnects the slot without waiting for in-flight emissions.
    ///
    /// Emissions that start after this returns never invoke the slot; an
    /// emission already running may still invoke it. No-op when unbound or
    /// already disconnected.
    pub fn disconnect(&self) {
        if let Some(slot) = self.target() {
            slot.disconnect();
        }
    }

    /// Disconnects the slot, then blocks until every emission of its signaler
    /// that was in progress has finished.
    ///
    /// Must not be called from a slot of the same signaler (it would wait for
    /// its own emission and deadlock).
    pub fn disconnect_and_wait(&self) {
        if let Some(slot) = self.target() {
            slot.disconnect_and_wait();
        }
    }

    /// True while the referenced slot exists and has not been disconnected.
    #[must_use]
    pub fn is_connected(&self) -> bool {
        self.target().is_some_and(|slot| slot.is_connected())
    }

    /// Key of the referenced slot, while it still exists.
    #[must_use]
    pub fn key(&self) -> Option<SlotKey> {
        self.target().map(|slot| slot.key())
    }

    /// Unbinds this handle; the slot itself stays connected.
    pub fn reset(&mut self) {
        self.slot = None;
    }

    /// Exchanges the targets of two handles.
    pub fn swap(&mut self, other: &mut Self) {
        std::mem::swap(&mut self.slot, &mut other.slot);
    }
}

impl PartialEq for SignalerConnection {
    fn eq(&self, other: &Self) -> bool {
        self.identity() == other.identity()
    }
}

impl Eq for SignalerConnection {}

impl PartialOrd for SignalerConnection {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SignalerConnection {
    fn cmp(&self, other: &Self) -> Ordering {
        self.identity().cmp(&other.identity())
    }
}

impl Hash for SignalerConnection {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.identity().hash(state);
    }
}

impl fmt::Debug for SignalerConnection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignalerConnection")
            .field("bound", &self.slot.is_some())
            .field("key", &self.key())
            .field("connected", &self.is_connected())
            .finish()
    }
}
