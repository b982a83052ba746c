//! # Slot record: one connected callable plus its bookkeeping.
//!
//! ```text
//! SlotIndex ──Arc──► SlotRecord<A> ◄──Weak── SignalerConnection (any number of copies)
//!                        │
//!                        └──Weak──► SignalerNode<A>
//! ```
//!
//! ## Rules
//! - `connected` starts `true` and only ever flips to `false`.
//! - The record never keeps its node alive; connections never keep the record alive.
//! - [`SlotBase`] is the type-erased view connections use, so a connection does
//!   not carry the signal's argument type.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Weak;

use crate::core::SignalerNode;
use crate::error::BoxError;
use crate::slots::SlotKey;

/// Stored form of a connected callable.
pub(crate) type SlotFn<A> = Box<dyn Fn(&A) -> Result<(), BoxError> + Send + Sync>;

/// Argument-type-erased operations a connection can perform on its slot.
pub(crate) trait SlotBase: Send + Sync {
    /// Key under which the slot was connected.
    fn key(&self) -> SlotKey;

    /// Whether the slot has not been disconnected yet.
    fn is_connected(&self) -> bool;

    /// Disconnects the slot without waiting for in-flight emissions.
    fn disconnect(&self);

    /// Disconnects the slot, then blocks until in-flight emissions finish.
    ///
    /// Deadlocks if called from a slot of the same signaler.
    fn disconnect_and_wait(&self);
}

/// One connected slot.
pub(crate) struct SlotRecord<A: ?Sized> {
    key: SlotKey,
    callable: SlotFn<A>,
    connected: AtomicBool,
    node: Weak<SignalerNode<A>>,
}

impl<A: ?Sized> SlotRecord<A> {
    pub(crate) fn new(key: SlotKey, callable: SlotFn<A>, node: Weak<SignalerNode<A>>) -> Self {
        Self {
            key,
            callable,
            connected: AtomicBool::new(true),
            node,
        }
    }

    #[inline]
    pub(crate) fn key(&self) -> SlotKey {
        self.key
    }

    #[inline]
    pub(crate) fn is_connected(&self) -> bool {
        self.connected.load(Ordering::Acquire)
    }

    /// Clears the connected flag.
    ///
    /// Returns `true` only for the call that performed the transition.
    #[inline]
    pub(crate) fn mark_disconnected(&self) -> bool {
        self.connected.swap(false, Ordering::AcqRel)
    }

    #[inline]
    pub(crate) fn invoke(&self, args: &A) -> Result<(), BoxError> {
        (self.callable)(args)
    }
}

impl<A: ?Sized + 'static> SlotBase for SlotRecord<A> {
    fn key(&self) -> SlotKey {
        self.key
    }

    fn is_connected(&self) -> bool {
        SlotRecord::is_connected(self)
    }

    fn disconnect(&self) {
        match self.node.upgrade() {
            Some(node) => node.disconnect_slot(self),
            None => {
                self.mark_disconnected();
            }
        }
    }

    fn disconnect_and_wait(&self) {
        match self.node.upgrade() {
            Some(node) => node.disconnect_slot_and_wait(self),
            None => {
                self.mark_disconnected();
            }
        }
    }
}
