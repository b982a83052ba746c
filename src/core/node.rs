//! # Signaler node: connect, disconnect and emit.
//!
//! The node owns everything a signaler shares with its slots and connections:
//! the [`SlotIndex`], the sequence counter, and the emission barrier.
//!
//! ## Architecture
//! ```text
//! Signaler ──Arc──► SignalerNode ──► SlotIndex ──Arc──► SlotRecord ──Weak──► SignalerNode
//!                        │                                   ▲
//!                        ├─ next_sequence (AtomicU64)        │ Weak
//!                        └─ emission (RwLock<()>)      SignalerConnection
//! ```
//!
//! ## Rules
//! - Sequences are drawn once per connect and never reused, so keys are unique.
//! - Every emission holds `emission` in read mode for its whole traversal.
//! - A waiting disconnect unlinks first, then takes `emission` in write mode
//!   and releases it: it returns once every emission that was in flight has finished.
//! - Non-waiting disconnects and connects never touch `emission`.
//! - No lock is held while a slot runs, except the emission read lock.

use std::borrow::Cow;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::RwLock;
use tracing::{debug, trace};

use crate::connection::SignalerConnection;
use crate::error::EmitError;
use crate::slots::{SlotBase, SlotFn, SlotIndex, SlotKey, SlotRecord};

/// Shared state behind one [`Signaler`](crate::Signaler).
pub(crate) struct SignalerNode<A: ?Sized> {
    name: Cow<'static, str>,
    slots: SlotIndex<A>,
    next_sequence: AtomicU64,
    emission: RwLock<()>,
}

impl<A: ?Sized + 'static> SignalerNode<A> {
    pub(crate) fn new(name: Cow<'static, str>) -> Arc<Self> {
        Arc::new(Self {
            name,
            slots: SlotIndex::new(),
            next_sequence: AtomicU64::new(0),
            emission: RwLock::new(()),
        })
    }

    pub(crate) fn name(&self) -> &str {
        &self.name
    }

    /// Registers `callable` in `group` and returns a connection to it.
    ///
    /// The record is fully built before it becomes visible in the index.
    pub(crate) fn connect(self: &Arc<Self>, callable: SlotFn<A>, group: i32) -> SignalerConnection {
        let sequence = self.next_sequence.fetch_add(1, Ordering::Relaxed);
        let key = SlotKey::new(group, sequence);
        let record = Arc::new(SlotRecord::new(key, callable, Arc::downgrade(self)));

        let base: Arc<dyn SlotBase> = record.clone();
        let connection = SignalerConnection::new(Arc::downgrade(&base));

        self.slots.insert(record);
        trace!(signaler = %self.name, group, sequence, "slot connected");
        connection
    }

    /// Invokes every connected slot in key order.
    ///
    /// Stops at the first slot error and returns it; later slots are skipped.
    pub(crate) fn emit(&self, args: &A) -> Result<(), EmitError> {
        let _in_flight = self.emission.read();

        let mut cursor = None;
        while let Some(slot) = self.slots.next_after(cursor) {
            let key = slot.key();
            cursor = Some(key);

            if !slot.is_connected() {
                continue;
            }
            if let Err(source) = slot.invoke(args) {
                debug!(signaler = %self.name, slot = %key, error = %source, "emission aborted by slot error");
                return Err(EmitError::SlotFailed {
                    signaler: self.name.clone(),
                    key,
                    source,
                });
            }
        }
        Ok(())
    }

    pub(crate) fn disconnect_slot(&self, record: &SlotRecord<A>) {
        if record.mark_disconnected() {
            let removed = self.slots.remove(record.key());
            trace!(signaler = %self.name, slot = %record.key(), "slot disconnected");
            drop(removed);
        }
    }

    pub(crate) fn disconnect_slot_and_wait(&self, record: &SlotRecord<A>) {
        self.disconnect_slot(record);
        self.wait_for_emissions();
    }

    /// Disconnects every slot in `group`; returns how many were removed.
    pub(crate) fn disconnect_group(&self, group: i32) -> usize {
        let removed = self.slots.remove_group(group);
        for record in &removed {
            record.mark_disconnected();
        }
        debug!(signaler = %self.name, group, count = removed.len(), "group disconnected");
        removed.len()
    }

    pub(crate) fn disconnect_group_and_wait(&self, group: i32) -> usize {
        let count = self.disconnect_group(group);
        self.wait_for_emissions();
        count
    }

    /// Disconnects every slot; returns how many were removed.
    pub(crate) fn disconnect_all_slots(&self) -> usize {
        let removed = self.slots.drain();
        for record in &removed {
            record.mark_disconnected();
        }
        debug!(signaler = %self.name, count = removed.len(), "all slots disconnected");
        removed.len()
    }

    pub(crate) fn disconnect_all_slots_and_wait(&self) -> usize {
        let count = self.disconnect_all_slots();
        self.wait_for_emissions();
        count
    }

    /// Number of slots currently in the index.
    pub(crate) fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Blocks until no emission holds the read side of the barrier.
    fn wait_for_emissions(&self) {
        drop(self.emission.write());
    }
}
