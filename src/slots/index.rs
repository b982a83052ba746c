//! # Slot index: the ordered set of live slots of one signaler.
//!
//! A [`BTreeMap`] keyed by [`SlotKey`] behind a `parking_lot::Mutex`. The lock
//! covers a single insert, remove, or lookup and is never held while a slot
//! runs or while a removed record is dropped.
//!
//! ## Traversal
//! Emission walks the index with a cursor instead of an iterator:
//! ```text
//! cursor = None
//! loop {
//!     lock ─► first entry with key > cursor ─► clone Arc ─► unlock
//!     cursor = key; invoke
//! }
//! ```
//! Each step observes the index as it is at that moment, so entries inserted
//! ahead of the cursor are visited and entries removed before the cursor
//! reaches them are not.

use std::collections::BTreeMap;
use std::ops::Bound;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::slots::{SlotKey, SlotRecord};

/// Thread-safe ordered map of connected slots.
pub(crate) struct SlotIndex<A: ?Sized> {
    entries: Mutex<BTreeMap<SlotKey, Arc<SlotRecord<A>>>>,
}

impl<A: ?Sized> SlotIndex<A> {
    pub(crate) fn new() -> Self {
        Self {
            entries: Mutex::new(BTreeMap::new()),
        }
    }

    /// Inserts a record under its own key.
    pub(crate) fn insert(&self, record: Arc<SlotRecord<A>>) {
        let key = record.key();
        let previous = self.entries.lock().insert(key, record);
        debug_assert!(previous.is_none(), "slot key {key} inserted twice");
    }

    /// Removes the entry for `key`; `None` if it is already gone.
    pub(crate) fn remove(&self, key: SlotKey) -> Option<Arc<SlotRecord<A>>> {
        self.entries.lock().remove(&key)
    }

    /// Removes every entry of `group`, returning them in key order.
    pub(crate) fn remove_group(&self, group: i32) -> Vec<Arc<SlotRecord<A>>> {
        let mut entries = self.entries.lock();
        let keys: Vec<SlotKey> = entries
            .range(SlotKey::group_start(group)..=SlotKey::group_end(group))
            .map(|(key, _)| *key)
            .collect();
        keys.iter().filter_map(|key| entries.remove(key)).collect()
    }

    /// Removes every entry, returning them in key order.
    pub(crate) fn drain(&self) -> Vec<Arc<SlotRecord<A>>> {
        let taken = std::mem::take(&mut *self.entries.lock());
        taken.into_values().collect()
    }

    /// First entry strictly after `cursor` (or the first entry overall).
    pub(crate) fn next_after(&self, cursor: Option<SlotKey>) -> Option<Arc<SlotRecord<A>>> {
        let lower = match cursor {
            Some(key) => Bound::Excluded(key),
            None => Bound::Unbounded,
        };
        let entries = self.entries.lock();
        entries
            .range((lower, Bound::Unbounded))
            .next()
            .map(|(_, record)| Arc::clone(record))
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.lock().len()
    }
}
