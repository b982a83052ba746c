//! # Signaler: the user-facing handle of a signal.
//!
//! [`Signaler<A>`] owns one node exclusively. Slots are closures taking `&A`;
//! signals with several arguments use a tuple for `A`.
//!
//! ## Key responsibilities
//! - connect slots into ordered groups ([`Signaler::connect`], [`Signaler::connect_in_group`])
//! - emit: invoke connected slots in `(group, sequence)` order ([`Signaler::emit`])
//! - bulk disconnects by group or for all slots, with or without waiting
//! - disconnect every remaining slot on drop (without waiting)
//!
//! ## Example
//! ```rust
//! use std::sync::Arc;
//! use std::sync::atomic::{AtomicUsize, Ordering};
//! use signaler::Signaler;
//!
//! let sig: Signaler<(String, u32)> = Signaler::new();
//! let total = Arc::new(AtomicUsize::new(0));
//!
//! let t = Arc::clone(&total);
//! let conn = sig.connect(move |(_, n): &(String, u32)| {
//!     t.fetch_add(*n as usize, Ordering::Relaxed);
//! });
//!
//! sig.emit(&("tick".to_string(), 5)).unwrap();
//! conn.disconnect();
//! sig.emit(&("tick".to_string(), 5)).unwrap();
//!
//! assert_eq!(total.load(Ordering::Relaxed), 5);
//! assert!(!conn.is_connected());
//! ```
//!
//! ## Concurrency
//! All methods take `&self`; a `Signaler` can be shared across threads (e.g. in
//! an `Arc`). Concurrent emissions traverse independently, so one slot may run
//! on several threads at once.

use std::fmt;
use std::sync::Arc;

use tracing::debug;

use crate::connection::SignalerConnection;
use crate::core::config::SignalerConfig;
use crate::core::node::SignalerNode;
use crate::error::EmitError;
use crate::slots::SlotOutput;

/// A signal that invokes its connected slots in group order.
pub struct Signaler<A: ?Sized + 'static> {
    node: Arc<SignalerNode<A>>,
    default_group: i32,
}

impl<A: ?Sized + 'static> Signaler<A> {
    /// Creates a signaler with [`SignalerConfig::default`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(SignalerConfig::default())
    }

    /// Creates a signaler with the given configuration.
    #[must_use]
    pub fn with_config(cfg: SignalerConfig) -> Self {
        Self {
            node: SignalerNode::new(cfg.name),
            default_group: cfg.default_group,
        }
    }

    /// Connects `slot` into the configured default group.
    ///
    /// See [`Signaler::connect_in_group`].
    pub fn connect<F, R>(&self, slot: F) -> SignalerConnection
    where
        F: Fn(&A) -> R + Send + Sync + 'static,
        R: SlotOutput,
    {
        self.connect_in_group(slot, self.default_group)
    }

    /// Connects `slot` into `group` and returns a connection to it.
    ///
    /// Lower groups run first; within a group slots run in connection order.
    /// The returned connection may be dropped freely: dropping it does **not**
    /// disconnect the slot (use [`SignalerConnectionGuard`](crate::SignalerConnectionGuard)
    /// for that).
    ///
    /// A slot connected while an emission is running:
    /// - from inside a slot of that emission, is invoked by it iff `group` is
    ///   not lower than the group being visited;
    /// - from another thread, may or may not be invoked by it.
    pub fn connect_in_group<F, R>(&self, slot: F, group: i32) -> SignalerConnection
    where
        F: Fn(&A) -> R + Send + Sync + 'static,
        R: SlotOutput,
    {
        self.node
            .connect(Box::new(move |args: &A| slot(args).into_slot_result()), group)
    }

    /// Invokes every connected slot with `args`, in `(group, sequence)` order.
    ///
    /// ### Errors
    /// Returns [`EmitError::SlotFailed`] for the first slot that returns an
    /// error; slots after it are not invoked by this emission.
    ///
    /// ### Notes
    /// - A slot disconnected before the traversal reaches it is skipped.
    /// - Calling `emit`, or any `*_and_wait` disconnect, on the same signaler
    ///   from inside one of its slots is not supported and may deadlock.
    pub fn emit(&self, args: &A) -> Result<(), EmitError> {
        self.node.emit(args)
    }

    /// Disconnects every slot in `group` without waiting.
    ///
    /// Returns the number of slots removed.
    pub fn disconnect_group(&self, group: i32) -> usize {
        self.node.disconnect_group(group)
    }

    /// Disconnects every slot in `group`, then blocks until emissions already
    /// in progress have finished.
    ///
    /// Returns the number of slots removed.
    pub fn disconnect_group_and_wait(&self, group: i32) -> usize {
        self.node.disconnect_group_and_wait(group)
    }

    /// Disconnects every slot without waiting.
    ///
    /// Returns the number of slots removed.
    pub fn disconnect_all_slots(&self) -> usize {
        self.node.disconnect_all_slots()
    }

    /// Disconnects every slot, then blocks until emissions already in progress
    /// have finished.
    ///
    /// Returns the number of slots removed.
    pub fn disconnect_all_slots_and_wait(&self) -> usize {
        self.node.disconnect_all_slots_and_wait()
    }

    /// Number of connected slots.
    ///
    /// Exact when no other thread connects or disconnects concurrently;
    /// otherwise a momentary approximation.
    #[must_use]
    pub fn slot_count(&self) -> usize {
        self.node.slot_count()
    }

    /// Label from [`SignalerConfig::name`].
    #[must_use]
    pub fn name(&self) -> &str {
        self.node.name()
    }
}

impl<A: ?Sized + 'static> Default for Signaler<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: ?Sized + 'static> Drop for Signaler<A> {
    fn drop(&mut self) {
        let count = self.node.disconnect_all_slots();
        if count > 0 {
            debug!(signaler = %self.node.name(), count, "signaler dropped with connected slots");
        }
    }
}

impl<A: ?Sized + 'static> fmt::Debug for Signaler<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Signaler")
            .field("name", &self.name())
            .field("default_group", &self.default_group)
            .field("slot_count", &self.slot_count())
            .finish()
    }
}
