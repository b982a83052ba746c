//! # signaler
//!
//! **Signaler** is a thread-safe, in-process signal/slot dispatcher.
//!
//! Slots (closures) are connected to a [`Signaler`] and invoked, in a
//! deterministic order, every time the signaler is emitted. Each connect returns
//! a [`SignalerConnection`] that can later disconnect the slot, independent of
//! the signaler's lifetime.
//!
//! ## Architecture
//! ### Overview
//! ```text
//!     ┌──────────────┐   ┌──────────────┐   ┌──────────────┐
//!     │  closure #1  │   │  closure #2  │   │  closure #3  │
//!     │  (group 0)   │   │  (group 0)   │   │  (group 1)   │
//!     └──────┬───────┘   └──────┬───────┘   └──────┬───────┘
//!            ▼ connect          ▼ connect          ▼ connect
//! ┌───────────────────────────────────────────────────────────────────┐
//! │  Signaler<A>  (exclusive owner)                                   │
//! │   └─► SignalerNode                                                │
//! │        - SlotIndex: BTreeMap<(group, sequence), Arc<SlotRecord>>  │
//! │        - next_sequence: AtomicU64 (never reused)                  │
//! │        - emission barrier: RwLock<()>                             │
//! └──────┬──────────────────┬──────────────────┬──────────────────────┘
//!        ▼ Weak             ▼ Weak             ▼ Weak
//!   SignalerConnection SignalerConnection SignalerConnection
//!   (copyable, may outlive the signaler; optionally wrapped in a guard)
//! ```
//!
//! ### Emission
//! ```text
//! emit(&args)
//!   ├─► read-lock emission barrier
//!   ├─► cursor walk over SlotIndex in (group, sequence) order
//!   │      ├─ slot disconnected?  ─► skip
//!   │      ├─ slot returns Ok/()  ─► continue
//!   │      └─ slot returns Err    ─► stop, return EmitError::SlotFailed
//!   └─► release barrier
//!
//! disconnect()           ─► flag off + unlink (never blocks on emissions)
//! disconnect_and_wait()  ─► flag off + unlink, then write-lock/unlock barrier
//!                           (returns after in-flight emissions finish)
//! ```
//!
//! ## Guarantees
//! - Within one emission, slots run by ascending group, then connection order.
//! - Once a disconnect returns, emissions that start afterwards never invoke the slot.
//! - A slot connected from inside a running slot is invoked by that same emission
//!   iff its group is not lower than the group being visited.
//! - The first slot error aborts the emission and is returned; there are no retries.
//!
//! ## Features
//! | Area              | Description                                                    | Key types / traits                                   |
//! |-------------------|----------------------------------------------------------------|------------------------------------------------------|
//! | **Signals**       | Connect closures, emit in group order, bulk disconnects.       | [`Signaler`], [`SlotKey`]                            |
//! | **Connections**   | Detachable handles and scoped disconnect.                      | [`SignalerConnection`], [`SignalerConnectionGuard`]  |
//! | **Slot results**  | Slots return `()` or `Result`; errors stop the emission.       | [`SlotOutput`], [`EmitError`], [`BoxError`]          |
//! | **Configuration** | Per-signaler label and default group.                          | [`SignalerConfig`]                                   |
//!
//! ## Logging
//! Diagnostics go through [`tracing`] (`trace` for individual slots, `debug` for
//! bulk operations and aborted emissions). Install any subscriber to see them.
//!
//! ## Example
//! ```rust
//! use std::sync::{Arc, Mutex};
//! use signaler::{Signaler, SignalerConfig, SignalerConnectionGuard};
//!
//! let sig: Signaler<str> = Signaler::with_config(SignalerConfig::default().with_name("chat"));
//! let seen = Arc::new(Mutex::new(Vec::new()));
//!
//! let s = Arc::clone(&seen);
//! sig.connect_in_group(move |msg: &str| s.lock().unwrap().push(format!("audit: {msg}")), 1);
//!
//! let s = Arc::clone(&seen);
//! let guard = SignalerConnectionGuard::new(
//!     sig.connect_in_group(move |msg: &str| s.lock().unwrap().push(format!("ui: {msg}")), 0),
//!     false,
//! );
//!
//! sig.emit("hello").unwrap();
//! drop(guard);
//! sig.emit("bye").unwrap();
//!
//! assert_eq!(
//!     *seen.lock().unwrap(),
//!     vec!["ui: hello", "audit: hello", "audit: bye"]
//! );
//! ```
mod connection;
mod core;
mod error;
mod slots;

// ---- Public re-exports ----

pub use crate::connection::{SignalerConnection, SignalerConnectionGuard};
pub use crate::core::{Signaler, SignalerConfig};
pub use crate::error::{BoxError, EmitError};
pub use crate::slots::{SlotKey, SlotOutput};
