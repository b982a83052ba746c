//! Error types produced by signal emission.
//!
//! - [`EmitError`]: an emission was aborted because a slot reported failure.
//! - [`BoxError`]: the type-erased payload a slot returns on failure.
//!
//! Connecting and disconnecting never fail; only [`Signaler::emit`](crate::Signaler::emit)
//! returns an error. [`EmitError`] provides helper methods (`as_label`, `as_message`)
//! for logs and metrics.

use std::borrow::Cow;

use thiserror::Error;

use crate::slots::SlotKey;

/// Type-erased error returned by a failing slot.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// # Errors produced by an emission.
///
/// The engine is fail-fast: the first slot error stops the traversal and is
/// returned to the caller of [`Signaler::emit`](crate::Signaler::emit). Slots
/// already invoked are not rolled back and slots ordered after the failing one
/// are not invoked.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum EmitError {
    /// A slot returned an error; the remainder of the emission was skipped.
    #[error("slot {key} of signaler '{signaler}' failed: {source}")]
    SlotFailed {
        /// Name of the emitting signaler (see [`SignalerConfig::name`](crate::SignalerConfig::name)).
        signaler: Cow<'static, str>,
        /// Key of the failing slot.
        key: SlotKey,
        /// The error returned by the slot.
        #[source]
        source: BoxError,
    },
}

impl EmitError {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use signaler::{EmitError, Signaler};
    ///
    /// let sig: Signaler<u32> = Signaler::new();
    /// sig.connect(|_: &u32| Err::<(), _>("boom"));
    ///
    /// let err: EmitError = sig.emit(&1).unwrap_err();
    /// assert_eq!(err.as_label(), "slot_failed");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            EmitError::SlotFailed { .. } => "slot_failed",
        }
    }

    /// Returns a human-readable message with details about the error.
    pub fn as_message(&self) -> String {
        match self {
            EmitError::SlotFailed { key, source, .. } => format!("slot {key}: {source}"),
        }
    }

    /// Key of the slot that failed.
    pub fn key(&self) -> SlotKey {
        match self {
            EmitError::SlotFailed { key, .. } => *key,
        }
    }
}
