//! # Signaler configuration.
//!
//! Provides [`SignalerConfig`], the per-signaler settings applied at construction.
//!
//! Config is used in two ways:
//! 1. **Diagnostics**: `name` labels log fields and [`EmitError`](crate::EmitError)s.
//! 2. **Connect defaults**: `Signaler::connect` places slots into `default_group`.

use std::borrow::Cow;

/// Configuration for a single [`Signaler`](crate::Signaler).
///
/// ## Field semantics
/// - `name`: label reported in logs and errors (not required to be unique)
/// - `default_group`: group used by `connect`; `connect_in_group` overrides it
#[derive(Clone, Debug)]
pub struct SignalerConfig {
    /// Human-readable label for this signaler.
    pub name: Cow<'static, str>,

    /// Group assigned to slots connected without an explicit group.
    ///
    /// Groups are emitted in ascending order, so a negative default places
    /// plain `connect` calls ahead of group `0`.
    pub default_group: i32,
}

impl SignalerConfig {
    /// Returns the config with `name` replaced.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<Cow<'static, str>>) -> Self {
        self.name = name.into();
        self
    }

    /// Returns the config with `default_group` replaced.
    #[must_use]
    pub fn with_default_group(mut self, group: i32) -> Self {
        self.default_group = group;
        self
    }
}

impl Default for SignalerConfig {
    /// Default configuration:
    ///
    /// - `name = "signaler"`
    /// - `default_group = 0`
    fn default() -> Self {
        Self {
            name: Cow::Borrowed("signaler"),
            default_group: 0,
        }
    }
}
