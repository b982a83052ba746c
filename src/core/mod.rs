//! Dispatch core: the signaler and its shared node.
//!
//! The public API from this module is [`Signaler`] and [`SignalerConfig`].
//!
//! Internal modules:
//! - [`node`]: slot index, sequence counter, emission barrier; connect/disconnect/emit;
//! - [`signaler`]: user-facing handle that owns one node;
//! - [`config`]: per-signaler settings.

mod config;
mod node;
mod signaler;

pub use config::SignalerConfig;
pub(crate) use node::SignalerNode;
pub use signaler::Signaler;
