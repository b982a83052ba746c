//! # Connection handles.
//!
//! - [`SignalerConnection`] - copyable, weak handle to one connected slot
//! - [`SignalerConnectionGuard`] - owns a connection and disconnects it on drop

mod connection;
mod guard;

pub use connection::SignalerConnection;
pub use guard::SignalerConnectionGuard;
