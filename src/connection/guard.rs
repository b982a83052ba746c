//! # Scoped connection: disconnect on drop.
//!
//! [`SignalerConnectionGuard`] owns one [`SignalerConnection`] and disconnects
//! it when the guard is dropped or overwritten. `wait_on_disconnect` picks the
//! flavor:
//! - `false` → [`SignalerConnection::disconnect`]
//! - `true`  → [`SignalerConnection::disconnect_and_wait`]
//!
//! ## Example
//! ```rust
//! use signaler::{Signaler, SignalerConnectionGuard};
//!
//! let sig: Signaler<u8> = Signaler::new();
//! {
//!     let _guard = SignalerConnectionGuard::new(sig.connect(|_: &u8| {}), false);
//!     assert_eq!(sig.slot_count(), 1);
//! }
//! assert_eq!(sig.slot_count(), 0);
//! ```

use super::SignalerConnection;

/// RAII owner of a [`SignalerConnection`].
#[derive(Debug, Default)]
pub struct SignalerConnectionGuard {
    connection: SignalerConnection,
    wait_on_disconnect: bool,
}

impl SignalerConnectionGuard {
    /// Takes ownership of `connection`.
    ///
    /// When `wait_on_disconnect` is true the guard's drop blocks until in-flight
    /// emissions finish, so it must not be dropped from a slot of the same signaler.
    #[must_use]
    pub fn new(connection: SignalerConnection, wait_on_disconnect: bool) -> Self {
        Self {
            connection,
            wait_on_disconnect,
        }
    }

    /// The guarded connection.
    #[must_use]
    pub fn connection(&self) -> &SignalerConnection {
        &self.connection
    }

    /// Whether drop uses the waiting disconnect.
    #[must_use]
    pub fn wait_on_disconnect(&self) -> bool {
        self.wait_on_disconnect
    }

    /// Gives up ownership without disconnecting.
    #[must_use = "dropping the released connection leaves the slot connected"]
    pub fn release(mut self) -> SignalerConnection {
        std::mem::take(&mut self.connection)
    }

    /// Exchanges connections and wait flags with `other`.
    pub fn swap(&mut self, other: &mut Self) {
        self.connection.swap(&mut other.connection);
        std::mem::swap(&mut self.wait_on_disconnect, &mut other.wait_on_disconnect);
    }
}

impl From<SignalerConnection> for SignalerConnectionGuard {
    fn from(connection: SignalerConnection) -> Self {
        Self::new(connection, false)
    }
}

impl Drop for SignalerConnectionGuard {
    fn drop(&mut self) {
        if self.wait_on_disconnect {
            self.connection.disconnect_and_wait();
        } else {
            self.connection.disconnect();
        }
    }
}
