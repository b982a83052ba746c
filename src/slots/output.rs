//! # Slot return values.
//!
//! A slot may return `()` or any `Result<T, E>` with `E: Into<BoxError>`.
//! [`SlotOutput`] collapses both into `Result<(), BoxError>`; `Ok` values are
//! discarded and an `Err` aborts the emission.
//!
//! ```rust
//! use signaler::Signaler;
//!
//! let sig: Signaler<str> = Signaler::new();
//! sig.connect(|line: &str| println!("{line}"));
//! sig.connect(|line: &str| line.parse::<u8>().map(|_| ()));
//! assert!(sig.emit("12").is_ok());
//! assert!(sig.emit("x").is_err());
//! ```

use crate::error::BoxError;

/// Conversion from a slot's return value into the engine's result type.
pub trait SlotOutput {
    /// Discards success values; keeps the error.
    fn into_slot_result(self) -> Result<(), BoxError>;
}

impl SlotOutput for () {
    #[inline]
    fn into_slot_result(self) -> Result<(), BoxError> {
        Ok(())
    }
}

impl<T, E> SlotOutput for Result<T, E>
where
    E: Into<BoxError>,
{
    #[inline]
    fn into_slot_result(self) -> Result<(), BoxError> {
        self.map(drop).map_err(Into::into)
    }
}
