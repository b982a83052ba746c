//! Slot storage.
//!
//! - [`SlotKey`]: `(group, sequence)` emission order;
//! - [`SlotOutput`]: accepted slot return types;
//! - `SlotRecord`: one callable with its connected flag;
//! - `SlotIndex`: the ordered, concurrently mutable set of records.

mod index;
mod key;
mod output;
mod record;

pub(crate) use index::SlotIndex;
pub use key::SlotKey;
pub use output::SlotOutput;
pub(crate) use record::{SlotBase, SlotFn, SlotRecord};
