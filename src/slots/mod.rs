//! # Slot abstractions.
//!
//! This module provides the core callback-related types:
//! - [`Slot`] - trait for implementing async callbacks
//! - [`SlotFn`] - function-based slot implementation
//! - [`SlotRef`] - shared reference to a slot (`Arc<dyn Slot>`)

mod slot;
mod slot_fn;

pub use slot::Slot;
pub use slot_fn::{SlotFn, SlotRef};
