//! # Slot abstraction.
//!
//! This module defines the [`Slot`] trait: an async callback with a fixed
//! argument type `A` and a result type `R`. The common handle type is
//! [`SlotRef`](crate::SlotRef), an `Arc<dyn Slot<A, R>>` suitable for sharing
//! between a [`Connection`](crate::Connection) and the dispatch loop.
//!
//! `A` is normally a tuple — `()`, `(T0,)`, up to however many arguments the
//! signal carries — so argument-count mismatches are compile errors at the
//! call boundary instead of runtime coercions.

use async_trait::async_trait;

use crate::error::SlotError;

/// # Asynchronous callback subscribed to a signal.
///
/// A `Slot` has a stable [`name`](Slot::name) for diagnostics and an async
/// [`call`](Slot::call) method invoked once per dispatch pass with a clone of
/// the emit arguments. Returning `Err` feeds the signal's
/// [`EmitPolicy`](crate::EmitPolicy).
///
/// # Example
/// ```
/// use async_trait::async_trait;
/// use signalcast::{Slot, SlotError};
///
/// struct Doubler;
///
/// #[async_trait]
/// impl Slot<(i32,), i32> for Doubler {
///     fn name(&self) -> &str { "doubler" }
///
///     async fn call(&self, (x,): (i32,)) -> Result<i32, SlotError> {
///         Ok(x * 2)
///     }
/// }
/// ```
#[async_trait]
pub trait Slot<A, R>: Send + Sync {
    /// Returns a stable, human-readable slot name.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }

    /// Handles one invocation with the emit arguments.
    ///
    /// Called once per dispatch pass that reaches this slot. May suspend;
    /// completion order relative to other slots of the same group is
    /// unconstrained.
    async fn call(&self, args: A) -> Result<R, SlotError>;
}
