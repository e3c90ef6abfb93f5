//! # Emit policy for slot failures.
//!
//! [`EmitPolicy`] controls what a dispatch pass does when a slot fails (either
//! by returning an error or by panicking — panics are always caught at the
//! dispatch boundary and converted into
//! [`SlotError::Panicked`](crate::SlotError::Panicked)).
//!
//! Silently swallowing subscriber errors hides bugs, so the default is
//! [`EmitPolicy::FailFast`]. Use [`EmitPolicy::Isolate`] when one subscriber
//! must never take down delivery to the others (logging sinks, metrics).
//!
//! # Example
//! ```
//! use signalcast::EmitPolicy;
//!
//! assert_eq!(EmitPolicy::default(), EmitPolicy::FailFast);
//! assert!(!EmitPolicy::Isolate.is_fail_fast());
//! ```

/// Failure-handling policy applied during a dispatch pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EmitPolicy {
    /// First slot error aborts the pass; `emit` returns
    /// [`EmitError::Slot`](crate::EmitError::Slot).
    ///
    /// Slots of the failing group that were already initiated still run to
    /// completion; no later group is dispatched.
    #[default]
    FailFast,

    /// Slot errors are logged (`tracing` warn) and contribute no result entry;
    /// dispatch continues with the remaining slots and groups.
    Isolate,
}

impl EmitPolicy {
    /// True if a slot failure aborts the pass.
    #[inline]
    pub fn is_fail_fast(&self) -> bool {
        matches!(self, EmitPolicy::FailFast)
    }
}
