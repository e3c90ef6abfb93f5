//! Error types used by signal dispatch and slots.
//!
//! This module defines two error enums:
//!
//! - [`SlotError`] — errors raised by individual slot invocations.
//! - [`EmitError`] — errors surfaced by [`Signal::emit`](crate::Signal::emit)
//!   under the fail-fast policy.
//!
//! The registry itself has almost no failure modes by construction: a
//! disconnect of an unknown handle is a no-op, an out-of-range insert index is
//! clamped, and rebinding an attached connection is a move, not an error.
//! Both types provide helper methods (`as_label`, `as_message`) for
//! logging/metrics.

use thiserror::Error;

/// # Errors produced by slot execution.
///
/// These represent failures of individual slot invocations during a dispatch
/// pass. A slot either reports failure through its `Result`, or panics — in
/// which case the panic is caught at the dispatch boundary and converted into
/// [`SlotError::Panicked`].
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum SlotError {
    /// Slot reported a failure for this invocation.
    #[error("execution failed: {error}")]
    Fail {
        /// The underlying error message.
        error: String,
    },

    /// Slot panicked; the payload was caught at the dispatch boundary.
    #[error("slot panicked: {message}")]
    Panicked {
        /// The panic payload rendered as a string.
        message: String,
    },
}

impl SlotError {
    /// Convenience constructor for [`SlotError::Fail`].
    ///
    /// # Example
    /// ```
    /// use signalcast::SlotError;
    ///
    /// let err = SlotError::fail("connection refused");
    /// assert_eq!(err.as_label(), "slot_fail");
    /// ```
    pub fn fail(error: impl Into<String>) -> Self {
        SlotError::Fail {
            error: error.into(),
        }
    }

    /// Returns a short stable label (snake_case) for use in logs/metrics.
    pub fn as_label(&self) -> &'static str {
        match self {
            SlotError::Fail { .. } => "slot_fail",
            SlotError::Panicked { .. } => "slot_panicked",
        }
    }

    /// Returns a human-readable message with details about the error.
    pub fn as_message(&self) -> String {
        match self {
            SlotError::Fail { error } => format!("execution failed: {error}"),
            SlotError::Panicked { message } => format!("panicked: {message}"),
        }
    }
}

/// # Errors produced by a dispatch pass.
///
/// Returned by [`Signal::emit`](crate::Signal::emit) when the signal's
/// [`EmitPolicy`](crate::EmitPolicy) is `FailFast` and a slot fails. Dispatch
/// of the remaining groups is aborted; slots of the failing group that were
/// already initiated still run to completion (initiation cannot be cancelled).
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum EmitError {
    /// A slot failed during dispatch.
    #[error("slot '{slot}' on signal '{signal}' failed: {source}")]
    Slot {
        /// Name of the signal that was emitting.
        signal: String,
        /// Name of the failing slot.
        slot: String,
        /// The underlying slot error.
        #[source]
        source: SlotError,
    },
}

impl EmitError {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    pub fn as_label(&self) -> &'static str {
        match self {
            EmitError::Slot { .. } => "emit_slot_failed",
        }
    }

    /// Name of the slot that caused the failure.
    pub fn slot_name(&self) -> &str {
        match self {
            EmitError::Slot { slot, .. } => slot,
        }
    }
}
