//! # Signal configuration.
//!
//! Provides [`SignalConfig`], the per-signal settings bundle passed to
//! [`Signal::with_config`](crate::Signal::with_config).
//!
//! A plain [`Signal::new`](crate::Signal::new) uses [`SignalConfig::default`]:
//! the signal is named `"signal"` and dispatches fail-fast.

use std::borrow::Cow;

use crate::policies::EmitPolicy;

/// Per-signal configuration.
///
/// Defines:
/// - **Identity**: the name used in warn logs and [`EmitError`](crate::EmitError)
///   messages (there may be many signals in a process; name them).
/// - **Failure handling**: the [`EmitPolicy`] applied during dispatch.
///
/// All fields are public for flexibility.
#[derive(Clone, Debug)]
pub struct SignalConfig {
    /// Human-readable signal name for logs and error messages.
    pub name: Cow<'static, str>,

    /// Failure-handling policy applied during dispatch.
    ///
    /// See [`EmitPolicy`] for the fail-fast vs isolate trade-off.
    pub policy: EmitPolicy,
}

impl SignalConfig {
    /// Creates a configuration with the given name and the default policy.
    pub fn named(name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

impl Default for SignalConfig {
    /// Default configuration:
    ///
    /// - `name = "signal"`
    /// - `policy = EmitPolicy::FailFast`
    fn default() -> Self {
        Self {
            name: Cow::Borrowed("signal"),
            policy: EmitPolicy::default(),
        }
    }
}
