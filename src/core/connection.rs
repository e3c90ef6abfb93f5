//! # Connection - handle for one subscription.
//!
//! A [`Connection`] is returned by [`Signal::connect`](crate::Signal::connect)
//! and identifies one slot's membership in one signal's registry. The handle
//! is cheap to clone (`Arc` inside); every clone refers to the same
//! subscription and identity is pointer identity, never value equality.
//!
//! The handle holds a *weak* back-reference to its owning signal: it never
//! keeps the signal alive, and [`Signal::dispose`](crate::Signal::dispose)
//! clears it in bulk without touching each handle's registry entry twice.
//!
//! ## Blocking vs disconnecting
//! - [`Connection::set_blocked`] keeps the registry entry but skips the slot
//!   during dispatch; unblocking restores invocation in the original position.
//! - [`Connection::disconnect`] severs the subscription; the handle can be
//!   re-attached later with [`Signal::reconnect`](crate::Signal::reconnect).

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Weak};

use parking_lot::Mutex;

use crate::core::signal::SignalShared;
use crate::slots::SlotRef;

/// Handle representing one slot's subscription to a signal.
pub struct Connection<A, R> {
    inner: Arc<ConnectionInner<A, R>>,
}

struct ConnectionInner<A, R> {
    slot: SlotRef<A, R>,
    blocked: AtomicBool,
    /// Weak back-reference to the owning signal; `Weak::new()` when detached.
    owner: Mutex<Weak<SignalShared<A, R>>>,
}

impl<A, R> Connection<A, R> {
    /// Creates a detached handle holding `slot`.
    ///
    /// A detached connection belongs to no signal and is only useful as an
    /// argument to [`Signal::reconnect`](crate::Signal::reconnect).
    pub fn detached(slot: SlotRef<A, R>) -> Self {
        Self {
            inner: Arc::new(ConnectionInner {
                slot,
                blocked: AtomicBool::new(false),
                owner: Mutex::new(Weak::new()),
            }),
        }
    }

    /// Name of the underlying slot (for logs and error messages).
    pub fn name(&self) -> &str {
        self.inner.slot.name()
    }

    /// True if this connection is skipped during dispatch.
    pub fn is_blocked(&self) -> bool {
        self.inner.blocked.load(Ordering::Relaxed)
    }

    /// Blocks or unblocks this connection.
    ///
    /// Does not affect registry membership, only participation in dispatch.
    pub fn set_blocked(&self, blocked: bool) {
        self.inner.blocked.store(blocked, Ordering::Relaxed);
    }

    /// True iff this connection is currently held by its signal's registry.
    pub fn is_connected(&self) -> bool {
        match self.inner.owner.lock().upgrade() {
            Some(shared) => shared.contains(self),
            None => false,
        }
    }

    /// Severs this subscription.
    ///
    /// Clears the back-reference and removes the registry entry. Safe to call
    /// repeatedly or on a never-connected handle (silent no-op).
    pub fn disconnect(&self) {
        // Take the back-reference first so the registry removal below never
        // re-enters this handle.
        let owner = {
            let mut owner = self.inner.owner.lock();
            std::mem::take(&mut *owner)
        };
        if let Some(shared) = owner.upgrade() {
            shared.remove(self);
        }
    }

    /// Clears the back-reference without touching the registry.
    ///
    /// Used by [`Signal::dispose`](crate::Signal::dispose), which is already
    /// draining the registry and must not repeat the removal per handle.
    pub(crate) fn detach(&self) {
        *self.inner.owner.lock() = Weak::new();
    }

    /// Points the back-reference at `shared`.
    pub(crate) fn bind(&self, shared: &Arc<SignalShared<A, R>>) {
        *self.inner.owner.lock() = Arc::downgrade(shared);
    }

    /// Takes the current owner, leaving the handle detached.
    ///
    /// Returns `None` when the handle was detached or the signal is gone.
    pub(crate) fn take_owner(&self) -> Option<Arc<SignalShared<A, R>>> {
        let mut owner = self.inner.owner.lock();
        std::mem::take(&mut *owner).upgrade()
    }

    /// The slot this connection delivers to.
    pub(crate) fn slot(&self) -> &SlotRef<A, R> {
        &self.inner.slot
    }

    /// Handle identity (same subscription, not value equality).
    pub(crate) fn is(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl<A, R> Clone for Connection<A, R> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<A, R> PartialEq for Connection<A, R> {
    fn eq(&self, other: &Self) -> bool {
        self.is(other)
    }
}

impl<A, R> Eq for Connection<A, R> {}

impl<A, R> fmt::Debug for Connection<A, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Connection")
            .field("slot", &self.name())
            .field("connected", &self.is_connected())
            .field("blocked", &self.is_blocked())
            .finish()
    }
}
