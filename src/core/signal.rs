//! # Signal - the emit façade over the connection registry.
//!
//! [`Signal`] is a cheap-to-clone handle (`Arc` inside) over one registry of
//! [`Connection`]s plus the dispatch loop. All registry operations and the
//! per-group snapshot copy are mutually exclusive behind a single mutex; the
//! mutex is never held across an await, so slots are free to connect,
//! reconnect and disconnect while a pass is in flight.
//!
//! ## Dispatch
//! ```text
//! emit(args)
//!   ├─ signal blocked? ──► Ok(vec![])
//!   ├─ group ids fixed at emit start (ascending)
//!   └─ for each group:
//!        ├─ snapshot the group's sequence   (immediately before it runs)
//!        ├─ skip blocked connections        (no result entry)
//!        ├─ initiate slots in sequence order, await the group concurrently
//!        └─ append results in initiation order
//! ```
//!
//! The snapshot is authoritative: a connection disconnected by an earlier
//! callback of the *same* group still runs in this pass, while a removal in a
//! group that has not run yet is honored. Connections added during the pass
//! are never invoked until the next emit.

use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use futures::future::join_all;
use futures::FutureExt;
use parking_lot::Mutex;
use tracing::warn;

use crate::config::SignalConfig;
use crate::core::connection::Connection;
use crate::core::registry::SignalCore;
use crate::error::{EmitError, SlotError};
use crate::slots::SlotRef;

/// State shared between a [`Signal`] and the weak back-references held by its
/// connections.
pub(crate) struct SignalShared<A, R> {
    config: SignalConfig,
    blocked: AtomicBool,
    core: Mutex<SignalCore<A, R>>,
}

impl<A, R> SignalShared<A, R> {
    pub(crate) fn remove(&self, conn: &Connection<A, R>) -> bool {
        self.core.lock().remove(conn)
    }

    pub(crate) fn contains(&self, conn: &Connection<A, R>) -> bool {
        self.core.lock().contains(conn)
    }
}

/// Multicast dispatch point for slots taking `A` and returning `R`.
///
/// `A` is the argument tuple of the signal — `()`, `(T0,)`, … — so every
/// slot of one signal shares a single statically-checked arity; passing the
/// wrong argument count to [`emit`](Signal::emit) does not compile.
///
/// # Example
/// ```
/// use signalcast::{Signal, SlotError, SlotFn};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() -> Result<(), signalcast::EmitError> {
/// let sig: Signal<(i32, i32), i32> = Signal::new();
/// sig.connect(SlotFn::arc("sum", |(x, y): (i32, i32)| async move {
///     Ok::<_, SlotError>(x + y)
/// }));
/// sig.connect(SlotFn::arc("product", |(x, y): (i32, i32)| async move {
///     Ok::<_, SlotError>(x * y)
/// }));
///
/// assert_eq!(sig.emit((2, 4)).await?, vec![6, 8]);
/// # Ok(())
/// # }
/// ```
pub struct Signal<A, R> {
    shared: Arc<SignalShared<A, R>>,
}

impl<A, R> Signal<A, R> {
    /// Creates a signal with [`SignalConfig::default`].
    pub fn new() -> Self {
        Self::with_config(SignalConfig::default())
    }

    /// Creates a signal with the given configuration.
    pub fn with_config(config: SignalConfig) -> Self {
        Self {
            shared: Arc::new(SignalShared {
                config,
                blocked: AtomicBool::new(false),
                core: Mutex::new(SignalCore::new()),
            }),
        }
    }

    /// The configured signal name.
    pub fn name(&self) -> &str {
        &self.shared.config.name
    }

    /// Subscribes `slot` to group `0`, at the end of the group.
    pub fn connect(&self, slot: SlotRef<A, R>) -> Connection<A, R> {
        self.connect_at(slot, 0, None)
    }

    /// Subscribes `slot` to `group`, at the end of the group.
    ///
    /// Lower group ids dispatch earlier; ids may be negative and sparse.
    pub fn connect_in(&self, slot: SlotRef<A, R>, group: i32) -> Connection<A, R> {
        self.connect_at(slot, group, None)
    }

    /// Subscribes `slot` to `group` at `index`.
    ///
    /// `None` appends. A negative index clamps to the front of the group, an
    /// index past the end clamps to an append; clamping is documented policy,
    /// not an error.
    pub fn connect_at(
        &self,
        slot: SlotRef<A, R>,
        group: i32,
        index: Option<isize>,
    ) -> Connection<A, R> {
        let conn = Connection::detached(slot);
        self.reconnect(&conn, group, index);
        conn
    }

    /// Re-inserts `conn` into this signal at the given position.
    ///
    /// Move semantics: if the handle is currently attached anywhere — this
    /// signal or another one — that binding is severed first, so a connection
    /// can be relocated between groups or repositioned within a group without
    /// ever being registered twice. Index handling is the same as
    /// [`connect_at`](Signal::connect_at).
    pub fn reconnect(&self, conn: &Connection<A, R>, group: i32, index: Option<isize>) {
        if let Some(prev) = conn.take_owner() {
            prev.remove(conn);
        }
        conn.bind(&self.shared);
        self.shared.core.lock().insert(conn.clone(), group, index);
    }

    /// Removes `conn` from this signal's registry.
    ///
    /// Silent no-op if the handle is not registered here. The handle's own
    /// back-reference is left alone; observable state still converges with
    /// [`Connection::disconnect`] — `is_connected` reports `false` either way.
    pub fn disconnect(&self, conn: &Connection<A, R>) {
        self.shared.remove(conn);
    }

    /// True iff `conn` is currently held by this signal's registry.
    pub fn is_connected(&self, conn: &Connection<A, R>) -> bool {
        self.shared.contains(conn)
    }

    /// Detaches every connection and empties the registry.
    ///
    /// Synchronous bulk teardown: afterwards every previously connected
    /// handle reports `is_connected() == false`. Block flags on the handles
    /// are left untouched.
    pub fn dispose(&self) {
        let drained = self.shared.core.lock().drain_all();
        for conn in &drained {
            conn.detach();
        }
    }

    /// True if emit currently skips dispatch entirely.
    pub fn is_blocked(&self) -> bool {
        self.shared.blocked.load(Ordering::Relaxed)
    }

    /// Blocks or unblocks the whole signal.
    ///
    /// While blocked, [`emit`](Signal::emit) returns an empty result sequence
    /// without invoking anything; registry membership is unaffected.
    pub fn set_blocked(&self, blocked: bool) {
        self.shared.blocked.store(blocked, Ordering::Relaxed);
    }

    /// Total number of connections across all groups.
    pub fn len(&self) -> usize {
        self.shared.core.lock().len()
    }

    /// True if no slot is connected.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<A, R> Signal<A, R>
where
    A: Clone,
{
    /// Dispatches `args` to every live, unblocked connection.
    ///
    /// Returns the slot results in initiation order: ascending group id, then
    /// sequence order within each group. Blocked connections contribute no
    /// entry, so the result length equals the number of slots actually
    /// invoked, not the connection count.
    ///
    /// Slots of one group are initiated in order and awaited concurrently;
    /// there is no guarantee on their *completion* order relative to each
    /// other. The next group's snapshot is taken only after the previous
    /// group settled, which is what makes cross-group mutation from inside a
    /// slot take effect within the same pass.
    ///
    /// # Errors
    /// Under [`EmitPolicy::FailFast`](crate::EmitPolicy::FailFast) the first
    /// slot failure (error return or caught panic) aborts the pass with
    /// [`EmitError::Slot`]. Under
    /// [`EmitPolicy::Isolate`](crate::EmitPolicy::Isolate) failures are
    /// logged and skipped.
    pub async fn emit(&self, args: A) -> Result<Vec<R>, EmitError> {
        if self.is_blocked() {
            return Ok(Vec::new());
        }

        // Group ids are fixed at emit start: a group created by a slot during
        // this pass is not dispatched until the next emit.
        let group_ids = self.shared.core.lock().group_ids();

        let mut results = Vec::new();
        for gid in group_ids {
            // Membership snapshot, taken immediately before this group runs.
            // The snapshot is authoritative for the group: disconnects by an
            // earlier slot of the same group do not un-invoke a later one.
            let snapshot = self.shared.core.lock().snapshot(gid);
            let live: Vec<&Connection<A, R>> =
                snapshot.iter().filter(|c| !c.is_blocked()).collect();

            // Initiate in sequence order; the group then runs concurrently.
            let mut pending = Vec::with_capacity(live.len());
            for conn in &live {
                let fut = conn.slot().call(args.clone());
                pending.push(AssertUnwindSafe(fut).catch_unwind());
            }

            for (conn, settled) in live.iter().zip(join_all(pending).await) {
                let outcome = settled.unwrap_or_else(|payload| {
                    Err(SlotError::Panicked {
                        message: panic_message(payload.as_ref()),
                    })
                });
                match outcome {
                    Ok(value) => results.push(value),
                    Err(err) => {
                        if self.shared.config.policy.is_fail_fast() {
                            return Err(EmitError::Slot {
                                signal: self.name().to_string(),
                                slot: conn.name().to_string(),
                                source: err,
                            });
                        }
                        warn!(
                            signal = self.name(),
                            slot = conn.name(),
                            error = err.as_label(),
                            "{}; continuing dispatch",
                            err.as_message(),
                        );
                    }
                }
            }
        }
        Ok(results)
    }
}

impl<A, R> Clone for Signal<A, R> {
    fn clone(&self) -> Self {
        Self {
            shared: Arc::clone(&self.shared),
        }
    }
}

impl<A, R> Default for Signal<A, R> {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders a caught panic payload for [`SlotError::Panicked`].
fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "non-string panic payload".to_string()
    }
}
