//! # signalcast
//!
//! **signalcast** is an in-process signal/slot multicast dispatch library.
//!
//! A [`Signal`] holds an ordered registry of callback subscriptions (slots);
//! emitting the signal invokes every non-blocked subscription in a
//! deterministic order and collects each subscription's result. The crate is
//! designed as a building block for decoupled in-process eventing: UI layers,
//! plugin hooks, domain-event fan-out.
//!
//! ## Architecture
//! ### Overview
//! ```text
//!       caller                                 slots
//!         │                                      ▲
//!         │ connect(slot, group, index)          │ call(args)
//!         ▼                                      │
//! ┌──────────────────────────────────────────────┴────────────────┐
//! │  Signal<A, R>  (emit façade, Arc-shared, Clone)               │
//! │  ┌─────────────────────────────────────────────────────────┐  │
//! │  │  SignalCore (one mutex per signal)                      │  │
//! │  │    group -3 ─► [conn, conn]          ascending group id │  │
//! │  │    group  0 ─► [conn, conn, conn]    insertion order    │  │
//! │  │    group  7 ─► [conn]                within each group  │  │
//! │  └─────────────────────────────────────────────────────────┘  │
//! └───────────────────────────────────────────────────────────────┘
//!         │                                      ▲
//!         │ returns Connection                   │ weak back-reference
//!         ▼                                      │
//!     Connection ──── block / disconnect / reconnect
//! ```
//!
//! ### Dispatch pass
//! ```text
//! emit(a0..aN)
//!   ├─ signal blocked?            ─► Ok(vec![])
//!   ├─ group ids fixed at start   (ascending numeric order)
//!   └─ per group:
//!        ├─ snapshot the sequence immediately before the group runs
//!        ├─ skip blocked connections (no result entry)
//!        ├─ initiate slots in sequence order, await the group concurrently
//!        └─ errors: FailFast ─► Err(EmitError::Slot), abort pass
//!                   Isolate  ─► tracing warn, continue
//! ```
//!
//! The per-group snapshot is the load-bearing rule: a slot may connect,
//! disconnect or reconnect anything mid-pass. The in-progress group still
//! runs over its pre-invocation membership (the snapshot holds the slots
//! themselves, so even a just-disconnected slot of the same group runs),
//! while groups that have not run yet see the mutation.
//!
//! ## Features
//! | Area            | Description                                                    | Key types / traits                 |
//! |-----------------|----------------------------------------------------------------|------------------------------------|
//! | **Slot API**    | Async callbacks with a statically-checked argument tuple.      | [`Slot`], [`SlotFn`], [`SlotRef`]  |
//! | **Handles**     | Block, sever or relocate individual subscriptions.             | [`Connection`], [`ConnectionGroup`]|
//! | **Dispatch**    | Priority groups, stable indexing, snapshot semantics.          | [`Signal`]                         |
//! | **Policies**    | Fail-fast vs isolated slot failures.                           | [`EmitPolicy`]                     |
//! | **Errors**      | Typed errors for slots and dispatch passes.                    | [`SlotError`], [`EmitError`]       |
//! | **Configuration** | Per-signal name and policy.                                  | [`SignalConfig`]                   |
//!
//! ## Example
//! ```rust
//! use signalcast::{Signal, SlotError, SlotFn};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let damage: Signal<(u32,), ()> = Signal::new();
//!
//!     // Armor runs before the HUD: lower group ids dispatch earlier.
//!     damage.connect_in(
//!         SlotFn::arc("armor", |(amount,): (u32,)| async move {
//!             let _ = amount; // absorb...
//!             Ok::<_, SlotError>(())
//!         }),
//!         -1,
//!     );
//!     let hud = damage.connect(SlotFn::arc("hud", |(amount,): (u32,)| async move {
//!         println!("took {amount} damage");
//!         Ok::<_, SlotError>(())
//!     }));
//!
//!     damage.emit((12,)).await?;
//!
//!     // Pause the HUD without losing its position, then sever it.
//!     hud.set_blocked(true);
//!     damage.emit((3,)).await?;
//!     hud.disconnect();
//!     Ok(())
//! }
//! ```
//!
//! ## Model
//! Single registry per signal, one mutex around it; the lock is never held
//! across an await. Dispatch guarantees *initiation* order (ascending group,
//! then sequence order, skipping blocked), never *completion* order of
//! suspending slots. There is no cross-thread delivery channel, no
//! persistence of subscriptions and no finalizer-driven cleanup: dropping a
//! [`Connection`] handle does not disconnect it — sever subscriptions
//! explicitly (or via [`ConnectionGroup::disconnect_all`] /
//! [`Signal::dispose`]).

mod config;
mod core;
mod error;
mod policies;
mod slots;

// ---- Public re-exports ----

pub use config::SignalConfig;
pub use crate::core::{Connection, ConnectionGroup, Signal};
pub use error::{EmitError, SlotError};
pub use policies::EmitPolicy;
pub use slots::{Slot, SlotFn, SlotRef};
