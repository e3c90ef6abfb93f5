//! Dispatch core: the connection registry and the emit loop.
//!
//! The public API from this module is [`Signal`], [`Connection`] and
//! [`ConnectionGroup`].
//!
//! Internal modules:
//! - [`registry`]: ordered group/sequence storage behind one signal;
//! - [`signal`]: the emit façade, snapshot semantics and failure policy;
//! - [`connection`]: subscription handles with weak back-references;
//! - [`group`]: bulk-disconnect aggregation of handles.

mod connection;
mod group;
mod registry;
mod signal;

pub use connection::Connection;
pub use group::ConnectionGroup;
pub use signal::Signal;
