//! # ConnectionGroup - bulk release of connection handles.
//!
//! [`ConnectionGroup`] is a non-owning aggregator: collect the handles a
//! component created, then sever them all with one
//! [`disconnect_all`](ConnectionGroup::disconnect_all) when the component goes
//! away.
//!
//! Naming note: this has nothing to do with the integer *priority group*
//! passed to [`Signal::connect_in`](crate::Signal::connect_in). A
//! `ConnectionGroup` is just a bag of handles; its members may live in any
//! priority group of any signal.

use crate::core::connection::Connection;

/// Aggregates connection handles for bulk disconnect.
pub struct ConnectionGroup<A, R> {
    members: Vec<Connection<A, R>>,
}

impl<A, R> ConnectionGroup<A, R> {
    /// Creates an empty group.
    pub fn new() -> Self {
        Self {
            members: Vec::new(),
        }
    }

    /// Adds a handle to the group.
    pub fn add(&mut self, conn: Connection<A, R>) {
        self.members.push(conn);
    }

    /// Removes a handle from the group without disconnecting it.
    ///
    /// No-op if the handle is not a member.
    pub fn remove(&mut self, conn: &Connection<A, R>) {
        if let Some(pos) = self.members.iter().position(|c| c.is(conn)) {
            self.members.remove(pos);
        }
    }

    /// Disconnects every member and empties the group.
    pub fn disconnect_all(&mut self) {
        for conn in self.members.drain(..) {
            conn.disconnect();
        }
    }

    /// Number of held handles.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// True if the group holds no handles.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

impl<A, R> Default for ConnectionGroup<A, R> {
    fn default() -> Self {
        Self::new()
    }
}
