//! # Connection registry - ordered storage behind a signal.
//!
//! [`SignalCore`] owns the subscriptions of one signal: an ordered mapping
//! from integer group id to an insertion-ordered sequence of
//! [`Connection`]s. Dispatch iterates groups in ascending numeric order and
//! each group in sequence order.
//!
//! ## Rules
//! - A connection appears in at most one group of at most one registry.
//! - Group ids are arbitrary `i32`s; negative and sparse keys are fine.
//! - Insertion is stable: existing entries only shift to make room.
//! - Removal of an unknown connection is a silent no-op.
//!
//! The registry itself is not synchronized; [`Signal`](crate::Signal) wraps
//! it in a single mutex so that mutation and the per-group snapshot copy are
//! mutually exclusive.

use std::collections::BTreeMap;

use crate::core::connection::Connection;

/// Ordered registry of connections, keyed by priority group.
pub(crate) struct SignalCore<A, R> {
    groups: BTreeMap<i32, Vec<Connection<A, R>>>,
}

impl<A, R> SignalCore<A, R> {
    pub(crate) fn new() -> Self {
        Self {
            groups: BTreeMap::new(),
        }
    }

    /// Inserts a connection into `group` at `index`.
    ///
    /// `None` appends; a negative index clamps to the front, an index past the
    /// end clamps to an append. The caller is responsible for having removed
    /// the connection from its previous position first (see
    /// [`Signal::reconnect`](crate::Signal::reconnect)).
    pub(crate) fn insert(&mut self, conn: Connection<A, R>, group: i32, index: Option<isize>) {
        let seq = self.groups.entry(group).or_default();
        let at = match index {
            None => seq.len(),
            Some(i) if i < 0 => 0,
            Some(i) => (i as usize).min(seq.len()),
        };
        seq.insert(at, conn);
    }

    /// Removes a connection from whichever group currently holds it.
    ///
    /// Returns `true` if it was found. Safe to call repeatedly or with a
    /// never-inserted connection.
    pub(crate) fn remove(&mut self, conn: &Connection<A, R>) -> bool {
        let mut emptied = None;
        let mut found = false;
        for (gid, seq) in self.groups.iter_mut() {
            if let Some(pos) = seq.iter().position(|c| c.is(conn)) {
                seq.remove(pos);
                if seq.is_empty() {
                    emptied = Some(*gid);
                }
                found = true;
                break;
            }
        }
        if let Some(gid) = emptied {
            self.groups.remove(&gid);
        }
        found
    }

    /// True iff the connection is held by some group of this registry.
    ///
    /// Linear scan; diagnostic path, not a hot path.
    pub(crate) fn contains(&self, conn: &Connection<A, R>) -> bool {
        self.groups
            .values()
            .any(|seq| seq.iter().any(|c| c.is(conn)))
    }

    /// Group ids currently present, in ascending order.
    pub(crate) fn group_ids(&self) -> Vec<i32> {
        self.groups.keys().copied().collect()
    }

    /// Copy of the sequence for `group` (empty if the group is gone).
    pub(crate) fn snapshot(&self, group: i32) -> Vec<Connection<A, R>> {
        self.groups.get(&group).cloned().unwrap_or_default()
    }

    /// Empties every group and returns all held connections (bulk teardown).
    pub(crate) fn drain_all(&mut self) -> Vec<Connection<A, R>> {
        let mut all = Vec::new();
        for (_, mut seq) in std::mem::take(&mut self.groups) {
            all.append(&mut seq);
        }
        all
    }

    /// Total number of connections across all groups.
    pub(crate) fn len(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }
}

impl<A, R> Default for SignalCore<A, R> {
    fn default() -> Self {
        Self::new()
    }
}
