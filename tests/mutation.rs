//! Mutation during dispatch: the per-group snapshot rules.
//!
//! A slot may connect, disconnect, block or reconnect other connections while
//! a pass is in flight. The in-progress group runs over its pre-invocation
//! membership; groups that have not run yet see the mutation.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;
use signalcast::{Connection, Signal, SlotError, SlotFn, SlotRef};

type Cell = Arc<Mutex<Option<Connection<(), ()>>>>;

/// Slot that counts its invocations.
fn counter(name: &'static str, hits: &Arc<AtomicUsize>) -> SlotRef<(), ()> {
    let hits = Arc::clone(hits);
    SlotFn::arc(name, move |_: ()| {
        let hits = Arc::clone(&hits);
        async move {
            hits.fetch_add(1, Ordering::SeqCst);
            Ok::<_, SlotError>(())
        }
    })
}

/// Slot that disconnects whatever handle is in `cell`.
fn assassin(name: &'static str, cell: &Cell) -> SlotRef<(), ()> {
    let cell = Arc::clone(cell);
    SlotFn::arc(name, move |_: ()| {
        let cell = Arc::clone(&cell);
        async move {
            if let Some(victim) = cell.lock().take() {
                victim.disconnect();
            }
            Ok::<_, SlotError>(())
        }
    })
}

#[tokio::test]
async fn same_group_snapshot_is_authoritative() {
    // The assassin disconnects the victim before the victim's slot has run.
    // Both live in group 0, so the victim was captured in the snapshot and
    // still runs in this pass; the next pass no longer sees it.
    let sig: Signal<(), ()> = Signal::new();
    let cell: Cell = Arc::new(Mutex::new(None));
    let hits = Arc::new(AtomicUsize::new(0));

    sig.connect(assassin("assassin", &cell));
    let victim = sig.connect(counter("victim", &hits));
    *cell.lock() = Some(victim.clone());

    assert_eq!(sig.emit(()).await.unwrap().len(), 2);
    assert_eq!(hits.load(Ordering::SeqCst), 1);
    assert!(!victim.is_connected());

    assert_eq!(sig.emit(()).await.unwrap().len(), 1);
    assert_eq!(hits.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn cross_group_disconnect_is_honored() {
    // Group 5's snapshot is taken only once group 0 settled, so the removal
    // takes effect within the same pass.
    let sig: Signal<(), ()> = Signal::new();
    let cell: Cell = Arc::new(Mutex::new(None));
    let hits = Arc::new(AtomicUsize::new(0));

    sig.connect(assassin("assassin", &cell));
    let victim = sig.connect_in(counter("victim", &hits), 5);
    *cell.lock() = Some(victim.clone());

    assert_eq!(sig.emit(()).await.unwrap().len(), 1);
    assert_eq!(hits.load(Ordering::SeqCst), 0);
    assert!(!victim.is_connected());
}

#[tokio::test]
async fn cross_group_blocking_is_honored() {
    let sig: Signal<(), ()> = Signal::new();
    let cell: Cell = Arc::new(Mutex::new(None));
    let hits = Arc::new(AtomicUsize::new(0));

    let blocker_cell = Arc::clone(&cell);
    sig.connect(SlotFn::arc("blocker", move |_: ()| {
        let cell = Arc::clone(&blocker_cell);
        async move {
            if let Some(target) = cell.lock().take() {
                target.set_blocked(true);
            }
            Ok::<_, SlotError>(())
        }
    }));
    let target = sig.connect_in(counter("target", &hits), 5);
    *cell.lock() = Some(target.clone());

    assert_eq!(sig.emit(()).await.unwrap().len(), 1);
    assert_eq!(hits.load(Ordering::SeqCst), 0);
    assert!(target.is_connected(), "blocking must not remove the entry");
}

#[tokio::test]
async fn connections_added_during_a_pass_wait_for_the_next_one() {
    let sig: Signal<(), ()> = Signal::new();
    let hits = Arc::new(AtomicUsize::new(0));

    let grower_sig = sig.clone();
    let grower_hits = Arc::clone(&hits);
    let grown = Arc::new(std::sync::atomic::AtomicBool::new(false));
    sig.connect(SlotFn::arc("grower", move |_: ()| {
        let sig = grower_sig.clone();
        let hits = Arc::clone(&grower_hits);
        let grown = Arc::clone(&grown);
        async move {
            // Same group as the grower, and a brand-new group: neither may
            // run in the pass that created it.
            if !grown.swap(true, Ordering::SeqCst) {
                sig.connect(counter("sibling", &hits));
                sig.connect_in(counter("late-group", &hits), 7);
            }
            Ok::<_, SlotError>(())
        }
    }));

    assert_eq!(sig.emit(()).await.unwrap().len(), 1);
    assert_eq!(hits.load(Ordering::SeqCst), 0);

    // The second pass dispatches grower + the two slots added above.
    assert_eq!(sig.emit(()).await.unwrap().len(), 3);
    assert_eq!(hits.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn group_emptied_mid_pass_is_skipped_without_error() {
    // The assassin removes the only member of group 3; the pass still visits
    // the group id and finds an empty snapshot.
    let sig: Signal<(), ()> = Signal::new();
    let cell: Cell = Arc::new(Mutex::new(None));
    let hits = Arc::new(AtomicUsize::new(0));

    sig.connect(assassin("assassin", &cell));
    let only = sig.connect_in(counter("only", &hits), 3);
    sig.connect_in(counter("tail", &hits), 9);
    *cell.lock() = Some(only.clone());

    assert_eq!(sig.emit(()).await.unwrap().len(), 2);
    assert_eq!(hits.load(Ordering::SeqCst), 1, "only the tail ran");
}
