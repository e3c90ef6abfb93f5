//! Connection lifecycle: disconnect idempotence, dispose, reconnect move
//! semantics and bulk release via `ConnectionGroup`.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use signalcast::{Connection, ConnectionGroup, Signal, SlotError, SlotFn, SlotRef};

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

#[tokio::test]
async fn disconnect_stops_future_dispatch() {
    let sig: Signal<(), ()> = Signal::new();
    let hits = Arc::new(AtomicUsize::new(0));
    let conn = sig.connect(counter("c", &hits));

    assert_eq!(sig.emit(()).await.unwrap().len(), 1);
    conn.disconnect();
    assert_eq!(sig.emit(()).await.unwrap().len(), 0);
    assert_eq!(hits.load(Ordering::SeqCst), 1);
}

#[test]
fn disconnect_is_idempotent_even_for_never_connected_handles() {
    let sig: Signal<(), ()> = Signal::new();
    let conn = sig.connect(SlotFn::arc("c", |_: ()| async { Ok::<_, SlotError>(()) }));

    conn.disconnect();
    assert!(!conn.is_connected());
    conn.disconnect(); // second call is a safe no-op
    assert!(!conn.is_connected());

    let detached: Connection<(), ()> =
        Connection::detached(SlotFn::arc("d", |_: ()| async { Ok::<_, SlotError>(()) }));
    detached.disconnect();
    assert!(!detached.is_connected());
}

#[test]
fn signal_side_disconnect_converges_with_handle_side() {
    let sig: Signal<(), ()> = Signal::new();
    let conn = sig.connect(SlotFn::arc("c", |_: ()| async { Ok::<_, SlotError>(()) }));

    sig.disconnect(&conn);
    assert!(!sig.is_connected(&conn));
    assert!(!conn.is_connected());

    // The handle-side path afterwards is still a no-op.
    conn.disconnect();
    assert!(!conn.is_connected());
}

#[test]
fn disconnecting_a_foreign_handle_is_a_noop() {
    let a: Signal<(), ()> = Signal::new();
    let b: Signal<(), ()> = Signal::new();
    let on_a = a.connect(SlotFn::arc("c", |_: ()| async { Ok::<_, SlotError>(()) }));

    b.disconnect(&on_a);
    assert!(a.is_connected(&on_a), "b must not be able to remove a's entry");
}

#[tokio::test]
async fn dispose_detaches_every_connection() {
    let sig: Signal<(), ()> = Signal::new();
    let c1 = sig.connect(SlotFn::arc("c1", |_: ()| async { Ok::<_, SlotError>(()) }));
    let c2 = sig.connect_in(SlotFn::arc("c2", |_: ()| async { Ok::<_, SlotError>(()) }), 3);
    let c3 = sig.connect_in(SlotFn::arc("c3", |_: ()| async { Ok::<_, SlotError>(()) }), -3);

    sig.dispose();

    for conn in [&c1, &c2, &c3] {
        assert!(!conn.is_connected());
    }
    assert!(sig.is_empty());
    assert!(sig.emit(()).await.unwrap().is_empty());
}

#[tokio::test]
async fn reconnect_moves_between_groups_without_duplicates() {
    let sig: Signal<(), i32> = Signal::new();
    let first = sig.connect(SlotFn::arc("first", |_: ()| async { Ok::<_, SlotError>(1) }));
    sig.connect(SlotFn::arc("second", |_: ()| async { Ok::<_, SlotError>(2) }));

    // Move `first` behind `second` by relocating it to a later group.
    sig.reconnect(&first, 5, None);
    assert_eq!(sig.len(), 2, "relocation must not duplicate the entry");
    assert_eq!(sig.emit(()).await.unwrap(), vec![2, 1]);

    // And back to the front of group 0.
    sig.reconnect(&first, 0, Some(0));
    assert_eq!(sig.emit(()).await.unwrap(), vec![1, 2]);
}

#[tokio::test]
async fn reconnect_moves_a_handle_between_signals() {
    let a: Signal<(), ()> = Signal::new();
    let b: Signal<(), ()> = Signal::new();
    let conn = a.connect(SlotFn::arc("c", |_: ()| async { Ok::<_, SlotError>(()) }));

    b.reconnect(&conn, 0, None);
    assert!(!a.is_connected(&conn));
    assert!(b.is_connected(&conn));
    assert_eq!(a.emit(()).await.unwrap().len(), 0);
    assert_eq!(b.emit(()).await.unwrap().len(), 1);
}

#[tokio::test]
async fn detached_handle_attaches_via_reconnect() {
    let sig: Signal<(), ()> = Signal::new();
    let conn: Connection<(), ()> =
        Connection::detached(SlotFn::arc("d", |_: ()| async { Ok::<_, SlotError>(()) }));
    assert!(!conn.is_connected());

    sig.reconnect(&conn, 0, None);
    assert!(conn.is_connected());
    assert_eq!(sig.emit(()).await.unwrap().len(), 1);
}

#[test]
fn connection_group_bulk_disconnect() {
    let sig: Signal<(), ()> = Signal::new();
    let mut bag: ConnectionGroup<(), ()> = ConnectionGroup::new();

    let kept = sig.connect(SlotFn::arc("kept", |_: ()| async { Ok::<_, SlotError>(()) }));
    for name in ["a", "b", "c"] {
        bag.add(sig.connect(SlotFn::arc(name, |_: ()| async { Ok::<_, SlotError>(()) })));
    }
    assert_eq!(bag.len(), 3);

    // A removed member survives disconnect_all.
    bag.add(kept.clone());
    bag.remove(&kept);

    bag.disconnect_all();
    assert!(bag.is_empty());
    assert_eq!(sig.len(), 1);
    assert!(sig.is_connected(&kept));
}

#[test]
fn blocking_survives_dispose_and_reconnect() {
    let sig: Signal<(), ()> = Signal::new();
    let conn = sig.connect(SlotFn::arc("c", |_: ()| async { Ok::<_, SlotError>(()) }));
    conn.set_blocked(true);

    sig.dispose();
    assert!(conn.is_blocked(), "dispose leaves block flags untouched");

    sig.reconnect(&conn, 0, None);
    assert!(conn.is_blocked());
    assert!(conn.is_connected());
}
