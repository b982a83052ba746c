//! Multi-threaded behavior of emission and the two disconnect flavors.
//!
//! Sleeps only give a broken implementation the chance to misbehave; every
//! positive assertion is ordered by channels or joins.

use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::{Duration, Instant};

use signaler::{Signaler, SignalerConnection, SignalerConnectionGuard};

/// Slot that reports entry, then blocks until released; sets `done` on exit.
struct Gate {
    entered: mpsc::Receiver<()>,
    release: mpsc::Sender<()>,
    done: Arc<AtomicBool>,
}

fn connect_gate(sig: &Signaler<u32>, group: i32) -> Gate {
    let (entered_tx, entered_rx) = mpsc::channel();
    let (release_tx, release_rx) = mpsc::channel::<()>();
    let release_rx = Mutex::new(release_rx);
    let done = Arc::new(AtomicBool::new(false));

    let d = Arc::clone(&done);
    sig.connect_in_group(
        move |_: &u32| {
            let _ = entered_tx.send(());
            let _ = release_rx.lock().unwrap().recv();
            d.store(true, Ordering::SeqCst);
        },
        group,
    );

    Gate {
        entered: entered_rx,
        release: release_tx,
        done,
    }
}

fn wait_until(deadline: Duration, cond: impl Fn() -> bool) -> bool {
    let start = Instant::now();
    while start.elapsed() < deadline {
        if cond() {
            return true;
        }
        thread::sleep(Duration::from_millis(2));
    }
    cond()
}

#[test]
fn test_disconnect_and_wait_returns_after_in_flight_emission() {
    let sig = Arc::new(Signaler::<u32>::new());
    let gate = connect_gate(&sig, 0);
    let other = sig.connect_in_group(|_: &u32| {}, 1);
    let probe = other.clone();

    let emitter = {
        let sig = Arc::clone(&sig);
        thread::spawn(move || sig.emit(&1))
    };
    gate.entered.recv().unwrap();

    let waiter_returned = Arc::new(AtomicBool::new(false));
    let waiter = {
        let returned = Arc::clone(&waiter_returned);
        let slot_done = Arc::clone(&gate.done);
        thread::spawn(move || {
            other.disconnect_and_wait();
            returned.store(true, Ordering::SeqCst);
            slot_done.load(Ordering::SeqCst)
        })
    };

    assert!(wait_until(Duration::from_secs(5), || !probe.is_connected()));
    thread::sleep(Duration::from_millis(50));
    assert!(!waiter_returned.load(Ordering::SeqCst));

    gate.release.send(()).unwrap();
    let emission_finished_first = waiter.join().unwrap();
    assert!(emission_finished_first);
    emitter.join().unwrap().unwrap();
}

#[test]
fn test_plain_disconnect_does_not_wait_for_emission() {
    let sig = Arc::new(Signaler::<u32>::new());
    let gate = connect_gate(&sig, 0);
    let hits = Arc::new(AtomicUsize::new(0));
    let h = Arc::clone(&hits);
    let later = sig.connect_in_group(
        move |_: &u32| {
            h.fetch_add(1, Ordering::SeqCst);
        },
        1,
    );

    let emitter = {
        let sig = Arc::clone(&sig);
        thread::spawn(move || sig.emit(&1))
    };
    gate.entered.recv().unwrap();

    let (finished_tx, finished_rx) = mpsc::channel();
    let disconnector = {
        let later = later.clone();
        thread::spawn(move || {
            later.disconnect();
            let _ = finished_tx.send(());
        })
    };
    assert!(finished_rx.recv_timeout(Duration::from_secs(5)).is_ok());
    disconnector.join().unwrap();
    assert!(!later.is_connected());
    assert!(!gate.done.load(Ordering::SeqCst));

    gate.release.send(()).unwrap();
    emitter.join().unwrap().unwrap();
    assert_eq!(hits.load(Ordering::SeqCst), 0);
}

#[test]
fn test_waiting_guard_blocks_until_emission_finishes() {
    let sig = Arc::new(Signaler::<u32>::new());
    let gate = connect_gate(&sig, 0);
    let guard = SignalerConnectionGuard::new(sig.connect_in_group(|_: &u32| {}, 1), true);

    let emitter = {
        let sig = Arc::clone(&sig);
        thread::spawn(move || sig.emit(&1))
    };
    gate.entered.recv().unwrap();

    let dropper = {
        let slot_done = Arc::clone(&gate.done);
        thread::spawn(move || {
            drop(guard);
            slot_done.load(Ordering::SeqCst)
        })
    };

    thread::sleep(Duration::from_millis(20));
    gate.release.send(()).unwrap();
    assert!(dropper.join().unwrap());
    emitter.join().unwrap().unwrap();
}

/// Runs `bulk` on a helper thread while `gate` holds an emission open.
///
/// Returns the removed count and whether the gated slot had finished by the
/// time `bulk` returned.
fn bulk_disconnect_during_emission(
    sig: &Arc<Signaler<u32>>,
    gate: Gate,
    bulk: fn(&Signaler<u32>) -> usize,
) -> (usize, bool) {
    let emitter = {
        let sig = Arc::clone(sig);
        thread::spawn(move || sig.emit(&1))
    };
    gate.entered.recv().unwrap();

    let (finished_tx, finished_rx) = mpsc::channel();
    let waiter = {
        let sig = Arc::clone(sig);
        let slot_done = Arc::clone(&gate.done);
        thread::spawn(move || {
            let count = bulk(&sig);
            let _ = finished_tx.send(());
            (count, slot_done.load(Ordering::SeqCst))
        })
    };

    assert!(finished_rx.recv_timeout(Duration::from_millis(50)).is_err());
    gate.release.send(()).unwrap();

    let outcome = waiter.join().unwrap();
    emitter.join().unwrap().unwrap();
    outcome
}

#[test]
fn test_disconnect_group_and_wait_returns_after_in_flight_emission() {
    let sig = Arc::new(Signaler::<u32>::new());
    let gate = connect_gate(&sig, 0);
    let a = sig.connect_in_group(|_: &u32| {}, 1);
    let b = sig.connect_in_group(|_: &u32| {}, 1);

    let (count, emission_finished_first) = bulk_disconnect_during_emission(&sig, gate, |sig: &Signaler<u32>| {
        sig.disconnect_group_and_wait(1)
    });

    assert_eq!(count, 2);
    assert!(emission_finished_first);
    assert!(!a.is_connected());
    assert!(!b.is_connected());
    assert_eq!(sig.slot_count(), 1);
}

#[test]
fn test_disconnect_all_slots_and_wait_returns_after_in_flight_emission() {
    let sig = Arc::new(Signaler::<u32>::new());
    let gate = connect_gate(&sig, 0);
    let other = sig.connect_in_group(|_: &u32| {}, 2);

    let (count, emission_finished_first) =
        bulk_disconnect_during_emission(&sig, gate, Signaler::disconnect_all_slots_and_wait);

    assert_eq!(count, 2);
    assert!(emission_finished_first);
    assert!(!other.is_connected());
    assert_eq!(sig.slot_count(), 0);
}

#[test]
fn test_concurrent_emissions_invoke_every_slot() {
    const THREADS: usize = 4;
    const ROUNDS: usize = 250;

    let sig = Arc::new(Signaler::<usize>::new());
    let total = Arc::new(AtomicUsize::new(0));
    for group in 0..3 {
        let t = Arc::clone(&total);
        sig.connect_in_group(
            move |n: &usize| {
                t.fetch_add(*n, Ordering::Relaxed);
            },
            group,
        );
    }

    let handles: Vec<_> = (0..THREADS)
        .map(|_| {
            let sig = Arc::clone(&sig);
            thread::spawn(move || {
                for _ in 0..ROUNDS {
                    sig.emit(&1).unwrap();
                }
            })
        })
        .collect();
    for h in handles {
        h.join().unwrap();
    }

    assert_eq!(total.load(Ordering::Relaxed), THREADS * ROUNDS * 3);
}

#[test]
fn test_no_invocation_after_disconnect_and_wait_under_load() {
    let sig = Arc::new(Signaler::<()>::new());
    let stop = Arc::new(AtomicBool::new(false));

    let counters: Vec<Arc<AtomicUsize>> = (0..8).map(|_| Arc::new(AtomicUsize::new(0))).collect();
    let conns: Vec<SignalerConnection> = counters
        .iter()
        .enumerate()
        .map(|(i, c)| {
            let c = Arc::clone(c);
            sig.connect_in_group(
                move |_: &()| {
                    c.fetch_add(1, Ordering::SeqCst);
                },
                (i % 3) as i32,
            )
        })
        .collect();

    let emitters: Vec<_> = (0..3)
        .map(|_| {
            let sig = Arc::clone(&sig);
            let stop = Arc::clone(&stop);
            thread::spawn(move || {
                while !stop.load(Ordering::SeqCst) {
                    sig.emit(&()).unwrap();
                }
            })
        })
        .collect();

    let churn = {
        let sig = Arc::clone(&sig);
        let stop = Arc::clone(&stop);
        thread::spawn(move || {
            while !stop.load(Ordering::SeqCst) {
                let c = sig.connect_in_group(|_: &()| {}, 1);
                c.disconnect();
            }
        })
    };

    for (conn, counter) in conns.iter().zip(&counters) {
        thread::sleep(Duration::from_millis(2));
        conn.disconnect_and_wait();
        let frozen = counter.load(Ordering::SeqCst);
        thread::sleep(Duration::from_millis(2));
        assert_eq!(counter.load(Ordering::SeqCst), frozen);
    }

    stop.store(true, Ordering::SeqCst);
    for h in emitters {
        h.join().unwrap();
    }
    churn.join().unwrap();
    assert_eq!(sig.slot_count(), 0);
}

#[test]
fn test_panicking_slot_releases_emission_barrier() {
    let sig: Signaler<u32> = Signaler::new();
    let conn = sig.connect(|n: &u32| {
        if *n == 13 {
            panic!("unlucky");
        }
    });

    let outcome = catch_unwind(AssertUnwindSafe(|| sig.emit(&13)));
    assert!(outcome.is_err());

    conn.disconnect_and_wait();
    assert_eq!(sig.disconnect_all_slots_and_wait(), 0);
}

#[test]
fn test_connections_dropped_on_other_thread_after_signaler() {
    let sig: Signaler<u32> = Signaler::new();
    let conns: Vec<SignalerConnection> = (0..4).map(|g| sig.connect_in_group(|_: &u32| {}, g)).collect();
    drop(sig);

    let handle = thread::spawn(move || {
        conns.iter().for_each(SignalerConnection::disconnect_and_wait);
        conns.iter().any(SignalerConnection::is_connected)
    });
    assert!(!handle.join().unwrap());
}
