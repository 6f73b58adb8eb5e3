// Integration tests for the queue model and its controller

use dsviz::controller::QueueController;
use dsviz::errors::Rejection;
use dsviz::model::queue::Queue;
use dsviz::oplog::{LogOrder, OperationKind};
use std::collections::VecDeque;
use std::num::NonZeroUsize;
use std::time::Duration;

const STEP: Duration = Duration::from_millis(100);

fn capacity(n: usize) -> NonZeroUsize {
    NonZeroUsize::new(n).expect("capacity must be non-zero")
}

/// Deterministic xorshift generator for operation sequences
struct XorShift(u64);

impl XorShift {
    fn next(&mut self) -> u64 {
        self.0 ^= self.0 << 13;
        self.0 ^= self.0 >> 7;
        self.0 ^= self.0 << 17;
        self.0
    }
}

#[test]
fn test_capacity_three_scenario() {
    let mut q = Queue::new(capacity(3));
    q.enqueue(1).unwrap();
    q.enqueue(2).unwrap();
    q.enqueue(3).unwrap();

    let rejected = q.enqueue(4);
    assert!(matches!(rejected, Err(Rejection::CapacityExceeded { value: 4, capacity: 3 })));
    assert_eq!(q.values(), vec![1, 2, 3]);
    assert!(q.is_full());

    assert_eq!(q.dequeue().unwrap().value, 1);
    assert_eq!(q.values(), vec![2, 3]);
}

#[test]
fn test_random_sequences_keep_fifo_and_bounds() {
    for seed in 1..=20u64 {
        let mut rng = XorShift(seed.wrapping_mul(0x9E37_79B9_7F4A_7C15));
        let cap = (seed as usize % 5) + 1;
        let mut q = Queue::new(capacity(cap));
        let mut reference = VecDeque::new();

        for i in 0..200i64 {
            if rng.next() % 3 == 0 {
                match q.dequeue() {
                    Ok(node) => assert_eq!(Some(node.value), reference.pop_front()),
                    Err(_) => assert!(reference.is_empty()),
                }
            } else if q.enqueue(i).is_ok() {
                reference.push_back(i);
            } else {
                assert_eq!(reference.len(), cap);
            }

            assert!(q.len() <= q.capacity());
            assert_eq!(q.values(), reference.iter().copied().collect::<Vec<_>>());
        }
    }
}

#[test]
fn test_clear_is_idempotent() {
    let mut q = Queue::new(capacity(4));
    q.enqueue(1).unwrap();
    q.clear();
    assert!(q.is_empty());
    q.clear();
    assert!(q.is_empty());
    assert_eq!(q.len(), 0);
}

#[test]
fn test_controller_full_queue_logs_noop() {
    let mut qc = QueueController::new(capacity(1), STEP, LogOrder::OldestFirst);
    qc.enqueue(1).unwrap();
    qc.tick(STEP * 10);

    let err = qc.enqueue(2).unwrap_err();
    assert_eq!(err.to_string(), "Queue is full. Cannot enqueue 2.");
    assert!(!qc.is_animating());
    assert_eq!(qc.queue().values(), vec![1]);

    let last = qc.operations().last().unwrap();
    assert_eq!(last.kind, OperationKind::Enqueue);
    assert!(!last.applied);
    assert!(qc.is_full());
}

#[test]
fn test_controller_ignores_dispatch_while_animating() {
    let mut qc = QueueController::new(capacity(3), STEP, LogOrder::OldestFirst);
    qc.enqueue(1).unwrap();

    assert_eq!(qc.enqueue(2), Err(Rejection::ConcurrentOperationRejected));
    assert_eq!(qc.dequeue(), Err(Rejection::ConcurrentOperationRejected));
    assert_eq!(qc.clear(), Err(Rejection::ConcurrentOperationRejected));
    assert!(qc.operations().is_empty());

    qc.tick(STEP * 10);
    assert_eq!(qc.queue().values(), vec![1]);
    assert_eq!(qc.operations().len(), 1);
}

#[test]
fn test_controller_dequeue_and_clear_records() {
    let mut qc = QueueController::new(capacity(4), STEP, LogOrder::NewestFirst);
    for v in [5, 6, 7] {
        qc.enqueue(v).unwrap();
        qc.tick(STEP * 10);
    }
    qc.dequeue().unwrap();
    qc.tick(STEP * 10);
    assert_eq!(qc.queue().values(), vec![6, 7]);

    qc.clear().unwrap();
    qc.tick(STEP * 10);
    assert!(qc.is_empty());

    let descriptions: Vec<&str> = qc
        .operations()
        .iter()
        .map(|r| r.description.as_str())
        .collect();
    assert_eq!(
        descriptions,
        vec!["Cleared queue", "Dequeued 5", "Enqueued 7", "Enqueued 6", "Enqueued 5"]
    );
    assert_eq!(qc.revision(), 5);
}

#[test]
fn test_dequeue_on_empty_controller() {
    let mut qc = QueueController::new(capacity(2), STEP, LogOrder::OldestFirst);
    let err = qc.dequeue().unwrap_err();

    assert_eq!(
        err,
        Rejection::EmptyStructure {
            operation: OperationKind::Dequeue
        }
    );
    assert_eq!(qc.animation_state().message, "Queue is empty. Cannot dequeue.");
    assert_eq!(qc.operations().len(), 1);
}
