// Integration tests for the controller dispatch contract

use dsviz::controller::{ListController, QueueController};
use dsviz::errors::Rejection;
use dsviz::model::list::ListKind;
use dsviz::oplog::LogOrder;
use std::num::NonZeroUsize;
use std::time::Duration;

const STEP: Duration = Duration::from_millis(100);

fn queue_controller(capacity: usize) -> QueueController {
    let capacity = NonZeroUsize::new(capacity).expect("capacity must be positive");
    QueueController::new(capacity, STEP, LogOrder::OldestFirst)
}

fn finish(qc: &mut QueueController) {
    while qc.is_animating() {
        qc.tick(STEP);
    }
}

#[test]
fn test_dispatch_during_animation_changes_nothing() {
    let mut qc = queue_controller(4);
    qc.enqueue(1).unwrap();
    let revision = qc.revision();

    assert_eq!(qc.enqueue(2), Err(Rejection::ConcurrentOperationRejected));
    assert_eq!(qc.dequeue(), Err(Rejection::ConcurrentOperationRejected));
    assert_eq!(qc.clear(), Err(Rejection::ConcurrentOperationRejected));

    assert!(qc.queue().is_empty());
    assert!(qc.operations().is_empty());
    assert_eq!(qc.revision(), revision);

    finish(&mut qc);
    assert_eq!(qc.queue().values(), vec![1]);
    assert_eq!(qc.operations().len(), 1);
}

#[test]
fn test_revision_increments_once_per_operation() {
    let mut qc = queue_controller(2);
    let mut expected = 0;

    for v in [1, 2] {
        qc.enqueue(v).unwrap();
        finish(&mut qc);
        expected += 1;
        assert_eq!(qc.revision(), expected);
    }

    // Rejected operations are logged, so they count too
    assert!(qc.enqueue(3).is_err());
    expected += 1;
    assert_eq!(qc.revision(), expected);

    // Busy rejections are not
    qc.dequeue().unwrap();
    assert!(qc.enqueue(4).is_err());
    assert_eq!(qc.revision(), expected);
    finish(&mut qc);
    assert_eq!(qc.revision(), expected + 1);
}

#[test]
fn test_teardown_cancels_pending_animation() {
    let mut qc = queue_controller(4);
    qc.enqueue(7).unwrap();
    qc.tick(STEP / 2);
    qc.teardown();

    assert!(qc.is_torn_down());
    assert!(!qc.is_animating());
    assert!(!qc.tick(STEP * 100));
    assert!(qc.queue().is_empty());
    assert!(qc.operations().is_empty());
    assert_eq!(qc.enqueue(8), Err(Rejection::TornDown));
    assert!(qc.operations().is_empty());

    // Idempotent
    qc.teardown();
    assert!(qc.is_torn_down());
}

#[test]
fn test_teardown_list_mid_walk() {
    let mut lc = ListController::new(ListKind::Sll, STEP, LogOrder::NewestFirst);
    lc.insert_back(1).unwrap();
    lc.tick(STEP * 10);
    let revision = lc.revision();

    lc.insert_back(2).unwrap();
    lc.tick(STEP);
    lc.teardown();
    lc.tick(STEP * 10);

    assert_eq!(lc.list().values(), vec![1]);
    assert_eq!(lc.operations().len(), 1);
    assert_eq!(lc.revision(), revision);
    assert_eq!(lc.reverse(), Err(Rejection::TornDown));
}

#[test]
fn test_instances_are_independent() {
    let mut first = queue_controller(3);
    let mut second = queue_controller(3);

    first.enqueue(1).unwrap();
    // The other instance is not busy
    second.enqueue(2).unwrap();

    first.tick(STEP * 10);
    assert_eq!(first.queue().values(), vec![1]);
    assert!(second.queue().is_empty());
    assert!(second.is_animating());

    second.teardown();
    assert_eq!(first.dequeue(), Ok(()));
    finish(&mut first);
    assert!(first.queue().is_empty());
    assert_eq!(first.operations().len(), 2);
    assert!(second.operations().is_empty());
}

#[test]
fn test_list_instances_are_independent() {
    let mut sll = ListController::new(ListKind::Sll, STEP, LogOrder::NewestFirst);
    let mut dll = ListController::new(ListKind::Dll, STEP, LogOrder::NewestFirst);

    sll.insert_front(1).unwrap();
    dll.insert_front(2).unwrap();
    sll.tick(STEP * 10);
    dll.tick(STEP * 10);

    assert_eq!(sll.list().values(), vec![1]);
    assert_eq!(dll.list().values(), vec![2]);
    assert_eq!(sll.kind(), ListKind::Sll);
    assert_eq!(dll.kind(), ListKind::Dll);
}

#[test]
fn test_display_shows_preview_after_mutation_stage() {
    let mut qc = queue_controller(3);
    qc.enqueue(5).unwrap();

    // The first step still shows the old queue
    assert!(qc.display().is_empty());

    qc.tick(STEP);
    assert!(qc.is_animating());
    assert_eq!(qc.display().values(), vec![5]);
    assert!(qc.queue().is_empty());
}
