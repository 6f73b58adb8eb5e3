//! Queue visualizer facade

use super::Session;
use crate::animation::{queue_steps, AnimationState};
use crate::errors::Rejection;
use crate::model::{queue::Queue, Value};
use crate::oplog::{LogOrder, OperationLog};
use std::num::NonZeroUsize;
use std::time::Duration;

/// Entry point for a single queue visualizer
#[derive(Debug)]
pub struct QueueController {
    session: Session<Queue, usize>,
}

impl QueueController {
    pub fn new(capacity: NonZeroUsize, step_duration: Duration, order: LogOrder) -> Self {
        tracing::debug!(capacity = capacity.get(), "queue visualizer mounted");
        QueueController {
            session: Session::new(Queue::new(capacity), step_duration, order),
        }
    }

    /// Committed snapshot
    pub fn queue(&self) -> &Queue {
        self.session.committed()
    }

    /// Queue to draw for the current animation step
    pub fn display(&self) -> &Queue {
        self.session.display()
    }

    pub fn operations(&self) -> &OperationLog {
        self.session.log()
    }

    pub fn is_animating(&self) -> bool {
        self.session.is_animating()
    }

    pub fn animation_state(&self) -> &AnimationState<usize> {
        self.session.state()
    }

    /// Lowest highlighted logical position, if any
    pub fn highlighted_index(&self) -> Option<usize> {
        self.session.state().highlighted.iter().min().copied()
    }

    pub fn is_full(&self) -> bool {
        self.queue().is_full()
    }

    pub fn is_empty(&self) -> bool {
        self.queue().is_empty()
    }

    pub fn progress(&self) -> Option<(usize, usize)> {
        self.session.progress()
    }

    pub fn revision(&self) -> u64 {
        self.session.revision()
    }

    pub fn is_torn_down(&self) -> bool {
        self.session.is_torn_down()
    }

    pub fn enqueue(&mut self, value: Value) -> Result<(), Rejection> {
        self.session.dispatch(|queue| queue_steps::enqueue(queue, value))
    }

    pub fn dequeue(&mut self) -> Result<(), Rejection> {
        self.session.dispatch(queue_steps::dequeue)
    }

    pub fn clear(&mut self) -> Result<(), Rejection> {
        self.session.dispatch(|queue| Ok(queue_steps::clear(queue)))
    }

    pub fn tick(&mut self, elapsed: Duration) -> bool {
        self.session.tick(elapsed)
    }

    pub fn teardown(&mut self) {
        self.session.teardown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STEP: Duration = Duration::from_millis(100);

    fn controller(capacity: usize) -> QueueController {
        QueueController::new(NonZeroUsize::new(capacity).unwrap(), STEP, LogOrder::OldestFirst)
    }

    #[test]
    fn test_snapshot_changes_only_at_the_end() {
        let mut qc = controller(3);
        qc.enqueue(1).unwrap();

        assert!(qc.is_animating());
        assert!(qc.queue().is_empty());
        assert_eq!(qc.revision(), 0);

        qc.tick(STEP);
        // Second step draws the working copy but nothing is committed yet
        assert_eq!(qc.display().values(), vec![1]);
        assert!(qc.queue().is_empty());
        assert!(qc.operations().is_empty());

        qc.tick(STEP);
        assert!(!qc.is_animating());
        assert_eq!(qc.queue().values(), vec![1]);
        assert_eq!(qc.operations().len(), 1);
        assert_eq!(qc.revision(), 1);
        assert_eq!(qc.highlighted_index(), None);
    }

    #[test]
    fn test_highlighted_index_follows_steps() {
        let mut qc = controller(3);
        qc.enqueue(1).unwrap();
        qc.tick(STEP * 2);
        qc.enqueue(2).unwrap();

        assert_eq!(qc.highlighted_index(), Some(0));
        qc.tick(STEP);
        assert_eq!(qc.highlighted_index(), Some(1));
    }
}
