//! Step sequences for queue operations
//!
//! Highlight keys are logical positions, `0` being the front.

use super::{Plan, Stage, Step};
use crate::errors::Rejection;
use crate::model::{queue::Queue, Value};
use crate::oplog::OperationKind;

pub type QueuePlan = Plan<Queue, usize>;

pub fn enqueue(queue: &Queue, value: Value) -> Result<QueuePlan, Rejection> {
    let mut working = queue.clone();
    working.enqueue(value)?;
    let rear = queue.len();

    let approach = match queue.len().checked_sub(1) {
        Some(_) => format!("Enqueuing {} behind the rear", value),
        None => format!("Queue is empty; {} will be the front", value),
    };

    Ok(Plan {
        steps: vec![
            Step::new(Stage::Before, queue.len().checked_sub(1), approach),
            Step::new(
                Stage::After,
                [rear],
                format!("Enqueued {} at position {}", value, rear),
            ),
        ],
        outcome: working,
        kind: OperationKind::Enqueue,
        description: format!("Enqueued {}", value),
    })
}

pub fn dequeue(queue: &Queue) -> Result<QueuePlan, Rejection> {
    let mut working = queue.clone();
    let removed = working.dequeue()?;

    let result = match working.front() {
        Some(front) => Step::new(
            Stage::After,
            [0],
            format!("Dequeued {}; new front is {}", removed.value, front.value),
        ),
        None => Step::new(
            Stage::After,
            None,
            format!("Dequeued {}; queue is now empty", removed.value),
        ),
    };

    Ok(Plan {
        steps: vec![
            Step::new(
                Stage::Before,
                [0],
                format!("Dequeuing {} from the front", removed.value),
            ),
            result,
        ],
        outcome: working,
        kind: OperationKind::Dequeue,
        description: format!("Dequeued {}", removed.value),
    })
}

pub fn clear(queue: &Queue) -> QueuePlan {
    let mut working = queue.clone();
    working.clear();

    let approach = if queue.is_empty() {
        "Queue is already empty".to_string()
    } else {
        format!("Clearing {} element(s)", queue.len())
    };

    Plan {
        steps: vec![
            Step::new(Stage::Before, 0..queue.len(), approach),
            Step::new(Stage::After, None, "Queue cleared"),
        ],
        outcome: working,
        kind: OperationKind::Clear,
        description: "Cleared queue".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::num::NonZeroUsize;

    fn queue_of(capacity: usize, values: &[Value]) -> Queue {
        let mut q = Queue::new(NonZeroUsize::new(capacity).unwrap());
        for &v in values {
            q.enqueue(v).unwrap();
        }
        q
    }

    #[test]
    fn test_enqueue_highlights_old_rear_then_new_slot() {
        let q = queue_of(4, &[1, 2]);
        let plan = enqueue(&q, 3).unwrap();

        assert_eq!(plan.steps.len(), 2);
        assert!(plan.steps[0].state.is_highlighted(&1));
        assert_eq!(plan.steps[1].stage, Stage::After);
        assert!(plan.steps[1].state.is_highlighted(&2));
        assert_eq!(plan.outcome.values(), vec![1, 2, 3]);
        assert_eq!(plan.description, "Enqueued 3");
        // Planning never touches the committed queue
        assert_eq!(q.values(), vec![1, 2]);
    }

    #[test]
    fn test_enqueue_on_full_is_rejected() {
        let q = queue_of(1, &[1]);
        assert!(matches!(enqueue(&q, 2), Err(Rejection::CapacityExceeded { .. })));
    }

    #[test]
    fn test_dequeue_last_element() {
        let q = queue_of(2, &[9]);
        let plan = dequeue(&q).unwrap();

        assert!(plan.outcome.is_empty());
        assert!(plan.steps[1].state.highlighted.is_empty());
        assert_eq!(plan.steps[1].state.message, "Dequeued 9; queue is now empty");
    }

    #[test]
    fn test_clear_highlights_everything_first() {
        let q = queue_of(3, &[1, 2, 3]);
        let plan = clear(&q);

        assert_eq!(plan.steps[0].state.highlighted.len(), 3);
        assert!(plan.outcome.is_empty());
    }
}
