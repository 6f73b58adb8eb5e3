//! Bounded circular queue
//!
//! The queue keeps its nodes in a fixed ring of slots with a moving `front` index,
//! the same layout a fixed-array C++ queue uses. The ring is private: callers only
//! ever see nodes in front-to-rear order through [`Queue::iter`], so logical index
//! `0` is always the front regardless of where it sits in the ring.

use super::{NodeId, NodeIdAllocator, Value};
use crate::errors::Rejection;
use crate::oplog::OperationKind;
use std::num::NonZeroUsize;

/// A node owned by the queue
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueueNode {
    pub id: NodeId,
    pub value: Value,
}

/// Fixed-capacity FIFO queue
#[derive(Debug, Clone)]
pub struct Queue {
    slots: Vec<Option<QueueNode>>,
    front: usize,
    size: usize,
    ids: NodeIdAllocator,
}

impl Queue {
    /// Create an empty queue with a fixed capacity
    pub fn new(capacity: NonZeroUsize) -> Self {
        Queue {
            slots: vec![None; capacity.get()],
            front: 0,
            size: 0,
            ids: NodeIdAllocator::new(),
        }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    pub fn is_full(&self) -> bool {
        self.size == self.capacity()
    }

    /// Append a value at the rear
    pub fn enqueue(&mut self, value: Value) -> Result<NodeId, Rejection> {
        if self.is_full() {
            return Err(Rejection::CapacityExceeded {
                value,
                capacity: self.capacity(),
            });
        }

        let id = self.ids.allocate();
        let rear = self.physical(self.size);
        self.slots[rear] = Some(QueueNode { id, value });
        self.size += 1;
        Ok(id)
    }

    /// Remove the front node
    pub fn dequeue(&mut self) -> Result<QueueNode, Rejection> {
        if self.is_empty() {
            return Err(Rejection::EmptyStructure {
                operation: OperationKind::Dequeue,
            });
        }

        let node = self.slots[self.front].take().ok_or(Rejection::EmptyStructure {
            operation: OperationKind::Dequeue,
        })?;
        self.front = (self.front + 1) % self.capacity();
        self.size -= 1;
        Ok(node)
    }

    /// Drop every node. Ids are not recycled.
    pub fn clear(&mut self) {
        self.slots.iter_mut().for_each(|slot| *slot = None);
        self.front = 0;
        self.size = 0;
    }

    /// Front node, if any
    pub fn front(&self) -> Option<&QueueNode> {
        self.get(0)
    }

    /// Node at a logical position (0 = front)
    pub fn get(&self, index: usize) -> Option<&QueueNode> {
        if index >= self.size {
            return None;
        }
        self.slots[self.physical(index)].as_ref()
    }

    /// Nodes from front to rear
    pub fn iter(&self) -> impl Iterator<Item = &QueueNode> + '_ {
        (0..self.size).filter_map(move |i| self.get(i))
    }

    pub fn values(&self) -> Vec<Value> {
        self.iter().map(|node| node.value).collect()
    }

    fn physical(&self, index: usize) -> usize {
        (self.front + index) % self.capacity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn queue(capacity: usize) -> Queue {
        Queue::new(NonZeroUsize::new(capacity).unwrap())
    }

    #[test]
    fn test_wraps_around_the_ring() {
        let mut q = queue(3);
        q.enqueue(1).unwrap();
        q.enqueue(2).unwrap();
        q.enqueue(3).unwrap();
        assert_eq!(q.dequeue().unwrap().value, 1);
        assert_eq!(q.dequeue().unwrap().value, 2);
        q.enqueue(4).unwrap();
        q.enqueue(5).unwrap();

        assert_eq!(q.values(), vec![3, 4, 5]);
        assert!(q.is_full());
        assert_eq!(q.front().map(|n| n.value), Some(3));
    }

    #[test]
    fn test_full_queue_keeps_its_contents() {
        let mut q = queue(1);
        q.enqueue(7).unwrap();
        let err = q.enqueue(8).unwrap_err();

        assert_eq!(
            err,
            Rejection::CapacityExceeded {
                value: 8,
                capacity: 1
            }
        );
        assert_eq!(q.values(), vec![7]);
    }

    #[test]
    fn test_ids_survive_clear() {
        let mut q = queue(2);
        let first = q.enqueue(1).unwrap();
        q.clear();
        let second = q.enqueue(1).unwrap();

        assert_ne!(first, second);
        assert_eq!(q.len(), 1);
    }
}
