//! Structural model for the visualizers
//!
//! This module provides the pure data behind each visualizer:
//! - [`queue`]: bounded circular queue of [`queue::QueueNode`]s
//! - [`list`]: singly/doubly linked list stored as an id → node arena
//!
//! # Node Handles
//!
//! Nodes are addressed through opaque [`NodeId`] handles instead of references.
//! A "pointer" such as `next` or `head` is an id lookup into the owning arena, which
//! makes snapshotting a structure a plain `clone()`.
//!
//! Ids come from a per-structure [`NodeIdAllocator`] and are never reused, even after
//! the node they named has been removed.

pub mod list;
pub mod queue;

use std::fmt;

/// Value stored in a node
pub type Value = i64;

/// Opaque, stable handle for a node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u64);

impl NodeId {
    /// Raw handle value (only meaningful for display and ordering)
    pub fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Monotonic id source owned by a single structure instance
#[derive(Debug, Clone, Default)]
pub struct NodeIdAllocator {
    next: u64,
}

impl NodeIdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hand out the next unused id
    pub fn allocate(&mut self) -> NodeId {
        let id = NodeId(self.next);
        self.next += 1;
        id
    }

    /// Number of ids handed out so far
    pub fn issued(&self) -> u64 {
        self.next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_monotonic_and_unique() {
        let mut ids = NodeIdAllocator::new();
        let a = ids.allocate();
        let b = ids.allocate();
        let c = ids.allocate();

        assert!(a < b && b < c);
        assert_eq!(ids.issued(), 3);
        assert_eq!(format!("{}", c), "#2");
    }
}
