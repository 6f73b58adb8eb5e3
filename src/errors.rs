//! Error types for the visualizer engine
//!
//! This module defines two families of errors:
//!
//! - [`Rejection`]: the recoverable reasons a dispatched operation turned into a no-op.
//!   These are part of normal use (pressing "dequeue" on an empty queue) and are shown
//!   to the user as a message, never raised as a fault.
//! - [`IntegrityError`]: a structural invariant of a linked list is broken. Well-formed
//!   mutations never produce one; it signals a bug in the model and is checked with
//!   `debug_assert!` after every mutation.

use crate::model::{NodeId, Value};
use crate::oplog::OperationKind;
use thiserror::Error;

/// Why an operation was not applied
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Rejection {
    /// Enqueue on a full queue
    #[error("Queue is full. Cannot enqueue {value}.")]
    CapacityExceeded { value: Value, capacity: usize },

    /// Removal from an empty queue or list
    #[error("{}", empty_message(.operation))]
    EmptyStructure { operation: OperationKind },

    /// Dispatch while another animation is in flight
    #[error("Another operation is still animating")]
    ConcurrentOperationRejected,

    /// Dispatch after the owning visualizer was torn down
    #[error("Visualizer has been torn down")]
    TornDown,
}

impl Rejection {
    /// Operation that a no-op log record should be filed under.
    ///
    /// `None` for rejections that must leave the log untouched.
    pub fn logged_operation(&self) -> Option<OperationKind> {
        match self {
            Rejection::CapacityExceeded { .. } => Some(OperationKind::Enqueue),
            Rejection::EmptyStructure { operation } => Some(*operation),
            Rejection::ConcurrentOperationRejected | Rejection::TornDown => None,
        }
    }
}

fn empty_message(operation: &OperationKind) -> &'static str {
    match operation {
        OperationKind::Dequeue => "Queue is empty. Cannot dequeue.",
        OperationKind::DeleteFront => "List is empty. Cannot delete from front.",
        OperationKind::DeleteBack => "List is empty. Cannot delete from back.",
        _ => "Structure is empty.",
    }
}

/// Broken linked-list invariant
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IntegrityError {
    #[error("head is {head:?} but the list holds {len} node(s)")]
    HeadMismatch { head: Option<NodeId>, len: usize },

    #[error("tail is {tail:?} but traversal ends at {last:?}")]
    TailMismatch {
        tail: Option<NodeId>,
        last: Option<NodeId>,
    },

    #[error("node {0} is referenced but missing from the arena")]
    DanglingLink(NodeId),

    #[error("traversal revisited node {0}")]
    Cycle(NodeId),

    #[error("{reachable} of {len} node(s) are reachable from head")]
    Orphans { reachable: usize, len: usize },

    #[error("{from}.next = {to} but {to}.prev = {back:?}")]
    AsymmetricLink {
        from: NodeId,
        to: NodeId,
        back: Option<NodeId>,
    },

    #[error("head {0} has a prev link")]
    HeadHasPrev(NodeId),

    #[error("singly linked list node {0} carries a prev link")]
    UnexpectedPrev(NodeId),

    #[error("singly linked list tracks a tail")]
    UnexpectedTail,
}
