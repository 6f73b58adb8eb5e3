//! Linked list visualizer facade

use super::Session;
use crate::animation::{list_steps, AnimationState};
use crate::errors::Rejection;
use crate::model::{
    list::{LinkedList, ListKind},
    NodeId, Value,
};
use crate::oplog::{LogOrder, OperationLog};
use std::time::Duration;

/// Entry point for a single linked list visualizer
#[derive(Debug)]
pub struct ListController {
    session: Session<LinkedList, NodeId>,
}

impl ListController {
    pub fn new(kind: ListKind, step_duration: Duration, order: LogOrder) -> Self {
        tracing::debug!(%kind, "list visualizer mounted");
        ListController {
            session: Session::new(LinkedList::new(kind), step_duration, order),
        }
    }

    pub fn kind(&self) -> ListKind {
        self.list().kind()
    }

    /// Committed snapshot
    pub fn list(&self) -> &LinkedList {
        self.session.committed()
    }

    /// List to draw for the current animation step
    pub fn display(&self) -> &LinkedList {
        self.session.display()
    }

    pub fn operations(&self) -> &OperationLog {
        self.session.log()
    }

    pub fn animation_state(&self) -> &AnimationState<NodeId> {
        self.session.state()
    }

    pub fn is_animating(&self) -> bool {
        self.session.is_animating()
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

    pub fn insert_front(&mut self, value: Value) -> Result<(), Rejection> {
        self.session
            .dispatch(|list| Ok(list_steps::insert_front(list, value)))
    }

    pub fn insert_back(&mut self, value: Value) -> Result<(), Rejection> {
        self.session
            .dispatch(|list| Ok(list_steps::insert_back(list, value)))
    }

    pub fn delete_front(&mut self) -> Result<(), Rejection> {
        self.session.dispatch(list_steps::delete_front)
    }

    pub fn delete_back(&mut self) -> Result<(), Rejection> {
        self.session.dispatch(list_steps::delete_back)
    }

    pub fn reverse(&mut self) -> Result<(), Rejection> {
        self.session.dispatch(|list| Ok(list_steps::reverse(list)))
    }

    pub fn tick(&mut self, elapsed: Duration) -> bool {
        let changed = self.session.tick(elapsed);
        if changed {
            if let Err(err) = self.session.committed().check_integrity() {
                tracing::error!(%err, "linked list invariant broken");
            }
        }
        changed
    }

    pub fn teardown(&mut self) {
        self.session.teardown();
    }
}
