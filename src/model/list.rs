//! Singly and doubly linked lists
//!
//! This module provides [`LinkedList`], an arena of [`ListNode`]s keyed by [`NodeId`]:
//! - `head` / `tail` / `next` / `prev` are ids, never references
//! - a singly linked list (SLL) tracks only `head`; reaching the back is a walk
//! - a doubly linked list (DLL) tracks `tail` and keeps `prev` links symmetric
//!
//! # Invariants
//!
//! - `head` is `None` iff the arena is empty
//! - the arena holds exactly the nodes reachable from `head`
//! - walking `next` from `head` terminates
//! - DLL: `head.prev == None`, `tail.next == None`, and `a.next == b` iff `b.prev == a`
//!
//! [`LinkedList::check_integrity`] verifies all of the above; every mutation ends with a
//! `debug_assert!` on it. Traversal is additionally bounded by the node count so that a
//! broken graph can never hang the caller.

use super::{NodeId, NodeIdAllocator, Value};
use crate::errors::IntegrityError;
use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which flavour of list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ListKind {
    Sll,
    Dll,
}

impl ListKind {
    pub fn toggled(self) -> Self {
        match self {
            ListKind::Sll => ListKind::Dll,
            ListKind::Dll => ListKind::Sll,
        }
    }
}

impl fmt::Display for ListKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListKind::Sll => write!(f, "SLL"),
            ListKind::Dll => write!(f, "DLL"),
        }
    }
}

/// A node owned by the list arena
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListNode {
    pub id: NodeId,
    pub value: Value,
    pub next: Option<NodeId>,
    pub prev: Option<NodeId>, // Always None in an SLL
}

/// Linked list stored as an id → node mapping
#[derive(Debug, Clone)]
pub struct LinkedList {
    kind: ListKind,
    nodes: FxHashMap<NodeId, ListNode>,
    head: Option<NodeId>,
    tail: Option<NodeId>, // DLL only
    ids: NodeIdAllocator,
}

impl LinkedList {
    pub fn new(kind: ListKind) -> Self {
        LinkedList {
            kind,
            nodes: FxHashMap::default(),
            head: None,
            tail: None,
            ids: NodeIdAllocator::new(),
        }
    }

    /// Build a list by inserting `values` at the back in order
    pub fn from_values(kind: ListKind, values: &[Value]) -> Self {
        let mut list = LinkedList::new(kind);
        for &value in values {
            list.insert_back(value);
        }
        list
    }

    pub fn kind(&self) -> ListKind {
        self.kind
    }

    pub fn head(&self) -> Option<NodeId> {
        self.head
    }

    /// Tracked tail; always `None` for an SLL
    pub fn tail(&self) -> Option<NodeId> {
        self.tail
    }

    pub fn get(&self, id: NodeId) -> Option<&ListNode> {
        self.nodes.get(&id)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Nodes from head to back, bounded by the node count
    pub fn iter(&self) -> Traversal<'_> {
        Traversal {
            list: self,
            cursor: self.head,
            remaining: self.nodes.len(),
        }
    }

    pub fn ids(&self) -> Vec<NodeId> {
        self.iter().map(|node| node.id).collect()
    }

    pub fn values(&self) -> Vec<Value> {
        self.iter().map(|node| node.value).collect()
    }

    /// Last node: the tracked tail for a DLL, a walk from head for an SLL
    pub fn last(&self) -> Option<NodeId> {
        match self.kind {
            ListKind::Dll => self.tail,
            ListKind::Sll => self.iter().last().map(|node| node.id),
        }
    }

    /// Insert a new head. O(1).
    pub fn insert_front(&mut self, value: Value) -> NodeId {
        let id = self.ids.allocate();
        let old_head = self.head;

        if self.kind == ListKind::Dll {
            match old_head.and_then(|h| self.nodes.get_mut(&h)) {
                Some(head) => head.prev = Some(id),
                None => self.tail = Some(id),
            }
        }

        self.nodes.insert(
            id,
            ListNode {
                id,
                value,
                next: old_head,
                prev: None,
            },
        );
        self.head = Some(id);

        debug_assert!(self.check_integrity().is_ok());
        id
    }

    /// Append a node. O(n) for an SLL, O(1) for a DLL.
    pub fn insert_back(&mut self, value: Value) -> NodeId {
        let id = self.ids.allocate();
        let last = self.last();
        let prev = match self.kind {
            ListKind::Sll => None,
            ListKind::Dll => last,
        };

        self.nodes.insert(
            id,
            ListNode {
                id,
                value,
                next: None,
                prev,
            },
        );

        match last.and_then(|l| self.nodes.get_mut(&l)) {
            Some(node) => node.next = Some(id),
            None => self.head = Some(id),
        }
        if self.kind == ListKind::Dll {
            self.tail = Some(id);
        }

        debug_assert!(self.check_integrity().is_ok());
        id
    }

    /// Unlink and release the head
    pub fn delete_front(&mut self) -> Option<ListNode> {
        let head = self.head?;
        let removed = self.nodes.remove(&head)?;
        self.head = removed.next;

        if self.kind == ListKind::Dll {
            match self.head.and_then(|h| self.nodes.get_mut(&h)) {
                Some(new_head) => new_head.prev = None,
                None => self.tail = None,
            }
        }

        debug_assert!(self.check_integrity().is_ok());
        Some(removed)
    }

    /// Unlink and release the last node
    pub fn delete_back(&mut self) -> Option<ListNode> {
        let removed = match self.kind {
            ListKind::Sll => {
                let ids = self.ids();
                match ids.as_slice() {
                    [] => return None,
                    [_] => return self.delete_front(),
                    [.., second_to_last, last] => {
                        if let Some(node) = self.nodes.get_mut(second_to_last) {
                            node.next = None;
                        }
                        self.nodes.remove(last)?
                    }
                }
            }
            ListKind::Dll => {
                let tail = self.tail?;
                let removed = self.nodes.remove(&tail)?;
                self.tail = removed.prev;
                match self.tail.and_then(|t| self.nodes.get_mut(&t)) {
                    Some(new_tail) => new_tail.next = None,
                    None => self.head = None,
                }
                removed
            }
        };

        debug_assert!(self.check_integrity().is_ok());
        Some(removed)
    }

    /// Reverse in place. A list of length <= 1 is left untouched.
    pub fn reverse(&mut self) {
        if self.nodes.len() <= 1 {
            return;
        }

        match self.kind {
            ListKind::Sll => {
                let mut prev = None;
                let mut cursor = self.head;
                let mut budget = self.nodes.len();
                while let Some(id) = cursor {
                    if budget == 0 {
                        break;
                    }
                    budget -= 1;
                    let Some(node) = self.nodes.get_mut(&id) else {
                        break;
                    };
                    cursor = node.next;
                    node.next = prev;
                    prev = Some(id);
                }
                self.head = prev;
            }
            ListKind::Dll => {
                for node in self.nodes.values_mut() {
                    std::mem::swap(&mut node.next, &mut node.prev);
                }
                std::mem::swap(&mut self.head, &mut self.tail);
            }
        }

        debug_assert!(self.check_integrity().is_ok());
    }

    /// Verify every structural invariant of the list
    pub fn check_integrity(&self) -> Result<(), IntegrityError> {
        let len = self.nodes.len();
        if self.head.is_none() != (len == 0) {
            return Err(IntegrityError::HeadMismatch {
                head: self.head,
                len,
            });
        }

        let mut visited = FxHashSet::default();
        let mut prev: Option<NodeId> = None;
        let mut cursor = self.head;

        while let Some(id) = cursor {
            if !visited.insert(id) {
                return Err(IntegrityError::Cycle(id));
            }
            let node = self.nodes.get(&id).ok_or(IntegrityError::DanglingLink(id))?;

            match self.kind {
                ListKind::Sll if node.prev.is_some() => {
                    return Err(IntegrityError::UnexpectedPrev(id));
                }
                ListKind::Dll if node.prev != prev => {
                    return Err(match prev {
                        None => IntegrityError::HeadHasPrev(id),
                        Some(from) => IntegrityError::AsymmetricLink {
                            from,
                            to: id,
                            back: node.prev,
                        },
                    });
                }
                _ => {}
            }

            prev = Some(id);
            cursor = node.next;
        }

        if visited.len() != len {
            return Err(IntegrityError::Orphans {
                reachable: visited.len(),
                len,
            });
        }

        match self.kind {
            ListKind::Sll if self.tail.is_some() => Err(IntegrityError::UnexpectedTail),
            ListKind::Dll if self.tail != prev => Err(IntegrityError::TailMismatch {
                tail: self.tail,
                last: prev,
            }),
            _ => Ok(()),
        }
    }

    #[cfg(test)]
    pub(crate) fn node_mut(&mut self, id: NodeId) -> Option<&mut ListNode> {
        self.nodes.get_mut(&id)
    }
}

/// Walk from head following `next`, visiting at most `len()` nodes
pub struct Traversal<'a> {
    list: &'a LinkedList,
    cursor: Option<NodeId>,
    remaining: usize,
}

impl<'a> Iterator for Traversal<'a> {
    type Item = &'a ListNode;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.list.nodes.get(&self.cursor?)?;
        self.remaining -= 1;
        self.cursor = node.next;
        Some(node)
    }
}
