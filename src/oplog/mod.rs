//! Operation log
//!
//! Append-only record of every operation dispatched to a visualizer. One record is
//! written per completed mutation (never per animation step), plus one per operation
//! that was rejected as a no-op because the structure was full or empty.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Every operation the visualizers support
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationKind {
    Enqueue,
    Dequeue,
    Clear,
    InsertFront,
    InsertBack,
    DeleteFront,
    DeleteBack,
    Reverse,
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OperationKind::Enqueue => "enqueue",
            OperationKind::Dequeue => "dequeue",
            OperationKind::Clear => "clear",
            OperationKind::InsertFront => "insert front",
            OperationKind::InsertBack => "insert back",
            OperationKind::DeleteFront => "delete front",
            OperationKind::DeleteBack => "delete back",
            OperationKind::Reverse => "reverse",
        };
        f.write_str(name)
    }
}

/// Immutable log entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationRecord {
    /// Monotonic per-log timestamp, starting at 0
    pub seq: u64,
    pub kind: OperationKind,
    pub description: String,
    /// `false` when the operation was rejected and left the structure unchanged
    pub applied: bool,
}

/// Order in which a log is presented
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LogOrder {
    #[default]
    NewestFirst,
    OldestFirst,
}

/// Ordered, append-only log
#[derive(Debug, Clone, Default)]
pub struct OperationLog {
    records: Vec<OperationRecord>,
    order: LogOrder,
}

impl OperationLog {
    pub fn new(order: LogOrder) -> Self {
        OperationLog {
            records: Vec::new(),
            order,
        }
    }

    /// Append a record for a completed mutation
    pub fn record(
        &mut self,
        kind: OperationKind,
        description: impl Into<String>,
    ) -> &OperationRecord {
        self.push(kind, description.into(), true)
    }

    /// Append a record for a rejected operation
    pub fn record_noop(
        &mut self,
        kind: OperationKind,
        description: impl Into<String>,
    ) -> &OperationRecord {
        self.push(kind, description.into(), false)
    }

    fn push(
        &mut self,
        kind: OperationKind,
        description: String,
        applied: bool,
    ) -> &OperationRecord {
        let seq = self.records.len() as u64;
        self.records.push(OperationRecord {
            seq,
            kind,
            description,
            applied,
        });
        &self.records[self.records.len() - 1]
    }

    pub fn order(&self) -> LogOrder {
        self.order
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Most recent record
    pub fn last(&self) -> Option<&OperationRecord> {
        self.records.last()
    }

    /// Records in insertion order
    pub fn as_slice(&self) -> &[OperationRecord] {
        &self.records
    }

    /// Records in presentation order
    pub fn iter(&self) -> Box<dyn Iterator<Item = &OperationRecord> + '_> {
        match self.order {
            LogOrder::OldestFirst => Box::new(self.records.iter()),
            LogOrder::NewestFirst => Box::new(self.records.iter().rev()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequence_numbers_follow_insertion() {
        let mut log = OperationLog::new(LogOrder::OldestFirst);
        log.record(OperationKind::Enqueue, "Enqueued 1");
        log.record_noop(OperationKind::Dequeue, "Queue is empty. Cannot dequeue.");
        log.record(OperationKind::Clear, "Cleared queue");

        let seqs: Vec<u64> = log.iter().map(|r| r.seq).collect();
        assert_eq!(seqs, vec![0, 1, 2]);
        assert!(!log.as_slice()[1].applied);
    }

    #[test]
    fn test_newest_first_presentation() {
        let mut log = OperationLog::new(LogOrder::NewestFirst);
        log.record(OperationKind::InsertFront, "Inserted 1 at front");
        log.record(OperationKind::Reverse, "Reversed list");

        let kinds: Vec<OperationKind> = log.iter().map(|r| r.kind).collect();
        assert_eq!(kinds, vec![OperationKind::Reverse, OperationKind::InsertFront]);
        assert_eq!(log.last().map(|r| r.kind), Some(OperationKind::Reverse));
    }
}
