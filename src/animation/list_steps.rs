//! Step sequences for linked list operations
//!
//! SLL operations that need the back of the list narrate the walk from head one node
//! per step; DLL operations jump straight to the tracked tail.

use super::{Plan, Stage, Step};
use crate::errors::Rejection;
use crate::model::{
    list::{LinkedList, ListKind},
    NodeId, Value,
};
use crate::oplog::OperationKind;

pub type ListPlan = Plan<LinkedList, NodeId>;

fn value_of(list: &LinkedList, id: Option<NodeId>) -> Option<Value> {
    id.and_then(|id| list.get(id)).map(|node| node.value)
}

pub fn insert_front(list: &LinkedList, value: Value) -> ListPlan {
    let mut working = list.clone();
    let id = working.insert_front(value);

    let approach = match value_of(list, list.head()) {
        Some(head) => format!("Creating node {} and pointing it at head {}", value, head),
        None => format!("List is empty; node {} becomes head", value),
    };

    Plan {
        steps: vec![
            Step::new(Stage::Before, list.head(), approach),
            Step::new(Stage::After, [id], format!("Node {} is the new head", value)),
        ],
        outcome: working,
        kind: OperationKind::InsertFront,
        description: format!("Inserted {} at front", value),
    }
}

pub fn insert_back(list: &LinkedList, value: Value) -> ListPlan {
    let mut working = list.clone();
    let id = working.insert_back(value);

    let mut steps = Vec::new();
    if list.is_empty() {
        steps.push(Step::new(
            Stage::Before,
            None,
            format!("List is empty; node {} becomes head", value),
        ));
    } else {
        match list.kind() {
            ListKind::Sll => {
                for node in list.iter() {
                    steps.push(Step::new(
                        Stage::Before,
                        [node.id],
                        format!("Walking to the last node: at {}", node.value),
                    ));
                }
            }
            ListKind::Dll => {
                let tail = list.tail();
                let tail_value = value_of(list, tail).unwrap_or_default();
                steps.push(Step::new(
                    Stage::Before,
                    tail,
                    format!("Following the tail pointer to {}", tail_value),
                ));
            }
        }
    }
    steps.push(Step::new(
        Stage::After,
        [id],
        format!("Node {} appended at the back", value),
    ));

    Plan {
        steps,
        outcome: working,
        kind: OperationKind::InsertBack,
        description: format!("Inserted {} at back", value),
    }
}

pub fn delete_front(list: &LinkedList) -> Result<ListPlan, Rejection> {
    let mut working = list.clone();
    let removed = working.delete_front().ok_or(Rejection::EmptyStructure {
        operation: OperationKind::DeleteFront,
    })?;

    let result = match value_of(&working, working.head()) {
        Some(head) => format!("Deleted {}; new head is {}", removed.value, head),
        None => format!("Deleted {}; list is now empty", removed.value),
    };

    Ok(Plan {
        steps: vec![
            Step::new(
                Stage::Before,
                [removed.id],
                format!("Unlinking head node {}", removed.value),
            ),
            Step::new(Stage::After, working.head(), result),
        ],
        outcome: working,
        kind: OperationKind::DeleteFront,
        description: format!("Deleted {} from front", removed.value),
    })
}

pub fn delete_back(list: &LinkedList) -> Result<ListPlan, Rejection> {
    let mut working = list.clone();
    let removed = working.delete_back().ok_or(Rejection::EmptyStructure {
        operation: OperationKind::DeleteBack,
    })?;

    let mut steps = Vec::new();
    match list.kind() {
        ListKind::Sll => {
            let nodes: Vec<_> = list.iter().collect();
            for node in nodes.iter().take(nodes.len().saturating_sub(1)) {
                steps.push(Step::new(
                    Stage::Before,
                    [node.id],
                    format!("Walking to the second-to-last node: at {}", node.value),
                ));
            }
            steps.push(Step::new(
                Stage::Before,
                [removed.id],
                format!("Unlinking last node {}", removed.value),
            ));
        }
        ListKind::Dll => {
            steps.push(Step::new(
                Stage::Before,
                [removed.id],
                format!("Following the tail pointer: unlinking {}", removed.value),
            ));
        }
    }

    let new_last = working.last();
    let result = match value_of(&working, new_last) {
        Some(last) => format!("Deleted {}; last node is now {}", removed.value, last),
        None => format!("Deleted {}; list is now empty", removed.value),
    };
    steps.push(Step::new(Stage::After, new_last, result));

    Ok(Plan {
        steps,
        outcome: working,
        kind: OperationKind::DeleteBack,
        description: format!("Deleted {} from back", removed.value),
    })
}

pub fn reverse(list: &LinkedList) -> ListPlan {
    let mut working = list.clone();
    working.reverse();

    let mut steps = Vec::new();
    if list.len() <= 1 {
        steps.push(Step::new(Stage::Before, list.head(), "Nothing to reverse"));
    } else {
        for node in list.iter() {
            let message = match list.kind() {
                ListKind::Sll => format!("Reversing the next pointer of {}", node.value),
                ListKind::Dll => format!("Swapping next and prev of {}", node.value),
            };
            steps.push(Step::new(Stage::Before, [node.id], message));
        }
        let ends = working.head().into_iter().chain(working.tail());
        let head_value = value_of(&working, working.head()).unwrap_or_default();
        steps.push(Step::new(
            Stage::After,
            ends,
            format!("List reversed; new head is {}", head_value),
        ));
    }

    Plan {
        steps,
        outcome: working,
        kind: OperationKind::Reverse,
        description: "Reversed list".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sll_insert_back_walks_every_node() {
        let list = LinkedList::from_values(ListKind::Sll, &[1, 2, 3]);
        let plan = insert_back(&list, 4);

        // One step per existing node, then the result
        assert_eq!(plan.steps.len(), 4);
        assert!(plan.steps[..3].iter().all(|s| s.stage == Stage::Before));
        assert_eq!(plan.outcome.values(), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_dll_insert_back_uses_tail() {
        let list = LinkedList::from_values(ListKind::Dll, &[1, 2, 3]);
        let plan = insert_back(&list, 4);

        assert_eq!(plan.steps.len(), 2);
        assert!(plan.steps[0].state.is_highlighted(&list.tail().unwrap()));
    }

    #[test]
    fn test_sll_delete_back_walks_to_second_to_last() {
        let list = LinkedList::from_values(ListKind::Sll, &[1, 2, 3]);
        let ids = list.ids();
        let plan = delete_back(&list).unwrap();

        assert!(plan.steps[0].state.is_highlighted(&ids[0]));
        assert!(plan.steps[1].state.is_highlighted(&ids[1]));
        assert!(plan.steps[2].state.is_highlighted(&ids[2]));
        assert!(plan.steps[3].state.is_highlighted(&ids[1]));
        assert_eq!(plan.description, "Deleted 3 from back");
    }

    #[test]
    fn test_delete_front_on_empty_is_rejected() {
        let list = LinkedList::new(ListKind::Sll);
        assert_eq!(
            delete_front(&list).unwrap_err(),
            Rejection::EmptyStructure {
                operation: OperationKind::DeleteFront
            }
        );
    }

    #[test]
    fn test_reverse_single_node_is_one_step() {
        let list = LinkedList::from_values(ListKind::Dll, &[7]);
        let plan = reverse(&list);

        assert_eq!(plan.steps.len(), 1);
        assert_eq!(plan.steps[0].state.message, "Nothing to reverse");
        assert_eq!(plan.outcome.values(), vec![7]);
    }
}
