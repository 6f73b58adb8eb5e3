//! Illustrative C++ listings
//!
//! Renders a short C++ program that would rebuild the current snapshot. The text is
//! for display only: nothing reads it back and it is not compiled or checked.
//!
//! List traversal goes through [`LinkedList::iter`], which stops after `len()` nodes,
//! so a corrupted graph yields a truncated listing instead of a hang.

use crate::model::{
    list::{LinkedList, ListKind},
    queue::Queue,
    Value,
};

const QUEUE_TEMPLATE: &str = r#"#include <iostream>

const int QUEUE_CAPACITY = {capacity};
int queue_arr[QUEUE_CAPACITY];
int queue_front_idx = 0;
int queue_rear_idx = -1;
int queue_current_size = 0;

bool isFull() { return queue_current_size == QUEUE_CAPACITY; }
bool isEmpty() { return queue_current_size == 0; }

void enqueue(int item) {
    if (isFull()) {
        return;
    }
    queue_rear_idx = (queue_rear_idx + 1) % QUEUE_CAPACITY;
    queue_arr[queue_rear_idx] = item;
    queue_current_size++;
}

int dequeue() {
    if (isEmpty()) {
        return -1;
    }
    int item = queue_arr[queue_front_idx];
    queue_front_idx = (queue_front_idx + 1) % QUEUE_CAPACITY;
    queue_current_size--;
    return item;
}

int main() {
{body}
}"#;

const SLL_TEMPLATE: &str = r#"#include <iostream>

class Node {
public:
    int data;
    Node* next;

    Node(int val) : data(val), next(nullptr) {}
};

class SinglyLinkedList {
public:
    Node* head = nullptr;

    void insertFront(int val) {
        Node* node = new Node(val);
        node->next = head;
        head = node;
    }

    void insertBack(int val) {
        Node* node = new Node(val);
        if (head == nullptr) {
            head = node;
            return;
        }
        Node* temp = head;
        while (temp->next != nullptr) {
            temp = temp->next;
        }
        temp->next = node;
    }

    void deleteFront() {
        if (head == nullptr) {
            std::cout << "List is empty. Cannot delete from front." << std::endl;
            return;
        }
        Node* temp = head;
        head = head->next;
        delete temp;
    }

    void reverse() {
        Node* prev = nullptr;
        Node* current = head;
        while (current != nullptr) {
            Node* next = current->next;
            current->next = prev;
            prev = current;
            current = next;
        }
        head = prev;
    }
};

int main() {
    SinglyLinkedList list;
{body}
}"#;

const DLL_TEMPLATE: &str = r#"#include <iostream>

class Node {
public:
    int data;
    Node* next;
    Node* prev;

    Node(int val) : data(val), next(nullptr), prev(nullptr) {}
};

class DoublyLinkedList {
public:
    Node* head = nullptr;
    Node* tail = nullptr;

    void insertBack(int val) {
        Node* node = new Node(val);
        if (tail == nullptr) {
            head = tail = node;
            return;
        }
        node->prev = tail;
        tail->next = node;
        tail = node;
    }

    void deleteBack() {
        if (tail == nullptr) {
            std::cout << "List is empty. Cannot delete from back." << std::endl;
            return;
        }
        Node* temp = tail;
        tail = tail->prev;
        if (tail != nullptr) {
            tail->next = nullptr;
        } else {
            head = nullptr;
        }
        delete temp;
    }

    void reverse() {
        Node* current = head;
        while (current != nullptr) {
            Node* temp = current->prev;
            current->prev = current->next;
            current->next = temp;
            current = current->prev;
        }
        Node* temp = head;
        head = tail;
        tail = temp;
    }
};

int main() {
    DoublyLinkedList list;
{body}
}"#;

fn body(values: &[Value], call: &str, empty: &str) -> String {
    if values.is_empty() {
        return format!("    // {} is currently empty", empty);
    }

    let listed: Vec<String> = values.iter().map(|v| v.to_string()).collect();
    let mut lines = vec![format!("    // Current elements: {}", listed.join(", "))];
    lines.extend(values.iter().map(|v| format!("    {}({});", call, v)));
    lines.join("\n")
}

/// Program rebuilding the given queue
pub fn queue_listing(queue: &Queue) -> String {
    QUEUE_TEMPLATE
        .replace("{capacity}", &queue.capacity().to_string())
        .replace("{body}", &body(&queue.values(), "enqueue", "Queue"))
}

/// Program rebuilding the given list
pub fn list_listing(list: &LinkedList) -> String {
    let template = match list.kind() {
        ListKind::Sll => SLL_TEMPLATE,
        ListKind::Dll => DLL_TEMPLATE,
    };
    template.replace("{body}", &body(&list.values(), "list.insertBack", "List"))
}
