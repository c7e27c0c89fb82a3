use taskdeck_core::{Priority, Todo};
use uuid::Uuid;

#[test]
fn new_todo_sets_defaults() {
    let todo = Todo::new("Buy milk", "2 liters", "2026-03-01", Priority::Medium);

    assert!(!todo.id.is_nil());
    assert_eq!(todo.title, "Buy milk");
    assert_eq!(todo.description, "2 liters");
    assert_eq!(todo.due_date, "2026-03-01");
    assert_eq!(todo.priority, Priority::Medium);
    assert!(todo.checklist.is_empty());
    assert!(!todo.completed);
}

#[test]
fn toggle_complete_flips_both_ways() {
    let mut todo = Todo::new("t", "", "2026-03-01", Priority::Low);

    todo.toggle_complete();
    assert!(todo.completed);

    todo.toggle_complete();
    assert!(!todo.completed);
}

#[test]
fn checklist_items_append_in_insertion_order() {
    let mut todo = Todo::new("t", "", "2026-03-01", Priority::High);

    todo.add_checklist_item("first");
    todo.add_checklist_item("second");
    todo.add_checklist_item("");

    assert_eq!(todo.checklist.len(), 3);
    assert_eq!(todo.checklist[0].text, "first");
    assert_eq!(todo.checklist[1].text, "second");
    assert_eq!(todo.checklist[2].text, "");
    assert!(todo.checklist.iter().all(|item| !item.done));
}

#[test]
fn toggle_checklist_item_flips_only_the_target() {
    let mut todo = Todo::new("t", "", "2026-03-01", Priority::Low);
    todo.add_checklist_item("a");
    todo.add_checklist_item("b");

    todo.toggle_checklist_item(1);
    assert!(!todo.checklist[0].done);
    assert!(todo.checklist[1].done);

    todo.toggle_checklist_item(1);
    assert!(!todo.checklist[1].done);
}

#[test]
fn out_of_range_checklist_indices_leave_todo_unchanged() {
    let mut todo = Todo::new("t", "", "2026-03-01", Priority::Low);
    todo.add_checklist_item("only");
    let before = todo.clone();

    todo.toggle_checklist_item(1);
    todo.toggle_checklist_item(usize::MAX);
    todo.remove_checklist_item(1);
    todo.remove_checklist_item(usize::MAX);

    assert_eq!(todo, before);
}

#[test]
fn remove_checklist_item_shifts_subsequent_items() {
    let mut todo = Todo::new("t", "", "2026-03-01", Priority::Low);
    todo.add_checklist_item("a");
    todo.add_checklist_item("b");
    todo.add_checklist_item("c");

    todo.remove_checklist_item(1);

    assert_eq!(todo.checklist.len(), 2);
    assert_eq!(todo.checklist[0].text, "a");
    assert_eq!(todo.checklist[1].text, "c");
}

#[test]
fn todo_serialization_uses_expected_wire_fields() {
    let id = Uuid::parse_str("11111111-2222-4333-8444-555555555555").unwrap();
    let mut todo = Todo::with_id(id, "Ship release", "tag and publish", "2026-03-02", Priority::High);
    todo.add_checklist_item("write changelog");
    todo.toggle_checklist_item(0);
    todo.toggle_complete();

    let json = serde_json::to_value(&todo).unwrap();
    assert_eq!(json["id"], id.to_string());
    assert_eq!(json["title"], "Ship release");
    assert_eq!(json["description"], "tag and publish");
    assert_eq!(json["dueDate"], "2026-03-02");
    assert_eq!(json["priority"], "high");
    assert_eq!(json["checklist"][0]["text"], "write changelog");
    assert_eq!(json["checklist"][0]["done"], true);
    assert_eq!(json["completed"], true);

    let decoded: Todo = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, todo);
}
