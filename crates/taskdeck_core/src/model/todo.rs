//! Todo domain model.
//!
//! # Responsibility
//! - Define a single task entity with an embedded checklist.
//! - Provide lifecycle helpers for completion and checklist mutation.
//!
//! # Invariants
//! - `id` is stable and never reused for another todo.
//! - Checklist items have positional identity only; insertion order is the
//!   canonical order.
//! - Index-based checklist operations are guarded no-ops out of bounds.

use crate::ids::{self, TodoId};
use serde::{Deserialize, Serialize};

/// Urgency level of a todo.
///
/// Serialized lowercase to match the persisted wire naming.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

/// A sub-task line within a todo's checklist.
///
/// Has no independent identity; it is addressed only by its position in the
/// owning todo's checklist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistItem {
    pub text: String,
    pub done: bool,
}

/// A single task with due date, priority, completion state and checklist.
///
/// The entity performs no field validation; callers are responsible for
/// non-empty titles and well-formed due dates before construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    /// Stable global id, assigned at construction, immutable thereafter.
    pub id: TodoId,
    pub title: String,
    /// May be empty.
    pub description: String,
    /// Calendar date in ISO `YYYY-MM-DD` form.
    pub due_date: String,
    pub priority: Priority,
    /// Insertion order is the only ordering key besides the derived
    /// done-last display order.
    pub checklist: Vec<ChecklistItem>,
    pub completed: bool,
}

impl Todo {
    /// Creates a new todo with a generated stable id and `completed = false`.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        due_date: impl Into<String>,
        priority: Priority,
    ) -> Self {
        Self::with_id(ids::fresh(), title, description, due_date, priority)
    }

    /// Creates a new todo with a caller-provided stable id.
    ///
    /// Used where identity already exists externally and must not be
    /// regenerated, and by tests needing deterministic ids.
    pub fn with_id(
        id: TodoId,
        title: impl Into<String>,
        description: impl Into<String>,
        due_date: impl Into<String>,
        priority: Priority,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
            due_date: due_date.into(),
            priority,
            checklist: Vec::new(),
            completed: false,
        }
    }

    /// Flips the completion flag.
    pub fn toggle_complete(&mut self) {
        self.completed = !self.completed;
    }

    /// Appends a not-done checklist item.
    ///
    /// Accepts any string including empty; callers filter input.
    pub fn add_checklist_item(&mut self, text: impl Into<String>) {
        self.checklist.push(ChecklistItem {
            text: text.into(),
            done: false,
        });
    }

    /// Flips the done flag of the checklist item at `index`.
    ///
    /// Out-of-bounds indices are a caller bug, not an error; the checklist
    /// is left unchanged.
    pub fn toggle_checklist_item(&mut self, index: usize) {
        if let Some(item) = self.checklist.get_mut(index) {
            item.done = !item.done;
        }
    }

    /// Removes the checklist item at `index`, shifting subsequent items.
    ///
    /// Guarded no-op when `index` is out of bounds.
    pub fn remove_checklist_item(&mut self, index: usize) {
        if index < self.checklist.len() {
            self.checklist.remove(index);
        }
    }
}
