//! Project domain model.
//!
//! # Responsibility
//! - Group todos under a named, renameable collection.
//! - Preserve todo insertion order; it is the display order for
//!   non-aggregate views.
//!
//! # Invariants
//! - `id` is stable and never reused for another project.
//! - `is_able_to_delete` is fixed at construction; the manager does not
//!   enforce it, callers must check it before requesting removal.

use crate::ids::{self, ProjectId};
use crate::model::todo::Todo;
use serde::{Deserialize, Serialize};

/// A named, ordered collection of todos.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Stable global id, assigned at construction, immutable thereafter.
    pub id: ProjectId,
    pub name: String,
    /// Governs whether callers may request removal of this project.
    /// A protected default project carries `false` here.
    pub is_able_to_delete: bool,
    todos: Vec<Todo>,
}

impl Project {
    /// Creates a new project with a generated stable id and no todos.
    pub fn new(name: impl Into<String>, is_able_to_delete: bool) -> Self {
        Self::with_id(ids::fresh(), name, is_able_to_delete)
    }

    /// Creates a new project with a caller-provided stable id.
    ///
    /// Used where identity already exists externally and must not be
    /// regenerated, and by tests needing deterministic ids.
    pub fn with_id(id: ProjectId, name: impl Into<String>, is_able_to_delete: bool) -> Self {
        Self {
            id,
            name: name.into(),
            is_able_to_delete,
            todos: Vec::new(),
        }
    }

    /// Renames the project in place.
    pub fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Appends a todo, preserving insertion order.
    pub fn add_todo(&mut self, todo: Todo) {
        self.todos.push(todo);
    }

    /// Removes the todo at `index`, shifting subsequent todos.
    ///
    /// Guarded no-op when `index` is out of bounds.
    pub fn remove_todo(&mut self, index: usize) {
        if index < self.todos.len() {
            self.todos.remove(index);
        }
    }

    /// Returns the live ordered todo sequence.
    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    /// Returns mutable access to the live todo sequence.
    ///
    /// Element mutation is permitted here; structural changes go through
    /// `add_todo`/`remove_todo`.
    pub fn todos_mut(&mut self) -> &mut [Todo] {
        &mut self.todos
    }

    /// Returns the todo at `index`, or `None` out of bounds.
    pub fn todo_mut(&mut self, index: usize) -> Option<&mut Todo> {
        self.todos.get_mut(index)
    }
}
