//! Stable identifier generation for domain entities.
//!
//! # Responsibility
//! - Provide process-unique identifiers for projects and todos.
//!
//! # Invariants
//! - Identifiers are never reused for another entity.

use uuid::Uuid;

/// Stable identifier for a project.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type ProjectId = Uuid;

/// Stable identifier for a todo.
pub type TodoId = Uuid;

/// Generates a fresh collision-resistant identifier.
///
/// Random 128-bit ids need no coordination between call sites. Tests that
/// need deterministic identity use the entity `with_id` constructors.
pub fn fresh() -> Uuid {
    Uuid::new_v4()
}
