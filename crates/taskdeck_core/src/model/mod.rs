//! Domain model for the task tracker.
//!
//! # Responsibility
//! - Define the canonical Project/Todo data structures used by core logic.
//! - Keep entities permissive: field validation belongs to collaborators.
//!
//! # Invariants
//! - Every entity is identified by a stable id assigned at construction.
//! - A todo is owned by exactly one project; removal is immediate and total
//!   (no tombstones).

pub mod project;
pub mod todo;
