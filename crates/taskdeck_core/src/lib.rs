//! Core domain logic for Taskdeck.
//! This crate is the single source of truth for task-tracker invariants.

pub mod codec;
pub mod db;
pub mod ids;
pub mod logging;
pub mod model;
pub mod state;
pub mod store;
pub mod view;

pub use ids::{ProjectId, TodoId};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::project::Project;
pub use model::todo::{ChecklistItem, Priority, Todo};
pub use state::ProjectManager;
pub use store::{MemoryStateStore, SqliteStateStore, StateStore, StoreError, StoreResult};
pub use view::{
    checklist_display_order, local_today, project_entries, today_entries, TodoEntry, TodoPanel,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
