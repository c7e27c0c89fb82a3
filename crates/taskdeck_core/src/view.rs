//! Derived view state over a manager snapshot.
//!
//! # Responsibility
//! - Compute the cross-project today listing, the selected-project
//!   listing, and the checklist display order.
//! - Stay pure: recomputed fresh per query, no cached derived state.
//!
//! # Invariants
//! - A null or stale selection produces an empty listing, never an error.
//! - Checklist ordering is a stable partition; ties keep insertion order.

use crate::ids::TodoId;
use crate::model::project::Project;
use crate::model::todo::{ChecklistItem, Todo};
use crate::state::ProjectManager;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{Date, OffsetDateTime};

const DUE_DATE_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// One todo paired with its owning project, as listed by the aggregate
/// today view.
///
/// The today view is read-mostly: rows carry no expansion state.
#[derive(Debug, Clone, Copy)]
pub struct TodoEntry<'a> {
    pub todo: &'a Todo,
    pub project: &'a Project,
}

/// One todo row of the selected-project view.
///
/// At most one row is expanded per query, governed by the caller-supplied
/// expanded id (transient UI state, never persisted).
#[derive(Debug, Clone, Copy)]
pub struct TodoPanel<'a> {
    pub todo: &'a Todo,
    pub project: &'a Project,
    pub expanded: bool,
}

/// Returns the current local calendar date.
///
/// Falls back to UTC when the local offset cannot be determined (the
/// offset lookup can fail in multi-threaded processes on some platforms).
pub fn local_today() -> Date {
    OffsetDateTime::now_local()
        .unwrap_or_else(|_| OffsetDateTime::now_utc())
        .date()
}

/// Lists every todo due on `today` across all projects.
///
/// Order is stable by (project order, todo order); no further sort is
/// applied. Todos whose due date does not parse as a calendar date are
/// skipped.
pub fn today_entries(manager: &ProjectManager, today: Date) -> Vec<TodoEntry<'_>> {
    manager
        .projects()
        .iter()
        .flat_map(|project| {
            project
                .todos()
                .iter()
                .filter(|todo| parse_due_date(&todo.due_date) == Some(today))
                .map(move |todo| TodoEntry { todo, project })
        })
        .collect()
}

/// Lists the selected project's todos in stored order, unfiltered.
///
/// The row whose todo id equals `expanded` is marked expanded; all others
/// are collapsed. A null or stale selection yields an empty listing.
pub fn project_entries(manager: &ProjectManager, expanded: Option<TodoId>) -> Vec<TodoPanel<'_>> {
    let Some(project) = manager.selected_project() else {
        return Vec::new();
    };

    project
        .todos()
        .iter()
        .map(|todo| TodoPanel {
            todo,
            project,
            expanded: Some(todo.id) == expanded,
        })
        .collect()
}

/// Returns the checklist in display order: not-done items first, done
/// items last, insertion order preserved within each group.
///
/// Each entry carries the item's ORIGINAL index so index-based toggle and
/// remove operations still target the right item after reordering.
pub fn checklist_display_order(todo: &Todo) -> Vec<(usize, &ChecklistItem)> {
    let mut ordered: Vec<(usize, &ChecklistItem)> = todo.checklist.iter().enumerate().collect();
    // Stable sort: a partition that never reorders ties.
    ordered.sort_by_key(|(_, item)| item.done);
    ordered
}

fn parse_due_date(raw: &str) -> Option<Date> {
    Date::parse(raw, DUE_DATE_FORMAT).ok()
}

#[cfg(test)]
mod tests {
    use super::parse_due_date;
    use time::macros::date;

    #[test]
    fn parse_due_date_accepts_iso_calendar_dates() {
        assert_eq!(parse_due_date("2024-01-31"), Some(date!(2024 - 01 - 31)));
    }

    #[test]
    fn parse_due_date_rejects_malformed_input() {
        assert_eq!(parse_due_date(""), None);
        assert_eq!(parse_due_date("31/01/2024"), None);
        assert_eq!(parse_due_date("2024-13-01"), None);
    }
}
