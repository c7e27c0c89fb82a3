//! Tracker state: the project collection and the current selection.
//!
//! # Responsibility
//! - Own all projects for a session and track which one is selected.
//! - Persist and restore full state through the injected storage port.
//!
//! # Invariants
//! - While projects exist, `selected_project_id` references a present
//!   project, except after an explicit `clear_selection` (the aggregate
//!   today view deselects on purpose).
//! - Lookups by stale id degrade to no-ops or `None`, never errors.

use crate::codec;
use crate::ids::ProjectId;
use crate::model::project::Project;
use crate::store::{StateStore, StoreResult};
use log::info;

/// Owner of all projects for one interactive session.
///
/// Constructed once at session start (empty, no selection), then mutated
/// by every subsequent operation. Persistence goes through whatever
/// [`StateStore`] the caller injects, so the manager itself stays
/// storage-agnostic.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ProjectManager {
    projects: Vec<Project>,
    selected_project_id: Option<ProjectId>,
}

impl ProjectManager {
    /// Creates an empty manager with no selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a project; selects it when nothing is selected yet.
    ///
    /// The first project ever added is therefore always selected.
    pub fn add_project(&mut self, project: Project) {
        if self.selected_project_id.is_none() {
            self.selected_project_id = Some(project.id);
        }
        self.projects.push(project);
    }

    /// Removes the project with `id`, dropping all its todos; no-op when
    /// absent.
    ///
    /// Removing the selected project reassigns selection to the first
    /// remaining project, or `None` when none remain. Deletion permission
    /// (`is_able_to_delete`) is the caller's check, not enforced here.
    pub fn remove_project(&mut self, id: ProjectId) {
        self.projects.retain(|project| project.id != id);
        if self.selected_project_id == Some(id) {
            self.selected_project_id = self.projects.first().map(|project| project.id);
        }
    }

    /// Selects the project with `id` if present; otherwise leaves the
    /// selection unchanged.
    pub fn select_project(&mut self, id: ProjectId) {
        if self.project(id).is_some() {
            self.selected_project_id = Some(id);
        }
    }

    /// Explicitly deselects, e.g. when switching to the aggregate today
    /// view.
    pub fn clear_selection(&mut self) {
        self.selected_project_id = None;
    }

    /// Returns the currently selected project's id, if any.
    pub fn selected_project_id(&self) -> Option<ProjectId> {
        self.selected_project_id
    }

    /// Returns the selected project, or `None` when selection is null or
    /// stale.
    pub fn selected_project(&self) -> Option<&Project> {
        self.project(self.selected_project_id?)
    }

    /// Mutable variant of [`selected_project`](Self::selected_project).
    pub fn selected_project_mut(&mut self) -> Option<&mut Project> {
        let id = self.selected_project_id?;
        self.project_mut(id)
    }

    /// Looks up a project by id.
    pub fn project(&self, id: ProjectId) -> Option<&Project> {
        self.projects.iter().find(|project| project.id == id)
    }

    /// Looks up a project by id for mutation.
    pub fn project_mut(&mut self, id: ProjectId) -> Option<&mut Project> {
        self.projects.iter_mut().find(|project| project.id == id)
    }

    /// Returns all projects in stored order.
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    /// Serializes full state into `store`.
    ///
    /// Writes the versioned projects blob and the selected id as a plain
    /// string; an empty selection removes the key instead of writing a
    /// sentinel value.
    pub fn save<S: StateStore>(&self, store: &mut S) -> StoreResult<()> {
        let blob = codec::encode_projects(&self.projects)?;
        store.set(codec::PROJECTS_KEY, &blob)?;
        match self.selected_project_id {
            Some(id) => store.set(codec::SELECTED_PROJECT_KEY, &id.to_string())?,
            None => store.remove(codec::SELECTED_PROJECT_KEY)?,
        }
        info!(
            "event=state_save module=state status=ok projects={} selected={}",
            self.projects.len(),
            self.selected_project_id.is_some()
        );
        Ok(())
    }

    /// Reconstructs full state from `store`.
    ///
    /// Missing or corrupt state yields an empty manager (fail safe). Ids
    /// round-trip verbatim. A restored selection that no longer matches
    /// any project falls back to the first project, mirroring
    /// [`remove_project`](Self::remove_project); an absent selection is
    /// restored as-is.
    pub fn load<S: StateStore>(store: &S) -> StoreResult<Self> {
        let raw_projects = store.get(codec::PROJECTS_KEY)?;
        let raw_selected = store.get(codec::SELECTED_PROJECT_KEY)?;

        let projects = codec::decode_projects(raw_projects.as_deref());
        let selected = codec::decode_selected_id(raw_selected.as_deref());

        let mut manager = Self {
            projects,
            selected_project_id: None,
        };
        manager.selected_project_id = match selected {
            Some(id) if manager.project(id).is_some() => Some(id),
            Some(_) => manager.projects.first().map(|project| project.id),
            None => None,
        };

        info!(
            "event=state_load module=state status=ok projects={} selected={}",
            manager.projects.len(),
            manager.selected_project_id.is_some()
        );
        Ok(manager)
    }
}
