//! Persistence codec for the tracker state.
//!
//! # Responsibility
//! - Serialize projects (with nested todos and checklists) to a versioned
//!   JSON blob and reconstruct them field-for-field.
//! - Keep the storage key layout in one place.
//!
//! # Invariants
//! - Identity is preserved: decode never regenerates ids.
//! - Decode fails safe: missing, corrupt, or newer-versioned blobs yield
//!   the empty state instead of an error, so a session can always start.

use crate::ids::ProjectId;
use crate::model::project::Project;
use log::warn;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Storage key holding the versioned projects blob.
pub const PROJECTS_KEY: &str = "projects";
/// Storage key holding the selected project's id as a plain string.
pub const SELECTED_PROJECT_KEY: &str = "selectedProjectId";

/// Version of the persisted projects blob written by this binary.
pub const SCHEMA_VERSION: u32 = 1;

#[derive(Serialize)]
struct PersistedProjectsRef<'a> {
    version: u32,
    projects: &'a [Project],
}

#[derive(Deserialize)]
struct PersistedProjects {
    version: u32,
    projects: Vec<Project>,
}

/// Encodes projects into the versioned JSON blob stored under
/// [`PROJECTS_KEY`].
pub fn encode_projects(projects: &[Project]) -> Result<String, serde_json::Error> {
    serde_json::to_string(&PersistedProjectsRef {
        version: SCHEMA_VERSION,
        projects,
    })
}

/// Decodes the projects blob, tolerating absence and corruption.
///
/// Returns the empty project list when `raw` is `None`, fails to parse,
/// or carries an unknown schema version. Losing prior data is preferable
/// to a session that cannot start.
pub fn decode_projects(raw: Option<&str>) -> Vec<Project> {
    let Some(raw) = raw else {
        return Vec::new();
    };

    match serde_json::from_str::<PersistedProjects>(raw) {
        Ok(persisted) if persisted.version == SCHEMA_VERSION => persisted.projects,
        Ok(persisted) => {
            warn!(
                "event=state_decode module=codec status=fallback reason=unknown_schema_version version={}",
                persisted.version
            );
            Vec::new()
        }
        Err(err) => {
            warn!("event=state_decode module=codec status=fallback reason=parse_error error={err}");
            Vec::new()
        }
    }
}

/// Decodes the selected project id stored under [`SELECTED_PROJECT_KEY`].
///
/// Absent or unparseable values read as no selection.
pub fn decode_selected_id(raw: Option<&str>) -> Option<ProjectId> {
    let raw = raw?.trim();
    match Uuid::parse_str(raw) {
        Ok(id) => Some(id),
        Err(_) => {
            warn!("event=state_decode module=codec status=fallback reason=bad_selected_id");
            None
        }
    }
}
