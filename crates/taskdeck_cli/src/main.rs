//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `taskdeck_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use taskdeck_core::{MemoryStateStore, ProjectManager};

fn main() {
    println!("taskdeck_core version={}", taskdeck_core::core_version());

    // Exercise the persistence port end to end against the in-memory store.
    let mut store = MemoryStateStore::new();
    let manager = ProjectManager::new();
    let probe = match manager.save(&mut store).and_then(|()| {
        ProjectManager::load(&store).map(|loaded| loaded == manager)
    }) {
        Ok(true) => "ok",
        Ok(false) => "mismatch",
        Err(_) => "error",
    };
    println!("taskdeck_core store_probe={probe}");
}
