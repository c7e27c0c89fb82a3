use taskdeck_core::codec;
use taskdeck_core::{MemoryStateStore, Priority, Project, ProjectManager, StateStore, Todo};
use uuid::Uuid;

fn sample_manager() -> ProjectManager {
    let mut manager = ProjectManager::new();

    let mut general = Project::new("General", false);
    let mut chores = Todo::new("Laundry", "whites only", "2026-03-07", Priority::Low);
    chores.add_checklist_item("sort");
    chores.add_checklist_item("wash");
    chores.toggle_checklist_item(0);
    general.add_todo(chores);

    let mut work = Project::new("Work", true);
    let mut review = Todo::new("Review PR", "", "2026-03-08", Priority::High);
    review.toggle_complete();
    work.add_todo(review);
    work.add_todo(Todo::new("Standup notes", "", "2026-03-09", Priority::Medium));

    manager.add_project(general);
    manager.add_project(work);
    manager
}

#[test]
fn save_then_load_preserves_every_field_and_id() {
    let mut store = MemoryStateStore::new();
    let mut manager = sample_manager();
    let work_id = manager.projects()[1].id;
    manager.select_project(work_id);

    manager.save(&mut store).unwrap();
    let loaded = ProjectManager::load(&store).unwrap();

    assert_eq!(loaded, manager);
    assert_eq!(loaded.selected_project_id(), Some(work_id));
    // Spot-check nested identity survives the round trip.
    assert_eq!(
        loaded.projects()[0].todos()[0].id,
        manager.projects()[0].todos()[0].id
    );
    assert_eq!(loaded.projects()[0].todos()[0].checklist.len(), 2);
    assert!(loaded.projects()[0].todos()[0].checklist[0].done);
}

#[test]
fn save_load_is_idempotent() {
    let mut store = MemoryStateStore::new();
    let manager = sample_manager();

    manager.save(&mut store).unwrap();
    let once = ProjectManager::load(&store).unwrap();

    once.save(&mut store).unwrap();
    let twice = ProjectManager::load(&store).unwrap();

    assert_eq!(once, twice);
}

#[test]
fn load_from_empty_store_yields_empty_manager() {
    let store = MemoryStateStore::new();

    let loaded = ProjectManager::load(&store).unwrap();

    assert!(loaded.projects().is_empty());
    assert_eq!(loaded.selected_project_id(), None);
}

#[test]
fn load_from_corrupt_blob_fails_safe_to_empty_manager() {
    let mut store = MemoryStateStore::new();
    store.set(codec::PROJECTS_KEY, "{definitely not json").unwrap();
    store.set(codec::SELECTED_PROJECT_KEY, "garbage").unwrap();

    let loaded = ProjectManager::load(&store).unwrap();

    assert!(loaded.projects().is_empty());
    assert_eq!(loaded.selected_project_id(), None);
}

#[test]
fn deselected_state_round_trips_as_deselected() {
    let mut store = MemoryStateStore::new();
    let mut manager = sample_manager();
    manager.clear_selection();

    manager.save(&mut store).unwrap();
    let loaded = ProjectManager::load(&store).unwrap();

    assert_eq!(loaded.selected_project_id(), None);
    assert_eq!(loaded.projects().len(), 2);
}

#[test]
fn saving_a_deselected_state_clears_a_previously_saved_selection() {
    let mut store = MemoryStateStore::new();
    let mut manager = sample_manager();

    manager.save(&mut store).unwrap();
    assert!(store.get(codec::SELECTED_PROJECT_KEY).unwrap().is_some());

    manager.clear_selection();
    manager.save(&mut store).unwrap();

    assert_eq!(store.get(codec::SELECTED_PROJECT_KEY).unwrap(), None);
}

#[test]
fn stale_saved_selection_falls_back_to_first_project() {
    let mut store = MemoryStateStore::new();
    let manager = sample_manager();
    manager.save(&mut store).unwrap();

    // Overwrite the saved selection with an id no project carries.
    store
        .set(codec::SELECTED_PROJECT_KEY, &Uuid::new_v4().to_string())
        .unwrap();

    let loaded = ProjectManager::load(&store).unwrap();
    assert_eq!(
        loaded.selected_project_id(),
        Some(loaded.projects()[0].id)
    );
}

#[test]
fn selected_id_is_stored_as_the_plain_id_string() {
    let mut store = MemoryStateStore::new();
    let manager = sample_manager();
    manager.save(&mut store).unwrap();

    let raw = store
        .get(codec::SELECTED_PROJECT_KEY)
        .unwrap()
        .expect("selection should be persisted");
    assert_eq!(
        raw,
        manager.selected_project_id().unwrap().to_string()
    );
}
