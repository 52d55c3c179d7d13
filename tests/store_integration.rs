use std::fs;

use flowstate::model::Task;
use flowstate::store::files::FileStorage;
use flowstate::store::tabs::TaskStore;
use flowstate::store::{LoadStatus, Storage, TabMap};
use tempfile::tempdir;

#[test]
fn scenario_save_then_reload() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("tasks.txt");
    let storage = FileStorage::new(&path);

    let mut tabs = TabMap::new();
    tabs.insert(
        "Work".into(),
        vec![Task::new("Ship v1", "", Some("12/25/2025"), "High")],
    );
    storage.save_all(&tabs).unwrap();
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "Work|Ship v1,,12/25/2025,High,false\n"
    );

    let loaded = storage.load_all().unwrap();
    assert_eq!(loaded.status, LoadStatus::Loaded);
    assert_eq!(loaded.tabs, tabs);
}

#[test]
fn full_session_round_trip() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("tasks.txt");

    let mut store = TaskStore::open(FileStorage::new(&path)).unwrap();
    assert_eq!(store.status(), &LoadStatus::Missing);

    store
        .add_task("Personal", Task::new("Dentist", "Dr. Lee", Some("04/02/2026"), "Medium"))
        .unwrap();
    store.add_task("Work", Task::new("Standup notes", "", None, "Low")).unwrap();
    store.add_task("Work", Task::new("", "untitled", Some("NULL"), "Critical")).unwrap();
    store.set_completed("Work", 1, true).unwrap();
    store.add_task("Reading", Task::new("Dune", "", None, "Low")).unwrap();
    store.save().unwrap();

    let reopened = TaskStore::open(FileStorage::new(&path)).unwrap();
    assert_eq!(reopened.tabs(), store.tabs());

    let untitled = reopened.task("Work", 2).unwrap();
    assert_eq!(untitled.title(), "New Task");
    assert_eq!(untitled.due_date(), None);
    assert_eq!(untitled.priority().as_str(), "Critical");
    assert!(reopened.task("Work", 1).unwrap().is_completed());
}

#[test]
fn comma_in_text_drops_row_on_reload() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("tasks.txt");

    let mut store = TaskStore::open(FileStorage::new(&path)).unwrap();
    store.add_task("Work", Task::new("Plan, then build", "", None, "High")).unwrap();
    store.add_task("Work", Task::new("Clean row", "", None, "High")).unwrap();
    store.save().unwrap();

    let reopened = TaskStore::open(FileStorage::new(&path)).unwrap();
    let titles: Vec<&str> = reopened
        .tasks("Work")
        .unwrap()
        .iter()
        .map(Task::title)
        .collect();
    assert_eq!(titles, ["Clean row"]);
}
