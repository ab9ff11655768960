//! Manager over the file repository: what survives a "restart" (dropping the
//! manager and constructing a fresh one over the same file).

use dolist::model::{FilterMode, Item};
use dolist::repository::fs::FileRepository;
use dolist::ListManager;
use tempfile::TempDir;

fn setup() -> (TempDir, std::path::PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("items.json");
    (dir, path)
}

#[test]
fn test_restart_restores_unfiltered_set_with_completion_states() {
    let (_dir, path) = setup();

    let groceries = Item::new("buy groceries");
    let laundry = Item::new("do laundry");
    let laundry_id = laundry.id;

    {
        let mut mgr = ListManager::new(FileRepository::new(&path)).unwrap();
        mgr.add(groceries.clone());
        mgr.add(laundry.clone());
        mgr.toggle_completion(laundry_id);
        // Narrow the view before "shutdown"; the file must still hold both.
        mgr.set_filter(FilterMode::Done);
        assert_eq!(mgr.visible_items().len(), 1);
    }

    let mgr = ListManager::new(FileRepository::new(&path)).unwrap();
    assert_eq!(mgr.filter(), FilterMode::All);
    assert_eq!(mgr.visible_items().len(), 2);
    assert_eq!(mgr.visible_items()[0].title, "buy groceries");
    assert!(!mgr.visible_items()[0].is_done);
    assert_eq!(mgr.visible_items()[1].title, "do laundry");
    assert!(mgr.visible_items()[1].is_done);
}

#[test]
fn test_filter_switching_never_loses_data() {
    let (_dir, path) = setup();

    {
        let mut mgr = ListManager::new(FileRepository::new(&path)).unwrap();
        mgr.add(Item::new("one"));
        mgr.add(Item::new("two"));
        mgr.set_filter(FilterMode::Done);
        mgr.set_filter(FilterMode::NotDone);
        mgr.set_filter(FilterMode::Done);
    }

    let mgr = ListManager::new(FileRepository::new(&path)).unwrap();
    assert_eq!(mgr.visible_items().len(), 2);
}

#[test]
fn test_remove_is_durable() {
    let (_dir, path) = setup();

    let doomed = Item::new("doomed");
    let doomed_id = doomed.id;

    {
        let mut mgr = ListManager::new(FileRepository::new(&path)).unwrap();
        mgr.add(doomed);
        mgr.add(Item::new("kept"));
        mgr.remove(doomed_id);
    }

    let mgr = ListManager::new(FileRepository::new(&path)).unwrap();
    assert_eq!(mgr.visible_items().len(), 1);
    assert_eq!(mgr.visible_items()[0].title, "kept");
}

#[test]
fn test_fresh_file_starts_empty_and_untouched() {
    let (_dir, path) = setup();

    let mgr = ListManager::new(FileRepository::new(&path)).unwrap();
    assert!(mgr.visible_items().is_empty());
    // Construction is not a mutation, so nothing was written.
    assert!(!path.exists());
}
