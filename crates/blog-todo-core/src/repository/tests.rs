//! Repository Integration Tests
//!
//! Tests for JsonTaskRepository over the in-memory store.

#[cfg(test)]
mod tests {
    use crate::domain::Task;
    use crate::repository::{JsonTaskRepository, KeyValueStore, MemoryStore, TaskRepository};

    const KEY: &str = "todo-tasks";

    fn setup_repo(store: &MemoryStore) -> JsonTaskRepository<MemoryStore> {
        JsonTaskRepository::new(store.clone(), KEY)
    }

    #[test]
    fn test_load_missing_key_is_empty() {
        let store = MemoryStore::new();
        let repo = setup_repo(&store);
        assert!(repo.load().is_empty());
        assert!(store.raw(KEY).is_none());
    }

    #[test]
    fn test_load_existing_tasks() {
        let store = MemoryStore::with_entry(
            KEY,
            r#"[{"id":"1","title":"A","completed":false},{"id":"2","title":"B","completed":true}]"#,
        );
        let tasks = setup_repo(&store).load();
        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[0].title, "A");
        assert!(tasks[1].completed);
    }

    #[test]
    fn test_corrupt_data_loads_empty() {
        let store = MemoryStore::with_entry(KEY, "{not an array");
        let repo = setup_repo(&store);
        assert!(repo.try_load().is_err());
        assert!(repo.load().is_empty());
    }

    #[test]
    fn test_blank_value_loads_empty() {
        let store = MemoryStore::with_entry(KEY, "");
        assert!(setup_repo(&store).try_load().unwrap().is_empty());
    }

    #[test]
    fn test_read_failure_loads_empty() {
        let store = MemoryStore::with_entry(KEY, r#"[{"id":"1","title":"A","completed":false}]"#);
        store.set_fail_reads(true);
        assert!(setup_repo(&store).load().is_empty());
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let store = MemoryStore::new();
        let repo = setup_repo(&store);

        let mut done = Task::new("2", "Walk the dog");
        done.toggle();
        let tasks = vec![Task::new("1", "Buy milk"), done, Task::new("3", "Call mom")];

        repo.save(&tasks).expect("Save failed");
        assert_eq!(repo.load(), tasks);

        // a fresh repository over the same storage sees the same sequence
        let reopened = JsonTaskRepository::new(store.clone(), KEY);
        assert_eq!(reopened.load(), tasks);
    }

    #[test]
    fn test_save_overwrites_previous_value() {
        let store = MemoryStore::new();
        let repo = setup_repo(&store);

        repo.save(&[Task::new("1", "A"), Task::new("2", "B")]).unwrap();
        repo.save(&[Task::new("2", "B")]).unwrap();

        assert_eq!(store.raw(KEY).unwrap(), r#"[{"id":"2","title":"B","completed":false}]"#);
    }

    #[test]
    fn test_save_failure_is_reported() {
        let store = MemoryStore::new();
        store.set_fail_writes(true);
        let repo = setup_repo(&store);

        assert!(repo.save(&[Task::new("1", "A")]).is_err());
        assert!(store.get(KEY).unwrap().is_none());
    }

    #[test]
    fn test_keys_are_independent() {
        let store = MemoryStore::new();
        let first = JsonTaskRepository::new(store.clone(), "first");
        let second = JsonTaskRepository::new(store.clone(), "second");

        first.save(&[Task::new("1", "A")]).unwrap();
        assert_eq!(first.load().len(), 1);
        assert!(second.load().is_empty());
    }
}
