use lifelist_core::{
    EntityId, KeyValueStore, MemoryKvStore, SaveOutcome, Todo, TodoService, ValidationError,
    TODOS_KEY,
};

#[test]
fn add_prepends_and_persists() {
    let store = MemoryKvStore::new();
    let mut todos = TodoService::new(&store);

    todos.add("first").unwrap();
    let second = todos.add("  second  ").unwrap();
    let second = second.entity().unwrap().clone();
    assert_eq!(second.title, "second");
    assert!(!second.completed);

    let titles: Vec<&str> = todos.todos().unwrap().iter().map(|t| t.title.as_str()).collect();
    assert_eq!(titles, vec!["second", "first"]);

    let mut reloaded = TodoService::new(&store);
    assert_eq!(reloaded.todos().unwrap(), todos.todos().unwrap());
}

#[test]
fn blank_title_changes_nothing() {
    let store = MemoryKvStore::new();
    let mut todos = TodoService::new(&store);

    let outcome = todos.add("   ").unwrap();
    assert_eq!(outcome, SaveOutcome::Rejected(ValidationError::EmptyTitle));
    assert!(todos.todos().unwrap().is_empty());
    assert_eq!(store.get(TODOS_KEY).unwrap(), None);
}

#[test]
fn toggle_delete_and_clear_completed() {
    let store = MemoryKvStore::new();
    let mut todos = TodoService::new(&store);
    let a = todos.add("a").unwrap().entity().unwrap().id.clone();
    let b = todos.add("b").unwrap().entity().unwrap().id.clone();
    let c = todos.add("c").unwrap().entity().unwrap().id.clone();

    assert!(todos.toggle(&a).unwrap().unwrap().completed);
    assert!(todos.toggle(&c).unwrap().unwrap().completed);
    let counts = todos.counts().unwrap();
    assert_eq!((counts.active, counts.completed), (1, 2));

    assert_eq!(todos.clear_completed().unwrap(), 2);
    let remaining: Vec<&EntityId> = todos.todos().unwrap().iter().map(|t| &t.id).collect();
    assert_eq!(remaining, vec![&b]);

    assert!(todos.delete(&b).unwrap());
    assert!(!todos.delete(&b).unwrap());
    assert!(todos.toggle(&b).unwrap().is_none());
}

#[test]
fn reads_lists_written_with_timestamp_ids() {
    let store = MemoryKvStore::new();
    store
        .set(
            TODOS_KEY,
            r#"[{"id":"1712345678901","title":"legacy","completed":true,"createdAt":1712345678901}]"#,
        )
        .unwrap();

    let mut todos = TodoService::new(&store);
    let loaded = todos.todos().unwrap();
    assert_eq!(
        loaded,
        &[Todo {
            id: EntityId::from("1712345678901"),
            title: "legacy".to_string(),
            completed: true,
            created_at: 1_712_345_678_901,
        }]
    );
}

#[test]
fn clear_removes_key() {
    let store = MemoryKvStore::new();
    let mut todos = TodoService::new(&store);
    todos.add("x").unwrap();

    todos.clear().unwrap();
    assert_eq!(store.get(TODOS_KEY).unwrap(), None);
    assert!(todos.todos().unwrap().is_empty());
}
