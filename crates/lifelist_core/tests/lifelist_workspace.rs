use lifelist_core::{
    EntityEditor, KeyValueStore, LifeList, MemoryKvStore, NoteColor, NoteDraft, SqliteKvStore,
    TaskDraft, EVENTS_KEY, NOTES_KEY, TASKS_KEY, TODOS_KEY,
};

#[test]
fn features_use_independent_keys() {
    let store = MemoryKvStore::new();
    let mut lists = LifeList::new(&store);

    lists.todos.add("todo").unwrap();
    lists.tasks.create(TaskDraft::new("task")).unwrap();
    lists
        .notes
        .create(NoteDraft {
            title: "note".to_string(),
            content: String::new(),
            color: NoteColor::Lavender.into(),
        })
        .unwrap();
    let mut draft = lists.events.new_draft();
    draft.title = "event".to_string();
    lists.events.create(draft).unwrap();

    assert_eq!(
        store.keys(),
        vec![
            EVENTS_KEY.to_string(),
            NOTES_KEY.to_string(),
            TASKS_KEY.to_string(),
            TODOS_KEY.to_string(),
        ]
    );

    lists.tasks.clear().unwrap();
    assert_eq!(store.get(TASKS_KEY).unwrap(), None);
    assert!(store.get(TODOS_KEY).unwrap().is_some());
}

#[test]
fn lists_survive_restart_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("lifelist.sqlite3");

    {
        let store = SqliteKvStore::open(&path).unwrap();
        let mut lists = LifeList::new(&store);
        lists.todos.add("water plants").unwrap();
        let id = lists.todos.add("pay rent").unwrap().entity().unwrap().id.clone();
        lists.todos.toggle(&id).unwrap();
        lists.tasks.create(TaskDraft::new("taxes")).unwrap();
    }

    let store = SqliteKvStore::open(&path).unwrap();
    let mut lists = LifeList::new(&store);
    let summary = lists.summary().unwrap();
    assert_eq!(summary.todos, 2);
    assert_eq!(summary.active_todos, 1);
    assert_eq!(summary.tasks, 1);
    assert_eq!(summary.active_tasks, 1);
    assert_eq!(summary.notes, 0);
    assert_eq!(summary.events, 0);
    assert_eq!(summary.reminders, 0);

    let titles: Vec<&str> = lists
        .todos
        .todos()
        .unwrap()
        .iter()
        .map(|t| t.title.as_str())
        .collect();
    assert_eq!(titles, vec!["pay rent", "water plants"]);
}
