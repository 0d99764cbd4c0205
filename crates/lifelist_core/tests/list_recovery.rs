use lifelist_core::{
    EntityEditor, EntityId, EventService, KeyValueStore, MemoryKvStore, NoteColor, NoteDraft,
    NoteService, SaveOutcome, StoreError, TaskDraft, TaskService, EVENTS_KEY, NOTES_KEY,
    TASKS_KEY,
};
use serde_json::{json, Value};

fn stored(store: &MemoryKvStore, key: &str) -> Value {
    serde_json::from_str(&store.get(key).unwrap().unwrap()).unwrap()
}

#[test]
fn notes_keep_unreadable_entries_and_exact_colors() {
    let store = MemoryKvStore::new();
    let broken = json!({"id": "n3", "title": "no content", "color": "#FFD6A5", "createdAt": 3, "updatedAt": 3});
    let payload = json!([
        {"id": "n1", "title": "coral", "content": "", "color": "#ffadad", "createdAt": 1, "updatedAt": 1},
        {"id": "n2", "title": "white", "content": "", "color": "#FFFFFF", "createdAt": 2, "updatedAt": 2},
        broken.clone(),
    ]);
    store.set(NOTES_KEY, &payload.to_string()).unwrap();

    let mut notes = NoteService::new(&store);
    let loaded = notes.notes().unwrap();
    assert_eq!(loaded.len(), 2);
    assert_eq!(loaded[0].color, NoteColor::Coral);
    assert_eq!(loaded[1].color.palette(), None);

    let outcome = notes
        .create(NoteDraft {
            title: "fresh".to_string(),
            content: String::new(),
            color: NoteColor::Mint.into(),
        })
        .unwrap();
    assert!(outcome.is_written());

    let json = stored(&store, NOTES_KEY);
    let ids: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|note| note["id"].as_str().unwrap())
        .collect();
    assert_eq!(&ids[1..], &["n1", "n2", "n3"]);
    assert_eq!(json[1]["color"], "#ffadad");
    assert_eq!(json[2]["color"], "#FFFFFF");
    assert_eq!(json[3], broken);
}

#[test]
fn events_keep_time_text_and_undecodable_entries() {
    let store = MemoryKvStore::new();
    let broken = json!({"id": "e3", "title": "bad date", "description": "", "date": "someday", "time": "10:00", "category": "work", "color": "#007AFF", "reminderSet": false, "createdAt": 3});
    let payload = json!([
        {"id": "e1", "title": "late", "description": "", "date": "2026-06-12", "time": "19:30:15", "category": "social", "color": "#FF2D55", "reminderSet": false, "createdAt": 1},
        {"id": "e2", "title": "early", "description": "", "date": "2026-06-12", "time": "9:30 AM", "category": "work", "color": "#007AFF", "reminderSet": true, "createdAt": 2},
        broken.clone(),
    ]);
    store.set(EVENTS_KEY, &payload.to_string()).unwrap();

    let mut events = EventService::new(&store);
    assert_eq!(events.events().unwrap().len(), 2);

    let timeline = events
        .timeline(
            chrono::NaiveDate::from_ymd_opt(2026, 6, 12)
                .unwrap()
                .and_hms_opt(8, 0, 0)
                .unwrap(),
        )
        .unwrap();
    let order: Vec<&str> = timeline.display().map(|e| e.id.as_str()).collect();
    assert_eq!(order, vec!["e2", "e1"]);

    events.toggle_reminder(&EntityId::from("e1")).unwrap();

    let json = stored(&store, EVENTS_KEY);
    assert_eq!(json.as_array().unwrap().len(), 3);
    assert_eq!(json[0]["time"], "19:30:15");
    assert_eq!(json[0]["reminderSet"], true);
    assert_eq!(json[1]["time"], "9:30 AM");
    assert_eq!(json[2], broken);
}

#[test]
fn non_list_payload_is_never_overwritten() {
    let store = MemoryKvStore::new();
    store.set(TASKS_KEY, r#"{"tasks":[]}"#).unwrap();

    let mut tasks = TaskService::new(&store);
    assert!(tasks.tasks().unwrap().is_empty());

    let err = tasks.create(TaskDraft::new("write report")).unwrap_err();
    assert!(matches!(err, StoreError::Corrupt { .. }), "{err}");
    assert_eq!(
        store.get(TASKS_KEY).unwrap().as_deref(),
        Some(r#"{"tasks":[]}"#)
    );

    tasks.clear().unwrap();
    match tasks.create(TaskDraft::new("write report")).unwrap() {
        SaveOutcome::Created(task) => assert_eq!(task.title, "write report"),
        other => panic!("expected created task, got {other:?}"),
    }
    assert_eq!(stored(&store, TASKS_KEY).as_array().unwrap().len(), 1);
}
