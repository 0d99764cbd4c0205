use lifelist_core::{
    EditorOutcome, EntityEditor, EntityId, KeyValueStore, MemoryKvStore, Note, NoteColor,
    NoteDraft, NoteService, SaveOutcome, NOTES_KEY,
};

fn note_draft(title: &str, color: NoteColor) -> NoteDraft {
    NoteDraft {
        title: title.to_string(),
        content: String::new(),
        color: color.into(),
    }
}

fn created(outcome: SaveOutcome<Note>) -> Note {
    match outcome {
        SaveOutcome::Created(note) => note,
        other => panic!("expected created note, got {other:?}"),
    }
}

#[test]
fn create_trims_and_prepends() {
    let store = MemoryKvStore::new();
    let mut notes = NoteService::new(&store);

    let first = created(
        notes
            .create(NoteDraft {
                title: " groceries ".to_string(),
                content: "\n eggs \n".to_string(),
                color: NoteColor::Yellow.into(),
            })
            .unwrap(),
    );
    assert_eq!(first.title, "groceries");
    assert_eq!(first.content, "eggs");
    assert_eq!(first.created_at, first.updated_at);

    let second = created(notes.create(note_draft("ideas", NoteColor::Mint)).unwrap());
    let ids: Vec<&EntityId> = notes.notes().unwrap().iter().map(|n| &n.id).collect();
    assert_eq!(ids, vec![&second.id, &first.id]);
}

#[test]
fn update_replaces_fields_and_bumps_updated_at() {
    let store = MemoryKvStore::new();
    let mut notes = NoteService::new(&store);
    let note = created(notes.create(note_draft("draft", NoteColor::Peach)).unwrap());
    let bystander = created(notes.create(note_draft("keep", NoteColor::Mint)).unwrap());

    let outcome = notes
        .apply(EditorOutcome::Save {
            editing: Some(note.id.clone()),
            draft: NoteDraft {
                title: "final".to_string(),
                content: "body".to_string(),
                color: NoteColor::Coral.into(),
            },
        })
        .unwrap();
    assert!(outcome.closes_editor(Some(&note.id)));

    let all = notes.notes().unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(all[0], bystander);
    let stored = &all[1];
    assert_eq!(stored.id, note.id);
    assert_eq!(stored.title, "final");
    assert_eq!(stored.content, "body");
    assert_eq!(stored.color, NoteColor::Coral);
    assert_eq!(stored.created_at, note.created_at);
    assert!(stored.updated_at >= note.updated_at);
}

#[test]
fn colors_persist_as_hex() {
    let store = MemoryKvStore::new();
    let mut notes = NoteService::new(&store);
    notes.create(note_draft("sky", NoteColor::SkyBlue)).unwrap();

    let raw = store.get(NOTES_KEY).unwrap().unwrap();
    let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(json[0]["color"], "#9BF6FF");
    assert!(json[0].get("updatedAt").is_some());
}

#[test]
fn columns_alternate_by_index() {
    let store = MemoryKvStore::new();
    let mut notes = NoteService::new(&store);
    for title in ["n3", "n2", "n1", "n0"] {
        notes.create(note_draft(title, NoteColor::Pink)).unwrap();
    }

    let columns = notes.columns().unwrap();
    let left: Vec<&str> = columns.left.iter().map(|n| n.title.as_str()).collect();
    let right: Vec<&str> = columns.right.iter().map(|n| n.title.as_str()).collect();
    assert_eq!(left, vec!["n0", "n2"]);
    assert_eq!(right, vec!["n1", "n3"]);
}

#[test]
fn blank_draft_has_palette_color() {
    let draft = NoteDraft::blank();
    assert!(draft.title.is_empty());
    assert!(draft.color.palette().is_some());
}
