use crate::model::note::Note;

/// Two-column masonry split of the note list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteColumns<'a> {
    pub left: Vec<&'a Note>,
    pub right: Vec<&'a Note>,
}

/// Even indexes go left, odd indexes go right. Heights are not balanced.
pub fn note_columns(notes: &[Note]) -> NoteColumns<'_> {
    let mut columns = NoteColumns::default();
    for (index, note) in notes.iter().enumerate() {
        if index % 2 == 0 {
            columns.left.push(note);
        } else {
            columns.right.push(note);
        }
    }
    columns
}
