//! Sticky-note record, palette and editor draft.
//!
//! # Invariants
//! - New notes get a palette color; a stored color outside the palette is
//!   kept as written.
//! - `updated_at` moves forward on every edit; `created_at` never changes.

use super::validation::{normalize_title, ValidationError};
use super::{EntityId, EpochMillis, Identified};
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Fixed note palette offered by the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NoteColor {
    Peach,
    Mint,
    SkyBlue,
    Lavender,
    Pink,
    Yellow,
    LightBlue,
    Coral,
}

impl NoteColor {
    /// Palette in picker order.
    pub const PALETTE: [NoteColor; 8] = [
        NoteColor::Peach,
        NoteColor::Mint,
        NoteColor::SkyBlue,
        NoteColor::Lavender,
        NoteColor::Pink,
        NoteColor::Yellow,
        NoteColor::LightBlue,
        NoteColor::Coral,
    ];

    pub fn hex(self) -> &'static str {
        match self {
            Self::Peach => "#FFD6A5",
            Self::Mint => "#CAFFBF",
            Self::SkyBlue => "#9BF6FF",
            Self::Lavender => "#BDB2FF",
            Self::Pink => "#FFC6FF",
            Self::Yellow => "#FFFFB5",
            Self::LightBlue => "#A0C4FF",
            Self::Coral => "#FFADAD",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Peach => "Peach",
            Self::Mint => "Mint",
            Self::SkyBlue => "Sky Blue",
            Self::Lavender => "Lavender",
            Self::Pink => "Pink",
            Self::Yellow => "Yellow",
            Self::LightBlue => "Light Blue",
            Self::Coral => "Coral",
        }
    }

    /// Case-insensitive lookup by `#RRGGBB`.
    pub fn from_hex(value: &str) -> Option<Self> {
        Self::PALETTE
            .into_iter()
            .find(|color| color.hex().eq_ignore_ascii_case(value.trim()))
    }

    /// Picks a palette entry at random, as offered for a fresh note.
    pub fn random() -> Self {
        Self::PALETTE
            .choose(&mut rand::thread_rng())
            .copied()
            .unwrap_or(Self::Peach)
    }
}

/// Persisted note color text, usually a palette `#RRGGBB` value.
///
/// The text is kept exactly as stored, so `#ffadad` is written back in
/// lower case and a color outside the palette survives edits of other
/// fields.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteSwatch(String);

impl NoteSwatch {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Palette entry this color names, ignoring case.
    pub fn palette(&self) -> Option<NoteColor> {
        NoteColor::from_hex(&self.0)
    }
}

impl From<NoteColor> for NoteSwatch {
    fn from(color: NoteColor) -> Self {
        Self(color.hex().to_string())
    }
}

impl PartialEq<NoteColor> for NoteSwatch {
    fn eq(&self, other: &NoteColor) -> bool {
        self.palette() == Some(*other)
    }
}

impl Display for NoteSwatch {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: EntityId,
    pub title: String,
    pub content: String,
    pub color: NoteSwatch,
    pub created_at: EpochMillis,
    pub updated_at: EpochMillis,
}

/// Field values collected by the note editor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteDraft {
    pub title: String,
    pub content: String,
    pub color: NoteSwatch,
}

impl NoteDraft {
    /// Empty draft with a random palette color.
    pub fn blank() -> Self {
        Self {
            title: String::new(),
            content: String::new(),
            color: NoteColor::random().into(),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        normalize_title(&self.title).map(|_| ())
    }
}

impl From<&Note> for NoteDraft {
    fn from(note: &Note) -> Self {
        Self {
            title: note.title.clone(),
            content: note.content.clone(),
            color: note.color.clone(),
        }
    }
}

impl Note {
    pub fn from_draft(draft: NoteDraft, now: EpochMillis) -> Result<Self, ValidationError> {
        Ok(Self {
            id: EntityId::generate(),
            title: normalize_title(&draft.title)?,
            content: draft.content.trim().to_string(),
            color: draft.color,
            created_at: now,
            updated_at: now,
        })
    }

    /// Returns a copy with the draft applied and `updated_at` set to `now`.
    pub fn with_draft(&self, draft: NoteDraft, now: EpochMillis) -> Result<Self, ValidationError> {
        Ok(Self {
            title: normalize_title(&draft.title)?,
            content: draft.content.trim().to_string(),
            color: draft.color,
            updated_at: now,
            ..self.clone()
        })
    }
}

impl Identified for Note {
    fn id(&self) -> &EntityId {
        &self.id
    }
}
