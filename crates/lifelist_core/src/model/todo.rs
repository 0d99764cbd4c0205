use super::validation::{normalize_title, ValidationError};
use super::{EntityId, EpochMillis, Identified};
use serde::{Deserialize, Serialize};

/// Quick checklist entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: EntityId,
    pub title: String,
    pub completed: bool,
    pub created_at: EpochMillis,
}

impl Todo {
    /// Creates an incomplete todo from raw input text.
    pub fn new(title: &str, now: EpochMillis) -> Result<Self, ValidationError> {
        Ok(Self {
            id: EntityId::generate(),
            title: normalize_title(title)?,
            completed: false,
            created_at: now,
        })
    }

    /// Returns a copy with `completed` flipped.
    pub fn toggled(&self) -> Self {
        Self {
            completed: !self.completed,
            ..self.clone()
        }
    }
}

impl Identified for Todo {
    fn id(&self) -> &EntityId {
        &self.id
    }
}
