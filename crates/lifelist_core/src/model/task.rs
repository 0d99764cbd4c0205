//! Prioritized task record and its editor draft.
//!
//! # Invariants
//! - Updating from a draft never touches `id`, `completed` or `created_at`.
//! - `due_date` is omitted from the persisted JSON when unset.

use super::validation::{normalize_title, ValidationError};
use super::{EntityId, EpochMillis, Identified};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    pub const ALL: [Priority; 3] = [Priority::Low, Priority::Medium, Priority::High];

    /// Display rank; lower sorts first.
    pub fn rank(self) -> u8 {
        match self {
            Self::High => 0,
            Self::Medium => 1,
            Self::Low => 2,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }

    /// Badge color as `#RRGGBB`.
    pub fn color_hex(self) -> &'static str {
        match self {
            Self::Low => "#34C759",
            Self::Medium => "#FF9500",
            Self::High => "#FF3B30",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: EntityId,
    pub title: String,
    pub description: String,
    pub priority: Priority,
    pub completed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
    pub created_at: EpochMillis,
}

/// Field values collected by the task editor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
    pub priority: Priority,
    pub due_date: Option<NaiveDate>,
}

impl TaskDraft {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Checks the draft without building a task.
    pub fn validate(&self) -> Result<(), ValidationError> {
        normalize_title(&self.title).map(|_| ())
    }
}

impl From<&Task> for TaskDraft {
    fn from(task: &Task) -> Self {
        Self {
            title: task.title.clone(),
            description: task.description.clone(),
            priority: task.priority,
            due_date: task.due_date,
        }
    }
}

impl Task {
    /// Creates an incomplete task from an editor draft.
    pub fn from_draft(draft: TaskDraft, now: EpochMillis) -> Result<Self, ValidationError> {
        Ok(Self {
            id: EntityId::generate(),
            title: normalize_title(&draft.title)?,
            description: draft.description.trim().to_string(),
            priority: draft.priority,
            completed: false,
            due_date: draft.due_date,
            created_at: now,
        })
    }

    /// Returns a copy with the editable fields replaced by `draft`.
    pub fn with_draft(&self, draft: TaskDraft) -> Result<Self, ValidationError> {
        Ok(Self {
            title: normalize_title(&draft.title)?,
            description: draft.description.trim().to_string(),
            priority: draft.priority,
            due_date: draft.due_date,
            ..self.clone()
        })
    }

    pub fn toggled(&self) -> Self {
        Self {
            completed: !self.completed,
            ..self.clone()
        }
    }
}

impl Identified for Task {
    fn id(&self) -> &EntityId {
        &self.id
    }
}
