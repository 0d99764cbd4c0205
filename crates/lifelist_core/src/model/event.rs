//! Calendar event record, categories and editor draft.
//!
//! # Invariants
//! - `color` always equals `category.color_hex()` after any save; it is
//!   not independently editable.
//! - `time` is kept as the text it was entered or stored with. Times set
//!   from a `NaiveTime` are written as `HH:MM`.
//! - `location` is omitted from the persisted JSON when unset.

use super::validation::{normalize_optional, normalize_title, ValidationError};
use super::{EntityId, EpochMillis, Identified};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Time-of-day text of an event.
///
/// Stored verbatim so that values like `19:30:15` or `9:30 AM` survive a
/// load and write unchanged. `parse` reads the formats the editor accepts.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventTime(String);

const TIME_FORMATS: [&str; 4] = ["%H:%M", "%H:%M:%S", "%I:%M %p", "%I:%M%p"];

impl EventTime {
    /// Wraps trimmed text; blank text is no time at all.
    pub fn from_text(text: &str) -> Option<Self> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn parse(&self) -> Option<NaiveTime> {
        TIME_FORMATS
            .iter()
            .find_map(|format| NaiveTime::parse_from_str(&self.0, format).ok())
    }
}

impl From<NaiveTime> for EventTime {
    fn from(time: NaiveTime) -> Self {
        Self(time.format("%H:%M").to_string())
    }
}

impl fmt::Display for EventTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventCategory {
    Work,
    #[default]
    Personal,
    Social,
    Health,
    Other,
}

impl EventCategory {
    pub const ALL: [EventCategory; 5] = [
        EventCategory::Work,
        EventCategory::Personal,
        EventCategory::Social,
        EventCategory::Health,
        EventCategory::Other,
    ];

    /// Canonical card color as `#RRGGBB`.
    pub fn color_hex(self) -> &'static str {
        match self {
            Self::Work => "#007AFF",
            Self::Personal => "#5856D6",
            Self::Social => "#FF2D55",
            Self::Health => "#34C759",
            Self::Other => "#FF9500",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Work => "Work",
            Self::Personal => "Personal",
            Self::Social => "Social",
            Self::Health => "Health",
            Self::Other => "Other",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: EntityId,
    pub title: String,
    pub description: String,
    pub date: NaiveDate,
    pub time: EventTime,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub category: EventCategory,
    pub color: String,
    pub reminder_set: bool,
    pub created_at: EpochMillis,
}

/// Field values collected by the event editor.
///
/// `date` and `time` are optional because the form can be submitted with
/// either left blank; such submissions are rejected. A blank `time` text
/// counts as missing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventDraft {
    pub title: String,
    pub description: String,
    pub date: Option<NaiveDate>,
    pub time: Option<EventTime>,
    pub location: String,
    pub category: EventCategory,
}

/// Time pre-filled for new events.
pub fn default_event_time() -> EventTime {
    EventTime::from(NaiveTime::from_hms_opt(12, 0, 0).unwrap_or_default())
}

impl EventDraft {
    /// Blank draft on `day` at noon in the personal category.
    pub fn for_day(day: NaiveDate) -> Self {
        Self {
            date: Some(day),
            time: Some(default_event_time()),
            ..Self::default()
        }
    }

    /// Checks title, date and time in that order.
    pub fn validate(&self) -> Result<(), ValidationError> {
        normalize_title(&self.title)?;
        self.date.ok_or(ValidationError::MissingDate)?;
        draft_time(&self.time)?;
        Ok(())
    }
}

impl From<&Event> for EventDraft {
    fn from(event: &Event) -> Self {
        Self {
            title: event.title.clone(),
            description: event.description.clone(),
            date: Some(event.date),
            time: Some(event.time.clone()),
            location: event.location.clone().unwrap_or_default(),
            category: event.category,
        }
    }
}

struct EventFields {
    title: String,
    description: String,
    date: NaiveDate,
    time: EventTime,
    location: Option<String>,
    category: EventCategory,
}

fn draft_time(time: &Option<EventTime>) -> Result<EventTime, ValidationError> {
    time.as_ref()
        .and_then(|time| EventTime::from_text(time.as_str()))
        .ok_or(ValidationError::MissingTime)
}

fn validate_draft(draft: EventDraft) -> Result<EventFields, ValidationError> {
    let title = normalize_title(&draft.title)?;
    let date = draft.date.ok_or(ValidationError::MissingDate)?;
    let time = draft_time(&draft.time)?;
    Ok(EventFields {
        title,
        description: draft.description.trim().to_string(),
        date,
        time,
        location: normalize_optional(&draft.location),
        category: draft.category,
    })
}

impl Event {
    /// Creates an event without a reminder from an editor draft.
    pub fn from_draft(draft: EventDraft, now: EpochMillis) -> Result<Self, ValidationError> {
        let fields = validate_draft(draft)?;
        Ok(Self {
            id: EntityId::generate(),
            title: fields.title,
            description: fields.description,
            date: fields.date,
            time: fields.time,
            location: fields.location,
            color: fields.category.color_hex().to_string(),
            category: fields.category,
            reminder_set: false,
            created_at: now,
        })
    }

    /// Returns a copy with the draft applied and `color` re-derived.
    pub fn with_draft(&self, draft: EventDraft) -> Result<Self, ValidationError> {
        let fields = validate_draft(draft)?;
        Ok(Self {
            title: fields.title,
            description: fields.description,
            date: fields.date,
            time: fields.time,
            location: fields.location,
            color: fields.category.color_hex().to_string(),
            category: fields.category,
            ..self.clone()
        })
    }

    pub fn with_reminder_toggled(&self) -> Self {
        Self {
            reminder_set: !self.reminder_set,
            ..self.clone()
        }
    }

    /// Local date and time the event starts.
    ///
    /// A time text that matches none of the editor formats sorts as
    /// midnight.
    pub fn starts_at(&self) -> NaiveDateTime {
        self.date.and_time(self.time.parse().unwrap_or_default())
    }
}

impl Identified for Event {
    fn id(&self) -> &EntityId {
        &self.id
    }
}
