//! Event timeline: chronological ordering and upcoming/past partition.
//!
//! # Invariants
//! - Both groups are internally ascending by start date-time.
//! - `now` is evaluated once by the caller; an event starting exactly at
//!   `now` counts as upcoming.
//! - When nothing starts at or after `now`, every event is past.

use crate::model::event::Event;
use chrono::{Days, NaiveDate, NaiveDateTime};

/// Events split around one instant.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventTimeline<'a> {
    pub upcoming: Vec<&'a Event>,
    pub past: Vec<&'a Event>,
}

impl<'a> EventTimeline<'a> {
    /// Display sequence: all upcoming events, then all past events.
    pub fn display(&self) -> impl Iterator<Item = &'a Event> + '_ {
        self.upcoming.iter().chain(self.past.iter()).copied()
    }

    /// The first upcoming event, highlighted as "next up".
    pub fn next_up(&self) -> Option<&'a Event> {
        self.upcoming.first().copied()
    }

    pub fn is_next_up(&self, event: &Event) -> bool {
        self.next_up().is_some_and(|next| next.id == event.id)
    }

    pub fn len(&self) -> usize {
        self.upcoming.len() + self.past.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Sorts events by start and splits them at the first one not before `now`.
pub fn event_timeline(events: &[Event], now: NaiveDateTime) -> EventTimeline<'_> {
    let mut sorted: Vec<&Event> = events.iter().collect();
    sorted.sort_by_key(|event| event.starts_at());

    let split = sorted
        .iter()
        .position(|event| event.starts_at() >= now)
        .unwrap_or(sorted.len());
    let upcoming = sorted.split_off(split);

    EventTimeline {
        upcoming,
        past: sorted,
    }
}

pub fn reminder_count(events: &[Event]) -> usize {
    events.iter().filter(|event| event.reminder_set).count()
}

/// Day heading shown on an event card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayLabel {
    Today,
    Tomorrow,
    Date(NaiveDate),
}

pub fn day_label(date: NaiveDate, today: NaiveDate) -> DayLabel {
    if date == today {
        DayLabel::Today
    } else if today.checked_add_days(Days::new(1)) == Some(date) {
        DayLabel::Tomorrow
    } else {
        DayLabel::Date(date)
    }
}

/// Whether the event falls on a calendar day before `today`.
pub fn is_past_day(date: NaiveDate, today: NaiveDate) -> bool {
    date < today
}

#[cfg(test)]
mod tests {
    use super::{day_label, event_timeline, is_past_day, reminder_count, DayLabel};
    use crate::model::event::{Event, EventCategory, EventTime};
    use crate::model::EntityId;
    use chrono::{Duration, NaiveDate, NaiveDateTime};

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 5, 1)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap()
    }

    fn event_at(id: &str, at: NaiveDateTime) -> Event {
        Event {
            id: EntityId::from(id),
            title: id.to_string(),
            description: String::new(),
            date: at.date(),
            time: EventTime::from(at.time()),
            location: None,
            category: EventCategory::Work,
            color: EventCategory::Work.color_hex().to_string(),
            reminder_set: false,
            created_at: 0,
        }
    }

    fn ids<'a>(events: impl Iterator<Item = &'a Event>) -> Vec<&'a str> {
        events.map(|e| e.id.as_str()).collect()
    }

    #[test]
    fn upcoming_then_past_with_next_up() {
        let events = vec![
            event_at("plus2", now() + Duration::hours(2)),
            event_at("minus1", now() - Duration::hours(1)),
            event_at("plus1", now() + Duration::hours(1)),
        ];
        let timeline = event_timeline(&events, now());

        assert_eq!(ids(timeline.upcoming.iter().copied()), vec!["plus1", "plus2"]);
        assert_eq!(ids(timeline.past.iter().copied()), vec!["minus1"]);
        assert_eq!(ids(timeline.display()), vec!["plus1", "plus2", "minus1"]);
        assert_eq!(timeline.next_up().map(|e| e.id.as_str()), Some("plus1"));
        assert!(timeline.is_next_up(&events[2]));
        assert!(!timeline.is_next_up(&events[0]));
    }

    #[test]
    fn event_starting_now_is_upcoming() {
        let events = vec![event_at("now", now())];
        let timeline = event_timeline(&events, now());
        assert_eq!(timeline.upcoming.len(), 1);
        assert!(timeline.past.is_empty());
    }

    #[test]
    fn all_past_leaves_upcoming_empty() {
        let events = vec![
            event_at("b", now() - Duration::days(1)),
            event_at("a", now() - Duration::days(2)),
        ];
        let timeline = event_timeline(&events, now());
        assert!(timeline.upcoming.is_empty());
        assert_eq!(timeline.next_up(), None);
        assert_eq!(ids(timeline.display()), vec!["a", "b"]);
    }

    #[test]
    fn empty_input_yields_empty_timeline() {
        let timeline = event_timeline(&[], now());
        assert!(timeline.is_empty());
        assert_eq!(reminder_count(&[]), 0);
    }

    #[test]
    fn day_labels_relative_to_today() {
        let today = now().date();
        assert_eq!(day_label(today, today), DayLabel::Today);
        assert_eq!(
            day_label(today + Duration::days(1), today),
            DayLabel::Tomorrow
        );
        let later = today + Duration::days(5);
        assert_eq!(day_label(later, today), DayLabel::Date(later));
        assert!(is_past_day(today - Duration::days(1), today));
        assert!(!is_past_day(today, today));
    }
}
