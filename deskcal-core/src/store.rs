//! Date-keyed event storage and retrieval.

use std::collections::{BTreeMap, HashSet};

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::date_key::DateKey;
use crate::event::{Category, CategoryFilter, Event};

/// Every event the user has created, grouped by day.
///
/// Serializes as a JSON object of `"YYYY-MM-DD" -> [event, ...]`, which is
/// also the persisted format.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventStore {
    days: BTreeMap<DateKey, Vec<Event>>,
}

/// An event matched by `EventStore::search`, with the day it belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchHit {
    pub date: DateKey,
    pub event: Event,
}

impl EventStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Events stored for a day, in insertion order.
    pub fn events_on(&self, date: &DateKey) -> &[Event] {
        self.days.get(date).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Days that have an entry, including days whose list is now empty.
    pub fn dates(&self) -> impl Iterator<Item = &DateKey> {
        self.days.keys()
    }

    /// Total number of events across all days.
    pub fn len(&self) -> usize {
        self.days.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Add an event stamped with the current time.
    ///
    /// Returns `None` and leaves the store untouched when `text` is blank.
    pub fn add_event(
        &mut self,
        date: DateKey,
        text: &str,
        time: &str,
        category: Category,
    ) -> Option<Event> {
        self.add_event_at(date, text, time, category, Utc::now().timestamp_millis())
    }

    /// Same as `add_event` with an explicit clock reading in milliseconds.
    pub fn add_event_at(
        &mut self,
        date: DateKey,
        text: &str,
        time: &str,
        category: Category,
        now_ms: i64,
    ) -> Option<Event> {
        if text.trim().is_empty() {
            return None;
        }

        let event = Event {
            id: self.next_id(now_ms),
            text: text.to_string(),
            time: time.to_string(),
            category,
        };

        tracing::debug!(date = %date, id = event.id, "adding event");
        self.days.entry(date).or_default().push(event.clone());
        Some(event)
    }

    /// Remove the event with `id` from `date`. Returns whether anything was removed.
    ///
    /// The day keeps its (possibly empty) list.
    pub fn delete_event(&mut self, date: &DateKey, id: i64) -> bool {
        let Some(events) = self.days.get_mut(date) else {
            return false;
        };

        let before = events.len();
        events.retain(|e| e.id != id);
        let removed = events.len() != before;

        if removed {
            tracing::debug!(date = %date, id, "deleted event");
        }
        removed
    }

    /// Case-insensitive substring search over every event's text.
    ///
    /// A blank query matches nothing. Hits are ordered by date, then by
    /// insertion order within the day.
    pub fn search(&self, query: &str) -> Vec<SearchHit> {
        if query.trim().is_empty() {
            return Vec::new();
        }

        let needle = query.to_lowercase();

        self.days
            .iter()
            .flat_map(|(date, events)| {
                events
                    .iter()
                    .filter(|e| e.text.to_lowercase().contains(&needle))
                    .map(|e| SearchHit {
                        date: *date,
                        event: e.clone(),
                    })
            })
            .collect()
    }

    /// The clock reading, or one past the largest stored id if that is later.
    ///
    /// Once `i64::MAX` is taken, falls back to the first unused id counting
    /// up from the clock reading, wrapping around.
    fn next_id(&self, now_ms: i64) -> i64 {
        let max_id = self.days.values().flatten().map(|e| e.id).max();

        match max_id {
            Some(max) if max >= now_ms => match max.checked_add(1) {
                Some(id) => id,
                None => self.first_free_id(now_ms),
            },
            _ => now_ms,
        }
    }

    fn first_free_id(&self, from: i64) -> i64 {
        let used: HashSet<i64> = self.days.values().flatten().map(|e| e.id).collect();

        // The store holds far fewer than 2^64 events, so a free id always exists
        (from..=i64::MAX)
            .chain(i64::MIN..from)
            .find(|id| !used.contains(id))
            .unwrap_or(from)
    }
}

/// Events matching `filter`, in their original order.
pub fn filter_by_category(events: &[Event], filter: CategoryFilter) -> Vec<Event> {
    events.iter().filter(|e| filter.matches(e)).cloned().collect()
}

/// Events ordered by their `HH:MM` time. Ties keep their original order.
pub fn sort_by_time(events: &[Event]) -> Vec<Event> {
    let mut sorted = events.to_vec();
    sorted.sort_by(|a, b| a.time.cmp(&b.time));
    sorted
}
