//! The editable list of store events.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{CupomError, CupomResult};
use crate::event::{Category, EventRecord};
use crate::policy::{Field, FieldPolicy};
use crate::preset::apply_category;

/// Maximum number of events on one coupon.
pub const MAX_EVENTS: usize = 4;

/// Ordered, capped list of event records, addressed by id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventList {
    events: Vec<EventRecord>,
}

impl EventList {
    /// Wraps stored records, keeping the first `MAX_EVENTS` with distinct ids.
    pub fn from_records(records: Vec<EventRecord>) -> Self {
        let mut events: Vec<EventRecord> = Vec::with_capacity(MAX_EVENTS);
        for record in records {
            if events.len() == MAX_EVENTS {
                break;
            }
            if !events.iter().any(|e| e.id == record.id) {
                events.push(record);
            }
        }
        EventList { events }
    }

    pub fn records(&self) -> &[EventRecord] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.events.len() >= MAX_EVENTS
    }

    /// Append a blank event. At capacity this is a no-op returning `None`.
    pub fn add(&mut self, today: NaiveDate) -> Option<&EventRecord> {
        if self.is_full() {
            return None;
        }
        self.events.push(EventRecord::blank(today));
        self.events.last()
    }

    pub fn get(&self, id: &str) -> Option<&EventRecord> {
        self.events.iter().find(|e| e.id == id)
    }

    fn get_mut(&mut self, id: &str) -> CupomResult<&mut EventRecord> {
        self.events
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| CupomError::EventNotFound(id.to_string()))
    }

    /// Find an event by exact id, unique id prefix, or 1-based position.
    pub fn resolve(&self, selector: &str) -> CupomResult<&EventRecord> {
        if let Some(event) = self.get(selector) {
            return Ok(event);
        }

        if let Ok(position) = selector.parse::<usize>() {
            return position
                .checked_sub(1)
                .and_then(|i| self.events.get(i))
                .ok_or_else(|| CupomError::EventNotFound(selector.to_string()));
        }

        let mut matches = self.events.iter().filter(|e| e.id.starts_with(selector));
        match (matches.next(), matches.next()) {
            (Some(event), None) => Ok(event),
            (Some(_), Some(_)) => Err(CupomError::AmbiguousEvent(selector.to_string())),
            (None, _) => Err(CupomError::EventNotFound(selector.to_string())),
        }
    }

    /// Delete an event. The last remaining event is kept; returns whether
    /// anything was removed.
    pub fn remove(&mut self, id: &str) -> CupomResult<bool> {
        let index = self
            .events
            .iter()
            .position(|e| e.id == id)
            .ok_or_else(|| CupomError::EventNotFound(id.to_string()))?;

        if self.events.len() <= 1 {
            return Ok(false);
        }
        self.events.remove(index);
        Ok(true)
    }

    pub fn set_active(&mut self, id: &str, active: bool) -> CupomResult<()> {
        self.get_mut(id)?.is_active = active;
        Ok(())
    }

    /// Switch an event to `category`, filling in its preset.
    pub fn select_category(
        &mut self,
        id: &str,
        category: Category,
        today: NaiveDate,
    ) -> CupomResult<&EventRecord> {
        let event = self.get_mut(id)?;
        apply_category(event, category, today);
        Ok(&*event)
    }

    /// Set one field, honouring the category's field policy.
    pub fn set_field(
        &mut self,
        id: &str,
        field: Field,
        value: &str,
        unify_themed: bool,
    ) -> CupomResult<()> {
        let event = self.get_mut(id)?;
        let policy = FieldPolicy::for_record(event.category, unify_themed);
        if !policy.is_editable(field) {
            return Err(CupomError::FieldLocked {
                field,
                category: event.category,
            });
        }

        let value = value.to_string();
        match field {
            Field::Title => event.title = value,
            Field::Subtitle => event.subtitle = value,
            Field::Date => event.date = value,
            Field::StartTime => event.start_time = value,
            Field::EndTime => event.end_time = value,
            Field::Description => event.description = value,
        }
        Ok(())
    }

    /// Whether any event (active or not) is a themed Saturday, i.e. whether
    /// the unification switch has anything to act on.
    pub fn has_themed(&self) -> bool {
        self.events.iter().any(|e| e.is_themed())
    }
}
