//! Derivation of the printed event list from the editable list.
//!
//! Everything here is a pure function of its input and is recomputed on
//! every change; nothing is cached.

use std::cmp::Ordering;

use chrono::{NaiveDate, NaiveTime};
use tracing::debug;

use crate::event::{themed_title, EventRecord, UNIFIED_THEMED_SATURDAY_ID};
use crate::locale::month_name;

const MIDNIGHT: &str = "00:00";

/// Date part of the sort key. An empty date orders first; dates that do not
/// parse yet order after the ones that do, by their raw text.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
enum DateKey<'a> {
    Empty,
    Parsed(NaiveDate),
    Raw(&'a str),
}

/// Time part of the sort key, compared only between records of the same date.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
enum TimeKey<'a> {
    Parsed(NaiveTime),
    Raw(&'a str),
}

fn sort_key(event: &EventRecord) -> (DateKey<'_>, TimeKey<'_>) {
    let date = if event.date.is_empty() {
        DateKey::Empty
    } else {
        match NaiveDate::parse_from_str(&event.date, "%Y-%m-%d") {
            Ok(d) => DateKey::Parsed(d),
            Err(_) => DateKey::Raw(&event.date),
        }
    };

    let time = if event.start_time.is_empty() {
        MIDNIGHT
    } else {
        event.start_time.as_str()
    };
    let time = match NaiveTime::parse_from_str(time, "%H:%M") {
        Ok(t) => TimeKey::Parsed(t),
        Err(_) => TimeKey::Raw(time),
    };

    (date, time)
}

fn chronological(a: &EventRecord, b: &EventRecord) -> Ordering {
    sort_key(a).cmp(&sort_key(b))
}

/// Active events in ascending `(date, start time)` order.
/// Ties keep their insertion order.
pub fn sorted_active(events: &[EventRecord]) -> Vec<EventRecord> {
    let mut active: Vec<EventRecord> = events.iter().filter(|e| e.is_active).cloned().collect();
    active.sort_by(chronological);
    active
}

/// The list handed to the receipt layout.
///
/// With `unify_themed` set and at least one active themed Saturday, all themed
/// Saturdays collapse into a single record (id [`UNIFIED_THEMED_SATURDAY_ID`])
/// placed after every dated event. Otherwise each themed Saturday keeps its own
/// slot with its title derived from the subtitle.
pub fn derive_display_list(events: &[EventRecord], unify_themed: bool) -> Vec<EventRecord> {
    let sorted = sorted_active(events);
    let (themed, mut others): (Vec<EventRecord>, Vec<EventRecord>) =
        sorted.iter().cloned().partition(|e| e.is_themed());

    let Some(first_themed) = themed.first().filter(|_| unify_themed) else {
        return sorted.into_iter().map(decorate_title).collect();
    };

    debug!(themed = themed.len(), others = others.len(), "unifying themed saturdays");

    others.sort_by(chronological);
    others.push(unified_record(first_themed));
    others
}

fn decorate_title(mut event: EventRecord) -> EventRecord {
    if event.is_themed() {
        event.title = themed_title(&event.subtitle);
    }
    event
}

/// Synthetic summary of every themed Saturday, built from the earliest one.
fn unified_record(first: &EventRecord) -> EventRecord {
    let month = first.parsed_date().map(month_name).unwrap_or_default();

    EventRecord {
        id: UNIFIED_THEMED_SATURDAY_ID.to_string(),
        title: themed_title(&first.subtitle),
        description: format!("Todos os sábados do mês de {}.\n{}", month, first.description),
        date: String::new(),
        start_time: String::new(),
        end_time: String::new(),
        is_active: true,
        ..first.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::Category;

    fn event(id: &str, date: &str, start: &str, category: Category) -> EventRecord {
        EventRecord {
            id: id.to_string(),
            title: id.to_string(),
            subtitle: String::new(),
            date: date.to_string(),
            start_time: start.to_string(),
            end_time: String::new(),
            description: String::new(),
            category,
            is_active: true,
        }
    }

    fn themed(id: &str, date: &str, subtitle: &str) -> EventRecord {
        EventRecord {
            subtitle: subtitle.to_string(),
            description: format!("{} description", id),
            ..event(id, date, "14:00", Category::ThemedSaturday)
        }
    }

    fn ids(events: &[EventRecord]) -> Vec<&str> {
        events.iter().map(|e| e.id.as_str()).collect()
    }

    #[test]
    fn sorts_by_date_then_start_time() {
        let events = vec![
            event("c", "2025-12-06", "10:00", Category::Custom),
            event("b", "2025-12-05", "18:00", Category::Custom),
            event("a", "2025-12-05", "09:30", Category::Custom),
        ];
        assert_eq!(ids(&sorted_active(&events)), vec!["a", "b", "c"]);
    }

    #[test]
    fn missing_start_time_sorts_as_midnight() {
        let events = vec![
            event("late", "2025-12-05", "00:01", Category::Custom),
            event("open", "2025-12-05", "", Category::Custom),
        ];
        assert_eq!(ids(&sorted_active(&events)), vec!["open", "late"]);
    }

    #[test]
    fn single_digit_hours_sort_by_time_not_text() {
        let events = vec![
            event("ten", "2025-12-05", "10:00", Category::Custom),
            event("nine", "2025-12-05", "9:00", Category::Custom),
        ];
        assert_eq!(ids(&sorted_active(&events)), vec!["nine", "ten"]);
    }

    #[test]
    fn ties_keep_insertion_order() {
        let events = vec![
            event("first", "2025-12-05", "10:00", Category::Custom),
            event("second", "2025-12-05", "10:00", Category::Custom),
        ];
        assert_eq!(ids(&sorted_active(&events)), vec!["first", "second"]);
    }

    #[test]
    fn sorting_is_idempotent() {
        let events = vec![
            event("x", "2025-12-09", "", Category::Custom),
            event("bad", "not a date", "10:00", Category::Custom),
            event("y", "2025-12-01", "23:00", Category::Custom),
        ];
        let once = sorted_active(&events);
        let twice = sorted_active(&once);
        assert_eq!(once, twice);
        assert_eq!(ids(&once), vec!["y", "x", "bad"]);
    }

    #[test]
    fn half_typed_time_only_reorders_within_its_date() {
        let events = vec![
            event("late", "2025-12-31", "10:00", Category::Custom),
            event("typing", "2025-12-01", "14", Category::Custom),
            event("same_day", "2025-12-01", "09:00", Category::Custom),
        ];
        assert_eq!(ids(&sorted_active(&events)), vec!["same_day", "typing", "late"]);
    }

    #[test]
    fn empty_date_sorts_first() {
        let events = vec![
            event("dated", "2025-12-31", "10:00", Category::Custom),
            event("undated", "", "10:00", Category::Custom),
        ];
        assert_eq!(ids(&sorted_active(&events)), vec!["undated", "dated"]);
    }

    #[test]
    fn inactive_events_are_dropped() {
        let mut hidden = event("hidden", "2025-12-01", "10:00", Category::Custom);
        hidden.is_active = false;
        let events = vec![hidden, event("shown", "2025-12-02", "10:00", Category::Custom)];
        assert_eq!(ids(&derive_display_list(&events, false)), vec!["shown"]);
    }

    #[test]
    fn nothing_active_gives_empty_list() {
        let mut only = event("only", "2025-12-01", "10:00", Category::Custom);
        only.is_active = false;
        assert!(derive_display_list(&[only], true).is_empty());
        assert!(derive_display_list(&[], false).is_empty());
    }

    #[test]
    fn without_unify_length_matches_active_count() {
        let events = vec![
            themed("s1", "2025-12-06", "Slime"),
            themed("s2", "2025-12-13", "Lego"),
            event("f", "2025-12-05", "16:00", Category::FridayEventA),
            event("c", "2025-12-01", "10:00", Category::Custom),
        ];
        let list = derive_display_list(&events, false);
        assert_eq!(list.len(), 4);
        assert_eq!(ids(&list), vec!["c", "f", "s1", "s2"]);
        assert_eq!(list[2].title, "Happy Sábado - Slime");
        assert_eq!(list[3].title, "Happy Sábado - Lego");
    }

    #[test]
    fn unify_collapses_themed_into_last_record() {
        let events = vec![
            themed("s2", "2025-12-13", "Lego"),
            themed("s1", "2025-12-06", "Slime"),
            event("launch", "2025-12-20", "10:00", Category::Custom),
            event("friday", "2025-12-05", "16:00", Category::FridayEventA),
        ];
        let list = derive_display_list(&events, true);

        assert_eq!(ids(&list), vec!["friday", "launch", UNIFIED_THEMED_SATURDAY_ID]);
        let unified = list.last().unwrap();
        assert_eq!(unified.title, "Happy Sábado - Slime");
        assert_eq!(
            unified.description,
            "Todos os sábados do mês de dezembro.\ns1 description"
        );
        assert_eq!(unified.date, "");
        assert_eq!(unified.start_time, "");
        assert_eq!(unified.end_time, "");
        assert_eq!(list.iter().filter(|e| e.is_unified()).count(), 1);
    }

    #[test]
    fn unify_applies_to_a_single_themed_event() {
        let events = vec![
            themed("s1", "2025-12-06", "Slime"),
            event("launch", "2025-12-01", "10:00", Category::Custom),
        ];
        let list = derive_display_list(&events, true);

        assert_eq!(list.len(), 2);
        assert_eq!(list[0].title, "launch");
        assert_eq!(list[0].date, "2025-12-01");
        assert_eq!(list[1].id, UNIFIED_THEMED_SATURDAY_ID);
        assert_eq!(list[1].title, "Happy Sábado - Slime");
        assert_eq!(list[1].date, "");
    }

    #[test]
    fn unify_without_themed_events_changes_nothing() {
        let events = vec![
            event("b", "2025-12-02", "10:00", Category::FridayEventB),
            event("a", "2025-12-01", "10:00", Category::Custom),
        ];
        assert_eq!(derive_display_list(&events, true), derive_display_list(&events, false));
    }

    #[test]
    fn inactive_themed_events_are_not_unified() {
        let mut themed_off = themed("s1", "2025-12-06", "Slime");
        themed_off.is_active = false;
        let events = vec![themed_off, event("a", "2025-12-01", "10:00", Category::Custom)];
        let list = derive_display_list(&events, true);
        assert_eq!(ids(&list), vec!["a"]);
    }

    #[test]
    fn unparseable_themed_date_gives_empty_month() {
        let events = vec![themed("s1", "", "Slime")];
        let list = derive_display_list(&events, true);
        assert_eq!(list[0].description, "Todos os sábados do mês de .\ns1 description");
    }
}
