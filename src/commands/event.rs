use anyhow::{Context, Result};
use cupom_core::event::Category;
use cupom_core::policy::{Field, FieldPolicy};
use cupom_core::MAX_EVENTS;
use dialoguer::Input;
use owo_colors::OwoColorize;

use crate::render::{short_id, Render};
use crate::session::Session;

/// Field values given on the command line; `None` leaves a field untouched.
#[derive(Default)]
pub struct Edits {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub date: Option<String>,
    pub start: Option<String>,
    pub end: Option<String>,
    pub description: Option<String>,
}

impl Edits {
    fn is_empty(&self) -> bool {
        self.fields().iter().all(|(_, value)| value.is_none())
    }

    fn fields(&self) -> [(Field, &Option<String>); 6] {
        [
            (Field::Title, &self.title),
            (Field::Subtitle, &self.subtitle),
            (Field::Date, &self.date),
            (Field::StartTime, &self.start),
            (Field::EndTime, &self.end),
            (Field::Description, &self.description),
        ]
    }
}

pub fn add(session: &mut Session, category: Option<String>) -> Result<()> {
    let category = category
        .map(|c| c.parse::<Category>())
        .transpose()?;

    let today = session.today;
    let Some(event) = session.state.events.add(today) else {
        println!(
            "{}",
            format!("  Already {MAX_EVENTS} events, nothing added").yellow()
        );
        return Ok(());
    };
    let id = event.id.clone();

    if let Some(category) = category {
        session.state.events.select_category(&id, category, today)?;
    }
    session.save();

    println!("{}", format!("  Added event {}", short_id(&id)).green());
    Ok(())
}

pub fn edit(session: &mut Session, selector: &str, edits: Edits, unify: bool) -> Result<()> {
    let id = session.state.events.resolve(selector)?.id.clone();
    let unify = session.unify(unify);

    let edits = if edits.is_empty() {
        prompt_edits(session, &id, unify)?
    } else {
        edits
    };

    for (field, value) in edits.fields() {
        if let Some(value) = value {
            session.state.events.set_field(&id, field, value, unify)?;
        }
    }
    session.save();

    if let Some(event) = session.state.events.get(&id) {
        println!("  {}", event.render());
    }
    Ok(())
}

/// Ask for every editable field, prefilled with its current value.
fn prompt_edits(session: &Session, id: &str, unify: bool) -> Result<Edits> {
    let event = session
        .state
        .events
        .get(id)
        .with_context(|| format!("Event {id} disappeared"))?;
    let policy = FieldPolicy::for_record(event.category, unify);

    let mut edits = Edits::default();
    for field in policy.editable_fields() {
        let current = match field {
            Field::Title => &event.title,
            Field::Subtitle => &event.subtitle,
            Field::Date => &event.date,
            Field::StartTime => &event.start_time,
            Field::EndTime => &event.end_time,
            Field::Description => &event.description,
        };
        let value: String = Input::new()
            .with_prompt(format!("  {field}"))
            .default(current.clone())
            .allow_empty(true)
            .interact_text()?;

        let slot = match field {
            Field::Title => &mut edits.title,
            Field::Subtitle => &mut edits.subtitle,
            Field::Date => &mut edits.date,
            Field::StartTime => &mut edits.start,
            Field::EndTime => &mut edits.end,
            Field::Description => &mut edits.description,
        };
        *slot = Some(value);
    }
    Ok(edits)
}

pub fn category(session: &mut Session, selector: &str, category: &str) -> Result<()> {
    let category: Category = category.parse()?;
    let id = session.state.events.resolve(selector)?.id.clone();
    let today = session.today;

    let event = session.state.events.select_category(&id, category, today)?;
    println!("  {}", event.render());
    session.save();
    Ok(())
}

pub fn set_active(session: &mut Session, selector: &str, active: bool) -> Result<()> {
    let id = session.state.events.resolve(selector)?.id.clone();
    session.state.events.set_active(&id, active)?;
    session.save();

    let label = if active { "included in" } else { "left out of" };
    println!("{}", format!("  Event {} {label} the printed list", short_id(&id)).green());
    Ok(())
}

pub fn remove(session: &mut Session, selector: &str) -> Result<()> {
    let id = session.state.events.resolve(selector)?.id.clone();

    if !session.state.events.remove(&id)? {
        println!("{}", "  The last event cannot be removed".yellow());
        return Ok(());
    }
    session.save();

    println!("{}", format!("  Removed event {}", short_id(&id)).green());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use cupom_core::config::CupomConfig;
    use cupom_core::event::EventRecord;
    use cupom_core::store::{AppState, FileStore};
    use cupom_core::{CupomError, EventList};
    use tempfile::TempDir;

    fn themed_session(dir: &TempDir) -> (Session, String) {
        let today = NaiveDate::from_ymd_opt(2025, 12, 1).unwrap();
        let event = EventRecord {
            category: Category::ThemedSaturday,
            subtitle: "Slime".to_string(),
            date: "2025-12-06".to_string(),
            ..EventRecord::blank(today)
        };
        let id = event.id.clone();
        let state = AppState {
            events: EventList::from_records(vec![event]),
            ..AppState::defaults(today)
        };
        let store = FileStore::new(dir.path().join("storage.json"));
        (Session::new(CupomConfig::default(), state, today, store), id)
    }

    fn date_edit() -> Edits {
        Edits {
            date: Some("2025-12-13".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn unify_flag_locks_themed_date() {
        let dir = TempDir::new().unwrap();
        let (mut session, id) = themed_session(&dir);

        let err = edit(&mut session, &id, date_edit(), true).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CupomError>(),
            Some(CupomError::FieldLocked { field: Field::Date, .. })
        ));
        assert_eq!(session.state.events.get(&id).unwrap().date, "2025-12-06");
    }

    #[test]
    fn themed_date_is_editable_without_unify() {
        let dir = TempDir::new().unwrap();
        let (mut session, id) = themed_session(&dir);

        edit(&mut session, &id, date_edit(), false).unwrap();
        assert_eq!(session.state.events.get(&id).unwrap().date, "2025-12-13");
    }

    #[test]
    fn edits_without_flags_are_empty() {
        assert!(Edits::default().is_empty());

        let edits = Edits {
            end: Some(String::new()),
            ..Default::default()
        };
        assert!(!edits.is_empty());
    }

    #[test]
    fn edits_map_to_fields_in_order() {
        let edits = Edits {
            date: Some("2025-12-12".to_string()),
            ..Default::default()
        };
        let set: Vec<Field> = edits
            .fields()
            .into_iter()
            .filter(|(_, v)| v.is_some())
            .map(|(f, _)| f)
            .collect();
        assert_eq!(set, vec![Field::Date]);
    }
}
