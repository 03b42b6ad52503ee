//! Field-level checks on user-entered values.
//!
//! Problems are reported per field and never stop the printed list from
//! being derived; a half-typed record is passed through as is.

use chrono::NaiveTime;

use crate::event::{parse_date, Category, EventRecord};
use crate::policy::Field;

const TITLE_MIN: usize = 2;
const TITLE_MAX: usize = 30;
const DESCRIPTION_MAX: usize = 200;

/// A validation message attached to one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: Field,
    pub message: &'static str,
}

pub fn validate(event: &EventRecord) -> Vec<FieldError> {
    let mut errors = Vec::new();
    let mut push = |field, message| errors.push(FieldError { field, message });

    // Preset titles are fixed; themed ones are derived from the subtitle.
    if event.category == Category::Custom {
        let len = event.title.trim().chars().count();
        if len < TITLE_MIN {
            push(Field::Title, "O título deve ter pelo menos 2 caracteres.");
        } else if len > TITLE_MAX {
            push(Field::Title, "O título não pode exceder 30 caracteres.");
        }
    }

    if parse_date(&event.date).is_none() {
        push(Field::Date, "Data inválida.");
    }

    if !is_valid_time(&event.start_time) {
        push(Field::StartTime, "Formato de hora inválido (HH:MM).");
    }

    if !event.end_time.is_empty() && !is_valid_time(&event.end_time) {
        push(Field::EndTime, "Formato de hora inválido (HH:MM).");
    }

    if event.description.chars().count() > DESCRIPTION_MAX {
        push(Field::Description, "A descrição não pode exceder 200 caracteres.");
    }

    errors
}

/// `H:MM` or `HH:MM`, 00:00 to 23:59.
pub fn is_valid_time(s: &str) -> bool {
    let Some((hours, minutes)) = s.split_once(':') else {
        return false;
    };
    let digits = |p: &str| !p.is_empty() && p.chars().all(|c| c.is_ascii_digit());
    if !digits(hours) || hours.len() > 2 || !digits(minutes) || minutes.len() != 2 {
        return false;
    }
    NaiveTime::parse_from_str(s, "%H:%M").is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record() -> EventRecord {
        let mut event = EventRecord::blank(NaiveDate::from_ymd_opt(2025, 12, 1).unwrap());
        event.title = "Lançamento".to_string();
        event
    }

    fn fields(event: &EventRecord) -> Vec<Field> {
        validate(event).into_iter().map(|e| e.field).collect()
    }

    #[test]
    fn valid_record_has_no_errors() {
        assert!(validate(&record()).is_empty());
    }

    #[test]
    fn time_formats() {
        assert!(is_valid_time("09:30"));
        assert!(is_valid_time("9:30"));
        assert!(is_valid_time("23:59"));
        assert!(!is_valid_time("24:00"));
        assert!(!is_valid_time("12:60"));
        assert!(!is_valid_time("12:5"));
        assert!(!is_valid_time("noon"));
        assert!(!is_valid_time(""));
    }

    #[test]
    fn title_length_bounds() {
        let mut event = record();
        event.title = "A".to_string();
        assert_eq!(fields(&event), vec![Field::Title]);

        event.title = "x".repeat(31);
        assert_eq!(fields(&event), vec![Field::Title]);
    }

    #[test]
    fn preset_titles_are_not_checked() {
        let mut event = record();
        event.category = Category::ThemedSaturday;
        event.title = String::new();
        assert!(validate(&event).is_empty());
    }

    #[test]
    fn open_ended_end_time_is_fine() {
        let mut event = record();
        event.end_time = String::new();
        assert!(validate(&event).is_empty());

        event.end_time = "8pm".to_string();
        assert_eq!(fields(&event), vec![Field::EndTime]);
    }

    #[test]
    fn reports_each_bad_field() {
        let mut event = record();
        event.date = "2025-13-01".to_string();
        event.start_time = "25:00".to_string();
        event.description = "x".repeat(201);
        assert_eq!(fields(&event), vec![Field::Date, Field::StartTime, Field::Description]);
    }
}
