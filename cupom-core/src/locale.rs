//! pt-BR date labels for printed coupons.

use chrono::{DateTime, Locale, NaiveDate, NaiveTime, Utc};

const LOCALE: Locale = Locale::pt_BR;

fn localized(date: NaiveDate, fmt: &str) -> String {
    let midnight: DateTime<Utc> = date.and_time(NaiveTime::MIN).and_utc();
    midnight.format_localized(fmt, LOCALE).to_string()
}

/// Month name in lower case, e.g. "dezembro".
pub fn month_name(date: NaiveDate) -> String {
    localized(date, "%B")
}

/// Capitalised weekday without the "-feira" suffix, e.g. "Segunda" or "Sábado".
pub fn weekday_label(date: NaiveDate) -> String {
    let weekday = localized(date, "%A");
    let short = weekday.split('-').next().unwrap_or_default();
    capitalize(short)
}

/// "Sábado, 06/12/2025"
pub fn weekday_and_date(date: NaiveDate) -> String {
    format!("{}, {}", weekday_label(date), date.format("%d/%m/%Y"))
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn month_names_are_portuguese() {
        assert_eq!(month_name(day(2025, 12, 6)), "dezembro");
        assert_eq!(month_name(day(2026, 3, 7)), "março");
    }

    #[test]
    fn weekday_drops_feira_suffix() {
        assert_eq!(weekday_label(day(2025, 12, 1)), "Segunda");
        assert_eq!(weekday_label(day(2025, 12, 6)), "Sábado");
    }

    #[test]
    fn full_date_line() {
        assert_eq!(weekday_and_date(day(2025, 12, 5)), "Sexta, 05/12/2025");
    }
}
