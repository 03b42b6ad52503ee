//! Terminal rendering for cupom types.
//!
//! Extension traits adding colored output to cupom-core types using owo_colors.

use chrono::Weekday;
use cupom_core::event::EventRecord;
use cupom_core::policy::FieldPolicy;
use cupom_core::preset::{DateRule, Preset};
use cupom_core::receipt::time_line;
use cupom_core::validate::FieldError;
use owo_colors::OwoColorize;

/// Characters of an event id shown in listings
const SHORT_ID_LEN: usize = 12;

pub trait Render {
    fn render(&self) -> String;
}

pub fn short_id(id: &str) -> &str {
    id.get(..SHORT_ID_LEN).unwrap_or(id)
}

impl Render for EventRecord {
    fn render(&self) -> String {
        let title = self.display_title();
        let title = if title.is_empty() { "Novo Evento".to_string() } else { title };
        let status = if self.is_active {
            "Ativo".green().to_string()
        } else {
            "Inativo".dimmed().to_string()
        };
        let when = [Some(self.date.clone()), time_line(self)]
            .into_iter()
            .flatten()
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join("  ");

        format!(
            "{} {} [{}] {}",
            title.bold(),
            status,
            self.category,
            when.dimmed()
        )
    }
}

impl Render for FieldError {
    fn render(&self) -> String {
        format!("{}: {}", self.field, self.message).yellow().to_string()
    }
}

impl Render for FieldPolicy {
    fn render(&self) -> String {
        let fields: Vec<&str> = self.editable_fields().map(|f| f.name()).collect();
        format!("editable: {}", fields.join(", ")).dimmed().to_string()
    }
}

impl Render for Preset {
    fn render(&self) -> String {
        let time = match (self.start_time, self.end_time) {
            ("", _) => String::new(),
            (start, "") => format!("a partir de {start}"),
            (start, end) => format!("{start}-{end}"),
        };
        let date = match self.date_rule {
            DateRule::Today => "hoje",
            DateRule::Next(Weekday::Fri) => "próxima sexta",
            DateRule::Next(Weekday::Sat) => "próximo sábado",
            DateRule::Next(_) => "próxima semana",
        };
        let details = if time.is_empty() {
            format!("({date})")
        } else {
            format!("({date}, {time})")
        };
        format!("{} {} {}", self.category.to_string().bold(), self.label, details.dimmed())
    }
}

/// Frame rendered receipt text like a strip of paper.
pub fn framed(text: &str, width: usize) -> String {
    let border = format!("+{}+", "-".repeat(width + 2));
    let mut lines = vec![border.dimmed().to_string()];
    for line in text.lines() {
        let pad = width.saturating_sub(line.chars().count());
        lines.push(format!("{} {}{} {}", "|".dimmed(), line, " ".repeat(pad), "|".dimmed()));
    }
    lines.push(border.dimmed().to_string());
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_id_truncates_long_ids_only() {
        assert_eq!(short_id("evt_0123456789abcdef"), "evt_01234567");
        assert_eq!(short_id("evt_1"), "evt_1");
    }

    #[test]
    fn frame_pads_every_line_to_width() {
        let framed = framed("ab\nabcd\n", 4);
        let rows: Vec<&str> = framed.lines().collect();
        assert_eq!(rows.len(), 4);
        assert!(rows[0].contains("+------+"));
        assert!(rows[1].contains(" ab   "));
        assert!(rows[2].contains(" abcd "));
    }
}
