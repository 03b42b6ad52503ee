//! Thermal receipt layouts.
//!
//! A [`Receipt`] is a list of lines with alignment and emphasis, rendered to
//! fixed-width plain text for a given paper width in characters.

use crate::event::{EventRecord, TimeFormat};
use crate::locale::weekday_and_date;

/// Character of the separator rows between receipt sections
pub const SEPARATOR_CHAR: char = '-';

/// Characters per line on 80mm paper at the coupon font size.
pub const DEFAULT_PAPER_WIDTH: usize = 40;

const MIN_PAPER_WIDTH: usize = 16;

const EMPTY_TITLE: &str = "SEU EVENTO AQUI";
const INVALID_DATE: &str = "Data inválida";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emphasis {
    Normal,
    Bold,
    /// Large print, e.g. the discount percentage
    Large,
    /// Fine print
    Small,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    Text {
        text: String,
        align: Align,
        emphasis: Emphasis,
    },
    /// Full-width row of a repeated character
    Rule(char),
    Blank,
}

/// Builder and container for receipt lines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Receipt {
    lines: Vec<Line>,
}

impl Receipt {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn push(&mut self, text: impl Into<String>, align: Align, emphasis: Emphasis) -> &mut Self {
        self.lines.push(Line::Text {
            text: text.into(),
            align,
            emphasis,
        });
        self
    }

    pub fn center(&mut self, text: impl Into<String>) -> &mut Self {
        self.push(text, Align::Center, Emphasis::Normal)
    }

    pub fn heading(&mut self, text: impl Into<String>) -> &mut Self {
        self.push(text, Align::Center, Emphasis::Bold)
    }

    pub fn left(&mut self, text: impl Into<String>) -> &mut Self {
        self.push(text, Align::Left, Emphasis::Normal)
    }

    pub fn separator(&mut self) -> &mut Self {
        self.rule(SEPARATOR_CHAR)
    }

    pub fn rule(&mut self, c: char) -> &mut Self {
        self.lines.push(Line::Rule(c));
        self
    }

    pub fn blank(&mut self) -> &mut Self {
        self.lines.push(Line::Blank);
        self
    }

    pub fn extend(&mut self, other: Receipt) -> &mut Self {
        self.lines.extend(other.lines);
        self
    }

    /// Plain text, wrapped and aligned to `width` characters per line.
    pub fn render_text(&self, width: usize) -> String {
        let width = width.max(MIN_PAPER_WIDTH);
        let mut out = Vec::new();

        for line in &self.lines {
            match line {
                Line::Text { text, align, .. } => {
                    for paragraph in text.split('\n') {
                        for row in wrap(paragraph, width) {
                            out.push(align_row(&row, *align, width));
                        }
                    }
                }
                Line::Rule(c) => out.push(c.to_string().repeat(width)),
                Line::Blank => out.push(String::new()),
            }
        }

        let mut text = out.join("\n");
        text.push('\n');
        text
    }
}

fn align_row(row: &str, align: Align, width: usize) -> String {
    match align {
        Align::Left => row.to_string(),
        Align::Center => {
            let len = row.chars().count();
            let pad = width.saturating_sub(len) / 2;
            format!("{}{}", " ".repeat(pad), row)
        }
    }
}

/// Greedy word wrap; words longer than the line are split.
fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut rows = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in text.split_whitespace() {
        let mut word: Vec<char> = word.chars().collect();

        while word.len() > width {
            if current_len > 0 {
                rows.push(std::mem::take(&mut current));
                current_len = 0;
            }
            let rest = word.split_off(width);
            rows.push(word.into_iter().collect());
            word = rest;
        }

        let needed = if current_len == 0 { word.len() } else { current_len + 1 + word.len() };
        if needed > width {
            rows.push(std::mem::take(&mut current));
            current_len = 0;
        }
        if current_len > 0 {
            current.push(' ');
            current_len += 1;
        }
        current.extend(word.iter());
        current_len += word.len();
    }

    if current_len > 0 || rows.is_empty() {
        rows.push(current);
    }
    rows
}

/// Store details printed on the events receipt.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoreInfo {
    pub brand: String,
    pub store_name: String,
    pub whatsapp: String,
    pub instagram: String,
}

/// Time line of an event, if it has a start time.
pub fn time_line(event: &EventRecord) -> Option<String> {
    if event.start_time.is_empty() {
        return None;
    }
    Some(match event.time_format() {
        TimeFormat::From => format!("A PARTIR DE: {} HORAS", event.start_time),
        TimeFormat::Range => format!("DAS {} ÀS {} HORAS", event.start_time, event.end_time),
    })
}

/// Weekday and date line, if the event has a date.
pub fn date_line(event: &EventRecord) -> Option<String> {
    if event.date.is_empty() {
        return None;
    }
    Some(match event.parsed_date() {
        Some(date) => weekday_and_date(date),
        None => INVALID_DATE.to_string(),
    })
}

/// Block for a single entry of the derived event list.
pub fn event_block(event: &EventRecord) -> Receipt {
    let mut receipt = Receipt::new();

    let title = if event.title.is_empty() {
        EMPTY_TITLE.to_string()
    } else {
        event.title.to_uppercase()
    };
    receipt.heading(title);

    // The unified themed record has no date or time of its own.
    if event.is_unified() {
        receipt.separator().center(event.description.clone());
        return receipt;
    }

    let date = date_line(event);
    let time = time_line(event);
    if date.is_some() || time.is_some() {
        receipt.separator();
        for line in [date, time].into_iter().flatten() {
            receipt.center(line);
        }
    }

    if !event.description.is_empty() {
        receipt.separator().center(event.description.clone());
    }

    receipt
}

/// The "upcoming events" receipt for a derived event list.
pub fn events_receipt(store: &StoreInfo, events: &[EventRecord]) -> Receipt {
    let mut receipt = Receipt::new();

    let store_name = if store.store_name.is_empty() {
        "UNIDADE"
    } else {
        store.store_name.as_str()
    };
    receipt
        .heading("PRÓXIMOS EVENTOS")
        .heading(format!("{} - {}", store.brand, store_name).to_uppercase())
        .separator();

    for (i, event) in events.iter().enumerate() {
        if i > 0 {
            receipt.blank().rule('=').blank();
        }
        receipt.extend(event_block(event));
    }

    receipt
        .separator()
        .heading("CHAME SEUS AMIGOS E VENHA SE DIVERTIR!")
        .center("Nossos eventos são gratuitos. Esperamos por você!");

    if !store.whatsapp.is_empty() || !store.instagram.is_empty() {
        receipt.separator();
        if !store.whatsapp.is_empty() {
            receipt.heading(format!("WHATSAPP: {}", store.whatsapp));
        }
        if !store.instagram.is_empty() {
            receipt.heading(format!("INSTAGRAM: {}", store.instagram));
        }
    }

    receipt
        .rule('.')
        .push(
            format!("INFORMATIVO INTERNO - {} BRINQUEDOS", store.brand.to_uppercase()),
            Align::Center,
            Emphasis::Small,
        );

    receipt
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::{Category, UNIFIED_THEMED_SATURDAY_ID};

    fn event(title: &str, date: &str, start: &str, end: &str) -> EventRecord {
        EventRecord {
            id: "evt_1".to_string(),
            title: title.to_string(),
            subtitle: String::new(),
            date: date.to_string(),
            start_time: start.to_string(),
            end_time: end.to_string(),
            description: String::new(),
            category: Category::Custom,
            is_active: true,
        }
    }

    fn texts(receipt: &Receipt) -> Vec<String> {
        receipt
            .lines()
            .iter()
            .filter_map(|l| match l {
                Line::Text { text, .. } => Some(text.clone()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn range_and_open_ended_time_lines() {
        let ranged = event("x", "2025-12-05", "14:00", "18:00");
        assert_eq!(time_line(&ranged).unwrap(), "DAS 14:00 ÀS 18:00 HORAS");

        let open = event("x", "2025-12-05", "14:00", "");
        assert_eq!(time_line(&open).unwrap(), "A PARTIR DE: 14:00 HORAS");

        let none = event("x", "2025-12-05", "", "18:00");
        assert!(time_line(&none).is_none());
    }

    #[test]
    fn date_line_handles_bad_dates() {
        assert_eq!(date_line(&event("x", "2025-12-06", "", "")).unwrap(), "Sábado, 06/12/2025");
        assert_eq!(date_line(&event("x", "06/12", "", "")).unwrap(), "Data inválida");
        assert!(date_line(&event("x", "", "", "")).is_none());
    }

    #[test]
    fn block_uppercases_title_and_skips_empty_parts() {
        let block = event_block(&event("Lançamento", "2025-12-01", "10:00", ""));
        assert_eq!(
            texts(&block),
            vec!["LANÇAMENTO", "Segunda, 01/12/2025", "A PARTIR DE: 10:00 HORAS"]
        );

        let empty = event_block(&event("", "", "", ""));
        assert_eq!(
            empty.lines(),
            &[Line::Text {
                text: "SEU EVENTO AQUI".to_string(),
                align: Align::Center,
                emphasis: Emphasis::Bold,
            }]
        );
    }

    #[test]
    fn unified_block_shows_only_title_and_description() {
        let mut unified = event("Happy Sábado - Slime", "", "", "");
        unified.id = UNIFIED_THEMED_SATURDAY_ID.to_string();
        unified.description = "Todos os sábados do mês de dezembro.\nOficina".to_string();

        let block = event_block(&unified);
        assert_eq!(
            texts(&block),
            vec!["HAPPY SÁBADO - SLIME", "Todos os sábados do mês de dezembro.\nOficina"]
        );
    }

    #[test]
    fn events_receipt_contact_lines_are_optional() {
        let mut store = StoreInfo {
            brand: "RI HAPPY".to_string(),
            store_name: "Carioca Shopping".to_string(),
            ..Default::default()
        };
        let events = vec![event("a", "2025-12-01", "10:00", "12:00")];

        let plain = texts(&events_receipt(&store, &events));
        assert_eq!(plain[1], "RI HAPPY - CARIOCA SHOPPING");
        assert!(!plain.iter().any(|l| l.starts_with("WHATSAPP")));

        store.instagram = "@loja".to_string();
        let with_contact = texts(&events_receipt(&store, &events));
        assert!(with_contact.contains(&"INSTAGRAM: @loja".to_string()));
        assert!(!with_contact.iter().any(|l| l.starts_with("WHATSAPP")));
    }

    #[test]
    fn missing_store_name_prints_placeholder() {
        let store = StoreInfo { brand: "RI HAPPY".to_string(), ..Default::default() };
        let plain = texts(&events_receipt(&store, &[]));
        assert_eq!(plain[1], "RI HAPPY - UNIDADE");
    }

    #[test]
    fn render_wraps_and_centers() {
        let mut receipt = Receipt::new();
        receipt
            .center("abc")
            .separator()
            .left("uma frase comprida que precisa quebrar");

        let text = receipt.render_text(20);
        let rows: Vec<&str> = text.lines().collect();
        assert_eq!(rows[0], "        abc");
        assert_eq!(rows[1], "-".repeat(20));
        assert_eq!(rows[2], "uma frase comprida");
        assert_eq!(rows[3], "que precisa quebrar");
        assert!(rows.iter().all(|r| r.chars().count() <= 20));
    }

    #[test]
    fn wrap_splits_overlong_words() {
        let rows = wrap("https://example.com/a/very/long/path", 16);
        assert_eq!(rows, vec!["https://example.", "com/a/very/long/", "path"]);
    }

    #[test]
    fn wrap_keeps_empty_paragraphs() {
        assert_eq!(wrap("", 16), vec![String::new()]);
    }
}
