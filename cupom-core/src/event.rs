//! Store event records as edited by the operator.
//!
//! The serialized form uses the camelCase keys of the stored event list so
//! data written by older versions keeps loading.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::CupomError;

/// Id reserved for the synthetic record produced by themed-Saturday unification.
pub const UNIFIED_THEMED_SATURDAY_ID: &str = "unified_themed_saturday";

/// Prefix of every themed-Saturday display title.
pub const THEMED_TITLE_PREFIX: &str = "Happy Sábado - ";

/// Title of the example event shown on first run.
const EXAMPLE_TITLE: &str = "Exemplo de Evento";
const EXAMPLE_DESCRIPTION: &str =
    "Uma breve descrição do evento que será impresso no papel térmico.";

/// One store event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventRecord {
    pub id: String,
    #[serde(default)]
    pub title: String,
    /// Only meaningful for themed Saturdays, where it builds the title
    #[serde(default)]
    pub subtitle: String,
    /// `YYYY-MM-DD`, or empty for the unified record
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub start_time: String,
    /// Empty means open-ended ("a partir de")
    #[serde(default)]
    pub end_time: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, alias = "predefinedEvent")]
    pub category: Category,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

impl EventRecord {
    /// A blank custom event dated `today`, as created by "add event".
    pub fn blank(today: NaiveDate) -> Self {
        EventRecord {
            id: new_event_id(),
            title: String::new(),
            subtitle: String::new(),
            date: format_date(today),
            start_time: "14:00".to_string(),
            end_time: "20:00".to_string(),
            description: String::new(),
            category: Category::Custom,
            is_active: true,
        }
    }

    /// The example event used when nothing has been stored yet.
    pub fn example(today: NaiveDate) -> Self {
        EventRecord {
            title: EXAMPLE_TITLE.to_string(),
            end_time: "18:00".to_string(),
            description: EXAMPLE_DESCRIPTION.to_string(),
            ..EventRecord::blank(today)
        }
    }

    pub fn is_themed(&self) -> bool {
        self.category == Category::ThemedSaturday
    }

    pub fn is_unified(&self) -> bool {
        self.id == UNIFIED_THEMED_SATURDAY_ID
    }

    /// The title as it is displayed: themed Saturdays derive it from the subtitle.
    pub fn display_title(&self) -> String {
        if self.is_themed() {
            themed_title(&self.subtitle)
        } else {
            self.title.clone()
        }
    }

    pub fn time_format(&self) -> TimeFormat {
        TimeFormat::from_end_time(&self.end_time)
    }

    /// Parsed date, `None` when empty or malformed.
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        parse_date(&self.date)
    }
}

/// `"Happy Sábado - <subtitle>"`
pub fn themed_title(subtitle: &str) -> String {
    format!("{}{}", THEMED_TITLE_PREFIX, subtitle)
}

/// Generate a fresh event id.
pub fn new_event_id() -> String {
    format!("evt_{}", Uuid::new_v4().simple())
}

pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Predefined event type selecting the defaults of a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    #[serde(alias = "happy_sabado")]
    ThemedSaturday,
    FridayEventA,
    FridayEventB,
    FridayEventC,
    /// Unknown stored keys (including the legacy "outro") land here.
    #[default]
    #[serde(other)]
    Custom,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::ThemedSaturday,
        Category::FridayEventA,
        Category::FridayEventB,
        Category::FridayEventC,
        Category::Custom,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Category::ThemedSaturday => "themed_saturday",
            Category::FridayEventA => "friday_event_a",
            Category::FridayEventB => "friday_event_b",
            Category::FridayEventC => "friday_event_c",
            Category::Custom => "custom",
        }
    }

    /// Lenient lookup: legacy keys are accepted, anything else is custom.
    pub fn from_key(key: &str) -> Self {
        key.parse().unwrap_or(Category::Custom)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Strict parse, used for user input where a typo should be reported.
impl FromStr for Category {
    type Err = CupomError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "themed_saturday" | "happy_sabado" => Ok(Category::ThemedSaturday),
            "friday_event_a" => Ok(Category::FridayEventA),
            "friday_event_b" => Ok(Category::FridayEventB),
            "friday_event_c" => Ok(Category::FridayEventC),
            "custom" | "outro" => Ok(Category::Custom),
            other => Err(CupomError::UnknownCategory(other.to_string())),
        }
    }
}

/// How the time window is printed. Always derived from `end_time`, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeFormat {
    /// "DAS 14:00 ÀS 18:00 HORAS"
    Range,
    /// "A PARTIR DE: 14:00 HORAS"
    From,
}

impl TimeFormat {
    pub fn from_end_time(end_time: &str) -> Self {
        if end_time.trim().is_empty() {
            TimeFormat::From
        } else {
            TimeFormat::Range
        }
    }
}
