//! Category presets: the default field bundle each predefined event type
//! fills in, and the weekday rule for its default date.

use chrono::{Datelike, Days, NaiveDate, Weekday};

use crate::event::{format_date, Category, EventRecord, TimeFormat};

/// How a preset picks its default date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateRule {
    Today,
    /// Next occurrence of the weekday strictly after today
    Next(Weekday),
}

impl DateRule {
    pub fn resolve(&self, today: NaiveDate) -> NaiveDate {
        match self {
            DateRule::Today => today,
            DateRule::Next(weekday) => next_weekday_after(today, *weekday),
        }
    }
}

/// Default values applied when a category is selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preset {
    pub category: Category,
    /// Human label for listings
    pub label: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub start_time: &'static str,
    pub end_time: &'static str,
    pub date_rule: DateRule,
}

const THEMED_SATURDAY: Preset = Preset {
    category: Category::ThemedSaturday,
    label: "Happy Sábado",
    title: "Happy Sábado",
    description: "Atividades temáticas para toda a família. Traga as crianças!",
    start_time: "15:00",
    end_time: "17:00",
    date_rule: DateRule::Next(Weekday::Sat),
};

const FRIDAY_EVENT_A: Preset = Preset {
    category: Category::FridayEventA,
    label: "Sexta Criativa",
    title: "Sexta Criativa",
    description: "Oficina de pintura e massinha com os brinquedos da loja.",
    start_time: "16:00",
    end_time: "19:00",
    date_rule: DateRule::Next(Weekday::Fri),
};

const FRIDAY_EVENT_B: Preset = Preset {
    category: Category::FridayEventB,
    label: "Sexta dos Games",
    title: "Sexta dos Games",
    description: "Torneio de videogame com brindes para os participantes.",
    start_time: "17:00",
    end_time: "",
    date_rule: DateRule::Next(Weekday::Fri),
};

const FRIDAY_EVENT_C: Preset = Preset {
    category: Category::FridayEventC,
    label: "Sexta de Lançamentos",
    title: "Sexta de Lançamentos",
    description: "Demonstração das novidades da semana direto dos fabricantes.",
    start_time: "15:00",
    end_time: "18:00",
    date_rule: DateRule::Next(Weekday::Fri),
};

const CUSTOM: Preset = Preset {
    category: Category::Custom,
    label: "Outro",
    title: "",
    description: "",
    start_time: "",
    end_time: "",
    date_rule: DateRule::Today,
};

impl Preset {
    pub fn for_category(category: Category) -> &'static Preset {
        match category {
            Category::ThemedSaturday => &THEMED_SATURDAY,
            Category::FridayEventA => &FRIDAY_EVENT_A,
            Category::FridayEventB => &FRIDAY_EVENT_B,
            Category::FridayEventC => &FRIDAY_EVENT_C,
            Category::Custom => &CUSTOM,
        }
    }

    /// Lookup by raw key; unknown keys resolve to the custom bundle.
    pub fn for_key(key: &str) -> &'static Preset {
        Self::for_category(Category::from_key(key))
    }

    pub fn all() -> impl Iterator<Item = &'static Preset> {
        Category::ALL.iter().map(|c| Self::for_category(*c))
    }

    pub fn time_format(&self) -> TimeFormat {
        TimeFormat::from_end_time(self.end_time)
    }

    pub fn default_date(&self, today: NaiveDate) -> NaiveDate {
        self.date_rule.resolve(today)
    }
}

/// Next occurrence of `weekday` strictly after `today`.
/// On the target weekday itself this is a week later, never today.
pub fn next_weekday_after(today: NaiveDate, weekday: Weekday) -> NaiveDate {
    let current = today.weekday().num_days_from_monday();
    let target = weekday.num_days_from_monday();
    let mut ahead = (target + 7 - current) % 7;
    if ahead == 0 {
        ahead = 7;
    }
    today + Days::new(u64::from(ahead))
}

/// Overwrite a record's preset-driven fields for `category`.
///
/// The subtitle survives only when switching to a themed Saturday.
pub fn apply_category(record: &mut EventRecord, category: Category, today: NaiveDate) {
    let preset = Preset::for_category(category);

    record.category = category;
    record.title = preset.title.to_string();
    record.description = preset.description.to_string();
    record.start_time = preset.start_time.to_string();
    record.end_time = preset.end_time.to_string();
    record.date = format_date(preset.default_date(today));

    if category != Category::ThemedSaturday {
        record.subtitle.clear();
    }
}
