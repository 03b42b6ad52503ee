//! Which fields of a record the operator may edit, per category.

use std::fmt;

use crate::event::Category;

/// An editable field of an event record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Title,
    Subtitle,
    Date,
    StartTime,
    EndTime,
    Description,
}

impl Field {
    pub const ALL: [Field; 6] = [
        Field::Title,
        Field::Subtitle,
        Field::Date,
        Field::StartTime,
        Field::EndTime,
        Field::Description,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Field::Title => "title",
            Field::Subtitle => "subtitle",
            Field::Date => "date",
            Field::StartTime => "start",
            Field::EndTime => "end",
            Field::Description => "description",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Editable flags, one per field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldPolicy {
    pub title: bool,
    pub subtitle: bool,
    pub date: bool,
    pub start_time: bool,
    pub end_time: bool,
    pub description: bool,
}

const CUSTOM: FieldPolicy = FieldPolicy {
    title: true,
    subtitle: false,
    date: true,
    start_time: true,
    end_time: true,
    description: true,
};

const THEMED_SATURDAY: FieldPolicy = FieldPolicy {
    title: false,
    subtitle: true,
    date: true,
    start_time: false,
    end_time: false,
    description: false,
};

const FRIDAY_EVENT: FieldPolicy = FieldPolicy {
    title: false,
    subtitle: false,
    date: true,
    start_time: false,
    end_time: false,
    description: false,
};

impl FieldPolicy {
    pub fn for_category(category: Category) -> FieldPolicy {
        match category {
            Category::Custom => CUSTOM,
            Category::ThemedSaturday => THEMED_SATURDAY,
            Category::FridayEventA | Category::FridayEventB | Category::FridayEventC => {
                FRIDAY_EVENT
            }
        }
    }

    /// Policy for a record, taking themed-Saturday unification into account:
    /// a unified themed event has no date of its own.
    pub fn for_record(category: Category, unify_themed: bool) -> FieldPolicy {
        let mut policy = Self::for_category(category);
        if unify_themed && category == Category::ThemedSaturday {
            policy.date = false;
        }
        policy
    }

    pub fn is_editable(&self, field: Field) -> bool {
        match field {
            Field::Title => self.title,
            Field::Subtitle => self.subtitle,
            Field::Date => self.date,
            Field::StartTime => self.start_time,
            Field::EndTime => self.end_time,
            Field::Description => self.description,
        }
    }

    pub fn editable_fields(&self) -> impl Iterator<Item = Field> + '_ {
        Field::ALL.into_iter().filter(|f| self.is_editable(*f))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn custom_edits_everything_but_subtitle() {
        let policy = FieldPolicy::for_category(Category::Custom);
        let fields: Vec<_> = policy.editable_fields().collect();
        assert_eq!(
            fields,
            vec![Field::Title, Field::Date, Field::StartTime, Field::EndTime, Field::Description]
        );
    }

    #[test]
    fn friday_events_only_edit_date() {
        for category in [Category::FridayEventA, Category::FridayEventB, Category::FridayEventC] {
            let fields: Vec<_> = FieldPolicy::for_category(category).editable_fields().collect();
            assert_eq!(fields, vec![Field::Date]);
        }
    }

    #[test]
    fn unified_themed_events_lock_date() {
        let policy = FieldPolicy::for_record(Category::ThemedSaturday, true);
        assert!(policy.is_editable(Field::Subtitle));
        assert!(!policy.is_editable(Field::Date));

        // unification leaves other categories alone
        assert!(FieldPolicy::for_record(Category::Custom, true).is_editable(Field::Date));
    }
}
