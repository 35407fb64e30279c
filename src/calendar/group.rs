use crate::model::{Action, ActionStatus};
use chrono::{Datelike, NaiveDate};
use serde::Deserialize;
use std::fmt;

pub const NO_DATE_LABEL: &str = "No Date";

/// Grouping key: one calendar month, or the sentinel for undated events.
///
/// The derived ordering is chronological with `NoDate` last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MonthKey {
    Month { year: i32, month: u32 },
    NoDate,
}

impl MonthKey {
    pub fn of(action: &Action) -> Self {
        match action.scheduled_date {
            Some(dt) => MonthKey::Month {
                year: dt.year(),
                month: dt.month(),
            },
            None => MonthKey::NoDate,
        }
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            MonthKey::Month { year, month } => match NaiveDate::from_ymd_opt(year, month, 1) {
                Some(first) => write!(f, "{}", first.format("%B %Y")),
                None => write!(f, "{}-{:02}", year, month),
            },
            MonthKey::NoDate => f.write_str(NO_DATE_LABEL),
        }
    }
}

/// Display order of month sections.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MonthOrder {
    /// Sections appear in the order their first event appears.
    #[default]
    FirstSeen,
    /// Sections are sorted by month, "No Date" last.
    Chronological,
}

#[derive(Debug, Clone)]
pub struct MonthGroup {
    pub key: MonthKey,
    pub actions: Vec<Action>,
}

impl MonthGroup {
    pub fn label(&self) -> String {
        self.key.to_string()
    }
}

/// Partition actions into month sections.
///
/// Within a section actions keep their input order. Sections are emitted in
/// first-seen order unless `order` asks for chronological.
pub fn group_by_month<'a, I>(actions: I, order: MonthOrder) -> Vec<MonthGroup>
where
    I: IntoIterator<Item = &'a Action>,
{
    let mut groups: Vec<MonthGroup> = Vec::new();
    for action in actions {
        let key = MonthKey::of(action);
        match groups.iter_mut().find(|g| g.key == key) {
            Some(group) => group.actions.push(action.clone()),
            None => groups.push(MonthGroup {
                key,
                actions: vec![action.clone()],
            }),
        }
    }

    if order == MonthOrder::Chronological {
        groups.sort_by_key(|g| g.key);
    }
    groups
}

/// Visual treatment of an event card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Treatment {
    Completed,
    Scheduled,
    Unscheduled,
    Default,
}

pub fn treatment_for(status: &ActionStatus) -> Treatment {
    match status {
        ActionStatus::Completed => Treatment::Completed,
        ActionStatus::Scheduled => Treatment::Scheduled,
        ActionStatus::Unscheduled => Treatment::Unscheduled,
        ActionStatus::Other(_) => Treatment::Default,
    }
}
