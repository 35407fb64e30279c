//! Text content of an event card, independent of how it is drawn.
//!
//! A card is a three-row gutter (weekday, day of month, status icon) beside a
//! body of labelled lines. Both the terminal view and plain output are built
//! from it.

use crate::calendar::{treatment_for, Treatment};
use crate::model::{Action, ActionStatus};
use chrono::Datelike;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub const GUTTER_ROWS: usize = 3;
pub const UNDATED_LABEL: &str = "TBD";
pub const ICON_COMPLETED: &str = "✔";
pub const ICON_SCHEDULED: &str = "◷";
pub const STREET_MARKER: &str = "⌖";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BodyLine {
    Title(String),
    VendorName(String),
    Phone(String),
    Street(String),
    Status(String),
    Arrival(String),
}

impl BodyLine {
    pub fn text(&self) -> String {
        match self {
            BodyLine::Title(s) | BodyLine::VendorName(s) | BodyLine::Phone(s) | BodyLine::Status(s) => {
                s.clone()
            }
            BodyLine::Street(s) => format!("{} {}", STREET_MARKER, s),
            BodyLine::Arrival(s) => format!("Arrival Window: {}", s),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Card {
    pub treatment: Treatment,
    pub gutter: [String; GUTTER_ROWS],
    pub body: Vec<BodyLine>,
}

impl Card {
    pub fn new(action: &Action, street: Option<&str>) -> Self {
        Self {
            treatment: treatment_for(&action.status),
            gutter: [weekday_label(action), day_label(action), icon(&action.status).to_string()],
            body: body_lines(action, street),
        }
    }

    /// Rows occupied, not counting the spacer after the card.
    pub fn height(&self) -> usize {
        self.body.len().max(GUTTER_ROWS)
    }

    pub fn gutter_row(&self, row: usize) -> &str {
        self.gutter.get(row).map(String::as_str).unwrap_or("")
    }
}

/// Upper-case weekday abbreviation, or "TBD" when undated.
pub fn weekday_label(action: &Action) -> String {
    match action.scheduled_date {
        Some(dt) => dt.format("%a").to_string().to_uppercase(),
        None => UNDATED_LABEL.to_string(),
    }
}

/// Two-digit day of month, empty when undated.
pub fn day_label(action: &Action) -> String {
    action
        .scheduled_date
        .map(|dt| format!("{:02}", dt.day()))
        .unwrap_or_default()
}

pub fn icon(status: &ActionStatus) -> &'static str {
    match status {
        ActionStatus::Completed => ICON_COMPLETED,
        ActionStatus::Scheduled => ICON_SCHEDULED,
        _ => "",
    }
}

fn body_lines(action: &Action, street: Option<&str>) -> Vec<BodyLine> {
    let mut lines = vec![BodyLine::Title(action.name.clone())];
    if let Some(vendor) = &action.vendor {
        if let Some(name) = vendor.vendor_name.as_deref().filter(|s| !s.is_empty()) {
            lines.push(BodyLine::VendorName(name.to_string()));
        }
        if let Some(phone) = vendor.phone_number.as_deref().filter(|s| !s.is_empty()) {
            lines.push(BodyLine::Phone(phone.to_string()));
        }
    }
    if let Some(street) = street.filter(|s| !s.is_empty()) {
        lines.push(BodyLine::Street(street.to_string()));
    }
    let status = match action.status.as_str() {
        "" => "Unknown",
        s => s,
    };
    lines.push(BodyLine::Status(status.to_string()));
    if let Some(window) = action.arrival_window() {
        lines.push(BodyLine::Arrival(window));
    }
    lines
}

/// Truncate or right-pad `text` to exactly `width` display columns.
pub fn fit_width(text: &str, width: usize) -> String {
    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push_str(&" ".repeat(width.saturating_sub(out.width())));
    out
}
