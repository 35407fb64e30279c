//! Plain-text rendering of a loaded calendar for `--plain` output.

use crate::app::state::CalendarView;
use crate::ui::calendar_view::{EMPTY_MONTH_TEXT, NO_EVENTS_TEXT};
use crate::ui::card::Card;
use std::fmt::Write;

pub fn render(view: &CalendarView) -> String {
    let mut out = String::from("Calendar\n========\n");

    for group in &view.groups {
        let label = group.label();
        let _ = writeln!(out, "\n{}\n{}", label, "-".repeat(label.chars().count()));
        if group.actions.is_empty() {
            let _ = writeln!(out, "  {}", EMPTY_MONTH_TEXT);
            continue;
        }
        for action in &group.actions {
            let card = Card::new(action, view.street());
            for row in 0..card.height() {
                let body = card.body.get(row).map(|l| l.text()).unwrap_or_default();
                let line = format!("  {:<4} | {}", card.gutter_row(row), body);
                let _ = writeln!(out, "{}", line.trim_end());
            }
            out.push('\n');
        }
    }

    if view.events.is_empty() {
        let _ = writeln!(out, "\n{}", NO_EVENTS_TEXT);
    }
    out
}
