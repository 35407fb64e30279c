use crate::app::state::{AppState, CalendarView};
use crate::ui::card::{fit_width, BodyLine, Card};
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState};

pub const NO_EVENTS_TEXT: &str = "No events available.";
pub const EMPTY_MONTH_TEXT: &str = "No Maintenance Scheduled";

/// Columns taken by the date gutter left of each card.
const GUTTER_WIDTH: usize = 6;

/// Every line of the scrollable calendar body, laid out for `width` columns.
pub fn body_lines(view: &CalendarView, width: usize) -> Vec<Line<'static>> {
    let mut lines: Vec<Line<'static>> = Vec::new();
    let card_width = width.saturating_sub(GUTTER_WIDTH).max(1);

    for group in &view.groups {
        lines.push(Line::from(Span::styled(group.label(), Theme::month_header())));
        lines.push(Line::from(""));

        if group.actions.is_empty() {
            lines.push(Line::from(Span::styled(
                fit_width(&format!(" {}", EMPTY_MONTH_TEXT), width),
                Theme::empty_month(),
            )));
            lines.push(Line::from(""));
            continue;
        }

        for action in &group.actions {
            let card = Card::new(action, view.street());
            push_card(&mut lines, &card, card_width);
            lines.push(Line::from(""));
        }
    }

    if view.events.is_empty() {
        lines.push(Line::from(Span::styled(NO_EVENTS_TEXT, Theme::muted())));
    }

    lines
}

fn push_card(lines: &mut Vec<Line<'static>>, card: &Card, card_width: usize) {
    for row in 0..card.height() {
        let gutter_style = match row {
            0 => Theme::gutter_label(),
            1 => Theme::gutter_day(),
            _ => Theme::gutter_icon(),
        };
        let gutter = Span::styled(
            format!(" {:^4} ", card.gutter_row(row)),
            gutter_style,
        );

        let (text, style) = match card.body.get(row) {
            Some(line @ BodyLine::Title(_)) => (line.text(), Theme::card_title(card.treatment)),
            Some(line @ BodyLine::Phone(_)) => (line.text(), Theme::card_title(card.treatment)),
            Some(line) => (line.text(), Theme::card(card.treatment)),
            None => (String::new(), Theme::card(card.treatment)),
        };
        let body = Span::styled(fit_width(&format!(" {}", text), card_width), style);

        lines.push(Line::from(vec![gutter, body]));
    }
}

pub fn content_height(view: &CalendarView) -> usize {
    body_lines(view, GUTTER_WIDTH + 1).len()
}

pub fn render(frame: &mut Frame, area: Rect, state: &AppState, view: &CalendarView) {
    let inner = Rect::new(
        area.x + 1,
        area.y,
        area.width.saturating_sub(2),
        area.height,
    );

    let lines = body_lines(view, inner.width as usize);
    let total = lines.len();
    let available_height = inner.height as usize;
    let offset = state
        .scroll_offset
        .min(total.saturating_sub(available_height));

    let visible: Vec<Line> = lines.into_iter().skip(offset).take(available_height).collect();
    frame.render_widget(Paragraph::new(visible), inner);

    if total > available_height {
        let mut scrollbar_state =
            ScrollbarState::new(total.saturating_sub(available_height)).position(offset);

        let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
            .thumb_symbol("┃")
            .track_symbol(Some("│"))
            .thumb_style(Theme::scrollbar_thumb())
            .track_style(Theme::scrollbar_track());

        frame.render_stateful_widget(scrollbar, area, &mut scrollbar_state);
    }
}
