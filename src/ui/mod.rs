pub mod calendar_view;
pub mod card;
pub mod layout;
pub mod plain;
mod status_bar;
mod theme;

use crate::app::state::AppState;
use ratatui::prelude::*;
use ratatui::widgets::{Paragraph, Wrap};
use theme::Theme;

const TITLE: &str = "Calendar";
const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    let app_layout = layout::compute_layout(area);

    render_header(frame, app_layout.header);
    if let Some(view) = state.view() {
        calendar_view::render(frame, app_layout.body, state, view);
    } else if let Some(msg) = state.error() {
        render_error(frame, app_layout.body, msg);
    } else {
        render_loading(frame, app_layout.body, state.tick_count);
    }
    status_bar::render(frame, app_layout.status_bar, state);
}

fn render_header(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(TITLE, Theme::header())).centered(),
        Line::from(Span::styled(
            "─".repeat(area.width as usize),
            Theme::rule(),
        )),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

/// Vertically centered single block of text.
fn centered_rect(area: Rect, height: u16) -> Rect {
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect::new(area.x, y, area.width, height.min(area.height))
}

fn render_loading(frame: &mut Frame, area: Rect, tick: u64) {
    let glyph = SPINNER_FRAMES[(tick as usize) % SPINNER_FRAMES.len()];
    let line = Line::from(vec![
        Span::styled(glyph, Theme::spinner()),
        Span::styled(" Loading", Theme::muted()),
    ])
    .centered();
    frame.render_widget(Paragraph::new(line), centered_rect(area, 1));
}

fn render_error(frame: &mut Frame, area: Rect, message: &str) {
    let paragraph = Paragraph::new(Line::from(Span::styled(
        message.to_string(),
        Theme::error_text(),
    )))
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, centered_rect(area, 2));
}
