use crate::app::state::AppState;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

const KEY_HINTS: &str = " ↑↓ scroll  PgUp/PgDn page  Home/End top/bottom  q quit ";

/// Host part of the endpoint, or the raw string if it does not parse.
pub fn endpoint_host(endpoint: &str) -> String {
    reqwest::Url::parse(endpoint)
        .ok()
        .and_then(|url| url.host_str().map(str::to_string))
        .unwrap_or_else(|| endpoint.to_string())
}

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let mut parts: Vec<Span> = vec![
        Span::styled(" maintcal ", Theme::status_bar_accent()),
        Span::styled(
            format!(" {} ", endpoint_host(&state.config.api.endpoint)),
            Theme::status_bar(),
        ),
        Span::styled(format!("| {} ", state.status_line()), Theme::status_bar()),
    ];

    // Pad to fill remaining space
    let used: usize = parts.iter().map(|s| s.content.width()).sum();
    let remaining = (area.width as usize).saturating_sub(used + KEY_HINTS.width());
    parts.push(Span::styled(" ".repeat(remaining), Theme::status_bar()));
    parts.push(Span::styled(KEY_HINTS, Theme::status_bar_accent()));

    frame.render_widget(Paragraph::new(Line::from(parts)), area);
}
