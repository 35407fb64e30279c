use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Title row, rule, and a blank spacer.
pub const HEADER_HEIGHT: u16 = 3;
pub const STATUS_BAR_HEIGHT: u16 = 1;

pub struct AppLayout {
    pub header: Rect,
    pub body: Rect,
    pub status_bar: Rect,
}

pub fn compute_layout(area: Rect) -> AppLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),     // Header
            Constraint::Min(1),                    // Calendar
            Constraint::Length(STATUS_BAR_HEIGHT), // Status bar
        ])
        .split(area);

    AppLayout {
        header: chunks[0],
        body: chunks[1],
        status_bar: chunks[2],
    }
}

/// Rows available to the calendar body for a terminal of `height` rows.
pub fn body_height(height: u16) -> u16 {
    height.saturating_sub(HEADER_HEIGHT + STATUS_BAR_HEIGHT).max(1)
}
