use crate::calendar::Treatment;
use ratatui::style::{Color, Modifier, Style};

pub struct Theme;

impl Theme {
    pub const TEXT_PRIMARY: Color = Color::Rgb(230, 230, 230);
    pub const TEXT_MUTED: Color = Color::Rgb(117, 117, 117);
    pub const BORDER_DIM: Color = Color::Rgb(90, 90, 90);
    pub const ACCENT_GREEN: Color = Color::Rgb(0, 180, 125);
    pub const SPINNER: Color = Color::Rgb(80, 120, 255);

    pub const CARD_COMPLETED: Color = Color::Rgb(0x00, 0xB4, 0x7D);
    pub const CARD_SCHEDULED: Color = Color::Rgb(0x00, 0x6A, 0x4B);
    pub const CARD_UNSCHEDULED: Color = Color::Rgb(0x01, 0x16, 0x38);
    pub const CARD_DEFAULT: Color = Color::Rgb(0x84, 0x8F, 0xA5);

    pub fn card_bg(treatment: Treatment) -> Color {
        match treatment {
            Treatment::Completed => Self::CARD_COMPLETED,
            Treatment::Scheduled => Self::CARD_SCHEDULED,
            Treatment::Unscheduled => Self::CARD_UNSCHEDULED,
            Treatment::Default => Self::CARD_DEFAULT,
        }
    }

    pub fn card(treatment: Treatment) -> Style {
        Style::default().fg(Color::White).bg(Self::card_bg(treatment))
    }

    pub fn card_title(treatment: Treatment) -> Style {
        Self::card(treatment).add_modifier(Modifier::BOLD)
    }

    pub fn header() -> Style {
        Style::default()
            .fg(Self::TEXT_PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    pub fn rule() -> Style {
        Style::default().fg(Self::BORDER_DIM)
    }

    pub fn month_header() -> Style {
        Style::default()
            .fg(Self::TEXT_PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    pub fn gutter_label() -> Style {
        Style::default()
            .fg(Self::TEXT_MUTED)
            .add_modifier(Modifier::BOLD)
    }

    pub fn gutter_day() -> Style {
        Style::default()
            .fg(Self::TEXT_PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    pub fn gutter_icon() -> Style {
        Style::default().fg(Self::ACCENT_GREEN)
    }

    pub fn empty_month() -> Style {
        Style::default()
            .fg(Self::TEXT_MUTED)
            .add_modifier(Modifier::BOLD)
    }

    pub fn muted() -> Style {
        Style::default().fg(Self::TEXT_MUTED)
    }

    pub fn error_text() -> Style {
        Style::default().fg(Color::Red)
    }

    pub fn spinner() -> Style {
        Style::default().fg(Self::SPINNER).add_modifier(Modifier::BOLD)
    }

    pub fn status_bar() -> Style {
        Style::default().fg(Color::White).bg(Color::DarkGray)
    }

    pub fn status_bar_accent() -> Style {
        Style::default().fg(Self::ACCENT_GREEN).bg(Color::DarkGray)
    }

    pub fn scrollbar_thumb() -> Style {
        Style::default().fg(Self::TEXT_MUTED)
    }

    pub fn scrollbar_track() -> Style {
        Style::default().fg(Self::BORDER_DIM)
    }
}
