use crate::loader::{LoadError, LoadedCalendar};
use crossterm::event::Event as CrosstermEvent;

#[derive(Debug)]
pub enum AppEvent {
    /// Terminal input event
    Terminal(CrosstermEvent),

    /// Outcome of the calendar request
    CalendarLoaded(Result<LoadedCalendar, LoadError>),

    /// Tick for UI refresh
    Tick,
}
