use crate::calendar::{group_by_month, MonthGroup, MonthOrder};
use crate::config::AppConfig;
use crate::loader::{LoadError, LoadedCalendar};
use crate::model::{Action, Customer};
use crate::ui::calendar_view;
use crate::ui::layout;
use tracing::{debug, error};

/// A loaded calendar, grouped for display.
#[derive(Debug, Clone)]
pub struct CalendarView {
    pub customer: Option<Customer>,
    pub events: Vec<Action>,
    pub groups: Vec<MonthGroup>,
}

impl CalendarView {
    pub fn new(loaded: LoadedCalendar, order: MonthOrder) -> Self {
        let groups = group_by_month(&loaded.events, order);
        Self {
            customer: loaded.customer,
            events: loaded.events,
            groups,
        }
    }

    pub fn street(&self) -> Option<&str> {
        self.customer.as_ref().and_then(|c| c.street.as_deref())
    }
}

/// Screen lifecycle: `Idle -> Loading -> {Ready | Failed}`. Ready and Failed
/// are terminal.
#[derive(Debug)]
pub enum ScreenState {
    Idle,
    Loading,
    Ready(CalendarView),
    Failed(String),
}

pub struct AppState {
    pub config: AppConfig,
    pub screen: ScreenState,
    pub scroll_offset: usize,
    pub viewport_height: usize,
    pub tick_count: u64,
    pub should_quit: bool,
    pub dirty: bool,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            screen: ScreenState::Idle,
            scroll_offset: 0,
            viewport_height: 0,
            tick_count: 0,
            should_quit: false,
            dirty: true,
        }
    }

    /// `Idle -> Loading`. Returns false if a load was already started.
    pub fn begin_loading(&mut self) -> bool {
        if !matches!(self.screen, ScreenState::Idle) {
            return false;
        }
        self.screen = ScreenState::Loading;
        self.dirty = true;
        true
    }

    /// `Loading -> Ready | Failed`. Results arriving in any other state are
    /// dropped.
    pub fn finish_loading(&mut self, result: Result<LoadedCalendar, LoadError>) -> bool {
        if !matches!(self.screen, ScreenState::Loading) {
            debug!("ignoring calendar result outside of loading state");
            return false;
        }
        self.screen = match result {
            Ok(loaded) => ScreenState::Ready(CalendarView::new(loaded, self.config.ui.month_order)),
            Err(e) => {
                error!(error = %e, "Error fetching data");
                ScreenState::Failed(e.user_message().to_string())
            }
        };
        self.scroll_offset = 0;
        self.dirty = true;
        true
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.screen, ScreenState::Idle | ScreenState::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match &self.screen {
            ScreenState::Failed(msg) => Some(msg.as_str()),
            _ => None,
        }
    }

    pub fn view(&self) -> Option<&CalendarView> {
        match &self.screen {
            ScreenState::Ready(view) => Some(view),
            _ => None,
        }
    }

    pub fn set_terminal_height(&mut self, height: u16) {
        self.viewport_height = layout::body_height(height) as usize;
        self.scroll_offset = self.scroll_offset.min(self.max_scroll());
        self.dirty = true;
    }

    pub fn content_height(&self) -> usize {
        self.view().map(calendar_view::content_height).unwrap_or(0)
    }

    pub fn max_scroll(&self) -> usize {
        self.content_height().saturating_sub(self.viewport_height)
    }

    pub fn scroll_up(&mut self, lines: usize) {
        self.scroll_offset = self.scroll_offset.saturating_sub(lines);
        self.dirty = true;
    }

    pub fn scroll_down(&mut self, lines: usize) {
        self.scroll_offset = (self.scroll_offset + lines).min(self.max_scroll());
        self.dirty = true;
    }

    pub fn scroll_home(&mut self) {
        self.scroll_offset = 0;
        self.dirty = true;
    }

    pub fn scroll_end(&mut self) {
        self.scroll_offset = self.max_scroll();
        self.dirty = true;
    }

    pub fn page_size(&self) -> usize {
        self.viewport_height.saturating_sub(1).max(1)
    }

    pub fn status_line(&self) -> String {
        match &self.screen {
            ScreenState::Idle | ScreenState::Loading => "Loading...".to_string(),
            ScreenState::Failed(_) => "Failed".to_string(),
            ScreenState::Ready(view) => {
                let n = view.events.len();
                let months = view.groups.len();
                format!(
                    "{} event{} | {} month{}",
                    n,
                    if n == 1 { "" } else { "s" },
                    months,
                    if months == 1 { "" } else { "s" }
                )
            }
        }
    }
}
