use crate::app::effect::Effect;
use crate::app::event::AppEvent;
use crate::app::state::*;
use crossterm::event::{
    Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent, MouseEventKind,
};

const WHEEL_LINES: usize = 3;

/// Called once when the view opens; starts the single calendar load.
pub fn mount(state: &mut AppState) -> Vec<Effect> {
    if state.begin_loading() {
        vec![Effect::StartLoad]
    } else {
        vec![]
    }
}

pub fn handle_event(state: &mut AppState, event: AppEvent) -> Vec<Effect> {
    match event {
        AppEvent::Terminal(cevent) => handle_terminal(state, cevent),
        AppEvent::CalendarLoaded(result) => {
            state.finish_loading(result);
            vec![]
        }
        AppEvent::Tick => {
            state.tick_count = state.tick_count.wrapping_add(1);
            // Only the spinner animates.
            if state.is_loading() {
                state.dirty = true;
            }
            vec![]
        }
    }
}

fn handle_terminal(state: &mut AppState, event: CEvent) -> Vec<Effect> {
    match event {
        CEvent::Key(key) => handle_key(state, key),
        CEvent::Mouse(mouse) => {
            handle_mouse(state, mouse);
            vec![]
        }
        CEvent::Resize(_, height) => {
            state.set_terminal_height(height);
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(state: &mut AppState, key: KeyEvent) -> Vec<Effect> {
    if key.kind != KeyEventKind::Press {
        return vec![];
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return vec![Effect::Quit];
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => vec![Effect::Quit],
        KeyCode::Up | KeyCode::Char('k') => {
            state.scroll_up(1);
            vec![]
        }
        KeyCode::Down | KeyCode::Char('j') => {
            state.scroll_down(1);
            vec![]
        }
        KeyCode::PageUp => {
            let page = state.page_size();
            state.scroll_up(page);
            vec![]
        }
        KeyCode::PageDown | KeyCode::Char(' ') => {
            let page = state.page_size();
            state.scroll_down(page);
            vec![]
        }
        KeyCode::Home | KeyCode::Char('g') => {
            state.scroll_home();
            vec![]
        }
        KeyCode::End | KeyCode::Char('G') => {
            state.scroll_end();
            vec![]
        }
        _ => vec![],
    }
}

fn handle_mouse(state: &mut AppState, mouse: MouseEvent) {
    match mouse.kind {
        MouseEventKind::ScrollUp => state.scroll_up(WHEEL_LINES),
        MouseEventKind::ScrollDown => state.scroll_down(WHEEL_LINES),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::sort::tests::action;
    use crate::config::AppConfig;
    use crate::loader::{LoadError, LoadedCalendar, FETCH_ERROR_MESSAGE};

    fn key(code: KeyCode) -> AppEvent {
        AppEvent::Terminal(CEvent::Key(KeyEvent::new(code, KeyModifiers::NONE)))
    }

    fn ready_state(n: usize) -> AppState {
        let mut state = AppState::new(AppConfig::default());
        state.set_terminal_height(12);
        mount(&mut state);
        let events = (0..n)
            .map(|i| action(&format!("e{}", i), Some("2025-05-05")))
            .collect();
        handle_event(
            &mut state,
            AppEvent::CalendarLoaded(Ok(LoadedCalendar {
                customer: None,
                events,
            })),
        );
        state
    }

    #[test]
    fn test_mount_requests_exactly_one_load() {
        let mut state = AppState::new(AppConfig::default());
        assert_eq!(mount(&mut state), vec![Effect::StartLoad]);
        assert!(mount(&mut state).is_empty());
    }

    #[test]
    fn test_failed_load_hides_spinner() {
        let mut state = AppState::new(AppConfig::default());
        mount(&mut state);
        handle_event(&mut state, AppEvent::CalendarLoaded(Err(LoadError::Status(502))));
        assert!(!state.is_loading());
        assert_eq!(state.error(), Some(FETCH_ERROR_MESSAGE));

        state.dirty = false;
        handle_event(&mut state, AppEvent::Tick);
        assert!(!state.dirty);
    }

    #[test]
    fn test_tick_redraws_while_loading() {
        let mut state = AppState::new(AppConfig::default());
        mount(&mut state);
        state.dirty = false;
        handle_event(&mut state, AppEvent::Tick);
        assert!(state.dirty);
        assert_eq!(state.tick_count, 1);
    }

    #[test]
    fn test_quit_keys() {
        let mut state = AppState::new(AppConfig::default());
        assert_eq!(handle_event(&mut state, key(KeyCode::Char('q'))), vec![Effect::Quit]);
        assert_eq!(handle_event(&mut state, key(KeyCode::Esc)), vec![Effect::Quit]);
        let ctrl_c = AppEvent::Terminal(CEvent::Key(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL,
        )));
        assert_eq!(handle_event(&mut state, ctrl_c), vec![Effect::Quit]);
    }

    #[test]
    fn test_scroll_keys() {
        let mut state = ready_state(8);
        assert!(state.max_scroll() > 2);

        handle_event(&mut state, key(KeyCode::Down));
        handle_event(&mut state, key(KeyCode::Char('j')));
        assert_eq!(state.scroll_offset, 2);
        handle_event(&mut state, key(KeyCode::Up));
        assert_eq!(state.scroll_offset, 1);
        handle_event(&mut state, key(KeyCode::End));
        assert_eq!(state.scroll_offset, state.max_scroll());
        handle_event(&mut state, key(KeyCode::Home));
        assert_eq!(state.scroll_offset, 0);
        handle_event(&mut state, key(KeyCode::PageDown));
        assert_eq!(state.scroll_offset, state.page_size().min(state.max_scroll()));
    }

    #[test]
    fn test_mouse_wheel_scrolls() {
        let mut state = ready_state(8);
        let wheel = |kind| {
            AppEvent::Terminal(CEvent::Mouse(MouseEvent {
                kind,
                column: 0,
                row: 0,
                modifiers: KeyModifiers::NONE,
            }))
        };
        handle_event(&mut state, wheel(MouseEventKind::ScrollDown));
        assert_eq!(state.scroll_offset, WHEEL_LINES);
        handle_event(&mut state, wheel(MouseEventKind::ScrollUp));
        assert_eq!(state.scroll_offset, 0);
    }

    #[test]
    fn test_resize_updates_viewport() {
        let mut state = ready_state(2);
        handle_event(&mut state, AppEvent::Terminal(CEvent::Resize(80, 40)));
        assert_eq!(
            state.viewport_height,
            crate::ui::layout::body_height(40) as usize
        );
    }
}
