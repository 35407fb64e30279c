mod app;
mod calendar;
mod cli;
mod config;
mod loader;
mod logging;
mod model;
mod ui;

use crate::app::effect::Effect;
use crate::app::event::AppEvent;
use crate::app::handler;
use crate::app::state::{AppState, CalendarView};
use crate::loader::{spawn_load, CalendarClient, LoadHandle};
use crate::logging::LogTarget;
use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, EventStream},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::prelude::*;
use std::io;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    let mut cfg = config::load_config(cli.config.as_deref())?;
    cli.apply(&mut cfg);

    if cli.plain {
        logging::init(&cfg.logging, LogTarget::Stderr)?;
        let code = run_plain(cfg).await?;
        std::process::exit(code);
    }

    if let Some(path) = logging::init(&cfg.logging, LogTarget::File)? {
        info!(log_file = %path.display(), "logging to file");
    }

    // Install panic hook to restore terminal
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        original_hook(info);
    }));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let result = run_app(&mut terminal, cfg).await;

    // Restore terminal
    restore_terminal()?;

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture)?;
    Ok(())
}

/// Fetch once and print the grouped calendar. Returns the process exit code.
async fn run_plain(cfg: config::AppConfig) -> Result<i32> {
    let client = CalendarClient::new(&cfg.api).context("Failed to create HTTP client")?;
    match client.load().await {
        Ok(loaded) => {
            let view = CalendarView::new(loaded, cfg.ui.month_order);
            print!("{}", ui::plain::render(&view));
            Ok(0)
        }
        Err(e) => {
            eprintln!("{}", e.user_message());
            Ok(1)
        }
    }
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    cfg: config::AppConfig,
) -> Result<()> {
    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<AppEvent>();

    let client = CalendarClient::new(&cfg.api).context("Failed to create HTTP client")?;
    let tick_rate = Duration::from_millis(cfg.ui.tick_rate_ms.max(10));
    let mut state = AppState::new(cfg);
    state.set_terminal_height(terminal.size()?.height);
    let mut load: Option<LoadHandle> = None;

    // Spawn terminal input task
    let term_tx = event_tx.clone();
    tokio::spawn(async move {
        let mut reader = EventStream::new();
        loop {
            match reader.next().await {
                Some(Ok(event)) => {
                    if term_tx.send(AppEvent::Terminal(event)).is_err() {
                        break;
                    }
                }
                Some(Err(_)) => break,
                None => break,
            }
        }
    });

    // Spawn tick task
    let tick_tx = event_tx.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(tick_rate);
        loop {
            interval.tick().await;
            if tick_tx.send(AppEvent::Tick).is_err() {
                break;
            }
        }
    });

    info!(endpoint = client.endpoint(), "opening calendar view");
    let mut effects = handler::mount(&mut state);

    loop {
        for effect in effects.drain(..) {
            match effect {
                Effect::StartLoad => {
                    load = Some(spawn_load(client.clone(), event_tx.clone()));
                }
                Effect::Quit => {
                    state.should_quit = true;
                }
            }
        }

        if state.should_quit {
            break;
        }

        // Conditional render (only if dirty)
        if state.dirty {
            terminal.draw(|f| ui::render(f, &state))?;
            state.dirty = false;
        }

        let Some(event) = event_rx.recv().await else {
            break;
        };
        effects = handler::handle_event(&mut state, event);
    }

    if let Some(handle) = load.take() {
        if !handle.is_finished() {
            info!("closing with calendar request still in flight");
        }
        handle.cancel();
    }

    Ok(())
}
