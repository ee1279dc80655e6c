/*
[INPUT]:  TuiConfig, log buffer handle, crossterm input events
[OUTPUT]: Ratatui-based TUI run loop and shared styles
[POS]:    TUI runtime loop and shared helpers
[UPDATE]: When changing the event loop or the shared palette
*/

use std::time::Duration;

use anyhow::Result;
use crossterm::event::Event as CrosstermEvent;
use ratatui::style::{Color, Modifier, Style};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use super::LogBufferHandle;
use super::app::AppState;
use super::events::handle_key_event;
use super::terminal::TerminalGuard;
use super::ui::draw_ui;
use crate::config::TuiConfig;

const INPUT_POLL_INTERVAL: Duration = Duration::from_millis(200);

enum UiEvent {
    Input(CrosstermEvent),
}

pub(crate) fn border_style() -> Style {
    Style::default().fg(Color::Magenta)
}

pub(crate) fn header_style() -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(Color::Cyan)
        .add_modifier(Modifier::BOLD)
}

pub(crate) fn key_style() -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(Color::Yellow)
        .add_modifier(Modifier::BOLD)
}

/// Run the to-do screen until the user quits.
///
/// The task list lives only as long as this call; nothing is persisted.
pub async fn run_tui(config: TuiConfig, log_buffer: LogBufferHandle) -> Result<()> {
    let mut terminal = TerminalGuard::new()?;
    let (event_tx, mut event_rx) = mpsc::unbounded_channel();
    let input_shutdown = CancellationToken::new();
    let input_shutdown_clone = input_shutdown.clone();

    let input_task = tokio::task::spawn_blocking(move || {
        while !input_shutdown_clone.is_cancelled() {
            if crossterm::event::poll(INPUT_POLL_INTERVAL).unwrap_or(false) {
                if let Ok(event) = crossterm::event::read() {
                    if event_tx.send(UiEvent::Input(event)).is_err() {
                        break;
                    }
                }
            }
        }
    });

    let mut app = AppState::new(&config, log_buffer);
    let mut tick = tokio::time::interval(config.tick_rate());
    let mut should_quit = false;
    info!(title = %config.title, "todo tui started");

    while !should_quit {
        terminal.draw(|frame| draw_ui(frame, &mut app))?;

        tokio::select! {
            _ = tick.tick() => {
                app.on_tick();
            }
            maybe_event = event_rx.recv() => {
                match maybe_event {
                    Some(UiEvent::Input(CrosstermEvent::Key(key))) => {
                        if handle_key_event(&mut app, key) {
                            should_quit = true;
                        }
                    }
                    Some(UiEvent::Input(CrosstermEvent::Resize(width, height))) => {
                        debug!(width, height, "terminal resized");
                    }
                    Some(_) => {}
                    None => should_quit = true,
                }
            }
        }
    }

    input_shutdown.cancel();
    if let Err(err) = input_task.await {
        debug!(error = %err, "input thread join failed");
    }
    info!(tasks = app.store.len(), "todo tui stopped");
    Ok(())
}
