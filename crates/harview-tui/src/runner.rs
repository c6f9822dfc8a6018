//! Main TUI runner - entry point and event loop
//!
//! - `run`: Sets up the terminal, runs the loop, restores the terminal
//! - `run_loop`: Draw, poll, update until the app quits
//! - `process_message`: Feed a message and its follow-ups through `update`

use harview_app::config::Settings;
use harview_app::{update, AppState, Message};
use harview_core::prelude::*;
use harview_core::HarDocument;

use super::{event, render, terminal};

/// Run the TUI over a loaded document until the user quits
pub fn run(document: HarDocument, settings: Settings) -> Result<()> {
    // Install panic hook for terminal restoration
    terminal::install_panic_hook();

    let mut state = AppState::new(document, settings);
    info!(
        entries = state.table.len(),
        mode = %state.mode(),
        "Starting TUI"
    );

    // Initialize terminal
    let mut term = ratatui::init();

    let result = run_loop(&mut term, &mut state);

    // Restore terminal
    ratatui::restore();

    match &result {
        Ok(()) => info!("TUI exited cleanly"),
        Err(e) => error!("TUI exited with error: {e}"),
    }
    result
}

/// Main event loop
fn run_loop(terminal: &mut ratatui::DefaultTerminal, state: &mut AppState) -> Result<()> {
    while !state.should_quit() {
        // Render
        terminal
            .draw(|frame| render::view(frame, state))
            .map_err(|e| Error::terminal(format!("failed to draw frame: {e}")))?;

        // Handle terminal events
        if let Some(message) = event::poll()? {
            process_message(state, message);
        }
    }

    Ok(())
}

/// Process a message through the TEA update loop, including follow-ups
pub fn process_message(state: &mut AppState, message: Message) {
    let mut msg = Some(message);
    while let Some(m) = msg {
        trace!("Processing {m:?}");
        msg = update(state, m).message;
    }
}
