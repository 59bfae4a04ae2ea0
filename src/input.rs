use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::{App, AppMode};

/// Step used by the +/- interval keys.
const INTERVAL_STEP_MS: i64 = 250;

/// Handle a single key input event.
pub fn handle_input(app: &mut App, key: KeyEvent) {
    match app.mode {
        AppMode::Normal => handle_normal_mode(app, key),
        AppMode::Help => handle_help_mode(app, key),
    }
}

fn handle_normal_mode(app: &mut App, key: KeyEvent) {
    match key.code {
        // ── Quit ──
        KeyCode::F(10) | KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.should_quit = true;
        }

        // ── Help ──
        KeyCode::F(1) | KeyCode::Char('?') | KeyCode::Char('h') => app.mode = AppMode::Help,

        // ── Z/z — pause/freeze updates ──
        KeyCode::Char('z') | KeyCode::Char('Z') => app.paused = !app.paused,

        // ── Ctrl+L — force refresh (unpause) ──
        KeyCode::Char('l') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.paused = false;
        }

        // ── g — toggle the history chart panel ──
        KeyCode::Char('g') => app.show_charts = !app.show_charts,

        // ── +/- — refresh interval ──
        KeyCode::Char('+') | KeyCode::Char('=') => app.adjust_interval(-INTERVAL_STEP_MS),
        KeyCode::Char('-') => app.adjust_interval(INTERVAL_STEP_MS),

        _ => {}
    }
}

fn handle_help_mode(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::F(1) | KeyCode::Char('?') | KeyCode::Char('q') => {
            app.mode = AppMode::Normal;
        }
        _ => {}
    }
}
