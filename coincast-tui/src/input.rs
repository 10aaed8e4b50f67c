//! Keyboard input dispatch — global keys first, then the active panel.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::{AppState, Panel, SetupField};

/// Handle a key event.
pub fn handle_key(app: &mut AppState, key: KeyEvent) {
    // Only handle key press events (Windows sends both Press and Release).
    if key.kind != KeyEventKind::Press {
        return;
    }

    // 1. Global keys (always available).
    match key.code {
        KeyCode::Char('q') => {
            app.running = false;
            return;
        }
        KeyCode::Char('1') => { app.active_panel = Panel::Setup; return; }
        KeyCode::Char('2') => { app.active_panel = Panel::History; return; }
        KeyCode::Char('3') => { app.active_panel = Panel::ForecastShort; return; }
        KeyCode::Char('4') => { app.active_panel = Panel::ForecastLong; return; }
        KeyCode::Char('5') => { app.active_panel = Panel::Table; return; }
        KeyCode::Char('6') | KeyCode::Char('?') => { app.active_panel = Panel::Help; return; }
        KeyCode::Tab => {
            if key.modifiers.contains(KeyModifiers::SHIFT) {
                app.active_panel = app.active_panel.prev();
            } else {
                app.active_panel = app.active_panel.next();
            }
            return;
        }
        KeyCode::BackTab => {
            app.active_panel = app.active_panel.prev();
            return;
        }
        // Run and export work from any panel — they are the dashboard's
        // two actions.
        KeyCode::Char('r') => {
            app.run_forecast();
            return;
        }
        KeyCode::Char('x') => {
            app.export_merged();
            return;
        }
        _ => {}
    }

    // 2. Panel-specific keys.
    match app.active_panel {
        Panel::Setup => handle_setup_key(app, key),
        Panel::Table => handle_table_key(app, key),
        // Chart panels are display-only
        Panel::History | Panel::ForecastShort | Panel::ForecastLong | Panel::Help => {}
    }
}

fn handle_setup_key(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Down | KeyCode::Char('j') => {
            app.setup_field = app.setup_field.next();
        }
        KeyCode::Up | KeyCode::Char('k') => {
            app.setup_field = app.setup_field.prev();
        }
        KeyCode::Left | KeyCode::Char('h') => adjust(app, -1),
        KeyCode::Right | KeyCode::Char('l') => adjust(app, 1),
        KeyCode::Enter => app.run_forecast(),
        _ => {}
    }
}

fn adjust(app: &mut AppState, delta: i64) {
    match app.setup_field {
        SetupField::Symbol => app.cycle_symbol(delta),
        field => app.adjust_date(field, delta),
    }
}

fn handle_table_key(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Down | KeyCode::Char('j') => app.scroll_table(1),
        KeyCode::Up | KeyCode::Char('k') => app.scroll_table(-1),
        KeyCode::PageDown => app.scroll_table(20),
        KeyCode::PageUp => app.scroll_table(-20),
        KeyCode::Char('g') | KeyCode::Home => app.scroll_table_top(),
        KeyCode::Char('G') | KeyCode::End => app.scroll_table_bottom(),
        _ => {}
    }
}
