//! Top-level UI layout — one active panel plus a status bar.

pub mod forecast_panel;
pub mod help_panel;
pub mod history_panel;
pub mod setup_panel;
pub mod status_bar;
pub mod table_panel;

use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::widgets::{Block, Borders};
use ratatui::Frame;

use crate::app::{AppState, Panel};
use crate::theme;

/// Draw the entire UI.
pub fn draw(f: &mut Frame, app: &AppState) {
    // Split: main area + 1-line status bar.
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(f.area());

    let main_area = chunks[0];
    let status_area = chunks[1];

    let panel = app.active_panel;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::panel_border(true))
        .title(format!(" {} [{}] ", panel.label(), panel.index() + 1))
        .title_style(theme::panel_title(true));

    let inner = block.inner(main_area);
    f.render_widget(block, main_area);

    match panel {
        Panel::Setup => setup_panel::render(f, inner, app),
        Panel::History => history_panel::render(f, inner, app),
        Panel::ForecastShort => forecast_panel::render_short(f, inner, app),
        Panel::ForecastLong => forecast_panel::render_long(f, inner, app),
        Panel::Table => table_panel::render(f, inner, app),
        Panel::Help => help_panel::render(f, inner, app),
    }

    status_bar::render(f, status_area, app);
}
