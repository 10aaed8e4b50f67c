//! Panel 6 — Help: keyboard reference.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::AppState;
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, _app: &AppState) {
    let entries: &[(&str, &str)] = &[
        ("1-6 / Tab", "switch panel"),
        ("r / Enter", "run the forecast pipeline for the current selection"),
        ("x", "export the merged table as CSV"),
        ("j/k or ↑/↓", "move the setup cursor · scroll the table"),
        ("h/l or ←/→", "adjust the selected setup field"),
        ("g / G", "jump to table top / bottom"),
        ("q", "quit"),
    ];

    let mut lines = vec![Line::from(""), Line::from(Span::styled("  Keys", theme::accent())), Line::from("")];
    for (key, desc) in entries {
        lines.push(Line::from(vec![
            Span::styled(format!("  {key:<14}"), theme::selected_row()),
            Span::styled(*desc, theme::secondary()),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "  A run fetches history, fits both horizons, and refreshes every panel.",
        theme::muted(),
    )));
    lines.push(Line::from(Span::styled(
        "  Runs block the interface until they complete.",
        theme::muted(),
    )));

    f.render_widget(Paragraph::new(lines), area);
}
