//! Panel 5 — Table: scrollable merged forecast table.

use ratatui::layout::{Constraint, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Cell, Paragraph, Row, Table};
use ratatui::Frame;

use coincast_core::present;

use crate::app::AppState;
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let Some(outcome) = &app.outcome else {
        let lines = vec![
            Line::from(""),
            Line::from(""),
            Line::from(Span::styled(
                "No merged table yet — press r to run the pipeline.",
                theme::muted(),
            )),
        ];
        f.render_widget(Paragraph::new(lines), area);
        return;
    };

    let rows = present::merged_rows(&outcome.merged);
    let visible = area.height.saturating_sub(2) as usize;
    let offset = app.table_scroll.min(rows.len().saturating_sub(1));

    let header = Row::new(vec![
        Cell::from("date"),
        Cell::from(format!("yhat_{}d", outcome.merged.short_horizon)),
        Cell::from(format!("yhat_{}d", outcome.merged.long_horizon)),
    ])
    .style(theme::accent());

    let body: Vec<Row> = rows
        .iter()
        .skip(offset)
        .take(visible)
        .enumerate()
        .map(|(i, r)| {
            let style = if i == 0 {
                theme::selected_row()
            } else {
                theme::secondary()
            };
            Row::new(vec![
                Cell::from(r.date.clone()),
                Cell::from(r.yhat_short.clone()),
                Cell::from(r.yhat_long.clone()),
            ])
            .style(style)
        })
        .collect();

    let widths = [
        Constraint::Length(12),
        Constraint::Length(16),
        Constraint::Length(16),
    ];

    let table = Table::new(body, widths)
        .header(header)
        .footer(Row::new(vec![Cell::from(Span::styled(
            format!("row {}/{} · j/k scroll · g/G jump", offset + 1, rows.len()),
            theme::muted(),
        ))]));

    f.render_widget(table, area);
}
