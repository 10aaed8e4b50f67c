//! Panel 2 — History: daily close line chart.

use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::symbols;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Axis, Chart, Dataset, GraphType, Paragraph};
use ratatui::Frame;

use coincast_core::present;

use crate::app::AppState;
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let Some(outcome) = &app.outcome else {
        render_empty(f, area);
        return;
    };

    let chart_data = present::price_chart(&outcome.series);
    let label = format!(
        "{} close ({} points)",
        outcome.series.symbol(),
        outcome.series.len()
    );

    let dataset = Dataset::default()
        .name(label)
        .marker(symbols::Marker::Braille)
        .style(Style::default().fg(theme::ACCENT))
        .graph_type(GraphType::Line)
        .data(&chart_data.points);

    let first = chart_data.origin.to_string();
    let last = outcome
        .series
        .last_date()
        .map(|d| d.to_string())
        .unwrap_or_default();

    let chart = Chart::new(vec![dataset])
        .x_axis(
            Axis::default()
                .title(Span::styled("Date", theme::muted()))
                .style(theme::muted())
                .bounds(chart_data.x_bounds)
                .labels(vec![
                    Span::styled(first, theme::muted()),
                    Span::styled(last, theme::muted()),
                ]),
        )
        .y_axis(
            Axis::default()
                .title(Span::styled("Close", theme::muted()))
                .style(theme::muted())
                .bounds(chart_data.y_bounds)
                .labels(vec![
                    Span::styled(format!("{:.0}", chart_data.y_bounds[0]), theme::muted()),
                    Span::styled(format!("{:.0}", chart_data.y_bounds[1]), theme::muted()),
                ]),
        );

    f.render_widget(chart, area);
}

fn render_empty(f: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(""),
        Line::from(""),
        Line::from(Span::styled(
            "No history loaded. Pick a coin and start date in Setup (1), then press r.",
            theme::muted(),
        )),
    ];
    f.render_widget(Paragraph::new(lines), area);
}
