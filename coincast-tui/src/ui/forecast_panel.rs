//! Panels 3 and 4 — Forecast charts: point estimate plus uncertainty band.

use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::symbols;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Axis, Chart, Dataset, GraphType, Paragraph};
use ratatui::Frame;

use coincast_core::domain::ForecastTable;
use coincast_core::present;

use crate::app::AppState;
use crate::theme;

pub fn render_short(f: &mut Frame, area: Rect, app: &AppState) {
    match &app.outcome {
        Some(outcome) => render_forecast(f, area, &outcome.forecast_short, outcome.series.symbol()),
        None => render_empty(f, area),
    }
}

pub fn render_long(f: &mut Frame, area: Rect, app: &AppState) {
    match &app.outcome {
        Some(outcome) => render_forecast(f, area, &outcome.forecast_long, outcome.series.symbol()),
        None => render_empty(f, area),
    }
}

fn render_forecast(f: &mut Frame, area: Rect, table: &ForecastTable, symbol: &str) {
    let chart_data = present::forecast_chart(table);

    let datasets = vec![
        Dataset::default()
            .name("upper")
            .marker(symbols::Marker::Braille)
            .style(Style::default().fg(theme::NEUTRAL))
            .graph_type(GraphType::Line)
            .data(&chart_data.upper),
        Dataset::default()
            .name("lower")
            .marker(symbols::Marker::Braille)
            .style(Style::default().fg(theme::NEUTRAL))
            .graph_type(GraphType::Line)
            .data(&chart_data.lower),
        Dataset::default()
            .name(format!("{symbol} +{}d", table.horizon_days))
            .marker(symbols::Marker::Braille)
            .style(Style::default().fg(theme::POSITIVE))
            .graph_type(GraphType::Line)
            .data(&chart_data.estimate),
    ];

    let first = table.first_date().map(|d| d.to_string()).unwrap_or_default();
    let last = table.last_date().map(|d| d.to_string()).unwrap_or_default();

    let chart = Chart::new(datasets)
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
                .title(Span::styled("Price", theme::muted()))
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
            "No forecast yet — press r to run the pipeline.",
            theme::muted(),
        )),
    ];
    f.render_widget(Paragraph::new(lines), area);
}
