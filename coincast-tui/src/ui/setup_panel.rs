//! Panel 1 — Setup: symbol selector, start-date picker, run summary.

use chrono::Datelike;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::{AppState, SetupField};
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let mut lines = vec![Line::from("")];

    lines.push(field_line(
        "Coin",
        &format!("‹ {} ›", app.selected_symbol()),
        app.setup_field == SetupField::Symbol,
    ));
    lines.push(Line::from(""));

    let date = app.start_date;
    lines.push(field_line(
        "Start year",
        &date.year().to_string(),
        app.setup_field == SetupField::Year,
    ));
    lines.push(field_line(
        "Start month",
        &format!("{:02}", date.month()),
        app.setup_field == SetupField::Month,
    ));
    lines.push(field_line(
        "Start day",
        &format!("{:02}", date.day()),
        app.setup_field == SetupField::Day,
    ));

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "  j/k select field · h/l adjust · r or Enter run · x export",
        theme::muted(),
    )));
    lines.push(Line::from(""));

    match &app.outcome {
        Some(outcome) => {
            let last_close = outcome.series.last_close().unwrap_or(f64::NAN);
            let last_date = outcome.series.last_date().unwrap();

            let short_last = outcome
                .forecast_short
                .points
                .last()
                .map(|p| p.estimate)
                .unwrap_or(f64::NAN);
            let long_last = outcome
                .forecast_long
                .points
                .last()
                .map(|p| p.estimate)
                .unwrap_or(f64::NAN);

            lines.push(Line::from(Span::styled(
                format!("  Last close   {last_close:>14.2}   ({last_date})"),
                theme::secondary(),
            )));
            lines.push(summary_line(
                format!("+{}d estimate", outcome.forecast_short.horizon_days),
                short_last,
                last_close,
            ));
            lines.push(summary_line(
                format!("+{}d estimate", outcome.forecast_long.horizon_days),
                long_last,
                last_close,
            ));
        }
        None => {
            lines.push(Line::from(Span::styled(
                "  No forecast yet — press r to run the pipeline.",
                theme::secondary(),
            )));
        }
    }

    f.render_widget(Paragraph::new(lines), area);
}

fn field_line(label: &str, value: &str, active: bool) -> Line<'static> {
    let marker = if active { "▸ " } else { "  " };
    let style = if active {
        theme::selected_row()
    } else {
        theme::secondary()
    };
    Line::from(vec![
        Span::styled(format!("{marker}{label:<12}"), style),
        Span::styled(value.to_string(), style),
    ])
}

fn summary_line(label: String, estimate: f64, reference: f64) -> Line<'static> {
    let delta = estimate - reference;
    Line::from(vec![
        Span::styled(format!("  {label:<13}"), theme::secondary()),
        Span::styled(
            format!("{estimate:>14.2}"),
            ratatui::style::Style::default().fg(theme::change_color(delta)),
        ),
    ])
}
