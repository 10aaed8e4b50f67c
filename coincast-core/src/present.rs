//! Presentation adapter — pure reshaping of pipeline output for display.
//!
//! Charts want f64 point vectors with padded axis bounds; tables want
//! formatted strings keyed by date. No I/O, no failure modes.

use crate::domain::{ForecastTable, MergedForecastTable, PriceSeries};
use chrono::NaiveDate;

/// A single line series ready for a chart widget: x is days since the
/// series origin, y is the plotted value.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSeries {
    pub origin: NaiveDate,
    pub points: Vec<(f64, f64)>,
    pub x_bounds: [f64; 2],
    pub y_bounds: [f64; 2],
}

/// Forecast chart data: point estimate plus the uncertainty band.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastChart {
    pub origin: NaiveDate,
    pub estimate: Vec<(f64, f64)>,
    pub lower: Vec<(f64, f64)>,
    pub upper: Vec<(f64, f64)>,
    pub x_bounds: [f64; 2],
    pub y_bounds: [f64; 2],
}

/// One display row of the merged table: date key plus one formatted cell
/// per horizon. Absent estimates render as an empty cell.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayRow {
    pub date: String,
    pub yhat_short: String,
    pub yhat_long: String,
}

/// Shape a price series for the history chart.
pub fn price_chart(series: &PriceSeries) -> ChartSeries {
    let origin = series.first_date().unwrap_or(series.requested_start());
    let points: Vec<(f64, f64)> = series
        .points()
        .iter()
        .map(|p| ((p.date - origin).num_days() as f64, p.close))
        .collect();

    let (x_bounds, y_bounds) = bounds(points.iter().copied());

    ChartSeries {
        origin,
        points,
        x_bounds,
        y_bounds,
    }
}

/// Shape a forecast table for a chart with an uncertainty band.
pub fn forecast_chart(table: &ForecastTable) -> ForecastChart {
    let origin = table.first_date().unwrap_or_default();

    let x = |d: NaiveDate| (d - origin).num_days() as f64;
    let estimate: Vec<(f64, f64)> = table.points.iter().map(|p| (x(p.date), p.estimate)).collect();
    let lower: Vec<(f64, f64)> = table.points.iter().map(|p| (x(p.date), p.lower)).collect();
    let upper: Vec<(f64, f64)> = table.points.iter().map(|p| (x(p.date), p.upper)).collect();

    // Bounds must cover the band, not just the estimate line
    let (x_bounds, y_bounds) = bounds(
        estimate
            .iter()
            .chain(&lower)
            .chain(&upper)
            .copied(),
    );

    ForecastChart {
        origin,
        estimate,
        lower,
        upper,
        x_bounds,
        y_bounds,
    }
}

/// Shape the merged table for tabular display, date as the display key.
pub fn merged_rows(table: &MergedForecastTable) -> Vec<DisplayRow> {
    table
        .rows
        .iter()
        .map(|r| DisplayRow {
            date: r.date.to_string(),
            yhat_short: r.yhat_short.map(|v| format!("{v:.2}")).unwrap_or_default(),
            yhat_long: r.yhat_long.map(|v| format!("{v:.2}")).unwrap_or_default(),
        })
        .collect()
}

/// Axis bounds with 5% vertical padding around the data extent.
fn bounds(points: impl Iterator<Item = (f64, f64)>) -> ([f64; 2], [f64; 2]) {
    let mut x_max = 0.0_f64;
    let mut y_min = f64::INFINITY;
    let mut y_max = f64::NEG_INFINITY;

    for (x, y) in points {
        x_max = x_max.max(x);
        y_min = y_min.min(y);
        y_max = y_max.max(y);
    }

    if !y_min.is_finite() {
        return ([0.0, 1.0], [0.0, 1.0]);
    }

    let padding = (y_max - y_min).abs() * 0.05;
    ([0.0, x_max.max(1.0)], [y_min - padding, y_max + padding])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ForecastPoint, MergedRow, PricePoint};
    use chrono::Duration;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn price_chart_x_is_day_offset() {
        let series = PriceSeries::from_points(
            "BTC-USD",
            d(2024, 1, 1),
            vec![
                PricePoint { date: d(2024, 1, 1), close: 100.0 },
                PricePoint { date: d(2024, 1, 4), close: 104.0 },
            ],
        );

        let chart = price_chart(&series);
        assert_eq!(chart.points, vec![(0.0, 100.0), (3.0, 104.0)]);
        assert_eq!(chart.x_bounds, [0.0, 3.0]);
        assert!(chart.y_bounds[0] < 100.0 && chart.y_bounds[1] > 104.0);
    }

    #[test]
    fn forecast_chart_bounds_cover_band() {
        let table = ForecastTable {
            horizon_days: 30,
            points: (0..5)
                .map(|i| ForecastPoint {
                    date: d(2024, 1, 1) + Duration::days(i),
                    estimate: 100.0,
                    lower: 80.0,
                    upper: 120.0,
                })
                .collect(),
        };

        let chart = forecast_chart(&table);
        assert!(chart.y_bounds[0] < 80.0);
        assert!(chart.y_bounds[1] > 120.0);
        assert_eq!(chart.estimate.len(), 5);
        assert_eq!(chart.lower.len(), 5);
    }

    #[test]
    fn merged_rows_blank_for_absent() {
        let table = MergedForecastTable {
            short_horizon: 30,
            long_horizon: 365,
            rows: vec![
                MergedRow { date: d(2024, 1, 1), yhat_short: Some(123.456), yhat_long: None },
                MergedRow { date: d(2024, 1, 2), yhat_short: None, yhat_long: Some(7.0) },
            ],
        };

        let rows = merged_rows(&table);
        assert_eq!(rows[0].date, "2024-01-01");
        assert_eq!(rows[0].yhat_short, "123.46");
        assert_eq!(rows[0].yhat_long, "");
        assert_eq!(rows[1].yhat_short, "");
        assert_eq!(rows[1].yhat_long, "7.00");
    }

    #[test]
    fn empty_series_safe_bounds() {
        let series = PriceSeries::from_points("BTC-USD", d(2024, 1, 1), vec![]);
        let chart = price_chart(&series);
        assert_eq!(chart.y_bounds, [0.0, 1.0]);
    }
}
