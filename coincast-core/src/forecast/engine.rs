//! The forecast operation — fit a fresh model, predict over history plus
//! horizon.
//!
//! Each call fits from scratch; the 30-day and 365-day invocations share
//! nothing, so refitting the same history twice is deliberate redundancy
//! in exchange for fully independent forecasts.

use super::model::{FittedModel, TrainingFrame};
use crate::domain::{ForecastPoint, ForecastTable, PriceSeries};
use chrono::Duration;
use thiserror::Error;

/// Structured error types for the forecast engine.
#[derive(Debug, Error)]
pub enum ForecastError {
    #[error("insufficient data: need at least 2 points, have {have}")]
    InsufficientData { have: usize },

    #[error("model fit failed: {0}")]
    ModelFit(String),
}

/// Fit a model on the series and forecast `horizon_days` past its end.
///
/// `horizon_days` must be at least 1. The returned table covers every
/// historical date plus one entry per future calendar day, so its range is
/// exactly `[first historical date, last historical date + horizon_days]`.
/// Estimates are unconstrained reals — a downward trend may extrapolate
/// below zero; no clamping is applied.
pub fn forecast(
    series: &PriceSeries,
    horizon_days: u32,
) -> Result<(ForecastTable, FittedModel), ForecastError> {
    if series.len() < 2 {
        return Err(ForecastError::InsufficientData { have: series.len() });
    }

    let frame = TrainingFrame::from_series(series);
    let model = FittedModel::fit(&frame).map_err(ForecastError::ModelFit)?;

    let last = series.last_date().expect("series has at least 2 points");

    let mut points = Vec::with_capacity(series.len() + horizon_days as usize);

    for date in series.dates() {
        points.push(point_at(&model, date));
    }
    for offset in 1..=i64::from(horizon_days) {
        points.push(point_at(&model, last + Duration::days(offset)));
    }

    Ok((
        ForecastTable {
            horizon_days,
            points,
        },
        model,
    ))
}

fn point_at(model: &FittedModel, date: chrono::NaiveDate) -> ForecastPoint {
    let estimate = model.predict(date);
    let half_width = model.interval_half_width(date);
    ForecastPoint {
        date,
        estimate,
        lower: estimate - half_width,
        upper: estimate + half_width,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PricePoint;
    use chrono::NaiveDate;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn series(n: i64) -> PriceSeries {
        let points = (0..n)
            .map(|i| PricePoint {
                date: d(2024, 1, 1) + Duration::days(i),
                close: 100.0 + i as f64,
            })
            .collect();
        PriceSeries::from_points("BTC-USD", d(2024, 1, 1), points)
    }

    #[test]
    fn span_is_first_to_last_plus_horizon() {
        let s = series(60);
        let (table, _) = forecast(&s, 30).unwrap();

        assert_eq!(table.first_date(), s.first_date());
        assert_eq!(
            table.last_date(),
            Some(s.last_date().unwrap() + Duration::days(30))
        );
        assert_eq!(table.len(), 60 + 30);
    }

    #[test]
    fn future_axis_is_daily() {
        let s = series(10);
        let (table, _) = forecast(&s, 5).unwrap();

        let tail = &table.points[10..];
        let last_hist = s.last_date().unwrap();
        for (i, p) in tail.iter().enumerate() {
            assert_eq!(p.date, last_hist + Duration::days(i as i64 + 1));
        }
    }

    #[test]
    fn bounds_bracket_estimate() {
        let s = series(40);
        let (table, _) = forecast(&s, 30).unwrap();

        for p in &table.points {
            assert!(p.lower <= p.estimate);
            assert!(p.estimate <= p.upper);
        }
    }

    #[test]
    fn two_points_succeed() {
        let s = series(2);
        let (table, model) = forecast(&s, 30).unwrap();
        assert_eq!(table.len(), 32);
        assert_eq!(model.n_obs(), 2);
    }

    #[test]
    fn one_point_fails() {
        let s = series(1);
        let err = forecast(&s, 30).unwrap_err();
        assert!(matches!(err, ForecastError::InsufficientData { have: 1 }));
    }

    #[test]
    fn zero_points_fail() {
        let s = series(0);
        let err = forecast(&s, 30).unwrap_err();
        assert!(matches!(err, ForecastError::InsufficientData { have: 0 }));
    }

    #[test]
    fn horizons_are_independent() {
        let s = series(50);
        let (short, _) = forecast(&s, 30).unwrap();
        let (long, _) = forecast(&s, 365).unwrap();

        // Same model class, same history: historical estimates agree even
        // though each call refit from scratch.
        for (a, b) in short.points.iter().zip(&long.points).take(50) {
            assert_eq!(a.date, b.date);
            assert!((a.estimate - b.estimate).abs() < 1e-9);
        }
        assert_eq!(short.len() + 335, long.len());
    }

    #[test]
    fn negative_extrapolation_not_clamped() {
        // Steeply falling series: the long-horizon trend goes below zero
        let points = (0..30)
            .map(|i| PricePoint {
                date: d(2024, 1, 1) + Duration::days(i),
                close: 300.0 - 10.0 * i as f64,
            })
            .collect();
        let s = PriceSeries::from_points("DOGE-USD", d(2024, 1, 1), points);

        let (table, _) = forecast(&s, 365).unwrap();
        assert!(table.points.last().unwrap().estimate < 0.0);
    }
}
