//! Forecast output types — per-horizon tables and the merged summary view.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One forecast row: point estimate plus uncertainty bounds for a date.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ForecastPoint {
    pub date: NaiveDate,
    /// Point estimate (`yhat`). Unconstrained — a fitted trend may
    /// extrapolate below zero for long horizons.
    pub estimate: f64,
    pub lower: f64,
    pub upper: f64,
}

/// Forecast over the historical range plus `horizon_days` future days,
/// tagged with the horizon it was generated for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastTable {
    pub horizon_days: u32,
    pub points: Vec<ForecastPoint>,
}

impl ForecastTable {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn first_date(&self) -> Option<NaiveDate> {
        self.points.first().map(|p| p.date)
    }

    pub fn last_date(&self) -> Option<NaiveDate> {
        self.points.last().map(|p| p.date)
    }
}

/// One row of the merged two-horizon table.
///
/// `None` means the date is outside that horizon's range (outer alignment),
/// never zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MergedRow {
    pub date: NaiveDate,
    pub yhat_short: Option<f64>,
    pub yhat_long: Option<f64>,
}

/// Outer-joined summary of two forecast tables: unique ascending dates,
/// one estimate column per horizon, bounds dropped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MergedForecastTable {
    pub short_horizon: u32,
    pub long_horizon: u32,
    pub rows: Vec<MergedRow>,
}

impl MergedForecastTable {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn last_date(&self) -> Option<NaiveDate> {
        self.rows.last().map(|r| r.date)
    }
}
