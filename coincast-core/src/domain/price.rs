//! PricePoint and PriceSeries — the canonical daily close history.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Daily closing price for a single symbol on a single day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub date: NaiveDate,
    pub close: f64,
}

impl PricePoint {
    /// A point is usable when its close is a finite positive number.
    pub fn is_valid(&self) -> bool {
        self.close.is_finite() && self.close > 0.0
    }
}

/// Canonical price history for one `(symbol, start date)` request.
///
/// Invariants, enforced by [`PriceSeries::from_points`]:
/// - dates strictly increasing (no duplicates)
/// - every close finite and positive (invalid rows dropped at load time)
///
/// A series is immutable once produced; a change of symbol or start date
/// yields a fresh series rather than mutating this one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceSeries {
    symbol: String,
    start: NaiveDate,
    points: Vec<PricePoint>,
}

impl PriceSeries {
    /// Build a series from raw points: drops invalid closes, sorts by date,
    /// and deduplicates keeping the first occurrence per date.
    pub fn from_points(
        symbol: impl Into<String>,
        start: NaiveDate,
        points: Vec<PricePoint>,
    ) -> Self {
        let mut points: Vec<PricePoint> = points.into_iter().filter(PricePoint::is_valid).collect();
        points.sort_by_key(|p| p.date);
        points.dedup_by_key(|p| p.date);
        Self {
            symbol: symbol.into(),
            start,
            points,
        }
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// The start date the series was requested for (not necessarily the
    /// first trading date — the source may have no bars that early).
    pub fn requested_start(&self) -> NaiveDate {
        self.start
    }

    pub fn points(&self) -> &[PricePoint] {
        &self.points
    }

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

    pub fn last_close(&self) -> Option<f64> {
        self.points.last().map(|p| p.close)
    }

    pub fn closes(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|p| p.close)
    }

    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.points.iter().map(|p| p.date)
    }
}
