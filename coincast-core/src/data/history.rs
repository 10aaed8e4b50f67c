//! HistoryLoader — fetch, canonicalize, and memoize daily close history.
//!
//! Sits above the provider trait: a load goes to the LRU cache first, then
//! to the provider. The raw OHLC-style rows are reduced to the close column
//! and normalized into a `PriceSeries` (sorted, deduplicated, invalid rows
//! dropped).

use super::cache::{HistoryCache, HistoryKey};
use super::provider::{DataError, PriceProvider};
use crate::domain::{PricePoint, PriceSeries};
use chrono::NaiveDate;
use std::sync::Arc;

/// Loads canonical price history through a provider, memoizing results per
/// exact `(symbol, start date)` pair.
pub struct HistoryLoader<P> {
    provider: P,
    cache: HistoryCache,
}

impl<P: PriceProvider> HistoryLoader<P> {
    pub fn new(provider: P, cache_capacity: usize) -> Self {
        Self {
            provider,
            cache: HistoryCache::new(cache_capacity),
        }
    }

    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }

    /// Load daily closes for `symbol` from `start` through today.
    ///
    /// Guarantees a non-empty series with strictly increasing dates and
    /// positive closes, or fails with a `DataError`. Repeated calls with
    /// the same inputs return the cached series without touching the
    /// provider.
    pub fn load(
        &mut self,
        symbol: &str,
        start: NaiveDate,
    ) -> Result<Arc<PriceSeries>, DataError> {
        self.load_as_of(symbol, start, chrono::Local::now().date_naive())
    }

    /// Like [`load`](Self::load) but with an explicit "today", so tests and
    /// replays are not wall-clock dependent.
    pub fn load_as_of(
        &mut self,
        symbol: &str,
        start: NaiveDate,
        today: NaiveDate,
    ) -> Result<Arc<PriceSeries>, DataError> {
        if start > today {
            return Err(DataError::StartDateInFuture { start });
        }

        let key = HistoryKey {
            symbol: symbol.to_string(),
            start,
        };

        if let Some(series) = self.cache.get(&key) {
            return Ok(series);
        }

        let fetched = self.provider.fetch(symbol, start, today)?;

        let points: Vec<PricePoint> = fetched
            .quotes
            .into_iter()
            .map(|q| PricePoint {
                date: q.date,
                close: q.close,
            })
            .collect();

        let series = PriceSeries::from_points(symbol, start, points);

        if series.is_empty() {
            return Err(DataError::DataUnavailable {
                symbol: symbol.to_string(),
                start,
            });
        }

        let series = Arc::new(series);
        self.cache.insert(key, Arc::clone(&series));
        Ok(series)
    }
}
