//! Price provider trait and structured error types.
//!
//! The PriceProvider trait abstracts over data sources (Yahoo Finance,
//! synthetic) so the loader can swap implementations and tests can run
//! without the network.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Raw daily quote from a provider, before canonicalization.
///
/// Providers hand back OHLC-style rows; only the close survives into the
/// canonical series. A missing close is `NaN` and is dropped by the loader.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RawQuote {
    pub date: NaiveDate,
    pub close: f64,
}

/// Structured error types for history loading.
///
/// Designed to be displayable in both CLI and TUI contexts.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("start date {start} is in the future")]
    StartDateInFuture { start: NaiveDate },

    #[error("network unreachable: {0}")]
    NetworkUnreachable(String),

    #[error("rate limited by provider (retry after {retry_after_secs}s)")]
    RateLimited { retry_after_secs: u64 },

    #[error("response format changed: {0}")]
    ResponseFormatChanged(String),

    #[error("symbol not found: {symbol}")]
    SymbolNotFound { symbol: String },

    #[error("no price history for '{symbol}' from {start}")]
    DataUnavailable { symbol: String, start: NaiveDate },
}

/// Result of a successful fetch for a single symbol.
#[derive(Debug, Clone)]
pub struct FetchResult {
    pub symbol: String,
    pub quotes: Vec<RawQuote>,
    pub source: DataSource,
}

/// Where the data came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DataSource {
    YahooFinance,
    Synthetic,
}

/// Trait for daily price sources.
///
/// Implementations handle the specifics of one source. The memoizing
/// loader sits above this trait — providers don't know about the cache.
/// Fetches are single attempts: a failure propagates to the caller and
/// aborts the current pipeline run rather than being retried.
pub trait PriceProvider: Send + Sync {
    /// Human-readable name of this provider.
    fn name(&self) -> &str;

    /// Fetch daily quotes for a symbol over `[start, end]` inclusive.
    fn fetch(
        &self,
        symbol: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<FetchResult, DataError>;
}

impl<P: PriceProvider + ?Sized> PriceProvider for Box<P> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn fetch(
        &self,
        symbol: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<FetchResult, DataError> {
        (**self).fetch(symbol, start, end)
    }
}
