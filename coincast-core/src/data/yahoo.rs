//! Yahoo Finance price provider.
//!
//! Fetches daily bars from Yahoo's v8 chart API and keeps the close column.
//! Yahoo Finance has no official API and is subject to unannounced format
//! changes; parse failures surface as `ResponseFormatChanged`.
//!
//! A fetch is a single attempt. Failures propagate to the caller and abort
//! the current run — the synthetic provider is the offline fallback.

use super::provider::{DataError, DataSource, FetchResult, PriceProvider, RawQuote};
use chrono::NaiveDate;
use serde::Deserialize;
use std::time::Duration;

/// Yahoo Finance v8 chart API response.
#[derive(Debug, Deserialize)]
struct ChartResponse {
    chart: ChartResult,
}

#[derive(Debug, Deserialize)]
struct ChartResult {
    result: Option<Vec<ChartData>>,
    error: Option<ChartError>,
}

#[derive(Debug, Deserialize)]
struct ChartError {
    code: String,
    description: String,
}

#[derive(Debug, Deserialize)]
struct ChartData {
    timestamp: Option<Vec<i64>>,
    indicators: Indicators,
}

#[derive(Debug, Deserialize)]
struct Indicators {
    quote: Vec<QuoteData>,
}

#[derive(Debug, Deserialize)]
struct QuoteData {
    close: Vec<Option<f64>>,
}

/// Yahoo Finance price provider.
pub struct YahooProvider {
    client: reqwest::blocking::Client,
}

impl YahooProvider {
    pub fn new() -> Self {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent("Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36")
            .build()
            .expect("failed to build HTTP client");

        Self { client }
    }

    /// Build the chart API URL for a symbol and date range.
    fn chart_url(symbol: &str, start: NaiveDate, end: NaiveDate) -> String {
        let start_ts = start.and_hms_opt(0, 0, 0).unwrap().and_utc().timestamp();
        let end_ts = end.and_hms_opt(23, 59, 59).unwrap().and_utc().timestamp();
        format!(
            "https://query2.finance.yahoo.com/v8/finance/chart/{symbol}\
             ?period1={start_ts}&period2={end_ts}&interval=1d"
        )
    }

    /// Parse the chart API response into raw quotes.
    fn parse_response(symbol: &str, resp: ChartResponse) -> Result<Vec<RawQuote>, DataError> {
        let result = resp.chart.result.ok_or_else(|| {
            if let Some(err) = resp.chart.error {
                if err.code == "Not Found" {
                    DataError::SymbolNotFound {
                        symbol: symbol.to_string(),
                    }
                } else {
                    DataError::ResponseFormatChanged(format!("{}: {}", err.code, err.description))
                }
            } else {
                DataError::ResponseFormatChanged("empty result with no error".into())
            }
        })?;

        let data = result
            .into_iter()
            .next()
            .ok_or_else(|| DataError::ResponseFormatChanged("result array is empty".into()))?;

        let timestamps = data
            .timestamp
            .ok_or_else(|| DataError::ResponseFormatChanged("no timestamps".into()))?;

        let quote = data
            .indicators
            .quote
            .into_iter()
            .next()
            .ok_or_else(|| DataError::ResponseFormatChanged("no quote data".into()))?;

        let mut quotes = Vec::with_capacity(timestamps.len());

        for (i, &ts) in timestamps.iter().enumerate() {
            let date = chrono::DateTime::from_timestamp(ts, 0)
                .map(|dt| dt.naive_utc().date())
                .ok_or_else(|| {
                    DataError::ResponseFormatChanged(format!("invalid timestamp: {ts}"))
                })?;

            let close = quote.close.get(i).copied().flatten();

            // Skip holidays/non-trading days (all-null rows)
            match close {
                Some(c) => quotes.push(RawQuote { date, close: c }),
                None => continue,
            }
        }

        Ok(quotes)
    }
}

impl Default for YahooProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl PriceProvider for YahooProvider {
    fn name(&self) -> &str {
        "yahoo_finance"
    }

    fn fetch(
        &self,
        symbol: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<FetchResult, DataError> {
        let url = Self::chart_url(symbol, start, end);

        let resp = self.client.get(&url).send().map_err(|e| {
            DataError::NetworkUnreachable(e.to_string())
        })?;

        let status = resp.status();

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            let retry_after = resp
                .headers()
                .get("retry-after")
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.parse::<u64>().ok())
                .unwrap_or(60);
            return Err(DataError::RateLimited {
                retry_after_secs: retry_after,
            });
        }

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(DataError::SymbolNotFound {
                symbol: symbol.to_string(),
            });
        }

        if !status.is_success() {
            return Err(DataError::NetworkUnreachable(format!(
                "HTTP {status} for {symbol}"
            )));
        }

        let chart: ChartResponse = resp.json().map_err(|e| {
            DataError::ResponseFormatChanged(format!("failed to parse response for {symbol}: {e}"))
        })?;

        let quotes = Self::parse_response(symbol, chart)?;

        Ok(FetchResult {
            symbol: symbol.to_string(),
            quotes,
            source: DataSource::YahooFinance,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn chart_url_encodes_range() {
        let url = YahooProvider::chart_url("BTC-USD", d(2020, 1, 1), d(2020, 1, 31));
        assert!(url.contains("/v8/finance/chart/BTC-USD"));
        assert!(url.contains("period1=1577836800"));
        assert!(url.contains("interval=1d"));
    }

    #[test]
    fn parse_skips_null_closes() {
        let resp = ChartResponse {
            chart: ChartResult {
                result: Some(vec![ChartData {
                    timestamp: Some(vec![1577836800, 1577923200, 1578009600]),
                    indicators: Indicators {
                        quote: vec![QuoteData {
                            close: vec![Some(7200.17), None, Some(7344.88)],
                        }],
                    },
                }]),
                error: None,
            },
        };

        let quotes = YahooProvider::parse_response("BTC-USD", resp).unwrap();
        assert_eq!(quotes.len(), 2);
        assert_eq!(quotes[0].date, d(2020, 1, 1));
        assert_eq!(quotes[1].close, 7344.88);
    }

    #[test]
    fn parse_maps_not_found() {
        let resp = ChartResponse {
            chart: ChartResult {
                result: None,
                error: Some(ChartError {
                    code: "Not Found".into(),
                    description: "No data found, symbol may be delisted".into(),
                }),
            },
        };

        let err = YahooProvider::parse_response("NOPE-USD", resp).unwrap_err();
        assert!(matches!(err, DataError::SymbolNotFound { .. }));
    }

    #[test]
    fn parse_rejects_missing_timestamps() {
        let resp = ChartResponse {
            chart: ChartResult {
                result: Some(vec![ChartData {
                    timestamp: None,
                    indicators: Indicators { quote: vec![] },
                }]),
                error: None,
            },
        };

        let err = YahooProvider::parse_response("BTC-USD", resp).unwrap_err();
        assert!(matches!(err, DataError::ResponseFormatChanged(_)));
    }
}
