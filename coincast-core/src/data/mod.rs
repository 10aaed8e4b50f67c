//! Data acquisition — providers, memoizing loader, history cache.

pub mod cache;
pub mod history;
pub mod provider;
pub mod synthetic;
pub mod yahoo;

pub use cache::{HistoryCache, HistoryKey};
pub use history::HistoryLoader;
pub use provider::{DataError, DataSource, FetchResult, PriceProvider, RawQuote};
pub use synthetic::SyntheticProvider;
pub use yahoo::YahooProvider;
