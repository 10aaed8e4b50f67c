//! Domain types — price history and forecast tables.

pub mod forecast;
pub mod price;

pub use forecast::{ForecastPoint, ForecastTable, MergedForecastTable, MergedRow};
pub use price::{PricePoint, PriceSeries};
