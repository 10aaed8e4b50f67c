//! Pipeline orchestration — load → forecast ×2 → merge.
//!
//! One run per user interaction. The run is fail-fast: the first error
//! aborts it with no retries and no partial results; the next interaction
//! starts a fresh run. The two horizon forecasts share no state and run as
//! parallel tasks joined before the merge.

use crate::data::{DataError, HistoryLoader, PriceProvider};
use crate::domain::{ForecastTable, MergedForecastTable, PriceSeries};
use crate::forecast::{forecast, FittedModel, ForecastError};
use crate::merge::merge;
use chrono::NaiveDate;
use std::sync::Arc;
use thiserror::Error;

/// Any failure of a pipeline run.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Data(#[from] DataError),

    #[error(transparent)]
    Forecast(#[from] ForecastError),
}

/// Everything one run produces, consumed read-only by the frontends.
#[derive(Debug, Clone)]
pub struct PipelineOutcome {
    pub series: Arc<PriceSeries>,
    pub forecast_short: ForecastTable,
    pub model_short: FittedModel,
    pub forecast_long: ForecastTable,
    pub model_long: FittedModel,
    pub merged: MergedForecastTable,
}

/// Execute a full run for one `(symbol, start)` selection.
pub fn run_pipeline<P: PriceProvider>(
    loader: &mut HistoryLoader<P>,
    symbol: &str,
    start: NaiveDate,
    horizons: (u32, u32),
) -> Result<PipelineOutcome, PipelineError> {
    let series = loader.load(symbol, start)?;
    run_forecasts(series, horizons)
}

/// As [`run_pipeline`] but with an explicit "today" for the load window.
pub fn run_pipeline_as_of<P: PriceProvider>(
    loader: &mut HistoryLoader<P>,
    symbol: &str,
    start: NaiveDate,
    today: NaiveDate,
    horizons: (u32, u32),
) -> Result<PipelineOutcome, PipelineError> {
    let series = loader.load_as_of(symbol, start, today)?;
    run_forecasts(series, horizons)
}

fn run_forecasts(
    series: Arc<PriceSeries>,
    (short_days, long_days): (u32, u32),
) -> Result<PipelineOutcome, PipelineError> {
    // Independent fits over the same history; joined before the merge so
    // failure semantics match the sequential formulation.
    let (short, long) = rayon::join(
        || forecast(&series, short_days),
        || forecast(&series, long_days),
    );
    let (forecast_short, model_short) = short?;
    let (forecast_long, model_long) = long?;

    let merged = merge(&forecast_short, &forecast_long);

    Ok(PipelineOutcome {
        series,
        forecast_short,
        model_short,
        forecast_long,
        model_long,
        merged,
    })
}
