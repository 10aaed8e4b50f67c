//! Coincast CLI — run the forecast pipeline without the dashboard.
//!
//! Commands:
//! - `run` — fetch history, fit both horizons, print a summary and the
//!   tail of the merged table, optionally export it as CSV
//! - `symbols` — list the configured tickers

use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use coincast_core::data::{HistoryLoader, PriceProvider, SyntheticProvider, YahooProvider};
use coincast_core::export::export_csv;
use coincast_core::pipeline::run_pipeline;
use coincast_core::present;
use coincast_core::DashboardConfig;

#[derive(Parser)]
#[command(
    name = "coincast",
    about = "Coincast CLI — crypto price forecasting pipeline"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch history, fit both horizons, and print the merged forecast.
    Run {
        /// Ticker to forecast (e.g., BTC-USD). Must be in the configured set.
        #[arg(long)]
        symbol: String,

        /// Start date (YYYY-MM-DD). Defaults to the configured start.
        #[arg(long)]
        start: Option<String>,

        /// Short horizon in days.
        #[arg(long)]
        short: Option<u32>,

        /// Long horizon in days.
        #[arg(long)]
        long: Option<u32>,

        /// Export the merged table as CSV to this path.
        #[arg(long)]
        export: Option<PathBuf>,

        /// Offline mode: synthetic random-walk data instead of the network.
        #[arg(long, default_value_t = false)]
        synthetic: bool,

        /// Path to a TOML config file.
        #[arg(long)]
        config: Option<PathBuf>,

        /// How many trailing merged rows to print.
        #[arg(long, default_value_t = 10)]
        tail: usize,
    },
    /// List the configured tickers.
    Symbols {
        /// Path to a TOML config file.
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            symbol,
            start,
            short,
            long,
            export,
            synthetic,
            config,
            tail,
        } => run_cmd(symbol, start, short, long, export, synthetic, config, tail),
        Commands::Symbols { config } => symbols_cmd(config),
    }
}

fn load_config(path: Option<PathBuf>) -> Result<DashboardConfig> {
    match path {
        Some(p) => DashboardConfig::from_file(&p).map_err(anyhow::Error::msg),
        None => Ok(DashboardConfig::default()),
    }
}

#[allow(clippy::too_many_arguments)]
fn run_cmd(
    symbol: String,
    start: Option<String>,
    short: Option<u32>,
    long: Option<u32>,
    export: Option<PathBuf>,
    synthetic: bool,
    config: Option<PathBuf>,
    tail: usize,
) -> Result<()> {
    let config = load_config(config)?;

    if !config.symbols.iter().any(|s| s == &symbol) {
        bail!(
            "unsupported symbol '{symbol}' — configured: {}",
            config.symbols.join(", ")
        );
    }

    let start = match start {
        Some(s) => NaiveDate::parse_from_str(&s, "%Y-%m-%d")
            .with_context(|| format!("invalid start date '{s}' (expected YYYY-MM-DD)"))?,
        None => config.default_start,
    };

    let horizons = (
        short.unwrap_or(config.short_horizon_days),
        long.unwrap_or(config.long_horizon_days),
    );

    let provider: Box<dyn PriceProvider> = if synthetic {
        Box::new(SyntheticProvider::new())
    } else {
        Box::new(YahooProvider::new())
    };

    let mut loader = HistoryLoader::new(provider, config.cache_capacity);

    println!(
        "Fetching {symbol} from {start} via {}...",
        loader.provider_name()
    );

    let outcome = run_pipeline(&mut loader, &symbol, start, horizons)?;

    let first = outcome.series.first_date().unwrap();
    let last = outcome.series.last_date().unwrap();
    println!(
        "Loaded {} daily closes ({first} to {last}), last close {:.2}",
        outcome.series.len(),
        outcome.series.last_close().unwrap()
    );

    let short_last = outcome.forecast_short.points.last().unwrap();
    let long_last = outcome.forecast_long.points.last().unwrap();
    println!(
        "+{}d estimate: {:.2}  [{:.2}, {:.2}]",
        outcome.forecast_short.horizon_days, short_last.estimate, short_last.lower, short_last.upper
    );
    println!(
        "+{}d estimate: {:.2}  [{:.2}, {:.2}]",
        outcome.forecast_long.horizon_days, long_last.estimate, long_last.lower, long_last.upper
    );

    let rows = present::merged_rows(&outcome.merged);
    println!(
        "\nMerged table: {} rows · showing last {}",
        rows.len(),
        tail.min(rows.len())
    );
    println!(
        "{:<12} {:>14} {:>14}",
        "date",
        format!("yhat_{}d", outcome.merged.short_horizon),
        format!("yhat_{}d", outcome.merged.long_horizon)
    );
    for row in rows.iter().rev().take(tail).rev() {
        println!("{:<12} {:>14} {:>14}", row.date, row.yhat_short, row.yhat_long);
    }

    if let Some(path) = export {
        export_csv(&outcome.merged, &path)?;
        println!("\nExported {} rows to {}", outcome.merged.len(), path.display());
    }

    Ok(())
}

fn symbols_cmd(config: Option<PathBuf>) -> Result<()> {
    let config = load_config(config)?;
    for symbol in &config.symbols {
        println!("{symbol}");
    }
    Ok(())
}
