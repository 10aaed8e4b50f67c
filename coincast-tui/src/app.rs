//! Application state — single-owner, main-thread only.
//!
//! Every user interaction triggers a full synchronous pipeline run; there
//! is no worker thread and no cancellation. A long fit blocks the UI until
//! it completes, and the next interaction starts a fresh run.

use chrono::{Datelike, NaiveDate};
use coincast_core::data::{HistoryLoader, PriceProvider};
use coincast_core::pipeline::{run_pipeline, PipelineOutcome};
use coincast_core::{export, DashboardConfig};

/// Which panel is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    Setup,
    History,
    ForecastShort,
    ForecastLong,
    Table,
    Help,
}

impl Panel {
    pub fn index(self) -> usize {
        match self {
            Panel::Setup => 0,
            Panel::History => 1,
            Panel::ForecastShort => 2,
            Panel::ForecastLong => 3,
            Panel::Table => 4,
            Panel::Help => 5,
        }
    }

    pub fn from_index(i: usize) -> Option<Self> {
        match i {
            0 => Some(Panel::Setup),
            1 => Some(Panel::History),
            2 => Some(Panel::ForecastShort),
            3 => Some(Panel::ForecastLong),
            4 => Some(Panel::Table),
            5 => Some(Panel::Help),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Panel::Setup => "Setup",
            Panel::History => "History",
            Panel::ForecastShort => "Forecast 30d",
            Panel::ForecastLong => "Forecast 365d",
            Panel::Table => "Table",
            Panel::Help => "Help",
        }
    }

    pub fn next(self) -> Panel {
        Panel::from_index((self.index() + 1) % 6).unwrap()
    }

    pub fn prev(self) -> Panel {
        Panel::from_index((self.index() + 5) % 6).unwrap()
    }
}

/// Status message severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warning,
    Error,
}

/// Which setup row the cursor is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetupField {
    Symbol,
    Year,
    Month,
    Day,
}

impl SetupField {
    pub fn next(self) -> Self {
        match self {
            SetupField::Symbol => SetupField::Year,
            SetupField::Year => SetupField::Month,
            SetupField::Month => SetupField::Day,
            SetupField::Day => SetupField::Symbol,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            SetupField::Symbol => SetupField::Day,
            SetupField::Year => SetupField::Symbol,
            SetupField::Month => SetupField::Year,
            SetupField::Day => SetupField::Month,
        }
    }
}

/// All TUI state.
pub struct AppState {
    pub running: bool,
    pub active_panel: Panel,
    pub config: DashboardConfig,
    pub loader: HistoryLoader<Box<dyn PriceProvider>>,

    // Setup selection
    pub symbol_idx: usize,
    pub start_date: NaiveDate,
    pub setup_field: SetupField,

    // Latest completed run, if any
    pub outcome: Option<PipelineOutcome>,

    // Table panel scroll offset
    pub table_scroll: usize,

    pub status_message: Option<(String, StatusLevel)>,
}

impl AppState {
    pub fn new(config: DashboardConfig, provider: Box<dyn PriceProvider>) -> Self {
        let loader = HistoryLoader::new(provider, config.cache_capacity);
        let start_date = config.default_start;
        Self {
            running: true,
            active_panel: Panel::Setup,
            config,
            loader,
            symbol_idx: 0,
            start_date,
            setup_field: SetupField::Symbol,
            outcome: None,
            table_scroll: 0,
            status_message: None,
        }
    }

    pub fn selected_symbol(&self) -> &str {
        &self.config.symbols[self.symbol_idx]
    }

    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Info));
    }

    pub fn set_warning(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Warning));
    }

    pub fn set_error(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Error));
    }

    /// Cycle the symbol selector.
    pub fn cycle_symbol(&mut self, delta: i64) {
        let n = self.config.symbols.len() as i64;
        self.symbol_idx = ((self.symbol_idx as i64 + delta).rem_euclid(n)) as usize;
    }

    /// Adjust the field under the date cursor, clamping to a valid date.
    pub fn adjust_date(&mut self, field: SetupField, delta: i64) {
        match field {
            SetupField::Symbol => {}
            SetupField::Day => {
                // Day arithmetic wraps across months naturally
                self.start_date += chrono::Duration::days(delta);
            }
            SetupField::Year => {
                let y = self.start_date.year() + delta as i32;
                self.start_date = clamped_ymd(y, self.start_date.month(), self.start_date.day());
            }
            SetupField::Month => {
                let total = self.start_date.month0() as i64 + delta;
                let y = self.start_date.year() + total.div_euclid(12) as i32;
                let m = total.rem_euclid(12) as u32 + 1;
                self.start_date = clamped_ymd(y, m, self.start_date.day());
            }
        }
    }

    /// Run the pipeline for the current selection. Blocks until done.
    pub fn run_forecast(&mut self) {
        let symbol = self.selected_symbol().to_string();
        let start = self.start_date;
        let horizons = self.config.horizons();

        self.set_status(format!("Fetching {symbol} history and fitting models…"));

        match run_pipeline(&mut self.loader, &symbol, start, horizons) {
            Ok(outcome) => {
                let points = outcome.series.len();
                self.outcome = Some(outcome);
                self.table_scroll = 0;
                self.set_status(format!(
                    "{symbol}: {points} daily closes loaded, forecasts ready"
                ));
                self.active_panel = Panel::History;
            }
            Err(e) => {
                self.outcome = None;
                self.set_error(format!("Run failed: {e}"));
            }
        }
    }

    /// Export the merged table of the latest run.
    pub fn export_merged(&mut self) {
        let Some(outcome) = &self.outcome else {
            self.set_warning("Nothing to export — run a forecast first (press r)");
            return;
        };

        let path = self.config.export_path.clone();
        match export::export_csv(&outcome.merged, &path) {
            Ok(()) => self.set_status(format!("Exported {} rows to {}", outcome.merged.len(), path.display())),
            Err(e) => self.set_error(format!("Export failed: {e}")),
        }
    }

    /// Scroll the merged table, clamped to its length.
    pub fn scroll_table(&mut self, delta: i64) {
        let max = self
            .outcome
            .as_ref()
            .map(|o| o.merged.len().saturating_sub(1))
            .unwrap_or(0);
        let next = self.table_scroll as i64 + delta;
        self.table_scroll = next.clamp(0, max as i64) as usize;
    }

    pub fn scroll_table_top(&mut self) {
        self.table_scroll = 0;
    }

    pub fn scroll_table_bottom(&mut self) {
        self.table_scroll = self
            .outcome
            .as_ref()
            .map(|o| o.merged.len().saturating_sub(1))
            .unwrap_or(0);
    }
}

/// Build a date, clamping the day to the target month's length.
fn clamped_ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    (0..4)
        .find_map(|back| NaiveDate::from_ymd_opt(year, month, day.saturating_sub(back).max(1)))
        .unwrap_or_else(|| NaiveDate::from_ymd_opt(year, month, 1).unwrap())
}
