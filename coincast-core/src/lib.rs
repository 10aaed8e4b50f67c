//! Coincast Core — the crypto forecast dashboard pipeline.
//!
//! This crate contains everything below the presentation surface:
//! - Domain types (price series, forecast tables, merged summary)
//! - Data acquisition (Yahoo Finance provider, synthetic provider,
//!   memoizing history loader with a bounded LRU cache)
//! - Forecast engine (additive trend + weekly seasonality, residual-scaled
//!   prediction intervals)
//! - Forecast merger (outer join of two horizons on date)
//! - Presentation adapter (chart points and display rows)
//! - Export sink (CSV spreadsheet)
//! - Pipeline orchestration (load → forecast ×2 → merge, fail-fast)

pub mod config;
pub mod data;
pub mod domain;
pub mod export;
pub mod forecast;
pub mod merge;
pub mod pipeline;
pub mod present;

pub use config::DashboardConfig;
pub use pipeline::{run_pipeline, run_pipeline_as_of, PipelineError, PipelineOutcome};
