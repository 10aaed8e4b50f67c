//! Export sink — serialize the merged table to a CSV spreadsheet.
//!
//! Triggered only by explicit user action. Writes overwrite any existing
//! file at the destination.

use crate::domain::MergedForecastTable;
use std::path::Path;
use thiserror::Error;

/// Export failure.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("export write failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("csv encoding failed: {0}")]
    Csv(#[from] csv::Error),
}

/// Write the merged table to `path` as CSV.
///
/// Header columns are derived from the table's horizons
/// (`date,yhat_30d,yhat_365d` for the default pair); absent estimates
/// become empty cells.
pub fn export_csv(table: &MergedForecastTable, path: &Path) -> Result<(), ExportError> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record([
        "date".to_string(),
        format!("yhat_{}d", table.short_horizon),
        format!("yhat_{}d", table.long_horizon),
    ])?;

    for row in &table.rows {
        wtr.write_record([
            row.date.to_string(),
            row.yhat_short.map(|v| format!("{v:.6}")).unwrap_or_default(),
            row.yhat_long.map(|v| format!("{v:.6}")).unwrap_or_default(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
