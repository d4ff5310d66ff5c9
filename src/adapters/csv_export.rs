//! CSV export of report tables.

use crate::domain::dimension::DimensionRow;
use crate::domain::error::JournalError;
use std::path::Path;

/// Writes dimension report rows to `path` for spreadsheet use.
pub fn write_dimension_report(path: &Path, rows: &[DimensionRow]) -> Result<(), JournalError> {
    let mut writer = csv::Writer::from_path(path).map_err(|e| JournalError::Journal {
        reason: format!("failed to open {}: {}", path.display(), e),
    })?;

    writer
        .write_record([
            "id",
            "name",
            "total_pnl",
            "trade_count",
            "win_rate",
            "avg_pnl",
            "profit_factor",
        ])
        .map_err(write_error)?;

    for row in rows {
        writer
            .write_record([
                row.id.as_str(),
                row.name.as_str(),
                &format!("{:.2}", row.total_pnl),
                &row.trade_count.to_string(),
                &format!("{:.2}", row.win_rate),
                &format!("{:.2}", row.avg_pnl),
                &format_profit_factor(row.profit_factor),
            ])
            .map_err(write_error)?;
    }

    writer.flush()?;
    Ok(())
}

fn format_profit_factor(pf: f64) -> String {
    if pf.is_infinite() {
        "inf".to_string()
    } else {
        format!("{:.2}", pf)
    }
}

fn write_error(e: csv::Error) -> JournalError {
    JournalError::Journal {
        reason: format!("CSV write error: {}", e),
    }
}
