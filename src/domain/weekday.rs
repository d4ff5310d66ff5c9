//! Day-of-week performance aggregation.

use crate::domain::trade::{parse_timestamp, Trade};
use chrono::Datelike;

/// Sun..Sat, matching `Weekday::num_days_from_sunday` indexing.
pub const WEEKDAY_LABELS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

#[derive(Debug, Clone, PartialEq)]
pub struct WeekdayRow {
    pub day: &'static str,
    /// Cumulative pnl, rounded to 2 decimal places.
    pub pnl: f64,
    pub trades: usize,
}

/// Buckets closed trades into the seven weekdays by exit timestamp.
///
/// Always returns exactly 7 rows, Sun through Sat. Trades that are open,
/// lack an exit timestamp or lack a pnl are excluded; an exit timestamp that
/// fails to parse skips that trade with a warning and leaves the rest of the
/// aggregation untouched.
pub fn weekday_performance(trades: &[Trade]) -> Vec<WeekdayRow> {
    let mut pnl = [0.0f64; 7];
    let mut counts = [0usize; 7];

    for trade in trades {
        if trade.is_open() {
            continue;
        }
        let Some(p) = trade.pnl else {
            continue;
        };
        let Some(raw) = trade.exit_time.as_deref() else {
            continue;
        };
        let Some(exit) = parse_timestamp(raw) else {
            eprintln!(
                "warning: trade {}: unparseable exit time {:?}, skipped",
                trade.id, raw
            );
            continue;
        };

        let idx = exit.weekday().num_days_from_sunday() as usize;
        pnl[idx] += p;
        counts[idx] += 1;
    }

    (0..7)
        .map(|i| WeekdayRow {
            day: WEEKDAY_LABELS[i],
            pnl: round2(pnl[i]),
            trades: counts[i],
        })
        .collect()
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}
