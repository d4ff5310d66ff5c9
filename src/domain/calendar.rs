//! Daily calendar statistics for the heatmap view.

use crate::domain::trade::{parse_timestamp, Trade};
use chrono::NaiveDate;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DayStats {
    pub pnl: f64,
    pub trade_count: usize,
}

/// Collapses closed trades into one entry per calendar day, keyed by the
/// exit date so P&L is attributed to the day it was realized.
///
/// Days without trades have no entry at all, letting the renderer tell
/// "no trading" apart from a breakeven day.
pub fn daily_calendar_stats(trades: &[Trade]) -> BTreeMap<NaiveDate, DayStats> {
    let mut days: BTreeMap<NaiveDate, DayStats> = BTreeMap::new();

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

        let entry = days.entry(exit.date()).or_default();
        entry.pnl += p;
        entry.trade_count += 1;
    }

    days
}

/// Render key for a day cell, `yyyy-MM-dd`.
pub fn day_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
