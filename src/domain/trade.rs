//! Trade records and outcome classification.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Position {
    Long,
    Short,
}

/// Lifecycle outcome. `pnl` is meaningful only for the closed variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Open,
    Win,
    Loss,
    Breakeven,
}

/// A single journal trade, as stored in the journal's document export.
///
/// Timestamps stay as ISO 8601 strings on the record; aggregators parse them
/// per invocation so one malformed record never aborts a computation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trade {
    pub id: String,
    pub symbol: String,
    #[serde(default)]
    pub index: Option<String>,
    #[serde(default)]
    pub strike_price: Option<f64>,
    pub position: Position,
    pub entry_price: f64,
    #[serde(default)]
    pub exit_price: Option<f64>,
    pub quantity: u32,
    #[serde(default)]
    pub sl: Option<f64>,
    #[serde(default)]
    pub target: Option<f64>,
    pub entry_time: String,
    #[serde(default)]
    pub exit_time: Option<String>,
    pub outcome: Outcome,
    #[serde(default)]
    pub pnl: Option<f64>,
    #[serde(default)]
    pub entry_formula: Option<String>,
    #[serde(default)]
    pub sl_formulas: Vec<String>,
    #[serde(default)]
    pub target_formulas: Vec<String>,
    pub edge_id: String,
}

impl Trade {
    pub fn is_open(&self) -> bool {
        self.outcome == Outcome::Open
    }

    /// Realized P&L as used by dimension eligibility: closed and non-zero.
    ///
    /// A closed trade with a pnl of exactly 0.0 is excluded, preserving the
    /// journal's historical truthiness check on the stored value.
    pub fn realized_pnl(&self) -> Option<f64> {
        if self.is_open() {
            return None;
        }
        match self.pnl {
            Some(p) if p != 0.0 => Some(p),
            _ => None,
        }
    }

    /// Initial risk: entry-to-stop distance times lot size. `None` without a stop.
    pub fn risk(&self) -> Option<f64> {
        self.sl
            .map(|sl| (self.entry_price - sl).abs() * f64::from(self.quantity))
    }

    pub fn entry_datetime(&self) -> Option<NaiveDateTime> {
        parse_timestamp(&self.entry_time)
    }

    pub fn exit_datetime(&self) -> Option<NaiveDateTime> {
        self.exit_time.as_deref().and_then(parse_timestamp)
    }
}

/// Parses an ISO 8601 timestamp: RFC 3339 with offset, or the bare
/// `yyyy-MM-ddTHH:MM:SS` form. Offset forms keep their wall-clock reading,
/// which is the zone the journal entry was written in.
pub fn parse_timestamp(s: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(s) {
        return Some(dt.naive_local());
    }
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S").ok()
}
