//! Performance-by-dimension aggregation.
//!
//! Groups closed trades by a chosen attribute (strategy, entry formula,
//! stop-loss formulas, target formulas) and computes per-group totals, win
//! rate, average P&L and profit factor.

use crate::domain::trade::Trade;
use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dimension {
    Strategy,
    EntryFormula,
    StopLossFormula,
    TargetFormula,
}

/// One summary row per id that appears on at least one eligible trade.
#[derive(Debug, Clone, PartialEq)]
pub struct DimensionRow {
    pub id: String,
    pub name: String,
    pub total_pnl: f64,
    pub trade_count: usize,
    /// Percentage of contributing trades with positive pnl.
    pub win_rate: f64,
    pub avg_pnl: f64,
    /// Gross profit over gross loss magnitude; +∞ when the loss sum is zero.
    pub profit_factor: f64,
}

#[derive(Default)]
struct Accumulator {
    total: f64,
    count: usize,
    wins: usize,
    gross_profit: f64,
    gross_loss: f64,
}

/// Aggregates `trades` along `dimension`, resolving display names through
/// `names` (ids without an entry fall back to the id itself).
///
/// Eligibility mirrors the journal: a trade contributes only when closed with
/// a non-zero pnl. A trade referencing the same id more than once (possible
/// for the array-valued dimensions) is counted once per id. Rows come back
/// sorted by total pnl descending; ties keep first-seen order.
pub fn aggregate_by_dimension(
    trades: &[Trade],
    dimension: Dimension,
    names: &HashMap<String, String>,
) -> Vec<DimensionRow> {
    let mut order: Vec<String> = Vec::new();
    let mut groups: HashMap<String, Accumulator> = HashMap::new();

    for trade in trades {
        let Some(pnl) = trade.realized_pnl() else {
            continue;
        };

        let mut counted: HashSet<&str> = HashSet::new();
        for id in dimension_ids(trade, dimension) {
            if id.is_empty() || !counted.insert(id) {
                continue;
            }
            if !groups.contains_key(id) {
                order.push(id.to_string());
            }
            let acc = groups.entry(id.to_string()).or_default();
            acc.total += pnl;
            acc.count += 1;
            if pnl > 0.0 {
                acc.wins += 1;
                acc.gross_profit += pnl;
            } else {
                acc.gross_loss += pnl.abs();
            }
        }
    }

    let mut rows: Vec<DimensionRow> = order
        .into_iter()
        .map(|id| {
            let acc = &groups[&id];
            let win_rate = if acc.count > 0 {
                acc.wins as f64 / acc.count as f64 * 100.0
            } else {
                0.0
            };
            let avg_pnl = if acc.count > 0 {
                acc.total / acc.count as f64
            } else {
                0.0
            };
            let profit_factor = if acc.gross_loss > 0.0 {
                acc.gross_profit / acc.gross_loss
            } else {
                f64::INFINITY
            };
            let name = names.get(&id).cloned().unwrap_or_else(|| id.clone());
            DimensionRow {
                name,
                total_pnl: acc.total,
                trade_count: acc.count,
                win_rate,
                avg_pnl,
                profit_factor,
                id,
            }
        })
        .collect();

    // Stable sort: equal totals keep first-seen order.
    rows.sort_by(|a, b| {
        b.total_pnl
            .partial_cmp(&a.total_pnl)
            .unwrap_or(Ordering::Equal)
    });
    rows
}

fn dimension_ids<'a>(trade: &'a Trade, dimension: Dimension) -> Vec<&'a str> {
    match dimension {
        Dimension::Strategy => vec![trade.edge_id.as_str()],
        Dimension::EntryFormula => trade.entry_formula.as_deref().into_iter().collect(),
        Dimension::StopLossFormula => trade.sl_formulas.iter().map(String::as_str).collect(),
        Dimension::TargetFormula => trade.target_formulas.iter().map(String::as_str).collect(),
    }
}
