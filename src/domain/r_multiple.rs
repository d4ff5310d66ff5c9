//! R-multiple distribution binning.
//!
//! Classifies each closed trade's risk-adjusted return into nine fixed
//! buckets for the distribution chart.

use crate::domain::trade::Trade;

/// Bucket labels in display order.
pub const BUCKET_LABELS: [&str; 9] = [
    "<-3R",
    "-3R to -2R",
    "-2R to -1R",
    "-1R to 0R",
    "0R to 1R",
    "1R to 2R",
    "2R to 3R",
    ">3R",
    "No SL",
];

const NO_SL: usize = 8;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RMultipleBucket {
    pub label: &'static str,
    pub count: usize,
}

/// Bins every eligible trade into exactly one bucket.
///
/// Open trades contribute nothing. A closed trade without a stop lands in
/// "No SL", as does one whose entry-to-stop risk is exactly zero. A closed
/// trade that has a stop but no pnl is skipped entirely.
pub fn r_multiple_distribution(trades: &[Trade]) -> Vec<RMultipleBucket> {
    let mut counts = [0usize; 9];

    for trade in trades {
        if trade.is_open() {
            continue;
        }
        if let Some(slot) = classify(trade) {
            counts[slot] += 1;
        }
    }

    (0..BUCKET_LABELS.len())
        .map(|i| RMultipleBucket {
            label: BUCKET_LABELS[i],
            count: counts[i],
        })
        .collect()
}

fn classify(trade: &Trade) -> Option<usize> {
    let Some(sl) = trade.sl else {
        return Some(NO_SL);
    };
    let pnl = trade.pnl?;

    let risk = (trade.entry_price - sl).abs() * f64::from(trade.quantity);
    if risk == 0.0 {
        // A stop at the entry price carries no risk; treat as unset.
        return Some(NO_SL);
    }

    Some(bucket_index(pnl / risk))
}

// Half-open chain: -2 and -1 land in the lower bucket, 0/1/2/3 in the upper.
fn bucket_index(r: f64) -> usize {
    if r < -3.0 {
        0
    } else if r <= -2.0 {
        1
    } else if r <= -1.0 {
        2
    } else if r < 0.0 {
        3
    } else if r < 1.0 {
        4
    } else if r < 2.0 {
        5
    } else if r < 3.0 {
        6
    } else {
        7
    }
}
