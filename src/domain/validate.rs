//! Record validation applied after deserialization.
//!
//! The journal adapter runs these before handing records to the aggregators,
//! turning malformed documents into tagged failures instead of panics or
//! silent garbage downstream.

use crate::domain::error::JournalError;
use crate::domain::time_block::TimeBlock;
use crate::domain::trade::Trade;
use chrono::{NaiveDate, NaiveTime};

pub fn validate_trade(trade: &Trade) -> Result<(), JournalError> {
    if trade.id.trim().is_empty() {
        return invalid("<unknown>", "empty id");
    }
    if trade.symbol.trim().is_empty() {
        return invalid(&trade.id, "empty symbol");
    }
    if !trade.entry_price.is_finite() || trade.entry_price <= 0.0 {
        return invalid(&trade.id, "entry price must be positive");
    }
    if trade.quantity == 0 {
        return invalid(&trade.id, "quantity must be positive");
    }
    if let Some(sl) = trade.sl {
        if !sl.is_finite() || sl < 0.0 {
            return invalid(&trade.id, "stop-loss must be a non-negative price");
        }
    }
    if let Some(target) = trade.target {
        if !target.is_finite() || target < 0.0 {
            return invalid(&trade.id, "target must be a non-negative price");
        }
    }
    if let Some(pnl) = trade.pnl {
        if !pnl.is_finite() {
            return invalid(&trade.id, "pnl must be finite");
        }
    }
    if trade.is_open() && trade.pnl.is_some() {
        return invalid(&trade.id, "open trade carries a realized pnl");
    }
    if trade.is_open() && trade.exit_time.is_some() {
        return invalid(&trade.id, "open trade carries an exit time");
    }
    if trade.entry_time.trim().is_empty() {
        return invalid(&trade.id, "empty entry time");
    }
    if trade.edge_id.trim().is_empty() {
        return invalid(&trade.id, "trade must reference an edge");
    }
    Ok(())
}

pub fn validate_block(block: &TimeBlock) -> Result<(), JournalError> {
    if block.id.trim().is_empty() {
        return invalid("<unknown>", "empty id");
    }
    if NaiveTime::parse_from_str(&block.scheduled_time, "%H:%M").is_err() {
        return invalid(&block.id, "scheduled time must be HH:MM");
    }
    for key in block.daily_overrides.keys() {
        if NaiveDate::parse_from_str(key, "%Y-%m-%d").is_err() {
            return invalid(&block.id, &format!("malformed override key {:?}", key));
        }
    }
    Ok(())
}

fn invalid(id: &str, reason: &str) -> Result<(), JournalError> {
    Err(JournalError::InvalidRecord {
        id: id.to_string(),
        reason: reason.to_string(),
    })
}
