#![allow(dead_code)]

use edgebook::domain::edge::{Edge, EdgeCategory};
use edgebook::domain::error::JournalError;
use edgebook::domain::formula::{Formula, FormulaKind};
use edgebook::domain::time_block::{ConditionType, TimeBlock};
use edgebook::domain::trade::{Outcome, Position, Trade};
use edgebook::ports::journal_port::JournalPort;
use std::collections::HashMap;

pub fn make_closed_trade(id: &str, edge: &str, pnl: f64, exit_time: &str) -> Trade {
    Trade {
        id: id.to_string(),
        symbol: "NIFTY".to_string(),
        index: Some("NIFTY".to_string()),
        strike_price: None,
        position: Position::Long,
        entry_price: 100.0,
        exit_price: Some(100.0 + pnl / 50.0),
        quantity: 50,
        sl: Some(95.0),
        target: Some(110.0),
        entry_time: "2024-03-04T09:30:00".to_string(),
        exit_time: Some(exit_time.to_string()),
        outcome: if pnl > 0.0 {
            Outcome::Win
        } else if pnl < 0.0 {
            Outcome::Loss
        } else {
            Outcome::Breakeven
        },
        pnl: Some(pnl),
        entry_formula: Some("fe1".to_string()),
        sl_formulas: vec!["fs1".to_string()],
        target_formulas: vec!["ft1".to_string()],
        edge_id: edge.to_string(),
    }
}

pub fn make_open_trade(id: &str, edge: &str) -> Trade {
    Trade {
        id: id.to_string(),
        symbol: "BANKNIFTY".to_string(),
        index: Some("BANKNIFTY".to_string()),
        strike_price: None,
        position: Position::Short,
        entry_price: 250.0,
        exit_price: None,
        quantity: 15,
        sl: Some(260.0),
        target: None,
        entry_time: "2024-03-06T10:00:00".to_string(),
        exit_time: None,
        outcome: Outcome::Open,
        pnl: None,
        entry_formula: None,
        sl_formulas: vec![],
        target_formulas: vec![],
        edge_id: edge.to_string(),
    }
}

pub fn make_edge(id: &str, name: &str) -> Edge {
    Edge {
        id: id.to_string(),
        name: name.to_string(),
        category: EdgeCategory::TrendSide,
        rules: vec!["trade with the higher-timeframe trend".to_string()],
        entries: vec![],
    }
}

pub fn make_formula(id: &str, name: &str, kind: FormulaKind) -> Formula {
    Formula {
        id: id.to_string(),
        name: name.to_string(),
        kind,
        subtype: None,
        description: None,
    }
}

pub fn make_block(
    id: &str,
    condition: Option<ConditionType>,
    confirmed_days: &[&str],
) -> TimeBlock {
    TimeBlock {
        id: id.to_string(),
        scheduled_time: "09:45".to_string(),
        condition,
        condition_ref: None,
        recurring: true,
        alarm: false,
        frozen: false,
        daily_overrides: confirmed_days
            .iter()
            .map(|d| (d.to_string(), true))
            .collect(),
    }
}

#[derive(Default)]
pub struct MockJournalPort {
    pub trades: Vec<Trade>,
    pub edges: Vec<Edge>,
    pub formulas: Vec<Formula>,
    pub blocks: Vec<TimeBlock>,
    pub error: Option<String>,
}

impl MockJournalPort {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_trades(mut self, trades: Vec<Trade>) -> Self {
        self.trades = trades;
        self
    }

    pub fn with_edges(mut self, edges: Vec<Edge>) -> Self {
        self.edges = edges;
        self
    }

    pub fn with_formulas(mut self, formulas: Vec<Formula>) -> Self {
        self.formulas = formulas;
        self
    }

    pub fn with_blocks(mut self, blocks: Vec<TimeBlock>) -> Self {
        self.blocks = blocks;
        self
    }

    pub fn with_error(mut self, reason: &str) -> Self {
        self.error = Some(reason.to_string());
        self
    }

    fn check_error(&self) -> Result<(), JournalError> {
        match &self.error {
            Some(reason) => Err(JournalError::Journal {
                reason: reason.clone(),
            }),
            None => Ok(()),
        }
    }
}

impl JournalPort for MockJournalPort {
    fn load_trades(&self) -> Result<Vec<Trade>, JournalError> {
        self.check_error()?;
        Ok(self.trades.clone())
    }

    fn load_edges(&self) -> Result<Vec<Edge>, JournalError> {
        self.check_error()?;
        Ok(self.edges.clone())
    }

    fn load_formulas(&self) -> Result<Vec<Formula>, JournalError> {
        self.check_error()?;
        Ok(self.formulas.clone())
    }

    fn load_blocks(&self) -> Result<Vec<TimeBlock>, JournalError> {
        self.check_error()?;
        Ok(self.blocks.clone())
    }
}

/// id → name lookup shared by several scenarios.
pub fn names_of(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(id, name)| (id.to_string(), name.to_string()))
        .collect()
}
