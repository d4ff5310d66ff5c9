//! JSON document journal adapter.
//!
//! Reads the journal's exported collections: one JSON file per collection,
//! each an array of documents. Records that fail validation are skipped with
//! a warning so one bad document never hides the rest of the journal.

use crate::domain::edge::Edge;
use crate::domain::error::JournalError;
use crate::domain::formula::Formula;
use crate::domain::time_block::TimeBlock;
use crate::domain::trade::Trade;
use crate::domain::validate::{validate_block, validate_trade};
use crate::ports::config_port::ConfigPort;
use crate::ports::journal_port::JournalPort;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub struct JsonJournalAdapter {
    trades_path: PathBuf,
    edges_path: PathBuf,
    formulas_path: PathBuf,
    blocks_path: PathBuf,
}

impl JsonJournalAdapter {
    pub fn new(
        trades_path: PathBuf,
        edges_path: PathBuf,
        formulas_path: PathBuf,
        blocks_path: PathBuf,
    ) -> Self {
        Self {
            trades_path,
            edges_path,
            formulas_path,
            blocks_path,
        }
    }

    pub fn from_config(config: &dyn ConfigPort) -> Result<Self, JournalError> {
        let path = |key: &str| {
            config
                .get_path("journal", key)
                .ok_or_else(|| JournalError::ConfigMissing {
                    section: "journal".to_string(),
                    key: key.to_string(),
                })
        };
        Ok(Self::new(
            path("trades_path")?,
            path("edges_path")?,
            path("formulas_path")?,
            path("blocks_path")?,
        ))
    }

    fn read_documents<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, JournalError> {
        let content = fs::read_to_string(path).map_err(|e| JournalError::Journal {
            reason: format!("failed to read {}: {}", path.display(), e),
        })?;
        serde_json::from_str(&content).map_err(|e| JournalError::Journal {
            reason: format!("invalid JSON in {}: {}", path.display(), e),
        })
    }
}

impl JournalPort for JsonJournalAdapter {
    fn load_trades(&self) -> Result<Vec<Trade>, JournalError> {
        let trades: Vec<Trade> = Self::read_documents(&self.trades_path)?;
        Ok(trades
            .into_iter()
            .filter(|t| match validate_trade(t) {
                Ok(()) => true,
                Err(e) => {
                    eprintln!("warning: skipping trade: {e}");
                    false
                }
            })
            .collect())
    }

    fn load_edges(&self) -> Result<Vec<Edge>, JournalError> {
        Self::read_documents(&self.edges_path)
    }

    fn load_formulas(&self) -> Result<Vec<Formula>, JournalError> {
        Self::read_documents(&self.formulas_path)
    }

    fn load_blocks(&self) -> Result<Vec<TimeBlock>, JournalError> {
        let blocks: Vec<TimeBlock> = Self::read_documents(&self.blocks_path)?;
        Ok(blocks
            .into_iter()
            .filter(|b| match validate_block(b) {
                Ok(()) => true,
                Err(e) => {
                    eprintln!("warning: skipping block: {e}");
                    false
                }
            })
            .collect())
    }
}
