//! Reusable entry/exit formula reference data.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FormulaKind {
    Entry,
    StopLoss,
    Target,
}

/// A named rule referenced by id from trades and edges. Never owns a trade.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Formula {
    pub id: String,
    pub name: String,
    pub kind: FormulaKind,
    #[serde(default)]
    pub subtype: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// Builds the id → display-name table the dimension aggregator consumes.
pub fn formula_names(formulas: &[Formula]) -> HashMap<String, String> {
    formulas
        .iter()
        .map(|f| (f.id.clone(), f.name.clone()))
        .collect()
}
