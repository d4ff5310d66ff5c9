//! Edge (strategy) reference data.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum EdgeCategory {
    #[serde(rename = "Trend Side")]
    TrendSide,
    #[serde(rename = "Opposite Side")]
    OppositeSide,
    #[default]
    Uncategorized,
}

/// One playbook entry: formula references bundled for a setup.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EdgeEntry {
    #[serde(default)]
    pub entry_formula: Option<String>,
    #[serde(default)]
    pub sl_formulas: Vec<String>,
    #[serde(default)]
    pub target_formulas: Vec<String>,
}

/// A named trading strategy grouping rules and formula references.
/// Read-only from the aggregators' perspective.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Edge {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub category: EdgeCategory,
    #[serde(default)]
    pub rules: Vec<String>,
    #[serde(default)]
    pub entries: Vec<EdgeEntry>,
}

/// Builds the id → display-name table for the strategy dimension.
pub fn edge_names(edges: &[Edge]) -> HashMap<String, String> {
    edges.iter().map(|e| (e.id.clone(), e.name.clone())).collect()
}
