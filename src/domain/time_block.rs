//! Recurring time blocks: scheduled daily checklist items that can be
//! confirmed per date.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Closed set of condition tags a block can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConditionType {
    #[serde(rename = "Day Type")]
    DayType,
    #[serde(rename = "E(15)")]
    E15,
    #[serde(rename = "IB Close")]
    IbClose,
    #[serde(rename = "Open Type")]
    OpenType,
}

impl fmt::Display for ConditionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ConditionType::DayType => "Day Type",
            ConditionType::E15 => "E(15)",
            ConditionType::IbClose => "IB Close",
            ConditionType::OpenType => "Open Type",
        };
        f.write_str(label)
    }
}

/// Label used for blocks without a condition tag.
pub const CUSTOM_CONDITION: &str = "Custom";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeBlock {
    pub id: String,
    /// Time of day the block is scheduled for, `HH:MM`.
    pub scheduled_time: String,
    #[serde(default)]
    pub condition: Option<ConditionType>,
    /// Optional reference to a specific named condition instance.
    #[serde(default)]
    pub condition_ref: Option<String>,
    #[serde(default)]
    pub recurring: bool,
    #[serde(default)]
    pub alarm: bool,
    #[serde(default)]
    pub frozen: bool,
    /// Per-date confirmations keyed `yyyy-MM-dd`. Presence of a key marks the
    /// block confirmed for that day.
    #[serde(default)]
    pub daily_overrides: HashMap<String, bool>,
}

impl TimeBlock {
    pub fn condition_label(&self) -> String {
        match self.condition {
            Some(c) => c.to_string(),
            None => CUSTOM_CONDITION.to_string(),
        }
    }

    pub fn confirmed_on(&self, date: NaiveDate) -> bool {
        self.daily_overrides
            .contains_key(&date.format("%Y-%m-%d").to_string())
    }
}
