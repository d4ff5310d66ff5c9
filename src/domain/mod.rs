//! Core domain types and the analytics aggregation engine.

pub mod trade;
pub mod formula;
pub mod edge;
pub mod time_block;
pub mod date_range;
pub mod dimension;
pub mod r_multiple;
pub mod weekday;
pub mod calendar;
pub mod discipline;
pub mod money;
pub mod validate;
pub mod config_validation;
pub mod error;
