//! Journal snapshot access port trait.
//!
//! Consumers receive an implementation by reference; each call returns a
//! fresh, immutable snapshot of the collection.

use crate::domain::edge::Edge;
use crate::domain::error::JournalError;
use crate::domain::formula::Formula;
use crate::domain::time_block::TimeBlock;
use crate::domain::trade::Trade;

pub trait JournalPort {
    fn load_trades(&self) -> Result<Vec<Trade>, JournalError>;

    fn load_edges(&self) -> Result<Vec<Edge>, JournalError>;

    fn load_formulas(&self) -> Result<Vec<Formula>, JournalError>;

    fn load_blocks(&self) -> Result<Vec<TimeBlock>, JournalError>;
}
