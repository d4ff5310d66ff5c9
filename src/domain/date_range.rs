//! Inclusive calendar date ranges.

use crate::domain::error::JournalError;
use chrono::{Duration, NaiveDate};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl DateRange {
    pub fn new(from: NaiveDate, to: NaiveDate) -> Result<Self, JournalError> {
        if to < from {
            return Err(JournalError::DateRange {
                reason: format!("end {} precedes start {}", to, from),
            });
        }
        Ok(Self { from, to })
    }

    /// Parses `yyyy-MM-dd` bounds.
    pub fn parse(from: &str, to: &str) -> Result<Self, JournalError> {
        Self::new(parse_date(from)?, parse_date(to)?)
    }

    /// Trailing window of `days` calendar days ending on `today` (inclusive).
    pub fn trailing_days(today: NaiveDate, days: i64) -> Self {
        Self {
            from: today - Duration::days(days.max(1) - 1),
            to: today,
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.from <= date && date <= self.to
    }

    /// Iterates every day in the range, in order.
    pub fn days(self) -> impl Iterator<Item = NaiveDate> {
        self.from.iter_days().take_while(move |d| *d <= self.to)
    }
}

fn parse_date(s: &str) -> Result<NaiveDate, JournalError> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| JournalError::DateRange {
        reason: format!("invalid date {:?} (expected yyyy-MM-dd)", s),
    })
}
