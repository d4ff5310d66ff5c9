//! Discipline (confirmation-rate) reporting over recurring time blocks.

use crate::domain::date_range::DateRange;
use crate::domain::time_block::TimeBlock;
use chrono::NaiveDate;
use std::cmp::Ordering;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq)]
pub struct ConditionRate {
    pub condition: String,
    pub due: usize,
    pub confirmed: usize,
    pub rate: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DisciplineReport {
    pub total_due_blocks: usize,
    pub total_confirmed_blocks: usize,
    pub overall_confirmation_rate: f64,
    /// Condition types with at least one due block, sorted by rate descending.
    pub by_condition: Vec<ConditionRate>,
}

/// Computes how often due blocks were actually confirmed over `range`.
///
/// Every block is due on every day of the range that lies strictly before
/// `today`; a block cannot be confirmed for a day that has not concluded.
/// It counts as confirmed when an override entry exists for that date key.
pub fn discipline_report(
    blocks: &[TimeBlock],
    range: DateRange,
    today: NaiveDate,
) -> DisciplineReport {
    let mut total_due = 0usize;
    let mut total_confirmed = 0usize;
    let mut order: Vec<String> = Vec::new();
    let mut per_condition: HashMap<String, (usize, usize)> = HashMap::new();

    for day in range.days() {
        if day >= today {
            continue;
        }
        for block in blocks {
            let confirmed = block.confirmed_on(day);
            total_due += 1;
            if confirmed {
                total_confirmed += 1;
            }

            let label = block.condition_label();
            if !per_condition.contains_key(&label) {
                order.push(label.clone());
            }
            let entry = per_condition.entry(label).or_insert((0, 0));
            entry.0 += 1;
            if confirmed {
                entry.1 += 1;
            }
        }
    }

    let mut by_condition: Vec<ConditionRate> = order
        .into_iter()
        .filter_map(|condition| {
            let (due, confirmed) = per_condition[&condition];
            if due == 0 {
                return None;
            }
            Some(ConditionRate {
                rate: rate(confirmed, due),
                condition,
                due,
                confirmed,
            })
        })
        .collect();
    by_condition.sort_by(|a, b| b.rate.partial_cmp(&a.rate).unwrap_or(Ordering::Equal));

    DisciplineReport {
        total_due_blocks: total_due,
        total_confirmed_blocks: total_confirmed,
        overall_confirmation_rate: rate(total_confirmed, total_due),
        by_condition,
    }
}

fn rate(confirmed: usize, due: usize) -> f64 {
    if due == 0 {
        0.0
    } else {
        confirmed as f64 / due as f64 * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::time_block::ConditionType;
    use approx::assert_relative_eq;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn block(id: &str, condition: Option<ConditionType>, confirmed_days: &[&str]) -> TimeBlock {
        TimeBlock {
            id: id.into(),
            scheduled_time: "09:45".into(),
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

    #[test]
    fn three_past_days_two_confirmed() {
        let blocks = vec![block(
            "b1",
            Some(ConditionType::DayType),
            &["2024-03-04", "2024-03-06"],
        )];
        let range = DateRange::new(date(2024, 3, 4), date(2024, 3, 6)).unwrap();
        let report = discipline_report(&blocks, range, date(2024, 3, 10));

        assert_eq!(report.total_due_blocks, 3);
        assert_eq!(report.total_confirmed_blocks, 2);
        assert_relative_eq!(report.overall_confirmation_rate, 200.0 / 3.0, epsilon = 1e-9);
    }

    #[test]
    fn today_is_never_due() {
        let blocks = vec![block("b1", None, &["2024-03-06"])];
        let range = DateRange::new(date(2024, 3, 4), date(2024, 3, 6)).unwrap();
        // Range ends on "today": only the 4th and 5th are due.
        let report = discipline_report(&blocks, range, date(2024, 3, 6));

        assert_eq!(report.total_due_blocks, 2);
        assert_eq!(report.total_confirmed_blocks, 0);
    }

    #[test]
    fn future_range_yields_zero_without_dividing() {
        let blocks = vec![block("b1", None, &[])];
        let range = DateRange::new(date(2024, 4, 1), date(2024, 4, 5)).unwrap();
        let report = discipline_report(&blocks, range, date(2024, 3, 10));

        assert_eq!(report.total_due_blocks, 0);
        assert_relative_eq!(report.overall_confirmation_rate, 0.0);
        assert!(report.by_condition.is_empty());
    }

    #[test]
    fn no_blocks_yields_empty_report() {
        let range = DateRange::new(date(2024, 3, 1), date(2024, 3, 5)).unwrap();
        let report = discipline_report(&[], range, date(2024, 3, 10));
        assert_eq!(report.total_due_blocks, 0);
        assert_relative_eq!(report.overall_confirmation_rate, 0.0);
    }

    #[test]
    fn untagged_blocks_report_as_custom() {
        let blocks = vec![block("b1", None, &["2024-03-04"])];
        let range = DateRange::new(date(2024, 3, 4), date(2024, 3, 5)).unwrap();
        let report = discipline_report(&blocks, range, date(2024, 3, 10));

        assert_eq!(report.by_condition.len(), 1);
        assert_eq!(report.by_condition[0].condition, "Custom");
        assert_eq!(report.by_condition[0].due, 2);
        assert_eq!(report.by_condition[0].confirmed, 1);
    }

    #[test]
    fn condition_rows_sort_by_rate_descending() {
        let blocks = vec![
            block("b1", Some(ConditionType::DayType), &["2024-03-04"]),
            block(
                "b2",
                Some(ConditionType::IbClose),
                &["2024-03-04", "2024-03-05"],
            ),
        ];
        let range = DateRange::new(date(2024, 3, 4), date(2024, 3, 5)).unwrap();
        let report = discipline_report(&blocks, range, date(2024, 3, 10));

        assert_eq!(report.by_condition.len(), 2);
        assert_eq!(report.by_condition[0].condition, "IB Close");
        assert_relative_eq!(report.by_condition[0].rate, 100.0);
        assert_eq!(report.by_condition[1].condition, "Day Type");
        assert_relative_eq!(report.by_condition[1].rate, 50.0);
    }

    #[test]
    fn blocks_of_same_condition_pool_their_counts() {
        let blocks = vec![
            block("b1", Some(ConditionType::E15), &["2024-03-04"]),
            block("b2", Some(ConditionType::E15), &[]),
        ];
        let range = DateRange::new(date(2024, 3, 4), date(2024, 3, 4)).unwrap();
        let report = discipline_report(&blocks, range, date(2024, 3, 10));

        assert_eq!(report.by_condition.len(), 1);
        assert_eq!(report.by_condition[0].due, 2);
        assert_eq!(report.by_condition[0].confirmed, 1);
        assert_relative_eq!(report.by_condition[0].rate, 50.0);
    }
}
