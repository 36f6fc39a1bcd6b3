use std::collections::HashSet;

use chrono::NaiveDate;

use crate::recurrence::group::TransactionGroup;
use crate::recurrence::policy::{
    MAX_DISTINCT_AMOUNTS, MAX_INTERVAL_DAYS, MIN_INTERVAL_DAYS, RecurrencePolicy,
};

/// Group-level verdict, applied identically to every member. Members project
/// their own predicted dates from this shared interval.
#[derive(Debug, Clone, Copy)]
pub struct RecurrenceDecision {
    pub is_recurring: bool,
    pub interval_days: Option<f64>,
}

impl RecurrenceDecision {
    pub const NOT_RECURRING: Self = Self {
        is_recurring: false,
        interval_days: None,
    };
}

/// Batch policy: a series recurs when it has more than one member and its
/// amounts stay within `MAX_DISTINCT_AMOUNTS` distinct values. Singletons are
/// never recurring.
pub fn classify_amount_tolerance(group: &TransactionGroup<'_>) -> RecurrenceDecision {
    if group.rows.len() < 2 || distinct_amounts(group) > MAX_DISTINCT_AMOUNTS {
        return RecurrenceDecision::NOT_RECURRING;
    }

    let dates = occurrence_dates(group);
    RecurrenceDecision {
        is_recurring: true,
        interval_days: RecurrencePolicy::AmountTolerance.estimator().estimate(&dates),
    }
}

/// Bills-view gate on the estimated interval, bounds inclusive.
pub fn interval_in_window(interval_days: f64) -> bool {
    (MIN_INTERVAL_DAYS..=MAX_INTERVAL_DAYS).contains(&interval_days)
}

fn distinct_amounts(group: &TransactionGroup<'_>) -> usize {
    group
        .rows
        .iter()
        .map(|row| row.amount_cents())
        .collect::<HashSet<i64>>()
        .len()
}

fn occurrence_dates(group: &TransactionGroup<'_>) -> Vec<NaiveDate> {
    group.rows.iter().map(|row| row.occurred_on).collect()
}
