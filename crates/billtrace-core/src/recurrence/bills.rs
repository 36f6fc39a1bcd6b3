use chrono::NaiveDate;

use crate::contracts::types::RecurringBillRow;
use crate::records::EnrichedRecord;
use crate::recurrence::classify::interval_in_window;
use crate::recurrence::date::format_iso_date;
use crate::recurrence::group::group_by;
use crate::recurrence::interval::predict_next_payment;
use crate::recurrence::policy::RecurrencePolicy;

/// Bills-view presentation: one row per qualifying recurring series, grouped
/// on description alone. Pure in-memory transformation over already-enriched
/// records; the reported amount is the 2-decimal mean across the series and
/// the date is the latest occurrence. Rows come back sorted by descending
/// occurrence count.
pub fn recurring_bills(records: &[EnrichedRecord]) -> Vec<RecurringBillRow> {
    let estimator = RecurrencePolicy::IntervalWindow.estimator();
    let mut rows: Vec<RecurringBillRow> = Vec::new();

    for group in group_by(records, |record| record.description.clone()) {
        if group.rows.len() < 2 {
            continue;
        }

        let mut dates = group
            .rows
            .iter()
            .map(|record| record.occurred_on)
            .collect::<Vec<NaiveDate>>();
        dates.sort_unstable();

        let Some(interval) = estimator.estimate(&dates) else {
            continue;
        };
        if !interval_in_window(interval) {
            continue;
        }

        let last = dates[dates.len() - 1];
        let Some(next) = predict_next_payment(last, Some(interval)) else {
            continue;
        };

        let amount_total: f64 = group.rows.iter().map(|record| record.amount).sum();
        let mean_amount = amount_total / group.rows.len() as f64;

        rows.push(RecurringBillRow {
            amount: round_to(mean_amount, 2),
            description: group.key,
            date: format_iso_date(&last),
            next_date: format_iso_date(&next),
            occurrence_count: group.rows.len() as i64,
            avg_interval_days: interval.round() as i64,
        });
    }

    rows.sort_by(|left, right| right.occurrence_count.cmp(&left.occurrence_count));
    rows
}

fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10_f64.powi(decimals as i32);
    (value * factor).round() / factor
}
