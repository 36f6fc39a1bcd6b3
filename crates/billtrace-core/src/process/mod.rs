pub(crate) mod input;
pub(crate) mod parse;
pub(crate) mod validate;
pub(crate) mod write;

use chrono::Local;
use uuid::Uuid;

use crate::CoreResult;
use crate::contracts::types::ProcessSummary;
use crate::records::{EnrichedRecord, TransactionRecord};
use crate::recurrence::classify::classify_amount_tolerance;
use crate::recurrence::date::normalize_created_at;
use crate::recurrence::group::group_records;
use crate::recurrence::interval::predict_next_payment;
use crate::recurrence::policy::RecurrencePolicy;

#[derive(Debug)]
pub(crate) struct ProcessExecution {
    pub rows: Vec<EnrichedRecord>,
    pub summary: ProcessSummary,
}

/// The batch run: read the whole export, group, classify, enrich, write.
/// Validation failures abort before anything is written.
pub(crate) fn execute(input_path: &str, output_path: &str) -> CoreResult<ProcessExecution> {
    let records = load_records(input_path)?;
    let execution = enrich_records(&records);
    write::write_output_file(output_path, &execution.rows)?;
    Ok(execution)
}

pub(crate) fn load_records(input_path: &str) -> CoreResult<Vec<TransactionRecord>> {
    let content = input::read_input_file(input_path)?;
    let parsed = parse::parse_csv(&content)?;
    validate::validate_rows(parsed)
}

/// Applies the batch policy (description+category grouping, amount-tolerance
/// classification) and assembles output rows in original group order. Each
/// member projects its prediction from its own occurrence date.
pub(crate) fn enrich_records(records: &[TransactionRecord]) -> ProcessExecution {
    let now = Local::now().naive_local();
    let policy = RecurrencePolicy::AmountTolerance;
    let groups = group_records(records, policy.group_key());

    let mut rows = Vec::with_capacity(records.len());
    let mut recurring_groups = 0i64;
    let mut predicted_rows = 0i64;

    for group in &groups {
        let decision = classify_amount_tolerance(group);
        if decision.is_recurring {
            recurring_groups += 1;
        }

        for record in &group.rows {
            let predicted = if decision.is_recurring {
                predict_next_payment(record.occurred_on, decision.interval_days)
            } else {
                None
            };
            if predicted.is_some() {
                predicted_rows += 1;
            }

            rows.push(EnrichedRecord {
                id: Uuid::new_v4().to_string(),
                created_at: normalize_created_at(&record.created_at_raw, now),
                external_id: record.external_id.clone(),
                kind: record.kind.clone(),
                amount: record.amount,
                occurred_on: record.occurred_on,
                description: record.description.clone(),
                category: record.category.clone(),
                counter_party: record.counter_party.clone(),
                recurring: decision.is_recurring,
                tag: record.tag.clone(),
                account_external_id: record.account_external_id.clone(),
                location: record.location.clone(),
                predicted_next_payment: predicted,
            });
        }
    }

    let summary = ProcessSummary {
        rows_read: records.len() as i64,
        rows_written: rows.len() as i64,
        groups_total: groups.len() as i64,
        recurring_groups,
        predicted_rows,
    };

    ProcessExecution { rows, summary }
}
