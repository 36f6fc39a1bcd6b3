use crate::CoreResult;
use crate::contracts::envelope::{SuccessEnvelope, success};
use crate::contracts::types::BillsData;
use crate::process;
use crate::recurrence::bills::recurring_bills;
use crate::recurrence::policy::RecurrencePolicy;

/// Enriches a transaction export in memory and reports the recurring-bills
/// view. Nothing is written to disk.
pub fn run(input_path: &str) -> CoreResult<SuccessEnvelope> {
    let records = process::load_records(input_path)?;
    let execution = process::enrich_records(&records);
    let rows = recurring_bills(&execution.rows);

    let data = BillsData {
        input_path: input_path.to_string(),
        policy_version: RecurrencePolicy::IntervalWindow.version().to_string(),
        rows,
    };

    success("bills", data)
}
