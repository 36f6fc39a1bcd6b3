use crate::CoreResult;
use crate::contracts::envelope::{SuccessEnvelope, success};
use crate::contracts::types::ProcessData;
use crate::process;
use crate::recurrence::policy::RecurrencePolicy;

/// Enriches one transaction export into one output file.
pub fn run(input_path: &str, output_path: &str) -> CoreResult<SuccessEnvelope> {
    let execution = process::execute(input_path, output_path)?;

    let data = ProcessData {
        input_path: input_path.to_string(),
        output_path: output_path.to_string(),
        policy_version: RecurrencePolicy::AmountTolerance.version().to_string(),
        message: format!("Processed transactions saved to {output_path}"),
        summary: execution.summary,
    };

    success("process", data)
}
