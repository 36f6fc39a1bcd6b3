use serde_json::{Value, json};
use thiserror::Error;

use crate::contracts::types::{RowIssue, ValidationSummary};

#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct CoreError {
    pub code: String,
    pub message: String,
    pub recovery_steps: Vec<String>,
    pub data: Option<Value>,
}

impl CoreError {
    pub fn new(code: &str, message: &str, recovery_steps: Vec<String>) -> Self {
        Self {
            code: code.to_string(),
            message: message.to_string(),
            recovery_steps,
            data: None,
        }
    }

    pub fn with_data(mut self, data: Value) -> Self {
        self.data = Some(data);
        self
    }

    pub fn invalid_argument(message: &str) -> Self {
        Self::invalid_argument_for_command(message, None)
    }

    pub fn invalid_argument_for_command(message: &str, command: Option<&str>) -> Self {
        let help_hint = match command {
            Some(cmd) => format!("Run `billtrace {cmd} --help` for usage."),
            None => "Run `billtrace --help` for usage.".to_string(),
        };
        let error = Self::new("invalid_argument", message, vec![help_hint]);
        if let Some(cmd) = command {
            return error.with_data(json!({
                "command_hint": cmd,
            }));
        }
        error
    }

    pub fn invalid_argument_with_recovery(message: &str, recovery_steps: Vec<String>) -> Self {
        Self::new("invalid_argument", message, recovery_steps)
    }

    pub fn input_file_unreadable(path: &str, detail: &str) -> Self {
        Self::new(
            "input_file_unreadable",
            &format!("Could not read input file `{path}`: {detail}"),
            vec![
                "Verify the path exists and is readable.".to_string(),
                "Rerun `billtrace process <input> <output>`.".to_string(),
            ],
        )
    }

    pub fn output_file_unwritable(path: &str, detail: &str) -> Self {
        Self::new(
            "output_file_unwritable",
            &format!("Could not write output file `{path}`: {detail}"),
            vec![format!(
                "Grant write access to `{path}` or choose a writable output path."
            )],
        )
    }

    pub fn input_schema_mismatch(
        required_headers: Vec<String>,
        optional_headers: Vec<String>,
        actual_headers: Vec<String>,
    ) -> Self {
        let mut expected_headers = required_headers.clone();
        expected_headers.extend(optional_headers.clone());

        Self::new(
            "input_schema_mismatch",
            "CSV headers do not satisfy the transaction export schema.",
            vec![
                "Include all required headers; optional headers may be omitted.".to_string(),
                "Do not include unknown headers.".to_string(),
                "Run `billtrace process --help` to review the expected columns.".to_string(),
            ],
        )
        .with_data(json!({
            "required_headers": required_headers,
            "optional_headers": optional_headers,
            "expected_headers": expected_headers,
            "actual_headers": actual_headers,
        }))
    }

    pub fn input_validation_failed(summary: ValidationSummary, issues: Vec<RowIssue>) -> Self {
        let issue_count = summary.rows_invalid;
        Self::new(
            "input_validation_failed",
            &format!(
                "Input failed validation: {issue_count} rows need fixes. No output was written."
            ),
            vec![
                "Fix the listed issues in the source file.".to_string(),
                "Rerun `billtrace process <input> <output>`.".to_string(),
            ],
        )
        .with_data(json!({
            "summary": summary,
            "issues": issues,
        }))
    }

    pub fn internal_serialization(message: &str) -> Self {
        Self::new("internal_serialization_error", message, Vec::new())
    }
}

pub type CoreResult<T> = Result<T, CoreError>;
