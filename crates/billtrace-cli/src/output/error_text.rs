use billtrace_core::CoreError;

pub fn render_error(error: &CoreError) -> String {
    let mut lines = vec![
        "Something went wrong, but it's easy to fix.".to_string(),
        String::new(),
        format!("  Error:    {}", error.code),
        format!("  Details:  {}", error.message),
        String::new(),
        "What to do next:".to_string(),
    ];

    if error.recovery_steps.is_empty() {
        lines.push("  1. Retry the command.".to_string());
    } else {
        for (index, step) in error.recovery_steps.iter().enumerate() {
            lines.push(format!("  {}. {step}", index + 1));
        }
    }

    if let Some(issues) = error
        .data
        .as_ref()
        .and_then(|data| data.get("issues"))
        .and_then(serde_json::Value::as_array)
    {
        lines.push(String::new());
        lines.push("Rows needing fixes:".to_string());
        for issue in issues {
            let row = issue.get("row").and_then(serde_json::Value::as_i64);
            let description = issue
                .get("description")
                .and_then(serde_json::Value::as_str)
                .unwrap_or("unknown issue");
            match row {
                Some(number) => lines.push(format!("  Row {number}: {description}")),
                None => lines.push(format!("  {description}")),
            }
        }
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use billtrace_core::CoreError;
    use billtrace_core::contracts::types::{RowIssue, ValidationSummary};

    use super::render_error;

    #[test]
    fn renders_standard_error_layout() {
        let error = CoreError::invalid_argument_with_recovery(
            "bad input",
            vec!["run billtrace --help".to_string()],
        );

        let rendered = render_error(&error);
        assert!(rendered.starts_with("Something went wrong, but it's easy to fix."));
        assert!(rendered.contains("  Error:    invalid_argument"));
        assert!(rendered.contains("  Details:  bad input"));
        assert!(rendered.contains("What to do next:"));
        assert!(rendered.contains("  1. run billtrace --help"));
    }

    #[test]
    fn validation_issues_are_listed_per_row() {
        let error = CoreError::input_validation_failed(
            ValidationSummary {
                rows_read: 2,
                rows_valid: 1,
                rows_invalid: 1,
            },
            vec![RowIssue {
                row: 2,
                field: "date".to_string(),
                code: "invalid_date".to_string(),
                description: "date must be DD/MM/YYYY; got \"2023-01-01\"".to_string(),
                expected: Some("DD/MM/YYYY".to_string()),
                received: Some("2023-01-01".to_string()),
            }],
        );

        let rendered = render_error(&error);
        assert!(rendered.contains("Rows needing fixes:"));
        assert!(rendered.contains("  Row 2: date must be DD/MM/YYYY"));
    }
}
