use std::io;

use serde_json::Value;

use super::format::key_value_rows;

pub fn render_process(data: &Value) -> io::Result<String> {
    let message = data
        .get("message")
        .and_then(Value::as_str)
        .ok_or_else(|| io::Error::other("process output requires a message"))?;
    let summary = data
        .get("summary")
        .ok_or_else(|| io::Error::other("process output requires a summary"))?;

    let mut lines = vec![message.to_string(), String::new(), "Summary:".to_string()];
    lines.extend(key_value_rows(
        &[
            ("Rows read:", count(summary, "rows_read")),
            ("Rows written:", count(summary, "rows_written")),
            ("Series found:", count(summary, "groups_total")),
            ("Recurring series:", count(summary, "recurring_groups")),
            ("Rows with predictions:", count(summary, "predicted_rows")),
        ],
        2,
    ));

    Ok(lines.join("\n"))
}

fn count(summary: &Value, key: &str) -> String {
    summary
        .get(key)
        .and_then(Value::as_i64)
        .map(|value| value.to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::render_process;

    #[test]
    fn renders_confirmation_and_summary_block() {
        let data = json!({
            "message": "Processed transactions saved to out.csv",
            "summary": {
                "rows_read": 3,
                "rows_written": 3,
                "groups_total": 2,
                "recurring_groups": 1,
                "predicted_rows": 2
            }
        });

        let rendered = render_process(&data);
        assert!(rendered.is_ok());
        if let Ok(text) = rendered {
            assert!(text.starts_with("Processed transactions saved to out.csv"));
            assert!(text.contains("Summary:"));
            assert!(text.contains("Rows read:"));
            assert!(text.contains("Recurring series:"));
        }
    }

    #[test]
    fn missing_summary_is_an_output_error() {
        let rendered = render_process(&json!({"message": "done"}));
        assert!(rendered.is_err());
    }
}
