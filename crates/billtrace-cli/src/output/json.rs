use std::io;

use billtrace_core::contracts::envelope::failure_from_error;
use billtrace_core::{CoreError, SuccessEnvelope};
use serde::Serialize;
use serde_json::{Value, json};

const JSON_VERSION: &str = "v1";

pub fn render_success_json(success: &SuccessEnvelope) -> io::Result<String> {
    let value = match success.command.as_str() {
        "process" => render_process_json(&success.data),
        "bills" => render_bills_json(&success.data),
        _ => {
            return Err(io::Error::other(format!(
                "JSON output is not supported for command `{}`",
                success.command
            )));
        }
    };

    serialize_json_pretty(&value)
}

pub fn render_error_json(error: &CoreError) -> io::Result<String> {
    serialize_json_pretty(&failure_from_error(error))
}

fn render_process_json(data: &Value) -> Value {
    json!({
        "ok": true,
        "version": JSON_VERSION,
        "data": data.clone()
    })
}

fn render_bills_json(data: &Value) -> Value {
    json!({
        "policy_version": data.get("policy_version").cloned().unwrap_or(Value::Null),
        "rows": data.get("rows").cloned().unwrap_or_else(|| json!([])),
    })
}

fn serialize_json_pretty<T>(value: &T) -> io::Result<String>
where
    T: Serialize,
{
    serde_json::to_string_pretty(value).map_err(io::Error::other)
}
