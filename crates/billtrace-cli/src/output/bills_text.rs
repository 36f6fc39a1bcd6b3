use std::io;

use serde_json::Value;

use super::format::{Align, Column, render_table};

pub fn render_bills(data: &Value) -> io::Result<String> {
    let rows = data
        .get("rows")
        .and_then(Value::as_array)
        .ok_or_else(|| io::Error::other("bills output requires rows"))?;

    if rows.is_empty() {
        return Ok([
            "No recurring bills found.",
            "",
            "A bill needs at least two occurrences with the same description",
            "and a regular interval of up to a year between them.",
        ]
        .join("\n"));
    }

    let mut lines = vec![
        format!("Found {} recurring {}.", rows.len(), plural(rows.len())),
        String::new(),
    ];

    let columns = [
        Column {
            name: "Description",
            align: Align::Left,
        },
        Column {
            name: "Amount",
            align: Align::Right,
        },
        Column {
            name: "Last date",
            align: Align::Left,
        },
        Column {
            name: "Next date",
            align: Align::Left,
        },
        Column {
            name: "Seen",
            align: Align::Right,
        },
    ];

    let table_rows = rows
        .iter()
        .map(|row| {
            vec![
                text(row, "description"),
                amount(row),
                text(row, "date"),
                text(row, "nextDate"),
                text(row, "occurrence_count"),
            ]
        })
        .collect::<Vec<Vec<String>>>();

    lines.extend(render_table(&columns, &table_rows));
    Ok(lines.join("\n"))
}

fn plural(count: usize) -> &'static str {
    if count == 1 { "bill" } else { "bills" }
}

fn text(row: &Value, key: &str) -> String {
    match row.get(key) {
        Some(Value::String(value)) => value.clone(),
        Some(Value::Number(value)) => value.to_string(),
        _ => "unknown".to_string(),
    }
}

fn amount(row: &Value) -> String {
    row.get("amount")
        .and_then(Value::as_f64)
        .map(|value| format!("{value:.2}"))
        .unwrap_or_else(|| "unknown".to_string())
}
