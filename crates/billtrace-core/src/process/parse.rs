use std::collections::HashMap;

use crate::{CoreError, CoreResult};

pub(crate) const REQUIRED_COLUMNS: [&str; 10] = [
    "externalId",
    "createdAt",
    "type",
    "amount",
    "date",
    "description",
    "category",
    "counterParty",
    "tag",
    "accountExternalId",
];

pub(crate) const OPTIONAL_COLUMNS: [&str; 1] = ["location"];

/// One raw input line, fields still unvalidated strings. Row numbers are
/// 1-based and exclude the header.
#[derive(Debug, Clone)]
pub(crate) struct ParsedRow {
    pub(crate) row: i64,
    pub(crate) external_id: Option<String>,
    pub(crate) created_at: Option<String>,
    pub(crate) kind: Option<String>,
    pub(crate) amount: Option<String>,
    pub(crate) date: Option<String>,
    pub(crate) description: Option<String>,
    pub(crate) category: Option<String>,
    pub(crate) counter_party: Option<String>,
    pub(crate) tag: Option<String>,
    pub(crate) account_external_id: Option<String>,
    pub(crate) location: Option<String>,
}

pub(crate) fn parse_csv(content: &str) -> CoreResult<Vec<ParsedRow>> {
    if content.trim().is_empty() {
        return Err(CoreError::invalid_argument_with_recovery(
            "Input file is empty; a header row is required.",
            vec![
                "Provide a CSV export with the transaction header row.".to_string(),
                "Run `billtrace process --help` to review the expected columns.".to_string(),
            ],
        ));
    }

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(content.as_bytes());

    let headers = reader
        .headers()
        .map_err(|_| {
            CoreError::invalid_argument("CSV header row is missing or unreadable.")
        })?
        .iter()
        .map(|value| value.trim().to_string())
        .collect::<Vec<String>>();

    if !headers_are_valid(&headers) {
        return Err(CoreError::input_schema_mismatch(
            REQUIRED_COLUMNS.iter().map(|name| name.to_string()).collect(),
            OPTIONAL_COLUMNS.iter().map(|name| name.to_string()).collect(),
            headers,
        ));
    }

    let index_by_name = headers
        .iter()
        .enumerate()
        .map(|(index, name)| (name.to_string(), index))
        .collect::<HashMap<String, usize>>();

    let mut rows = Vec::new();
    for (row_index, result_row) in reader.records().enumerate() {
        let record = result_row
            .map_err(|_| CoreError::invalid_argument("CSV rows are malformed or not UTF-8."))?;

        rows.push(ParsedRow {
            row: (row_index as i64) + 1,
            external_id: value_for(&record, &index_by_name, "externalId"),
            created_at: value_for(&record, &index_by_name, "createdAt"),
            kind: value_for(&record, &index_by_name, "type"),
            amount: value_for(&record, &index_by_name, "amount"),
            date: value_for(&record, &index_by_name, "date"),
            description: value_for(&record, &index_by_name, "description"),
            category: value_for(&record, &index_by_name, "category"),
            counter_party: value_for(&record, &index_by_name, "counterParty"),
            tag: value_for(&record, &index_by_name, "tag"),
            account_external_id: value_for(&record, &index_by_name, "accountExternalId"),
            location: value_for(&record, &index_by_name, "location"),
        });
    }

    Ok(rows)
}

fn value_for(
    record: &csv::StringRecord,
    index_by_name: &HashMap<String, usize>,
    field_name: &str,
) -> Option<String> {
    let index = index_by_name.get(field_name)?;
    let value = record.get(*index)?;
    Some(value.to_string())
}

fn headers_are_valid(actual_headers: &[String]) -> bool {
    for required in REQUIRED_COLUMNS {
        if !actual_headers.iter().any(|value| value == required) {
            return false;
        }
    }

    for header in actual_headers {
        let allowed = REQUIRED_COLUMNS.iter().any(|value| value == header)
            || OPTIONAL_COLUMNS.iter().any(|value| value == header);
        if !allowed {
            return false;
        }
    }

    true
}
