use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

pub const INPUT_HEADER: &str = "externalId,createdAt,type,amount,date,description,category,counterParty,tag,accountExternalId,location";

pub fn temp_workspace(prefix: &str) -> std::io::Result<TempDir> {
    tempfile::Builder::new().prefix(prefix).tempdir()
}

/// One input line in the export's column order. `date` is DD/MM/YYYY.
pub fn input_row(
    external_id: &str,
    created_at: &str,
    amount: &str,
    date: &str,
    description: &str,
    category: &str,
) -> String {
    format!(
        "{external_id},{created_at},DEBIT,{amount},{date},{description},{category},Counter Co,tagged,acct_1,"
    )
}

pub fn write_input(dir: &Path, lines: &[String]) -> PathBuf {
    let mut content = String::from(INPUT_HEADER);
    for line in lines {
        content.push('\n');
        content.push_str(line);
    }
    content.push('\n');

    let path = dir.join("transactions.csv");
    let written = fs::write(&path, content);
    assert!(written.is_ok());
    path
}

/// Reads the enriched output back as one map per row, keyed by header name.
pub fn read_output(path: &Path) -> Vec<HashMap<String, String>> {
    let content = fs::read_to_string(path);
    assert!(content.is_ok());

    let content = content.unwrap_or_default();
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(content.as_bytes());

    let headers = reader
        .headers()
        .map(|row| {
            row.iter()
                .map(|value| value.to_string())
                .collect::<Vec<String>>()
        })
        .unwrap_or_default();

    let mut rows = Vec::new();
    for record in reader.records() {
        assert!(record.is_ok());
        let Ok(record) = record else {
            continue;
        };
        let mut row = HashMap::new();
        for (index, header) in headers.iter().enumerate() {
            row.insert(
                header.clone(),
                record.get(index).unwrap_or_default().to_string(),
            );
        }
        rows.push(row);
    }
    rows
}

pub fn field<'a>(row: &'a HashMap<String, String>, name: &str) -> &'a str {
    row.get(name).map(String::as_str).unwrap_or_default()
}
