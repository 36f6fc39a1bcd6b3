use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct ValidationSummary {
    pub rows_read: i64,
    pub rows_valid: i64,
    pub rows_invalid: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct RowIssue {
    pub row: i64,
    pub field: String,
    pub code: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub received: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProcessSummary {
    pub rows_read: i64,
    pub rows_written: i64,
    pub groups_total: i64,
    pub recurring_groups: i64,
    pub predicted_rows: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProcessData {
    pub input_path: String,
    pub output_path: String,
    pub policy_version: String,
    pub message: String,
    pub summary: ProcessSummary,
}

#[derive(Debug, Clone, Serialize)]
pub struct RecurringBillRow {
    pub amount: f64,
    pub description: String,
    pub date: String,
    #[serde(rename = "nextDate")]
    pub next_date: String,
    pub occurrence_count: i64,
    pub avg_interval_days: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct BillsData {
    pub input_path: String,
    pub policy_version: String,
    pub rows: Vec<RecurringBillRow>,
}
