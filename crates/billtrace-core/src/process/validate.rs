use chrono::NaiveDate;

use crate::contracts::types::{RowIssue, ValidationSummary};
use crate::process::parse::ParsedRow;
use crate::records::TransactionRecord;
use crate::recurrence::date::parse_input_date;
use crate::{CoreError, CoreResult};

/// Checks the fields grouping and interval math depend on. A malformed
/// occurrence date or amount fails the whole run; free-text fields pass
/// through as-is (empty included), and the raw creation-time string is kept
/// for the enricher's lenient handling.
pub(crate) fn validate_rows(parsed_rows: Vec<ParsedRow>) -> CoreResult<Vec<TransactionRecord>> {
    let total_rows = parsed_rows.len();
    let mut records = Vec::with_capacity(total_rows);
    let mut issues: Vec<RowIssue> = Vec::new();

    for raw in parsed_rows {
        let mut row_issues = Vec::new();

        let occurred_on = validate_date(raw.row, raw.date, &mut row_issues);
        let amount = validate_amount(raw.row, raw.amount, &mut row_issues);

        if row_issues.is_empty() {
            records.push(TransactionRecord {
                external_id: raw.external_id.unwrap_or_default(),
                created_at_raw: raw.created_at.unwrap_or_default(),
                kind: raw.kind.unwrap_or_default(),
                amount: amount.unwrap_or_default(),
                occurred_on: occurred_on.unwrap_or_default(),
                description: raw.description.unwrap_or_default(),
                category: raw.category.unwrap_or_default(),
                counter_party: raw.counter_party.unwrap_or_default(),
                tag: raw.tag.unwrap_or_default(),
                account_external_id: raw.account_external_id.unwrap_or_default(),
                location: raw.location.unwrap_or_default(),
            });
        } else {
            issues.extend(row_issues);
        }
    }

    if !issues.is_empty() {
        let invalid_rows = issues
            .iter()
            .map(|issue| issue.row)
            .collect::<std::collections::HashSet<i64>>()
            .len();
        let summary = ValidationSummary {
            rows_read: total_rows as i64,
            rows_valid: records.len() as i64,
            rows_invalid: invalid_rows as i64,
        };
        return Err(CoreError::input_validation_failed(summary, issues));
    }

    Ok(records)
}

fn validate_date(row: i64, value: Option<String>, issues: &mut Vec<RowIssue>) -> Option<NaiveDate> {
    let candidate = value.unwrap_or_default();
    if candidate.trim().is_empty() {
        issues.push(RowIssue {
            row,
            field: "date".to_string(),
            code: "missing_required_field".to_string(),
            description: "date must be present and non-empty.".to_string(),
            expected: Some("DD/MM/YYYY".to_string()),
            received: Some(String::new()),
        });
        return None;
    }

    let parsed = parse_input_date(&candidate);
    if parsed.is_none() {
        issues.push(RowIssue {
            row,
            field: "date".to_string(),
            code: "invalid_date".to_string(),
            description: format!("date must be DD/MM/YYYY; got \"{candidate}\""),
            expected: Some("DD/MM/YYYY".to_string()),
            received: Some(candidate),
        });
    }
    parsed
}

fn validate_amount(row: i64, value: Option<String>, issues: &mut Vec<RowIssue>) -> Option<f64> {
    let candidate = value.unwrap_or_default();
    let trimmed = candidate.trim();

    if let Ok(amount) = trimmed.parse::<f64>()
        && amount.is_finite()
    {
        return Some(amount);
    }

    issues.push(RowIssue {
        row,
        field: "amount".to_string(),
        code: "invalid_number".to_string(),
        description: format!("amount must be numeric; got \"{trimmed}\""),
        expected: Some("number (e.g. -42.15)".to_string()),
        received: Some(trimmed.to_string()),
    });
    None
}

#[cfg(test)]
mod tests {
    use crate::process::parse::ParsedRow;

    use super::validate_rows;

    fn raw(row: i64, date: &str, amount: &str) -> ParsedRow {
        ParsedRow {
            row,
            external_id: Some("txn".to_string()),
            created_at: Some("12:00".to_string()),
            kind: Some("DEBIT".to_string()),
            amount: Some(amount.to_string()),
            date: Some(date.to_string()),
            description: Some("Rent".to_string()),
            category: Some("Housing".to_string()),
            counter_party: Some("Landlord".to_string()),
            tag: None,
            account_external_id: Some("acct".to_string()),
            location: None,
        }
    }

    #[test]
    fn valid_rows_become_records() {
        let records = validate_rows(vec![raw(1, "15/03/2023", "-42.15")]);
        assert!(records.is_ok());
        if let Ok(rows) = records {
            assert_eq!(rows.len(), 1);
            assert_eq!(rows[0].amount, -42.15);
            assert_eq!(
                rows[0].occurred_on.format("%Y-%m-%d").to_string(),
                "2023-03-15"
            );
            assert_eq!(rows[0].location, "");
        }
    }

    #[test]
    fn malformed_date_fails_the_run() {
        let result = validate_rows(vec![raw(1, "2023-03-15", "100")]);
        assert!(result.is_err());
        if let Err(error) = result {
            assert_eq!(error.code, "input_validation_failed");
        }
    }

    #[test]
    fn non_numeric_amount_fails_the_run() {
        let result = validate_rows(vec![raw(1, "15/03/2023", "ten")]);
        assert!(result.is_err());
    }

    #[test]
    fn empty_amount_is_not_coerced_to_zero() {
        let result = validate_rows(vec![raw(1, "15/03/2023", "")]);
        assert!(result.is_err());
    }

    #[test]
    fn one_bad_row_reports_but_does_not_pass_the_good_ones() {
        let result = validate_rows(vec![raw(1, "15/03/2023", "100"), raw(2, "bad", "100")]);
        assert!(result.is_err());
        if let Err(error) = result {
            let data = error.data.unwrap_or_default();
            assert_eq!(data["summary"]["rows_read"], 2);
            assert_eq!(data["summary"]["rows_valid"], 1);
            assert_eq!(data["summary"]["rows_invalid"], 1);
            assert_eq!(data["issues"][0]["row"], 2);
        }
    }

    #[test]
    fn infinite_amounts_are_rejected() {
        let result = validate_rows(vec![raw(1, "15/03/2023", "inf")]);
        assert!(result.is_err());
    }
}
