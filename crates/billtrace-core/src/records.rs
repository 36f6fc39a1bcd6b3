use chrono::{NaiveDate, NaiveDateTime};

/// A validated row from a transaction export, one per input line.
#[derive(Debug, Clone)]
pub struct TransactionRecord {
    pub external_id: String,
    /// Raw `HH:MM[.S]` clock string, normalized later by the enricher.
    pub created_at_raw: String,
    /// Transaction kind (e.g. DEBIT/CREDIT); opaque to the recurrence core.
    pub kind: String,
    pub amount: f64,
    pub occurred_on: NaiveDate,
    pub description: String,
    pub category: String,
    pub counter_party: String,
    pub tag: String,
    pub account_external_id: String,
    pub location: String,
}

impl TransactionRecord {
    /// Amount in whole cents, used when comparing amounts for equality.
    pub fn amount_cents(&self) -> i64 {
        (self.amount * 100.0).round() as i64
    }
}

/// An output row: the input record plus a generated identifier, normalized
/// timestamps, and the recurrence verdict for its series.
#[derive(Debug, Clone)]
pub struct EnrichedRecord {
    pub id: String,
    pub created_at: NaiveDateTime,
    pub external_id: String,
    pub kind: String,
    pub amount: f64,
    pub occurred_on: NaiveDate,
    pub description: String,
    pub category: String,
    pub counter_party: String,
    pub recurring: bool,
    pub tag: String,
    pub account_external_id: String,
    pub location: String,
    pub predicted_next_payment: Option<NaiveDate>,
}
