use crate::records::EnrichedRecord;
use crate::recurrence::date::{format_iso_date, format_iso_datetime};
use crate::{CoreError, CoreResult};

/// Output column order is fixed regardless of how the input was laid out.
pub(crate) const OUTPUT_COLUMNS: [&str; 14] = [
    "id",
    "created_at",
    "external_id",
    "type",
    "amount",
    "date",
    "description",
    "category",
    "counter_party",
    "recurring",
    "tag",
    "account_external_id",
    "location",
    "predicted_next_payment",
];

pub(crate) fn write_output_file(path: &str, rows: &[EnrichedRecord]) -> CoreResult<()> {
    let mut writer = csv::Writer::from_path(path)
        .map_err(|error| CoreError::output_file_unwritable(path, &error.to_string()))?;

    writer
        .write_record(OUTPUT_COLUMNS)
        .map_err(|error| CoreError::output_file_unwritable(path, &error.to_string()))?;

    for row in rows {
        writer
            .write_record(record_fields(row))
            .map_err(|error| CoreError::output_file_unwritable(path, &error.to_string()))?;
    }

    writer
        .flush()
        .map_err(|error| CoreError::output_file_unwritable(path, &error.to_string()))
}

pub(crate) fn record_fields(row: &EnrichedRecord) -> [String; 14] {
    [
        row.id.clone(),
        format_iso_datetime(&row.created_at),
        row.external_id.clone(),
        row.kind.clone(),
        row.amount.to_string(),
        format_iso_date(&row.occurred_on),
        row.description.clone(),
        row.category.clone(),
        row.counter_party.clone(),
        if row.recurring { "true" } else { "false" }.to_string(),
        row.tag.clone(),
        row.account_external_id.clone(),
        row.location.clone(),
        row.predicted_next_payment
            .as_ref()
            .map(format_iso_date)
            .unwrap_or_default(),
    ]
}
