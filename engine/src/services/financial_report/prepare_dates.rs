// Date normalization: publication date -> parsed date, year, month, month label
use chrono::Datelike;
use serde_json::Value;
use shared::utils::brazilian_format;

use crate::data::record_table::RecordTable;

/// Parses each record's publication date (day first) and fills in the
/// derived year, month and `"%m/%b"` label. Dates that do not parse, and
/// non-text values, leave all derived fields empty.
pub fn prepare_dates(table: &mut RecordTable) {
    let mut unparsed = 0usize;
    for record in table.records_mut() {
        let parsed = match &record.publication_date {
            Some(Value::String(s)) => brazilian_format::parse_date(s).ok(),
            _ => None,
        };
        if parsed.is_none() {
            unparsed += 1;
            tracing::debug!(value = ?record.publication_date, "Publication date left empty");
        }

        record.published_on = parsed;
        record.year = parsed.map(|d| d.year());
        record.month = parsed.map(|d| d.month());
        record.month_label = parsed.map(|d| d.format("%m/%b").to_string());
    }
    tracing::debug!(records = table.len(), unparsed, "Publication dates prepared");
}
