// Comparative table: totals per value of a passthrough field (usually the project)
use serde_json::Value;
use shared::models::{GroupTotals, MonetaryColumn};
use std::collections::BTreeMap;

use crate::data::record_table::RecordTable;

/// Groups records by the passthrough `field` and sums the monetary columns
/// of each group. With `year` set, only records dated in that year count.
/// Sorted by descending grand total, ties by key.
pub fn compare_by_field(table: &RecordTable, field: &str, year: Option<i32>) -> Vec<GroupTotals> {
    let mut groups: BTreeMap<Option<String>, GroupTotals> = BTreeMap::new();

    let records = table.iter().filter(|r| year.map_or(true, |y| r.year == Some(y)));
    for record in records {
        let key = group_key(record.extra.get(field));
        let group = groups.entry(key.clone()).or_insert_with(|| GroupTotals {
            key,
            records: 0,
            totals: Default::default(),
        });
        group.records += 1;
        for column in MonetaryColumn::ALL {
            group.totals.add(column, record.amount(column));
        }
    }

    let mut out: Vec<GroupTotals> = groups.into_values().collect();
    out.sort_by(|a, b| {
        b.totals
            .total()
            .total_cmp(&a.totals.total())
            .then_with(|| a.key.cmp(&b.key))
    });
    tracing::debug!(field, ?year, groups = out.len(), "Comparative table built");
    out
}

fn group_key(value: Option<&Value>) -> Option<String> {
    match value {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s.clone()),
        Some(other) => Some(other.to_string()),
    }
}
