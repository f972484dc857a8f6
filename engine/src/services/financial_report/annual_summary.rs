// Totals for the dashboard cards
use shared::models::{AnnualSummary, MonetaryColumn, MonthlyRow};

use crate::data::record_table::RecordTable;

/// Year totals from the 12 monthly rows.
pub fn annual_summary(rows: &[MonthlyRow]) -> AnnualSummary {
    let mut summary = AnnualSummary::default();
    for row in rows {
        for column in MonetaryColumn::ALL {
            summary.add(column, row.amount(column));
        }
    }
    summary
}

/// Totals over every record of the table, dated or not.
pub fn overall_totals(table: &RecordTable) -> AnnualSummary {
    let mut summary = AnnualSummary::default();
    for record in table {
        for column in MonetaryColumn::ALL {
            summary.add(column, record.amount(column));
        }
    }
    summary
}

/// Years with at least one dated record, newest first.
pub fn available_years(table: &RecordTable) -> Vec<i32> {
    let mut years: Vec<i32> = table.iter().filter_map(|r| r.year).collect();
    years.sort_unstable_by(|a, b| b.cmp(a));
    years.dedup();
    years
}
