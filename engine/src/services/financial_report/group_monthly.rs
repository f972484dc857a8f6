// Monthly aggregation: one row per calendar month of the requested year
use shared::models::{MonetaryColumn, MonthlyRow};
use shared::utils::brazilian_format::month_label;
use std::collections::BTreeMap;

use crate::data::record_table::RecordTable;

/// Sums the monetary columns of `year` per month.
///
/// Always returns 12 rows, months 1 through 12 in order; months without
/// records carry zeros. Expects a table that went through the value and
/// date normalizers.
pub fn group_monthly(table: &RecordTable, year: i32) -> Vec<MonthlyRow> {
    let scaffold = (1..=12u32).map(|month| (month, month_label(month)));

    let mut grouped: BTreeMap<(u32, String), MonthlyRow> = BTreeMap::new();
    for record in table.for_year(year) {
        let (Some(month), Some(label)) = (record.month, record.month_label.as_deref()) else {
            continue;
        };
        let row = grouped
            .entry((month, label.to_string()))
            .or_insert_with(|| MonthlyRow::empty(month, label.to_string()));
        for column in MonetaryColumn::ALL {
            row.add(column, record.amount(column));
        }
    }

    if grouped.is_empty() {
        tracing::debug!(year, "No records for year, months left at zero");
    }

    scaffold
        .map(|(month, label)| {
            grouped
                .remove(&(month, label.clone()))
                .unwrap_or_else(|| MonthlyRow::empty(month, label))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::financial_report::{normalize_values::normalize_values, prepare_dates::prepare_dates};
    use serde_json::Value;
    use shared::models::{MonetaryValue, Record};

    fn record(date: &str, agency: &str, unit: f64) -> Record {
        Record {
            publication_date: Some(Value::from(date)),
            agency_value: Some(MonetaryValue::Text(agency.to_string())),
            unit_value: Some(MonetaryValue::numeric(unit)),
            ..Record::default()
        }
    }

    fn normalized(records: Vec<Record>) -> RecordTable {
        let mut table = RecordTable::new(records);
        normalize_values(&mut table);
        prepare_dates(&mut table);
        table
    }

    fn assert_full_year(rows: &[MonthlyRow]) {
        assert_eq!(rows.len(), 12);
        for (i, row) in rows.iter().enumerate() {
            assert_eq!(row.month, i as u32 + 1);
            assert_eq!(row.month_label, month_label(row.month));
        }
    }

    #[test]
    fn test_empty_year_has_twelve_zero_rows() {
        let table = normalized(vec![record("15/03/2023", "1,00", 1.0)]);
        let rows = group_monthly(&table, 1999);
        assert_full_year(&rows);
        assert!(rows.iter().all(|r| r.agency == 0.0 && r.unit == 0.0 && r.institutional == 0.0));
        assert_eq!(rows[0].month_label, "01/Jan");
    }

    #[test]
    fn test_empty_table() {
        let rows = group_monthly(&RecordTable::default(), 2024);
        assert_full_year(&rows);
    }

    #[test]
    fn test_same_month_merges() {
        let table = normalized(vec![
            record("01/05/2024", "1.000,00", 10.0),
            record("31/05/2024 18:00", "250,50", 5.0),
            record("10/11/2024", "3,00", 0.0),
            record("10/11/2023", "99,00", 99.0),
        ]);
        let rows = group_monthly(&table, 2024);
        assert_full_year(&rows);

        assert_eq!(rows[4].agency, 1250.5);
        assert_eq!(rows[4].unit, 15.0);
        assert_eq!(rows[10].agency, 3.0);
        let others: f64 = rows
            .iter()
            .filter(|r| r.month != 5 && r.month != 11)
            .map(|r| r.agency + r.unit + r.institutional)
            .sum();
        assert_eq!(others, 0.0);
    }

    #[test]
    fn test_undated_records_are_excluded() {
        let table = normalized(vec![record("sem data", "500,00", 1.0), record("02/02/2024", "1,00", 0.0)]);
        let rows = group_monthly(&table, 2024);
        let agency: f64 = rows.iter().map(|r| r.agency).sum();
        assert_eq!(agency, 1.0);
    }
}
