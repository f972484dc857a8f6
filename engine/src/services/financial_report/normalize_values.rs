// Monetary normalization: localized strings and JSON numbers become plain f64
use shared::models::{MonetaryColumn, MonetaryValue};
use shared::utils::brazilian_format;

use crate::data::record_table::RecordTable;

/// Turns every present monetary column into `MonetaryValue::Numeric`.
///
/// A column holding only numbers (and nulls) is taken as is, nulls reading
/// as 0.0. Any other column is read as Brazilian text: nulls become `"0"`,
/// numbers use their JSON text (`100.0` stays `"100.0"`), and whatever still
/// fails to parse, or parses to NaN or infinity, becomes 0.0. Running it
/// again on a normalized table changes nothing.
pub fn normalize_values(table: &mut RecordTable) {
    for column in MonetaryColumn::ALL {
        if table.has_column(column) {
            normalize_column(table, column);
        }
    }
}

fn normalize_column(table: &mut RecordTable, column: MonetaryColumn) {
    let all_numeric = table
        .iter()
        .filter_map(|r| r.value(column))
        .all(MonetaryValue::is_numeric);

    let mut substituted = 0usize;
    for record in table.records_mut() {
        let slot = record.value_mut(column);
        let amount = if all_numeric {
            match slot {
                Some(MonetaryValue::Numeric(n)) => n.as_f64().unwrap_or(0.0),
                _ => 0.0,
            }
        } else {
            let text = match slot {
                None => "0".to_string(),
                Some(MonetaryValue::Numeric(n)) => n.to_string(),
                Some(MonetaryValue::Text(s)) => s.clone(),
            };
            match brazilian_format::parse_decimal(&text) {
                Ok(v) if v.is_finite() => v,
                _ => {
                    substituted += 1;
                    tracing::debug!(column = column.header(), value = %text, "Unparseable amount read as 0.0");
                    0.0
                }
            }
        };
        *slot = Some(MonetaryValue::numeric(amount));
    }

    tracing::debug!(
        column = column.header(),
        numeric_source = all_numeric,
        substituted,
        "Monetary column normalized"
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::Record;

    fn text(s: &str) -> Option<MonetaryValue> {
        Some(MonetaryValue::Text(s.to_string()))
    }

    fn table_with_agency(values: Vec<Option<MonetaryValue>>) -> RecordTable {
        RecordTable::new(
            values
                .into_iter()
                .map(|v| Record { agency_value: v, ..Record::default() })
                .collect(),
        )
    }

    fn agency_amounts(table: &RecordTable) -> Vec<Option<MonetaryValue>> {
        table.iter().map(|r| r.agency_value.clone()).collect()
    }

    #[test]
    fn test_localized_strings() {
        let mut table = table_with_agency(vec![text("1.234.567,89"), text("0,00"), text("12,5"), text("1234")]);
        normalize_values(&mut table);
        let amounts: Vec<f64> = table.iter().map(|r| r.amount(MonetaryColumn::Agency)).collect();
        assert_eq!(amounts, vec![1234567.89, 0.0, 12.5, 1234.0]);
    }

    #[test]
    fn test_malformed_strings_become_zero() {
        let mut table = table_with_agency(vec![text("abc"), text(""), None, text("R$ 10,00")]);
        normalize_values(&mut table);
        assert!(agency_amounts(&table).iter().all(|v| *v == Some(MonetaryValue::numeric(0.0))));
    }

    #[test]
    fn test_numeric_column_is_cast() {
        let mut table = table_with_agency(vec![Some(MonetaryValue::numeric(1234.5)), None]);
        normalize_values(&mut table);
        assert_eq!(
            agency_amounts(&table),
            vec![Some(MonetaryValue::numeric(1234.5)), Some(MonetaryValue::numeric(0.0))]
        );
    }

    #[test]
    fn test_numbers_in_a_text_column_go_through_the_text_path() {
        // The dot of "1234.5" is read as a thousands separator.
        let mut table = table_with_agency(vec![
            Some(MonetaryValue::numeric(1234.5)),
            text("1,5"),
            Some(MonetaryValue::numeric(100.0)),
            Some(MonetaryValue::Numeric(100.into())),
        ]);
        normalize_values(&mut table);
        let amounts: Vec<f64> = table.iter().map(|r| r.amount(MonetaryColumn::Agency)).collect();
        assert_eq!(amounts, vec![12345.0, 1.5, 1000.0, 100.0]);
    }

    #[test]
    fn test_json_float_and_integer_differ_in_a_text_column() {
        let json = r#"[
            {"Valor agência": 100.0},
            {"Valor agência": 100},
            {"Valor agência": "2,50"},
            {"Valor agência": "inf"}
        ]"#;
        let records: Vec<Record> = serde_json::from_str(json).unwrap();
        let mut table = RecordTable::new(records);
        normalize_values(&mut table);

        let amounts: Vec<f64> = table.iter().map(|r| r.amount(MonetaryColumn::Agency)).collect();
        assert_eq!(amounts, vec![1000.0, 100.0, 2.5, 0.0]);
    }

    #[test]
    fn test_idempotent() {
        let mut once = table_with_agency(vec![text("1.000,00"), text("x"), None, text("2,50")]);
        normalize_values(&mut once);
        let mut twice = once.clone();
        normalize_values(&mut twice);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_absent_column_stays_absent() {
        let mut table = table_with_agency(vec![text("1,00")]);
        normalize_values(&mut table);
        assert!(table.iter().all(|r| r.unit_value.is_none() && r.institutional_value.is_none()));
    }
}
