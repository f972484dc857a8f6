// Writes the 12-row monthly table as CSV for spreadsheet download
use csv::WriterBuilder;
use shared::models::{MonetaryColumn, MonthlyRow};
use shared::utils::brazilian_format;
use std::io::Write;

use crate::error::EngineError;

/// Writes `rows` as `;`-delimited CSV with amounts in Brazilian notation,
/// the layout spreadsheets in pt-BR locales open without an import wizard.
pub fn write_monthly_csv<W: Write>(rows: &[MonthlyRow], writer: W) -> Result<(), EngineError> {
    let mut wtr = WriterBuilder::new().delimiter(b';').from_writer(writer);

    let mut header = vec!["Mes", "MesNome"];
    header.extend(MonetaryColumn::ALL.iter().map(|c| c.header()));
    wtr.write_record(&header)?;

    for row in rows {
        let mut record = vec![row.month.to_string(), row.month_label.clone()];
        record.extend(
            MonetaryColumn::ALL
                .iter()
                .map(|c| brazilian_format::format_decimal(row.amount(*c), 2)),
        );
        wtr.write_record(&record)?;
    }

    wtr.flush()?;
    tracing::debug!(rows = rows.len(), "Monthly table exported as CSV");
    Ok(())
}
