// engine/src/services/financial_report/mod.rs
// Entry point for the UI host. FinancialReport owns the settings and runs the
// pipeline stages declared below: load -> normalize values -> normalize
// dates -> group by month -> summarize.

use shared::models::{AnnualSummary, GroupTotals, YearReport};
use std::path::Path;

use crate::config::settings::PipelineSettings;
use crate::data::json_loader::JsonRecordLoader;
use crate::data::record_table::RecordTable;
use crate::error::EngineError;

pub mod annual_summary;
pub mod compare_projects;
pub mod group_monthly;
pub mod normalize_values;
pub mod prepare_dates;

pub struct FinancialReport {
    settings: PipelineSettings,
}

impl FinancialReport {
    pub fn new(settings: PipelineSettings) -> Self {
        FinancialReport { settings }
    }

    pub fn settings(&self) -> &PipelineSettings {
        &self.settings
    }

    /// Loads the source and runs both normalizers. Loading is the only step
    /// that can fail.
    pub fn load_table(&self, source: Option<&Path>) -> Result<RecordTable, EngineError> {
        let mut table = JsonRecordLoader::load_records(&self.settings, source)?;
        normalize_values::normalize_values(&mut table);
        prepare_dates::prepare_dates(&mut table);
        Ok(table)
    }

    pub fn year_report(&self, table: &RecordTable, year: i32) -> YearReport {
        let months = group_monthly::group_monthly(table, year);
        let summary = annual_summary::annual_summary(&months);
        tracing::info!(year, total = summary.total(), "Year report built");
        YearReport { year, months, summary }
    }

    pub fn available_years(&self, table: &RecordTable) -> Vec<i32> {
        annual_summary::available_years(table)
    }

    pub fn overall_totals(&self, table: &RecordTable) -> AnnualSummary {
        annual_summary::overall_totals(table)
    }

    pub fn compare_by_field(&self, table: &RecordTable, field: &str, year: Option<i32>) -> Vec<GroupTotals> {
        compare_projects::compare_by_field(table, field, year)
    }
}
