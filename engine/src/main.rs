// Engine main entry point: a plain-text stand-in for the dashboard page.
// Usage: engine [year] [source-path]
use anyhow::{Context, Result};
use chrono::{Datelike, Local};
use engine::config::settings::PipelineSettings;
use engine::services::FinancialReport;
use shared::models::MonetaryColumn;
use shared::utils::brazilian_format::format_brl;
use std::path::PathBuf;
use tracing::info;

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    info!("Starting financial report...");

    let settings = PipelineSettings::load().context("Failed to load pipeline settings")?;

    let mut args = std::env::args().skip(1);
    let year = match args.next() {
        Some(arg) => arg
            .parse::<i32>()
            .with_context(|| format!("Invalid year '{}'", arg))?,
        None => settings.default_year.unwrap_or_else(|| Local::now().year()),
    };
    let source = args.next().map(PathBuf::from);

    let report = FinancialReport::new(settings);
    let table = report
        .load_table(source.as_deref())
        .context("Failed to load financial records")?;
    let year_report = report.year_report(&table, year);

    let years: Vec<String> = report.available_years(&table).iter().map(i32::to_string).collect();
    println!("Anos disponíveis: {}", years.join(", "));
    println!();
    println!("Total mensal {}", year);
    println!(
        "{:<8} {:>20} {:>20} {:>20}",
        "Mês",
        MonetaryColumn::Agency.header(),
        MonetaryColumn::Unit.header(),
        MonetaryColumn::Institutional.header()
    );
    for row in &year_report.months {
        println!(
            "{:<8} {:>20} {:>20} {:>20}",
            row.month_label,
            format_brl(row.agency),
            format_brl(row.unit),
            format_brl(row.institutional)
        );
    }
    println!();
    println!("Agência: {}", format_brl(year_report.summary.agencia));
    println!("Unidade: {}", format_brl(year_report.summary.unidade));
    println!("IA-UPE:  {}", format_brl(year_report.summary.ia_upe));

    Ok(())
}
