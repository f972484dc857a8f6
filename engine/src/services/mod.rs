// Services exposed to the UI host
pub mod financial_report;

pub use financial_report::FinancialReport;
