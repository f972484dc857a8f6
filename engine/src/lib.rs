// Engine library root
// Loads disbursement records and turns them into the monthly and annual
// views shown by the dashboard.

pub mod config;
pub mod data;
pub mod error;
pub mod services;
