// Loading records into memory and writing tables back out
pub mod csv_export;
pub mod json_loader;
pub mod record_table;
