pub mod models;
pub mod utils;

// Data models and Brazilian formatting helpers used by the engine and by
// whatever UI host renders its output.
