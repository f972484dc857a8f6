// Pipeline configuration, built once at startup and passed down explicitly.
pub mod settings;
