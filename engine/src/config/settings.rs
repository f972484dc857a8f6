// Pipeline settings, loaded from an optional JSON config file and the environment
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::EngineError;

/// Names the JSON config file to read at startup.
pub const CONFIG_ENV: &str = "FINANCEIRO_CONFIG";
/// Overrides `input_dir` regardless of the config file.
pub const INPUT_DIR_ENV: &str = "FINANCEIRO_INPUT_DIR";

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct PipelineSettings {
    /// Directory holding the record files. Relative source paths resolve here.
    pub input_dir: PathBuf,
    /// File read when the caller names no source.
    pub default_file_name: String,
    /// Year reported when the caller does not ask for one.
    pub default_year: Option<i32>,
}

impl Default for PipelineSettings {
    fn default() -> Self {
        PipelineSettings {
            input_dir: PathBuf::from("input"),
            default_file_name: "Projetos de Desenvolvimento Tecnologico.json".to_string(),
            default_year: None,
        }
    }
}

impl PipelineSettings {
    pub fn default_source(&self) -> PathBuf {
        self.input_dir.join(&self.default_file_name)
    }

    /// Reads settings from a JSON file. Fields missing from the file keep
    /// their defaults.
    pub fn from_json_file(path: &Path) -> Result<Self, EngineError> {
        let content = fs::read_to_string(path).map_err(|e| {
            EngineError::ConfigError(format!("Failed to read config file '{}': {}", path.display(), e))
        })?;
        serde_json::from_str(&content).map_err(|e| {
            EngineError::ConfigError(format!("Failed to parse config file '{}': {}", path.display(), e))
        })
    }

    pub fn load_from(config_path: Option<&Path>, input_dir_override: Option<String>) -> Result<Self, EngineError> {
        let mut settings = match config_path {
            Some(path) => Self::from_json_file(path)?,
            None => Self::default(),
        };
        if let Some(dir) = input_dir_override.filter(|d| !d.trim().is_empty()) {
            settings.input_dir = PathBuf::from(dir);
        }
        tracing::debug!(
            input_dir = %settings.input_dir.display(),
            default_file = %settings.default_file_name,
            default_year = ?settings.default_year,
            "Pipeline settings resolved"
        );
        Ok(settings)
    }

    /// Settings for the running process: `FINANCEIRO_CONFIG` names an
    /// optional config file, `FINANCEIRO_INPUT_DIR` overrides the input directory.
    pub fn load() -> Result<Self, EngineError> {
        let config_path = std::env::var_os(CONFIG_ENV).map(PathBuf::from);
        let input_dir = std::env::var(INPUT_DIR_ENV).ok();
        Self::load_from(config_path.as_deref(), input_dir)
    }
}
