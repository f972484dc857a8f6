use shared::models::Record;
use std::fs::File;
use std::io::{BufReader, ErrorKind};
use std::path::{Path, PathBuf};

use crate::config::settings::PipelineSettings;
use crate::data::record_table::RecordTable;
use crate::error::EngineError;

pub struct JsonRecordLoader;

impl JsonRecordLoader {
    /// Resolves the source to read. `None` means the configured default file;
    /// relative paths are taken inside the input directory.
    pub fn resolve_source(settings: &PipelineSettings, source: Option<&Path>) -> Result<PathBuf, EngineError> {
        let path = match source {
            Some(p) => settings.input_dir.join(p), // join keeps absolute paths as they are
            None => settings.default_source(),
        };
        if !path.exists() {
            tracing::warn!(path = %path.display(), "Record source does not exist");
            return Err(EngineError::SourceNotFound { path });
        }
        Ok(path)
    }

    // Input: a JSON array of objects, e.g.
    // [{"Data publicação": "15/03/2023", "Valor agência": "1.000,00", "Valor unidade": 500, "Projeto": "..."}]
    pub fn load_records(settings: &PipelineSettings, source: Option<&Path>) -> Result<RecordTable, EngineError> {
        let path = Self::resolve_source(settings, source)?;
        let file = File::open(&path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => EngineError::SourceNotFound { path: path.clone() },
            _ => EngineError::from(e),
        })?;

        let records: Vec<Record> = serde_json::from_reader(BufReader::new(file))
            .map_err(|source| EngineError::MalformedSource { path: path.clone(), source })?;

        tracing::info!(path = %path.display(), records = records.len(), "Loaded financial records");
        Ok(RecordTable::new(records))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::{MonetaryColumn, MonetaryValue};
    use std::fs;
    use std::io::Write;
    use tempfile::{tempdir, NamedTempFile};

    fn create_test_json(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "{}", content).unwrap();
        file
    }

    #[test]
    fn test_load_records_valid_data() {
        let json = r#"[
            {"Data publicação": "15/03/2023", "Valor agência": "1.000,00", "Valor unidade": 500, "Valor IA-UPE": null, "Projeto": "A"},
            {"Data publicação": "02/01/2024", "Valor agência": 10.5, "Projeto": "B"}
        ]"#;
        let tmp_file = create_test_json(json);
        let table = JsonRecordLoader::load_records(&PipelineSettings::default(), Some(tmp_file.path())).unwrap();

        assert_eq!(table.len(), 2);
        let first = &table.records()[0];
        assert_eq!(first.value(MonetaryColumn::Agency), Some(&MonetaryValue::Text("1.000,00".to_string())));
        assert_eq!(first.value(MonetaryColumn::Institutional), None);
        assert_eq!(first.extra["Projeto"], "A");
        assert_eq!(table.records()[1].unit_value, None);
    }

    #[test]
    fn test_load_records_default_source() {
        let dir = tempdir().unwrap();
        let settings = PipelineSettings {
            input_dir: dir.path().to_path_buf(),
            ..PipelineSettings::default()
        };
        fs::write(settings.default_source(), r#"[{"Valor agência": 1}]"#).unwrap();

        let table = JsonRecordLoader::load_records(&settings, None).unwrap();
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_relative_source_resolves_inside_input_dir() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("outro.json"), "[]").unwrap();
        let settings = PipelineSettings {
            input_dir: dir.path().to_path_buf(),
            ..PipelineSettings::default()
        };

        let resolved = JsonRecordLoader::resolve_source(&settings, Some(Path::new("outro.json"))).unwrap();
        assert_eq!(resolved, dir.path().join("outro.json"));
        assert!(JsonRecordLoader::load_records(&settings, Some(Path::new("outro.json"))).unwrap().is_empty());
    }

    #[test]
    fn test_load_records_source_not_found() {
        let dir = tempdir().unwrap();
        let settings = PipelineSettings {
            input_dir: dir.path().to_path_buf(),
            ..PipelineSettings::default()
        };

        let result = JsonRecordLoader::load_records(&settings, None);
        match result {
            Err(EngineError::SourceNotFound { path }) => assert_eq!(path, settings.default_source()),
            other => panic!("expected SourceNotFound, got {:?}", other),
        }

        let result = JsonRecordLoader::load_records(&settings, Some(Path::new("missing.json")));
        assert!(matches!(result, Err(EngineError::SourceNotFound { .. })));
    }

    #[test]
    fn test_load_records_malformed_source() {
        let tmp_file = create_test_json(r#"{"Valor agência": "1,00"}"#); // an object, not an array
        let result = JsonRecordLoader::load_records(&PipelineSettings::default(), Some(tmp_file.path()));
        assert!(matches!(result, Err(EngineError::MalformedSource { .. })));
        assert!(result.unwrap_err().to_string().starts_with("Malformed source"));
    }
}
