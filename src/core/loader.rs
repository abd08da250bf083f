//! Reads a file in one of the supported formats and turns it into a validated
//! [`Record`].
//!
//! Parse failures and I/O failures propagate unchanged. A record without a
//! non-empty `name` and `age` is rejected with
//! [`ConvertError::ValidationError`] so the caller never reaches the save step.

use std::path::Path;

use crate::adapters::storage::LocalStorage;
use crate::codec;
use crate::domain::format::Format;
use crate::domain::model::Record;
use crate::domain::ports::Storage;
use crate::utils::error::{ConvertError, Result};
use crate::utils::validation::Validate;

pub struct Loader<S: Storage> {
    storage: S,
}

impl<S: Storage> Loader<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn load(&self, format: Format, path: &str) -> Result<Record> {
        tracing::debug!("Reading {} input from {}", format, path);
        let bytes = self.storage.read_file(path)?;
        let text = String::from_utf8(bytes).map_err(|e| ConvertError::InvalidStructure {
            format: format.name().to_uppercase(),
            message: format!("input is not valid UTF-8: {}", e),
        })?;

        let record = codec::decode(format, &text)?;
        if let Err(e) = record.validate() {
            tracing::warn!("Rejected record from {}: {}", path, e);
            return Err(e);
        }

        tracing::debug!("Loaded {} field(s) from {}", record.len(), path);
        Ok(record)
    }
}

pub fn load(format: Format, path: impl AsRef<Path>) -> Result<Record> {
    let path = path.as_ref().to_string_lossy();
    Loader::new(LocalStorage::default()).load(format, &path)
}

pub fn load_json(path: impl AsRef<Path>) -> Result<Record> {
    load(Format::Json, path)
}

pub fn load_yaml(path: impl AsRef<Path>) -> Result<Record> {
    load(Format::Yaml, path)
}

pub fn load_xml(path: impl AsRef<Path>) -> Result<Record> {
    load(Format::Xml, path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::mock::MockStorage;
    use tempfile::TempDir;

    #[test]
    fn test_load_json_record() {
        let storage = MockStorage::with_file("ann.json", r#"{"name":"Ann","age":30}"#);
        let record = Loader::new(&storage).load(Format::Json, "ann.json").unwrap();

        assert_eq!(record.get_text("name"), Some("Ann"));
        assert_eq!(record.get_text("age"), Some("30"));
    }

    #[test]
    fn test_load_rejects_missing_required_field() {
        let storage = MockStorage::with_file("bob.yml", "name: Bob\n");

        match Loader::new(&storage).load(Format::Yaml, "bob.yml") {
            Err(ConvertError::ValidationError { missing }) => assert_eq!(missing, vec!["age"]),
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_load_rejects_empty_required_field() {
        let storage = MockStorage::with_file("ann.xml", "<root><name>Ann</name><age/></root>");
        assert!(matches!(
            Loader::new(&storage).load(Format::Xml, "ann.xml"),
            Err(ConvertError::ValidationError { .. })
        ));
    }

    #[test]
    fn test_load_reports_invalid_utf8() {
        let storage = MockStorage::new();
        storage.write_file("bin.json", &[0xff, 0xfe, 0x00]).unwrap();

        assert!(matches!(
            Loader::new(&storage).load(Format::Json, "bin.json"),
            Err(ConvertError::InvalidStructure { .. })
        ));
    }

    #[test]
    fn test_load_helpers_read_from_disk() {
        let temp_dir = TempDir::new().unwrap();
        let json_path = temp_dir.path().join("ann.json");
        let yaml_path = temp_dir.path().join("ann.yaml");
        let xml_path = temp_dir.path().join("ann.xml");
        std::fs::write(&json_path, r#"{"name":"Ann","age":30}"#).unwrap();
        std::fs::write(&yaml_path, "name: Ann\nage: 30\n").unwrap();
        std::fs::write(&xml_path, "<root><name>Ann</name><age>30</age></root>").unwrap();

        let expected = Record::from_fields([("name", "Ann"), ("age", "30")]);
        assert_eq!(load_json(&json_path).unwrap(), expected);
        assert_eq!(load_yaml(&yaml_path).unwrap(), expected);
        assert_eq!(load_xml(&xml_path).unwrap(), expected);
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let temp_dir = TempDir::new().unwrap();
        assert!(matches!(
            load_json(temp_dir.path().join("missing.json")),
            Err(ConvertError::IoError(_))
        ));
    }
}
