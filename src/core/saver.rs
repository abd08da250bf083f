//! Serializes a [`Record`] into a target format and writes it out.
//!
//! Saving performs no validation and overwrites the destination.

use std::path::Path;

use crate::adapters::storage::LocalStorage;
use crate::codec;
use crate::domain::format::Format;
use crate::domain::model::Record;
use crate::domain::ports::Storage;
use crate::utils::error::Result;

pub struct Saver<S: Storage> {
    storage: S,
}

impl<S: Storage> Saver<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn save(&self, format: Format, record: &Record, path: &str) -> Result<()> {
        let text = codec::encode(format, record)?;
        tracing::debug!("Writing {} output ({} bytes) to {}", format, text.len(), path);
        self.storage.write_file(path, text.as_bytes())
    }
}

pub fn save(format: Format, record: &Record, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref().to_string_lossy();
    Saver::new(LocalStorage::default()).save(format, record, &path)
}

pub fn save_json(record: &Record, path: impl AsRef<Path>) -> Result<()> {
    save(Format::Json, record, path)
}

pub fn save_yaml(record: &Record, path: impl AsRef<Path>) -> Result<()> {
    save(Format::Yaml, record, path)
}

pub fn save_xml(record: &Record, path: impl AsRef<Path>) -> Result<()> {
    save(Format::Xml, record, path)
}
