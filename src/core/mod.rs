pub mod engine;
pub mod loader;
pub mod pipeline;
pub mod saver;

pub use crate::domain::model::{FieldValue, Record};
pub use crate::domain::ports::{ConversionSettings, Pipeline, Storage};
pub use crate::utils::error::Result;

use crate::adapters::storage::LocalStorage;
use crate::domain::format::Format;
use engine::ConvertEngine;
use pipeline::{ConversionPipeline, ConversionPlan};

/// Converts `input` to `output` with explicit formats, returning the output path.
pub fn convert(
    input: &str,
    output: &str,
    input_format: Format,
    output_format: Format,
) -> Result<String> {
    let plan = ConversionPlan::new(input, output, input_format, output_format);
    ConvertEngine::new(ConversionPipeline::new(LocalStorage::default(), plan)).run()
}

/// Same as [`convert`], with both formats inferred from the file extensions.
/// An unsupported extension fails before any file is read.
pub fn convert_by_extension(input: &str, output: &str) -> Result<String> {
    let plan = ConversionPlan::infer(input, output)?;
    ConvertEngine::new(ConversionPipeline::new(LocalStorage::default(), plan)).run()
}

#[cfg(test)]
pub(crate) mod mock {
    use crate::domain::ports::Storage;
    use crate::utils::error::{ConvertError, Result};
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    pub struct MockStorage {
        files: Arc<Mutex<HashMap<String, Vec<u8>>>>,
    }

    impl MockStorage {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_file(path: &str, content: &str) -> Self {
            let storage = Self::new();
            storage
                .files
                .lock()
                .unwrap()
                .insert(path.to_string(), content.as_bytes().to_vec());
            storage
        }

        pub fn get_file_text(&self, path: &str) -> Option<String> {
            let files = self.files.lock().unwrap();
            files
                .get(path)
                .map(|data| String::from_utf8_lossy(data).into_owned())
        }
    }

    impl Storage for MockStorage {
        fn read_file(&self, path: &str) -> Result<Vec<u8>> {
            let files = self.files.lock().unwrap();
            files.get(path).cloned().ok_or_else(|| {
                ConvertError::IoError(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    format!("File not found: {}", path),
                ))
            })
        }

        fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
            let mut files = self.files.lock().unwrap();
            files.insert(path.to_string(), data.to_vec());
            Ok(())
        }
    }
}
