use crate::utils::error::{ConvertError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// 可辨識的副檔名（小寫）
pub const SUPPORTED_EXTENSIONS: [&str; 4] = ["json", "yml", "yaml", "xml"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum Format {
    Json,
    #[serde(rename = "yml", alias = "yaml")]
    #[cfg_attr(feature = "cli", value(name = "yml", alias = "yaml"))]
    Yaml,
    Xml,
}

impl Format {
    pub const ALL: [Format; 3] = [Format::Json, Format::Yaml, Format::Xml];

    pub fn name(&self) -> &'static str {
        match self {
            Format::Json => "json",
            Format::Yaml => "yml",
            Format::Xml => "xml",
        }
    }

    /// Infers the format from a path's extension without touching the file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .ok_or_else(|| ConvertError::MissingExtension {
                path: path.display().to_string(),
            })?;

        match extension.to_ascii_lowercase().as_str() {
            "json" => Ok(Format::Json),
            "yml" | "yaml" => Ok(Format::Yaml),
            "xml" => Ok(Format::Xml),
            _ => Err(ConvertError::UnsupportedExtension {
                path: path.display().to_string(),
                extension: extension.to_string(),
            }),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Format {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(Format::Json),
            "yml" | "yaml" => Ok(Format::Yaml),
            "xml" => Ok(Format::Xml),
            _ => Err(ConvertError::UnknownFormat {
                name: s.to_string(),
            }),
        }
    }
}
