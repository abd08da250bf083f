use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("XML error: {message}")]
    XmlError { message: String },

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Unsupported file extension '{extension}' for {path}")]
    UnsupportedExtension { path: String, extension: String },

    #[error("File has no extension, cannot infer format: {path}")]
    MissingExtension { path: String },

    #[error("Unknown format '{name}' (expected one of: json, yml, xml)")]
    UnknownFormat { name: String },

    #[error("Invalid {format} document: {message}")]
    InvalidStructure { format: String, message: String },

    #[error("Validation error: missing or empty required field(s): {}", missing.join(", "))]
    ValidationError { missing: Vec<String> },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}': {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Parse,
    Format,
    Validation,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    High,
    Critical,
}

impl ConvertError {
    pub fn xml(err: impl std::fmt::Display) -> Self {
        ConvertError::XmlError {
            message: err.to_string(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            ConvertError::IoError(_) => ErrorCategory::Io,
            ConvertError::JsonError(_)
            | ConvertError::YamlError(_)
            | ConvertError::XmlError { .. }
            | ConvertError::InvalidStructure { .. } => ErrorCategory::Parse,
            ConvertError::UnsupportedExtension { .. }
            | ConvertError::MissingExtension { .. }
            | ConvertError::UnknownFormat { .. } => ErrorCategory::Format,
            ConvertError::ValidationError { .. } => ErrorCategory::Validation,
            ConvertError::TomlError(_)
            | ConvertError::ConfigError { .. }
            | ConvertError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
        }
    }

    /// 驗證失敗只會中止轉換，不視為程式失敗
    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Validation => ErrorSeverity::Low,
            ErrorCategory::Parse | ErrorCategory::Format | ErrorCategory::Configuration => {
                ErrorSeverity::High
            }
            ErrorCategory::Io => ErrorSeverity::Critical,
        }
    }

    /// 驗證失敗視為成功結束，其餘錯誤一律為 1
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::High | ErrorSeverity::Critical => 1,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            ConvertError::IoError(e) => match e.kind() {
                std::io::ErrorKind::NotFound => {
                    "Check that the input file exists and the path is spelled correctly".to_string()
                }
                std::io::ErrorKind::PermissionDenied => {
                    "Check read permission on the input and write permission on the output directory"
                        .to_string()
                }
                _ => "Check the file paths and available disk space".to_string(),
            },
            ConvertError::JsonError(_) => "Fix the JSON syntax of the input file".to_string(),
            ConvertError::YamlError(_) => "Fix the YAML syntax of the input file".to_string(),
            ConvertError::XmlError { .. } => {
                "Fix the XML syntax of the input, or rename fields that are not valid element names"
                    .to_string()
            }
            ConvertError::InvalidStructure { format, .. } => {
                format!("The top level of the {} input must hold named fields", format)
            }
            ConvertError::TomlError(_) => "Fix the TOML syntax of the job file".to_string(),
            ConvertError::UnsupportedExtension { .. } | ConvertError::MissingExtension { .. } => {
                "Use a .json, .yml, .yaml or .xml file, or pass the formats explicitly".to_string()
            }
            ConvertError::UnknownFormat { .. } => "Use one of: json, yml, xml".to_string(),
            ConvertError::ValidationError { missing } => {
                format!("Add a non-empty value for: {}", missing.join(", "))
            }
            ConvertError::ConfigError { .. } | ConvertError::InvalidConfigValueError { .. } => {
                "Review the command line arguments or job file".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ConvertError::IoError(e) => format!("Could not access file: {}", e),
            ConvertError::JsonError(e) => format!("Input is not valid JSON: {}", e),
            ConvertError::YamlError(e) => format!("Input is not valid YAML: {}", e),
            ConvertError::XmlError { message } => format!("XML processing failed: {}", message),
            ConvertError::ValidationError { missing } => format!(
                "Record rejected, required field(s) missing: {}. Nothing was written.",
                missing.join(", ")
            ),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ConvertError>;
