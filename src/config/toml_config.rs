use crate::core::ConversionSettings;
use crate::domain::format::{Format, SUPPORTED_EXTENSIONS};
use crate::utils::error::{ConvertError, Result};
use crate::utils::validation::{
    validate_file_extension, validate_non_empty_string, validate_path, Validate,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// 以 TOML 檔描述單一轉換工作
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub job: JobConfig,
    pub input: FileConfig,
    pub output: FileConfig,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobConfig {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileConfig {
    pub path: String,
    pub format: Option<Format>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
    pub json: Option<bool>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;
        Ok(toml::from_str(&processed_content)?)
    }

    /// 替換環境變數 (例如 ${DATA_DIR})，未定義的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| ConvertError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        validate_non_empty_string("job.name", &self.job.name)?;
        validate_path("input.path", &self.input.path)?;
        validate_path("output.path", &self.output.path)?;

        // 沒有指定格式時，副檔名必須可以推斷
        if self.input.format.is_none() {
            validate_file_extension("input.path", &self.input.path, &SUPPORTED_EXTENSIONS)?;
        }
        if self.output.format.is_none() {
            validate_file_extension("output.path", &self.output.path, &SUPPORTED_EXTENSIONS)?;
        }

        if let Some(level) = self.log_level() {
            if !LOG_LEVELS.contains(&level.to_ascii_lowercase().as_str()) {
                return Err(ConvertError::InvalidConfigValueError {
                    field: "logging.level".to_string(),
                    value: level.to_string(),
                    reason: format!("Valid levels: {}", LOG_LEVELS.join(", ")),
                });
            }
        }

        Ok(())
    }

    pub fn log_level(&self) -> Option<&str> {
        self.logging.as_ref().and_then(|l| l.level.as_deref())
    }

    pub fn log_json(&self) -> bool {
        self.logging.as_ref().and_then(|l| l.json).unwrap_or(false)
    }
}

impl ConversionSettings for TomlConfig {
    fn input_path(&self) -> &str {
        &self.input.path
    }

    fn output_path(&self) -> &str {
        &self.output.path
    }

    fn input_format(&self) -> Result<Format> {
        match self.input.format {
            Some(format) => Ok(format),
            None => Format::from_path(&self.input.path),
        }
    }

    fn output_format(&self) -> Result<Format> {
        match self.output.format {
            Some(format) => Ok(format),
            None => Format::from_path(&self.output.path),
        }
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_basic_toml_config() {
        let toml_content = r#"
[job]
name = "people"
description = "Convert Ann to XML"

[input]
path = "data/ann.json"
format = "json"

[output]
path = "out/ann.xml"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.job.name, "people");
        assert_eq!(config.input_format().unwrap(), Format::Json);
        assert_eq!(config.output_format().unwrap(), Format::Xml);
        assert!(config.validate().is_ok());
        assert!(!config.log_json());
    }

    #[test]
    fn test_yaml_format_names() {
        let toml_content = r#"
[job]
name = "yaml"

[input]
path = "in.txt"
format = "yaml"

[output]
path = "out.txt"
format = "yml"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.input.format, Some(Format::Yaml));
        assert_eq!(config.output.format, Some(Format::Yaml));
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("RECORD_CONVERT_TEST_DIR", "/tmp/people");

        let toml_content = r#"
[job]
name = "env"

[input]
path = "${RECORD_CONVERT_TEST_DIR}/ann.json"

[output]
path = "${RECORD_CONVERT_UNDEFINED_VAR}/ann.xml"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.input.path, "/tmp/people/ann.json");
        assert_eq!(config.output.path, "${RECORD_CONVERT_UNDEFINED_VAR}/ann.xml");

        std::env::remove_var("RECORD_CONVERT_TEST_DIR");
    }

    #[test]
    fn test_unknown_format_is_parse_error() {
        let toml_content = r#"
[job]
name = "bad"

[input]
path = "in.csv"
format = "csv"

[output]
path = "out.xml"
"#;

        assert!(matches!(
            TomlConfig::from_toml_str(toml_content),
            Err(ConvertError::TomlError(_))
        ));
    }

    #[test]
    fn test_config_validation() {
        let toml_content = r#"
[job]
name = "bad-extension"

[input]
path = "in.json"

[output]
path = "out.csv"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_err());

        let toml_content = r#"
[job]
name = "bad-level"

[input]
path = "in.json"

[output]
path = "out.xml"

[logging]
level = "loud"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert!(matches!(
            config.validate(),
            Err(ConvertError::InvalidConfigValueError { .. })
        ));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();

        let toml_content = r#"
[job]
name = "file-test"

[input]
path = "ann.yml"

[output]
path = "ann.json"

[logging]
level = "debug"
json = true
"#;

        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.job.name, "file-test");
        assert_eq!(config.log_level(), Some("debug"));
        assert!(config.log_json());
    }
}
