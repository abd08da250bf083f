use crate::core::ConversionSettings;
use crate::domain::format::Format;
use crate::utils::error::{ConvertError, Result};
use crate::utils::validation::{validate_path, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "convert")]
#[command(about = "Convert a record between JSON, YAML and XML")]
pub struct CliConfig {
    /// Path to the input file
    pub input_file: String,

    /// Path to the output file (overwritten if it exists)
    pub output_file: String,

    /// Input format; inferred from the input extension when omitted
    #[arg(value_enum)]
    pub input_format: Option<Format>,

    /// Output format; inferred from the output extension when omitted
    #[arg(value_enum)]
    pub output_format: Option<Format>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit log lines as JSON")]
    pub log_json: bool,
}

impl ConversionSettings for CliConfig {
    fn input_path(&self) -> &str {
        &self.input_file
    }

    fn output_path(&self) -> &str {
        &self.output_file
    }

    fn input_format(&self) -> Result<Format> {
        match self.input_format {
            Some(format) => Ok(format),
            None => Format::from_path(&self.input_file),
        }
    }

    fn output_format(&self) -> Result<Format> {
        match self.output_format {
            Some(format) => Ok(format),
            None => Format::from_path(&self.output_file),
        }
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("input_file", &self.input_file)?;
        validate_path("output_file", &self.output_file)?;

        // 格式要嘛兩個都給，要嘛都從副檔名推斷
        if self.input_format.is_some() && self.output_format.is_none() {
            return Err(ConvertError::ConfigError {
                message: "output_format is required when input_format is given".to_string(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_explicit_formats() {
        let config =
            CliConfig::try_parse_from(["convert", "in.dat", "out.dat", "json", "yml"]).unwrap();

        assert_eq!(config.input_format().unwrap(), Format::Json);
        assert_eq!(config.output_format().unwrap(), Format::Yaml);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_yaml_alias() {
        let config =
            CliConfig::try_parse_from(["convert", "a", "b", "yaml", "xml"]).unwrap();
        assert_eq!(config.input_format, Some(Format::Yaml));
    }

    #[test]
    fn test_formats_inferred_from_extensions() {
        let config = CliConfig::try_parse_from(["convert", "ann.json", "ann.xml", "-v"]).unwrap();

        assert!(config.verbose);
        assert_eq!(config.input_format().unwrap(), Format::Json);
        assert_eq!(config.output_format().unwrap(), Format::Xml);
    }

    #[test]
    fn test_rejects_unknown_format_name() {
        assert!(CliConfig::try_parse_from(["convert", "a", "b", "csv", "xml"]).is_err());
    }

    #[test]
    fn test_single_format_is_invalid() {
        let config = CliConfig::try_parse_from(["convert", "ann.txt", "ann.xml", "json"]).unwrap();
        assert!(config.validate().is_err());
    }
}
