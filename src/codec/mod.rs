//! Text codecs between each supported format and [`Record`].
//!
//! Codecs are pure: they never touch the file system. File access lives in
//! [`crate::core::loader`] and [`crate::core::saver`].

pub mod json;
pub mod xml;
pub mod yaml;

use crate::domain::format::Format;
use crate::domain::model::Record;
use crate::utils::error::Result;

pub fn decode(format: Format, input: &str) -> Result<Record> {
    match format {
        Format::Json => json::decode(input),
        Format::Yaml => yaml::decode(input),
        Format::Xml => xml::decode(input),
    }
}

pub fn encode(format: Format, record: &Record) -> Result<String> {
    match format {
        Format::Json => json::encode(record),
        Format::Yaml => yaml::encode(record),
        Format::Xml => xml::encode(record),
    }
}
