pub mod adapters;
pub mod codec;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::storage::LocalStorage;
pub use config::toml_config::TomlConfig;
pub use crate::core::engine::ConvertEngine;
pub use crate::core::loader::{load, load_json, load_xml, load_yaml, Loader};
pub use crate::core::pipeline::{ConversionPipeline, ConversionPlan};
pub use crate::core::saver::{save, save_json, save_xml, save_yaml, Saver};
pub use crate::core::{convert, convert_by_extension};
pub use domain::format::Format;
pub use domain::model::{FieldValue, Record};
pub use utils::error::{ConvertError, Result};
