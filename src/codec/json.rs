use serde_json::Value;

use crate::domain::model::{FieldValue, Record};
use crate::utils::error::{ConvertError, Result};

pub fn decode(input: &str) -> Result<Record> {
    match serde_json::from_str::<Value>(input)? {
        Value::Object(map) => Ok(Record::from_fields(
            map.into_iter()
                .map(|(key, value)| (key, FieldValue::from_json(value))),
        )),
        other => Err(ConvertError::InvalidStructure {
            format: "JSON".to_string(),
            message: format!("expected an object at the top level, found {}", kind(&other)),
        }),
    }
}

/// Pretty-printed with a trailing newline.
pub fn encode(record: &Record) -> Result<String> {
    let mut text = serde_json::to_string_pretty(record)?;
    text.push('\n');
    Ok(text)
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
