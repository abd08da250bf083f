use serde_yaml::Value;

use crate::domain::model::{FieldValue, Record};
use crate::utils::error::{ConvertError, Result};

pub fn decode(input: &str) -> Result<Record> {
    let mapping = match serde_yaml::from_str::<Value>(input)? {
        Value::Mapping(mapping) => mapping,
        Value::Null => return Err(invalid("document is empty")),
        _ => return Err(invalid("expected a mapping at the top level")),
    };

    let mut record = Record::new();
    for (key, value) in mapping {
        record.insert(key_text(&key)?, field_value(value)?);
    }
    Ok(record)
}

pub fn encode(record: &Record) -> Result<String> {
    Ok(serde_yaml::to_string(record)?)
}

fn invalid(message: &str) -> ConvertError {
    ConvertError::InvalidStructure {
        format: "YAML".to_string(),
        message: message.to_string(),
    }
}

// 非字串的純量鍵直接轉成文字，例如 `1: x`
fn key_text(key: &Value) -> Result<String> {
    match key {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Null => Ok("null".to_string()),
        Value::Tagged(tagged) => key_text(&tagged.value),
        Value::Sequence(_) | Value::Mapping(_) => Err(invalid("field names must be scalars")),
    }
}

fn field_value(value: Value) -> Result<FieldValue> {
    match value {
        Value::Null => Ok(FieldValue::Text(String::new())),
        Value::Bool(b) => Ok(FieldValue::Text(b.to_string())),
        Value::Number(n) => Ok(FieldValue::Text(n.to_string())),
        Value::String(s) => Ok(FieldValue::Text(s)),
        Value::Tagged(tagged) => field_value(tagged.value),
        nested @ (Value::Sequence(_) | Value::Mapping(_)) => {
            Ok(FieldValue::Structured(nested_value(nested)?))
        }
    }
}

// 巢狀映射的鍵與頂層一樣經過 key_text，`~: x` 會變成 `"null": "x"`
fn nested_value(value: Value) -> Result<serde_json::Value> {
    match value {
        Value::Null => Ok(serde_json::Value::Null),
        Value::Bool(b) => Ok(serde_json::Value::Bool(b)),
        Value::Number(n) => Ok(serde_json::to_value(&n)?),
        Value::String(s) => Ok(serde_json::Value::String(s)),
        Value::Tagged(tagged) => nested_value(tagged.value),
        Value::Sequence(items) => items
            .into_iter()
            .map(nested_value)
            .collect::<Result<Vec<_>>>()
            .map(serde_json::Value::Array),
        Value::Mapping(mapping) => {
            let mut object = serde_json::Map::new();
            for (key, child) in mapping {
                object.insert(key_text(&key)?, nested_value(child)?);
            }
            Ok(serde_json::Value::Object(object))
        }
    }
}
