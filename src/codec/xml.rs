// 只處理根元素底下的第一層子元素，更深的巢狀結構在讀取時會被略過
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::{Reader, Writer};
use serde_json::Value;

use crate::domain::model::{FieldValue, Record};
use crate::utils::error::{ConvertError, Result};

/// Name of the synthetic element wrapping every saved record.
pub const ROOT_ELEMENT: &str = "root";

pub fn decode(input: &str) -> Result<Record> {
    // 文字片段可能被註解、CDATA 或內層元素切開，整段值只在結束時修剪一次
    let mut reader = Reader::from_str(input);

    let mut record = Record::new();
    let mut depth = 0usize;
    let mut seen_root = false;
    let mut current: Option<(String, String)> = None;

    loop {
        match reader.read_event().map_err(ConvertError::xml)? {
            Event::Start(tag) => {
                let name = tag_name(&tag);
                depth += 1;
                match depth {
                    1 => begin_root(&mut seen_root)?,
                    2 => current = Some((name, String::new())),
                    _ => tracing::debug!("Skipping nested element <{}>", name),
                }
            }
            Event::Empty(tag) => match depth {
                0 => begin_root(&mut seen_root)?,
                1 => insert_field(&mut record, tag_name(&tag), String::new()),
                _ => tracing::debug!("Skipping nested element <{}/>", tag_name(&tag)),
            },
            Event::Text(text) if depth == 2 => {
                if let Some((_, value)) = current.as_mut() {
                    value.push_str(&text.unescape().map_err(ConvertError::xml)?);
                }
            }
            Event::CData(data) if depth == 2 => {
                if let Some((_, value)) = current.as_mut() {
                    value.push_str(&String::from_utf8_lossy(&data.into_inner()));
                }
            }
            Event::End(_) => {
                if depth == 2 {
                    if let Some((name, value)) = current.take() {
                        insert_field(&mut record, name, value.trim().to_string());
                    }
                }
                depth = depth.saturating_sub(1);
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if depth != 0 {
        return Err(ConvertError::xml("unexpected end of document"));
    }
    if !seen_root {
        return Err(ConvertError::InvalidStructure {
            format: "XML".to_string(),
            message: "document has no root element".to_string(),
        });
    }
    Ok(record)
}

pub fn encode(record: &Record) -> Result<String> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);
    writer
        .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
        .map_err(ConvertError::xml)?;
    writer
        .write_event(Event::Start(BytesStart::new(ROOT_ELEMENT)))
        .map_err(ConvertError::xml)?;

    for (key, value) in record.iter() {
        check_element_name(key)?;
        match value {
            FieldValue::Text(text) => write_text(&mut writer, key, text)?,
            FieldValue::Structured(nested) => write_value(&mut writer, key, nested)?,
        }
    }

    writer
        .write_event(Event::End(BytesEnd::new(ROOT_ELEMENT)))
        .map_err(ConvertError::xml)?;

    let mut text = String::from_utf8(writer.into_inner()).map_err(ConvertError::xml)?;
    text.push('\n');
    Ok(text)
}

fn tag_name(tag: &BytesStart<'_>) -> String {
    String::from_utf8_lossy(tag.name().as_ref()).trim().to_string()
}

fn begin_root(seen_root: &mut bool) -> Result<()> {
    if *seen_root {
        return Err(ConvertError::InvalidStructure {
            format: "XML".to_string(),
            message: "document has more than one root element".to_string(),
        });
    }
    *seen_root = true;
    Ok(())
}

fn insert_field(record: &mut Record, name: String, value: String) {
    if record.get(&name).is_some() {
        tracing::debug!("Repeated element <{}>, keeping the last value", name);
    }
    record.insert(name, value);
}

fn check_element_name(name: &str) -> Result<()> {
    let mut chars = name.chars();
    let valid_start = chars
        .next()
        .map(|c| c.is_alphabetic() || c == '_')
        .unwrap_or(false);
    let valid_rest = chars.all(|c| c.is_alphanumeric() || matches!(c, '_' | '-' | '.'));

    if valid_start && valid_rest {
        Ok(())
    } else {
        Err(ConvertError::xml(format!(
            "field name '{}' is not a valid element name",
            name
        )))
    }
}

fn write_text(writer: &mut Writer<Vec<u8>>, name: &str, text: &str) -> Result<()> {
    if text.is_empty() {
        writer
            .write_event(Event::Empty(BytesStart::new(name)))
            .map_err(ConvertError::xml)?;
        return Ok(());
    }
    writer
        .write_event(Event::Start(BytesStart::new(name)))
        .map_err(ConvertError::xml)?;
    writer
        .write_event(Event::Text(BytesText::new(text)))
        .map_err(ConvertError::xml)?;
    writer
        .write_event(Event::End(BytesEnd::new(name)))
        .map_err(ConvertError::xml)?;
    Ok(())
}

// 陣列的每個項目都重複使用同一個元素名稱
fn write_value(writer: &mut Writer<Vec<u8>>, name: &str, value: &Value) -> Result<()> {
    match value {
        Value::Object(map) => {
            writer
                .write_event(Event::Start(BytesStart::new(name)))
                .map_err(ConvertError::xml)?;
            for (key, child) in map {
                check_element_name(key)?;
                write_value(writer, key, child)?;
            }
            writer
                .write_event(Event::End(BytesEnd::new(name)))
                .map_err(ConvertError::xml)?;
            Ok(())
        }
        Value::Array(items) => {
            for item in items {
                write_value(writer, name, item)?;
            }
            Ok(())
        }
        Value::Null => write_text(writer, name, ""),
        Value::Bool(b) => write_text(writer, name, &b.to_string()),
        Value::Number(n) => write_text(writer, name, &n.to_string()),
        Value::String(s) => write_text(writer, name, s),
    }
}
