//! Forward-only JSON writer and the typed scalar writes layered on it.

use std::collections::BTreeMap;

use time::format_description::well_known::Rfc3339;
use time::{Duration, OffsetDateTime, UtcOffset};
use uuid::Uuid;

use crate::error::{FabricMeshError, Result};

use super::duration::format_iso8601;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Frame {
    /// Inside an object, expecting a property name (or the end of the object).
    ObjectName,
    /// Inside an object, a property name has been written and its value is
    /// expected next.
    ObjectValue,
    /// Inside an array.
    Array,
}

/// A forward-only JSON writer: the mirror of [`JsonReader`](super::JsonReader).
///
/// The writer tracks container state so converters can emit tokens in order
/// without worrying about comma or colon placement; an out-of-order emit
/// (a value where a property name is due, or vice versa) fails with
/// `MalformedStream`.
///
/// The scalar writers all take an `Option` and emit JSON `null` for `None`;
/// the *omit-when-absent* policy for optional fields is the converter's job
/// (it simply does not call the writer for an absent optional field).
#[derive(Debug, Default)]
pub struct JsonWriter {
    out: String,
    frames: Vec<Frame>,
    /// Whether the current container already holds at least one entry,
    /// one flag per open container.
    has_entries: Vec<bool>,
}

impl JsonWriter {
    /// Creates a writer with an empty output buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the accumulated JSON text.
    pub fn into_string(self) -> String {
        self.out
    }

    /// Writes the separator and state transition for a value emitted at the
    /// current position.
    fn begin_value(&mut self) -> Result<()> {
        match self.frames.last_mut() {
            None => Ok(()),
            Some(frame @ Frame::ObjectValue) => {
                *frame = Frame::ObjectName;
                Ok(())
            }
            Some(Frame::ObjectName) => Err(FabricMeshError::MalformedStream(
                "expected a property name, not a value".to_string(),
            )),
            Some(Frame::Array) => {
                if let Some(has_entries) = self.has_entries.last_mut() {
                    if *has_entries {
                        self.out.push(',');
                    }
                    *has_entries = true;
                }
                Ok(())
            }
        }
    }

    /// Writes a start-object token.
    pub fn write_start_object(&mut self) -> Result<()> {
        self.begin_value()?;
        self.out.push('{');
        self.frames.push(Frame::ObjectName);
        self.has_entries.push(false);
        Ok(())
    }

    /// Writes an end-object token.
    pub fn write_end_object(&mut self) -> Result<()> {
        match self.frames.pop() {
            Some(Frame::ObjectName) => {
                self.has_entries.pop();
                self.out.push('}');
                Ok(())
            }
            _ => Err(FabricMeshError::MalformedStream(
                "not positioned at the end of an object".to_string(),
            )),
        }
    }

    /// Writes a start-array token.
    pub fn write_start_array(&mut self) -> Result<()> {
        self.begin_value()?;
        self.out.push('[');
        self.frames.push(Frame::Array);
        self.has_entries.push(false);
        Ok(())
    }

    /// Writes an end-array token.
    pub fn write_end_array(&mut self) -> Result<()> {
        match self.frames.pop() {
            Some(Frame::Array) => {
                self.has_entries.pop();
                self.out.push(']');
                Ok(())
            }
            _ => Err(FabricMeshError::MalformedStream(
                "not positioned at the end of an array".to_string(),
            )),
        }
    }

    /// Writes a property name. The next write must be its value.
    pub fn write_property_name(&mut self, name: &str) -> Result<()> {
        match self.frames.last_mut() {
            Some(frame @ Frame::ObjectName) => {
                *frame = Frame::ObjectValue;
            }
            _ => {
                return Err(FabricMeshError::MalformedStream(
                    "property name written outside an object".to_string(),
                ))
            }
        }
        if let Some(has_entries) = self.has_entries.last_mut() {
            if *has_entries {
                self.out.push(',');
            }
            *has_entries = true;
        }
        write_escaped(&mut self.out, name);
        self.out.push(':');
        Ok(())
    }

    /// Writes JSON `null`.
    pub fn write_null(&mut self) -> Result<()> {
        self.begin_value()?;
        self.out.push_str("null");
        Ok(())
    }

    /// Writes a string value, or `null` for `None`.
    pub fn write_string_value(&mut self, value: Option<&str>) -> Result<()> {
        match value {
            None => self.write_null(),
            Some(s) => {
                self.begin_value()?;
                write_escaped(&mut self.out, s);
                Ok(())
            }
        }
    }

    /// Writes a boolean value, or `null` for `None`.
    pub fn write_bool_value(&mut self, value: Option<bool>) -> Result<()> {
        match value {
            None => self.write_null(),
            Some(b) => {
                self.begin_value()?;
                self.out.push_str(if b { "true" } else { "false" });
                Ok(())
            }
        }
    }

    /// Writes an `i32` value, or `null` for `None`.
    pub fn write_int_value(&mut self, value: Option<i32>) -> Result<()> {
        match value {
            None => self.write_null(),
            Some(n) => {
                self.begin_value()?;
                self.out.push_str(&n.to_string());
                Ok(())
            }
        }
    }

    /// Writes an `i64` value, or `null` for `None`.
    pub fn write_long_value(&mut self, value: Option<i64>) -> Result<()> {
        match value {
            None => self.write_null(),
            Some(n) => {
                self.begin_value()?;
                self.out.push_str(&n.to_string());
                Ok(())
            }
        }
    }

    /// Writes an `f64` value, or `null` for `None`.
    ///
    /// Non-finite values cannot be represented in JSON and fail with a
    /// `Format` error.
    pub fn write_double_value(&mut self, value: Option<f64>) -> Result<()> {
        match value {
            None => self.write_null(),
            Some(n) => {
                if !n.is_finite() {
                    return Err(FabricMeshError::Format(format!(
                        "{} cannot be written as a JSON number",
                        n
                    )));
                }
                self.begin_value()?;
                self.out.push_str(&n.to_string());
                Ok(())
            }
        }
    }

    /// Writes a byte value as a plain JSON integer, or `null` for `None`.
    pub fn write_byte_value(&mut self, value: Option<u8>) -> Result<()> {
        match value {
            None => self.write_null(),
            Some(n) => {
                self.begin_value()?;
                self.out.push_str(&n.to_string());
                Ok(())
            }
        }
    }

    /// Writes a GUID in canonical hyphenated lowercase form, or `null` for
    /// `None`.
    pub fn write_guid_value(&mut self, value: Option<Uuid>) -> Result<()> {
        match value {
            None => self.write_null(),
            Some(guid) => self.write_string_value(Some(&guid.to_string())),
        }
    }

    /// Writes a timestamp in ISO-8601 UTC form, or `null` for `None`.
    ///
    /// Non-UTC offsets are normalized to UTC first; a whole-second instant
    /// is written without fractional digits.
    pub fn write_date_time_value(&mut self, value: Option<OffsetDateTime>) -> Result<()> {
        match value {
            None => self.write_null(),
            Some(instant) => {
                let utc = instant.to_offset(UtcOffset::UTC);
                let text = utc.format(&Rfc3339).map_err(|e| {
                    FabricMeshError::Format(format!("unformattable timestamp: {}", e))
                })?;
                self.write_string_value(Some(&text))
            }
        }
    }

    /// Writes a duration in ISO-8601 form, or `null` for `None`.
    pub fn write_time_span_value(&mut self, value: Option<Duration>) -> Result<()> {
        match value {
            None => self.write_null(),
            Some(span) => self.write_string_value(Some(&format_iso8601(span))),
        }
    }

    /// Writes a property: the name, then either `null` or the value via
    /// `write_value`.
    ///
    /// Required fields call this unconditionally (a `None` required field is
    /// emitted as `null`); optional fields call it only when present.
    pub fn write_property<T, F>(
        &mut self,
        value: Option<&T>,
        name: &str,
        write_value: F,
    ) -> Result<()>
    where
        F: FnOnce(&mut Self, &T) -> Result<()>,
    {
        self.write_property_name(name)?;
        match value {
            None => self.write_null(),
            Some(v) => write_value(self, v),
        }
    }

    /// Writes a sequence property as a JSON array, or `null` when the
    /// sequence itself is absent. Element-level nulls are the element
    /// writer's concern.
    pub fn write_enumerable_property<T, F>(
        &mut self,
        sequence: Option<&[T]>,
        name: &str,
        mut write_element: F,
    ) -> Result<()>
    where
        F: FnMut(&mut Self, &T) -> Result<()>,
    {
        self.write_property_name(name)?;
        match sequence {
            None => self.write_null(),
            Some(items) => {
                self.write_start_array()?;
                for item in items {
                    write_element(self, item)?;
                }
                self.write_end_array()
            }
        }
    }

    /// Writes a string-keyed map property as a JSON object, or `null` when
    /// the map itself is absent.
    pub fn write_map_property<T, F>(
        &mut self,
        map: Option<&BTreeMap<String, T>>,
        name: &str,
        mut write_value: F,
    ) -> Result<()>
    where
        F: FnMut(&mut Self, &T) -> Result<()>,
    {
        self.write_property_name(name)?;
        match map {
            None => self.write_null(),
            Some(entries) => {
                self.write_start_object()?;
                for (key, value) in entries {
                    self.write_property_name(key)?;
                    write_value(self, value)?;
                }
                self.write_end_object()
            }
        }
    }
}

/// Appends `text` to `out` as a quoted JSON string with the mandatory
/// escapes applied.
fn write_escaped(out: &mut String, text: &str) {
    out.push('"');
    for c in text.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{0008}' => out.push_str("\\b"),
            '\u{000c}' => out.push_str("\\f"),
            c if (c as u32) < 0x20 => {
                out.push_str(&format!("\\u{:04x}", c as u32));
            }
            c => out.push(c),
        }
    }
    out.push('"');
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn test_empty_object() {
        let mut writer = JsonWriter::new();
        writer.write_start_object().unwrap();
        writer.write_end_object().unwrap();
        assert_eq!(writer.into_string(), "{}");
    }

    #[test]
    fn test_scalar_members() {
        let mut writer = JsonWriter::new();
        writer.write_start_object().unwrap();
        writer.write_property_name("S").unwrap();
        writer.write_string_value(Some("x")).unwrap();
        writer.write_property_name("I").unwrap();
        writer.write_int_value(Some(-3)).unwrap();
        writer.write_property_name("B").unwrap();
        writer.write_bool_value(Some(false)).unwrap();
        writer.write_property_name("N").unwrap();
        writer.write_null().unwrap();
        writer.write_end_object().unwrap();
        assert_eq!(
            writer.into_string(),
            r#"{"S":"x","I":-3,"B":false,"N":null}"#
        );
    }

    #[test]
    fn test_byte_value() {
        let mut writer = JsonWriter::new();
        writer.write_start_array().unwrap();
        writer.write_byte_value(Some(255)).unwrap();
        writer.write_byte_value(Some(0)).unwrap();
        writer.write_byte_value(None).unwrap();
        writer.write_end_array().unwrap();
        assert_eq!(writer.into_string(), "[255,0,null]");
    }

    #[test]
    fn test_array_commas() {
        let mut writer = JsonWriter::new();
        writer.write_start_array().unwrap();
        writer.write_int_value(Some(1)).unwrap();
        writer.write_null().unwrap();
        writer.write_int_value(Some(3)).unwrap();
        writer.write_end_array().unwrap();
        assert_eq!(writer.into_string(), "[1,null,3]");
    }

    #[test]
    fn test_nested_containers() {
        let mut writer = JsonWriter::new();
        writer.write_start_object().unwrap();
        writer.write_property_name("a").unwrap();
        writer.write_start_array().unwrap();
        writer.write_start_object().unwrap();
        writer.write_end_object().unwrap();
        writer.write_start_array().unwrap();
        writer.write_end_array().unwrap();
        writer.write_end_array().unwrap();
        writer.write_end_object().unwrap();
        assert_eq!(writer.into_string(), r#"{"a":[{},[]]}"#);
    }

    #[test]
    fn test_string_escaping() {
        let mut writer = JsonWriter::new();
        writer
            .write_string_value(Some("a\"b\\c\nd\u{0001}e"))
            .unwrap();
        assert_eq!(writer.into_string(), r#""a\"b\\c\nde""#);
    }

    #[test]
    fn test_value_without_name_in_object_fails() {
        let mut writer = JsonWriter::new();
        writer.write_start_object().unwrap();
        assert!(writer.write_int_value(Some(1)).is_err());
    }

    #[test]
    fn test_name_while_value_due_fails() {
        let mut writer = JsonWriter::new();
        writer.write_start_object().unwrap();
        writer.write_property_name("a").unwrap();
        assert!(writer.write_property_name("b").is_err());
    }

    #[test]
    fn test_end_object_with_value_due_fails() {
        let mut writer = JsonWriter::new();
        writer.write_start_object().unwrap();
        writer.write_property_name("a").unwrap();
        assert!(writer.write_end_object().is_err());
    }

    #[test]
    fn test_guid_value_lowercase_hyphenated() {
        let guid = Uuid::parse_str("6AD52A45-8DB7-4DB2-9F24-B0C8F27A1C4E").unwrap();
        let mut writer = JsonWriter::new();
        writer.write_guid_value(Some(guid)).unwrap();
        assert_eq!(
            writer.into_string(),
            r#""6ad52a45-8db7-4db2-9f24-b0c8f27a1c4e""#
        );
    }

    #[test]
    fn test_date_time_utc_no_fraction() {
        let mut writer = JsonWriter::new();
        writer
            .write_date_time_value(Some(datetime!(2020-01-02 03:04:05 UTC)))
            .unwrap();
        assert_eq!(writer.into_string(), r#""2020-01-02T03:04:05Z""#);
    }

    #[test]
    fn test_date_time_offset_normalized_to_utc() {
        let mut writer = JsonWriter::new();
        writer
            .write_date_time_value(Some(datetime!(2020-01-02 05:04:05 +02:00)))
            .unwrap();
        assert_eq!(writer.into_string(), r#""2020-01-02T03:04:05Z""#);
    }

    #[test]
    fn test_time_span_value() {
        let mut writer = JsonWriter::new();
        writer
            .write_time_span_value(Some(Duration::seconds(93_784)))
            .unwrap();
        assert_eq!(writer.into_string(), r#""P1DT2H3M4S""#);
    }

    #[test]
    fn test_non_finite_double_fails() {
        let mut writer = JsonWriter::new();
        assert!(writer.write_double_value(Some(f64::NAN)).is_err());
        assert!(writer.write_double_value(Some(f64::INFINITY)).is_err());
    }

    #[test]
    fn test_write_property_null_for_absent_required() {
        let mut writer = JsonWriter::new();
        writer.write_start_object().unwrap();
        writer
            .write_property(None::<&String>, "Name", |w, v| {
                w.write_string_value(Some(v.as_str()))
            })
            .unwrap();
        writer.write_end_object().unwrap();
        assert_eq!(writer.into_string(), r#"{"Name":null}"#);
    }

    #[test]
    fn test_write_enumerable_property() {
        let items = vec!["a".to_string(), "b".to_string()];
        let mut writer = JsonWriter::new();
        writer.write_start_object().unwrap();
        writer
            .write_enumerable_property(Some(&items), "Items", |w, item| {
                w.write_string_value(Some(item.as_str()))
            })
            .unwrap();
        writer
            .write_enumerable_property(None, "Absent", |w, item: &String| {
                w.write_string_value(Some(item.as_str()))
            })
            .unwrap();
        writer.write_end_object().unwrap();
        assert_eq!(
            writer.into_string(),
            r#"{"Items":["a","b"],"Absent":null}"#
        );
    }

    #[test]
    fn test_write_enumerable_property_empty() {
        let items: Vec<String> = Vec::new();
        let mut writer = JsonWriter::new();
        writer.write_start_object().unwrap();
        writer
            .write_enumerable_property(Some(&items), "Items", |w, item: &String| {
                w.write_string_value(Some(item.as_str()))
            })
            .unwrap();
        writer.write_end_object().unwrap();
        assert_eq!(writer.into_string(), r#"{"Items":[]}"#);
    }

    #[test]
    fn test_write_map_property() {
        let mut map = BTreeMap::new();
        map.insert("z".to_string(), "1".to_string());
        map.insert("a".to_string(), "2".to_string());
        let mut writer = JsonWriter::new();
        writer.write_start_object().unwrap();
        writer
            .write_map_property(Some(&map), "Params", |w, v| w.write_string_value(Some(v.as_str())))
            .unwrap();
        writer.write_end_object().unwrap();
        // BTreeMap: deterministic sorted key order.
        assert_eq!(writer.into_string(), r#"{"Params":{"a":"2","z":"1"}}"#);
    }
}
