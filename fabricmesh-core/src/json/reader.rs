//! Forward-only JSON reader and the typed scalar reads layered on it.

use std::collections::BTreeMap;

use time::format_description::well_known::Rfc3339;
use time::{Duration, OffsetDateTime};
use uuid::Uuid;

use crate::error::{FabricMeshError, Result};

use super::duration::parse_iso8601;
use super::token::{JsonToken, TokenKind, Tokenizer};

/// A forward-only cursor over a JSON token stream.
///
/// The reader always holds exactly the current token; every `read_*`
/// operation consumes it and advances. There is no backtracking and no
/// tree materialization, which is what lets discriminator-first polymorphic
/// reads dispatch before the rest of the object has been seen.
///
/// Typical converter usage:
///
/// ```
/// use fabricmesh_core::{JsonReader, Result, TokenKind};
///
/// fn read_instance_count(reader: &mut JsonReader<'_>) -> Result<Option<i32>> {
///     let mut instance_count = None;
///     reader.read_start_object()?;
///     while reader.token_kind() != TokenKind::EndObject {
///         let name = reader.read_property_name()?;
///         if name == "InstanceCount" {
///             instance_count = reader.read_value_as_int()?;
///         } else {
///             reader.skip_property_value()?;
///         }
///     }
///     reader.read_end_object()?;
///     Ok(instance_count)
/// }
///
/// let mut reader = JsonReader::new(r#"{"InstanceCount": 3, "Extra": [1]}"#)?;
/// assert_eq!(read_instance_count(&mut reader)?, Some(3));
/// # Ok::<(), fabricmesh_core::FabricMeshError>(())
/// ```
#[derive(Debug)]
pub struct JsonReader<'a> {
    tokenizer: Tokenizer<'a>,
    current: JsonToken,
}

impl<'a> JsonReader<'a> {
    /// Creates a reader over the given JSON text, positioned on its first
    /// token.
    pub fn new(input: &'a str) -> Result<Self> {
        let mut tokenizer = Tokenizer::new(input);
        let current = tokenizer.next_token()?;
        Ok(Self { tokenizer, current })
    }

    /// Returns the kind of the token currently under the cursor.
    pub fn token_kind(&self) -> TokenKind {
        self.current.kind()
    }

    /// Consumes the current token and returns it, loading the next one.
    fn bump(&mut self) -> Result<JsonToken> {
        if self.current == JsonToken::EndOfStream {
            return Err(FabricMeshError::MalformedStream(
                "read past end of stream".to_string(),
            ));
        }
        let next = self.tokenizer.next_token()?;
        Ok(std::mem::replace(&mut self.current, next))
    }

    fn unexpected(expected: &str, found: &JsonToken) -> FabricMeshError {
        FabricMeshError::MalformedStream(format!(
            "expected {}, found {:?}",
            expected, found
        ))
    }

    /// Consumes a start-object token.
    pub fn read_start_object(&mut self) -> Result<()> {
        match self.bump()? {
            JsonToken::StartObject => Ok(()),
            other => Err(Self::unexpected("start of object", &other)),
        }
    }

    /// Consumes an end-object token.
    pub fn read_end_object(&mut self) -> Result<()> {
        match self.bump()? {
            JsonToken::EndObject => Ok(()),
            other => Err(Self::unexpected("end of object", &other)),
        }
    }

    /// Consumes a start-array token.
    pub fn read_start_array(&mut self) -> Result<()> {
        match self.bump()? {
            JsonToken::StartArray => Ok(()),
            other => Err(Self::unexpected("start of array", &other)),
        }
    }

    /// Consumes an end-array token.
    pub fn read_end_array(&mut self) -> Result<()> {
        match self.bump()? {
            JsonToken::EndArray => Ok(()),
            other => Err(Self::unexpected("end of array", &other)),
        }
    }

    /// Consumes a property-name token and returns the name.
    ///
    /// Fails with `MalformedStream` if the cursor is not on a property.
    pub fn read_property_name(&mut self) -> Result<String> {
        match self.bump()? {
            JsonToken::PropertyName(name) => Ok(name),
            other => Err(Self::unexpected("a property name", &other)),
        }
    }

    /// Skips the value under the cursor, however deeply nested.
    ///
    /// Used for unknown properties: the field loop never errors on names it
    /// does not declare, it discards their values wholesale.
    pub fn skip_property_value(&mut self) -> Result<()> {
        match self.current.kind() {
            TokenKind::StartObject | TokenKind::StartArray => {
                let mut depth = 0usize;
                loop {
                    match self.current.kind() {
                        TokenKind::StartObject | TokenKind::StartArray => depth += 1,
                        TokenKind::EndObject | TokenKind::EndArray => {
                            depth -= 1;
                            if depth == 0 {
                                self.bump()?;
                                return Ok(());
                            }
                        }
                        _ => {}
                    }
                    self.bump()?;
                }
            }
            TokenKind::String | TokenKind::Number | TokenKind::Bool | TokenKind::Null => {
                self.bump()?;
                Ok(())
            }
            _ => {
                let err = Self::unexpected("a value to skip", &self.current);
                Err(err)
            }
        }
    }

    /// Reads an object value: consumes the start-object token, runs the given
    /// field loop, then consumes the end-object token.
    ///
    /// This is the entry point every object converter's `deserialize` wraps
    /// around its `from_json_properties`.
    pub fn deserialize<T, F>(&mut self, read_properties: F) -> Result<T>
    where
        F: FnOnce(&mut Self) -> Result<T>,
    {
        self.read_start_object()?;
        let value = read_properties(self)?;
        self.read_end_object()?;
        Ok(value)
    }

    /// Reads a string value, or `None` for JSON null.
    pub fn read_value_as_string(&mut self) -> Result<Option<String>> {
        match self.bump()? {
            JsonToken::String(s) => Ok(Some(s)),
            JsonToken::Null => Ok(None),
            other => Err(Self::unexpected("a string value", &other)),
        }
    }

    /// Reads a boolean value, or `None` for JSON null.
    pub fn read_value_as_bool(&mut self) -> Result<Option<bool>> {
        match self.bump()? {
            JsonToken::Bool(b) => Ok(Some(b)),
            JsonToken::Null => Ok(None),
            other => Err(Self::unexpected("a boolean value", &other)),
        }
    }

    /// Reads an `i32` value, or `None` for JSON null.
    pub fn read_value_as_int(&mut self) -> Result<Option<i32>> {
        self.read_number("int32", |text| text.parse::<i32>().ok())
    }

    /// Reads an `i64` value, or `None` for JSON null.
    ///
    /// The wire encodes 64-bit integers as quoted strings to survive
    /// JavaScript consumers; quoted numeric text is accepted everywhere a
    /// number is.
    pub fn read_value_as_long(&mut self) -> Result<Option<i64>> {
        self.read_number("int64", |text| text.parse::<i64>().ok())
    }

    /// Reads an `f64` value, or `None` for JSON null.
    pub fn read_value_as_double(&mut self) -> Result<Option<f64>> {
        self.read_number("double", |text| text.parse::<f64>().ok())
    }

    /// Reads a byte value (a plain JSON integer on the wire), or `None` for
    /// JSON null.
    pub fn read_value_as_byte(&mut self) -> Result<Option<u8>> {
        self.read_number("byte", |text| text.parse::<u8>().ok())
    }

    fn read_number<T, F>(&mut self, type_name: &str, parse: F) -> Result<Option<T>>
    where
        F: Fn(&str) -> Option<T>,
    {
        let token = self.bump()?;
        let text = match &token {
            JsonToken::Number(raw) => raw,
            JsonToken::String(s) => s,
            JsonToken::Null => return Ok(None),
            other => return Err(Self::unexpected("a numeric value", other)),
        };
        parse(text).map(Some).ok_or_else(|| {
            FabricMeshError::Format(format!("{:?} is not a valid {}", text, type_name))
        })
    }

    /// Reads a GUID value from its canonical hyphenated string form, or
    /// `None` for JSON null.
    pub fn read_value_as_guid(&mut self) -> Result<Option<Uuid>> {
        match self.read_value_as_string()? {
            None => Ok(None),
            Some(text) => Uuid::parse_str(&text).map(Some).map_err(|_| {
                FabricMeshError::Format(format!("{:?} is not a valid GUID", text))
            }),
        }
    }

    /// Reads an ISO-8601 UTC timestamp value, or `None` for JSON null.
    pub fn read_value_as_date_time(&mut self) -> Result<Option<OffsetDateTime>> {
        match self.read_value_as_string()? {
            None => Ok(None),
            Some(text) => OffsetDateTime::parse(&text, &Rfc3339).map(Some).map_err(|_| {
                FabricMeshError::Format(format!("{:?} is not a valid ISO-8601 timestamp", text))
            }),
        }
    }

    /// Reads an ISO-8601 duration value, or `None` for JSON null.
    pub fn read_value_as_time_span(&mut self) -> Result<Option<Duration>> {
        match self.read_value_as_string()? {
            None => Ok(None),
            Some(text) => parse_iso8601(&text).map(Some),
        }
    }

    /// Reads a value through `read_value`, mapping JSON null to `None`
    /// without invoking it.
    ///
    /// Lifts a converter that cannot represent null (an object converter,
    /// typically) into a nullable position such as a list element.
    pub fn read_nullable<T, F>(&mut self, read_value: F) -> Result<Option<T>>
    where
        F: FnOnce(&mut Self) -> Result<T>,
    {
        if self.current.kind() == TokenKind::Null {
            self.bump()?;
            Ok(None)
        } else {
            read_value(self).map(Some)
        }
    }

    /// Reads a JSON array into a `Vec`, calling `read_element` once per
    /// element in order. A JSON null in place of the array yields `None`.
    pub fn read_list<T, F>(&mut self, mut read_element: F) -> Result<Option<Vec<T>>>
    where
        F: FnMut(&mut Self) -> Result<T>,
    {
        if self.current.kind() == TokenKind::Null {
            self.bump()?;
            return Ok(None);
        }
        self.read_start_array()?;
        let mut items = Vec::new();
        while self.current.kind() != TokenKind::EndArray {
            items.push(read_element(self)?);
        }
        self.read_end_array()?;
        Ok(Some(items))
    }

    /// Reads a JSON object into a string-keyed map, calling `read_value` once
    /// per member. A JSON null in place of the object yields `None`.
    ///
    /// Duplicate wire keys are last-write-wins, not validated.
    pub fn read_map<T, F>(&mut self, mut read_value: F) -> Result<Option<BTreeMap<String, T>>>
    where
        F: FnMut(&mut Self) -> Result<T>,
    {
        if self.current.kind() == TokenKind::Null {
            self.bump()?;
            return Ok(None);
        }
        self.read_start_object()?;
        let mut map = BTreeMap::new();
        while self.current.kind() != TokenKind::EndObject {
            let key = self.read_property_name()?;
            let value = read_value(self)?;
            map.insert(key, value);
        }
        self.read_end_object()?;
        Ok(Some(map))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn test_token_kind_introspection() {
        let reader = JsonReader::new("{}").unwrap();
        assert_eq!(reader.token_kind(), TokenKind::StartObject);
    }

    #[test]
    fn test_read_property_name_not_on_property() {
        let mut reader = JsonReader::new("[1]").unwrap();
        reader.read_start_array().unwrap();
        let err = reader.read_property_name().unwrap_err();
        assert!(matches!(err, FabricMeshError::MalformedStream(_)));
    }

    #[test]
    fn test_read_scalars() {
        let mut reader =
            JsonReader::new(r#"["x", 7, 123456789012, 2.5, true, 255]"#).unwrap();
        reader.read_start_array().unwrap();
        assert_eq!(reader.read_value_as_string().unwrap(), Some("x".to_string()));
        assert_eq!(reader.read_value_as_int().unwrap(), Some(7));
        assert_eq!(reader.read_value_as_long().unwrap(), Some(123_456_789_012));
        assert_eq!(reader.read_value_as_double().unwrap(), Some(2.5));
        assert_eq!(reader.read_value_as_bool().unwrap(), Some(true));
        assert_eq!(reader.read_value_as_byte().unwrap(), Some(255));
        reader.read_end_array().unwrap();
    }

    #[test]
    fn test_null_scalars_read_as_none() {
        let mut reader = JsonReader::new("[null, null, null]").unwrap();
        reader.read_start_array().unwrap();
        assert_eq!(reader.read_value_as_string().unwrap(), None);
        assert_eq!(reader.read_value_as_int().unwrap(), None);
        assert_eq!(reader.read_value_as_guid().unwrap(), None);
    }

    #[test]
    fn test_quoted_int64_accepted() {
        let mut reader = JsonReader::new(r#""123456789012345""#).unwrap();
        assert_eq!(
            reader.read_value_as_long().unwrap(),
            Some(123_456_789_012_345)
        );
    }

    #[test]
    fn test_quoted_non_numeric_is_format_error() {
        let mut reader = JsonReader::new(r#""not a number""#).unwrap();
        assert!(matches!(
            reader.read_value_as_long().unwrap_err(),
            FabricMeshError::Format(_)
        ));
    }

    #[test]
    fn test_unparsable_number_is_format_error() {
        let mut reader = JsonReader::new("2.5").unwrap();
        let err = reader.read_value_as_int().unwrap_err();
        assert!(matches!(err, FabricMeshError::Format(_)));
    }

    #[test]
    fn test_read_guid() {
        let mut reader =
            JsonReader::new(r#""6ad52a45-8db7-4db2-9f24-b0c8f27a1c4e""#).unwrap();
        let guid = reader.read_value_as_guid().unwrap().unwrap();
        assert_eq!(guid.to_string(), "6ad52a45-8db7-4db2-9f24-b0c8f27a1c4e");
    }

    #[test]
    fn test_bad_guid_is_format_error() {
        let mut reader = JsonReader::new(r#""not-a-guid""#).unwrap();
        assert!(matches!(
            reader.read_value_as_guid().unwrap_err(),
            FabricMeshError::Format(_)
        ));
    }

    #[test]
    fn test_read_date_time() {
        let mut reader = JsonReader::new(r#""2020-01-02T03:04:05Z""#).unwrap();
        assert_eq!(
            reader.read_value_as_date_time().unwrap(),
            Some(datetime!(2020-01-02 03:04:05 UTC))
        );
    }

    #[test]
    fn test_bad_date_time_is_format_error() {
        let mut reader = JsonReader::new(r#""2020-13-45""#).unwrap();
        assert!(matches!(
            reader.read_value_as_date_time().unwrap_err(),
            FabricMeshError::Format(_)
        ));
    }

    #[test]
    fn test_read_time_span() {
        let mut reader = JsonReader::new(r#""P1DT2H3M4S""#).unwrap();
        let span = reader.read_value_as_time_span().unwrap().unwrap();
        assert_eq!(span, Duration::seconds(93_784));
    }

    #[test]
    fn test_skip_scalar_value() {
        let mut reader = JsonReader::new(r#"{"a": 1, "b": 2}"#).unwrap();
        reader.read_start_object().unwrap();
        reader.read_property_name().unwrap();
        reader.skip_property_value().unwrap();
        assert_eq!(reader.read_property_name().unwrap(), "b");
    }

    #[test]
    fn test_skip_nested_value() {
        let json = r#"{"a": {"x": [1, {"y": [[]]}], "z": null}, "b": true}"#;
        let mut reader = JsonReader::new(json).unwrap();
        reader.read_start_object().unwrap();
        assert_eq!(reader.read_property_name().unwrap(), "a");
        reader.skip_property_value().unwrap();
        assert_eq!(reader.read_property_name().unwrap(), "b");
        assert_eq!(reader.read_value_as_bool().unwrap(), Some(true));
        reader.read_end_object().unwrap();
    }

    #[test]
    fn test_skip_truncated_value_fails() {
        let mut reader = JsonReader::new(r#"{"a": {"x": 1"#).unwrap();
        reader.read_start_object().unwrap();
        reader.read_property_name().unwrap();
        assert!(reader.skip_property_value().is_err());
    }

    #[test]
    fn test_deserialize_wraps_field_loop() {
        let mut reader = JsonReader::new(r#"{"Value": 5}"#).unwrap();
        let value = reader
            .deserialize(|r| {
                let mut value = None;
                while r.token_kind() != TokenKind::EndObject {
                    match r.read_property_name()?.as_str() {
                        "Value" => value = r.read_value_as_int()?,
                        _ => r.skip_property_value()?,
                    }
                }
                Ok(value)
            })
            .unwrap();
        assert_eq!(value, Some(5));
        assert_eq!(reader.token_kind(), TokenKind::EndOfStream);
    }

    #[test]
    fn test_empty_object_field_loop() {
        let mut reader = JsonReader::new("{}").unwrap();
        let seen: Vec<String> = reader
            .deserialize(|r| {
                let mut seen = Vec::new();
                while r.token_kind() != TokenKind::EndObject {
                    seen.push(r.read_property_name()?);
                    r.skip_property_value()?;
                }
                Ok(seen)
            })
            .unwrap();
        assert!(seen.is_empty());
    }

    #[test]
    fn test_read_list_of_strings() {
        let mut reader = JsonReader::new(r#"["a", null, "c"]"#).unwrap();
        let list = reader
            .read_list(|r| r.read_value_as_string())
            .unwrap()
            .unwrap();
        assert_eq!(
            list,
            vec![Some("a".to_string()), None, Some("c".to_string())]
        );
    }

    #[test]
    fn test_read_list_null_collection() {
        let mut reader = JsonReader::new("null").unwrap();
        let list = reader.read_list(|r| r.read_value_as_string()).unwrap();
        assert!(list.is_none());
    }

    #[test]
    fn test_read_list_empty() {
        let mut reader = JsonReader::new("[]").unwrap();
        let list = reader.read_list(|r| r.read_value_as_string()).unwrap();
        assert_eq!(list, Some(Vec::new()));
    }

    #[test]
    fn test_read_nullable_skips_reader_on_null() {
        let mut reader = JsonReader::new("[null, 3]").unwrap();
        reader.read_start_array().unwrap();
        let first = reader
            .read_nullable(|r| r.read_value_as_int().map(|v| v.unwrap()))
            .unwrap();
        assert_eq!(first, None);
        let second = reader
            .read_nullable(|r| r.read_value_as_int().map(|v| v.unwrap()))
            .unwrap();
        assert_eq!(second, Some(3));
    }

    #[test]
    fn test_read_map() {
        let mut reader = JsonReader::new(r#"{"b": "2", "a": "1"}"#).unwrap();
        let map = reader
            .read_map(|r| r.read_value_as_string())
            .unwrap()
            .unwrap();
        assert_eq!(map.len(), 2);
        assert_eq!(map["a"], Some("1".to_string()));
        assert_eq!(map["b"], Some("2".to_string()));
    }

    #[test]
    fn test_read_map_duplicate_key_last_wins() {
        let mut reader = JsonReader::new(r#"{"a": "1", "a": "2"}"#).unwrap();
        let map = reader
            .read_map(|r| r.read_value_as_string())
            .unwrap()
            .unwrap();
        assert_eq!(map.len(), 1);
        assert_eq!(map["a"], Some("2".to_string()));
    }

    #[test]
    fn test_read_past_end_fails() {
        let mut reader = JsonReader::new("1").unwrap();
        reader.read_value_as_int().unwrap();
        assert!(matches!(
            reader.read_value_as_int().unwrap_err(),
            FabricMeshError::MalformedStream(_)
        ));
    }
}
