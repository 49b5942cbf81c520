//! Converter for the cluster's error envelope.

/// Converter for [`FabricErrorBody`](crate::models::FabricErrorBody).
pub mod fabric_error_body {
    use fabricmesh_core::{JsonReader, JsonWriter, Result, TokenKind};

    use crate::models::FabricErrorBody;

    use super::fabric_error_details;

    /// Reads a complete error envelope.
    pub fn deserialize(reader: &mut JsonReader<'_>) -> Result<FabricErrorBody> {
        reader.deserialize(from_json_properties)
    }

    /// The field loop; the cursor must be on the first property.
    pub fn from_json_properties(reader: &mut JsonReader<'_>) -> Result<FabricErrorBody> {
        let mut obj = FabricErrorBody::default();
        while reader.token_kind() != TokenKind::EndObject {
            match reader.read_property_name()?.as_str() {
                "Error" => obj.error = reader.read_nullable(fabric_error_details::deserialize)?,
                _ => reader.skip_property_value()?,
            }
        }
        Ok(obj)
    }

    /// Writes the error envelope.
    pub fn serialize(writer: &mut JsonWriter, obj: &FabricErrorBody) -> Result<()> {
        writer.write_start_object()?;
        writer.write_property(obj.error.as_ref(), "Error", fabric_error_details::serialize)?;
        writer.write_end_object()
    }
}

/// Converter for [`FabricErrorDetails`](crate::models::FabricErrorDetails).
pub mod fabric_error_details {
    use fabricmesh_core::{JsonReader, JsonWriter, Result, TokenKind};

    use crate::models::FabricErrorDetails;

    /// Reads a complete details object.
    pub fn deserialize(reader: &mut JsonReader<'_>) -> Result<FabricErrorDetails> {
        reader.deserialize(from_json_properties)
    }

    /// The field loop; the cursor must be on the first property.
    pub fn from_json_properties(reader: &mut JsonReader<'_>) -> Result<FabricErrorDetails> {
        let mut obj = FabricErrorDetails::default();
        while reader.token_kind() != TokenKind::EndObject {
            match reader.read_property_name()?.as_str() {
                "Code" => obj.code = reader.read_value_as_string()?,
                "Message" => obj.message = reader.read_value_as_string()?,
                _ => reader.skip_property_value()?,
            }
        }
        Ok(obj)
    }

    /// Writes the details object.
    pub fn serialize(writer: &mut JsonWriter, obj: &FabricErrorDetails) -> Result<()> {
        writer.write_start_object()?;
        writer.write_property(obj.code.as_ref(), "Code", |w, v| {
            w.write_string_value(Some(v.as_str()))
        })?;
        if let Some(message) = &obj.message {
            writer.write_property_name("Message")?;
            writer.write_string_value(Some(message.as_str()))?;
        }
        writer.write_end_object()
    }
}

#[cfg(test)]
mod tests {
    use fabricmesh_core::JsonReader;

    use super::*;

    #[test]
    fn test_error_envelope_parsed() {
        let json = r#"{
            "Error": {
                "Code": "FABRIC_E_NODE_NOT_FOUND",
                "Message": "The node was not found."
            }
        }"#;
        let mut reader = JsonReader::new(json).unwrap();
        let body = fabric_error_body::deserialize(&mut reader).unwrap();
        let details = body.error.unwrap();
        assert_eq!(details.code.as_deref(), Some("FABRIC_E_NODE_NOT_FOUND"));
        assert_eq!(details.message.as_deref(), Some("The node was not found."));
    }

    #[test]
    fn test_error_envelope_tolerates_extra_fields() {
        let json = r#"{"Error": {"Code": "E", "Details": {"Inner": []}}, "TraceId": "abc"}"#;
        let mut reader = JsonReader::new(json).unwrap();
        let body = fabric_error_body::deserialize(&mut reader).unwrap();
        assert_eq!(body.error.unwrap().code.as_deref(), Some("E"));
    }

    #[test]
    fn test_empty_envelope() {
        let mut reader = JsonReader::new("{}").unwrap();
        let body = fabric_error_body::deserialize(&mut reader).unwrap();
        assert_eq!(body.error, None);
    }
}
