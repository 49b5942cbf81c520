//! Converters for health model types.

/// Converter for [`HealthState`](crate::models::HealthState).
pub mod health_state {
    use fabricmesh_core::{JsonReader, JsonWriter, Result};

    use crate::models::HealthState;

    /// Reads the enum from its string literal, or `None` for JSON null.
    ///
    /// Unrecognized literals map to [`HealthState::Invalid`] so that new
    /// service-side states do not break older clients.
    pub fn deserialize(reader: &mut JsonReader<'_>) -> Result<Option<HealthState>> {
        let value = match reader.read_value_as_string()? {
            None => return Ok(None),
            Some(value) => value,
        };
        let state = match value.as_str() {
            "Ok" => HealthState::Ok,
            "Warning" => HealthState::Warning,
            "Error" => HealthState::Error,
            "Unknown" => HealthState::Unknown,
            _ => HealthState::Invalid,
        };
        Ok(Some(state))
    }

    /// Writes the enum as its string literal.
    pub fn serialize(writer: &mut JsonWriter, value: HealthState) -> Result<()> {
        let literal = match value {
            HealthState::Invalid => "Invalid",
            HealthState::Ok => "Ok",
            HealthState::Warning => "Warning",
            HealthState::Error => "Error",
            HealthState::Unknown => "Unknown",
        };
        writer.write_string_value(Some(literal))
    }
}

/// Converter for [`EntityKind`](crate::models::EntityKind).
pub mod entity_kind {
    use fabricmesh_core::{FabricMeshError, JsonReader, JsonWriter, Result};

    use crate::models::EntityKind;

    /// Reads the enum from its string literal, or `None` for JSON null.
    ///
    /// This family rejects unrecognized literals.
    pub fn deserialize(reader: &mut JsonReader<'_>) -> Result<Option<EntityKind>> {
        let value = match reader.read_value_as_string()? {
            None => return Ok(None),
            Some(value) => value,
        };
        let kind = match value.as_str() {
            "Node" => EntityKind::Node,
            "Partition" => EntityKind::Partition,
            "Replica" => EntityKind::Replica,
            "Service" => EntityKind::Service,
            "Application" => EntityKind::Application,
            "Cluster" => EntityKind::Cluster,
            _ => {
                return Err(FabricMeshError::UnknownEnumValue {
                    enum_name: "EntityKind",
                    value,
                })
            }
        };
        Ok(Some(kind))
    }

    /// Writes the enum as its string literal.
    pub fn serialize(writer: &mut JsonWriter, value: EntityKind) -> Result<()> {
        let literal = match value {
            EntityKind::Node => "Node",
            EntityKind::Partition => "Partition",
            EntityKind::Replica => "Replica",
            EntityKind::Service => "Service",
            EntityKind::Application => "Application",
            EntityKind::Cluster => "Cluster",
        };
        writer.write_string_value(Some(literal))
    }
}

/// Converter for [`HealthStateCount`](crate::models::HealthStateCount).
pub mod health_state_count {
    use fabricmesh_core::{JsonReader, JsonWriter, Result, TokenKind};

    use crate::models::HealthStateCount;

    /// Reads a complete count object.
    pub fn deserialize(reader: &mut JsonReader<'_>) -> Result<HealthStateCount> {
        reader.deserialize(from_json_properties)
    }

    /// The field loop; the cursor must be on the first property.
    pub fn from_json_properties(reader: &mut JsonReader<'_>) -> Result<HealthStateCount> {
        let mut obj = HealthStateCount::default();
        while reader.token_kind() != TokenKind::EndObject {
            match reader.read_property_name()?.as_str() {
                "OkCount" => obj.ok_count = reader.read_value_as_long()?,
                "WarningCount" => obj.warning_count = reader.read_value_as_long()?,
                "ErrorCount" => obj.error_count = reader.read_value_as_long()?,
                _ => reader.skip_property_value()?,
            }
        }
        Ok(obj)
    }

    /// Writes the count object.
    pub fn serialize(writer: &mut JsonWriter, obj: &HealthStateCount) -> Result<()> {
        writer.write_start_object()?;
        if let Some(ok) = obj.ok_count {
            writer.write_property_name("OkCount")?;
            writer.write_long_value(Some(ok))?;
        }
        if let Some(warning) = obj.warning_count {
            writer.write_property_name("WarningCount")?;
            writer.write_long_value(Some(warning))?;
        }
        if let Some(error) = obj.error_count {
            writer.write_property_name("ErrorCount")?;
            writer.write_long_value(Some(error))?;
        }
        writer.write_end_object()
    }
}

/// Converter for
/// [`EntityKindHealthStateCount`](crate::models::EntityKindHealthStateCount).
pub mod entity_kind_health_state_count {
    use fabricmesh_core::{JsonReader, JsonWriter, Result, TokenKind};

    use crate::models::EntityKindHealthStateCount;

    use super::{entity_kind, health_state_count};

    /// Reads a complete per-kind entry.
    pub fn deserialize(reader: &mut JsonReader<'_>) -> Result<EntityKindHealthStateCount> {
        reader.deserialize(from_json_properties)
    }

    /// The field loop; the cursor must be on the first property.
    pub fn from_json_properties(reader: &mut JsonReader<'_>) -> Result<EntityKindHealthStateCount> {
        let mut obj = EntityKindHealthStateCount::default();
        while reader.token_kind() != TokenKind::EndObject {
            match reader.read_property_name()?.as_str() {
                "EntityKind" => obj.entity_kind = entity_kind::deserialize(reader)?,
                "HealthStateCount" => {
                    obj.health_state_count =
                        reader.read_nullable(health_state_count::deserialize)?
                }
                _ => reader.skip_property_value()?,
            }
        }
        Ok(obj)
    }

    /// Writes the per-kind entry.
    pub fn serialize(writer: &mut JsonWriter, obj: &EntityKindHealthStateCount) -> Result<()> {
        writer.write_start_object()?;
        if let Some(kind) = obj.entity_kind {
            writer.write_property_name("EntityKind")?;
            entity_kind::serialize(writer, kind)?;
        }
        if let Some(count) = &obj.health_state_count {
            writer.write_property_name("HealthStateCount")?;
            health_state_count::serialize(writer, count)?;
        }
        writer.write_end_object()
    }
}

/// Converter for [`HealthStatistics`](crate::models::HealthStatistics).
pub mod health_statistics {
    use fabricmesh_core::{JsonReader, JsonWriter, Result, TokenKind};

    use crate::models::HealthStatistics;

    use super::entity_kind_health_state_count;

    /// Reads a complete statistics object.
    pub fn deserialize(reader: &mut JsonReader<'_>) -> Result<HealthStatistics> {
        reader.deserialize(from_json_properties)
    }

    /// The field loop; the cursor must be on the first property.
    pub fn from_json_properties(reader: &mut JsonReader<'_>) -> Result<HealthStatistics> {
        let mut obj = HealthStatistics::default();
        while reader.token_kind() != TokenKind::EndObject {
            match reader.read_property_name()?.as_str() {
                "HealthStateCountList" => {
                    obj.health_state_count_list =
                        reader.read_list(entity_kind_health_state_count::deserialize)?
                }
                _ => reader.skip_property_value()?,
            }
        }
        Ok(obj)
    }

    /// Writes the statistics object.
    pub fn serialize(writer: &mut JsonWriter, obj: &HealthStatistics) -> Result<()> {
        writer.write_start_object()?;
        if let Some(list) = &obj.health_state_count_list {
            writer.write_enumerable_property(
                Some(list.as_slice()),
                "HealthStateCountList",
                entity_kind_health_state_count::serialize,
            )?;
        }
        writer.write_end_object()
    }
}

#[cfg(test)]
mod tests {
    use fabricmesh_core::{FabricMeshError, JsonReader, JsonWriter};

    use crate::models::{
        EntityKind, EntityKindHealthStateCount, HealthState, HealthStateCount, HealthStatistics,
    };

    use super::*;

    fn read_health_state(json: &str) -> Option<HealthState> {
        let mut reader = JsonReader::new(json).unwrap();
        health_state::deserialize(&mut reader).unwrap()
    }

    #[test]
    fn test_health_state_literals() {
        assert_eq!(read_health_state(r#""Ok""#), Some(HealthState::Ok));
        assert_eq!(read_health_state(r#""Warning""#), Some(HealthState::Warning));
        assert_eq!(read_health_state(r#""Error""#), Some(HealthState::Error));
        assert_eq!(read_health_state(r#""Unknown""#), Some(HealthState::Unknown));
        assert_eq!(read_health_state("null"), None);
    }

    #[test]
    fn test_health_state_unrecognized_maps_to_invalid() {
        assert_eq!(
            read_health_state(r#""Degraded2""#),
            Some(HealthState::Invalid)
        );
    }

    #[test]
    fn test_entity_kind_unrecognized_fails() {
        let mut reader = JsonReader::new(r#""Gateway""#).unwrap();
        let err = entity_kind::deserialize(&mut reader).unwrap_err();
        assert!(matches!(
            err,
            FabricMeshError::UnknownEnumValue {
                enum_name: "EntityKind",
                ..
            }
        ));
    }

    #[test]
    fn test_health_statistics_roundtrip() {
        let original = HealthStatistics {
            health_state_count_list: Some(vec![
                EntityKindHealthStateCount {
                    entity_kind: Some(EntityKind::Node),
                    health_state_count: Some(HealthStateCount {
                        ok_count: Some(5),
                        warning_count: Some(1),
                        error_count: Some(0),
                    }),
                },
                EntityKindHealthStateCount {
                    entity_kind: Some(EntityKind::Cluster),
                    health_state_count: None,
                },
            ]),
        };
        let mut writer = JsonWriter::new();
        health_statistics::serialize(&mut writer, &original).unwrap();
        let json = writer.into_string();
        let mut reader = JsonReader::new(&json).unwrap();
        assert_eq!(health_statistics::deserialize(&mut reader).unwrap(), original);
    }

    #[test]
    fn test_health_state_count_null_entry_in_list() {
        let json = r#"{"HealthStateCountList": [{"EntityKind": "Node", "HealthStateCount": null}]}"#;
        let mut reader = JsonReader::new(json).unwrap();
        let stats = health_statistics::deserialize(&mut reader).unwrap();
        let list = stats.health_state_count_list.unwrap();
        assert_eq!(list[0].entity_kind, Some(EntityKind::Node));
        assert_eq!(list[0].health_state_count, None);
    }
}
