//! Converters for the service type description family.

/// Converter for
/// [`ServiceLoadMetricDescription`](crate::models::ServiceLoadMetricDescription).
pub mod service_load_metric_description {
    use fabricmesh_core::{JsonReader, JsonWriter, Result, TokenKind};

    use crate::models::ServiceLoadMetricDescription;

    /// Reads a complete load metric object.
    pub fn deserialize(reader: &mut JsonReader<'_>) -> Result<ServiceLoadMetricDescription> {
        reader.deserialize(from_json_properties)
    }

    /// The field loop; the cursor must be on the first property.
    pub fn from_json_properties(
        reader: &mut JsonReader<'_>,
    ) -> Result<ServiceLoadMetricDescription> {
        let mut obj = ServiceLoadMetricDescription::default();
        while reader.token_kind() != TokenKind::EndObject {
            match reader.read_property_name()?.as_str() {
                "Name" => obj.name = reader.read_value_as_string()?,
                "DefaultLoad" => obj.default_load = reader.read_value_as_int()?,
                _ => reader.skip_property_value()?,
            }
        }
        Ok(obj)
    }

    /// Writes the load metric object.
    pub fn serialize(writer: &mut JsonWriter, obj: &ServiceLoadMetricDescription) -> Result<()> {
        writer.write_start_object()?;
        writer.write_property(obj.name.as_ref(), "Name", |w, v| {
            w.write_string_value(Some(v.as_str()))
        })?;
        if let Some(load) = obj.default_load {
            writer.write_property_name("DefaultLoad")?;
            writer.write_int_value(Some(load))?;
        }
        writer.write_end_object()
    }
}

/// Converter for the polymorphic
/// [`ServiceTypeDescription`](crate::models::ServiceTypeDescription) family.
///
/// The `Kind` property must be the first property of the object; its value
/// selects which variant's field loop finishes reading the object.
pub mod service_type_description {
    use fabricmesh_core::{FabricMeshError, JsonReader, JsonWriter, Result};

    use crate::models::ServiceTypeDescription;

    use super::{stateful_service_type_description, stateless_service_type_description};

    /// Reads a complete description object, dispatching on `Kind`.
    pub fn deserialize(reader: &mut JsonReader<'_>) -> Result<ServiceTypeDescription> {
        reader.deserialize(from_json_properties)
    }

    /// Dispatches on the discriminator; the cursor must be on the first
    /// property.
    pub fn from_json_properties(reader: &mut JsonReader<'_>) -> Result<ServiceTypeDescription> {
        let prop_name = reader.read_property_name()?;
        if prop_name != "Kind" {
            return Err(FabricMeshError::InvalidDiscriminator {
                expected: "Kind",
                found: prop_name,
            });
        }
        let value = reader.read_value_as_string()?;
        match value.as_deref() {
            Some("Stateful") => Ok(ServiceTypeDescription::Stateful(
                stateful_service_type_description::from_json_properties(reader)?,
            )),
            Some("Stateless") => Ok(ServiceTypeDescription::Stateless(
                stateless_service_type_description::from_json_properties(reader)?,
            )),
            other => Err(FabricMeshError::UnknownVariant {
                family: "ServiceTypeDescription",
                value: other.unwrap_or("null").to_string(),
            }),
        }
    }

    /// Writes the description object, discriminator first.
    pub fn serialize(writer: &mut JsonWriter, obj: &ServiceTypeDescription) -> Result<()> {
        writer.write_start_object()?;
        writer.write_property_name("Kind")?;
        writer.write_string_value(Some(obj.kind()))?;
        match obj {
            ServiceTypeDescription::Stateful(v) => {
                stateful_service_type_description::write_json_properties(writer, v)?
            }
            ServiceTypeDescription::Stateless(v) => {
                stateless_service_type_description::write_json_properties(writer, v)?
            }
        }
        writer.write_end_object()
    }
}

/// Converter for
/// [`StatefulServiceTypeDescription`](crate::models::StatefulServiceTypeDescription).
pub mod stateful_service_type_description {
    use fabricmesh_core::{JsonReader, JsonWriter, Result, TokenKind};

    use crate::models::StatefulServiceTypeDescription;

    use super::service_load_metric_description;

    /// The field loop; the cursor must be on the property after the
    /// discriminator.
    pub fn from_json_properties(
        reader: &mut JsonReader<'_>,
    ) -> Result<StatefulServiceTypeDescription> {
        let mut obj = StatefulServiceTypeDescription::default();
        while reader.token_kind() != TokenKind::EndObject {
            match reader.read_property_name()?.as_str() {
                "ServiceTypeName" => obj.service_type_name = reader.read_value_as_string()?,
                "PlacementConstraints" => {
                    obj.placement_constraints = reader.read_value_as_string()?
                }
                "LoadMetrics" => {
                    obj.load_metrics =
                        reader.read_list(service_load_metric_description::deserialize)?
                }
                "HasPersistedState" => obj.has_persisted_state = reader.read_value_as_bool()?,
                _ => reader.skip_property_value()?,
            }
        }
        Ok(obj)
    }

    /// Writes the variant's fields without the surrounding object
    /// delimiters or discriminator.
    pub fn write_json_properties(
        writer: &mut JsonWriter,
        obj: &StatefulServiceTypeDescription,
    ) -> Result<()> {
        writer.write_property(obj.service_type_name.as_ref(), "ServiceTypeName", |w, v| {
            w.write_string_value(Some(v.as_str()))
        })?;
        if let Some(constraints) = &obj.placement_constraints {
            writer.write_property_name("PlacementConstraints")?;
            writer.write_string_value(Some(constraints.as_str()))?;
        }
        if let Some(metrics) = &obj.load_metrics {
            writer.write_enumerable_property(
                Some(metrics.as_slice()),
                "LoadMetrics",
                service_load_metric_description::serialize,
            )?;
        }
        if let Some(persisted) = obj.has_persisted_state {
            writer.write_property_name("HasPersistedState")?;
            writer.write_bool_value(Some(persisted))?;
        }
        Ok(())
    }
}

/// Converter for
/// [`StatelessServiceTypeDescription`](crate::models::StatelessServiceTypeDescription).
pub mod stateless_service_type_description {
    use fabricmesh_core::{JsonReader, JsonWriter, Result, TokenKind};

    use crate::models::StatelessServiceTypeDescription;

    use super::service_load_metric_description;

    /// The field loop; the cursor must be on the property after the
    /// discriminator.
    pub fn from_json_properties(
        reader: &mut JsonReader<'_>,
    ) -> Result<StatelessServiceTypeDescription> {
        let mut obj = StatelessServiceTypeDescription::default();
        while reader.token_kind() != TokenKind::EndObject {
            match reader.read_property_name()?.as_str() {
                "ServiceTypeName" => obj.service_type_name = reader.read_value_as_string()?,
                "PlacementConstraints" => {
                    obj.placement_constraints = reader.read_value_as_string()?
                }
                "LoadMetrics" => {
                    obj.load_metrics =
                        reader.read_list(service_load_metric_description::deserialize)?
                }
                "InstanceCount" => obj.instance_count = reader.read_value_as_int()?,
                _ => reader.skip_property_value()?,
            }
        }
        Ok(obj)
    }

    /// Writes the variant's fields without the surrounding object
    /// delimiters or discriminator.
    pub fn write_json_properties(
        writer: &mut JsonWriter,
        obj: &StatelessServiceTypeDescription,
    ) -> Result<()> {
        writer.write_property(obj.service_type_name.as_ref(), "ServiceTypeName", |w, v| {
            w.write_string_value(Some(v.as_str()))
        })?;
        if let Some(constraints) = &obj.placement_constraints {
            writer.write_property_name("PlacementConstraints")?;
            writer.write_string_value(Some(constraints.as_str()))?;
        }
        if let Some(metrics) = &obj.load_metrics {
            writer.write_enumerable_property(
                Some(metrics.as_slice()),
                "LoadMetrics",
                service_load_metric_description::serialize,
            )?;
        }
        if let Some(count) = obj.instance_count {
            writer.write_property_name("InstanceCount")?;
            writer.write_int_value(Some(count))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use fabricmesh_core::{FabricMeshError, JsonReader, JsonWriter};

    use crate::models::{
        ServiceLoadMetricDescription, ServiceTypeDescription, StatefulServiceTypeDescription,
        StatelessServiceTypeDescription,
    };

    use super::*;

    #[test]
    fn test_stateless_minimal_payload() {
        let json = r#"{"Kind": "Stateless", "InstanceCount": 3}"#;
        let mut reader = JsonReader::new(json).unwrap();
        let desc = service_type_description::deserialize(&mut reader).unwrap();
        match desc {
            ServiceTypeDescription::Stateless(v) => {
                assert_eq!(v.instance_count, Some(3));
                assert_eq!(v.service_type_name, None);
            }
            other => panic!("expected stateless, got {other:?}"),
        }
    }

    #[test]
    fn test_stateful_roundtrip() {
        let original = ServiceTypeDescription::Stateful(StatefulServiceTypeDescription {
            service_type_name: Some("WordCountServiceType".to_string()),
            placement_constraints: Some("(NodeType==Primary)".to_string()),
            load_metrics: Some(vec![ServiceLoadMetricDescription {
                name: Some("MemoryInMb".to_string()),
                default_load: Some(256),
            }]),
            has_persisted_state: Some(true),
        });
        let mut writer = JsonWriter::new();
        service_type_description::serialize(&mut writer, &original).unwrap();
        let json = writer.into_string();
        assert!(json.starts_with(r#"{"Kind":"Stateful""#));

        let mut reader = JsonReader::new(&json).unwrap();
        let restored = service_type_description::deserialize(&mut reader).unwrap();
        assert_eq!(restored, original);
    }

    #[test]
    fn test_stateless_roundtrip() {
        let original = ServiceTypeDescription::Stateless(StatelessServiceTypeDescription {
            service_type_name: Some("GatewayType".to_string()),
            placement_constraints: None,
            load_metrics: None,
            instance_count: Some(-1),
        });
        let mut writer = JsonWriter::new();
        service_type_description::serialize(&mut writer, &original).unwrap();
        let json = writer.into_string();
        let mut reader = JsonReader::new(&json).unwrap();
        assert_eq!(
            service_type_description::deserialize(&mut reader).unwrap(),
            original
        );
    }

    #[test]
    fn test_discriminator_not_first_fails() {
        let json = r#"{"InstanceCount": 3, "Kind": "Stateless"}"#;
        let mut reader = JsonReader::new(json).unwrap();
        let err = service_type_description::deserialize(&mut reader).unwrap_err();
        match err {
            FabricMeshError::InvalidDiscriminator { expected, found } => {
                assert_eq!(expected, "Kind");
                assert_eq!(found, "InstanceCount");
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn test_unknown_kind_fails() {
        let json = r#"{"Kind": "Hybrid"}"#;
        let mut reader = JsonReader::new(json).unwrap();
        let err = service_type_description::deserialize(&mut reader).unwrap_err();
        assert!(matches!(
            err,
            FabricMeshError::UnknownVariant {
                family: "ServiceTypeDescription",
                ..
            }
        ));
    }

    #[test]
    fn test_variant_tolerates_unknown_trailing_fields() {
        let json = r#"{"Kind": "Stateful", "HasPersistedState": true, "Extra": [1, 2]}"#;
        let mut reader = JsonReader::new(json).unwrap();
        let desc = service_type_description::deserialize(&mut reader).unwrap();
        match desc {
            ServiceTypeDescription::Stateful(v) => {
                assert_eq!(v.has_persisted_state, Some(true))
            }
            other => panic!("expected stateful, got {other:?}"),
        }
    }
}
