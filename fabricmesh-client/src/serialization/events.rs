//! Converters for the node event family.

/// Converter for the polymorphic [`NodeEvent`](crate::models::NodeEvent)
/// family.
///
/// The `Kind` property must be the first property of the object; its value
/// selects which variant's field loop finishes reading the object.
pub mod node_event {
    use fabricmesh_core::{FabricMeshError, JsonReader, JsonWriter, Result};

    use crate::models::NodeEvent;

    use super::{node_added_event, node_removed_event};

    /// Reads a complete event object, dispatching on `Kind`.
    pub fn deserialize(reader: &mut JsonReader<'_>) -> Result<NodeEvent> {
        reader.deserialize(from_json_properties)
    }

    /// Dispatches on the discriminator; the cursor must be on the first
    /// property.
    pub fn from_json_properties(reader: &mut JsonReader<'_>) -> Result<NodeEvent> {
        let prop_name = reader.read_property_name()?;
        if prop_name != "Kind" {
            return Err(FabricMeshError::InvalidDiscriminator {
                expected: "Kind",
                found: prop_name,
            });
        }
        let value = reader.read_value_as_string()?;
        match value.as_deref() {
            Some("NodeAdded") => Ok(NodeEvent::Added(node_added_event::from_json_properties(
                reader,
            )?)),
            Some("NodeRemoved") => Ok(NodeEvent::Removed(
                node_removed_event::from_json_properties(reader)?,
            )),
            other => Err(FabricMeshError::UnknownVariant {
                family: "NodeEvent",
                value: other.unwrap_or("null").to_string(),
            }),
        }
    }

    /// Writes the event object, discriminator first.
    pub fn serialize(writer: &mut JsonWriter, obj: &NodeEvent) -> Result<()> {
        writer.write_start_object()?;
        writer.write_property_name("Kind")?;
        writer.write_string_value(Some(obj.kind()))?;
        match obj {
            NodeEvent::Added(v) => node_added_event::write_json_properties(writer, v)?,
            NodeEvent::Removed(v) => node_removed_event::write_json_properties(writer, v)?,
        }
        writer.write_end_object()
    }
}

/// Converter for [`NodeAddedEvent`](crate::models::NodeAddedEvent).
pub mod node_added_event {
    use fabricmesh_core::{JsonReader, JsonWriter, Result, TokenKind};

    use crate::models::NodeAddedEvent;
    use crate::serialization::node::node_name;

    /// The field loop; the cursor must be on the property after the
    /// discriminator.
    pub fn from_json_properties(reader: &mut JsonReader<'_>) -> Result<NodeAddedEvent> {
        let mut obj = NodeAddedEvent::default();
        while reader.token_kind() != TokenKind::EndObject {
            match reader.read_property_name()?.as_str() {
                "EventInstanceId" => obj.event_instance_id = reader.read_value_as_guid()?,
                "TimeStamp" => obj.time_stamp = reader.read_value_as_date_time()?,
                "HasCorrelatedEvents" => {
                    obj.has_correlated_events = reader.read_value_as_bool()?
                }
                "NodeName" => obj.node_name = node_name::deserialize(reader)?,
                "NodeInstance" => obj.node_instance = reader.read_value_as_long()?,
                "NodeType" => obj.node_type = reader.read_value_as_string()?,
                "FabricVersion" => obj.fabric_version = reader.read_value_as_string()?,
                "IpAddressOrFQDN" => obj.ip_address_or_fqdn = reader.read_value_as_string()?,
                _ => reader.skip_property_value()?,
            }
        }
        Ok(obj)
    }

    /// Writes the variant's fields without the surrounding object
    /// delimiters or discriminator.
    pub fn write_json_properties(writer: &mut JsonWriter, obj: &NodeAddedEvent) -> Result<()> {
        writer.write_property(obj.event_instance_id.as_ref(), "EventInstanceId", |w, v| {
            w.write_guid_value(Some(*v))
        })?;
        writer.write_property(obj.time_stamp.as_ref(), "TimeStamp", |w, v| {
            w.write_date_time_value(Some(*v))
        })?;
        writer.write_property(obj.node_name.as_ref(), "NodeName", |w, v| {
            node_name::serialize(w, v)
        })?;
        writer.write_property(obj.node_instance.as_ref(), "NodeInstance", |w, v| {
            w.write_long_value(Some(*v))
        })?;
        writer.write_property(obj.node_type.as_ref(), "NodeType", |w, v| {
            w.write_string_value(Some(v.as_str()))
        })?;
        writer.write_property(obj.fabric_version.as_ref(), "FabricVersion", |w, v| {
            w.write_string_value(Some(v.as_str()))
        })?;
        writer.write_property(obj.ip_address_or_fqdn.as_ref(), "IpAddressOrFQDN", |w, v| {
            w.write_string_value(Some(v.as_str()))
        })?;
        if let Some(has_correlated) = obj.has_correlated_events {
            writer.write_property_name("HasCorrelatedEvents")?;
            writer.write_bool_value(Some(has_correlated))?;
        }
        Ok(())
    }
}

/// Converter for [`NodeRemovedEvent`](crate::models::NodeRemovedEvent).
pub mod node_removed_event {
    use fabricmesh_core::{JsonReader, JsonWriter, Result, TokenKind};

    use crate::models::NodeRemovedEvent;
    use crate::serialization::node::node_name;

    /// The field loop; the cursor must be on the property after the
    /// discriminator.
    pub fn from_json_properties(reader: &mut JsonReader<'_>) -> Result<NodeRemovedEvent> {
        let mut obj = NodeRemovedEvent::default();
        while reader.token_kind() != TokenKind::EndObject {
            match reader.read_property_name()?.as_str() {
                "EventInstanceId" => obj.event_instance_id = reader.read_value_as_guid()?,
                "TimeStamp" => obj.time_stamp = reader.read_value_as_date_time()?,
                "HasCorrelatedEvents" => {
                    obj.has_correlated_events = reader.read_value_as_bool()?
                }
                "NodeName" => obj.node_name = node_name::deserialize(reader)?,
                "NodeId" => obj.node_id = reader.read_value_as_string()?,
                "NodeInstance" => obj.node_instance = reader.read_value_as_long()?,
                "NodeType" => obj.node_type = reader.read_value_as_string()?,
                "FabricVersion" => obj.fabric_version = reader.read_value_as_string()?,
                "IpAddressOrFQDN" => obj.ip_address_or_fqdn = reader.read_value_as_string()?,
                "NodeCapacities" => obj.node_capacities = reader.read_value_as_string()?,
                _ => reader.skip_property_value()?,
            }
        }
        Ok(obj)
    }

    /// Writes the variant's fields without the surrounding object
    /// delimiters or discriminator.
    pub fn write_json_properties(writer: &mut JsonWriter, obj: &NodeRemovedEvent) -> Result<()> {
        writer.write_property(obj.event_instance_id.as_ref(), "EventInstanceId", |w, v| {
            w.write_guid_value(Some(*v))
        })?;
        writer.write_property(obj.time_stamp.as_ref(), "TimeStamp", |w, v| {
            w.write_date_time_value(Some(*v))
        })?;
        writer.write_property(obj.node_name.as_ref(), "NodeName", |w, v| {
            node_name::serialize(w, v)
        })?;
        writer.write_property(obj.node_id.as_ref(), "NodeId", |w, v| {
            w.write_string_value(Some(v.as_str()))
        })?;
        writer.write_property(obj.node_instance.as_ref(), "NodeInstance", |w, v| {
            w.write_long_value(Some(*v))
        })?;
        writer.write_property(obj.node_type.as_ref(), "NodeType", |w, v| {
            w.write_string_value(Some(v.as_str()))
        })?;
        writer.write_property(obj.fabric_version.as_ref(), "FabricVersion", |w, v| {
            w.write_string_value(Some(v.as_str()))
        })?;
        writer.write_property(obj.ip_address_or_fqdn.as_ref(), "IpAddressOrFQDN", |w, v| {
            w.write_string_value(Some(v.as_str()))
        })?;
        writer.write_property(obj.node_capacities.as_ref(), "NodeCapacities", |w, v| {
            w.write_string_value(Some(v.as_str()))
        })?;
        if let Some(has_correlated) = obj.has_correlated_events {
            writer.write_property_name("HasCorrelatedEvents")?;
            writer.write_bool_value(Some(has_correlated))?;
        }
        Ok(())
    }
}
