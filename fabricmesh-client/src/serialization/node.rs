//! Converters for node-related types.

/// Converter for [`NodeName`](crate::models::NodeName).
pub mod node_name {
    use fabricmesh_core::{JsonReader, JsonWriter, Result};

    use crate::models::NodeName;

    /// Reads a node name, or `None` for JSON null.
    pub fn deserialize(reader: &mut JsonReader<'_>) -> Result<Option<NodeName>> {
        Ok(reader.read_value_as_string()?.map(NodeName::from))
    }

    /// Writes a node name.
    pub fn serialize(writer: &mut JsonWriter, value: &NodeName) -> Result<()> {
        writer.write_string_value(Some(value.as_str()))
    }
}

/// Converter for [`NodeDeactivationIntent`](crate::models::NodeDeactivationIntent).
pub mod node_deactivation_intent {
    use fabricmesh_core::{FabricMeshError, JsonReader, JsonWriter, Result};

    use crate::models::NodeDeactivationIntent;

    /// Reads the enum from its string literal, or `None` for JSON null.
    ///
    /// This family rejects unrecognized literals.
    pub fn deserialize(reader: &mut JsonReader<'_>) -> Result<Option<NodeDeactivationIntent>> {
        let value = match reader.read_value_as_string()? {
            None => return Ok(None),
            Some(value) => value,
        };
        let intent = match value.as_str() {
            "Pause" => NodeDeactivationIntent::Pause,
            "Restart" => NodeDeactivationIntent::Restart,
            "RemoveData" => NodeDeactivationIntent::RemoveData,
            "RemoveNode" => NodeDeactivationIntent::RemoveNode,
            _ => {
                return Err(FabricMeshError::UnknownEnumValue {
                    enum_name: "NodeDeactivationIntent",
                    value,
                })
            }
        };
        Ok(Some(intent))
    }

    /// Writes the enum as its string literal.
    pub fn serialize(writer: &mut JsonWriter, value: NodeDeactivationIntent) -> Result<()> {
        let literal = match value {
            NodeDeactivationIntent::Pause => "Pause",
            NodeDeactivationIntent::Restart => "Restart",
            NodeDeactivationIntent::RemoveData => "RemoveData",
            NodeDeactivationIntent::RemoveNode => "RemoveNode",
        };
        writer.write_string_value(Some(literal))
    }
}

/// Converter for [`NodeDeactivationTask`](crate::models::NodeDeactivationTask).
pub mod node_deactivation_task {
    use fabricmesh_core::{JsonReader, JsonWriter, Result, TokenKind};

    use crate::models::NodeDeactivationTask;

    use super::node_deactivation_intent;

    /// Reads a complete task object.
    pub fn deserialize(reader: &mut JsonReader<'_>) -> Result<NodeDeactivationTask> {
        reader.deserialize(from_json_properties)
    }

    /// The field loop; the cursor must be on the first property.
    pub fn from_json_properties(reader: &mut JsonReader<'_>) -> Result<NodeDeactivationTask> {
        let mut obj = NodeDeactivationTask::default();
        while reader.token_kind() != TokenKind::EndObject {
            match reader.read_property_name()?.as_str() {
                "NodeDeactivationTaskId" => obj.task_id = reader.read_value_as_string()?,
                "NodeDeactivationIntent" => {
                    obj.intent = node_deactivation_intent::deserialize(reader)?
                }
                _ => reader.skip_property_value()?,
            }
        }
        Ok(obj)
    }

    /// Writes the task object.
    pub fn serialize(writer: &mut JsonWriter, obj: &NodeDeactivationTask) -> Result<()> {
        writer.write_start_object()?;
        writer.write_property(obj.intent.as_ref(), "NodeDeactivationIntent", |w, v| {
            node_deactivation_intent::serialize(w, *v)
        })?;
        if let Some(task_id) = &obj.task_id {
            writer.write_property_name("NodeDeactivationTaskId")?;
            writer.write_string_value(Some(task_id.as_str()))?;
        }
        writer.write_end_object()
    }
}

/// Converter for [`NodeDeactivationInfo`](crate::models::NodeDeactivationInfo).
pub mod node_deactivation_info {
    use fabricmesh_core::{JsonReader, JsonWriter, Result, TokenKind};

    use crate::models::NodeDeactivationInfo;

    use super::{node_deactivation_intent, node_deactivation_task};

    /// Reads a complete deactivation info object.
    pub fn deserialize(reader: &mut JsonReader<'_>) -> Result<NodeDeactivationInfo> {
        reader.deserialize(from_json_properties)
    }

    /// The field loop; the cursor must be on the first property.
    pub fn from_json_properties(reader: &mut JsonReader<'_>) -> Result<NodeDeactivationInfo> {
        let mut obj = NodeDeactivationInfo::default();
        while reader.token_kind() != TokenKind::EndObject {
            match reader.read_property_name()?.as_str() {
                "NodeDeactivationIntent" => {
                    obj.intent = node_deactivation_intent::deserialize(reader)?
                }
                "NodeDeactivationStatus" => obj.status = reader.read_value_as_string()?,
                "NodeDeactivationTask" => {
                    obj.tasks = reader.read_list(node_deactivation_task::deserialize)?
                }
                _ => reader.skip_property_value()?,
            }
        }
        Ok(obj)
    }

    /// Writes the deactivation info object.
    pub fn serialize(writer: &mut JsonWriter, obj: &NodeDeactivationInfo) -> Result<()> {
        writer.write_start_object()?;
        if let Some(intent) = obj.intent {
            writer.write_property_name("NodeDeactivationIntent")?;
            node_deactivation_intent::serialize(writer, intent)?;
        }
        if let Some(status) = &obj.status {
            writer.write_property_name("NodeDeactivationStatus")?;
            writer.write_string_value(Some(status.as_str()))?;
        }
        if let Some(tasks) = &obj.tasks {
            writer.write_enumerable_property(
                Some(tasks.as_slice()),
                "NodeDeactivationTask",
                node_deactivation_task::serialize,
            )?;
        }
        writer.write_end_object()
    }
}

/// Converter for [`NodeInfo`](crate::models::NodeInfo).
pub mod node_info {
    use fabricmesh_core::{JsonReader, JsonWriter, Result, TokenKind};

    use crate::models::NodeInfo;
    use crate::serialization::health::health_state;

    use super::{node_deactivation_info, node_name};

    /// Reads a complete node info object.
    pub fn deserialize(reader: &mut JsonReader<'_>) -> Result<NodeInfo> {
        reader.deserialize(from_json_properties)
    }

    /// The field loop; the cursor must be on the first property.
    pub fn from_json_properties(reader: &mut JsonReader<'_>) -> Result<NodeInfo> {
        let mut obj = NodeInfo::default();
        while reader.token_kind() != TokenKind::EndObject {
            match reader.read_property_name()?.as_str() {
                "Name" => obj.name = node_name::deserialize(reader)?,
                "Id" => obj.id = reader.read_value_as_string()?,
                "IpAddressOrFQDN" => obj.ip_address_or_fqdn = reader.read_value_as_string()?,
                "Type" => obj.node_type = reader.read_value_as_string()?,
                "CodeVersion" => obj.code_version = reader.read_value_as_string()?,
                "ConfigVersion" => obj.config_version = reader.read_value_as_string()?,
                "HealthState" => obj.health_state = health_state::deserialize(reader)?,
                "NodeUpTime" => obj.node_up_time = reader.read_value_as_time_span()?,
                "IsSeedNode" => obj.is_seed_node = reader.read_value_as_bool()?,
                "InstanceId" => obj.node_instance_id = reader.read_value_as_long()?,
                "NodeDeactivationInfo" => {
                    obj.node_deactivation_info =
                        reader.read_nullable(node_deactivation_info::deserialize)?
                }
                "NodeUpAt" => obj.node_up_at = reader.read_value_as_date_time()?,
                _ => reader.skip_property_value()?,
            }
        }
        Ok(obj)
    }

    /// Writes the node info object.
    pub fn serialize(writer: &mut JsonWriter, obj: &NodeInfo) -> Result<()> {
        writer.write_start_object()?;
        writer.write_property(obj.name.as_ref(), "Name", |w, v| {
            node_name::serialize(w, v)
        })?;
        if let Some(id) = &obj.id {
            writer.write_property_name("Id")?;
            writer.write_string_value(Some(id.as_str()))?;
        }
        if let Some(ip) = &obj.ip_address_or_fqdn {
            writer.write_property_name("IpAddressOrFQDN")?;
            writer.write_string_value(Some(ip.as_str()))?;
        }
        if let Some(node_type) = &obj.node_type {
            writer.write_property_name("Type")?;
            writer.write_string_value(Some(node_type.as_str()))?;
        }
        if let Some(code_version) = &obj.code_version {
            writer.write_property_name("CodeVersion")?;
            writer.write_string_value(Some(code_version.as_str()))?;
        }
        if let Some(config_version) = &obj.config_version {
            writer.write_property_name("ConfigVersion")?;
            writer.write_string_value(Some(config_version.as_str()))?;
        }
        if let Some(health) = obj.health_state {
            writer.write_property_name("HealthState")?;
            health_state::serialize(writer, health)?;
        }
        if let Some(up_time) = obj.node_up_time {
            writer.write_property_name("NodeUpTime")?;
            writer.write_time_span_value(Some(up_time))?;
        }
        if let Some(is_seed) = obj.is_seed_node {
            writer.write_property_name("IsSeedNode")?;
            writer.write_bool_value(Some(is_seed))?;
        }
        if let Some(instance_id) = obj.node_instance_id {
            writer.write_property_name("InstanceId")?;
            writer.write_long_value(Some(instance_id))?;
        }
        if let Some(info) = &obj.node_deactivation_info {
            writer.write_property_name("NodeDeactivationInfo")?;
            node_deactivation_info::serialize(writer, info)?;
        }
        if let Some(up_at) = obj.node_up_at {
            writer.write_property_name("NodeUpAt")?;
            writer.write_date_time_value(Some(up_at))?;
        }
        writer.write_end_object()
    }
}

/// Converter for [`PagedNodeInfoList`](crate::models::PagedNodeInfoList).
pub mod paged_node_info_list {
    use fabricmesh_core::{JsonReader, JsonWriter, Result, TokenKind};

    use crate::models::PagedNodeInfoList;

    use super::node_info;

    /// Reads a complete page object.
    pub fn deserialize(reader: &mut JsonReader<'_>) -> Result<PagedNodeInfoList> {
        reader.deserialize(from_json_properties)
    }

    /// The field loop; the cursor must be on the first property.
    pub fn from_json_properties(reader: &mut JsonReader<'_>) -> Result<PagedNodeInfoList> {
        let mut obj = PagedNodeInfoList::default();
        while reader.token_kind() != TokenKind::EndObject {
            match reader.read_property_name()?.as_str() {
                "ContinuationToken" => obj.continuation_token = reader.read_value_as_string()?,
                "Items" => obj.items = reader.read_list(node_info::deserialize)?,
                _ => reader.skip_property_value()?,
            }
        }
        Ok(obj)
    }

    /// Writes the page object.
    pub fn serialize(writer: &mut JsonWriter, obj: &PagedNodeInfoList) -> Result<()> {
        writer.write_start_object()?;
        if let Some(token) = &obj.continuation_token {
            writer.write_property_name("ContinuationToken")?;
            writer.write_string_value(Some(token.as_str()))?;
        }
        if let Some(items) = &obj.items {
            writer.write_enumerable_property(Some(items.as_slice()), "Items", node_info::serialize)?;
        }
        writer.write_end_object()
    }
}
