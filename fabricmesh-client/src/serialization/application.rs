//! Converters for application and code package types.

/// Converter for [`ApplicationInfo`](crate::models::ApplicationInfo).
pub mod application_info {
    use fabricmesh_core::{JsonReader, JsonWriter, Result, TokenKind};

    use crate::models::ApplicationInfo;

    /// Reads a complete application info object.
    pub fn deserialize(reader: &mut JsonReader<'_>) -> Result<ApplicationInfo> {
        reader.deserialize(from_json_properties)
    }

    /// The field loop; the cursor must be on the first property.
    pub fn from_json_properties(reader: &mut JsonReader<'_>) -> Result<ApplicationInfo> {
        let mut obj = ApplicationInfo::default();
        while reader.token_kind() != TokenKind::EndObject {
            match reader.read_property_name()?.as_str() {
                "Id" => obj.id = reader.read_value_as_string()?,
                "Name" => obj.name = reader.read_value_as_string()?,
                "TypeName" => obj.type_name = reader.read_value_as_string()?,
                "TypeVersion" => obj.type_version = reader.read_value_as_string()?,
                "Status" => obj.status = reader.read_value_as_string()?,
                "Parameters" => {
                    obj.parameters = reader.read_map(JsonReader::read_value_as_string)?
                }
                _ => reader.skip_property_value()?,
            }
        }
        Ok(obj)
    }

    /// Writes the application info object.
    pub fn serialize(writer: &mut JsonWriter, obj: &ApplicationInfo) -> Result<()> {
        writer.write_start_object()?;
        if let Some(id) = &obj.id {
            writer.write_property_name("Id")?;
            writer.write_string_value(Some(id.as_str()))?;
        }
        if let Some(name) = &obj.name {
            writer.write_property_name("Name")?;
            writer.write_string_value(Some(name.as_str()))?;
        }
        if let Some(type_name) = &obj.type_name {
            writer.write_property_name("TypeName")?;
            writer.write_string_value(Some(type_name.as_str()))?;
        }
        if let Some(type_version) = &obj.type_version {
            writer.write_property_name("TypeVersion")?;
            writer.write_string_value(Some(type_version.as_str()))?;
        }
        if let Some(status) = &obj.status {
            writer.write_property_name("Status")?;
            writer.write_string_value(Some(status.as_str()))?;
        }
        if let Some(parameters) = &obj.parameters {
            writer.write_map_property(Some(parameters), "Parameters", |w, v| {
                w.write_string_value(v.as_deref())
            })?;
        }
        writer.write_end_object()
    }
}

/// Converter for
/// [`DeployedCodePackageInfo`](crate::models::DeployedCodePackageInfo).
pub mod deployed_code_package_info {
    use fabricmesh_core::{JsonReader, JsonWriter, Result, TokenKind};

    use crate::models::DeployedCodePackageInfo;

    /// Reads a complete code package info object.
    pub fn deserialize(reader: &mut JsonReader<'_>) -> Result<DeployedCodePackageInfo> {
        reader.deserialize(from_json_properties)
    }

    /// The field loop; the cursor must be on the first property.
    pub fn from_json_properties(reader: &mut JsonReader<'_>) -> Result<DeployedCodePackageInfo> {
        let mut obj = DeployedCodePackageInfo::default();
        while reader.token_kind() != TokenKind::EndObject {
            match reader.read_property_name()?.as_str() {
                "Name" => obj.name = reader.read_value_as_string()?,
                "Version" => obj.version = reader.read_value_as_string()?,
                "ServiceManifestName" => {
                    obj.service_manifest_name = reader.read_value_as_string()?
                }
                "HostType" => obj.host_type = reader.read_value_as_string()?,
                "Status" => obj.status = reader.read_value_as_string()?,
                "RunFrequencyInterval" => {
                    obj.run_frequency_interval = reader.read_value_as_time_span()?
                }
                _ => reader.skip_property_value()?,
            }
        }
        Ok(obj)
    }

    /// Writes the code package info object.
    pub fn serialize(writer: &mut JsonWriter, obj: &DeployedCodePackageInfo) -> Result<()> {
        writer.write_start_object()?;
        if let Some(name) = &obj.name {
            writer.write_property_name("Name")?;
            writer.write_string_value(Some(name.as_str()))?;
        }
        if let Some(version) = &obj.version {
            writer.write_property_name("Version")?;
            writer.write_string_value(Some(version.as_str()))?;
        }
        if let Some(manifest) = &obj.service_manifest_name {
            writer.write_property_name("ServiceManifestName")?;
            writer.write_string_value(Some(manifest.as_str()))?;
        }
        if let Some(host_type) = &obj.host_type {
            writer.write_property_name("HostType")?;
            writer.write_string_value(Some(host_type.as_str()))?;
        }
        if let Some(status) = &obj.status {
            writer.write_property_name("Status")?;
            writer.write_string_value(Some(status.as_str()))?;
        }
        if let Some(interval) = obj.run_frequency_interval {
            writer.write_property_name("RunFrequencyInterval")?;
            writer.write_time_span_value(Some(interval))?;
        }
        writer.write_end_object()
    }
}

/// Converter for
/// [`RestartDeployedCodePackageDescription`](crate::models::RestartDeployedCodePackageDescription).
pub mod restart_deployed_code_package_description {
    use fabricmesh_core::{JsonReader, JsonWriter, Result, TokenKind};

    use crate::models::RestartDeployedCodePackageDescription;

    /// Reads a complete restart description.
    pub fn deserialize(
        reader: &mut JsonReader<'_>,
    ) -> Result<RestartDeployedCodePackageDescription> {
        reader.deserialize(from_json_properties)
    }

    /// The field loop; the cursor must be on the first property.
    pub fn from_json_properties(
        reader: &mut JsonReader<'_>,
    ) -> Result<RestartDeployedCodePackageDescription> {
        let mut obj = RestartDeployedCodePackageDescription::default();
        while reader.token_kind() != TokenKind::EndObject {
            match reader.read_property_name()?.as_str() {
                "ServiceManifestName" => {
                    obj.service_manifest_name = reader.read_value_as_string()?
                }
                "CodePackageName" => obj.code_package_name = reader.read_value_as_string()?,
                "CodePackageInstanceId" => {
                    obj.code_package_instance_id = reader.read_value_as_long()?
                }
                _ => reader.skip_property_value()?,
            }
        }
        Ok(obj)
    }

    /// Writes the restart description. All fields are required by the API,
    /// so each is written even when absent.
    pub fn serialize(
        writer: &mut JsonWriter,
        obj: &RestartDeployedCodePackageDescription,
    ) -> Result<()> {
        writer.write_start_object()?;
        writer.write_property(
            obj.service_manifest_name.as_ref(),
            "ServiceManifestName",
            |w, v| w.write_string_value(Some(v.as_str())),
        )?;
        writer.write_property(obj.code_package_name.as_ref(), "CodePackageName", |w, v| {
            w.write_string_value(Some(v.as_str()))
        })?;
        writer.write_property(
            obj.code_package_instance_id.as_ref(),
            "CodePackageInstanceId",
            |w, v| w.write_long_value(Some(*v)),
        )?;
        writer.write_end_object()
    }
}

/// Converter for [`ContainerLogs`](crate::models::ContainerLogs).
pub mod container_logs {
    use fabricmesh_core::{JsonReader, JsonWriter, Result, TokenKind};

    use crate::models::ContainerLogs;

    /// Reads a complete container logs object.
    pub fn deserialize(reader: &mut JsonReader<'_>) -> Result<ContainerLogs> {
        reader.deserialize(from_json_properties)
    }

    /// The field loop; the cursor must be on the first property.
    pub fn from_json_properties(reader: &mut JsonReader<'_>) -> Result<ContainerLogs> {
        let mut obj = ContainerLogs::default();
        while reader.token_kind() != TokenKind::EndObject {
            match reader.read_property_name()?.as_str() {
                "Content" => obj.content = reader.read_value_as_string()?,
                _ => reader.skip_property_value()?,
            }
        }
        Ok(obj)
    }

    /// Writes the container logs object.
    pub fn serialize(writer: &mut JsonWriter, obj: &ContainerLogs) -> Result<()> {
        writer.write_start_object()?;
        if let Some(content) = &obj.content {
            writer.write_property_name("Content")?;
            writer.write_string_value(Some(content.as_str()))?;
        }
        writer.write_end_object()
    }
}
