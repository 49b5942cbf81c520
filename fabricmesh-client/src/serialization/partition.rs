//! Converters for partition and load metric types.

/// Converter for [`SelectedPartition`](crate::models::SelectedPartition).
pub mod selected_partition {
    use fabricmesh_core::{JsonReader, JsonWriter, Result, TokenKind};

    use crate::models::SelectedPartition;

    /// Reads a complete selected partition object.
    pub fn deserialize(reader: &mut JsonReader<'_>) -> Result<SelectedPartition> {
        reader.deserialize(from_json_properties)
    }

    /// The field loop; the cursor must be on the first property.
    pub fn from_json_properties(reader: &mut JsonReader<'_>) -> Result<SelectedPartition> {
        let mut obj = SelectedPartition::default();
        while reader.token_kind() != TokenKind::EndObject {
            match reader.read_property_name()?.as_str() {
                "ServiceName" => obj.service_name = reader.read_value_as_string()?,
                "PartitionId" => obj.partition_id = reader.read_value_as_guid()?,
                _ => reader.skip_property_value()?,
            }
        }
        Ok(obj)
    }

    /// Writes the selected partition object.
    pub fn serialize(writer: &mut JsonWriter, obj: &SelectedPartition) -> Result<()> {
        writer.write_start_object()?;
        if let Some(service_name) = &obj.service_name {
            writer.write_property_name("ServiceName")?;
            writer.write_string_value(Some(service_name.as_str()))?;
        }
        if let Some(partition_id) = obj.partition_id {
            writer.write_property_name("PartitionId")?;
            writer.write_guid_value(Some(partition_id))?;
        }
        writer.write_end_object()
    }
}

/// Converter for [`LoadMetricReport`](crate::models::LoadMetricReport).
pub mod load_metric_report {
    use fabricmesh_core::{JsonReader, JsonWriter, Result, TokenKind};

    use crate::models::LoadMetricReport;

    /// Reads a complete load metric report.
    pub fn deserialize(reader: &mut JsonReader<'_>) -> Result<LoadMetricReport> {
        reader.deserialize(from_json_properties)
    }

    /// The field loop; the cursor must be on the first property.
    pub fn from_json_properties(reader: &mut JsonReader<'_>) -> Result<LoadMetricReport> {
        let mut obj = LoadMetricReport::default();
        while reader.token_kind() != TokenKind::EndObject {
            match reader.read_property_name()?.as_str() {
                "LastReportedUtc" => obj.last_reported_utc = reader.read_value_as_date_time()?,
                "Name" => obj.name = reader.read_value_as_string()?,
                "Value" => obj.value = reader.read_value_as_string()?,
                "CurrentValue" => obj.current_value = reader.read_value_as_double()?,
                _ => reader.skip_property_value()?,
            }
        }
        Ok(obj)
    }

    /// Writes the load metric report.
    pub fn serialize(writer: &mut JsonWriter, obj: &LoadMetricReport) -> Result<()> {
        writer.write_start_object()?;
        if let Some(reported) = obj.last_reported_utc {
            writer.write_property_name("LastReportedUtc")?;
            writer.write_date_time_value(Some(reported))?;
        }
        if let Some(name) = &obj.name {
            writer.write_property_name("Name")?;
            writer.write_string_value(Some(name.as_str()))?;
        }
        if let Some(value) = &obj.value {
            writer.write_property_name("Value")?;
            writer.write_string_value(Some(value.as_str()))?;
        }
        if let Some(current) = obj.current_value {
            writer.write_property_name("CurrentValue")?;
            writer.write_double_value(Some(current))?;
        }
        writer.write_end_object()
    }
}
