//! End-to-end converter coverage: wire payloads in, wire payloads out.

use fabricmesh_client::models::{
    ApplicationInfo, HealthState, NodeEvent, NodeInfo, NodeName, ServiceTypeDescription,
    StatelessServiceTypeDescription,
};
use fabricmesh_client::serialization::application::application_info;
use fabricmesh_client::serialization::events::node_event;
use fabricmesh_client::serialization::node::node_info;
use fabricmesh_client::serialization::service::service_type_description;
use fabricmesh_core::{FabricMeshError, JsonReader, JsonWriter};

#[test]
fn node_info_survives_service_response_shape() {
    // A response shaped the way the cluster actually sends it: quoted
    // 64-bit integers, unknown properties, ISO-8601 durations.
    let payload = r#"{
        "Name": "_Node_0",
        "Id": "ba001a8bb353543e646be031afb10f1e",
        "IpAddressOrFQDN": "10.0.0.4",
        "Type": "NodeType0",
        "CodeVersion": "9.1.1583.9590",
        "ConfigVersion": "4",
        "NodeStatus": "Up",
        "NodeUpTimeInSeconds": "93784",
        "HealthState": "Ok",
        "IsSeedNode": true,
        "UpgradeDomain": "0",
        "FaultDomain": "fd:/0",
        "InstanceId": "131488782743994785",
        "NodeUpTime": "P1DT2H3M4S",
        "NodeUpAt": "2020-01-02T03:04:05Z"
    }"#;
    let mut reader = JsonReader::new(payload).unwrap();
    let info = node_info::deserialize(&mut reader).unwrap();

    assert_eq!(info.name, Some(NodeName::from("_Node_0")));
    assert_eq!(info.id.as_deref(), Some("ba001a8bb353543e646be031afb10f1e"));
    assert_eq!(info.health_state, Some(HealthState::Ok));
    assert_eq!(info.node_instance_id, Some(131_488_782_743_994_785));
    assert_eq!(
        info.node_up_time,
        Some(time::Duration::seconds(24 * 3600 + 2 * 3600 + 3 * 60 + 4))
    );
    assert_eq!(
        info.node_up_at,
        Some(time::macros::datetime!(2020-01-02 03:04:05 UTC))
    );
}

#[test]
fn written_node_info_is_valid_json_with_write_policy_applied() {
    let info = NodeInfo {
        name: None,
        node_type: Some("NodeType0".to_string()),
        ..NodeInfo::default()
    };
    let mut writer = JsonWriter::new();
    node_info::serialize(&mut writer, &info).unwrap();
    let json = writer.into_string();

    // Re-parse with an independent parser: required "Name" is an explicit
    // null, absent optionals are missing keys entirely.
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    let object = value.as_object().unwrap();
    assert!(object["Name"].is_null());
    assert_eq!(object["Type"], serde_json::json!("NodeType0"));
    assert!(!object.contains_key("HealthState"));
    assert!(!object.contains_key("IsSeedNode"));
}

#[test]
fn stateless_service_type_minimal_payload() {
    let mut reader = JsonReader::new(r#"{"Kind":"Stateless","InstanceCount":3}"#).unwrap();
    let desc = service_type_description::deserialize(&mut reader).unwrap();
    assert_eq!(
        desc,
        ServiceTypeDescription::Stateless(StatelessServiceTypeDescription {
            service_type_name: None,
            placement_constraints: None,
            load_metrics: None,
            instance_count: Some(3),
        })
    );

    let mut writer = JsonWriter::new();
    service_type_description::serialize(&mut writer, &desc).unwrap();
    assert_eq!(
        writer.into_string(),
        r#"{"Kind":"Stateless","ServiceTypeName":null,"InstanceCount":3}"#
    );
}

#[test]
fn polymorphic_discriminator_must_lead() {
    let mut reader =
        JsonReader::new(r#"{"ServiceTypeName":"T","Kind":"Stateless"}"#).unwrap();
    let err = service_type_description::deserialize(&mut reader).unwrap_err();
    assert!(matches!(
        err,
        FabricMeshError::InvalidDiscriminator { expected: "Kind", .. }
    ));
}

#[test]
fn node_event_roundtrip_through_independent_parser() {
    let payload = r#"{
        "Kind": "NodeRemoved",
        "EventInstanceId": "2b9f8c7e-0000-4000-8000-00000000abcd",
        "TimeStamp": "2020-06-01T12:00:00Z",
        "HasCorrelatedEvents": true,
        "NodeName": "Node.7",
        "NodeId": "f9a3c2",
        "NodeInstance": 42,
        "NodeType": "Backend",
        "FabricVersion": "9.1.1583.9590",
        "IpAddressOrFQDN": "10.0.0.7",
        "NodeCapacities": "{\"MemoryInMb\":4096}"
    }"#;
    let mut reader = JsonReader::new(payload).unwrap();
    let event = node_event::deserialize(&mut reader).unwrap();
    assert!(matches!(event, NodeEvent::Removed(_)));

    let mut writer = JsonWriter::new();
    node_event::serialize(&mut writer, &event).unwrap();
    let json = writer.into_string();

    let written: serde_json::Value = serde_json::from_str(&json).unwrap();
    let original: serde_json::Value = serde_json::from_str(payload).unwrap();
    assert_eq!(written, original);

    let mut reader = JsonReader::new(&json).unwrap();
    assert_eq!(node_event::deserialize(&mut reader).unwrap(), event);
}

#[test]
fn timestamps_normalize_to_utc_on_write() {
    let payload = r#"{"Kind": "NodeAdded", "TimeStamp": "2020-01-02T05:04:05.000+02:00"}"#;
    let mut reader = JsonReader::new(payload).unwrap();
    let event = node_event::deserialize(&mut reader).unwrap();

    let mut writer = JsonWriter::new();
    node_event::serialize(&mut writer, &event).unwrap();
    let value: serde_json::Value = serde_json::from_str(&writer.into_string()).unwrap();
    assert_eq!(value["TimeStamp"], serde_json::json!("2020-01-02T03:04:05Z"));
}

#[test]
fn application_parameters_keep_wire_nulls() {
    let payload = r#"{
        "Name": "fabric:/Voting",
        "Parameters": {"Theme": null, "VotesPerUser": "3"}
    }"#;
    let mut reader = JsonReader::new(payload).unwrap();
    let info = application_info::deserialize(&mut reader).unwrap();
    let parameters = info.parameters.as_ref().unwrap();
    assert_eq!(parameters.get("Theme"), Some(&None));
    assert_eq!(
        parameters.get("VotesPerUser"),
        Some(&Some("3".to_string()))
    );

    let mut writer = JsonWriter::new();
    application_info::serialize(&mut writer, &info).unwrap();
    let value: serde_json::Value = serde_json::from_str(&writer.into_string()).unwrap();
    assert!(value["Parameters"]["Theme"].is_null());
}

#[test]
fn empty_application_parameters_stay_empty() {
    let mut reader = JsonReader::new(r#"{"Parameters": {}}"#).unwrap();
    let info = application_info::deserialize(&mut reader).unwrap();
    assert_eq!(info.parameters.as_ref().map(|p| p.len()), Some(0));

    let mut writer = JsonWriter::new();
    application_info::serialize(&mut writer, &info).unwrap();
    assert_eq!(writer.into_string(), r#"{"Parameters":{}}"#);
}

#[test]
fn null_application_parameters_stay_absent() {
    let mut reader = JsonReader::new(r#"{"Parameters": null}"#).unwrap();
    let info = application_info::deserialize(&mut reader).unwrap();
    assert_eq!(info, ApplicationInfo::default());
}

#[test]
fn health_state_policies_diverge_by_family() {
    // An unrecognized HealthState degrades to Invalid inside a larger
    // object; the payload still parses.
    let mut reader = JsonReader::new(r#"{"HealthState": "SomethingNew"}"#).unwrap();
    let info = node_info::deserialize(&mut reader).unwrap();
    assert_eq!(info.health_state, Some(HealthState::Invalid));

    // An unrecognized variant Kind is terminal.
    let mut reader = JsonReader::new(r#"{"Kind": "NodeEvicted"}"#).unwrap();
    let err = node_event::deserialize(&mut reader).unwrap_err();
    assert!(matches!(err, FabricMeshError::UnknownVariant { .. }));
}

#[test]
fn malformed_payload_is_terminal() {
    let err = JsonReader::new(r#"{"Name": "Node.1", }"#)
        .and_then(|mut reader| node_info::deserialize(&mut reader))
        .unwrap_err();
    assert!(matches!(err, FabricMeshError::MalformedStream(_)));
}
