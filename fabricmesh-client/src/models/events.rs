//! Node event family.

use time::OffsetDateTime;
use uuid::Uuid;

use super::NodeName;

/// A node lifecycle event, discriminated on the wire by its `Kind` property.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeEvent {
    /// A node joined the cluster (`Kind` = `"NodeAdded"`).
    Added(NodeAddedEvent),
    /// A node left the cluster (`Kind` = `"NodeRemoved"`).
    Removed(NodeRemovedEvent),
}

impl NodeEvent {
    /// Returns the wire discriminator literal for this variant.
    pub fn kind(&self) -> &'static str {
        match self {
            NodeEvent::Added(_) => "NodeAdded",
            NodeEvent::Removed(_) => "NodeRemoved",
        }
    }
}

/// A node joined the cluster.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NodeAddedEvent {
    /// Identity of this event occurrence.
    pub event_instance_id: Option<Uuid>,
    /// When the event was observed.
    pub time_stamp: Option<OffsetDateTime>,
    /// Whether correlated events are available for this event.
    pub has_correlated_events: Option<bool>,
    /// The node the event concerns.
    pub node_name: Option<NodeName>,
    /// Instance id of the node's lifetime the event belongs to.
    pub node_instance: Option<i64>,
    /// The node type, as declared in the cluster manifest.
    pub node_type: Option<String>,
    /// The runtime version the node joined with.
    pub fabric_version: Option<String>,
    /// IP address or fully qualified domain name of the node.
    pub ip_address_or_fqdn: Option<String>,
}

/// A node left the cluster.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NodeRemovedEvent {
    /// Identity of this event occurrence.
    pub event_instance_id: Option<Uuid>,
    /// When the event was observed.
    pub time_stamp: Option<OffsetDateTime>,
    /// Whether correlated events are available for this event.
    pub has_correlated_events: Option<bool>,
    /// The node the event concerns.
    pub node_name: Option<NodeName>,
    /// Internal node identity.
    pub node_id: Option<String>,
    /// Instance id of the node's lifetime the event belongs to.
    pub node_instance: Option<i64>,
    /// The node type, as declared in the cluster manifest.
    pub node_type: Option<String>,
    /// The runtime version the node was running.
    pub fabric_version: Option<String>,
    /// IP address or fully qualified domain name of the node.
    pub ip_address_or_fqdn: Option<String>,
    /// Capacities declared for the node, as a serialized map.
    pub node_capacities: Option<String>,
}
