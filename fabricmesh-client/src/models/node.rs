//! Node-related types.

use time::{Duration, OffsetDateTime};

use super::HealthState;

/// The name of a cluster node.
///
/// A plain string on the wire; the newtype keeps node names from mixing with
/// other identifier strings in operation signatures.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NodeName(String);

impl NodeName {
    /// Creates a node name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the wrapper and returns the inner string.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl std::fmt::Display for NodeName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for NodeName {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl From<&str> for NodeName {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

/// The intent behind a node deactivation.
///
/// This enum family rejects unrecognized wire literals
/// (`UnknownEnumValue`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeDeactivationIntent {
    /// Pause the node; services keep their state.
    Pause,
    /// Restart the node.
    Restart,
    /// Remove the node's data before deactivating.
    RemoveData,
    /// Remove the node from the cluster.
    RemoveNode,
}

/// One task within an ongoing node deactivation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NodeDeactivationTask {
    /// Identity of the task.
    pub task_id: Option<String>,
    /// The intent the task was started with.
    pub intent: Option<NodeDeactivationIntent>,
}

/// Deactivation state of a node.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NodeDeactivationInfo {
    /// The effective intent across all tasks.
    pub intent: Option<NodeDeactivationIntent>,
    /// Progress status reported by the cluster.
    pub status: Option<String>,
    /// The individual deactivation tasks.
    pub tasks: Option<Vec<NodeDeactivationTask>>,
}

/// Information about a cluster node.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NodeInfo {
    /// The node's name.
    pub name: Option<NodeName>,
    /// Internal node identity.
    pub id: Option<String>,
    /// IP address or fully qualified domain name of the node.
    pub ip_address_or_fqdn: Option<String>,
    /// The node type, as declared in the cluster manifest.
    pub node_type: Option<String>,
    /// Version of the cluster runtime the node runs.
    pub code_version: Option<String>,
    /// Version of the cluster configuration the node runs.
    pub config_version: Option<String>,
    /// Aggregated health of the node.
    pub health_state: Option<HealthState>,
    /// How long the node has been up.
    pub node_up_time: Option<Duration>,
    /// Whether the node is a seed node.
    pub is_seed_node: Option<bool>,
    /// Monotonically increasing instance id of the node's current lifetime.
    pub node_instance_id: Option<i64>,
    /// Present while the node is being deactivated.
    pub node_deactivation_info: Option<NodeDeactivationInfo>,
    /// When the node last came up.
    pub node_up_at: Option<OffsetDateTime>,
}

/// One page of node information, with the continuation token for the next
/// page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PagedNodeInfoList {
    /// Opaque token to pass to the next list call; absent on the last page.
    pub continuation_token: Option<String>,
    /// The nodes in this page.
    pub items: Option<Vec<NodeInfo>>,
}
