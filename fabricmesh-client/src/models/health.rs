//! Health model types.

/// Aggregated health of an entity.
///
/// This enum family maps unrecognized wire literals to [`Invalid`]
/// rather than failing, matching the service's own zero-value semantics.
///
/// [`Invalid`]: HealthState::Invalid
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HealthState {
    /// Zero value; also the mapping for unrecognized wire literals.
    #[default]
    Invalid,
    /// The entity is healthy.
    Ok,
    /// The entity is degraded but functional.
    Warning,
    /// The entity is unhealthy.
    Error,
    /// Health could not be determined.
    Unknown,
}

/// The kind of entity a health statistic refers to.
///
/// This enum family rejects unrecognized wire literals
/// (`UnknownEnumValue`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    /// A cluster node.
    Node,
    /// A service partition.
    Partition,
    /// A partition replica.
    Replica,
    /// A service.
    Service,
    /// An application.
    Application,
    /// The cluster itself.
    Cluster,
}

/// Health state counts for one entity kind.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HealthStateCount {
    /// Entities in `Ok` health.
    pub ok_count: Option<i64>,
    /// Entities in `Warning` health.
    pub warning_count: Option<i64>,
    /// Entities in `Error` health.
    pub error_count: Option<i64>,
}

/// Health state counts keyed by entity kind.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EntityKindHealthStateCount {
    /// The entity kind the counts apply to.
    pub entity_kind: Option<EntityKind>,
    /// The counts themselves.
    pub health_state_count: Option<HealthStateCount>,
}

/// Health statistics for a scope of the cluster.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HealthStatistics {
    /// One entry per entity kind.
    pub health_state_count_list: Option<Vec<EntityKindHealthStateCount>>,
}
