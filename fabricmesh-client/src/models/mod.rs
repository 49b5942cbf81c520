//! Domain model for the cluster-management API.
//!
//! Every wire-optional field is an `Option`; a field absent from a response
//! stays `None` (the API omits properties freely between versions, and the
//! converters never fail on a missing field). Polymorphic wire families are
//! closed enums with one struct per variant.

mod application;
mod error_body;
mod events;
mod health;
mod node;
mod partition;
mod service;

pub use application::{
    ApplicationInfo, ContainerLogs, DeployedCodePackageInfo,
    RestartDeployedCodePackageDescription,
};
pub use error_body::{FabricErrorBody, FabricErrorDetails};
pub use events::{NodeAddedEvent, NodeEvent, NodeRemovedEvent};
pub use health::{
    EntityKind, EntityKindHealthStateCount, HealthState, HealthStateCount, HealthStatistics,
};
pub use node::{
    NodeDeactivationInfo, NodeDeactivationIntent, NodeDeactivationTask, NodeInfo, NodeName,
    PagedNodeInfoList,
};
pub use partition::{LoadMetricReport, SelectedPartition};
pub use service::{
    ServiceLoadMetricDescription, ServiceTypeDescription, StatefulServiceTypeDescription,
    StatelessServiceTypeDescription,
};
