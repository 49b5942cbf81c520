//! Application and code package types.

use std::collections::BTreeMap;

/// Information about an application instance.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ApplicationInfo {
    /// Identity of the application, derived from its name.
    pub id: Option<String>,
    /// The application name, for example `fabric:/Voting`.
    pub name: Option<String>,
    /// The application type name.
    pub type_name: Option<String>,
    /// The application type version.
    pub type_version: Option<String>,
    /// Lifecycle status reported by the cluster.
    pub status: Option<String>,
    /// Parameter overrides applied at creation; values may be null on the
    /// wire.
    pub parameters: Option<BTreeMap<String, Option<String>>>,
}

/// Information about a code package deployed on a node.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeployedCodePackageInfo {
    /// The code package name.
    pub name: Option<String>,
    /// The code package version.
    pub version: Option<String>,
    /// The service manifest that declares the code package.
    pub service_manifest_name: Option<String>,
    /// The host type running the package (for example `ExeHost`).
    pub host_type: Option<String>,
    /// Deployment status reported by the node.
    pub status: Option<String>,
    /// How often the entry point is scheduled to run, for periodic
    /// packages.
    pub run_frequency_interval: Option<time::Duration>,
}

/// Parameters for restarting a deployed code package.
///
/// All three fields are required by the API; the instance id guards against
/// restarting a different incarnation than the one observed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RestartDeployedCodePackageDescription {
    /// The service manifest that declares the code package.
    pub service_manifest_name: Option<String>,
    /// The code package name.
    pub code_package_name: Option<String>,
    /// The running instance id the restart applies to.
    pub code_package_instance_id: Option<i64>,
}

/// Container log content returned by the cluster.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContainerLogs {
    /// The raw log text.
    pub content: Option<String>,
}
