//! Partition and load metric types.

use time::OffsetDateTime;
use uuid::Uuid;

/// Identifies one partition of one service.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectedPartition {
    /// The owning service's name.
    pub service_name: Option<String>,
    /// The partition identity.
    pub partition_id: Option<Uuid>,
}

/// One load metric report from a replica or instance.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadMetricReport {
    /// When the load was last reported, UTC.
    pub last_reported_utc: Option<OffsetDateTime>,
    /// Metric name.
    pub name: Option<String>,
    /// Reported value, as the wire's string form.
    pub value: Option<String>,
    /// Reported value as a double, when the metric is fractional.
    pub current_value: Option<f64>,
}
