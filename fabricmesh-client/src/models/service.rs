//! Service type description family.

/// A load metric declared by a service type.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ServiceLoadMetricDescription {
    /// Metric name.
    pub name: Option<String>,
    /// Default load reported for the metric when a replica gives none.
    pub default_load: Option<i32>,
}

/// Describes a service type, discriminated on the wire by its `Kind`
/// property.
///
/// The discriminator is always the first property of the object; each
/// variant's remaining fields follow it. Variants carry their own copy of
/// the fields every service type shares (name, placement constraints, load
/// metrics), mirroring the wire schema.
#[derive(Debug, Clone, PartialEq)]
pub enum ServiceTypeDescription {
    /// A stateful service type (`Kind` = `"Stateful"`).
    Stateful(StatefulServiceTypeDescription),
    /// A stateless service type (`Kind` = `"Stateless"`).
    Stateless(StatelessServiceTypeDescription),
}

impl ServiceTypeDescription {
    /// Returns the wire discriminator literal for this variant.
    pub fn kind(&self) -> &'static str {
        match self {
            ServiceTypeDescription::Stateful(_) => "Stateful",
            ServiceTypeDescription::Stateless(_) => "Stateless",
        }
    }
}

/// A stateful service type.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatefulServiceTypeDescription {
    /// The service type name.
    pub service_type_name: Option<String>,
    /// Placement constraint expression, if any.
    pub placement_constraints: Option<String>,
    /// Load metrics the type declares.
    pub load_metrics: Option<Vec<ServiceLoadMetricDescription>>,
    /// Whether replicas persist state to disk.
    pub has_persisted_state: Option<bool>,
}

/// A stateless service type.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatelessServiceTypeDescription {
    /// The service type name.
    pub service_type_name: Option<String>,
    /// Placement constraint expression, if any.
    pub placement_constraints: Option<String>,
    /// Load metrics the type declares.
    pub load_metrics: Option<Vec<ServiceLoadMetricDescription>>,
    /// Default number of instances to run.
    pub instance_count: Option<i32>,
}
