//! The error envelope returned by the cluster for failed requests.

/// The body of a non-2xx response: `{"Error": {"Code": ..., "Message": ...}}`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FabricErrorBody {
    /// The error detail object.
    pub error: Option<FabricErrorDetails>,
}

/// Error code and message reported by the cluster.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FabricErrorDetails {
    /// Machine-readable error code, for example `FABRIC_E_NODE_NOT_FOUND`.
    pub code: Option<String>,
    /// Human-readable description.
    pub message: Option<String>,
}
