//! Error types for FabricMesh client operations.

use thiserror::Error;

/// The error type for client operations.
#[derive(Debug, Error)]
pub enum ClientError {
    /// A request or response body failed to (de)serialize.
    #[error("serialization error: {0}")]
    Serialization(#[from] fabricmesh_core::FabricMeshError),

    /// The HTTP transport failed (connect, send, or body read).
    #[error("transport error: {0}")]
    Http(#[from] reqwest::Error),

    /// The cluster rejected the request with an error response.
    #[error("cluster error {code}: {message} (HTTP {status})")]
    Service {
        /// HTTP status code of the response.
        status: u16,
        /// The cluster error code, or the empty string if the body carried
        /// none.
        code: String,
        /// The cluster error message, or the raw response body if the body
        /// did not parse as an error envelope.
        message: String,
    },

    /// Every configured endpoint was tried and failed.
    #[error("all {attempts} endpoint attempts failed, last: {last}")]
    Exhausted {
        /// How many requests were attempted.
        attempts: u32,
        /// The last transport error observed.
        last: String,
    },

    /// A request URL could not be constructed.
    #[error("invalid request URL: {0}")]
    InvalidUrl(String),
}

/// A specialized `Result` type for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;
