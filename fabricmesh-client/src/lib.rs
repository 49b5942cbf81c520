//! Async Rust client for the FabricMesh cluster-management REST API.
//!
//! The client is a thin HTTP surface over the streaming serialization core in
//! [`fabricmesh_core`]: every request body is produced by a per-type converter
//! writing to a [`fabricmesh_core::JsonWriter`], and every response body is
//! consumed by a converter reading from a [`fabricmesh_core::JsonReader`] in a
//! single forward pass.
//!
//! # Quick start
//!
//! ```rust,no_run
//! use fabricmesh_client::{ClientConfig, FabricMeshClient};
//! use fabricmesh_client::models::NodeName;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ClientConfig::builder()
//!         .add_endpoint("http://localhost:19080".parse()?)
//!         .build()?;
//!     let client = FabricMeshClient::new(config)?;
//!
//!     let nodes = client.get_node_info_list(None).await?;
//!     for node in nodes.items.unwrap_or_default() {
//!         println!("{:?}", node.name);
//!     }
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]

pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod serialization;

mod http;

pub use client::FabricMeshClient;
pub use config::{ClientConfig, ClientConfigBuilder, ConfigError};
pub use error::{ClientError, Result};
