//! Core serialization types for the FabricMesh cluster-management client.
//!
//! The wire format of the cluster REST API is plain JSON with a small set of
//! fixed conventions: case-sensitive property names, discriminator-first
//! polymorphic objects, ISO-8601 timestamps and durations, and enums encoded
//! as their string literals. This crate provides the forward-only token
//! reader/writer those conventions are built on; the per-type converters live
//! with the domain model in `fabricmesh-client`.

#![warn(missing_docs)]

pub mod error;
pub mod json;

pub use error::{FabricMeshError, Result};
pub use json::{JsonReader, JsonWriter, TokenKind};
