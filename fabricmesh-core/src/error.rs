//! Error types for FabricMesh serialization.

use thiserror::Error;

/// The error type for (de)serialization of wire JSON.
///
/// Every variant is terminal for the conversion call in progress: the core
/// never retries and never returns a partially populated value. Unknown
/// *properties* are not errors (they are skipped for forward compatibility);
/// unknown discriminator and enum *values* are.
#[derive(Debug, Error)]
pub enum FabricMeshError {
    /// The token cursor was not in the state an operation expected
    /// (for example a property-name read attempted on a value token),
    /// or the input is not well-formed JSON.
    #[error("malformed stream: {0}")]
    MalformedStream(String),

    /// A scalar value's text did not parse as its declared type
    /// (bad GUID, bad timestamp, non-numeric number field).
    #[error("format error: {0}")]
    Format(String),

    /// The first property of a polymorphic object was not the expected
    /// discriminator name.
    #[error("invalid discriminator property {found:?}, expected {expected:?}")]
    InvalidDiscriminator {
        /// The discriminator property name the family declares.
        expected: &'static str,
        /// The property name that was actually first in the object.
        found: String,
    },

    /// A discriminator value did not match any known variant of its family.
    #[error("unknown {family} variant {value:?}")]
    UnknownVariant {
        /// The polymorphic family name.
        family: &'static str,
        /// The unrecognized discriminator literal.
        value: String,
    },

    /// An enum string literal did not match any known name, for an enum
    /// family that rejects unknown literals.
    #[error("unknown value {value:?} for enum {enum_name}")]
    UnknownEnumValue {
        /// The enum type name.
        enum_name: &'static str,
        /// The unrecognized literal.
        value: String,
    },
}

/// A specialized `Result` type for FabricMesh serialization.
pub type Result<T> = std::result::Result<T, FabricMeshError>;
