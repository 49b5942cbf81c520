//! Per-type wire converters.
//!
//! One module per wire type, each with the same three entry points where they
//! apply:
//!
//! - `deserialize(reader)` — reads a complete JSON object (start token
//!   through end token).
//! - `from_json_properties(reader)` — the field loop: the cursor is on the
//!   first property (or already on end-of-object), and the loop runs until
//!   end-of-object, matching property names ordinally and skipping unknown
//!   ones. Fields never seen stay `None`; the loop never fails on a missing
//!   field.
//! - `serialize(writer, value)` — writes the object: required properties
//!   unconditionally (`null` when the value is absent), optional properties
//!   only when present, in a fixed order.
//!
//! Polymorphic families add the discriminator handling: `deserialize` reads
//! `Kind` as the mandatory first property and dispatches to the matched
//! variant's `from_json_properties`; `serialize` writes `Kind` first and
//! delegates to the variant's `write_json_properties`, which writes neither
//! `Kind` nor the object delimiters. Enum modules map between literals and
//! variants, one policy per family for unrecognized literals.

pub mod application;
pub mod error_body;
pub mod events;
pub mod health;
pub mod node;
pub mod partition;
pub mod service;
