//! Forward-only JSON token reader/writer and the scalar codec layered on it.
//!
//! The reader holds exactly one token (the current one) and never materializes
//! a document tree; converters consume it in a single forward pass. The writer
//! is the mirror: a container-state stack over an output string.

mod duration;
mod reader;
mod token;
mod writer;

pub use duration::{format_iso8601, parse_iso8601};
pub use reader::JsonReader;
pub use token::{JsonToken, TokenKind};
pub use writer::JsonWriter;
