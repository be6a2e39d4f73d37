#![doc = include_str!("../README.md")]

// -----------------------------------------------------------------------------
// Modules

mod codec;
mod engine;
mod format;

pub mod config;
pub mod error;
pub mod schema;
pub mod serializable;
pub mod variant;

// -----------------------------------------------------------------------------
// Top-Level exports

pub use config::{ByteArrayMode, Configuration, ValidationFlags};
pub use error::{Error, ValueKind};
pub use format::cbor::{
    TAG_EXPECTED_BASE16, TAG_EXPECTED_BASE64, TAG_EXPECTED_BASE64URL, TAG_FINITE_SET,
    TAG_HOMOGENEOUS_ARRAY,
};
pub use schema::{ElementCodec, EnumTable, Kind, Property, Schema};
pub use serializable::{Codec, Serializable};
pub use variant::Variant;
