//! The two tagged-value representations behind one capability surface.
//!
//! The engine is generic over [`Format`]; everything representation-specific
//! (shape classification, semantic tags, raw-byte capability, adapter slot
//! selection) lives behind this trait, so the walkers in
//! [`engine`](crate::engine) are written once.

use std::any::Any;
use std::fmt;

use crate::config::Configuration;
use crate::error::{Error, ValueKind};
use crate::schema::{Adapter, ElementCodec, Property};
use crate::serializable::Codec;
use crate::variant::Variant;

pub(crate) mod cbor;
pub(crate) mod json;

pub(crate) use cbor::Cbor;
pub(crate) use json::Json;

// -----------------------------------------------------------------------------
// Format

/// Capability surface of one tagged-value representation.
pub(crate) trait Format {
    /// The concrete value-tree type.
    type Value: fmt::Debug;

    /// Whether the representation carries raw byte strings and semantic
    /// tags. Textual representations do not; they encode bytes as strings
    /// and drop tags entirely.
    const BINARY: bool;

    /// Expected shape set of an object root, for error reporting.
    const ROOT_EXPECTED: &'static [ValueKind];

    /// Classifies a value's shape.
    fn kind_of(value: &Self::Value) -> ValueKind;

    fn null() -> Self::Value;
    fn string(value: String) -> Self::Value;
    fn integer(value: i64) -> Self::Value;
    fn array(items: Vec<Self::Value>) -> Self::Value;
    fn object(entries: Vec<(String, Self::Value)>) -> Self::Value;

    /// A raw byte-string value; `None` when the representation cannot carry
    /// one.
    fn bytes(data: Vec<u8>) -> Option<Self::Value>;

    /// Wraps `inner` in a numeric semantic tag. Textual representations
    /// return `inner` unchanged.
    fn tagged(tag: u64, inner: Self::Value) -> Self::Value;

    /// Strips semantic tags, returning the payload.
    fn untagged(value: &Self::Value) -> &Self::Value;

    fn as_str(value: &Self::Value) -> Option<&str>;
    fn as_integer(value: &Self::Value) -> Option<i64>;
    fn as_bytes(value: &Self::Value) -> Option<&[u8]>;
    fn as_array(value: &Self::Value) -> Option<&[Self::Value]>;

    /// Views the value as ordered object entries, or `None` when it is not
    /// Object/Map-shaped.
    fn as_object(value: &Self::Value) -> Option<Vec<(String, &Self::Value)>>;

    /// Default conversion from a runtime value; `None` when the value is
    /// inexpressible in this representation.
    fn scalar(variant: &Variant) -> Option<Self::Value>;

    /// Default lenient conversion to a runtime value. Shapes with no
    /// [`Variant`] equivalent convert to [`Variant::Unset`], surfacing as a
    /// rejected write.
    fn to_variant(value: &Self::Value) -> Variant;

    /// Selects this representation's adapter slot of a property.
    fn adapter<T>(property: &Property<T>) -> &Adapter<T, Self::Value>;

    fn encode_nested(nested: &dyn Codec, config: &Configuration) -> Result<Self::Value, Error>;
    fn decode_nested(
        nested: &mut dyn Codec,
        value: &Self::Value,
        config: &Configuration,
    ) -> Result<(), Error>;

    fn encode_element(
        codec: &ElementCodec,
        element: &dyn Any,
        config: &Configuration,
    ) -> Result<Self::Value, Error>;
    fn decode_element(
        codec: &ElementCodec,
        value: &Self::Value,
        config: &Configuration,
    ) -> Result<Box<dyn Any>, Error>;
}
