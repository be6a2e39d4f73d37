//! The binary representation: a CBOR value tree with semantic tags.

use std::any::Any;

use ciborium::value::Value;

use crate::config::Configuration;
use crate::error::{Error, ValueKind};
use crate::format::Format;
use crate::schema::{Adapter, ElementCodec, Property};
use crate::serializable::Codec;
use crate::variant::Variant;

// -----------------------------------------------------------------------------
// Tag constants

/// Tag marking a byte string expected to render as URL-safe base64
/// (RFC 8949 §3.4.5.2).
pub const TAG_EXPECTED_BASE64URL: u64 = 21;

/// Tag marking a byte string expected to render as standard base64
/// (RFC 8949 §3.4.5.2).
pub const TAG_EXPECTED_BASE64: u64 = 22;

/// Tag marking a byte string expected to render as base16 (RFC 8949
/// §3.4.5.2).
pub const TAG_EXPECTED_BASE16: u64 = 23;

/// Tag marking an array of elements that all share one type (RFC 8746 §3.1).
pub const TAG_HOMOGENEOUS_ARRAY: u64 = 41;

/// Tag marking an array representing a mathematical finite set
/// (IANA-registered tag 258).
pub const TAG_FINITE_SET: u64 = 258;

// -----------------------------------------------------------------------------
// Cbor

/// Marker for the binary representation over [`ciborium::value::Value`].
pub(crate) struct Cbor;

impl Format for Cbor {
    type Value = Value;

    const BINARY: bool = true;
    const ROOT_EXPECTED: &'static [ValueKind] = &[ValueKind::Map];

    fn kind_of(value: &Value) -> ValueKind {
        match value {
            Value::Null => ValueKind::Null,
            Value::Bool(_) => ValueKind::Bool,
            Value::Integer(_) => ValueKind::Integer,
            Value::Float(_) => ValueKind::Double,
            Value::Text(_) => ValueKind::String,
            Value::Bytes(_) => ValueKind::Bytes,
            Value::Array(_) => ValueKind::Array,
            Value::Map(_) => ValueKind::Map,
            Value::Tag(..) => ValueKind::Tag,
            _ => ValueKind::Null,
        }
    }

    #[inline]
    fn null() -> Value {
        Value::Null
    }

    #[inline]
    fn string(value: String) -> Value {
        Value::Text(value)
    }

    #[inline]
    fn integer(value: i64) -> Value {
        Value::Integer(value.into())
    }

    #[inline]
    fn array(items: Vec<Value>) -> Value {
        Value::Array(items)
    }

    fn object(entries: Vec<(String, Value)>) -> Value {
        let entries = entries
            .into_iter()
            .map(|(key, value)| (Value::Text(key), value))
            .collect();
        Value::Map(entries)
    }

    #[inline]
    fn bytes(data: Vec<u8>) -> Option<Value> {
        Some(Value::Bytes(data))
    }

    #[inline]
    fn tagged(tag: u64, inner: Value) -> Value {
        Value::Tag(tag, Box::new(inner))
    }

    fn untagged(value: &Value) -> &Value {
        let mut value = value;
        while let Value::Tag(_, inner) = value {
            value = inner;
        }
        value
    }

    fn as_str(value: &Value) -> Option<&str> {
        match value {
            Value::Text(value) => Some(value),
            _ => None,
        }
    }

    fn as_integer(value: &Value) -> Option<i64> {
        match value {
            Value::Integer(value) => i64::try_from(*value).ok(),
            _ => None,
        }
    }

    fn as_bytes(value: &Value) -> Option<&[u8]> {
        match value {
            Value::Bytes(data) => Some(data),
            _ => None,
        }
    }

    fn as_array(value: &Value) -> Option<&[Value]> {
        match value {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    fn as_object(value: &Value) -> Option<Vec<(String, &Value)>> {
        match value {
            Value::Map(entries) => Some(
                entries
                    .iter()
                    .map(|(key, value)| {
                        // Property names are text; anything else is rendered
                        // so strict validation can still report it.
                        let key = match key {
                            Value::Text(key) => key.clone(),
                            other => format!("{other:?}"),
                        };
                        (key, value)
                    })
                    .collect(),
            ),
            _ => None,
        }
    }

    fn scalar(variant: &Variant) -> Option<Value> {
        match variant {
            Variant::Unset | Variant::Opaque(_) => None,
            Variant::Null => Some(Value::Null),
            Variant::Bool(value) => Some(Value::Bool(*value)),
            Variant::Int(value) => Some(Value::Integer((*value).into())),
            Variant::Float(value) => Some(Value::Float(*value)),
            Variant::Text(value) => Some(Value::Text(value.clone())),
            Variant::Bytes(data) => Some(Value::Bytes(data.clone())),
            Variant::List(items) => {
                let items = items
                    .iter()
                    .map(|item| Self::scalar(item).unwrap_or(Value::Null))
                    .collect();
                Some(Value::Array(items))
            }
        }
    }

    fn to_variant(value: &Value) -> Variant {
        match value {
            Value::Null => Variant::Null,
            Value::Bool(value) => Variant::Bool(*value),
            Value::Integer(value) => i64::try_from(*value)
                .map(Variant::Int)
                .unwrap_or(Variant::Unset),
            Value::Float(value) => Variant::Float(*value),
            Value::Text(value) => Variant::Text(value.clone()),
            Value::Bytes(data) => Variant::Bytes(data.clone()),
            Value::Array(items) => Variant::List(items.iter().map(Self::to_variant).collect()),
            Value::Tag(_, inner) => Self::to_variant(inner),
            _ => Variant::Unset,
        }
    }

    #[inline]
    fn adapter<T>(property: &Property<T>) -> &Adapter<T, Value> {
        property.cbor_adapter()
    }

    #[inline]
    fn encode_nested(nested: &dyn Codec, config: &Configuration) -> Result<Value, Error> {
        nested.to_cbor(config)
    }

    #[inline]
    fn decode_nested(
        nested: &mut dyn Codec,
        value: &Value,
        config: &Configuration,
    ) -> Result<(), Error> {
        nested.apply_cbor(value, config)
    }

    #[inline]
    fn encode_element(
        codec: &ElementCodec,
        element: &dyn Any,
        config: &Configuration,
    ) -> Result<Value, Error> {
        (codec.to_cbor)(element, config)
    }

    #[inline]
    fn decode_element(
        codec: &ElementCodec,
        value: &Value,
        config: &Configuration,
    ) -> Result<Box<dyn Any>, Error> {
        (codec.from_cbor)(value, config)
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use ciborium::value::Value;

    use super::{Cbor, TAG_FINITE_SET};
    use crate::error::ValueKind;
    use crate::format::Format;
    use crate::variant::Variant;

    #[test]
    fn kind_classification() {
        assert_eq!(Cbor::kind_of(&Value::Null), ValueKind::Null);
        assert_eq!(Cbor::kind_of(&Value::Integer(3.into())), ValueKind::Integer);
        assert_eq!(Cbor::kind_of(&Value::Bytes(vec![1])), ValueKind::Bytes);
        assert_eq!(
            Cbor::kind_of(&Value::Tag(TAG_FINITE_SET, Box::new(Value::Null))),
            ValueKind::Tag,
        );
    }

    #[test]
    fn untagged_strips_nested_tags() {
        let value = Value::Tag(99, Box::new(Value::Tag(98, Box::new(Value::Bool(true)))));
        assert_eq!(Cbor::untagged(&value), &Value::Bool(true));
    }

    #[test]
    fn non_text_map_keys_are_rendered() {
        let map = Value::Map(vec![(Value::Integer(5.into()), Value::Null)]);
        let entries = Cbor::as_object(&map).unwrap();
        assert_eq!(entries.len(), 1);
        assert!(!entries[0].0.is_empty());
    }

    #[test]
    fn to_variant_sees_through_tags() {
        let value = Value::Tag(TAG_FINITE_SET, Box::new(Value::Integer(9.into())));
        assert_eq!(Cbor::to_variant(&value).as_int(), Some(9));
    }
}
