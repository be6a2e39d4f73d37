//! The textual representation: a JSON value tree.

use std::any::Any;

use serde_json::{Map, Number, Value};

use crate::codec::bytes;
use crate::config::{ByteArrayMode, Configuration};
use crate::error::{Error, ValueKind};
use crate::format::Format;
use crate::schema::{Adapter, ElementCodec, Property};
use crate::serializable::Codec;
use crate::variant::Variant;

// -----------------------------------------------------------------------------
// Json

/// Marker for the textual representation over [`serde_json::Value`].
pub(crate) struct Json;

impl Format for Json {
    type Value = Value;

    const BINARY: bool = false;
    const ROOT_EXPECTED: &'static [ValueKind] = &[ValueKind::Object];

    fn kind_of(value: &Value) -> ValueKind {
        match value {
            Value::Null => ValueKind::Null,
            Value::Bool(_) => ValueKind::Bool,
            Value::Number(number) => {
                if number.as_i64().is_some() || number.as_u64().is_some() {
                    ValueKind::Integer
                } else {
                    ValueKind::Double
                }
            }
            Value::String(_) => ValueKind::String,
            Value::Array(_) => ValueKind::Array,
            Value::Object(_) => ValueKind::Object,
        }
    }

    #[inline]
    fn null() -> Value {
        Value::Null
    }

    #[inline]
    fn string(value: String) -> Value {
        Value::String(value)
    }

    #[inline]
    fn integer(value: i64) -> Value {
        Value::from(value)
    }

    #[inline]
    fn array(items: Vec<Value>) -> Value {
        Value::Array(items)
    }

    fn object(entries: Vec<(String, Value)>) -> Value {
        let mut map = Map::new();
        for (key, value) in entries {
            map.insert(key, value);
        }
        Value::Object(map)
    }

    #[inline]
    fn bytes(_data: Vec<u8>) -> Option<Value> {
        None
    }

    // The textual representation has no tag shape.
    #[inline]
    fn tagged(_tag: u64, inner: Value) -> Value {
        inner
    }

    #[inline]
    fn untagged(value: &Value) -> &Value {
        value
    }

    #[inline]
    fn as_str(value: &Value) -> Option<&str> {
        value.as_str()
    }

    // Any numeric value convertible to an integer counts, so integral
    // doubles are accepted as well.
    fn as_integer(value: &Value) -> Option<i64> {
        let Value::Number(number) = value else {
            return None;
        };
        number.as_i64().or_else(|| {
            number.as_f64().and_then(|float| {
                let integral = float.fract() == 0.0
                    && float >= i64::MIN as f64
                    && float <= i64::MAX as f64;
                integral.then_some(float as i64)
            })
        })
    }

    #[inline]
    fn as_bytes(_value: &Value) -> Option<&[u8]> {
        None
    }

    #[inline]
    fn as_array(value: &Value) -> Option<&[Value]> {
        value.as_array().map(Vec::as_slice)
    }

    fn as_object(value: &Value) -> Option<Vec<(String, &Value)>> {
        value
            .as_object()
            .map(|map| map.iter().map(|(key, value)| (key.clone(), value)).collect())
    }

    fn scalar(variant: &Variant) -> Option<Value> {
        match variant {
            Variant::Unset | Variant::Opaque(_) => None,
            Variant::Null => Some(Value::Null),
            Variant::Bool(value) => Some(Value::Bool(*value)),
            Variant::Int(value) => Some(Value::from(*value)),
            // Non-finite doubles have no JSON number; they degrade to null.
            Variant::Float(value) => Some(
                Number::from_f64(*value)
                    .map(Value::Number)
                    .unwrap_or(Value::Null),
            ),
            Variant::Text(value) => Some(Value::String(value.clone())),
            Variant::Bytes(data) => Some(Value::String(bytes::encode_string(
                data,
                ByteArrayMode::Base64,
            ))),
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
            Value::Number(number) => match number.as_i64() {
                Some(value) => Variant::Int(value),
                None => number.as_f64().map(Variant::Float).unwrap_or(Variant::Unset),
            },
            Value::String(value) => Variant::Text(value.clone()),
            Value::Array(items) => Variant::List(items.iter().map(Self::to_variant).collect()),
            Value::Object(_) => Variant::Unset,
        }
    }

    #[inline]
    fn adapter<T>(property: &Property<T>) -> &Adapter<T, Value> {
        property.json_adapter()
    }

    #[inline]
    fn encode_nested(nested: &dyn Codec, config: &Configuration) -> Result<Value, Error> {
        nested.to_json(config)
    }

    #[inline]
    fn decode_nested(
        nested: &mut dyn Codec,
        value: &Value,
        config: &Configuration,
    ) -> Result<(), Error> {
        nested.apply_json(value, config)
    }

    #[inline]
    fn encode_element(
        codec: &ElementCodec,
        element: &dyn Any,
        config: &Configuration,
    ) -> Result<Value, Error> {
        (codec.to_json)(element, config)
    }

    #[inline]
    fn decode_element(
        codec: &ElementCodec,
        value: &Value,
        config: &Configuration,
    ) -> Result<Box<dyn Any>, Error> {
        (codec.from_json)(value, config)
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use serde_json::{Value, json};

    use super::Json;
    use crate::error::ValueKind;
    use crate::format::Format;
    use crate::variant::Variant;

    #[test]
    fn kind_classification() {
        assert_eq!(Json::kind_of(&Value::Null), ValueKind::Null);
        assert_eq!(Json::kind_of(&json!(3)), ValueKind::Integer);
        assert_eq!(Json::kind_of(&json!(3.5)), ValueKind::Double);
        assert_eq!(Json::kind_of(&json!("x")), ValueKind::String);
        assert_eq!(Json::kind_of(&json!([1])), ValueKind::Array);
        assert_eq!(Json::kind_of(&json!({})), ValueKind::Object);
    }

    #[test]
    fn object_preserves_entry_order() {
        let value = Json::object(vec![
            ("zulu".to_owned(), json!(1)),
            ("alfa".to_owned(), json!(2)),
        ]);
        let keys: Vec<_> = value.as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys, ["zulu", "alfa"]);
    }

    #[test]
    fn bytes_degrade_to_base64_under_scalar_conversion() {
        let value = Json::scalar(&Variant::Bytes(b"test".to_vec())).unwrap();
        assert_eq!(value, json!("dGVzdA=="));
    }

    #[test]
    fn to_variant_is_lenient_on_numbers() {
        assert_eq!(Json::to_variant(&json!(7)).as_int(), Some(7));
        assert_eq!(Json::to_variant(&json!(7.25)).as_float(), Some(7.25));
        assert!(Json::to_variant(&json!({"a": 1})).is_unset());
    }
}
