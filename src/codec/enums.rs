//! Enum codec: integers by default, name strings on request.

use crate::config::Configuration;
use crate::error::{Error, ValueKind};
use crate::format::Format;
use crate::schema::EnumTable;
use crate::variant::Variant;

/// Separator joining and splitting flag names, matching the table's `|`
/// notation.
const FLAG_SEPARATOR: char = '|';

// -----------------------------------------------------------------------------
// Encode

/// Encodes an enum-valued property.
pub(crate) fn encode<F: Format>(
    variant: &Variant,
    table: &EnumTable,
    config: &Configuration,
) -> Result<F::Value, Error> {
    let value = variant.as_int().unwrap_or(0);
    if !config.enum_as_string {
        return Ok(F::integer(value));
    }

    if table.is_flag() {
        Ok(F::string(keys_for(table, value)))
    } else {
        match table.key_of(value) {
            Some(key) => Ok(F::string(key.to_owned())),
            None => Err(Error::UnknownEnumValue {
                enumeration: table.name(),
                value,
            }),
        }
    }
}

/// Joins the names of all bits of `mask` covered by the table.
///
/// A zero mask yields the empty string; bits no entry covers are dropped.
fn keys_for(table: &EnumTable, mask: i64) -> String {
    let mut keys = String::new();
    for (name, value) in table.entries() {
        if *value != 0 && mask & value == *value {
            if !keys.is_empty() {
                keys.push(FLAG_SEPARATOR);
            }
            keys.push_str(name);
        }
    }
    keys
}

// -----------------------------------------------------------------------------
// Decode

/// Decodes an enum-valued property from a name string or an integer.
pub(crate) fn decode<F: Format>(
    value: &F::Value,
    table: &EnumTable,
    property: &'static str,
) -> Result<Variant, Error> {
    if let Some(text) = F::as_str(value) {
        let decoded = if table.is_flag() {
            value_for(table, text)
        } else {
            table.value_of(text)
        };
        return match decoded {
            Some(decoded) => Ok(Variant::Int(decoded)),
            None => Err(Error::InvalidPropertyValue {
                property,
                value: format!("{text:?}"),
            }),
        };
    }

    if let Some(integer) = F::as_integer(value) {
        // Enum storage is a 32-bit signed integer in both representations.
        return if i32::try_from(integer).is_ok() {
            Ok(Variant::Int(integer))
        } else {
            Err(Error::InvalidPropertyValue {
                property,
                value: integer.to_string(),
            })
        };
    }

    Err(Error::InvalidValueType {
        actual: F::kind_of(value),
        expected: &[ValueKind::String, ValueKind::Integer],
    })
}

/// ORs the named bits of a `|`-joined key list back together.
///
/// The empty string decodes to zero; an unknown name fails the whole list.
fn value_for(table: &EnumTable, keys: &str) -> Option<i64> {
    if keys.is_empty() {
        return Some(0);
    }
    let mut mask = 0;
    for key in keys.split(FLAG_SEPARATOR) {
        mask |= table.value_of(key.trim())?;
    }
    Some(mask)
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use serde_json::{Value, json};

    use super::{decode, encode};
    use crate::config::Configuration;
    use crate::error::{Error, ValueKind};
    use crate::format::{Cbor, Json};
    use crate::schema::EnumTable;
    use crate::variant::Variant;

    static LEVEL: EnumTable = EnumTable::new("Level", &[("Low", 0), ("Mid", 1), ("High", 2)]);
    static ACCESS: EnumTable =
        EnumTable::flags("Access", &[("Read", 1), ("Write", 2), ("Exec", 4)]);

    fn as_string() -> Configuration {
        Configuration::new().with_enum_as_string(true)
    }

    #[test]
    fn integer_encoding_is_the_default() {
        let value = encode::<Json>(&Variant::Int(2), &LEVEL, &Configuration::new()).unwrap();
        assert_eq!(value, json!(2));
    }

    #[test]
    fn name_encoding_on_request() {
        let value = encode::<Json>(&Variant::Int(2), &LEVEL, &as_string()).unwrap();
        assert_eq!(value, json!("High"));
    }

    #[test]
    fn unnamed_value_fails_name_encoding() {
        let error = encode::<Json>(&Variant::Int(9), &LEVEL, &as_string()).unwrap_err();
        assert!(matches!(
            error,
            Error::UnknownEnumValue {
                enumeration: "Level",
                value: 9,
            },
        ));
    }

    #[test]
    fn flag_masks_join_and_split() {
        let value = encode::<Json>(&Variant::Int(5), &ACCESS, &as_string()).unwrap();
        assert_eq!(value, json!("Read|Exec"));

        let decoded = decode::<Json>(&json!("Read|Exec"), &ACCESS, "access").unwrap();
        assert_eq!(decoded.as_int(), Some(5));

        // Name order does not matter on the way back in.
        let decoded = decode::<Json>(&json!("Exec|Read"), &ACCESS, "access").unwrap();
        assert_eq!(decoded.as_int(), Some(5));
    }

    #[test]
    fn empty_flag_mask_is_the_empty_string() {
        let value = encode::<Json>(&Variant::Int(0), &ACCESS, &as_string()).unwrap();
        assert_eq!(value, json!(""));

        let decoded = decode::<Json>(&json!(""), &ACCESS, "access").unwrap();
        assert_eq!(decoded.as_int(), Some(0));
    }

    #[test]
    fn unknown_name_is_a_content_error() {
        let error = decode::<Json>(&json!("Admin"), &ACCESS, "access").unwrap_err();
        assert!(matches!(
            error,
            Error::InvalidPropertyValue {
                property: "access",
                ..
            },
        ));
    }

    #[test]
    fn integers_decode_in_both_representations() {
        let decoded = decode::<Json>(&json!(1), &LEVEL, "level").unwrap();
        assert_eq!(decoded.as_int(), Some(1));

        let value = ciborium::value::Value::Integer(2.into());
        let decoded = decode::<Cbor>(&value, &LEVEL, "level").unwrap();
        assert_eq!(decoded.as_int(), Some(2));
    }

    #[test]
    fn integral_doubles_decode_textually() {
        let decoded = decode::<Json>(&json!(2.0), &LEVEL, "level").unwrap();
        assert_eq!(decoded.as_int(), Some(2));
    }

    #[test]
    fn out_of_range_integer_is_a_content_error() {
        let error = decode::<Json>(&json!(i64::from(i32::MAX) + 1), &LEVEL, "level").unwrap_err();
        assert!(matches!(error, Error::InvalidPropertyValue { .. }));
    }

    #[test]
    fn other_shapes_are_rejected_with_the_expected_set() {
        let error = decode::<Json>(&Value::Bool(true), &LEVEL, "level").unwrap_err();
        assert!(matches!(
            error,
            Error::InvalidValueType {
                actual: ValueKind::Bool,
                expected: &[ValueKind::String, ValueKind::Integer],
            },
        ));
    }
}
