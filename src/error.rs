//! Error taxonomy of the codec engine.

use std::{error, fmt};

// -----------------------------------------------------------------------------
// ValueKind

/// The shapes a tagged value can take, used in error reporting.
///
/// Both representations classify into this one enumeration; `Object` is the
/// textual root shape, `Map` the binary one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Null,
    Bool,
    Integer,
    Double,
    String,
    /// Raw byte string (binary representation only).
    Bytes,
    Array,
    Object,
    Map,
    /// Semantic tag wrapper (binary representation only).
    Tag,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Null => "null",
            Self::Bool => "bool",
            Self::Integer => "integer",
            Self::Double => "double",
            Self::String => "string",
            Self::Bytes => "bytes",
            Self::Array => "array",
            Self::Object => "object",
            Self::Map => "map",
            Self::Tag => "tag",
        };
        f.write_str(name)
    }
}

// -----------------------------------------------------------------------------
// Error

/// An enumeration of all error outcomes of encoding or decoding an object.
///
/// Every failure is raised at the point of detection and unwinds to the
/// top-level call; decoding is not transactional, so properties walked
/// before the failing one keep their decoded values.
#[derive(Debug)]
pub enum Error {
    /// The incoming value's shape is not one of the shapes the current codec
    /// step accepts.
    InvalidValueType {
        actual: ValueKind,
        expected: &'static [ValueKind],
    },
    /// The shape was acceptable but the content could not be converted, or
    /// the target object rejected the converted value.
    InvalidPropertyValue {
        property: &'static str,
        value: String,
    },
    /// Strict decode (`NO_MISSING`) found no incoming value for a declared
    /// property.
    MissingProperty {
        type_name: &'static str,
        property: &'static str,
    },
    /// Strict decode (`NO_EXTRA`) found incoming keys no declared property
    /// consumes. Collected over the whole map, not one at a time.
    ExtraProperties {
        type_name: &'static str,
        keys: Vec<String>,
    },
    /// No name in the enum's table matches the value being encoded.
    ///
    /// Only reachable when encoding a non-flag enum as a string.
    UnknownEnumValue {
        enumeration: &'static str,
        value: i64,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidValueType { actual, expected } => {
                write!(f, "invalid value shape `{actual}`, expected ")?;
                write_list(f, expected.iter())
            }
            Self::InvalidPropertyValue { property, value } => {
                write!(f, "invalid value for property `{property}`: {value}")
            }
            Self::MissingProperty {
                type_name,
                property,
            } => {
                write!(f, "missing required property `{type_name}::{property}`")
            }
            Self::ExtraProperties { type_name, keys } => {
                write!(f, "`{type_name}` does not declare the propert")?;
                f.write_str(if keys.len() == 1 { "y " } else { "ies " })?;
                write_list(f, keys.iter())
            }
            Self::UnknownEnumValue { enumeration, value } => {
                write!(f, "no name in enum `{enumeration}` matches value `{value}`")
            }
        }
    }
}

impl error::Error for Error {}

/// Writes `items` as a backtick-quoted, `|`-separated list.
fn write_list<I>(f: &mut fmt::Formatter<'_>, items: I) -> fmt::Result
where
    I: Iterator,
    I::Item: fmt::Display,
{
    for (index, item) in items.enumerate() {
        if index > 0 {
            f.write_str("|")?;
        }
        write!(f, "`{item}`")?;
    }
    Ok(())
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::{Error, ValueKind};

    #[test]
    fn invalid_value_type_lists_expected_shapes() {
        let error = Error::InvalidValueType {
            actual: ValueKind::Double,
            expected: &[ValueKind::String, ValueKind::Integer],
        };
        assert_eq!(
            error.to_string(),
            "invalid value shape `double`, expected `string`|`integer`",
        );
    }

    #[test]
    fn extra_properties_pluralizes() {
        let one = Error::ExtraProperties {
            type_name: "Sensor",
            keys: vec!["zone".to_owned()],
        };
        assert_eq!(
            one.to_string(),
            "`Sensor` does not declare the property `zone`",
        );

        let two = Error::ExtraProperties {
            type_name: "Sensor",
            keys: vec!["zone".to_owned(), "rate".to_owned()],
        };
        assert_eq!(
            two.to_string(),
            "`Sensor` does not declare the properties `zone`|`rate`",
        );
    }
}
