//! The encode walker.

use crate::codec::{bytes, collections, enums};
use crate::config::Configuration;
use crate::error::Error;
use crate::format::Format;
use crate::schema::{Access, Kind};
use crate::serializable::Serializable;
use crate::variant::Variant;

/// Walks `value`'s schema and assembles the Object/Map-shaped root.
pub(crate) fn serialize<F: Format, T: Serializable>(
    value: &T,
    config: &Configuration,
) -> Result<F::Value, Error> {
    let schema = T::schema();
    let mut entries = Vec::new();

    for property in schema.own_properties() {
        if !config.ignore_persisted && !property.persisted() {
            continue;
        }

        // A registered adapter replaces the default path entirely; its
        // explicitly-undefined result (None) omits the key.
        if let Some(encode) = F::adapter(property).encode {
            if let Some(encoded) = encode(value, config)? {
                entries.push((property.name().to_owned(), encoded));
            }
            continue;
        }

        let encoded = match property.access() {
            Access::Nested { get, .. } => Some(F::encode_nested(get(value), config)?),
            Access::Value { get, .. } => {
                let variant = get(value);
                if variant.is_unset() {
                    log::trace!(
                        "`{}::{}` is unset, omitting",
                        schema.type_name(),
                        property.name(),
                    );
                    None
                } else {
                    Some(encode_value::<F>(&variant, property.kind(), config)?)
                }
            }
        };
        if let Some(encoded) = encoded {
            entries.push((property.name().to_owned(), encoded));
        }
    }

    Ok(F::object(entries))
}

/// Dispatches one runtime value to the leaf codec its kind selects.
pub(crate) fn encode_value<F: Format>(
    variant: &Variant,
    kind: &Kind,
    config: &Configuration,
) -> Result<F::Value, Error> {
    match (variant, kind) {
        (variant, Kind::Enum(table)) => enums::encode::<F>(variant, table, config),
        (Variant::Bytes(data), Kind::Bytes) => {
            Ok(bytes::encode::<F>(data, config.byte_array_mode))
        }
        (Variant::List(items), kind) => {
            let (element, set) = element_kind(kind);
            collections::encode::<F, _>(items, set, |item| {
                encode_value::<F>(item, element, config)
            })
        }
        (Variant::Opaque(element), Kind::Element(codec)) => {
            F::encode_element(codec, element.as_ref(), config)
        }
        (variant, _) => Ok(F::scalar(variant).unwrap_or_else(F::null)),
    }
}

/// Splits a collection kind into its element kind and set-ness.
const fn element_kind(kind: &Kind) -> (&Kind, bool) {
    match kind {
        Kind::List(element) => (element, false),
        Kind::Set(element) => (element, true),
        _ => (&Kind::Scalar, false),
    }
}
