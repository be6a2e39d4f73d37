//! The decode walker and its validation bookkeeping.

use crate::codec::{bytes, collections, enums};
use crate::config::{Configuration, ValidationFlags};
use crate::error::Error;
use crate::format::Format;
use crate::schema::{Access, Kind};
use crate::serializable::Serializable;
use crate::variant::Variant;

/// Walks `target`'s schema over the incoming Object/Map-shaped value,
/// mutating `target` property by property.
///
/// Not transactional: a failure partway leaves earlier properties assigned.
pub(crate) fn deserialize<F: Format, T: Serializable>(
    target: &mut T,
    value: &F::Value,
    config: &Configuration,
) -> Result<(), Error> {
    let schema = T::schema();
    let entries = F::as_object(value).ok_or_else(|| Error::InvalidValueType {
        actual: F::kind_of(value),
        expected: F::ROOT_EXPECTED,
    })?;

    // Strict-extra validation tracks every incoming key and reports the
    // unconsumed residue at the end, batched.
    let mut residual: Vec<String> = if config.validation.contains(ValidationFlags::NO_EXTRA) {
        entries.iter().map(|(key, _)| key.clone()).collect()
    } else {
        Vec::new()
    };

    for property in schema.own_properties() {
        if !config.ignore_persisted && !property.persisted() {
            continue;
        }

        let incoming = entries
            .iter()
            .find(|(key, _)| key.as_str() == property.name())
            .map(|(_, value)| *value);
        let Some(incoming) = incoming else {
            if config.validation.contains(ValidationFlags::NO_MISSING) {
                return Err(Error::MissingProperty {
                    type_name: schema.type_name(),
                    property: property.name(),
                });
            }
            log::trace!(
                "no incoming value for `{}::{}`, keeping current",
                schema.type_name(),
                property.name(),
            );
            continue;
        };

        if let Some(decode) = F::adapter(property).decode {
            decode(target, incoming, config)?;
        } else {
            match property.access() {
                Access::Nested { get_mut, .. } => {
                    F::decode_nested(get_mut(target), incoming, config)?;
                }
                Access::Value { set, .. } => {
                    let variant =
                        decode_value::<F>(incoming, property.kind(), config, property.name())?;
                    if !set(target, variant) {
                        return Err(Error::InvalidPropertyValue {
                            property: property.name(),
                            value: format!("{incoming:?}"),
                        });
                    }
                }
            }
        }

        residual.retain(|key| key.as_str() != property.name());
    }

    if !residual.is_empty() {
        return Err(Error::ExtraProperties {
            type_name: schema.type_name(),
            keys: residual,
        });
    }
    Ok(())
}

/// Dispatches one incoming value to the leaf codec its kind selects.
///
/// `property` only feeds error reporting; collection elements report under
/// their collection's property name.
pub(crate) fn decode_value<F: Format>(
    value: &F::Value,
    kind: &Kind,
    config: &Configuration,
    property: &'static str,
) -> Result<Variant, Error> {
    match kind {
        Kind::Scalar => Ok(F::to_variant(value)),
        Kind::Enum(table) => enums::decode::<F>(value, table, property),
        Kind::Bytes => bytes::decode::<F>(value, config.byte_array_mode).map(Variant::Bytes),
        Kind::List(element) | Kind::Set(element) => collections::decode::<F, _>(value, |item| {
            decode_value::<F>(item, element, config, property)
        })
        .map(Variant::List),
        Kind::Element(codec) => F::decode_element(codec, value, config).map(Variant::Opaque),
    }
}
