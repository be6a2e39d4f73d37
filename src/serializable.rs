//! The object codec contract and the schema provider trait behind it.

use crate::config::Configuration;
use crate::engine;
use crate::error::Error;
use crate::format::{Cbor, Json};
use crate::schema::Schema;

// -----------------------------------------------------------------------------
// Serializable

/// A type with an explicit property schema.
///
/// Implementing `Serializable` is the only opt-in: the [`Codec`] contract is
/// provided for every implementor through a blanket impl. The schema is an
/// ordered descriptor table, typically a `static` inside the impl:
///
/// ```
/// use tagtree::{Kind, Property, Schema, Serializable, Variant};
///
/// #[derive(Default)]
/// struct Marker {
///     id: i64,
/// }
///
/// impl Serializable for Marker {
///     fn schema() -> &'static Schema<Self> {
///         static PROPERTIES: [Property<Marker>; 1] = [Property::value(
///             "id",
///             &Kind::Scalar,
///             |marker| Variant::Int(marker.id),
///             |marker, value| match value {
///                 Variant::Int(id) => {
///                     marker.id = id;
///                     true
///                 }
///                 _ => false,
///             },
///         )];
///         static SCHEMA: Schema<Marker> = Schema::new("Marker", &PROPERTIES);
///         &SCHEMA
///     }
/// }
/// ```
pub trait Serializable: Sized + 'static {
    /// The property schema driving encode and decode for this type.
    fn schema() -> &'static Schema<Self>;
}

// -----------------------------------------------------------------------------
// Codec

/// The object codec contract: both representations, both directions.
///
/// Blanket-implemented for every [`Serializable`] type and object safe, so
/// nested properties can be projected as `&dyn Codec`.
///
/// Encoding walks the schema and produces the Object/Map-shaped root value.
/// Decoding mutates `self` in place, property by property, and is **not**
/// transactional: when it fails midway, properties walked before the
/// failure keep their decoded values. Concurrent decodes into the same
/// object must be serialized by the caller.
pub trait Codec {
    /// Encodes `self` into the textual representation.
    fn to_json(&self, config: &Configuration) -> Result<serde_json::Value, Error>;

    /// Decodes the textual representation into `self`.
    ///
    /// Fails with [`Error::InvalidValueType`] before touching `self` when
    /// `value` is not Object-shaped.
    fn apply_json(&mut self, value: &serde_json::Value, config: &Configuration)
    -> Result<(), Error>;

    /// Encodes `self` into the binary representation.
    fn to_cbor(&self, config: &Configuration) -> Result<ciborium::value::Value, Error>;

    /// Decodes the binary representation into `self`.
    ///
    /// Fails with [`Error::InvalidValueType`] before touching `self` when
    /// `value` is not Map-shaped.
    fn apply_cbor(
        &mut self,
        value: &ciborium::value::Value,
        config: &Configuration,
    ) -> Result<(), Error>;
}

impl<T: Serializable> Codec for T {
    fn to_json(&self, config: &Configuration) -> Result<serde_json::Value, Error> {
        engine::serialize::<Json, T>(self, config)
    }

    fn apply_json(
        &mut self,
        value: &serde_json::Value,
        config: &Configuration,
    ) -> Result<(), Error> {
        engine::deserialize::<Json, T>(self, value, config)
    }

    fn to_cbor(&self, config: &Configuration) -> Result<ciborium::value::Value, Error> {
        engine::serialize::<Cbor, T>(self, config)
    }

    fn apply_cbor(
        &mut self,
        value: &ciborium::value::Value,
        config: &Configuration,
    ) -> Result<(), Error> {
        engine::deserialize::<Cbor, T>(self, value, config)
    }
}
