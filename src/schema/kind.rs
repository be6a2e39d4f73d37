use std::any::{self, Any};

use crate::config::Configuration;
use crate::error::Error;
use crate::schema::EnumTable;
use crate::serializable::{Codec, Serializable};

// -----------------------------------------------------------------------------
// Kind

/// The codec dispatch class of a property or collection element.
///
/// A `Kind` selects which leaf codec converts a value; it is metadata only
/// and never touches the object. References nest, so collection kinds are
/// written inline: `Kind::List(&Kind::Scalar)`, `Kind::Set(&Kind::Bytes)`,
/// `Kind::List(&Kind::List(&Kind::Scalar))`.
#[derive(Debug, Clone, Copy)]
pub enum Kind {
    /// Default scalar conversion between the runtime value and the
    /// representation.
    Scalar,
    /// Integer-backed enumeration, converted through its name table.
    Enum(&'static EnumTable),
    /// Raw byte sequence, encoded per the configured byte-array mode.
    Bytes,
    /// Ordered homogeneous collection of the given element kind.
    List(&'static Kind),
    /// Unordered unique-element collection of the given element kind.
    Set(&'static Kind),
    /// Collection element that is itself a serializable object.
    ///
    /// The engine moves such elements around as boxed opaque values; the
    /// [`ElementCodec`] recurses into the element's own schema.
    Element(&'static ElementCodec),
}

// -----------------------------------------------------------------------------
// ElementCodec

/// Type-erased object codec for collection elements.
///
/// Collections of serializable elements cannot borrow their elements into
/// the engine the way nested properties do, so elements travel as
/// [`Variant::Opaque`](crate::Variant::Opaque) boxes and this vtable bridges
/// them back to the element type's own codec.
///
/// # Examples
///
/// ```
/// use tagtree::{ElementCodec, Kind};
/// # use tagtree::{Property, Schema, Serializable};
/// # #[derive(Default, Clone)]
/// # struct Point;
/// # impl Serializable for Point {
/// #     fn schema() -> &'static Schema<Self> {
/// #         static PROPERTIES: [Property<Point>; 0] = [];
/// #         static SCHEMA: Schema<Point> = Schema::new("Point", &PROPERTIES);
/// #         &SCHEMA
/// #     }
/// # }
///
/// static POINT: ElementCodec = ElementCodec::of::<Point>();
/// static POINTS: Kind = Kind::List(&Kind::Element(&POINT));
/// ```
#[derive(Debug)]
pub struct ElementCodec {
    // The name is created on first access; a function pointer delays it.
    type_name: fn() -> &'static str,
    pub(crate) to_json: fn(&dyn Any, &Configuration) -> Result<serde_json::Value, Error>,
    pub(crate) from_json: fn(&serde_json::Value, &Configuration) -> Result<Box<dyn Any>, Error>,
    pub(crate) to_cbor: fn(&dyn Any, &Configuration) -> Result<ciborium::value::Value, Error>,
    pub(crate) from_cbor: fn(&ciborium::value::Value, &Configuration) -> Result<Box<dyn Any>, Error>,
}

impl ElementCodec {
    /// Creates the codec for elements of type `T`.
    ///
    /// Decoded elements are constructed with `T::default()` before their
    /// incoming value is applied.
    ///
    /// # Panics
    ///
    /// The returned codec panics when asked to encode a boxed element whose
    /// concrete type is not `T`; that is a schema registration bug, not a
    /// data error.
    pub const fn of<T: Serializable + Default>() -> Self {
        Self {
            type_name: any::type_name::<T>,
            to_json: element_to_json::<T>,
            from_json: element_from_json::<T>,
            to_cbor: element_to_cbor::<T>,
            from_cbor: element_from_cbor::<T>,
        }
    }

    /// Returns the element type's name.
    #[inline]
    pub fn type_name(&self) -> &'static str {
        (self.type_name)()
    }
}

fn expect_element<T: Serializable>(element: &dyn Any) -> &T {
    element.downcast_ref::<T>().unwrap_or_else(|| {
        panic!(
            "element codec for `{}` received a value of a different type",
            any::type_name::<T>(),
        )
    })
}

fn element_to_json<T: Serializable>(
    element: &dyn Any,
    config: &Configuration,
) -> Result<serde_json::Value, Error> {
    expect_element::<T>(element).to_json(config)
}

fn element_from_json<T: Serializable + Default>(
    value: &serde_json::Value,
    config: &Configuration,
) -> Result<Box<dyn Any>, Error> {
    let mut element = T::default();
    element.apply_json(value, config)?;
    Ok(Box::new(element))
}

fn element_to_cbor<T: Serializable>(
    element: &dyn Any,
    config: &Configuration,
) -> Result<ciborium::value::Value, Error> {
    expect_element::<T>(element).to_cbor(config)
}

fn element_from_cbor<T: Serializable + Default>(
    value: &ciborium::value::Value,
    config: &Configuration,
) -> Result<Box<dyn Any>, Error> {
    let mut element = T::default();
    element.apply_cbor(value, config)?;
    Ok(Box::new(element))
}
