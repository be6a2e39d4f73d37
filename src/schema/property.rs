use crate::config::Configuration;
use crate::error::Error;
use crate::schema::Kind;
use crate::serializable::Codec;
use crate::variant::Variant;

type JsonValue = serde_json::Value;
type CborValue = ciborium::value::Value;

// -----------------------------------------------------------------------------
// Adapter

/// Optional per-representation override functions of one property.
///
/// A registered encode or decode function fully replaces the default codec
/// path for that property and direction.
pub(crate) struct Adapter<T, V> {
    pub(crate) encode: Option<fn(&T, &Configuration) -> Result<Option<V>, Error>>,
    pub(crate) decode: Option<fn(&mut T, &V, &Configuration) -> Result<(), Error>>,
}

impl<T, V> Adapter<T, V> {
    pub(crate) const NONE: Self = Self {
        encode: None,
        decode: None,
    };
}

// -----------------------------------------------------------------------------
// Access

/// How the engine reaches a property's value.
pub(crate) enum Access<T> {
    /// Plain value access through getter and setter functions.
    Value {
        get: fn(&T) -> Variant,
        set: fn(&mut T, Variant) -> bool,
    },
    /// The property is itself a serializable object; the engine recurses
    /// through these instance-bound projections instead of converting.
    Nested {
        get: fn(&T) -> &dyn Codec,
        get_mut: fn(&mut T) -> &mut dyn Codec,
    },
}

// -----------------------------------------------------------------------------
// Property

/// Descriptor of one serializable property of `T`.
///
/// Descriptors are `const`-constructible; a type's descriptors live in a
/// `static` table whose order defines encode/decode iteration order.
///
/// # Examples
///
/// ```
/// use tagtree::{Kind, Property, Variant};
///
/// struct Counter {
///     count: i64,
/// }
///
/// static COUNT: Property<Counter> = Property::value(
///     "count",
///     &Kind::Scalar,
///     |counter| Variant::Int(counter.count),
///     |counter, value| match value {
///         Variant::Int(count) => {
///             counter.count = count;
///             true
///         }
///         _ => false,
///     },
/// );
///
/// assert_eq!(COUNT.name(), "count");
/// assert!(COUNT.persisted());
/// ```
pub struct Property<T> {
    name: &'static str,
    kind: &'static Kind,
    persisted: bool,
    access: Access<T>,
    json_adapter: Adapter<T, JsonValue>,
    cbor_adapter: Adapter<T, CborValue>,
}

impl<T> Property<T> {
    /// Creates a descriptor with plain value access.
    ///
    /// The getter snapshots the property into a [`Variant`]
    /// ([`Variant::Unset`] omits the key on encode); the setter writes a
    /// decoded [`Variant`] back and returns whether the write was accepted.
    pub const fn value(
        name: &'static str,
        kind: &'static Kind,
        get: fn(&T) -> Variant,
        set: fn(&mut T, Variant) -> bool,
    ) -> Self {
        Self {
            name,
            kind,
            persisted: true,
            access: Access::Value { get, set },
            json_adapter: Adapter::NONE,
            cbor_adapter: Adapter::NONE,
        }
    }

    /// Creates a descriptor for a property that is itself a serializable
    /// object.
    ///
    /// Encode and decode recurse through the projected [`Codec`] with the
    /// same configuration; nested failures propagate unchanged.
    pub const fn nested(
        name: &'static str,
        get: fn(&T) -> &dyn Codec,
        get_mut: fn(&mut T) -> &mut dyn Codec,
    ) -> Self {
        Self {
            name,
            kind: &Kind::Scalar,
            persisted: true,
            access: Access::Nested { get, get_mut },
            json_adapter: Adapter::NONE,
            cbor_adapter: Adapter::NONE,
        }
    }

    /// Marks the property as not persisted.
    ///
    /// Transient properties are skipped in both directions unless the
    /// configuration sets
    /// [`ignore_persisted`](crate::Configuration::ignore_persisted).
    pub const fn transient(mut self) -> Self {
        self.persisted = false;
        self
    }

    /// Registers a textual-representation encode override.
    ///
    /// The override always runs and always answers for the property:
    /// `Ok(None)` means "explicitly undefined" and omits the key, and errors
    /// propagate without falling back to the default path.
    pub const fn with_json_encoder(
        mut self,
        encode: fn(&T, &Configuration) -> Result<Option<JsonValue>, Error>,
    ) -> Self {
        self.json_adapter.encode = Some(encode);
        self
    }

    /// Registers a textual-representation decode override.
    pub const fn with_json_decoder(
        mut self,
        decode: fn(&mut T, &JsonValue, &Configuration) -> Result<(), Error>,
    ) -> Self {
        self.json_adapter.decode = Some(decode);
        self
    }

    /// Registers a binary-representation encode override.
    ///
    /// `Ok(None)` omits the key, like the textual variant.
    pub const fn with_cbor_encoder(
        mut self,
        encode: fn(&T, &Configuration) -> Result<Option<CborValue>, Error>,
    ) -> Self {
        self.cbor_adapter.encode = Some(encode);
        self
    }

    /// Registers a binary-representation decode override.
    pub const fn with_cbor_decoder(
        mut self,
        decode: fn(&mut T, &CborValue, &Configuration) -> Result<(), Error>,
    ) -> Self {
        self.cbor_adapter.decode = Some(decode);
        self
    }

    /// Returns the property name, the key used in both representations.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the property's codec dispatch class.
    #[inline]
    pub const fn kind(&self) -> &'static Kind {
        self.kind
    }

    /// Returns `false` for transient properties.
    #[inline]
    pub const fn persisted(&self) -> bool {
        self.persisted
    }

    #[inline]
    pub(crate) const fn access(&self) -> &Access<T> {
        &self.access
    }

    #[inline]
    pub(crate) const fn json_adapter(&self) -> &Adapter<T, JsonValue> {
        &self.json_adapter
    }

    #[inline]
    pub(crate) const fn cbor_adapter(&self) -> &Adapter<T, CborValue> {
        &self.cbor_adapter
    }
}

// -----------------------------------------------------------------------------
// Schema

/// The ordered property schema of one object type.
///
/// Properties before `offset` belong to a shared base type and are skipped
/// entirely, in both directions and by validation.
pub struct Schema<T: 'static> {
    type_name: &'static str,
    offset: usize,
    properties: &'static [Property<T>],
}

impl<T> Schema<T> {
    /// Creates a schema with no offset.
    #[inline]
    pub const fn new(type_name: &'static str, properties: &'static [Property<T>]) -> Self {
        Self {
            type_name,
            offset: 0,
            properties,
        }
    }

    /// Returns the schema with the starting offset replaced.
    #[inline]
    pub const fn with_offset(mut self, offset: usize) -> Self {
        self.offset = offset;
        self
    }

    /// Returns the object type's name, used in validation failures.
    #[inline]
    pub const fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Returns the starting offset.
    #[inline]
    pub const fn offset(&self) -> usize {
        self.offset
    }

    /// Returns every declared property, including those before the offset.
    #[inline]
    pub const fn properties(&self) -> &'static [Property<T>] {
        self.properties
    }

    /// Returns the properties the engine walks: those at or after the
    /// offset.
    #[inline]
    pub fn own_properties(&self) -> &'static [Property<T>] {
        &self.properties[self.offset.min(self.properties.len())..]
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::{Property, Schema};
    use crate::schema::Kind;
    use crate::variant::Variant;

    struct Pair {
        left: i64,
        right: i64,
    }

    static PROPERTIES: [Property<Pair>; 2] = [
        Property::value(
            "left",
            &Kind::Scalar,
            |pair| Variant::Int(pair.left),
            |pair, value| match value {
                Variant::Int(left) => {
                    pair.left = left;
                    true
                }
                _ => false,
            },
        ),
        Property::value(
            "right",
            &Kind::Scalar,
            |pair: &Pair| Variant::Int(pair.right),
            |pair, value| match value {
                Variant::Int(right) => {
                    pair.right = right;
                    true
                }
                _ => false,
            },
        )
        .transient(),
    ];

    #[test]
    fn offset_excludes_leading_properties() {
        static SCHEMA: Schema<Pair> = Schema::new("Pair", &PROPERTIES).with_offset(1);
        assert_eq!(SCHEMA.properties().len(), 2);
        assert_eq!(SCHEMA.own_properties().len(), 1);
        assert_eq!(SCHEMA.own_properties()[0].name(), "right");
    }

    #[test]
    fn oversized_offset_walks_nothing() {
        static SCHEMA: Schema<Pair> = Schema::new("Pair", &PROPERTIES).with_offset(9);
        assert!(SCHEMA.own_properties().is_empty());
    }

    #[test]
    fn transient_builder_clears_persisted() {
        assert!(PROPERTIES[0].persisted());
        assert!(!PROPERTIES[1].persisted());
    }
}
