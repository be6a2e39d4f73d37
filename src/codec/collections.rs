//! Collection codec: arrays, with binary-only container tags.

use crate::error::{Error, ValueKind};
use crate::format::{Format, cbor};
use crate::variant::Variant;

/// Encodes a collection as an element-encoded array.
///
/// Element order is the container's iteration order. In the binary
/// representation the array is wrapped in the finite-set tag for unordered
/// unique-element containers and in the homogeneous-array tag otherwise;
/// the textual representation carries the bare array.
pub(crate) fn encode<F, E>(items: &[Variant], set: bool, mut element: E) -> Result<F::Value, Error>
where
    F: Format,
    E: FnMut(&Variant) -> Result<F::Value, Error>,
{
    let mut values = Vec::with_capacity(items.len());
    for item in items {
        values.push(element(item)?);
    }
    let tag = if set {
        cbor::TAG_FINITE_SET
    } else {
        cbor::TAG_HOMOGENEOUS_ARRAY
    };
    Ok(F::tagged(tag, F::array(values)))
}

/// Decodes a collection from any Array-shaped value.
///
/// Container tags are informational only: a correctly tagged, untagged, or
/// even mismatched-tag array all decode. Only a non-Array shape fails, with
/// [`Error::InvalidValueType`]. Elements decode independently through
/// `element`.
pub(crate) fn decode<F, E>(value: &F::Value, mut element: E) -> Result<Vec<Variant>, Error>
where
    F: Format,
    E: FnMut(&F::Value) -> Result<Variant, Error>,
{
    let items = F::as_array(F::untagged(value)).ok_or_else(|| Error::InvalidValueType {
        actual: F::kind_of(value),
        expected: &[ValueKind::Array],
    })?;
    items.iter().map(&mut element).collect()
}

// -----------------------------------------------------------------------------
// Tests
