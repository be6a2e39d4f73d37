//! The serialization and deserialization engines.
//!
//! Both walkers iterate a type's [`Schema`](crate::Schema) and dispatch each
//! property to an adapter override, a nested object codec, or a leaf codec
//! from [`codec`](crate::codec). The decode walker additionally enforces the
//! configured [`ValidationFlags`](crate::ValidationFlags).

mod de;
mod ser;

pub(crate) use de::deserialize;
pub(crate) use ser::serialize;

// -----------------------------------------------------------------------------
// Tests
